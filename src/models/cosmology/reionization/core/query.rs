use uom::{ConstZero, si::f64::Length};

use crate::support::cosmology::Epoch;

/// Optional hints passed along with an Xe query.
///
/// Some reionization algorithms find it convenient to know the conformal time
/// of the query point, or the ionization fraction left over from recombination.
/// Both default to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XeHints {
    /// Conformal time at the query point.
    pub tau: Length,

    /// Free-electron fraction at the start of reionization, from recombination.
    pub xe_recomb: f64,
}

impl Default for XeHints {
    fn default() -> Self {
        Self {
            tau: Length::ZERO,
            xe_recomb: 0.0,
        }
    }
}

/// A single Xe evaluation request as seen by the solver.
///
/// Redshift queries are converted to scale factor before they get here,
/// so both forms of the same epoch reach the solver identically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XePoint {
    /// Scale factor at which to evaluate Xe.
    pub a: f64,

    /// Conformal time at `a`.
    pub tau: Length,

    /// Starting Xe from recombination.
    pub xe_recomb: f64,
}

impl XePoint {
    /// Builds a query point for an epoch with the given hints.
    #[must_use]
    pub fn new(epoch: Epoch, hints: XeHints) -> Self {
        Self {
            a: epoch.scale_factor(),
            tau: hints.tau,
            xe_recomb: hints.xe_recomb,
        }
    }
}
