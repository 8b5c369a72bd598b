//! Tabulated free-electron fraction, Xe(a).
//!
//! A table pairs scale factors with Xe values. The solver walks the table
//! from late to early times and relies on the scale factors being strictly
//! descending with no duplicates. Tables are validated once, at construction,
//! and are never edited in place.

use log::trace;
use thiserror::Error;

use crate::support::{
    constraint::{Constrained, NonNegative},
    cosmology::redshift_from_scale_factor,
};

use super::{Epochs, MAX_REIONIZATION_SAMPLES, ReionizationError, SmoothingSpline};

/// A validated, fixed-capacity table of `(a, Xe)` samples.
///
/// Scale factors are strictly descending, so when built from redshifts the
/// redshifts must be strictly ascending. Inputs are never re-sorted.
///
/// The capacity `MAX` must be at least 1.
/// This is enforced at compile time via const assertions.
///
/// ```compile_fail
/// # use twine_reionization::models::cosmology::reionization::{Epochs, ReionizationTable};
/// // This will fail to compile: MAX must be >= 1
/// let _ = ReionizationTable::<0>::new(&Epochs::ScaleFactors(vec![]), &[]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReionizationTable<const MAX: usize = MAX_REIONIZATION_SAMPLES> {
    scale_factors: Vec<f64>,
    xe: Vec<f64>,
}

impl<const MAX: usize> ReionizationTable<MAX> {
    /// Maximum number of samples the table can hold.
    pub const CAPACITY: usize = MAX;

    /// Builds a table from epochs and the Xe value at each epoch.
    ///
    /// Redshifts are converted with `a = 1 / (1 + z)`.
    ///
    /// # Errors
    ///
    /// - [`ReionizationError::CapacityExceeded`] if there are more than `MAX` epochs.
    /// - [`ReionizationError::InvalidArgument`] if `xe` and `epochs` differ in length.
    /// - [`ReionizationError::OrderingViolation`] if the scale factors are not
    ///   strictly descending.
    pub fn new(epochs: &Epochs, xe: &[f64]) -> Result<Self, ReionizationError> {
        const {
            assert!(MAX >= 1, "reionization table capacity must be at least 1");
        };

        let len = epochs.len();
        if len > MAX {
            return Err(ReionizationError::CapacityExceeded { len, max: MAX });
        }
        if xe.len() != len {
            return Err(ReionizationError::invalid(format!(
                "{} Xe values given for {len} epochs",
                xe.len()
            )));
        }

        let scale_factors = epochs.scale_factors();
        check_descending(&scale_factors)?;

        Ok(Self {
            scale_factors,
            xe: xe.to_vec(),
        })
    }

    /// Builds a table and smooths its Xe values.
    ///
    /// Validation is the same as [`ReionizationTable::new`]. The spline is then
    /// fitted in redshift, `z = 1 / a - 1`, whichever axis the epochs were
    /// given in, and its output replaces the Xe values. A zero strength skips
    /// the spline and keeps the input values exactly.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`ReionizationTable::new`], or
    /// [`ReionizationError::Smoothing`] if the spline fails or returns the
    /// wrong number of values.
    pub fn new_smoothed<S: SmoothingSpline>(
        epochs: &Epochs,
        xe: &[f64],
        strength: Constrained<f64, NonNegative>,
        spline: &S,
    ) -> Result<Self, ReionizationError> {
        let mut table = Self::new(epochs, xe)?;
        if !strength.is_zero() {
            table.xe = smooth(&table.scale_factors, &table.xe, strength.into_inner(), spline)?;
        }
        Ok(table)
    }

    /// Number of samples in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scale_factors.len()
    }

    /// Returns true if the table has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scale_factors.is_empty()
    }

    /// Scale factors, strictly descending.
    #[must_use]
    pub fn scale_factors(&self) -> &[f64] {
        &self.scale_factors
    }

    /// Xe values, index-aligned with [`ReionizationTable::scale_factors`].
    #[must_use]
    pub fn xe_values(&self) -> &[f64] {
        &self.xe
    }

    /// Iterates over `(a, xe)` pairs from latest to earliest time.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (f64, f64)> + ExactSizeIterator + '_ {
        self.scale_factors
            .iter()
            .copied()
            .zip(self.xe.iter().copied())
    }
}

fn check_descending(scale_factors: &[f64]) -> Result<(), ReionizationError> {
    for (index, pair) in scale_factors.windows(2).enumerate() {
        let [previous, current] = [pair[0], pair[1]];
        // Negated so a NaN on either side is reported too.
        if !(current < previous) {
            return Err(ReionizationError::OrderingViolation {
                index: index + 1,
                previous,
                current,
            });
        }
    }
    Ok(())
}

#[derive(Debug, Error)]
#[error("spline returned {got} values for {expected} knots")]
struct LengthMismatch {
    expected: usize,
    got: usize,
}

fn smooth<S: SmoothingSpline>(
    scale_factors: &[f64],
    xe: &[f64],
    strength: f64,
    spline: &S,
) -> Result<Vec<f64>, ReionizationError> {
    let z: Vec<f64> = scale_factors
        .iter()
        .copied()
        .map(redshift_from_scale_factor)
        .collect();

    trace!(
        "smoothing {} Xe samples over z in [{:?}, {:?}] with strength {strength}",
        z.len(),
        z.first(),
        z.last()
    );

    let smoothed = spline
        .smooth(&z, xe, strength)
        .map_err(|err| ReionizationError::smoothing_failed("spline fit in redshift", err))?;

    if smoothed.len() != xe.len() {
        return Err(ReionizationError::smoothing_failed(
            "spline resample",
            LengthMismatch {
                expected: xe.len(),
                got: smoothed.len(),
            },
        ));
    }

    Ok(smoothed)
}
