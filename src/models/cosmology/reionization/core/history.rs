//! Derived quantities produced by integrating a reionization model.

use uom::si::f64::Length;

/// Scalars derived by the solver from a configured reionization model.
///
/// The integrator uses these to window its treatment of the reionization era.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReionizationHistory {
    /// Conformal time at which reionization starts.
    pub tau_start: Length,

    /// Conformal time at which reionization completes.
    pub tau_complete: Length,

    /// Thomson scattering normalization, `sigma_T * n_H(today)` in Mpc⁻¹.
    pub akthom: f64,

    /// Helium to hydrogen number ratio.
    pub f_he: f64,

    /// Midpoint of the reionization window variable.
    pub window_var_mid: f64,

    /// Width of the reionization window variable.
    pub window_var_delta: f64,
}
