//! Capabilities supplied by the caller.

use super::{ReionizationHistory, ReionizationModel, XePoint};

/// Integrates a configured reionization model.
///
/// Implementations read the model's mode, analytic parameters or table, and
/// its [`ReionizationConfig`](super::ReionizationConfig). In optical-depth
/// mode they are responsible for inverting the target optical depth for the
/// reionization redshift, and for rejecting physically implausible values.
pub trait ReionizationSolver {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Derives the reionization history of a model.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the model cannot be integrated.
    fn history<const MAX: usize>(
        &self,
        model: &ReionizationModel<MAX>,
    ) -> Result<ReionizationHistory, Self::Error>;

    /// Evaluates the free-electron fraction at a single point.
    ///
    /// Calls are independent of one another and must not rely on ordering.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if Xe cannot be evaluated at this point.
    fn xe<const MAX: usize>(
        &self,
        model: &ReionizationModel<MAX>,
        point: &XePoint,
    ) -> Result<f64, Self::Error>;
}

/// Fits a cubic smoothing spline and resamples it at the knots.
pub trait SmoothingSpline {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the fitted `y` values at each `x`.
    ///
    /// `x` is strictly ascending and `y` has the same length.
    /// Larger `strength` trades fidelity for smoothness.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the spline cannot be fitted.
    fn smooth(&self, x: &[f64], y: &[f64], strength: f64) -> Result<Vec<f64>, Self::Error>;
}
