//! Reionization history of the intergalactic medium.
//!
//! A [`ReionizationModel`] selects how the free-electron fraction Xe(a)
//! evolves through reionization, either analytically from a target optical
//! depth or from a user-supplied [`ReionizationTable`]. Integration is left to
//! a caller-supplied [`ReionizationSolver`], and [`XeModel`] exposes point
//! evaluation as a [`twine_core::Model`].
//!
//! # Example
//!
//! ```
//! use twine_reionization::models::cosmology::reionization::{
//!     Epochs, ReionizationError, ReionizationMode, ReionizationModel,
//! };
//!
//! fn main() -> Result<(), ReionizationError> {
//!     let mut model: ReionizationModel = ReionizationModel::default();
//!     model.set_tau(0.06, None)?;
//!     assert!(model.use_optical_depth());
//!
//!     // Redshifts ascend, so scale factors descend.
//!     let epochs = Epochs::from_either(None, Some(vec![0.0, 6.0, 8.0, 12.0]))?;
//!     model.set_xe(&epochs, &[1.08, 1.0, 0.5, 0.0])?;
//!     assert_eq!(model.mode(), ReionizationMode::CustomTable);
//!     assert_eq!(model.optical_depth(), 0.0);
//!
//!     // Descending redshifts break the ordering and are rejected.
//!     let reversed = Epochs::Redshifts(vec![12.0, 8.0, 6.0, 0.0]);
//!     assert!(matches!(
//!         model.set_xe(&reversed, &[0.0, 0.5, 1.0, 1.08]),
//!         Err(ReionizationError::OrderingViolation { .. })
//!     ));
//!
//!     Ok(())
//! }
//! ```

mod core;

pub use self::core::{
    Epochs, MAX_REIONIZATION_SAMPLES, ReionizationConfig, ReionizationError, ReionizationHistory,
    ReionizationMode, ReionizationModel, ReionizationSolver, ReionizationTable, SmoothingSpline,
    XeHints, XePoint,
};

use twine_core::Model;

/// Point evaluation of Xe for a configured reionization model.
///
/// Borrows the model and solver, so the model cannot be reconfigured while
/// this adapter is alive.
#[derive(Debug)]
pub struct XeModel<'a, S, const MAX: usize = MAX_REIONIZATION_SAMPLES> {
    model: &'a ReionizationModel<MAX>,
    solver: &'a S,
}

impl<'a, S, const MAX: usize> XeModel<'a, S, MAX> {
    /// Pairs a configured model with the solver that evaluates it.
    #[must_use]
    pub fn new(model: &'a ReionizationModel<MAX>, solver: &'a S) -> Self {
        Self { model, solver }
    }
}

impl<S, const MAX: usize> Model for XeModel<'_, S, MAX>
where
    S: ReionizationSolver,
{
    type Input = XePoint;
    type Output = f64;
    type Error = S::Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.solver.xe(self.model, input)
    }
}
