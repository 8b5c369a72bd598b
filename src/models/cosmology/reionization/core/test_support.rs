use std::cell::RefCell;

use thiserror::Error;

use crate::support::cosmology::{megaparsecs, redshift_from_scale_factor};

use super::{
    Epochs, ReionizationHistory, ReionizationModel, ReionizationSolver, SmoothingSpline, XePoint,
};

/// Conformal time today in a toy matter-dominated universe, Mpc.
const TOY_TAU_TODAY: f64 = 14_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum SolverError {
    #[error("model has no custom table")]
    NoTable,
    #[error("scale factor outside the table")]
    OutOfRange,
}

/// A five-sample table in descending scale factor.
pub(crate) fn descending_table() -> (Epochs, Vec<f64>) {
    (
        Epochs::ScaleFactors(vec![1.0, 0.2, 0.125, 0.1, 1.0 / 15.0]),
        vec![1.08, 1.0, 0.6, 0.2, 0.0],
    )
}

fn toy_conformal_time(a: f64) -> f64 {
    TOY_TAU_TODAY * a.sqrt()
}

/// Solver that linearly interpolates the model's custom table in `a`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TableSolver;

impl ReionizationSolver for TableSolver {
    type Error = SolverError;

    fn history<const MAX: usize>(
        &self,
        model: &ReionizationModel<MAX>,
    ) -> Result<ReionizationHistory, Self::Error> {
        let table = model.table().ok_or(SolverError::NoTable)?;
        let a_start = table.scale_factors().last().copied().ok_or(SolverError::OutOfRange)?;
        let a_complete = table
            .iter()
            .rev()
            .find(|&(_, xe)| xe >= 1.0)
            .map_or(table.scale_factors()[0], |(a, _)| a);

        Ok(ReionizationHistory {
            tau_start: megaparsecs(toy_conformal_time(a_start)),
            tau_complete: megaparsecs(toy_conformal_time(a_complete)),
            akthom: 0.0,
            f_he: 0.08,
            window_var_mid: redshift_from_scale_factor(a_start),
            window_var_delta: 0.0,
        })
    }

    fn xe<const MAX: usize>(
        &self,
        model: &ReionizationModel<MAX>,
        point: &XePoint,
    ) -> Result<f64, Self::Error> {
        let table = model.table().ok_or(SolverError::NoTable)?;
        let a = table.scale_factors();
        let xe = table.xe_values();

        // Scale factors descend, so the bracket is the first sample below `point.a`.
        let hi = a.partition_point(|&sample| sample > point.a);
        if hi < a.len() && a[hi] == point.a {
            return Ok(xe[hi]);
        }
        if hi == 0 || hi == a.len() {
            return Err(SolverError::OutOfRange);
        }
        let lo = hi - 1;
        let t = (a[lo] - point.a) / (a[lo] - a[hi]);
        Ok(xe[lo] + t * (xe[hi] - xe[lo]))
    }
}

/// Solver with a tanh transition in redshift around the model's `redshift`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TanhSolver;

impl ReionizationSolver for TanhSolver {
    type Error = SolverError;

    fn history<const MAX: usize>(
        &self,
        model: &ReionizationModel<MAX>,
    ) -> Result<ReionizationHistory, Self::Error> {
        let a_start = 1.0 / (1.0 + model.redshift + 4.0 * model.delta_redshift);
        let a_complete = 1.0 / (1.0 + model.redshift - 4.0 * model.delta_redshift);
        Ok(ReionizationHistory {
            tau_start: megaparsecs(toy_conformal_time(a_start)),
            tau_complete: megaparsecs(toy_conformal_time(a_complete)),
            akthom: 0.0,
            f_he: 0.08,
            window_var_mid: model.redshift,
            window_var_delta: model.delta_redshift,
        })
    }

    fn xe<const MAX: usize>(
        &self,
        model: &ReionizationModel<MAX>,
        point: &XePoint,
    ) -> Result<f64, Self::Error> {
        let z = redshift_from_scale_factor(point.a);
        let step = (1.0 + ((model.redshift - z) / model.delta_redshift).tanh()) / 2.0;
        Ok(point.xe_recomb + (model.fraction - point.xe_recomb) * step)
    }
}

#[derive(Debug, Error)]
#[error("spline did not converge")]
pub(crate) struct SplineError;

/// Spline stand-in that multiplies every value by a constant.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScalingSpline {
    factor: f64,
}

impl ScalingSpline {
    pub(crate) fn new(factor: f64) -> Self {
        Self { factor }
    }
}

impl SmoothingSpline for ScalingSpline {
    type Error = SplineError;

    fn smooth(&self, _x: &[f64], y: &[f64], _strength: f64) -> Result<Vec<f64>, Self::Error> {
        Ok(y.iter().map(|value| value * self.factor).collect())
    }
}

/// Spline stand-in that records its inputs and returns `y` unchanged.
#[derive(Debug, Default)]
pub(crate) struct RecordingSpline {
    calls: RefCell<Vec<(Vec<f64>, Vec<f64>, f64)>>,
}

impl RecordingSpline {
    pub(crate) fn calls(&self) -> Vec<(Vec<f64>, Vec<f64>, f64)> {
        self.calls.borrow().clone()
    }
}

impl SmoothingSpline for RecordingSpline {
    type Error = SplineError;

    fn smooth(&self, x: &[f64], y: &[f64], strength: f64) -> Result<Vec<f64>, Self::Error> {
        self.calls
            .borrow_mut()
            .push((x.to_vec(), y.to_vec(), strength));
        Ok(y.to_vec())
    }
}

/// Spline stand-in that always fails.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FailingSpline;

impl SmoothingSpline for FailingSpline {
    type Error = SplineError;

    fn smooth(&self, _x: &[f64], _y: &[f64], _strength: f64) -> Result<Vec<f64>, Self::Error> {
        Err(SplineError)
    }
}

/// Spline stand-in that drops the last value.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TruncatingSpline;

impl SmoothingSpline for TruncatingSpline {
    type Error = SplineError;

    fn smooth(&self, _x: &[f64], y: &[f64], _strength: f64) -> Result<Vec<f64>, Self::Error> {
        Ok(y[..y.len().saturating_sub(1)].to_vec())
    }
}
