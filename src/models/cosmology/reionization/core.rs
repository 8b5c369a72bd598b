//! Reionization parameters and the source of Xe(a).
//!
//! A [`ReionizationModel`] is configured once, through either
//! [`ReionizationModel::set_tau`] (analytic, optical-depth target) or
//! [`ReionizationModel::set_xe`] (custom table), and then handed to a
//! [`ReionizationSolver`] for evaluation. Configuration takes `&mut self`
//! and evaluation takes `&self`, so no evaluation can overlap a rebuild.

mod config;
mod epochs;
mod error;
mod history;
mod query;
mod table;
mod traits;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{MAX_REIONIZATION_SAMPLES, ReionizationConfig};
pub use epochs::Epochs;
pub use error::ReionizationError;
pub use history::ReionizationHistory;
pub use query::{XeHints, XePoint};
pub use table::ReionizationTable;
pub use traits::{ReionizationSolver, SmoothingSpline};

use log::debug;

use crate::support::{
    constraint::{Constrained, NonNegative},
    cosmology::Epoch,
};

/// Which input governs the Xe history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReionizationMode {
    /// Analytic tanh-style history, from an optical-depth target or an
    /// explicit redshift.
    OpticalDepth,

    /// User-supplied Xe(a) table.
    CustomTable,
}

/// The governing source of Xe, one variant at a time.
#[derive(Debug, Clone, PartialEq)]
enum XeSource<const MAX: usize> {
    /// Analytic history. With an optical-depth target the solver inverts it
    /// for `redshift`; without one, `redshift` is used as given.
    Analytic { optical_depth: Option<f64> },

    CustomTable(ReionizationTable<MAX>),
}

/// Parameters of the reionization history.
///
/// The analytic parameters are public fields. The choice between analytic and
/// tabulated Xe is private and changes only through the setters, which keeps
/// the two modes mutually exclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct ReionizationModel<const MAX: usize = MAX_REIONIZATION_SAMPLES> {
    /// Whether reionization is included at all.
    pub reionization_enabled: bool,

    /// Redshift at which hydrogen is half reionized.
    pub redshift: f64,

    /// Width of the hydrogen reionization transition in redshift.
    pub delta_redshift: f64,

    /// Ionized fraction after hydrogen reionization.
    pub fraction: f64,

    /// Redshift of helium full reionization.
    pub helium_redshift: f64,

    /// Width of the helium transition in redshift.
    pub helium_delta_redshift: f64,

    /// Redshift above which helium full reionization is ignored.
    pub helium_redshift_start: f64,

    source: XeSource<MAX>,
    config: ReionizationConfig,
}

impl<const MAX: usize> Default for ReionizationModel<MAX> {
    fn default() -> Self {
        Self::with_config(ReionizationConfig::default())
    }
}

impl<const MAX: usize> ReionizationModel<MAX> {
    /// Creates an unconfigured model with the given run-wide switches.
    ///
    /// Hydrogen parameters start at zero, helium parameters at their usual
    /// values (3.5, 0.5, 5.0), and reionization is disabled.
    #[must_use]
    pub fn with_config(config: ReionizationConfig) -> Self {
        Self {
            reionization_enabled: false,
            redshift: 0.0,
            delta_redshift: 0.0,
            fraction: 0.0,
            helium_redshift: 3.5,
            helium_delta_redshift: 0.5,
            helium_redshift_start: 5.0,
            source: XeSource::Analytic {
                optical_depth: None,
            },
            config,
        }
    }

    /// Run-wide switches this model was built with.
    #[must_use]
    pub fn config(&self) -> &ReionizationConfig {
        &self.config
    }

    /// Which input governs the Xe history.
    #[must_use]
    pub fn mode(&self) -> ReionizationMode {
        match self.source {
            XeSource::Analytic { .. } => ReionizationMode::OpticalDepth,
            XeSource::CustomTable(_) => ReionizationMode::CustomTable,
        }
    }

    /// True if an optical-depth target governs the history.
    #[must_use]
    pub fn use_optical_depth(&self) -> bool {
        matches!(
            self.source,
            XeSource::Analytic {
                optical_depth: Some(_)
            }
        )
    }

    /// True if a custom Xe table governs the history.
    #[must_use]
    pub fn use_custom_xe(&self) -> bool {
        matches!(self.source, XeSource::CustomTable(_))
    }

    /// Target optical depth, or zero when no target is set.
    #[must_use]
    pub fn optical_depth(&self) -> f64 {
        match self.source {
            XeSource::Analytic {
                optical_depth: Some(tau),
            } => tau,
            _ => 0.0,
        }
    }

    /// The custom Xe table, if one governs the history.
    #[must_use]
    pub fn table(&self) -> Option<&ReionizationTable<MAX>> {
        match &self.source {
            XeSource::CustomTable(table) => Some(table),
            XeSource::Analytic { .. } => None,
        }
    }

    /// Selects the analytic history with a target optical depth.
    ///
    /// Overrides `delta_redshift` only when one is given; `redshift` and
    /// `fraction` are left as they are. The solver later inverts `tau` for
    /// the reionization redshift.
    ///
    /// # Errors
    ///
    /// Returns [`ReionizationError::InvalidArgument`] if `tau` or
    /// `delta_redshift` is not finite.
    pub fn set_tau(
        &mut self,
        tau: f64,
        delta_redshift: Option<f64>,
    ) -> Result<&mut Self, ReionizationError> {
        check_finite("optical depth", tau)?;
        if let Some(delta_redshift) = delta_redshift {
            check_finite("delta redshift", delta_redshift)?;
            self.delta_redshift = delta_redshift;
        }

        debug!("reionization set by optical depth {tau}");
        self.source = XeSource::Analytic {
            optical_depth: Some(tau),
        };
        Ok(self)
    }

    /// Selects the analytic history at an explicit reionization redshift.
    ///
    /// Clears any optical-depth target or custom table. Like
    /// [`ReionizationModel::set_tau`], `delta_redshift` is only overridden
    /// when given.
    ///
    /// # Errors
    ///
    /// Returns [`ReionizationError::InvalidArgument`] if `redshift` or
    /// `delta_redshift` is not finite.
    pub fn set_redshift(
        &mut self,
        redshift: f64,
        delta_redshift: Option<f64>,
    ) -> Result<&mut Self, ReionizationError> {
        check_finite("redshift", redshift)?;
        if let Some(delta_redshift) = delta_redshift {
            check_finite("delta redshift", delta_redshift)?;
            self.delta_redshift = delta_redshift;
        }

        debug!("reionization set by redshift {redshift}");
        self.redshift = redshift;
        self.source = XeSource::Analytic {
            optical_depth: None,
        };
        Ok(self)
    }

    /// Installs a custom Xe table.
    ///
    /// Scale factors must be strictly descending (redshifts strictly
    /// ascending). On success the model switches to
    /// [`ReionizationMode::CustomTable`] and any optical-depth target is
    /// dropped. On failure the model is left unchanged.
    ///
    /// # Errors
    ///
    /// See [`ReionizationTable::new`].
    pub fn set_xe(&mut self, epochs: &Epochs, xe: &[f64]) -> Result<&mut Self, ReionizationError> {
        let table = ReionizationTable::new(epochs, xe)?;
        self.install(table, 0.0);
        Ok(self)
    }

    /// Installs a custom Xe table after smoothing it.
    ///
    /// Works like [`ReionizationModel::set_xe`], but first fits `spline` to
    /// Xe as a function of redshift with the given `strength`. The stored Xe
    /// values are returned so the caller can see how much the input moved.
    /// A zero strength skips the spline.
    ///
    /// # Errors
    ///
    /// Returns [`ReionizationError::InvalidArgument`] for a negative or NaN
    /// strength, and otherwise the errors of
    /// [`ReionizationTable::new_smoothed`].
    pub fn set_xe_smoothed<S: SmoothingSpline>(
        &mut self,
        epochs: &Epochs,
        xe: &[f64],
        strength: f64,
        spline: &S,
    ) -> Result<Vec<f64>, ReionizationError> {
        let strength = Constrained::<f64, NonNegative>::new(strength).map_err(|err| {
            ReionizationError::invalid(format!("smoothing strength {strength}: {err}"))
        })?;

        let table = ReionizationTable::new_smoothed(epochs, xe, strength, spline)?;
        let smoothed = table.xe_values().to_vec();
        self.install(table, strength.into_inner());
        Ok(smoothed)
    }

    fn install(&mut self, table: ReionizationTable<MAX>, strength: f64) {
        debug!(
            "reionization set by custom table of {} samples (smoothing {strength})",
            table.len()
        );
        self.source = XeSource::CustomTable(table);
    }

    /// Evaluates Xe at a single epoch.
    ///
    /// Redshifts are converted with `a = 1 / (1 + z)` before reaching the
    /// solver.
    ///
    /// # Errors
    ///
    /// Returns the solver's error unchanged.
    pub fn get_xe<S: ReionizationSolver>(
        &self,
        solver: &S,
        epoch: Epoch,
        hints: XeHints,
    ) -> Result<f64, S::Error> {
        solver.xe(self, &XePoint::new(epoch, hints))
    }

    /// Evaluates Xe at each of many epochs.
    ///
    /// Each point is evaluated independently with the same hints, and the
    /// results are returned in input order.
    ///
    /// # Errors
    ///
    /// Returns the first solver error encountered, unchanged.
    pub fn get_xe_many<S: ReionizationSolver>(
        &self,
        solver: &S,
        epochs: &Epochs,
        hints: XeHints,
    ) -> Result<Vec<f64>, S::Error> {
        epochs
            .iter()
            .map(|epoch| self.get_xe(solver, epoch, hints))
            .collect()
    }

    /// Derives the reionization history of this model.
    ///
    /// # Errors
    ///
    /// Returns the solver's error unchanged.
    pub fn history<S: ReionizationSolver>(
        &self,
        solver: &S,
    ) -> Result<ReionizationHistory, S::Error> {
        solver.history(self)
    }
}

fn check_finite(name: &str, value: f64) -> Result<(), ReionizationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ReionizationError::invalid(format!(
            "{name} must be finite, got {value}"
        )))
    }
}
