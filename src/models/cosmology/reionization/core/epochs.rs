use crate::support::cosmology::{Epoch, redshift_from_scale_factor, scale_factor_from_redshift};

use super::ReionizationError;

/// A sequence of epochs, given as scale factors or as redshifts.
///
/// Used both to build an Xe table and to query Xe at many points.
#[derive(Debug, Clone, PartialEq)]
pub enum Epochs {
    /// Scale factors `a`.
    ScaleFactors(Vec<f64>),

    /// Redshifts `z`.
    Redshifts(Vec<f64>),
}

impl Epochs {
    /// Builds epochs from exactly one of scale factors or redshifts.
    ///
    /// # Errors
    ///
    /// Returns [`ReionizationError::InvalidArgument`] if both or neither are given.
    pub fn from_either(
        scale_factors: Option<Vec<f64>>,
        redshifts: Option<Vec<f64>>,
    ) -> Result<Self, ReionizationError> {
        match (scale_factors, redshifts) {
            (Some(a), None) => Ok(Self::ScaleFactors(a)),
            (None, Some(z)) => Ok(Self::Redshifts(z)),
            (Some(_), Some(_)) => Err(ReionizationError::invalid(
                "give either scale factors or redshifts, not both",
            )),
            (None, None) => Err(ReionizationError::invalid(
                "give either scale factors or redshifts",
            )),
        }
    }

    /// Number of epochs.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::ScaleFactors(values) | Self::Redshifts(values) => values.len(),
        }
    }

    /// Returns true if there are no epochs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the epochs in order.
    pub fn iter(&self) -> impl Iterator<Item = Epoch> + '_ {
        let (values, as_epoch) = match self {
            Self::ScaleFactors(a) => (a.as_slice(), Epoch::ScaleFactor as fn(f64) -> Epoch),
            Self::Redshifts(z) => (z.as_slice(), Epoch::Redshift as fn(f64) -> Epoch),
        };
        values.iter().copied().map(as_epoch)
    }

    /// Returns the scale factors, converting from redshift if needed.
    #[must_use]
    pub fn scale_factors(&self) -> Vec<f64> {
        match self {
            Self::ScaleFactors(a) => a.clone(),
            Self::Redshifts(z) => z.iter().copied().map(scale_factor_from_redshift).collect(),
        }
    }

    /// Returns the redshifts, converting from scale factor if needed.
    #[must_use]
    pub fn redshifts(&self) -> Vec<f64> {
        match self {
            Self::ScaleFactors(a) => a.iter().copied().map(redshift_from_scale_factor).collect(),
            Self::Redshifts(z) => z.clone(),
        }
    }
}

impl From<Epoch> for Epochs {
    fn from(epoch: Epoch) -> Self {
        match epoch {
            Epoch::ScaleFactor(a) => Self::ScaleFactors(vec![a]),
            Epoch::Redshift(z) => Self::Redshifts(vec![z]),
        }
    }
}
