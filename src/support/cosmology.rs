//! Cosmological time coordinates.
//!
//! Epochs are given either as a scale factor `a` or a redshift `z`, related by
//! `a = 1 / (1 + z)`. Both are dimensionless and carried as `f64`.
//! Conformal times and distances are carried as [`uom`] lengths, with
//! helpers for the megaparsec units cosmology codes work in:
//!
//! ```
//! use twine_reionization::support::cosmology::{Epoch, megaparsecs, to_megaparsecs};
//!
//! let epoch = Epoch::Redshift(3.0);
//! assert_eq!(epoch.scale_factor(), 0.25);
//!
//! let tau = megaparsecs(280.0);
//! assert!((to_megaparsecs(tau) - 280.0).abs() < 1e-9);
//! ```

use uom::si::{f64::Length, length::parsec};

const PARSECS_PER_MEGAPARSEC: f64 = 1.0e6;

/// Converts a redshift to a scale factor, `a = 1 / (1 + z)`.
#[must_use]
pub fn scale_factor_from_redshift(z: f64) -> f64 {
    1.0 / (1.0 + z)
}

/// Converts a scale factor to a redshift, `z = 1 / a - 1`.
#[must_use]
pub fn redshift_from_scale_factor(a: f64) -> f64 {
    1.0 / a - 1.0
}

/// Constructs a length from a value in megaparsecs.
#[must_use]
pub fn megaparsecs(value: f64) -> Length {
    Length::new::<parsec>(value * PARSECS_PER_MEGAPARSEC)
}

/// Returns a length in megaparsecs.
#[must_use]
pub fn to_megaparsecs(length: Length) -> f64 {
    length.get::<parsec>() / PARSECS_PER_MEGAPARSEC
}

/// A single point in cosmic history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Epoch {
    /// Scale factor `a`, with `a = 1` today.
    ScaleFactor(f64),

    /// Redshift `z`, with `z = 0` today.
    Redshift(f64),
}

impl Epoch {
    /// Returns the scale factor of this epoch.
    #[must_use]
    pub fn scale_factor(self) -> f64 {
        match self {
            Self::ScaleFactor(a) => a,
            Self::Redshift(z) => scale_factor_from_redshift(z),
        }
    }

    /// Returns the redshift of this epoch.
    #[must_use]
    pub fn redshift(self) -> f64 {
        match self {
            Self::ScaleFactor(a) => redshift_from_scale_factor(a),
            Self::Redshift(z) => z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn today_is_unit_scale_factor() {
        assert_relative_eq!(scale_factor_from_redshift(0.0), 1.0);
        assert_relative_eq!(redshift_from_scale_factor(1.0), 0.0);
    }

    #[test]
    fn epoch_conversions() {
        let z = Epoch::Redshift(10.0);
        assert_relative_eq!(z.scale_factor(), 1.0 / 11.0);
        assert_relative_eq!(z.redshift(), 10.0);

        let a = Epoch::ScaleFactor(0.125);
        assert_relative_eq!(a.redshift(), 7.0);
        assert_relative_eq!(a.scale_factor(), 0.125);
    }

    #[test]
    fn redshift_and_scale_factor_agree_exactly() {
        for z0 in [0.0, 0.5, 6.0, 7.7, 15.0, 1089.0] {
            let by_z = Epoch::Redshift(z0).scale_factor();
            let by_a = Epoch::ScaleFactor(1.0 / (1.0 + z0)).scale_factor();
            assert_eq!(by_z.to_bits(), by_a.to_bits());
        }
    }

    #[test]
    fn megaparsec_round_trip() {
        let length = megaparsecs(14_000.0);
        assert_relative_eq!(to_megaparsecs(length), 14_000.0, max_relative = 1e-12);
    }
}
