use planck_solvers::quadrature::gauss_kronrod;
use thiserror::Error;

/// Largest supported number of decimals for rounded percentages.
const MAX_PERCENT_DECIMALS: u32 = 15;

/// Numerical settings shared by the flux integrals.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadiationConfig {
    /// Tolerances and subdivision limit for the flux integrals.
    pub quadrature: gauss_kronrod::Config,

    /// Decimal places kept in band percentages.
    pub percent_decimals: u32,
}

/// Errors that can occur when validating a [`RadiationConfig`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error(transparent)]
    Quadrature(#[from] gauss_kronrod::ConfigError),

    #[error("percent_decimals must be at most 15")]
    PercentDecimals,
}

impl Default for RadiationConfig {
    fn default() -> Self {
        Self {
            quadrature: gauss_kronrod::Config::default(),
            percent_decimals: 4,
        }
    }
}

impl RadiationConfig {
    /// Validates the quadrature tolerances and rounding precision.
    ///
    /// # Errors
    ///
    /// Returns an error if the quadrature config is invalid or more than
    /// 15 decimals are requested.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.quadrature.validate()?;
        if self.percent_decimals > MAX_PERCENT_DECIMALS {
            return Err(ConfigError::PercentDecimals);
        }
        Ok(())
    }

    /// Rounds a percentage to the configured number of decimals.
    #[must_use]
    pub fn round_percent(&self, percent: f64) -> f64 {
        let exponent = i32::try_from(self.percent_decimals.min(MAX_PERCENT_DECIMALS)).unwrap_or(0);
        let scale = 10_f64.powi(exponent);
        (percent * scale).round() / scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_rounds_to_four_decimals() {
        let config = RadiationConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_relative_eq!(config.round_percent(46.525_643_6), 46.5256);
        assert_relative_eq!(config.round_percent(99.026_819_7), 99.0268);
    }

    #[test]
    fn custom_precision() {
        let config = RadiationConfig {
            percent_decimals: 1,
            ..RadiationConfig::default()
        };
        assert_relative_eq!(config.round_percent(12.66), 12.7);
    }

    #[test]
    fn rejects_invalid_settings() {
        let too_precise = RadiationConfig {
            percent_decimals: 16,
            ..RadiationConfig::default()
        };
        assert_eq!(too_precise.validate(), Err(ConfigError::PercentDecimals));

        let mut bad_quadrature = RadiationConfig::default();
        bad_quadrature.quadrature.abs_tol = f64::NAN;
        assert_eq!(
            bad_quadrature.validate(),
            Err(ConfigError::Quadrature(gauss_kronrod::ConfigError::AbsTol))
        );
    }
}
