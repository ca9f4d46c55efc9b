use thiserror::Error;

/// Configuration for the adaptive Gauss-Kronrod solver.
///
/// The defaults match the tolerances and subdivision limit commonly used by
/// QUADPACK front ends.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Maximum number of segment bisections.
    pub max_subdivisions: usize,

    /// Absolute error tolerance.
    pub abs_tol: f64,

    /// Relative error tolerance, applied to the magnitude of the estimate.
    pub rel_tol: f64,
}

/// Errors that can occur when validating a quadrature config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("abs_tol must be finite and non-negative")]
    AbsTol,

    #[error("rel_tol must be finite and non-negative")]
    RelTol,

    #[error("at least one of abs_tol and rel_tol must be positive")]
    ZeroTolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_subdivisions: 50,
            abs_tol: 1.49e-8,
            rel_tol: 1.49e-8,
        }
    }
}

impl Config {
    /// Validates that the tolerances are usable.
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance is negative or non-finite, or if both
    /// tolerances are zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.abs_tol.is_finite() || self.abs_tol < 0.0 {
            return Err(ConfigError::AbsTol);
        }
        if !self.rel_tol.is_finite() || self.rel_tol < 0.0 {
            return Err(ConfigError::RelTol);
        }
        if self.abs_tol == 0.0 && self.rel_tol == 0.0 {
            return Err(ConfigError::ZeroTolerance);
        }
        Ok(())
    }

    /// Returns the error bound an estimate must meet to count as converged.
    #[must_use]
    pub fn error_bound(&self, estimate: f64) -> f64 {
        self.abs_tol.max(self.rel_tol * estimate.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_tolerances() {
        let negative_abs = Config {
            abs_tol: -1.0,
            ..Config::default()
        };
        assert_eq!(negative_abs.validate(), Err(ConfigError::AbsTol));

        let nan_rel = Config {
            rel_tol: f64::NAN,
            ..Config::default()
        };
        assert_eq!(nan_rel.validate(), Err(ConfigError::RelTol));

        let both_zero = Config {
            abs_tol: 0.0,
            rel_tol: 0.0,
            ..Config::default()
        };
        assert_eq!(both_zero.validate(), Err(ConfigError::ZeroTolerance));
    }

    #[test]
    fn error_bound_takes_the_looser_tolerance() {
        let config = Config {
            abs_tol: 1e-6,
            rel_tol: 1e-3,
            ..Config::default()
        };
        assert_eq!(config.error_bound(1e-5), 1e-6);
        assert_eq!(config.error_bound(-10.0), 1e-2);
    }
}
