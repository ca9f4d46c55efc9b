use planck_solvers::quadrature::gauss_kronrod;
use thiserror::Error;

use crate::ConfigError;

/// Errors that may occur when evaluating black-body quantities.
#[derive(Debug, Error)]
pub enum RadiationError {
    /// The temperature is zero, negative, or not a finite number.
    #[error("invalid temperature: {kelvin} K (must be finite and greater than zero)")]
    InvalidTemperature { kelvin: f64 },

    /// A band endpoint is zero, negative, or not a finite number.
    #[error(
        "invalid wavelength range: [{lambda1} nm, {lambda2} nm] (wavelengths must be finite and greater than zero)"
    )]
    InvalidWavelengthRange { lambda1: f64, lambda2: f64 },

    /// A derived quantity does not fit in an `f64` at this temperature.
    #[error("result overflows at {kelvin} K")]
    Overflow { kelvin: f64 },

    /// The quadrature stopped before meeting its tolerance.
    ///
    /// Carries the partial estimate so callers can judge whether it is usable.
    #[error(
        "integration over x in [{lower}, {upper}] did not converge ({status:?}): estimate {estimate} with error {abs_error}"
    )]
    IntegrationNonConvergence {
        lower: f64,
        upper: f64,
        status: gauss_kronrod::Status,
        estimate: f64,
        abs_error: f64,
    },

    /// The quadrature failed outright.
    #[error("integration failed")]
    Integration(#[from] gauss_kronrod::Error),

    /// The radiation config is invalid.
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
}
