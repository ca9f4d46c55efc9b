use std::error::Error as StdError;

use super::ConfigError;

/// Errors that can occur during adaptive quadrature.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("domain contains non-finite bound: {value}")]
    NonFiniteBound { value: f64 },

    #[error("non-finite integrand value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },

    #[error("model error: {0}")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn model<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Model(Box::new(err))
    }
}
