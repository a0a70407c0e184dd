use rodheat_core::GridError;

use super::ConfigError;

/// Errors that can occur when running a [`Simulation`](super::Simulation).
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("simulation has not been initialized with a grid")]
    NotInitialized,

    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ConfigError),

    #[error(transparent)]
    InvalidDimension(#[from] GridError),
}
