//! Crate-wide error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid argument: {0}")]
    ArgumentError(String),

    #[error("invalid scene configuration: {0}")]
    ConfigurationError(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
