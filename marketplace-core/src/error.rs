//! Error types for the core primitives

use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core errors
#[derive(Error, Debug)]
pub enum Error {
    /// A user record already exists for this principal
    #[error("Principal already registered: {0}")]
    DuplicatePrincipal(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
