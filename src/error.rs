//! Unified error types for the demo service.
//!
//! Request handlers cannot fail, so errors only arise during startup:
//! configuration deserialization and socket binding.

use thiserror::Error;

/// Unified error type for the demo service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// IO error (socket bind, accept).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, AppError>;
