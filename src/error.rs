//! Error type for the ambient parts of the crate.
//!
//! Rendering and change detection never fail; only name lookups and
//! logging setup do.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RulerError {
    /// No style is registered under this name.
    #[error("Style '{0}' not found")]
    UnknownStyle(String),

    /// No theme is registered under this name.
    #[error("Theme '{0}' not found")]
    UnknownTheme(String),

    /// The tracing subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, RulerError>;
