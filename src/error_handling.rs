//! Error type definitions shared across the application.
//!
//! Domain-specific errors live with their modules (`SanitizeError`,
//! `StatusTableError`); this module holds the cross-cutting ones.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}
