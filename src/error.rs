//! Error types for the Per-Diem Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading rate data or
//! computing travel allowances.

use thiserror::Error;

/// The main error type for the Per-Diem Engine.
///
/// Caller input errors (`InvalidInterval`, `UnknownCountry`) are raised
/// synchronously and are never retried or replaced by a default amount
/// inside the engine.
///
/// # Example
///
/// ```
/// use per_diem_engine::error::EngineError;
///
/// let error = EngineError::UnknownCountry {
///     code: "XX".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown country: XX");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The loaded rate data is structurally inconsistent.
    #[error("Invalid rate table: {message}")]
    InvalidRateTable {
        /// A description of the inconsistency.
        message: String,
    },

    /// The country code is neither the home country nor present in the abroad table.
    #[error("Unknown country: {code}")]
    UnknownCountry {
        /// The country code that was not found.
        code: String,
    },

    /// A trip interval was malformed or not strictly increasing.
    #[error("Invalid interval: {message}")]
    InvalidInterval {
        /// A description of what made the interval invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
