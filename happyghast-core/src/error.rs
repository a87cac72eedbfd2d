//! Error types for the happy ghast core library.

use thiserror::Error;

use crate::types::EntityId;

/// Failure reported by the host runtime while answering a query.
///
/// These never escape the translator: symbol resolution downgrades them to
/// "not available" and logs a warning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The host knows the symbol name but could not hand out its value.
    #[error("Failed to access {symbol}: {reason}")]
    SymbolAccess {
        /// Candidate name that was being looked up.
        symbol: String,
        /// Host-provided explanation.
        reason: String,
    },

    /// The entity handle no longer refers to a live entity.
    #[error("Unknown entity: {0}")]
    UnknownEntity(EntityId),
}

/// Top-level error type for fallible setup operations.
#[derive(Error, Debug)]
pub enum HappyGhastError {
    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The logging subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, HappyGhastError>;
