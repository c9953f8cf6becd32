//! Configuration error types.

use thiserror::Error;

/// Problems with the startup configuration
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// The participant list was empty
    #[error("Supply at least one participant")]
    NoParticipants,

    /// The log filter directive could not be parsed
    #[error("Invalid log filter {filter:?}: {reason}")]
    InvalidLogFilter { filter: String, reason: String },
}
