//! Errors raised by the ledger and history store.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while splitting, recording or clearing entries.
///
/// Every variant is recoverable: the operation that produced it leaves the
/// ledger and the history exactly as they were.
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
pub enum SplitError {
    #[error("Could not parse price {input:?} as a finite number")]
    Parse { input: String },

    #[error("Price field is empty")]
    EmptyPrice,

    #[error("No participants in price")]
    NoParticipants,

    #[error("No history entry named {key:?}")]
    UnknownEntry { key: String },

    #[error("Will not delete the Current entry")]
    ProtectedEntry,

    #[error("Running totals would overflow")]
    Overflow,

    #[error("Unknown participants: {}", names.join(", "))]
    UnknownParticipants { names: Vec<String> },
}
