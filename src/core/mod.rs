//! Core types and logic of the splitter.
//!
//! This module contains the pure building blocks:
//! - Participants and their running shares
//! - Equal splitting over any participation source
//! - The ordered history of recorded entries and its display keys
//! - The price field state machine
//!
//! Nothing here logs or performs I/O; the ledger and session layers build
//! on these types.

mod error;
mod history;
mod participant;
mod pending;
mod split;

pub use error::SplitError;
pub use history::{
    base_of, price_key, HistoryEntry, HistoryStore, Lookup, ShareSnapshot, CURRENT_ENTRY_KEY,
    DUPLICATE_PRICE_DELIMITER,
};
pub use participant::Participant;
pub use pending::PendingEntry;
pub use split::{split, ParticipationSource};
