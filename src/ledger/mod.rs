//! The split ledger: participants, running totals and recorded history.
//!
//! The ledger is the only mutator of shares and history. Each operation
//! validates its input first and only then mutates, so a failed call leaves
//! everything as it was.

mod split_ledger;
pub mod validation;

pub use split_ledger::{Participation, SplitLedger};
