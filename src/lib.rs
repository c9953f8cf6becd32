//! Splitter: share the cost of a shopping list among friends
//!
//! Splitter follows a "pure core, imperative shell" layout. Prices are split
//! equally among whoever is "in" for each item, every entry is kept in an
//! undoable history, and the presentation layer only ever talks to an
//! explicitly owned [`Session`].
//!
//! # Core Concepts
//!
//! - **Ledger**: Participants' running shares and the total, see [`SplitLedger`]
//! - **History**: Recorded entries under price-derived display keys, see [`HistoryStore`]
//! - **Session**: The four boundary operations plus display notifications
//!
//! # Example
//!
//! ```rust
//! use splitter::ledger::SplitLedger;
//! use splitter::session::{DisplayUpdate, Session};
//!
//! let mut session = Session::new(SplitLedger::new(["A", "B"]), Vec::<DisplayUpdate>::new());
//! let both = [("A".to_string(), true), ("B".to_string(), true)].into();
//! let only_a = [("A".to_string(), true)].into();
//!
//! assert_eq!(session.submit_price("20", &both).unwrap(), "20");
//! assert_eq!(session.submit_price("20", &only_a).unwrap(), "20 (1)");
//! assert_eq!(session.totals().share_of("A"), Some(30.0));
//!
//! session.request_clear("20 (1)").unwrap();
//! assert_eq!(session.totals().total_price, 20.0);
//! assert_eq!(session.totals().share_of("B"), Some(10.0));
//! ```

pub mod config;
pub mod core;
pub mod ledger;
pub mod session;
pub mod shell;

// Re-export commonly used types
pub use crate::config::{SplitterConfig, Theme};
pub use crate::core::{HistoryEntry, HistoryStore, Participant, SplitError, CURRENT_ENTRY_KEY};
pub use crate::ledger::{Participation, SplitLedger};
pub use crate::session::{DisplaySink, DisplayUpdate, Session};
