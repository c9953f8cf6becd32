//! State of the price field.
//!
//! The field moves `Empty -> Filled -> Committed -> Empty`. Transitions are
//! pure: each returns the next state and leaves the current one untouched.

use super::history::base_of;
use serde::{Deserialize, Serialize};

/// The not-yet-committed price text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingEntry {
    /// Nothing typed
    #[default]
    Empty,
    /// Text typed but not submitted
    Filled(String),
    /// Submitted and recorded under the display key
    Committed(String),
}

impl PendingEntry {
    /// State name for display and logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Empty => "Empty",
            Self::Filled(_) => "Filled",
            Self::Committed(_) => "Committed",
        }
    }

    /// Text the price field shows in this state.
    ///
    /// A committed entry shows its price without the duplicate counter.
    pub fn text(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Filled(text) => text,
            Self::Committed(key) => base_of(key),
        }
    }

    /// Type into the field. Blank text leaves it empty.
    pub fn fill(&self, text: &str) -> Self {
        if text.trim().is_empty() {
            Self::Empty
        } else {
            Self::Filled(text.to_string())
        }
    }

    /// Mark the field as recorded under `key`.
    pub fn commit(&self, key: impl Into<String>) -> Self {
        Self::Committed(key.into())
    }

    /// Clear the field.
    pub fn clear(&self) -> Self {
        Self::Empty
    }

    /// True when nothing is typed.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
