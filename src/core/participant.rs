//! Participants sharing the bill.

use serde::{Deserialize, Serialize};

/// One person taking part in the split.
///
/// `total_share` accumulates across entries for the lifetime of the ledger,
/// while `is_participating` is the live toggle for the next entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name, also used as the participant's identity
    pub name: String,
    /// Sum of the shares charged to this participant
    pub total_share: f64,
    /// Whether the participant is "in" for the entry being composed
    pub is_participating: bool,
}

impl Participant {
    /// Create a participant with nothing owed and the toggle off.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_share: 0.0,
            is_participating: false,
        }
    }

    /// Zero the running share and clear the toggle.
    pub fn reset(&mut self) {
        self.total_share = 0.0;
        self.is_participating = false;
    }
}
