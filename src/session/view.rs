//! Values handed to the presentation layer.

use serde::{Deserialize, Serialize};

/// One participant row as the view shows it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticipantView {
    pub name: String,
    pub checked: bool,
    pub share_text: String,
}

/// What the view shows after a history key is selected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectionView {
    /// The selected key
    pub key: String,
    /// True when the key is the `Current` sentinel
    pub sentinel: bool,
    pub participants: Vec<ParticipantView>,
    pub price_field_text: String,
}

impl SelectionView {
    pub fn participant(&self, name: &str) -> Option<&ParticipantView> {
        self.participants.iter().find(|p| p.name == name)
    }
}

/// Running total of one participant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticipantTotal {
    pub name: String,
    pub total_share: f64,
}

/// Running totals of the whole ledger, participants in ledger order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TotalsView {
    pub total_price: f64,
    pub participants: Vec<ParticipantTotal>,
}

impl TotalsView {
    /// Running share of one participant.
    pub fn share_of(&self, name: &str) -> Option<f64> {
        self.participants
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.total_share)
    }
}
