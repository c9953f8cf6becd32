//! Participants' shares, the running total and the history they came from.

use crate::core::{
    split, HistoryEntry, HistoryStore, Lookup, Participant, PendingEntry, ShareSnapshot,
    SplitError, CURRENT_ENTRY_KEY,
};
use crate::ledger::validation::ensure_known;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Participation flags by participant name. Missing names count as out.
pub type Participation = BTreeMap<String, bool>;

/// Ledger of shared costs.
///
/// # Example
///
/// ```rust
/// use splitter::ledger::{Participation, SplitLedger};
///
/// let mut ledger = SplitLedger::new(["A", "B"]);
/// let both: Participation = [("A".to_string(), true), ("B".to_string(), true)].into();
///
/// let key = ledger.add_entry(20.0, &both).unwrap();
/// assert_eq!(key, "20");
/// assert_eq!(ledger.total_price(), 20.0);
/// assert_eq!(ledger.share_of("A"), Some(10.0));
///
/// ledger.clear_entry(&key).unwrap();
/// assert_eq!(ledger.total_price(), 0.0);
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct SplitLedger {
    participants: Vec<Participant>,
    total_price: f64,
    history: HistoryStore,
    pending: PendingEntry,
}

impl SplitLedger {
    /// Create a ledger for the given names.
    ///
    /// Participants are keyed by name: a repeated name refers to the
    /// participant created by its first occurrence.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut participants: Vec<Participant> = Vec::new();
        for name in names {
            let name = name.into();
            if !participants.iter().any(|p| p.name == name) {
                participants.push(Participant::new(name));
            }
        }
        Self {
            participants,
            total_price: 0.0,
            history: HistoryStore::new(),
            pending: PendingEntry::Empty,
        }
    }

    /// Participants in ledger order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Participant by name.
    pub fn participant(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name == name)
    }

    /// Running share of one participant.
    pub fn share_of(&self, name: &str) -> Option<f64> {
        self.participant(name).map(|p| p.total_share)
    }

    /// Sum of the prices of all recorded entries.
    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    /// Recorded entries.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// State of the price field.
    pub fn pending(&self) -> &PendingEntry {
        &self.pending
    }

    /// Type into the price field.
    pub fn fill_pending(&mut self, text: &str) {
        self.pending = self.pending.fill(text);
    }

    /// Empty the price field, as after unreadable input.
    pub fn clear_pending(&mut self) {
        self.pending = self.pending.clear();
    }

    /// Live toggles as a participation map.
    pub fn live_participation(&self) -> Participation {
        self.participants
            .iter()
            .map(|p| (p.name.clone(), p.is_participating))
            .collect()
    }

    /// Replace the live toggles. Names left out of the map are switched off.
    pub fn set_participation(&mut self, participation: &Participation) -> Result<(), SplitError> {
        ensure_known(&self.participants, participation.keys().map(String::as_str))?;
        for p in &mut self.participants {
            p.is_participating = participation.get(&p.name).copied().unwrap_or(false);
        }
        Ok(())
    }

    /// Flip one participant's toggle, returning the new value.
    pub fn toggle(&mut self, name: &str) -> Result<bool, SplitError> {
        let participant = self
            .participants
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| SplitError::UnknownParticipants {
                names: vec![name.to_string()],
            })?;
        participant.is_participating = !participant.is_participating;
        Ok(participant.is_participating)
    }

    /// Split `price` using the live toggles.
    pub fn split(&self, price: f64) -> Result<f64, SplitError> {
        split(price, self.participants.as_slice())
    }

    /// Charge `price` to everyone flagged in `participation` and record it.
    ///
    /// The flags also become the live toggles. Returns the display key of
    /// the new history entry.
    pub fn add_entry(
        &mut self,
        price: f64,
        participation: &Participation,
    ) -> Result<String, SplitError> {
        if !price.is_finite() {
            return Err(SplitError::Parse {
                input: price.to_string(),
            });
        }
        ensure_known(&self.participants, participation.keys().map(String::as_str))?;

        let mut staged = self.participants.clone();
        for p in &mut staged {
            p.is_participating = participation.get(&p.name).copied().unwrap_or(false);
        }
        let share = split(price, staged.as_slice())?;

        let snapshot: Vec<ShareSnapshot> = staged
            .iter_mut()
            .map(|p| {
                let price_share = if p.is_participating {
                    p.total_share += share;
                    share
                } else {
                    0.0
                };
                ShareSnapshot {
                    name: p.name.clone(),
                    is_participating: p.is_participating,
                    price_share,
                    total_share: p.total_share,
                }
            })
            .collect();

        let total_price = self.total_price + price;
        if !total_price.is_finite() || staged.iter().any(|p| !p.total_share.is_finite()) {
            return Err(SplitError::Overflow);
        }

        self.participants = staged;
        self.total_price = total_price;
        let key = self.history.record(price, snapshot);
        self.pending = self.pending.commit(key.clone());

        debug!(
            key = %key,
            price,
            share,
            total_price = self.total_price,
            "Recorded entry"
        );
        Ok(key)
    }

    /// Reverse a recorded entry and drop it from the history.
    ///
    /// The share is recomputed from the participation recorded with the
    /// entry, not from the live toggles. Removing the last entry resets the
    /// whole ledger: shares, toggles, total and price field.
    pub fn clear_entry(&mut self, key: &str) -> Result<HistoryEntry, SplitError> {
        let entry = match self.history.lookup(key)? {
            Lookup::Current => return Err(SplitError::ProtectedEntry),
            Lookup::Entry(entry) => entry,
        };
        let share = split(entry.price, entry)?;

        let entry = self.history.remove(key)?;
        self.total_price -= entry.price;
        for p in &mut self.participants {
            if entry
                .share_of(&p.name)
                .is_some_and(|snapshot| snapshot.is_participating)
            {
                p.total_share -= share;
            }
        }

        if self.history.is_empty() {
            self.reset();
        }

        debug!(
            key,
            price = entry.price,
            share,
            total_price = self.total_price,
            remaining = self.history.len(),
            "Cleared entry"
        );
        Ok(entry)
    }

    /// Select a history key for viewing.
    ///
    /// Selecting the sentinel switches every live toggle off; selecting a
    /// recorded entry loads its participation into the toggles. Returns the
    /// entry, or `None` for the sentinel. Neither changes shares, history or
    /// the price field.
    pub fn select(&mut self, key: &str) -> Result<Option<HistoryEntry>, SplitError> {
        let selected = match self.history.lookup(key)? {
            Lookup::Current => None,
            Lookup::Entry(entry) => Some(entry.clone()),
        };

        for p in &mut self.participants {
            p.is_participating = selected
                .as_ref()
                .and_then(|entry| entry.share_of(&p.name))
                .is_some_and(|snapshot| snapshot.is_participating);
        }

        debug!(key, sentinel = key == CURRENT_ENTRY_KEY, "Selected history key");
        Ok(selected)
    }

    fn reset(&mut self) {
        for p in &mut self.participants {
            p.reset();
        }
        self.total_price = 0.0;
        self.pending = self.pending.clear();
        debug!("History empty, ledger reset");
    }
}
