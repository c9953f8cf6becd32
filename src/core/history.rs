//! History of recorded entries.
//!
//! Every submitted price is stored as an immutable snapshot under a display
//! key derived from the price. Keys keep insertion order, which is also the
//! order in which they are shown, after the `Current` sentinel that stands
//! for the live, uncommitted state.

use super::error::SplitError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Key of the sentinel slot that represents live participant state.
pub const CURRENT_ENTRY_KEY: &str = "Current";

/// Separator between a price and its duplicate counter, as in `"10 (2)"`.
pub const DUPLICATE_PRICE_DELIMITER: &str = " (";

/// What one participant looked like when an entry was recorded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShareSnapshot {
    /// Participant name
    pub name: String,
    /// Whether the participant was in for this entry
    pub is_participating: bool,
    /// Share of this entry charged to the participant (0 when out)
    pub price_share: f64,
    /// Participant's running total right after the entry was applied
    pub total_share: f64,
}

/// A recorded price and the participation at the time it was submitted.
///
/// Entries are never mutated after they are recorded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The submitted price
    pub price: f64,
    /// When the entry was recorded
    pub recorded_at: DateTime<Utc>,
    /// One snapshot per participant, in participant order
    pub shares: Vec<ShareSnapshot>,
}

impl HistoryEntry {
    /// Snapshot of a single participant, if they existed at recording time.
    pub fn share_of(&self, name: &str) -> Option<&ShareSnapshot> {
        self.shares.iter().find(|share| share.name == name)
    }
}

/// Result of looking a key up in the store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Lookup<'a> {
    /// The sentinel: use the live participant state
    Current,
    /// A recorded entry
    Entry(&'a HistoryEntry),
}

/// Canonical display form of a price: the shortest decimal that reads back
/// as the same `f64`, so `10.0` becomes `"10"` and `2.5` stays `"2.5"`.
/// Negative zero is written as `"0"`.
pub fn price_key(price: f64) -> String {
    let price = if price == 0.0 { 0.0 } else { price };
    price.to_string()
}

/// Price part of a display key, without any duplicate counter.
pub fn base_of(key: &str) -> &str {
    key.split_once(DUPLICATE_PRICE_DELIMITER)
        .map_or(key, |(base, _)| base)
}

fn duplicate_counter(key: &str) -> Option<usize> {
    let (_, suffix) = key.split_once(DUPLICATE_PRICE_DELIMITER)?;
    suffix.strip_suffix(')')?.parse().ok()
}

/// Ordered store of recorded entries.
///
/// # Example
///
/// ```rust
/// use splitter::core::HistoryStore;
///
/// let mut history = HistoryStore::new();
/// assert_eq!(history.record(10.0, Vec::new()), "10");
/// assert_eq!(history.record(10.0, Vec::new()), "10 (1)");
/// assert_eq!(history.record(10.0, Vec::new()), "10 (2)");
/// assert_eq!(history.keys(), vec!["Current", "10", "10 (1)", "10 (2)"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HistoryStore {
    entries: Vec<(String, HistoryEntry)>,
}

impl HistoryStore {
    /// Create a store holding only the sentinel.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Key the next entry with this price would receive.
    ///
    /// The counter continues from the *last* key in store order that shares
    /// the price, not from the largest one. After out-of-order removals this
    /// can hand out a suffix that was used before.
    pub fn next_key(&self, price: f64) -> String {
        let base = price_key(price);
        let last_duplicate = self
            .entries
            .iter()
            .map(|(key, _)| key.as_str())
            .filter(|key| base_of(key) == base)
            .last();

        match last_duplicate {
            None => base,
            Some(key) => {
                let counter = duplicate_counter(key).unwrap_or(0);
                format!("{base}{DUPLICATE_PRICE_DELIMITER}{})", counter + 1)
            }
        }
    }

    /// Record a new entry and return its display key.
    pub fn record(&mut self, price: f64, shares: Vec<ShareSnapshot>) -> String {
        let key = self.next_key(price);
        let entry = HistoryEntry {
            price,
            recorded_at: Utc::now(),
            shares,
        };
        self.entries.push((key.clone(), entry));
        key
    }

    /// Look up a key. The sentinel always resolves to [`Lookup::Current`].
    pub fn lookup(&self, key: &str) -> Result<Lookup<'_>, SplitError> {
        if key == CURRENT_ENTRY_KEY {
            return Ok(Lookup::Current);
        }
        self.get(key)
            .map(Lookup::Entry)
            .ok_or_else(|| SplitError::UnknownEntry {
                key: key.to_string(),
            })
    }

    /// Stored entry for a key, if any.
    pub fn get(&self, key: &str) -> Option<&HistoryEntry> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, entry)| entry)
    }

    /// Remove an entry, returning it. The sentinel cannot be removed.
    pub fn remove(&mut self, key: &str) -> Result<HistoryEntry, SplitError> {
        if key == CURRENT_ENTRY_KEY {
            return Err(SplitError::ProtectedEntry);
        }
        let index = self
            .entries
            .iter()
            .position(|(k, _)| k == key)
            .ok_or_else(|| SplitError::UnknownEntry {
                key: key.to_string(),
            })?;
        Ok(self.entries.remove(index).1)
    }

    /// Whether the key names the sentinel or a stored entry.
    pub fn contains(&self, key: &str) -> bool {
        key == CURRENT_ENTRY_KEY || self.get(key).is_some()
    }

    /// Position of a key in display order; the sentinel is at 0.
    pub fn position(&self, key: &str) -> Option<usize> {
        if key == CURRENT_ENTRY_KEY {
            return Some(0);
        }
        self.entries
            .iter()
            .position(|(k, _)| k == key)
            .map(|index| index + 1)
    }

    /// All keys in display order, sentinel first.
    pub fn keys(&self) -> Vec<&str> {
        std::iter::once(CURRENT_ENTRY_KEY)
            .chain(self.entries.iter().map(|(key, _)| key.as_str()))
            .collect()
    }

    /// Recorded entries in display order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &HistoryEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// Number of recorded entries, not counting the sentinel.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when only the sentinel is left.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
