//! The boundary between the ledger and whatever displays it.
//!
//! A [`Session`] owns the ledger and the current history selection, and is
//! passed explicitly to the component that handles input events. Each
//! operation runs to completion, then pushes [`DisplayUpdate`]s to the
//! session's [`DisplaySink`]. Failures are logged, reported to the sink and
//! returned; they never change ledger or history.

mod display;
mod view;

pub use display::{DisplaySink, DisplayUpdate};
pub use view::{ParticipantTotal, ParticipantView, SelectionView, TotalsView};

use crate::core::{base_of, HistoryEntry, SplitError, CURRENT_ENTRY_KEY};
use crate::ledger::{Participation, SplitLedger};
use tracing::{info, warn};

/// Explicitly owned splitter state plus its display.
pub struct Session<D: DisplaySink> {
    ledger: SplitLedger,
    selected: String,
    display: D,
}

impl<D: DisplaySink> Session<D> {
    /// Start a session on `ledger` with the sentinel selected.
    pub fn new(ledger: SplitLedger, display: D) -> Self {
        Self {
            ledger,
            selected: CURRENT_ENTRY_KEY.to_string(),
            display,
        }
    }

    /// The ledger behind this session (read-only).
    pub fn ledger(&self) -> &SplitLedger {
        &self.ledger
    }

    /// Currently selected history key.
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// The sink receiving display updates.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Parse `price_text` and record it with `participation`.
    ///
    /// Unreadable text clears the price field. On success the new key is
    /// selected and returned.
    pub fn submit_price(
        &mut self,
        price_text: &str,
        participation: &Participation,
    ) -> Result<String, SplitError> {
        let result = self.try_submit(price_text, participation);
        match &result {
            Ok(key) => {
                info!(key = %key, "Entry added");
                self.publish_state();
            }
            Err(err) => self.report(err),
        }
        result
    }

    fn try_submit(
        &mut self,
        price_text: &str,
        participation: &Participation,
    ) -> Result<String, SplitError> {
        let text = price_text.trim();
        if text.is_empty() {
            return Err(SplitError::EmptyPrice);
        }
        self.ledger.fill_pending(text);

        let price = match text.parse::<f64>() {
            Ok(price) if price.is_finite() => price,
            _ => {
                self.ledger.clear_pending();
                self.display.notify(DisplayUpdate::PriceField(String::new()));
                return Err(SplitError::Parse {
                    input: text.to_string(),
                });
            }
        };

        let key = self.ledger.add_entry(price, participation)?;
        self.selected = key.clone();
        Ok(key)
    }

    /// Clear the entry under `selected_key`.
    ///
    /// Afterwards the entry that took its place in the history is selected,
    /// or the one before it when the last entry was removed.
    pub fn request_clear(&mut self, selected_key: &str) -> Result<(), SplitError> {
        let position = self.ledger.history().position(selected_key);
        if let Err(err) = self.ledger.clear_entry(selected_key) {
            self.report(&err);
            return Err(err);
        }
        info!(key = selected_key, "Entry cleared");

        let next = {
            let keys = self.ledger.history().keys();
            let index = position.unwrap_or(0).min(keys.len() - 1);
            keys[index].to_string()
        };
        // `next` comes straight from the store, so selecting it cannot fail.
        if let Err(err) = self.ledger.select(&next) {
            self.report(&err);
        }
        self.selected = next;

        self.publish_state();
        Ok(())
    }

    /// Select a history key and describe what the view should show.
    ///
    /// Selecting `Current` unchecks everyone and shows the live totals; a
    /// recorded key shows its participation and the totals at the time.
    pub fn select_history(&mut self, key: &str) -> Result<SelectionView, SplitError> {
        let entry = match self.ledger.select(key) {
            Ok(entry) => entry,
            Err(err) => {
                self.report(&err);
                return Err(err);
            }
        };
        self.selected = key.to_string();

        let view = self.selection_view(key, entry.as_ref());
        self.display.notify(DisplayUpdate::Selection(view.clone()));
        Ok(view)
    }

    /// Flip one live toggle.
    pub fn toggle(&mut self, name: &str) -> Result<bool, SplitError> {
        match self.ledger.toggle(name) {
            Ok(checked) => {
                self.display.notify(DisplayUpdate::Toggled {
                    name: name.to_string(),
                    checked,
                });
                Ok(checked)
            }
            Err(err) => {
                self.report(&err);
                Err(err)
            }
        }
    }

    /// Live toggles, ready to pass back to [`Session::submit_price`].
    pub fn live_participation(&self) -> Participation {
        self.ledger.live_participation()
    }

    /// Running totals.
    pub fn totals(&self) -> TotalsView {
        TotalsView {
            total_price: self.ledger.total_price(),
            participants: self
                .ledger
                .participants()
                .iter()
                .map(|p| ParticipantTotal {
                    name: p.name.clone(),
                    total_share: p.total_share,
                })
                .collect(),
        }
    }

    /// History keys in display order.
    pub fn history_keys(&self) -> Vec<String> {
        self.ledger
            .history()
            .keys()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn selection_view(&self, key: &str, entry: Option<&HistoryEntry>) -> SelectionView {
        let participants = self
            .ledger
            .participants()
            .iter()
            .map(|p| {
                let recorded = entry.and_then(|entry| entry.share_of(&p.name));
                ParticipantView {
                    name: p.name.clone(),
                    checked: p.is_participating,
                    share_text: recorded
                        .map_or(p.total_share, |snapshot| snapshot.total_share)
                        .to_string(),
                }
            })
            .collect();

        let price_field_text = match entry {
            Some(_) => base_of(key).to_string(),
            None => self.ledger.pending().text().to_string(),
        };

        SelectionView {
            key: key.to_string(),
            sentinel: entry.is_none(),
            participants,
            price_field_text,
        }
    }

    fn publish_state(&mut self) {
        let totals = self.totals();
        let keys = self.history_keys();
        let selected = self.selected.clone();
        let entry = self.ledger.history().get(&selected).cloned();
        let selection = self.selection_view(&selected, entry.as_ref());
        let price_field = selection.price_field_text.clone();

        self.display.notify(DisplayUpdate::Totals(totals));
        self.display.notify(DisplayUpdate::History(keys));
        self.display.notify(DisplayUpdate::Selection(selection));
        self.display.notify(DisplayUpdate::PriceField(price_field));
    }

    fn report(&mut self, err: &SplitError) {
        warn!(error = %err, "Operation rejected");
        self.display.notify(DisplayUpdate::Error(err.clone()));
    }
}
