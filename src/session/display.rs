//! Display-update notifications.

use super::view::{SelectionView, TotalsView};
use crate::core::SplitError;

/// A change the presentation layer should render.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayUpdate {
    /// Running totals changed
    Totals(TotalsView),
    /// History keys in display order, sentinel first
    History(Vec<String>),
    /// A key was selected, explicitly or after an add or clear
    Selection(SelectionView),
    /// New text for the price field
    PriceField(String),
    /// A live toggle changed
    Toggled { name: String, checked: bool },
    /// An operation failed and changed nothing
    Error(SplitError),
}

/// Receiver of display updates.
pub trait DisplaySink {
    /// Render or record one update.
    fn notify(&mut self, update: DisplayUpdate);
}

/// Collects updates in order, which is handy for inspecting a session.
impl DisplaySink for Vec<DisplayUpdate> {
    fn notify(&mut self, update: DisplayUpdate) {
        self.push(update);
    }
}
