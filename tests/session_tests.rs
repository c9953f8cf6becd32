//! End-to-end scenarios through the session boundary.

use splitter::core::{SplitError, CURRENT_ENTRY_KEY};
use splitter::ledger::{Participation, SplitLedger};
use splitter::session::{DisplayUpdate, Session};

fn session(names: &[&str]) -> Session<Vec<DisplayUpdate>> {
    Session::new(SplitLedger::new(names.iter().copied()), Vec::new())
}

fn flags(pairs: &[(&str, bool)]) -> Participation {
    pairs
        .iter()
        .map(|(name, flag)| (name.to_string(), *flag))
        .collect()
}

#[test]
fn two_friends_share_and_undo() {
    let mut session = session(&["A", "B"]);

    let first = session
        .submit_price("20", &flags(&[("A", true), ("B", true)]))
        .unwrap();
    assert_eq!(first, "20");
    let totals = session.totals();
    assert_eq!(totals.total_price, 20.0);
    assert_eq!(totals.share_of("A"), Some(10.0));
    assert_eq!(totals.share_of("B"), Some(10.0));

    let second = session
        .submit_price("20", &flags(&[("A", true), ("B", false)]))
        .unwrap();
    assert_eq!(second, "20 (1)");
    let totals = session.totals();
    assert_eq!(totals.total_price, 40.0);
    assert_eq!(totals.share_of("A"), Some(30.0));
    assert_eq!(totals.share_of("B"), Some(10.0));

    session.request_clear("20 (1)").unwrap();
    let totals = session.totals();
    assert_eq!(totals.total_price, 20.0);
    assert_eq!(totals.share_of("A"), Some(10.0));
    assert_eq!(totals.share_of("B"), Some(10.0));
}

#[test]
fn three_way_split() {
    let mut session = session(&["A", "B", "C"]);
    session
        .submit_price("30", &flags(&[("A", true), ("B", true), ("C", true)]))
        .unwrap();

    for name in ["A", "B", "C"] {
        assert_eq!(session.totals().share_of(name), Some(10.0));
    }
}

#[test]
fn nobody_in_records_nothing() {
    let mut session = session(&["A", "B"]);

    let result = session.submit_price("10", &flags(&[("A", false), ("B", false)]));

    assert_eq!(result, Err(SplitError::NoParticipants));
    assert_eq!(session.history_keys(), vec![CURRENT_ENTRY_KEY]);
    assert_eq!(session.totals().total_price, 0.0);
}

#[test]
fn sentinel_always_shows_live_totals_unchecked() {
    let mut session = session(&["A", "B"]);
    session
        .submit_price("12", &flags(&[("A", true), ("B", true)]))
        .unwrap();
    session.submit_price("4", &flags(&[("B", true)])).unwrap();

    session.select_history("12").unwrap();
    let view = session.select_history(CURRENT_ENTRY_KEY).unwrap();

    assert!(view.sentinel);
    for p in &view.participants {
        assert!(!p.checked);
    }
    assert_eq!(view.participant("A").unwrap().share_text, "6");
    assert_eq!(view.participant("B").unwrap().share_text, "10");
}

#[test]
fn clearing_last_entry_resets_ledger() {
    let mut session = session(&["A", "B", "C"]);
    let key = session
        .submit_price("0.1", &flags(&[("A", true), ("B", true), ("C", true)]))
        .unwrap();

    session.request_clear(&key).unwrap();

    let totals = session.totals();
    assert_eq!(totals.total_price, 0.0);
    assert!(totals.participants.iter().all(|p| p.total_share == 0.0));
    assert!(session.ledger().pending().is_empty());
    assert_eq!(session.selected(), CURRENT_ENTRY_KEY);
    assert_eq!(
        session.display().last(),
        Some(&DisplayUpdate::PriceField(String::new()))
    );
}

#[test]
fn clearing_sentinel_or_unknown_key_is_rejected() {
    let mut session = session(&["A"]);
    session.submit_price("3", &flags(&[("A", true)])).unwrap();

    assert_eq!(
        session.request_clear(CURRENT_ENTRY_KEY),
        Err(SplitError::ProtectedEntry)
    );
    assert_eq!(
        session.request_clear("8"),
        Err(SplitError::UnknownEntry {
            key: "8".to_string()
        })
    );
    assert_eq!(
        session.select_history("8").unwrap_err(),
        SplitError::UnknownEntry {
            key: "8".to_string()
        }
    );
    assert_eq!(session.totals().total_price, 3.0);
}

#[test]
fn unknown_participants_are_all_reported() {
    let mut session = session(&["A"]);

    let result = session.submit_price("3", &flags(&[("A", true), ("X", true), ("Y", false)]));

    assert_eq!(
        result,
        Err(SplitError::UnknownParticipants {
            names: vec!["X".to_string(), "Y".to_string()]
        })
    );
    assert_eq!(session.totals().total_price, 0.0);
}

// The duplicate counter continues from the last surviving duplicate in
// history order, so a suffix freed by clearing the newest entry is reused.
#[test]
fn duplicate_counter_reuses_freed_suffix() {
    let mut session = session(&["A"]);
    let all = flags(&[("A", true)]);
    assert_eq!(session.submit_price("10", &all).unwrap(), "10");
    assert_eq!(session.submit_price("10", &all).unwrap(), "10 (1)");
    assert_eq!(session.submit_price("10", &all).unwrap(), "10 (2)");

    session.request_clear("10 (2)").unwrap();
    assert_eq!(session.submit_price("10", &all).unwrap(), "10 (2)");

    session.request_clear("10").unwrap();
    assert_eq!(session.submit_price("10", &all).unwrap(), "10 (3)");
    assert_eq!(
        session.history_keys(),
        vec![CURRENT_ENTRY_KEY, "10 (1)", "10 (2)", "10 (3)"]
    );
}

#[test]
fn history_selection_does_not_change_pending_state() {
    let mut session = session(&["A"]);
    session.submit_price("5", &flags(&[("A", true)])).unwrap();
    session.submit_price("7", &flags(&[("A", true)])).unwrap();
    let pending = session.ledger().pending().clone();

    let view = session.select_history("5").unwrap();

    assert_eq!(view.price_field_text, "5");
    assert_eq!(session.ledger().pending(), &pending);
}
