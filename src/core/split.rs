//! Equal splitting of a price among participants.

use super::error::SplitError;
use super::history::HistoryEntry;
use super::participant::Participant;

/// Anything that can say who is "in" for a price.
///
/// The live toggles of the ledger and a recorded history snapshot both
/// answer this question, and clearing an entry must use the recorded answer
/// rather than whatever the toggles say now.
pub trait ParticipationSource {
    /// Number of participants flagged as participating.
    fn participating_count(&self) -> usize;
}

impl ParticipationSource for [Participant] {
    fn participating_count(&self) -> usize {
        self.iter().filter(|p| p.is_participating).count()
    }
}

impl ParticipationSource for Vec<Participant> {
    fn participating_count(&self) -> usize {
        self.as_slice().participating_count()
    }
}

impl ParticipationSource for HistoryEntry {
    fn participating_count(&self) -> usize {
        self.shares
            .iter()
            .filter(|share| share.is_participating)
            .count()
    }
}

/// Divide `price` equally among the participants flagged in `source`.
///
/// Plain floating-point division, no rounding.
///
/// # Example
///
/// ```rust
/// use splitter::core::{split, Participant};
///
/// let mut people: Vec<Participant> = ["A", "B", "C"].into_iter().map(Participant::new).collect();
/// people.iter_mut().for_each(|p| p.is_participating = true);
///
/// assert_eq!(split(30.0, &people).unwrap(), 10.0);
/// ```
pub fn split<P>(price: f64, source: &P) -> Result<f64, SplitError>
where
    P: ParticipationSource + ?Sized,
{
    match source.participating_count() {
        0 => Err(SplitError::NoParticipants),
        count => Ok(price / count as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::history::ShareSnapshot;
    use chrono::Utc;

    fn people(flags: &[(&str, bool)]) -> Vec<Participant> {
        flags
            .iter()
            .map(|(name, flag)| Participant {
                is_participating: *flag,
                ..Participant::new(*name)
            })
            .collect()
    }

    #[test]
    fn splits_evenly_among_participants() {
        let live = people(&[("A", true), ("B", true), ("C", true)]);
        assert_eq!(split(30.0, &live).unwrap(), 10.0);
    }

    #[test]
    fn ignores_participants_who_are_out() {
        let live = people(&[("A", true), ("B", false), ("C", true)]);
        assert_eq!(split(30.0, &live).unwrap(), 15.0);
    }

    #[test]
    fn nobody_in_is_an_error() {
        let live = people(&[("A", false), ("B", false)]);
        assert_eq!(split(10.0, &live), Err(SplitError::NoParticipants));
    }

    #[test]
    fn negative_and_zero_prices_split_too() {
        let live = people(&[("A", true), ("B", true)]);
        assert_eq!(split(-8.0, &live).unwrap(), -4.0);
        assert_eq!(split(0.0, &live).unwrap(), 0.0);
    }

    #[test]
    fn division_is_not_rounded() {
        let live = people(&[("A", true), ("B", true), ("C", true)]);
        assert_eq!(split(10.0, &live).unwrap(), 10.0 / 3.0);
    }

    #[test]
    fn counts_recorded_participation() {
        let entry = HistoryEntry {
            price: 9.0,
            recorded_at: Utc::now(),
            shares: vec![
                ShareSnapshot {
                    name: "A".to_string(),
                    is_participating: true,
                    price_share: 4.5,
                    total_share: 4.5,
                },
                ShareSnapshot {
                    name: "B".to_string(),
                    is_participating: false,
                    price_share: 0.0,
                    total_share: 0.0,
                },
                ShareSnapshot {
                    name: "C".to_string(),
                    is_participating: true,
                    price_share: 4.5,
                    total_share: 4.5,
                },
            ],
        };

        assert_eq!(entry.participating_count(), 2);
        assert_eq!(split(entry.price, &entry).unwrap(), 4.5);
    }
}
