//! Name checks for participation requests.
//!
//! All unknown names are collected with `Validation` so a caller sees every
//! typo at once instead of fixing them one by one.

use crate::core::{Participant, SplitError};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check that every name refers to a participant of the ledger.
///
/// Returns `Validation::Failure` holding every unknown name, in the order
/// they were given.
pub fn check_names<'a, I>(participants: &[Participant], names: I) -> Validation<(), NonEmptyVec<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let checks: Vec<Validation<(), NonEmptyVec<String>>> = names
        .into_iter()
        .map(|name| {
            if participants.iter().any(|p| p.name == name) {
                Validation::success(())
            } else {
                Validation::fail(name.to_string())
            }
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

/// Same check, folded into a [`SplitError::UnknownParticipants`].
pub fn ensure_known<'a, I>(participants: &[Participant], names: I) -> Result<(), SplitError>
where
    I: IntoIterator<Item = &'a str>,
{
    match check_names(participants, names) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(unknown) => Err(SplitError::UnknownParticipants {
            names: unknown.iter().cloned().collect(),
        }),
    }
}
