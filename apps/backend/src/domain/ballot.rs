//! Ballot nominee validation.
//!
//! A ballot arrives from the client as an untrusted [`NomineeDraft`] with
//! three optional rank slots. [`validate_nominees`] turns it into a
//! [`Nominees`] value whose invariants hold: first place present, every
//! nominee on the match's roster, no player in more than one slot.

use uuid::Uuid;

use crate::errors::domain::{DomainError, ValidationKind};

/// Untrusted nominee input as submitted by a voter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NomineeDraft {
    pub first_place: Option<Uuid>,
    pub second_place: Option<Uuid>,
    pub third_place: Option<Uuid>,
}

/// Validated ranked nominees. First place is mandatory, lower ranks optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nominees {
    pub first_place: Uuid,
    pub second_place: Option<Uuid>,
    pub third_place: Option<Uuid>,
}

impl Nominees {
    /// Nominees in rank order, skipping empty slots.
    pub fn ranked(&self) -> impl Iterator<Item = Uuid> + '_ {
        std::iter::once(self.first_place)
            .chain(self.second_place)
            .chain(self.third_place)
    }
}

/// Validate a draft against the match's team roster.
///
/// Check order mirrors the submission pipeline: roster membership first,
/// then the required first place, then duplicate slots. Duplicate-ballot
/// and window checks need I/O and live in the service layer.
pub fn validate_nominees(draft: &NomineeDraft, roster: &[Uuid]) -> Result<Nominees, DomainError> {
    for nominee in [draft.first_place, draft.second_place, draft.third_place]
        .into_iter()
        .flatten()
    {
        if !roster.contains(&nominee) {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayer,
                format!("Player {nominee} is not on the match's team"),
            ));
        }
    }

    let first_place = draft.first_place.ok_or_else(|| {
        DomainError::validation(
            ValidationKind::MissingFirstPlace,
            "A first-place nominee is required",
        )
    })?;

    let nominees = Nominees {
        first_place,
        second_place: draft.second_place,
        third_place: draft.third_place,
    };

    let mut seen = Vec::with_capacity(3);
    for nominee in nominees.ranked() {
        if seen.contains(&nominee) {
            return Err(DomainError::validation(
                ValidationKind::DuplicateNomination,
                format!("Player {nominee} is nominated for more than one rank"),
            ));
        }
        seen.push(nominee);
    }

    Ok(nominees)
}
