use uuid::Uuid;

use crate::domain::ballot::{validate_nominees, NomineeDraft};
use crate::domain::test_prelude::player_id;
use crate::errors::domain::{DomainError, ValidationKind};

fn roster() -> Vec<Uuid> {
    vec![player_id(1), player_id(2), player_id(3), player_id(4)]
}

#[test]
fn full_ballot_passes_validation() {
    let draft = NomineeDraft {
        first_place: Some(player_id(1)),
        second_place: Some(player_id(2)),
        third_place: Some(player_id(3)),
    };

    let nominees = validate_nominees(&draft, &roster()).unwrap();
    assert_eq!(nominees.first_place, player_id(1));
    assert_eq!(nominees.second_place, Some(player_id(2)));
    assert_eq!(nominees.third_place, Some(player_id(3)));
}

#[test]
fn first_place_only_is_enough() {
    let draft = NomineeDraft {
        first_place: Some(player_id(2)),
        ..NomineeDraft::default()
    };

    let nominees = validate_nominees(&draft, &roster()).unwrap();
    assert_eq!(nominees.first_place, player_id(2));
    assert_eq!(nominees.second_place, None);
    assert_eq!(nominees.third_place, None);
}

#[test]
fn nominee_off_roster_is_rejected() {
    let draft = NomineeDraft {
        first_place: Some(player_id(1)),
        second_place: Some(player_id(99)),
        third_place: None,
    };

    let err = validate_nominees(&draft, &roster()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidPlayer, _)
    ));
}

#[test]
fn missing_first_place_is_rejected() {
    let draft = NomineeDraft {
        first_place: None,
        second_place: Some(player_id(2)),
        third_place: Some(player_id(3)),
    };

    let err = validate_nominees(&draft, &roster()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::MissingFirstPlace, _)
    ));
}

#[test]
fn roster_check_runs_before_missing_first_place() {
    // both problems present; the roster failure must win
    let draft = NomineeDraft {
        first_place: None,
        second_place: Some(player_id(99)),
        third_place: None,
    };

    let err = validate_nominees(&draft, &roster()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidPlayer, _)
    ));
}

#[test]
fn same_player_in_two_slots_is_rejected() {
    let draft = NomineeDraft {
        first_place: Some(player_id(1)),
        second_place: Some(player_id(1)),
        third_place: None,
    };

    let err = validate_nominees(&draft, &roster()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::DuplicateNomination, _)
    ));
}

#[test]
fn duplicate_in_second_and_third_is_rejected() {
    let draft = NomineeDraft {
        first_place: Some(player_id(1)),
        second_place: Some(player_id(2)),
        third_place: Some(player_id(2)),
    };

    let err = validate_nominees(&draft, &roster()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::DuplicateNomination, _)
    ));
}
