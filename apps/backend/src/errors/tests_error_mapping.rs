// Unit tests for error mapping - pure logic without HTTP or database dependencies
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::infra::db_errors::map_db_err;
use crate::{AppError, ErrorCode};

#[test]
fn maps_ballot_validation_kinds() {
    let expired = DomainError::validation(ValidationKind::VotingExpired, "window passed");
    let app: AppError = expired.into();
    assert_eq!(app.code(), ErrorCode::VotingExpired);
    assert_eq!(app.status(), 400);

    let invalid = DomainError::validation(ValidationKind::InvalidPlayer, "not on roster");
    let app: AppError = invalid.into();
    assert_eq!(app.code().as_str(), "INVALID_PLAYER");

    let missing = DomainError::validation(ValidationKind::MissingFirstPlace, "first required");
    let app: AppError = missing.into();
    assert_eq!(app.code().as_str(), "MISSING_FIRST_PLACE");

    let dup = DomainError::validation(ValidationKind::DuplicateNomination, "same player twice");
    let app: AppError = dup.into();
    assert_eq!(app.code().as_str(), "DUPLICATE_NOMINATION");
}

#[test]
fn maps_conflicts() {
    let voted = DomainError::conflict(ConflictKind::AlreadyVoted, "ballot exists");
    let app: AppError = voted.into();
    assert_eq!(app.code().as_str(), "ALREADY_VOTED");
    assert_eq!(app.status(), 409);

    let closed = DomainError::conflict(ConflictKind::VotingClosed, "session closed");
    let app: AppError = closed.into();
    assert_eq!(app.code().as_str(), "VOTING_CLOSED");

    let again = DomainError::conflict(ConflictKind::AlreadyClosed, "already closed");
    let app: AppError = again.into();
    assert_eq!(app.code().as_str(), "ALREADY_CLOSED");

    // Test generic conflict fallback
    let other = DomainError::conflict(ConflictKind::Other("some conflict".to_string()), "generic");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
}

#[test]
fn maps_not_found_and_forbidden() {
    let nf = DomainError::not_found(NotFoundKind::Match, "no match");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "MATCH_NOT_FOUND");
    assert_eq!(app.status(), 404);

    let forbidden = DomainError::forbidden("coach or admin role required");
    let app: AppError = forbidden.into();
    assert_eq!(app.code().as_str(), "FORBIDDEN");
    assert_eq!(app.status(), 403);
}

#[test]
fn maps_infra() {
    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status(), 503);

    let other = DomainError::infra(InfraErrorKind::Other("unknown".to_string()), "other");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "DB_ERROR");
    assert_eq!(app.status(), 500);
}

#[test]
fn postgres_ballot_unique_violation_becomes_already_voted() {
    let err = sea_orm::DbErr::Custom(
        "error returned from database: duplicate key value violates unique constraint \"ux_ballots_match_voter\"".to_string(),
    );
    let mapped = map_db_err(err);
    assert!(matches!(
        mapped,
        DomainError::Conflict(ConflictKind::AlreadyVoted, _)
    ));
}

#[test]
fn sqlite_ballot_unique_violation_becomes_already_voted() {
    let err = sea_orm::DbErr::Custom(
        "UNIQUE constraint failed: ballots.match_id, ballots.voter_id".to_string(),
    );
    let mapped = map_db_err(err);
    assert!(matches!(
        mapped,
        DomainError::Conflict(ConflictKind::AlreadyVoted, _)
    ));
}

#[test]
fn session_pk_violation_becomes_already_closed() {
    let pg = sea_orm::DbErr::Custom(
        "error returned from database: duplicate key value violates unique constraint \"voting_sessions_pkey\"".to_string(),
    );
    assert!(matches!(
        map_db_err(pg),
        DomainError::Conflict(ConflictKind::AlreadyClosed, _)
    ));

    let sqlite =
        sea_orm::DbErr::Custom("UNIQUE constraint failed: voting_sessions.match_id".to_string());
    assert!(matches!(
        map_db_err(sqlite),
        DomainError::Conflict(ConflictKind::AlreadyClosed, _)
    ));
}

#[test]
fn unknown_unique_violation_falls_back_to_generic_conflict() {
    let err = sea_orm::DbErr::Custom(
        "duplicate key value violates unique constraint \"something_else\"".to_string(),
    );
    assert!(matches!(
        map_db_err(err),
        DomainError::Conflict(ConflictKind::Other(_), _)
    ));
}

#[test]
fn structured_match_not_found_is_parsed() {
    let err = sea_orm::DbErr::Custom(
        "MATCH_NOT_FOUND:5f0c9d6e-1111-2222-3333-444455556666".to_string(),
    );
    assert!(matches!(
        map_db_err(err),
        DomainError::NotFound(NotFoundKind::Match, _)
    ));
}
