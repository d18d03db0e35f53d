//! SeaORM -> DomainError translation helpers.
//!
//! Adapters should convert `sea_orm::DbErr` into `crate::errors::domain::DomainError`
//! here, and higher layers can then map `DomainError` to `AppError` via `From`.
//!
//! The ballots unique index is the storage-level at-most-one-ballot
//! guarantee, so its violation must surface as the same `AlreadyVoted`
//! conflict the pre-check produces; the caller cannot tell whether it
//! lost a race or simply voted twice.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Extract table.column from SQLite "UNIQUE constraint failed: table.column" error messages.
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    // SQLite format: "UNIQUE constraint failed: table.column" (comma-separated for composites)
    if let Some(prefix) = error_msg.find("UNIQUE constraint failed: ") {
        let rest = &error_msg[prefix + "UNIQUE constraint failed: ".len()..];
        let table_column = rest
            .split_whitespace()
            .next()
            .or_else(|| rest.split('\n').next())
            .or_else(|| rest.split('"').next());
        return table_column;
    }
    None
}

/// Map SQLite table.column format to domain-specific conflict errors.
fn map_sqlite_table_column_to_conflict(table_column: &str) -> Option<(ConflictKind, &'static str)> {
    // composite indexes report only their first column here
    match table_column {
        "ballots.match_id," | "ballots.match_id" => Some((
            ConflictKind::AlreadyVoted,
            "A ballot already exists for this match and voter",
        )),
        "voting_sessions.match_id" => Some((
            ConflictKind::AlreadyClosed,
            "Voting is already closed for this match",
        )),
        "pom_standings.match_id," | "pom_standings.match_id" => Some((
            ConflictKind::Other("StandingsExist".into()),
            "Standings already materialized for this match",
        )),
        _ => None,
    }
}

/// Map PostgreSQL constraint names to domain-specific conflict errors.
fn map_postgres_constraint_to_conflict(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    if error_msg.contains("ux_ballots_match_voter") {
        return Some((
            ConflictKind::AlreadyVoted,
            "A ballot already exists for this match and voter",
        ));
    }
    if error_msg.contains("voting_sessions_pkey") {
        return Some((
            ConflictKind::AlreadyClosed,
            "Voting is already closed for this match",
        ));
    }
    if error_msg.contains("ux_pom_standings_match_player") {
        return Some((
            ConflictKind::Other("StandingsExist".into()),
            "Standings already materialized for this match",
        ));
    }
    None
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            // Generic record not found
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with("MATCH_NOT_FOUND:") => {
            // Structured match not found error from adapter layer
            if let Some(match_id) = msg.strip_prefix("MATCH_NOT_FOUND:") {
                warn!(match_id, "Match not found");
                return DomainError::not_found(
                    NotFoundKind::Match,
                    format!("Match {match_id} not found"),
                );
            }
            return DomainError::not_found(NotFoundKind::Match, "Match not found");
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(raw_error = %error_msg, "Unique constraint violation");

        // Try to extract table.column from SQLite format errors first
        if let Some(table_column) = extract_sqlite_table_column(&error_msg) {
            if let Some((kind, detail)) = map_sqlite_table_column_to_conflict(table_column) {
                return DomainError::conflict(kind, detail);
            }
        }

        // Check for PostgreSQL constraint name patterns
        if let Some((kind, detail)) = map_postgres_constraint_to_conflict(&error_msg) {
            return DomainError::conflict(kind, detail);
        }

        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23503") {
        warn!(raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::validation_other("Foreign key constraint violation");
    }

    if mentions_sqlstate(&error_msg, "23514") {
        warn!(raw_error = %error_msg, "Check constraint violation");
        return DomainError::validation_other("Check constraint violation");
    }

    if error_msg.contains("timeout") || error_msg.contains("pool") || error_msg.contains("unavailable")
    {
        warn!(raw_error = %error_msg, "Database timeout or pool issue");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}
