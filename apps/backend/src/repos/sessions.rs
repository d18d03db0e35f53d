//! Voting session repository functions for domain layer.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::sessions_sea as sessions_adapter;
use crate::entities::voting_sessions::{self, VotingStatus};
use crate::errors::domain::DomainError;

/// Voting session domain model.
///
/// A session only exists as a row once it has been closed; callers treat a
/// missing session as Open.
#[derive(Debug, Clone, PartialEq)]
pub struct VotingSession {
    pub match_id: Uuid,
    pub status: VotingStatus,
    pub closed_by: Option<Uuid>,
    pub closed_at: Option<time::OffsetDateTime>,
    pub created_at: time::OffsetDateTime,
}

impl VotingSession {
    pub fn is_closed(&self) -> bool {
        self.status == VotingStatus::Closed
    }
}

// Free functions (generic) for session operations

/// Find the recorded session state for a match, if any
pub async fn find_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Uuid,
) -> Result<Option<VotingSession>, DomainError> {
    let session = sessions_adapter::find_by_match(conn, match_id).await?;
    Ok(session.map(VotingSession::from))
}

/// Whether voting for a match has been closed
pub async fn is_closed<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Uuid,
) -> Result<bool, DomainError> {
    let session = find_by_match(conn, match_id).await?;
    Ok(session.map(|s| s.is_closed()).unwrap_or(false))
}

/// Record the terminal Closed state for a match
pub async fn insert_closed<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Uuid,
    closed_by: Uuid,
) -> Result<VotingSession, DomainError> {
    let session = sessions_adapter::insert_closed(conn, match_id, closed_by).await?;
    Ok(VotingSession::from(session))
}

/// Transition an existing Open row to Closed; returns rows affected
pub async fn close_open_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Uuid,
    closed_by: Uuid,
) -> Result<u64, DomainError> {
    let affected = sessions_adapter::close_open_session(conn, match_id, closed_by).await?;
    Ok(affected)
}

// Conversions between SeaORM models and domain models

impl From<voting_sessions::Model> for VotingSession {
    fn from(model: voting_sessions::Model) -> Self {
        Self {
            match_id: model.match_id,
            status: model.status,
            closed_by: model.closed_by,
            closed_at: model.closed_at,
            created_at: model.created_at,
        }
    }
}
