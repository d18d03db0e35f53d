//! SeaORM adapter for voting sessions repository.
//!
//! A match with no `voting_sessions` row is an open session; the row is
//! written once, at close time. The primary key on `match_id` makes the
//! close idempotence check a plain unique violation.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::entities::voting_sessions::{self, VotingStatus};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

/// Find the session row for a match, if one has been written.
pub async fn find_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Uuid,
) -> Result<Option<voting_sessions::Model>, sea_orm::DbErr> {
    voting_sessions::Entity::find()
        .filter(voting_sessions::Column::MatchId.eq(match_id))
        .one(conn)
        .await
}

/// Record the terminal Closed state for a match.
///
/// A concurrent close of the same match inserts the same primary key and
/// fails with a unique violation, which maps to the same conflict the
/// pre-check would have produced.
pub async fn insert_closed<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Uuid,
    closed_by: Uuid,
) -> Result<voting_sessions::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let session = voting_sessions::ActiveModel {
        match_id: Set(match_id),
        status: Set(VotingStatus::Closed),
        closed_by: Set(Some(closed_by)),
        closed_at: Set(Some(now)),
        created_at: Set(now),
    };

    session.insert(conn).await
}

/// Transition an existing Open row to Closed.
///
/// Returns the number of rows affected: 1 when this call performed the
/// transition, 0 when the row was already Closed (or missing).
pub async fn close_open_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Uuid,
    closed_by: Uuid,
) -> Result<u64, sea_orm::DbErr> {
    use sea_orm::sea_query::{Alias, Expr, SimpleExpr};

    let now = time::OffsetDateTime::now_utc();

    // Postgres needs the enum cast; under SQLite the same CAST would get
    // NUMERIC affinity and corrupt the stored value, so write the plain
    // string there.
    let status: SimpleExpr = match conn.get_database_backend() {
        sea_orm::DatabaseBackend::Postgres => {
            Expr::val(VotingStatus::Closed).cast_as(Alias::new("voting_status"))
        }
        _ => Expr::val(VotingStatus::Closed).into(),
    };

    let result = voting_sessions::Entity::update_many()
        .col_expr(voting_sessions::Column::Status, status)
        .col_expr(
            voting_sessions::Column::ClosedBy,
            Expr::val(Some(closed_by)).into(),
        )
        .col_expr(voting_sessions::Column::ClosedAt, Expr::val(Some(now)).into())
        .filter(voting_sessions::Column::MatchId.eq(match_id))
        .filter(voting_sessions::Column::Status.eq(VotingStatus::Open))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}
