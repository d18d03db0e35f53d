//! SeaORM adapter for the club directory: matches, players, memberships.

use sea_orm::{ColumnTrait, Condition, ConnectionTrait, EntityTrait, Order, QueryFilter, QueryOrder};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::entities::{matches, players, team_members};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn find_match_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Uuid,
) -> Result<Option<matches::Model>, sea_orm::DbErr> {
    matches::Entity::find()
        .filter(matches::Column::Id.eq(match_id))
        .one(conn)
        .await
}

/// Find a match by ID or return a structured not-found error.
///
/// The payload carries the match id so the error mapper can report which
/// match was missing without re-querying.
pub async fn require_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Uuid,
) -> Result<matches::Model, sea_orm::DbErr> {
    find_match_by_id(conn, match_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::Custom(format!("MATCH_NOT_FOUND:{match_id}")))
}

/// Matches for a team whose voting window may still be open.
///
/// The window is anchored to full-time, falling back to kickoff when no
/// end was recorded, so the filter mirrors that: either the recorded end
/// or (absent one) the kickoff must be no older than `cutoff`. The caller
/// applies the exact window check and the final ordering on the computed
/// end reference; this only bounds the scan.
pub async fn find_recent_matches_by_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: Uuid,
    cutoff: OffsetDateTime,
) -> Result<Vec<matches::Model>, sea_orm::DbErr> {
    matches::Entity::find()
        .filter(matches::Column::TeamId.eq(team_id))
        .filter(
            Condition::any()
                .add(matches::Column::EndedAt.gte(cutoff))
                .add(
                    Condition::all()
                        .add(matches::Column::EndedAt.is_null())
                        .add(matches::Column::KickoffAt.gte(cutoff)),
                ),
        )
        .order_by(matches::Column::KickoffAt, Order::Desc)
        .all(conn)
        .await
}

/// The roster of a team, sorted for stable presentation.
pub async fn find_players_by_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: Uuid,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::TeamId.eq(team_id))
        .order_by(players::Column::DisplayName, Order::Asc)
        .order_by(players::Column::Id, Order::Asc)
        .all(conn)
        .await
}

pub async fn find_membership<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: Uuid,
    user_id: Uuid,
) -> Result<Option<team_members::Model>, sea_orm::DbErr> {
    team_members::Entity::find()
        .filter(team_members::Column::TeamId.eq(team_id))
        .filter(team_members::Column::UserId.eq(user_id))
        .one(conn)
        .await
}
