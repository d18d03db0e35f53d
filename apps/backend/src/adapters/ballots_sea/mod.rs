//! SeaORM adapter for ballots repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, Order, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::ballots;

pub mod dto;

pub use dto::BallotCreate;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

/// Find the ballot a voter submitted for a match, if any.
pub async fn find_by_match_and_voter<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Uuid,
    voter_id: Uuid,
) -> Result<Option<ballots::Model>, sea_orm::DbErr> {
    ballots::Entity::find()
        .filter(ballots::Column::MatchId.eq(match_id))
        .filter(ballots::Column::VoterId.eq(voter_id))
        .one(conn)
        .await
}

/// Find all ballots for a match, oldest first.
pub async fn find_all_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Uuid,
) -> Result<Vec<ballots::Model>, sea_orm::DbErr> {
    ballots::Entity::find()
        .filter(ballots::Column::MatchId.eq(match_id))
        .order_by(ballots::Column::SubmittedAt, Order::Asc)
        .all(conn)
        .await
}

/// Count ballots for a match.
pub async fn count_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Uuid,
) -> Result<u64, sea_orm::DbErr> {
    ballots::Entity::find()
        .filter(ballots::Column::MatchId.eq(match_id))
        .count(conn)
        .await
}

/// Insert a ballot. The unique index on (match_id, voter_id) is the last
/// line of defence against double voting; a violation surfaces as a DbErr
/// the repos layer translates to the same conflict as the pre-check.
pub async fn create_ballot<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: BallotCreate,
) -> Result<ballots::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let ballot = ballots::ActiveModel {
        id: NotSet,
        match_id: Set(dto.match_id),
        voter_id: Set(dto.voter_id),
        first_place_player_id: Set(dto.first_place_player_id),
        second_place_player_id: Set(dto.second_place_player_id),
        third_place_player_id: Set(dto.third_place_player_id),
        submitted_at: Set(now),
    };

    ballot.insert(conn).await
}
