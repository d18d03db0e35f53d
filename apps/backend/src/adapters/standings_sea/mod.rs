//! SeaORM adapter for materialized match standings.

use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, NotSet, Order, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::pom_standings;

pub mod dto;

pub use dto::StandingCreate;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

/// Find all standings rows for a match, best placed first.
pub async fn find_all_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Uuid,
) -> Result<Vec<pom_standings::Model>, sea_orm::DbErr> {
    pom_standings::Entity::find()
        .filter(pom_standings::Column::MatchId.eq(match_id))
        .order_by(pom_standings::Column::FinalPosition, Order::Asc)
        .order_by(pom_standings::Column::PlayerId, Order::Asc)
        .all(conn)
        .await
}

/// Insert the full standings table for a match in one statement.
///
/// An empty tally (no ballots) inserts nothing; the closed session row is
/// still the marker that results are final.
pub async fn insert_many<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    rows: Vec<StandingCreate>,
) -> Result<(), sea_orm::DbErr> {
    if rows.is_empty() {
        return Ok(());
    }

    let now = time::OffsetDateTime::now_utc();

    let models = rows.into_iter().map(|dto| pom_standings::ActiveModel {
        id: NotSet,
        match_id: Set(dto.match_id),
        player_id: Set(dto.player_id),
        first_place_votes: Set(dto.first_place_votes),
        second_place_votes: Set(dto.second_place_votes),
        third_place_votes: Set(dto.third_place_votes),
        total_points: Set(dto.total_points),
        final_position: Set(dto.final_position),
        created_at: Set(now),
    });

    pom_standings::Entity::insert_many(models).exec(conn).await?;
    Ok(())
}
