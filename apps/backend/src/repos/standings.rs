//! Standings repository functions for domain layer.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::standings_sea as standings_adapter;
use crate::domain::Standing;
use crate::entities::pom_standings;
use crate::errors::domain::DomainError;

// Free functions (generic) for standings operations

/// Materialize a computed standings table for a match
pub async fn insert_standings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Uuid,
    standings: &[Standing],
) -> Result<(), DomainError> {
    let rows = standings
        .iter()
        .map(|s| standings_adapter::StandingCreate {
            match_id,
            player_id: s.player_id,
            first_place_votes: s.first_place_votes,
            second_place_votes: s.second_place_votes,
            third_place_votes: s.third_place_votes,
            total_points: s.total_points,
            final_position: s.final_position,
        })
        .collect();
    standings_adapter::insert_many(conn, rows).await?;
    Ok(())
}

/// Find the materialized standings for a match, best placed first
pub async fn find_all_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Uuid,
) -> Result<Vec<Standing>, DomainError> {
    let rows = standings_adapter::find_all_by_match(conn, match_id).await?;
    Ok(rows.into_iter().map(Standing::from).collect())
}

// Conversions between SeaORM models and domain models

impl From<pom_standings::Model> for Standing {
    fn from(model: pom_standings::Model) -> Self {
        Self {
            player_id: model.player_id,
            first_place_votes: model.first_place_votes,
            second_place_votes: model.second_place_votes,
            third_place_votes: model.third_place_votes,
            total_points: model.total_points,
            final_position: model.final_position,
        }
    }
}
