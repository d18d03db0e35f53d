//! DTOs for standings_sea adapter.

use uuid::Uuid;

/// DTO for one row of a materialized standings table.
#[derive(Debug, Clone)]
pub struct StandingCreate {
    pub match_id: Uuid,
    pub player_id: Uuid,
    pub first_place_votes: i32,
    pub second_place_votes: i32,
    pub third_place_votes: i32,
    pub total_points: i32,
    pub final_position: i32,
}
