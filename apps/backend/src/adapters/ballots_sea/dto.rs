//! DTOs for ballots_sea adapter.

use uuid::Uuid;

/// DTO for creating a ballot.
#[derive(Debug, Clone)]
pub struct BallotCreate {
    pub match_id: Uuid,
    pub voter_id: Uuid,
    pub first_place_player_id: Uuid,
    pub second_place_player_id: Option<Uuid>,
    pub third_place_player_id: Option<Uuid>,
}
