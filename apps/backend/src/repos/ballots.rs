//! Ballots repository functions for domain layer.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::ballots_sea as ballots_adapter;
use crate::domain::Nominees;
use crate::entities::ballots;
use crate::errors::domain::DomainError;

/// Ballot domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Ballot {
    pub id: i64,
    pub match_id: Uuid,
    pub voter_id: Uuid,
    pub nominees: Nominees,
    pub submitted_at: time::OffsetDateTime,
}

// Free functions (generic) for ballot operations

/// Record a voter's nominations for a match
pub async fn create_ballot<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Uuid,
    voter_id: Uuid,
    nominees: Nominees,
) -> Result<Ballot, DomainError> {
    let dto = ballots_adapter::BallotCreate {
        match_id,
        voter_id,
        first_place_player_id: nominees.first_place,
        second_place_player_id: nominees.second_place,
        third_place_player_id: nominees.third_place,
    };
    let ballot = ballots_adapter::create_ballot(conn, dto).await?;
    Ok(Ballot::from(ballot))
}

/// Find the ballot a voter submitted for a match, if any
pub async fn find_by_match_and_voter<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Uuid,
    voter_id: Uuid,
) -> Result<Option<Ballot>, DomainError> {
    let ballot = ballots_adapter::find_by_match_and_voter(conn, match_id, voter_id).await?;
    Ok(ballot.map(Ballot::from))
}

/// Find all ballots for a match, oldest first
pub async fn find_all_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Uuid,
) -> Result<Vec<Ballot>, DomainError> {
    let ballots = ballots_adapter::find_all_by_match(conn, match_id).await?;
    Ok(ballots.into_iter().map(Ballot::from).collect())
}

/// Count how many ballots have been cast for a match
pub async fn count_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Uuid,
) -> Result<u64, DomainError> {
    let count = ballots_adapter::count_by_match(conn, match_id).await?;
    Ok(count)
}

// Conversions between SeaORM models and domain models

impl From<ballots::Model> for Ballot {
    fn from(model: ballots::Model) -> Self {
        Self {
            id: model.id,
            match_id: model.match_id,
            voter_id: model.voter_id,
            nominees: Nominees {
                first_place: model.first_place_player_id,
                second_place: model.second_place_player_id,
                third_place: model.third_place_player_id,
            },
            submitted_at: model.submitted_at,
        }
    }
}
