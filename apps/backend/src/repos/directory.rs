//! Club directory repository: matches, players and team memberships.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::directory_sea as directory_adapter;
use crate::entities::team_members::MemberRole;
use crate::entities::{matches, players, team_members};
use crate::errors::domain::DomainError;

/// Match domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: Uuid,
    pub team_id: Uuid,
    pub opponent: String,
    pub kickoff_at: time::OffsetDateTime,
    pub ended_at: Option<time::OffsetDateTime>,
}

/// Player domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: Uuid,
    pub team_id: Uuid,
    pub display_name: String,
}

/// Team membership domain model
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMembership {
    pub team_id: Uuid,
    pub user_id: Uuid,
    pub role: MemberRole,
}

impl TeamMembership {
    /// Whether this member may close voting for the team's matches.
    pub fn can_close_voting(&self) -> bool {
        matches!(self.role, MemberRole::Coach | MemberRole::Admin)
    }
}

// Free functions (generic) for directory lookups

/// Find a match by ID
pub async fn find_match_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Uuid,
) -> Result<Option<Match>, DomainError> {
    let m = directory_adapter::find_match_by_id(conn, match_id).await?;
    Ok(m.map(Match::from))
}

/// Find a match by ID or fail with a match not-found error
pub async fn require_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Uuid,
) -> Result<Match, DomainError> {
    let m = directory_adapter::require_match(conn, match_id).await?;
    Ok(Match::from(m))
}

/// Matches for a team whose end reference is no older than `cutoff`
pub async fn find_recent_matches_by_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: Uuid,
    cutoff: time::OffsetDateTime,
) -> Result<Vec<Match>, DomainError> {
    let rows = directory_adapter::find_recent_matches_by_team(conn, team_id, cutoff).await?;
    Ok(rows.into_iter().map(Match::from).collect())
}

/// The roster of a team
pub async fn find_players_by_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: Uuid,
) -> Result<Vec<Player>, DomainError> {
    let rows = directory_adapter::find_players_by_team(conn, team_id).await?;
    Ok(rows.into_iter().map(Player::from).collect())
}

/// Find a user's membership in a team
pub async fn find_membership<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: Uuid,
    user_id: Uuid,
) -> Result<Option<TeamMembership>, DomainError> {
    let row = directory_adapter::find_membership(conn, team_id, user_id).await?;
    Ok(row.map(TeamMembership::from))
}

// Conversions between SeaORM models and domain models

impl From<matches::Model> for Match {
    fn from(model: matches::Model) -> Self {
        Self {
            id: model.id,
            team_id: model.team_id,
            opponent: model.opponent,
            kickoff_at: model.kickoff_at,
            ended_at: model.ended_at,
        }
    }
}

impl From<players::Model> for Player {
    fn from(model: players::Model) -> Self {
        Self {
            id: model.id,
            team_id: model.team_id,
            display_name: model.display_name,
        }
    }
}

impl From<team_members::Model> for TeamMembership {
    fn from(model: team_members::Model) -> Self {
        Self {
            team_id: model.team_id,
            user_id: model.user_id,
            role: model.role,
        }
    }
}
