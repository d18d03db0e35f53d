//! Ballot submission.

use sea_orm::DatabaseTransaction;
use tracing::{debug, info};

use uuid::Uuid;

use crate::domain::{self, NomineeDraft};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::repos::ballots::{self, Ballot};
use crate::repos::{directory, sessions};

use super::VotingService;

impl VotingService {
    /// Submit a voter's ballot for a match.
    ///
    /// Checks run in a fixed order so a ballot failing several rules
    /// always reports the same error: closed session, then an existing
    /// ballot, then the voting window, then nominee validation. The
    /// unique index on (match_id, voter_id) backs the existing-ballot
    /// check, so a concurrent double submit loses with the same
    /// conflict the pre-check reports.
    pub async fn submit_vote(
        &self,
        txn: &DatabaseTransaction,
        match_id: Uuid,
        voter_id: Uuid,
        draft: NomineeDraft,
    ) -> Result<Ballot, AppError> {
        debug!(%match_id, %voter_id, "Submitting ballot");

        let m = directory::require_match(txn, match_id).await?;

        if sessions::is_closed(txn, match_id).await? {
            return Err(DomainError::conflict(
                ConflictKind::VotingClosed,
                "Voting for this match has been closed",
            )
            .into());
        }

        if ballots::find_by_match_and_voter(txn, match_id, voter_id)
            .await?
            .is_some()
        {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyVoted,
                "You have already voted for this match",
            )
            .into());
        }

        let end = domain::voting_reference_end(m.kickoff_at, m.ended_at);
        let now = time::OffsetDateTime::now_utc();
        if !domain::is_window_open(end, now) {
            return Err(DomainError::validation(
                ValidationKind::VotingExpired,
                "The voting window for this match has passed",
            )
            .into());
        }

        let roster: Vec<Uuid> = directory::find_players_by_team(txn, m.team_id)
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();
        let nominees = domain::validate_nominees(&draft, &roster)?;

        let ballot = ballots::create_ballot(txn, match_id, voter_id, nominees).await?;

        info!(%match_id, %voter_id, "Ballot recorded");
        Ok(ballot)
    }
}
