//! Eligibility listing: which matches a voter can still vote on.

use sea_orm::DatabaseTransaction;
use tracing::debug;
use uuid::Uuid;

use crate::domain;
use crate::error::AppError;
use crate::repos::{ballots, directory, sessions};

use super::{MatchEligibility, VotingService};

impl VotingService {
    /// List the team's matches that are currently open for voting.
    ///
    /// A match qualifies when it has ended (kickoff stands in for the end
    /// when full-time was never recorded), the window around that end is
    /// still open, and nobody has closed its session. The list is ordered
    /// most recently ended first, on the same end reference the window
    /// uses. Matches the voter already voted on stay in the list with
    /// `already_voted` set, so a client can show them as done rather than
    /// dropping them.
    pub async fn list_eligible_matches(
        &self,
        txn: &DatabaseTransaction,
        team_id: Uuid,
        voter_id: Uuid,
    ) -> Result<Vec<MatchEligibility>, AppError> {
        let now = time::OffsetDateTime::now_utc();
        let cutoff = now - domain::VOTING_WINDOW;
        let matches = directory::find_recent_matches_by_team(txn, team_id, cutoff).await?;

        let mut eligible = Vec::new();
        for m in matches {
            let end = domain::voting_reference_end(m.kickoff_at, m.ended_at);
            if !domain::is_window_open(end, now) {
                continue;
            }
            if sessions::is_closed(txn, m.id).await? {
                continue;
            }
            let already_voted = ballots::find_by_match_and_voter(txn, m.id, voter_id)
                .await?
                .is_some();

            eligible.push(MatchEligibility {
                match_id: m.id,
                opponent: m.opponent,
                ended_at: end,
                window_closes_at: domain::window_closes_at(end),
                already_voted,
            });
        }

        eligible.sort_by(|a, b| b.ended_at.cmp(&a.ended_at));

        debug!(%team_id, %voter_id, count = eligible.len(), "Eligible matches listed");
        Ok(eligible)
    }
}
