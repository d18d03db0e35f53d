//! Session close and results.

use sea_orm::DatabaseTransaction;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{self, Standing};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::{ballots, directory, sessions, standings};

use super::{VotingResults, VotingService};

impl VotingService {
    /// Close voting for a match and materialize the final standings.
    ///
    /// Only a coach or admin of the match's team may close. Closing is a
    /// one-way transition: a session that is already Closed reports a
    /// conflict, never a second set of standings. Two concurrent closes
    /// race on the session row; the loser either updates zero rows or
    /// trips the primary key, and both paths surface the same conflict.
    pub async fn close_voting(
        &self,
        txn: &DatabaseTransaction,
        match_id: Uuid,
        user_id: Uuid,
    ) -> Result<Vec<Standing>, AppError> {
        info!(%match_id, %user_id, "Closing voting");

        let m = directory::require_match(txn, match_id).await?;

        let membership = directory::find_membership(txn, m.team_id, user_id).await?;
        let allowed = membership.map(|mb| mb.can_close_voting()).unwrap_or(false);
        if !allowed {
            return Err(DomainError::forbidden(
                "Closing a voting session requires a coach or admin role",
            )
            .into());
        }

        match sessions::find_by_match(txn, match_id).await? {
            Some(session) if session.is_closed() => {
                return Err(DomainError::conflict(
                    ConflictKind::AlreadyClosed,
                    "Voting for this match is already closed",
                )
                .into());
            }
            Some(_) => {
                let affected = sessions::close_open_session(txn, match_id, user_id).await?;
                if affected == 0 {
                    // Lost the race to a concurrent close
                    return Err(DomainError::conflict(
                        ConflictKind::AlreadyClosed,
                        "Voting for this match is already closed",
                    )
                    .into());
                }
            }
            None => {
                // No row yet: write the terminal state directly. A concurrent
                // close inserting the same key fails the PK and maps to the
                // same conflict.
                sessions::insert_closed(txn, match_id, user_id).await?;
            }
        }

        let cast = ballots::find_all_by_match(txn, match_id).await?;
        let nominee_sets: Vec<_> = cast.iter().map(|b| b.nominees).collect();
        let table = domain::tally(&nominee_sets);
        standings::insert_standings(txn, match_id, &table).await?;

        info!(
            %match_id,
            ballots = nominee_sets.len(),
            players = table.len(),
            "Voting closed, standings recorded"
        );
        debug!(%match_id, "Transition: Open -> Closed");

        Ok(table)
    }

    /// Results for a match: final standings once closed, otherwise only
    /// how many ballots are in. Standings are never exposed mid-session.
    pub async fn get_results(
        &self,
        txn: &DatabaseTransaction,
        match_id: Uuid,
    ) -> Result<VotingResults, AppError> {
        directory::require_match(txn, match_id).await?;

        if sessions::is_closed(txn, match_id).await? {
            let table = standings::find_all_by_match(txn, match_id).await?;
            return Ok(VotingResults::Final(table));
        }

        let ballots_cast = ballots::count_by_match(txn, match_id).await?;
        Ok(VotingResults::InProgress { ballots_cast })
    }
}
