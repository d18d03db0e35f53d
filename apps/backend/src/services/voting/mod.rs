//! Player-of-the-match voting orchestration - bridges pure domain logic
//! with DB persistence.
//!
//! Submodules hold the impl blocks: ballot submission, eligibility
//! listing, and session close/results.

use uuid::Uuid;

use crate::domain::Standing;

mod ballots;
mod eligibility;
mod session;

/// Voting service - methods run inside a caller-provided transaction.
pub struct VotingService;

impl VotingService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VotingService {
    fn default() -> Self {
        Self::new()
    }
}

/// Results of a voting session as seen by a client.
///
/// Standings are only exposed once voting is closed; an open session
/// reports the ballot count and nothing about who is leading.
#[derive(Debug, Clone, PartialEq)]
pub enum VotingResults {
    InProgress { ballots_cast: u64 },
    Final(Vec<Standing>),
}

/// One match a voter can still act on, with its window bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchEligibility {
    pub match_id: Uuid,
    pub opponent: String,
    /// End-of-match reference the window is anchored to.
    pub ended_at: time::OffsetDateTime,
    pub window_closes_at: time::OffsetDateTime,
    /// The voter already has a ballot on record for this match.
    pub already_voted: bool,
}
