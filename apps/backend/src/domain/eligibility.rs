//! Voting window rules.
//!
//! A match is open for voting from the moment it ends until 48 hours
//! later. Matches without a recorded end time fall back to their
//! scheduled kickoff as the end reference.

use time::{Duration, OffsetDateTime};

/// How long after a match ends that ballots are still accepted.
pub const VOTING_WINDOW: Duration = Duration::hours(48);

/// End-of-match reference time used for the voting window.
pub fn voting_reference_end(
    kickoff_at: OffsetDateTime,
    ended_at: Option<OffsetDateTime>,
) -> OffsetDateTime {
    ended_at.unwrap_or(kickoff_at)
}

/// Instant at which the voting window closes.
pub fn window_closes_at(end: OffsetDateTime) -> OffsetDateTime {
    end + VOTING_WINDOW
}

/// Whether voting is open at `now` for a match that ended at `end`.
///
/// The window is inclusive at both edges: voting opens the second the
/// match ends and a ballot stamped exactly 48h after the end still counts.
pub fn is_window_open(end: OffsetDateTime, now: OffsetDateTime) -> bool {
    end <= now && now <= window_closes_at(end)
}
