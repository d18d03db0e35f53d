//! Error codes for the clubhub voting backend.
//!
//! This module defines all error codes surfaced to callers.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in problem-details payloads.

use core::fmt;

/// Centralized error codes for the voting backend.
///
/// This enum ensures type safety and prevents the use of ad-hoc error codes.
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authorization
    /// Actor lacks the role to perform this operation
    Forbidden,

    // Ballot validation
    /// Past the 48-hour voting window
    VotingExpired,
    /// Nominee is not on the match's team
    InvalidPlayer,
    /// First-place nominee missing
    MissingFirstPlace,
    /// Same player nominated for more than one rank
    DuplicateNomination,
    /// General validation error
    ValidationError,

    // Session conflicts
    /// Voter already has a ballot for this match
    AlreadyVoted,
    /// Session closed; no more votes accepted
    VotingClosed,
    /// Close requested twice (safe no-op signal)
    AlreadyClosed,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // Resource not found
    /// Match not found
    MatchNotFound,
    /// Player not found
    PlayerNotFound,
    /// Voting session not found
    SessionNotFound,
    /// General not found error
    NotFound,

    // System errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout
    DbTimeout,
    /// Configuration error
    ConfigError,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Forbidden => "FORBIDDEN",

            Self::VotingExpired => "VOTING_EXPIRED",
            Self::InvalidPlayer => "INVALID_PLAYER",
            Self::MissingFirstPlace => "MISSING_FIRST_PLACE",
            Self::DuplicateNomination => "DUPLICATE_NOMINATION",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::AlreadyVoted => "ALREADY_VOTED",
            Self::VotingClosed => "VOTING_CLOSED",
            Self::AlreadyClosed => "ALREADY_CLOSED",
            Self::Conflict => "CONFLICT",

            Self::MatchNotFound => "MATCH_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
