#![cfg(test)]

//! Shared helpers for domain tests.

use proptest::prelude::*;
use time::macros::datetime;
use time::OffsetDateTime;
use uuid::Uuid;

/// Deterministic player id from a small index, so tests can name players
/// P1/P2/... and still get stable Uuid ordering assertions.
pub fn player_id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

/// Fixed match end time used across window tests.
pub fn match_end() -> OffsetDateTime {
    datetime!(2025-08-23 15:00 UTC)
}

/// Proptest config kept small; the domain functions are cheap but the
/// suite runs on every push.
pub fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

/// Strategy for a small pool index used to build player ids.
pub fn pool_index() -> impl Strategy<Value = u128> {
    1u128..=8
}
