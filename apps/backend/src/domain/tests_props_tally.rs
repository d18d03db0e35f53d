//! Property tests for the tally engine (pure domain, no DB).
//!
//! Properties tested:
//! - Points formula holds for arbitrary vote counts
//! - Tally is idempotent
//! - Ballot order does not affect the resulting standings
//! - Standings are sorted by points and positions are dense

use proptest::prelude::*;

use crate::domain::tally::{points, tally};
use crate::domain::test_prelude::{self, player_id, pool_index};
use crate::domain::Nominees;

fn nominees_strategy() -> impl Strategy<Value = Nominees> {
    (pool_index(), proptest::option::of(pool_index()), proptest::option::of(pool_index()))
        .prop_filter_map("rank slots must be distinct", |(f, s, t)| {
            if Some(f) == s || Some(f) == t || (s.is_some() && s == t) {
                return None;
            }
            Some(Nominees {
                first_place: player_id(f),
                second_place: s.map(player_id),
                third_place: t.map(player_id),
            })
        })
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: totalPoints == 100*f + 50*s + 25*t for all non-negative counts
    #[test]
    fn prop_points_formula(f in 0i32..1000, s in 0i32..1000, t in 0i32..1000) {
        prop_assert_eq!(points(f, s, t), 100 * f + 50 * s + 25 * t);
    }

    /// Property: re-tallying the same ballots yields identical standings
    #[test]
    fn prop_tally_idempotent(ballots in prop::collection::vec(nominees_strategy(), 0..40)) {
        let first = tally(&ballots);
        let second = tally(&ballots);
        prop_assert_eq!(first, second);
    }

    /// Property: standings are independent of ballot submission order
    #[test]
    fn prop_tally_order_invariant(
        ballots in prop::collection::vec(nominees_strategy(), 0..40),
        seed in any::<u64>(),
    ) {
        let mut shuffled = ballots.clone();
        // cheap deterministic shuffle
        let len = shuffled.len();
        if len > 1 {
            for i in 0..len {
                let j = (seed as usize).wrapping_mul(31).wrapping_add(i * 7) % len;
                shuffled.swap(i, j);
            }
        }
        prop_assert_eq!(tally(&ballots), tally(&shuffled));
    }

    /// Property: standings come out best-first with dense 1-based positions
    /// and every standing's points match its counts
    #[test]
    fn prop_tally_sorted_and_consistent(ballots in prop::collection::vec(nominees_strategy(), 0..40)) {
        let standings = tally(&ballots);

        for (idx, standing) in standings.iter().enumerate() {
            prop_assert_eq!(standing.final_position, idx as i32 + 1);
            prop_assert_eq!(
                standing.total_points,
                points(
                    standing.first_place_votes,
                    standing.second_place_votes,
                    standing.third_place_votes
                )
            );
        }

        for pair in standings.windows(2) {
            prop_assert!(pair[0].total_points >= pair[1].total_points);
        }

        // one first-place vote per ballot, conserved across standings
        let firsts: i32 = standings.iter().map(|s| s.first_place_votes).sum();
        prop_assert_eq!(firsts as usize, ballots.len());
    }
}
