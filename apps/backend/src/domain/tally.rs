//! Tally engine: aggregates ballots into ranked standings.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::domain::ballot::Nominees;

/// Points per first-place vote.
pub const FIRST_PLACE_POINTS: i32 = 100;
/// Points per second-place vote.
pub const SECOND_PLACE_POINTS: i32 = 50;
/// Points per third-place vote.
pub const THIRD_PLACE_POINTS: i32 = 25;

/// A player's aggregated vote counts for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    pub player_id: Uuid,
    pub first_place_votes: i32,
    pub second_place_votes: i32,
    pub third_place_votes: i32,
    pub total_points: i32,
    /// 1-based rank; assigned by [`tally`] in final sort order.
    pub final_position: i32,
}

/// Points for a given count of first/second/third-place votes.
pub fn points(first: i32, second: i32, third: i32) -> i32 {
    first * FIRST_PLACE_POINTS + second * SECOND_PLACE_POINTS + third * THIRD_PLACE_POINTS
}

#[derive(Default, Clone, Copy)]
struct Counts {
    first: i32,
    second: i32,
    third: i32,
}

/// Aggregate ballots into standings, best first.
///
/// Ordering: total points desc, then first-place votes desc, then
/// second-place votes desc, then player id asc so equal tallies always
/// come out in the same order. Pure function of the ballot set; calling
/// it again with the same ballots yields identical standings.
pub fn tally(ballots: &[Nominees]) -> Vec<Standing> {
    // BTreeMap keeps accumulation order independent of ballot order
    let mut counts: BTreeMap<Uuid, Counts> = BTreeMap::new();

    for ballot in ballots {
        counts.entry(ballot.first_place).or_default().first += 1;
        if let Some(second) = ballot.second_place {
            counts.entry(second).or_default().second += 1;
        }
        if let Some(third) = ballot.third_place {
            counts.entry(third).or_default().third += 1;
        }
    }

    let mut standings: Vec<Standing> = counts
        .into_iter()
        .map(|(player_id, c)| Standing {
            player_id,
            first_place_votes: c.first,
            second_place_votes: c.second,
            third_place_votes: c.third,
            total_points: points(c.first, c.second, c.third),
            final_position: 0,
        })
        .collect();

    standings.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then(b.first_place_votes.cmp(&a.first_place_votes))
            .then(b.second_place_votes.cmp(&a.second_place_votes))
            .then(a.player_id.cmp(&b.player_id))
    });

    for (idx, standing) in standings.iter_mut().enumerate() {
        standing.final_position = idx as i32 + 1;
    }

    standings
}
