use crate::domain::tally::{points, tally, FIRST_PLACE_POINTS, SECOND_PLACE_POINTS, THIRD_PLACE_POINTS};
use crate::domain::test_prelude::player_id;
use crate::domain::Nominees;

fn ballot(first: u128, second: Option<u128>, third: Option<u128>) -> Nominees {
    Nominees {
        first_place: player_id(first),
        second_place: second.map(player_id),
        third_place: third.map(player_id),
    }
}

#[test]
fn empty_ballot_set_yields_empty_standings() {
    assert!(tally(&[]).is_empty());
}

#[test]
fn points_scale_is_100_50_25() {
    assert_eq!(FIRST_PLACE_POINTS, 100);
    assert_eq!(SECOND_PLACE_POINTS, 50);
    assert_eq!(THIRD_PLACE_POINTS, 25);
    assert_eq!(points(1, 1, 1), 175);
}

#[test]
fn full_and_partial_ballots_tally_to_expected_standings() {
    // V1: P1 > P2 > P3, V2: P1 only
    let ballots = [ballot(1, Some(2), Some(3)), ballot(1, None, None)];

    let standings = tally(&ballots);

    assert_eq!(standings.len(), 3);

    assert_eq!(standings[0].player_id, player_id(1));
    assert_eq!(standings[0].first_place_votes, 2);
    assert_eq!(standings[0].total_points, 200);
    assert_eq!(standings[0].final_position, 1);

    assert_eq!(standings[1].player_id, player_id(2));
    assert_eq!(standings[1].second_place_votes, 1);
    assert_eq!(standings[1].total_points, 50);
    assert_eq!(standings[1].final_position, 2);

    assert_eq!(standings[2].player_id, player_id(3));
    assert_eq!(standings[2].third_place_votes, 1);
    assert_eq!(standings[2].total_points, 25);
    assert_eq!(standings[2].final_position, 3);
}

#[test]
fn equal_points_break_on_first_place_votes() {
    // P1: one first (100). P2: two seconds (100). P1 must rank above P2.
    let ballots = [
        ballot(1, Some(2), None),
        ballot(3, Some(2), None),
        ballot(3, None, None),
    ];

    let standings = tally(&ballots);

    let p1 = standings.iter().find(|s| s.player_id == player_id(1)).unwrap();
    let p2 = standings.iter().find(|s| s.player_id == player_id(2)).unwrap();
    assert_eq!(p1.total_points, 100);
    assert_eq!(p2.total_points, 100);
    assert!(p1.final_position < p2.final_position);
}

#[test]
fn identical_tallies_break_on_player_id() {
    // P1 and P2 each get one second-place vote from different voters.
    let ballots = [ballot(3, Some(1), None), ballot(4, Some(2), None)];

    let standings = tally(&ballots);
    let p1 = standings.iter().find(|s| s.player_id == player_id(1)).unwrap();
    let p2 = standings.iter().find(|s| s.player_id == player_id(2)).unwrap();

    assert_eq!(p1.total_points, p2.total_points);
    assert_eq!(p1.first_place_votes, p2.first_place_votes);
    // lower id wins the final tie-break, so re-tallying can never flip them
    assert!(p1.final_position < p2.final_position);
}

#[test]
fn positions_are_dense_and_one_based() {
    let ballots = [ballot(1, Some(2), Some(3)), ballot(2, Some(1), None)];
    let standings = tally(&ballots);

    let positions: Vec<i32> = standings.iter().map(|s| s.final_position).collect();
    assert_eq!(positions, (1..=standings.len() as i32).collect::<Vec<_>>());
}

#[test]
fn tally_is_idempotent() {
    let ballots = [
        ballot(1, Some(2), Some(3)),
        ballot(2, Some(3), None),
        ballot(1, None, Some(2)),
    ];

    let first = tally(&ballots);
    let second = tally(&ballots);
    assert_eq!(first, second);
}
