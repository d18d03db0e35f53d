use time::Duration;

use crate::domain::eligibility::{is_window_open, voting_reference_end, window_closes_at, VOTING_WINDOW};
use crate::domain::test_prelude::match_end;

#[test]
fn window_is_48_hours() {
    assert_eq!(VOTING_WINDOW, Duration::hours(48));
    assert_eq!(window_closes_at(match_end()), match_end() + Duration::hours(48));
}

#[test]
fn vote_before_match_end_is_not_open() {
    let end = match_end();
    assert!(!is_window_open(end, end - Duration::seconds(1)));
}

#[test]
fn window_opens_at_match_end() {
    let end = match_end();
    assert!(is_window_open(end, end));
}

#[test]
fn vote_one_second_before_deadline_is_open() {
    let end = match_end();
    assert!(is_window_open(end, end + Duration::hours(48) - Duration::seconds(1)));
}

#[test]
fn vote_one_second_after_deadline_is_expired() {
    let end = match_end();
    assert!(!is_window_open(end, end + Duration::hours(48) + Duration::seconds(1)));
}

#[test]
fn recorded_end_time_wins_over_kickoff() {
    let kickoff = match_end();
    let ended = kickoff + Duration::hours(2);
    assert_eq!(voting_reference_end(kickoff, Some(ended)), ended);
}

#[test]
fn missing_end_time_falls_back_to_kickoff() {
    let kickoff = match_end();
    assert_eq!(voting_reference_end(kickoff, None), kickoff);
}
