//! Integration tests for roster queries: team filter and score percentiles.

use btms::{
    filter_by_percentile, filter_by_team, parse_percentile, percentile_threshold, roster_query,
    BtmsError, NewPlayer, Player, TeamId,
};

fn player(id: u32, team: TeamId, score: f64) -> Player {
    Player::from_draft(id, NewPlayer::new(format!("P{id}"), team, score))
}

fn ids(players: &[Player]) -> Vec<u32> {
    players.iter().map(|p| p.id).collect()
}

#[test]
fn percentile_interpolates_between_ranks() {
    let scores = [10.0, 20.0, 30.0, 40.0];
    assert_eq!(percentile_threshold(&scores, 50.0).unwrap(), 25.0);
    assert_eq!(percentile_threshold(&scores, 0.0).unwrap(), 10.0);
    assert_eq!(percentile_threshold(&scores, 100.0).unwrap(), 40.0);
}

#[test]
fn percentile_sorts_input_first() {
    let scores = [40.0, 10.0, 30.0, 20.0];
    assert_eq!(percentile_threshold(&scores, 50.0).unwrap(), 25.0);
}

#[test]
fn percentile_of_single_score_is_that_score() {
    assert_eq!(percentile_threshold(&[7.5], 33.0).unwrap(), 7.5);
}

#[test]
fn percentile_rejects_bad_input() {
    assert!(matches!(
        percentile_threshold(&[], 50.0),
        Err(BtmsError::InvalidArgument(_))
    ));
    assert!(matches!(
        percentile_threshold(&[1.0, 2.0, 3.0], 150.0),
        Err(BtmsError::InvalidArgument(_))
    ));
    assert!(matches!(
        percentile_threshold(&[1.0, 2.0, 3.0], -1.0),
        Err(BtmsError::InvalidArgument(_))
    ));
    assert!(matches!(
        percentile_threshold(&[1.0, 2.0, 3.0], f64::NAN),
        Err(BtmsError::InvalidArgument(_))
    ));
}

#[test]
fn team_filter_keeps_order() {
    let players = vec![player(1, 1, 10.0), player(2, 2, 20.0), player(3, 1, 30.0)];
    assert_eq!(ids(&filter_by_team(&players, 1)), vec![1, 3]);
    assert!(filter_by_team(&players, 99).is_empty());
}

#[test]
fn percentile_filter_keeps_top_scores() {
    let players = vec![
        player(1, 1, 100.0),
        player(2, 1, 150.0),
        player(3, 1, 200.0),
        player(4, 1, 250.0),
    ];
    // rank = 0.9 * 3 = 2.7, threshold = 200 + 0.7 * 50 = 235
    let threshold = percentile_threshold(&[100.0, 150.0, 200.0, 250.0], 90.0).unwrap();
    assert!((threshold - 235.0).abs() < 1e-9);
    assert_eq!(ids(&filter_by_percentile(&players, 90.0).unwrap()), vec![4]);
    assert_eq!(ids(&filter_by_percentile(&players, 0.0).unwrap()), vec![1, 2, 3, 4]);
}

#[test]
fn percentile_filter_on_empty_roster_is_empty() {
    assert!(filter_by_percentile(&[], 50.0).unwrap().is_empty());
    assert!(filter_by_percentile(&[], 101.0).is_err());
}

#[test]
fn percentile_is_computed_within_the_team() {
    let players = vec![
        player(1, 1, 10.0),
        player(2, 1, 20.0),
        player(3, 2, 500.0),
        player(4, 2, 600.0),
        player(5, 1, 30.0),
    ];
    // Team 1 alone: median of [10, 20, 30] is 20.
    let team_top = roster_query(&players, Some(1), Some(50.0)).unwrap();
    assert_eq!(ids(&team_top), vec![2, 5]);

    // Over everyone the median is 30, which would drop player 2.
    let global_top = roster_query(&players, None, Some(50.0)).unwrap();
    assert_eq!(ids(&global_top), vec![3, 4, 5]);
}

#[test]
fn roster_query_without_filters_returns_everyone() {
    let players = vec![player(1, 1, 10.0), player(2, 2, 20.0)];
    assert_eq!(ids(&roster_query(&players, None, None).unwrap()), vec![1, 2]);
    assert_eq!(ids(&roster_query(&players, Some(2), None).unwrap()), vec![2]);
}

#[test]
fn parses_percentile_text() {
    assert_eq!(parse_percentile("90").unwrap(), 90.0);
    assert_eq!(parse_percentile(" 12.5 ").unwrap(), 12.5);
    assert!(matches!(
        parse_percentile("x"),
        Err(BtmsError::InvalidArgument(_))
    ));
    assert!(parse_percentile("inf").is_err());
    assert!(parse_percentile("NaN").is_err());
}
