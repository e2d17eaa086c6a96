//! Integration tests for bracket progression: pairing winners and validating rounds.

use btms::{
    bracket_rounds, matches_in_round, next_round_pairings, validate_bracket, validate_progression,
    BtmsError, Match, NewMatch, NewRound, NewTeam, Registry, RoundId, TeamId,
};

/// Match `id` in `round` between `host` and `guest`, won by `winner`.
fn played(id: u32, round: RoundId, host: TeamId, guest: TeamId, winner: TeamId) -> Match {
    Match::from_draft(id, NewMatch::new(id, round, host, guest).with_result(3, 1, winner))
}

fn unplayed(id: u32, round: RoundId, host: TeamId, guest: TeamId) -> Match {
    Match::from_draft(id, NewMatch::new(id, round, host, guest))
}

#[test]
fn pairs_winners_in_slot_order() {
    let matches = vec![
        played(1, 1, 1, 2, 2),
        played(2, 1, 3, 4, 3),
        played(3, 1, 5, 6, 6),
        played(4, 1, 7, 8, 7),
    ];
    let pairs = next_round_pairings(&matches).unwrap();
    assert_eq!(pairs, vec![(2, 3), (6, 7)]);
}

#[test]
fn returns_half_as_many_pairs() {
    for n in [2usize, 4, 8] {
        let matches: Vec<Match> = (0..n as u32)
            .map(|i| played(i + 1, 1, 2 * i + 1, 2 * i + 2, 2 * i + 2))
            .collect();
        let pairs = next_round_pairings(&matches).unwrap();
        assert_eq!(pairs.len(), n / 2);
        for (i, pair) in pairs.iter().enumerate() {
            assert_eq!(pair.0, matches[2 * i].winner_team.unwrap());
            assert_eq!(pair.1, matches[2 * i + 1].winner_team.unwrap());
        }
    }
}

#[test]
fn final_round_produces_no_pairs() {
    let matches = vec![played(1, 4, 1, 2, 1)];
    assert!(next_round_pairings(&matches).unwrap().is_empty());
}

#[test]
fn odd_count_is_invalid() {
    let matches = vec![
        played(1, 1, 1, 2, 1),
        played(2, 1, 3, 4, 3),
        played(3, 1, 5, 6, 5),
    ];
    assert!(matches!(
        next_round_pairings(&matches),
        Err(BtmsError::InvalidBracketState(_))
    ));
}

#[test]
fn missing_winner_is_invalid() {
    let matches = vec![played(1, 1, 1, 2, 1), unplayed(2, 1, 3, 4)];
    assert!(matches!(
        next_round_pairings(&matches),
        Err(BtmsError::InvalidBracketState(_))
    ));
}

#[test]
fn empty_and_mixed_rounds_are_invalid() {
    assert!(matches!(
        next_round_pairings(&[]),
        Err(BtmsError::InvalidBracketState(_))
    ));
    let mixed = vec![played(1, 1, 1, 2, 1), played(2, 2, 3, 4, 3)];
    assert!(matches!(
        next_round_pairings(&mixed),
        Err(BtmsError::InvalidBracketState(_))
    ));
}

#[test]
fn matches_in_round_keeps_order() {
    let matches = vec![
        played(1, 1, 1, 2, 1),
        played(2, 2, 1, 3, 1),
        played(3, 1, 3, 4, 3),
    ];
    let ids: Vec<u32> = matches_in_round(&matches, 1).iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert!(matches_in_round(&matches, 9).is_empty());
}

#[test]
fn progression_accepts_winners_only() {
    let previous = vec![played(1, 1, 1, 2, 2), played(2, 1, 3, 4, 3)];
    let good = vec![unplayed(3, 2, 2, 3)];
    assert!(validate_progression(&previous, &good).is_ok());

    let loser_advanced = vec![unplayed(3, 2, 1, 3)];
    assert!(matches!(
        validate_progression(&previous, &loser_advanced),
        Err(BtmsError::InvalidBracketState(_))
    ));

    let too_many = vec![unplayed(3, 2, 2, 3), unplayed(4, 2, 3, 2)];
    assert!(validate_progression(&previous, &too_many).is_err());
}

#[test]
fn progression_allows_partial_next_round() {
    let previous = vec![
        played(1, 1, 1, 2, 1),
        played(2, 1, 3, 4, 4),
        played(3, 1, 5, 6, 5),
        unplayed(4, 1, 7, 8),
    ];
    let next = vec![unplayed(5, 2, 1, 4)];
    assert!(validate_progression(&previous, &next).is_ok());
}

/// Four teams, two rounds; returns (registry, team ids, semi round, final round).
fn four_team_registry() -> (Registry, Vec<TeamId>, RoundId, RoundId) {
    let mut reg = Registry::new();
    let teams: Vec<TeamId> = (0..4)
        .map(|i| reg.insert_team(NewTeam::new(format!("T{i}"), 100.0)).unwrap().id)
        .collect();
    let semi = reg.insert_round(NewRound::new(1, "SF", "Semi Finals")).unwrap().id;
    let fin = reg.insert_round(NewRound::new(2, "GF", "Grand Final")).unwrap().id;
    (reg, teams, semi, fin)
}

#[test]
fn full_bracket_validates() {
    let (mut reg, t, semi, fin) = four_team_registry();
    assert!(validate_bracket(&reg).is_ok());

    reg.insert_match(NewMatch::new(1, semi, t[0], t[1]).with_result(2, 1, t[0]))
        .unwrap();
    reg.insert_match(NewMatch::new(2, semi, t[2], t[3]).with_result(0, 1, t[3]))
        .unwrap();
    assert!(validate_bracket(&reg).is_ok());

    reg.insert_match(NewMatch::new(3, fin, t[0], t[3])).unwrap();
    assert!(validate_bracket(&reg).is_ok());

    let rounds = bracket_rounds(&reg);
    assert_eq!(rounds.len(), 2);
    assert_eq!(rounds[0].round.round_code, "SF");
    assert_eq!(rounds[0].matches.len(), 2);
    assert_eq!(rounds[1].matches.len(), 1);
}

#[test]
fn bracket_with_eliminated_team_in_final_is_invalid() {
    let (mut reg, t, semi, fin) = four_team_registry();
    reg.insert_match(NewMatch::new(1, semi, t[0], t[1]).with_result(2, 1, t[0]))
        .unwrap();
    reg.insert_match(NewMatch::new(2, semi, t[2], t[3]).with_result(0, 1, t[3]))
        .unwrap();
    reg.insert_match(NewMatch::new(3, fin, t[1], t[3])).unwrap();
    assert!(matches!(
        validate_bracket(&reg),
        Err(BtmsError::InvalidBracketState(_))
    ));
}

#[test]
fn bracket_with_skipped_round_is_invalid() {
    let (mut reg, t, _semi, fin) = four_team_registry();
    reg.insert_match(NewMatch::new(1, fin, t[0], t[1])).unwrap();
    assert!(validate_bracket(&reg).is_err());
}

#[test]
fn opening_round_must_be_power_of_two() {
    let (mut reg, t, semi, _fin) = four_team_registry();
    let extra = reg.insert_team(NewTeam::new("T4", 90.0)).unwrap().id;
    let extra2 = reg.insert_team(NewTeam::new("T5", 90.0)).unwrap().id;
    reg.insert_match(NewMatch::new(1, semi, t[0], t[1])).unwrap();
    reg.insert_match(NewMatch::new(2, semi, t[2], t[3])).unwrap();
    reg.insert_match(NewMatch::new(3, semi, extra, extra2)).unwrap();
    assert!(validate_bracket(&reg).is_err());
}

#[test]
fn opening_round_rejects_team_drawn_twice() {
    let (mut reg, t, semi, _fin) = four_team_registry();
    reg.insert_match(NewMatch::new(1, semi, t[0], t[1]).with_result(2, 1, t[0]))
        .unwrap();
    reg.insert_match(NewMatch::new(2, semi, t[0], t[2]).with_result(2, 1, t[0]))
        .unwrap();
    match validate_bracket(&reg) {
        Err(BtmsError::InvalidBracketState(msg)) => assert!(msg.contains("more than once")),
        other => panic!("expected InvalidBracketState, got {other:?}"),
    }
}
