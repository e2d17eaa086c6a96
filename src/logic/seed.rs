//! Demo data: a fully played single-elimination tournament with rosters.

use crate::logic::bracket::next_round_pairings;
use crate::models::{
    BtmsError, Match, NewCoach, NewMatch, NewPlayer, NewRound, NewTeam, Registry, Round, TeamId,
};
use chrono::{NaiveDate, NaiveTime};
use rand::seq::SliceRandom;
use rand::Rng;

/// Teams in the default demo bracket (four rounds).
pub const DEMO_TEAM_COUNT: usize = 16;

/// Players generated per team.
pub const PLAYERS_PER_TEAM: usize = 10;

const TEAM_WORDS: &[&str] = &[
    "red", "blue", "iron", "swift", "north", "river", "storm", "golden", "silver", "night",
    "harbor", "valley", "stone", "thunder", "royal", "wild",
];
const TEAM_NOUNS: &[&str] = &[
    "hawks", "bears", "wolves", "comets", "owls", "foxes", "rockets", "lions", "sharks", "giants",
];
const FIRST_NAMES: &[&str] = &[
    "Alex", "Sam", "Jordan", "Taylor", "Casey", "Morgan", "Jamie", "Riley", "Avery", "Quinn",
    "Drew", "Kai", "Robin", "Sasha", "Noel",
];
const LAST_NAMES: &[&str] = &[
    "Smith", "Garcia", "Khan", "Novak", "Silva", "Kim", "Okafor", "Berg", "Rossi", "Tanaka",
    "Murphy", "Dubois",
];
const POSITIONS: &[&str] = &["guard", "forward", "center", "wing", "defender", "keeper"];
const VENUES: &[&str] = &[
    "Riverside Arena", "North Hall", "City Dome", "Harbor Court", "Central Stadium",
];

/// Counts of what [`generate_demo_tournament`] created.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SeedSummary {
    pub teams: usize,
    pub rounds: usize,
    pub coaches: usize,
    pub players: usize,
    pub matches: usize,
}

/// Code and display name for a round that starts with `teams_left` teams.
pub fn round_label(teams_left: usize) -> (String, String) {
    match teams_left {
        2 => ("GF".to_string(), "Grand Final".to_string()),
        4 => ("SF".to_string(), "Semi Finals".to_string()),
        8 => ("QF".to_string(), "Quarter Finals".to_string()),
        16 => ("R16".to_string(), "Round of Sixteen".to_string()),
        n => (format!("R{}", n), format!("Round of {}", n)),
    }
}

/// Populate `registry` with `team_count` teams (a power of two, at least 2),
/// one round per bracket stage, one coach and [`PLAYERS_PER_TEAM`] players per
/// team, and every match of the bracket.
///
/// Each round's pairings come from the winners of the previous round in slot
/// order. The higher final score wins; the guest wins a tie.
pub fn generate_demo_tournament<R: Rng>(
    registry: &mut Registry,
    team_count: usize,
    rng: &mut R,
) -> Result<SeedSummary, BtmsError> {
    if team_count < 2 || !team_count.is_power_of_two() {
        return Err(BtmsError::InvalidArgument(format!(
            "demo bracket needs a power of two teams (got {})",
            team_count
        )));
    }
    let mut summary = SeedSummary::default();

    let mut team_ids = Vec::with_capacity(team_count);
    for _ in 0..team_count {
        let name = format!(
            "{}-{}",
            pick(TEAM_WORDS, rng),
            pick(TEAM_NOUNS, rng)
        );
        let team = registry.insert_team(NewTeam::new(name, random_score(rng)))?;
        team_ids.push(team.id);
        summary.teams += 1;
    }

    let mut rounds: Vec<Round> = Vec::new();
    let mut teams_left = team_count;
    while teams_left >= 2 {
        let (code, name) = round_label(teams_left);
        let round_no = rounds.len() as u32 + 1;
        rounds.push(registry.insert_round(NewRound::new(round_no, code, name))?);
        teams_left /= 2;
    }
    summary.rounds = rounds.len();

    for &team in &team_ids {
        registry.insert_coach(NewCoach::new(person_name(rng), team))?;
        summary.coaches += 1;
        for i in 0..PLAYERS_PER_TEAM {
            registry.insert_player(random_player(team, i == 0, rng))?;
            summary.players += 1;
        }
    }

    let mut pairs: Vec<(TeamId, TeamId)> = team_ids
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect();
    let mut match_no = 1;
    for round in &rounds {
        let mut played: Vec<Match> = Vec::with_capacity(pairs.len());
        for &(host, guest) in &pairs {
            let draft = random_result(NewMatch::new(match_no, round.id, host, guest), rng);
            played.push(registry.insert_match(draft)?);
            match_no += 1;
        }
        summary.matches += played.len();
        pairs = next_round_pairings(&played)?;
    }

    log::info!(
        "Seeded demo tournament: {} teams, {} rounds, {} players, {} matches",
        summary.teams,
        summary.rounds,
        summary.players,
        summary.matches
    );
    Ok(summary)
}

fn pick<R: Rng>(options: &[&'static str], rng: &mut R) -> &'static str {
    options.choose(rng).copied().unwrap_or_default()
}

fn person_name<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", pick(FIRST_NAMES, rng), pick(LAST_NAMES, rng))
}

/// Score in 100..200, rounded to two decimals.
fn random_score<R: Rng>(rng: &mut R) -> f64 {
    (rng.gen_range(100.0..200.0_f64) * 100.0).round() / 100.0
}

fn random_player<R: Rng>(team: TeamId, is_captain: bool, rng: &mut R) -> NewPlayer {
    NewPlayer {
        name: person_name(rng),
        position: pick(POSITIONS, rng).to_string(),
        age: rng.gen_range(16..=40),
        games_played: rng.gen_range(0..=4),
        penalty_count: rng.gen_range(0..=4),
        height: (rng.gen_range(150.0..215.0_f64) * 100.0).round() / 100.0,
        weight: (rng.gen_range(50.0..130.0_f64) * 1000.0).round() / 1000.0,
        average_score: random_score(rng),
        is_team_captain: is_captain,
        team,
    }
}

fn random_result<R: Rng>(draft: NewMatch, rng: &mut R) -> NewMatch {
    let host_score = rng.gen_range(100..=200);
    let guest_score = rng.gen_range(100..=200);
    let winner = if host_score > guest_score {
        draft.host_team
    } else {
        draft.guest_team
    };
    let date = NaiveDate::from_yo_opt(2024, rng.gen_range(1..=366)).unwrap_or_default();
    let time = NaiveTime::from_hms_opt(rng.gen_range(10..=21), 0, 0).unwrap_or_default();
    NewMatch {
        date,
        time,
        venue: pick(VENUES, rng).to_string(),
        ..draft
    }
    .with_result(host_score, guest_score, winner)
}
