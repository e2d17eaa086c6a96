//! Single-elimination bracket: advancing winners and checking round-to-round progression.

use crate::models::{BtmsError, Match, Registry, Round, RoundId, TeamId};
use serde::Serialize;
use std::collections::HashSet;

/// One round together with its matches, in bracket slot order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BracketRound {
    pub round: Round,
    pub matches: Vec<Match>,
}

/// Pair the winners of a completed round for the next round.
///
/// `matches` must all belong to the same round, in slot order, each with a winner.
/// Returns `(winner(matches[2i]), winner(matches[2i + 1]))` for every `i`, so
/// slot order is preserved. A single match is a final: the bracket is complete
/// and no pairs are returned.
pub fn next_round_pairings(matches: &[Match]) -> Result<Vec<(TeamId, TeamId)>, BtmsError> {
    let first = matches.first().ok_or_else(|| {
        BtmsError::InvalidBracketState("no matches to advance from".to_string())
    })?;
    if let Some(m) = matches.iter().find(|m| m.round != first.round) {
        return Err(BtmsError::InvalidBracketState(format!(
            "match {} is in round {}, expected round {}",
            m.id, m.round, first.round
        )));
    }

    let winners = matches
        .iter()
        .map(|m| {
            m.winner_team.ok_or_else(|| {
                BtmsError::InvalidBracketState(format!("match {} has no winner", m.id))
            })
        })
        .collect::<Result<Vec<TeamId>, BtmsError>>()?;

    if winners.len() == 1 {
        return Ok(Vec::new());
    }
    if winners.len() % 2 != 0 {
        return Err(BtmsError::InvalidBracketState(format!(
            "cannot pair winners of {} matches",
            winners.len()
        )));
    }

    Ok(winners
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect())
}

/// Matches belonging to `round`, order preserved.
pub fn matches_in_round(matches: &[Match], round: RoundId) -> Vec<Match> {
    matches.iter().filter(|m| m.round == round).cloned().collect()
}

/// Every round in `round_no` order with its matches sorted by `match_no` (then id).
pub fn bracket_rounds(registry: &Registry) -> Vec<BracketRound> {
    let all = registry.matches();
    registry
        .rounds()
        .into_iter()
        .map(|round| {
            let mut matches = matches_in_round(&all, round.id);
            matches.sort_by_key(|m| (m.match_no, m.id));
            BracketRound { round, matches }
        })
        .collect()
}

/// Check that `next` is a legal follow-up to `previous`.
///
/// `next` may still be partially drawn: it must hold at most half as many
/// matches as `previous`, take every host and guest from the winners of
/// `previous`, and use each of those winners at most once.
pub fn validate_progression(previous: &[Match], next: &[Match]) -> Result<(), BtmsError> {
    if previous.len() < 2 || previous.len() % 2 != 0 {
        return Err(BtmsError::InvalidBracketState(format!(
            "round of {} matches cannot be advanced",
            previous.len()
        )));
    }
    if next.len() > previous.len() / 2 {
        return Err(BtmsError::InvalidBracketState(format!(
            "round of {} matches cannot be followed by {} matches",
            previous.len(),
            next.len()
        )));
    }
    let winners: HashSet<TeamId> = previous.iter().filter_map(|m| m.winner_team).collect();

    for m in next {
        for team in [m.host_team, m.guest_team] {
            if !winners.contains(&team) {
                return Err(BtmsError::InvalidBracketState(format!(
                    "team {} in match {} did not win the previous round",
                    team, m.id
                )));
            }
        }
    }
    ensure_drawn_once(next)
}

/// A team plays at most one match per round.
fn ensure_drawn_once(matches: &[Match]) -> Result<(), BtmsError> {
    let mut seen = HashSet::with_capacity(matches.len() * 2);
    for m in matches {
        for team in [m.host_team, m.guest_team] {
            if !seen.insert(team) {
                return Err(BtmsError::InvalidBracketState(format!(
                    "team {} is drawn more than once",
                    team
                )));
            }
        }
    }
    Ok(())
}

/// Validate the whole bracket stored in `registry`.
///
/// Populated rounds must be consecutive starting from the first round and the
/// opening round's match count must be a power of two. Each later round must
/// follow from its predecessor; only the latest populated round may be
/// partially drawn. When the last round is populated it must be a single final.
pub fn validate_bracket(registry: &Registry) -> Result<(), BtmsError> {
    let rounds = bracket_rounds(registry);
    let populated = rounds.iter().take_while(|r| !r.matches.is_empty()).count();
    if let Some(stray) = rounds[populated..].iter().find(|r| !r.matches.is_empty()) {
        return Err(BtmsError::InvalidBracketState(format!(
            "round {} has matches but an earlier round is empty",
            stray.round.round_no
        )));
    }
    if populated == 0 {
        return Ok(());
    }

    let opening = rounds[0].matches.len();
    if !opening.is_power_of_two() {
        return Err(BtmsError::InvalidBracketState(format!(
            "opening round has {} matches, expected a power of two",
            opening
        )));
    }
    ensure_drawn_once(&rounds[0].matches)?;

    for i in 1..populated {
        let (previous, next) = (&rounds[i - 1], &rounds[i]);
        validate_progression(&previous.matches, &next.matches)?;
        let latest = i == populated - 1;
        if !latest && next.matches.len() * 2 != previous.matches.len() {
            return Err(BtmsError::InvalidBracketState(format!(
                "round {} is incomplete but round {} has already started",
                next.round.round_no,
                rounds[i + 1].round.round_no
            )));
        }
    }

    if populated == rounds.len() && rounds[populated - 1].matches.len() != 1 {
        return Err(BtmsError::InvalidBracketState(format!(
            "final round {} must have exactly one match",
            rounds[populated - 1].round.round_no
        )));
    }
    Ok(())
}
