//! Roster queries: filter players by team and by score percentile.

use crate::models::{BtmsError, Player, TeamId};

/// Players belonging to `team`, order preserved. No match gives an empty result.
pub fn filter_by_team(players: &[Player], team: TeamId) -> Vec<Player> {
    players.iter().filter(|p| p.team == team).cloned().collect()
}

/// Score at `percentile` (0..=100) of `scores`, by linear interpolation between closest ranks.
///
/// Sorts ascending, takes `rank = percentile / 100 * (n - 1)` and interpolates
/// between the values at `floor(rank)` and `ceil(rank)`.
pub fn percentile_threshold(scores: &[f64], percentile: f64) -> Result<f64, BtmsError> {
    check_percentile(percentile)?;
    if scores.is_empty() {
        return Err(BtmsError::InvalidArgument(
            "cannot compute a percentile of no scores".to_string(),
        ));
    }
    if scores.iter().any(|s| !s.is_finite()) {
        return Err(BtmsError::InvalidArgument(
            "scores must be finite numbers".to_string(),
        ));
    }

    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = percentile / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    Ok(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}

/// Players whose `average_score` is at or above the `percentile` threshold of this same collection.
///
/// The threshold is computed over `players` itself, so filtering a single
/// team's roster gives a per-team percentile. An empty roster stays empty.
pub fn filter_by_percentile(players: &[Player], percentile: f64) -> Result<Vec<Player>, BtmsError> {
    check_percentile(percentile)?;
    if players.is_empty() {
        return Ok(Vec::new());
    }
    let scores: Vec<f64> = players.iter().map(|p| p.average_score).collect();
    let threshold = percentile_threshold(&scores, percentile)?;
    Ok(players
        .iter()
        .filter(|p| p.average_score >= threshold)
        .cloned()
        .collect())
}

/// Parse a percentile from query-string text. Range is checked where it is used.
pub fn parse_percentile(raw: &str) -> Result<f64, BtmsError> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        BtmsError::InvalidArgument(format!("percentile {:?} is not a number", raw))
    })?;
    if !value.is_finite() {
        return Err(BtmsError::InvalidArgument(format!(
            "percentile {:?} is not a finite number",
            raw
        )));
    }
    Ok(value)
}

/// Team filter first (if any), then the percentile filter over what remains (if any).
pub fn roster_query(
    players: &[Player],
    team: Option<TeamId>,
    percentile: Option<f64>,
) -> Result<Vec<Player>, BtmsError> {
    let roster = match team {
        Some(team) => filter_by_team(players, team),
        None => players.to_vec(),
    };
    match percentile {
        Some(p) => filter_by_percentile(&roster, p),
        None => Ok(roster),
    }
}

fn check_percentile(percentile: f64) -> Result<(), BtmsError> {
    if !(0.0..=100.0).contains(&percentile) {
        return Err(BtmsError::InvalidArgument(format!(
            "percentile must be between 0 and 100 (got {})",
            percentile
        )));
    }
    Ok(())
}
