//! Player data structures.

use crate::models::error::BtmsError;
use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

/// Identifier for a player.
pub type PlayerId = u32;

/// A player on a team's roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Free text, e.g. "guard".
    pub position: String,
    pub age: u32,
    pub games_played: u32,
    pub penalty_count: u32,
    pub height: f64,
    pub weight: f64,
    pub average_score: f64,
    pub is_team_captain: bool,
    pub team: TeamId,
}

/// Fields supplied when creating or replacing a player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub position: String,
    pub age: u32,
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub penalty_count: u32,
    pub height: f64,
    pub weight: f64,
    pub average_score: f64,
    #[serde(default)]
    pub is_team_captain: bool,
    pub team: TeamId,
}

impl NewPlayer {
    /// Draft with the given name, team, and score; body measurements get plausible defaults.
    pub fn new(name: impl Into<String>, team: TeamId, average_score: f64) -> Self {
        Self {
            name: name.into(),
            position: String::new(),
            age: 20,
            games_played: 0,
            penalty_count: 0,
            height: 180.0,
            weight: 75.0,
            average_score,
            is_team_captain: false,
            team,
        }
    }

    /// Height and weight must be positive decimals.
    pub fn validate(&self) -> Result<(), BtmsError> {
        if !(self.height > 0.0) {
            return Err(BtmsError::InvalidArgument(format!(
                "height must be positive (got {})",
                self.height
            )));
        }
        if !(self.weight > 0.0) {
            return Err(BtmsError::InvalidArgument(format!(
                "weight must be positive (got {})",
                self.weight
            )));
        }
        if !self.average_score.is_finite() {
            return Err(BtmsError::InvalidArgument(
                "average_score must be a finite number".to_string(),
            ));
        }
        Ok(())
    }
}

impl Player {
    pub fn from_draft(id: PlayerId, draft: NewPlayer) -> Self {
        Self {
            id,
            name: draft.name,
            position: draft.position,
            age: draft.age,
            games_played: draft.games_played,
            penalty_count: draft.penalty_count,
            height: draft.height,
            weight: draft.weight,
            average_score: draft.average_score,
            is_team_captain: draft.is_team_captain,
            team: draft.team,
        }
    }
}
