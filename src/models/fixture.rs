//! Match: one fixture between a host and a guest team within a round.

use crate::models::error::BtmsError;
use crate::models::round::RoundId;
use crate::models::team::TeamId;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Identifier for a match.
pub type MatchId = u32;

/// A single bracket match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub match_no: u32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub venue: String,
    pub round: RoundId,
    pub host_team: TeamId,
    pub guest_team: TeamId,
    /// None until the result is known. Always the host or the guest.
    pub winner_team: Option<TeamId>,
    pub host_team_final_score: i32,
    pub guest_team_final_score: i32,
}

/// Fields supplied when creating or replacing a match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NewMatch {
    pub match_no: u32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub venue: String,
    pub round: RoundId,
    pub host_team: TeamId,
    pub guest_team: TeamId,
    #[serde(default)]
    pub winner_team: Option<TeamId>,
    #[serde(default)]
    pub host_team_final_score: i32,
    #[serde(default)]
    pub guest_team_final_score: i32,
}

impl NewMatch {
    /// Unplayed match between `host` and `guest`; date, time, and venue are left at placeholders.
    pub fn new(match_no: u32, round: RoundId, host_team: TeamId, guest_team: TeamId) -> Self {
        Self {
            match_no,
            date: NaiveDate::default(),
            time: NaiveTime::default(),
            venue: String::new(),
            round,
            host_team,
            guest_team,
            winner_team: None,
            host_team_final_score: 0,
            guest_team_final_score: 0,
        }
    }

    /// Record final scores and the winner.
    pub fn with_result(mut self, host_score: i32, guest_score: i32, winner: TeamId) -> Self {
        self.host_team_final_score = host_score;
        self.guest_team_final_score = guest_score;
        self.winner_team = Some(winner);
        self
    }

    /// Host and guest must differ; a declared winner must be one of them.
    pub fn validate(&self) -> Result<(), BtmsError> {
        if self.host_team == self.guest_team {
            return Err(BtmsError::InvalidArgument(format!(
                "team {} cannot be both host and guest",
                self.host_team
            )));
        }
        if let Some(winner) = self.winner_team {
            if winner != self.host_team && winner != self.guest_team {
                return Err(BtmsError::InvalidArgument(format!(
                    "winner {} is neither host {} nor guest {}",
                    winner, self.host_team, self.guest_team
                )));
            }
        }
        Ok(())
    }
}

impl Match {
    pub fn from_draft(id: MatchId, draft: NewMatch) -> Self {
        Self {
            id,
            match_no: draft.match_no,
            date: draft.date,
            time: draft.time,
            venue: draft.venue,
            round: draft.round,
            host_team: draft.host_team,
            guest_team: draft.guest_team,
            winner_team: draft.winner_team,
            host_team_final_score: draft.host_team_final_score,
            guest_team_final_score: draft.guest_team_final_score,
        }
    }

    /// True if `team` plays in this match as host or guest.
    pub fn involves(&self, team: TeamId) -> bool {
        self.host_team == team || self.guest_team == team
    }

    /// True if `team` is referenced in any role (host, guest, or winner).
    pub fn references_team(&self, team: TeamId) -> bool {
        self.involves(team) || self.winner_team == Some(team)
    }
}
