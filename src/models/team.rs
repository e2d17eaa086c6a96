//! Team and Coach data structures.

use serde::{Deserialize, Serialize};

/// Identifier for a team (sequential, starts at 1).
pub type TeamId = u32;

/// Identifier for a coach.
pub type CoachId = u32;

/// A team taking part in the tournament. Names are not required to be unique.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub average_score: f64,
}

/// Fields supplied when creating or replacing a team.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewTeam {
    pub name: String,
    pub average_score: f64,
}

impl NewTeam {
    pub fn new(name: impl Into<String>, average_score: f64) -> Self {
        Self {
            name: name.into(),
            average_score,
        }
    }
}

impl Team {
    pub fn from_draft(id: TeamId, draft: NewTeam) -> Self {
        Self {
            id,
            name: draft.name,
            average_score: draft.average_score,
        }
    }
}

/// A coach; many coaches may belong to the same team.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Coach {
    pub id: CoachId,
    pub name: String,
    pub team: TeamId,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NewCoach {
    pub name: String,
    pub team: TeamId,
}

impl NewCoach {
    pub fn new(name: impl Into<String>, team: TeamId) -> Self {
        Self {
            name: name.into(),
            team,
        }
    }
}

impl Coach {
    pub fn from_draft(id: CoachId, draft: NewCoach) -> Self {
        Self {
            id,
            name: draft.name,
            team: draft.team,
        }
    }
}
