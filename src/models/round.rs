//! Round: one stage of the bracket.

use serde::{Deserialize, Serialize};

/// Identifier for a round.
pub type RoundId = u32;

/// A bracket stage. Rounds are totally ordered by `round_no` (1-based).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub id: RoundId,
    pub round_no: u32,
    /// Short label, e.g. "QF".
    pub round_code: String,
    /// Display label, e.g. "Quarter Finals".
    pub round_name: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NewRound {
    pub round_no: u32,
    pub round_code: String,
    pub round_name: String,
}

impl NewRound {
    pub fn new(round_no: u32, round_code: impl Into<String>, round_name: impl Into<String>) -> Self {
        Self {
            round_no,
            round_code: round_code.into(),
            round_name: round_name.into(),
        }
    }
}

impl Round {
    pub fn from_draft(id: RoundId, draft: NewRound) -> Self {
        Self {
            id,
            round_no: draft.round_no,
            round_code: draft.round_code,
            round_name: draft.round_name,
        }
    }
}
