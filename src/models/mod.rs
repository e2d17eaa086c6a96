//! Data structures for the bracket: teams, coaches, players, rounds, matches, and their registry.

mod error;
mod fixture;
mod player;
mod registry;
mod round;
mod team;

pub use error::{BtmsError, EntityKind};
pub use fixture::{Match, MatchId, NewMatch};
pub use player::{NewPlayer, Player, PlayerId};
pub use registry::Registry;
pub use round::{NewRound, Round, RoundId};
pub use team::{Coach, CoachId, NewCoach, NewTeam, Team, TeamId};
