//! Bracket tournament management: entity registry, bracket progression, roster queries,
//! and the HTTP layer that exposes them.

pub mod api;
pub mod config;
pub mod logic;
pub mod models;

pub use config::{ServerConfig, UserAccount};
pub use logic::{
    bracket_rounds, filter_by_percentile, filter_by_team, generate_demo_tournament, is_permitted,
    matches_in_round, next_round_pairings, parse_percentile, percentile_threshold, roster_query,
    validate_bracket, validate_progression, Action, BracketRound, Resource, Role, SeedSummary,
};
pub use models::{
    BtmsError, Coach, CoachId, EntityKind, Match, MatchId, NewCoach, NewMatch, NewPlayer,
    NewRound, NewTeam, Player, PlayerId, Registry, Round, RoundId, Team, TeamId,
};
