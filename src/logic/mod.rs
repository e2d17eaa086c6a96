//! Tournament logic: bracket progression, roster queries, permissions, demo data.

pub mod bracket;
pub mod permissions;
pub mod roster;
pub mod seed;

pub use bracket::{
    bracket_rounds, matches_in_round, next_round_pairings, validate_bracket, validate_progression,
    BracketRound,
};
pub use permissions::{is_permitted, Action, Resource, Role};
pub use roster::{
    filter_by_percentile, filter_by_team, parse_percentile, percentile_threshold, roster_query,
};
pub use seed::{generate_demo_tournament, SeedSummary, DEMO_TEAM_COUNT};
