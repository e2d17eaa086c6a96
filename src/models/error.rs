//! Error type shared by the registry and the bracket/roster operations.

/// Which kind of entity an error refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntityKind {
    Team,
    Coach,
    Player,
    Round,
    Match,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Team => "team",
            EntityKind::Coach => "coach",
            EntityKind::Player => "player",
            EntityKind::Round => "round",
            EntityKind::Match => "match",
        };
        f.write_str(name)
    }
}

/// Errors returned by registry and query operations.
#[derive(Clone, Debug, PartialEq)]
pub enum BtmsError {
    /// Malformed or out-of-range input (bad percentile, empty scores, invalid entity fields).
    InvalidArgument(String),
    /// Match collection cannot be advanced (odd count, missing winner, broken progression).
    InvalidBracketState(String),
    /// Referenced entity does not exist.
    NotFound { kind: EntityKind, id: u32 },
    /// Delete blocked: other records still reference this entity.
    Restricted {
        kind: EntityKind,
        id: u32,
        referenced_by: EntityKind,
    },
}

impl std::fmt::Display for BtmsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BtmsError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            BtmsError::InvalidBracketState(msg) => write!(f, "Invalid bracket state: {}", msg),
            BtmsError::NotFound { kind, id } => write!(f, "No {} with id {}", kind, id),
            BtmsError::Restricted {
                kind,
                id,
                referenced_by,
            } => write!(
                f,
                "Cannot delete {} {}: still referenced by at least one {}",
                kind, id, referenced_by
            ),
        }
    }
}

impl std::error::Error for BtmsError {}
