//! Role-based access: which role may perform which action on which resource.

use serde::{Deserialize, Serialize};

/// User group an account belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Coach,
    Player,
}

/// Entity collection exposed by the host.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Resource {
    Teams,
    Coaches,
    Players,
    Rounds,
    Matches,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    List,
    Retrieve,
    Create,
    Update,
    Delete,
}

/// Whether `role` may perform `action` on `resource`.
///
/// Teams, coaches, and rounds are admin-only. Coaches may also read and update
/// players; creating or deleting players stays with admins. Matches are open
/// to every signed-in role.
pub fn is_permitted(role: Role, resource: Resource, action: Action) -> bool {
    match resource {
        Resource::Teams | Resource::Coaches | Resource::Rounds => role == Role::Admin,
        Resource::Players => match action {
            Action::Create | Action::Delete => role == Role::Admin,
            Action::List | Action::Retrieve | Action::Update => {
                matches!(role, Role::Admin | Role::Coach)
            }
        },
        Resource::Matches => true,
    }
}
