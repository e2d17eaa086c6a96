//! Role/resource/action matrix.

use btms::{is_permitted, Action, Resource, Role};

const ALL_ACTIONS: [Action; 5] = [
    Action::List,
    Action::Retrieve,
    Action::Create,
    Action::Update,
    Action::Delete,
];

#[test]
fn admin_only_resources() {
    for resource in [Resource::Teams, Resource::Coaches, Resource::Rounds] {
        for action in ALL_ACTIONS {
            assert!(is_permitted(Role::Admin, resource, action));
            assert!(!is_permitted(Role::Coach, resource, action));
            assert!(!is_permitted(Role::Player, resource, action));
        }
    }
}

#[test]
fn coaches_read_and_update_players() {
    for action in [Action::List, Action::Retrieve, Action::Update] {
        assert!(is_permitted(Role::Coach, Resource::Players, action));
        assert!(!is_permitted(Role::Player, Resource::Players, action));
    }
    for action in [Action::Create, Action::Delete] {
        assert!(is_permitted(Role::Admin, Resource::Players, action));
        assert!(!is_permitted(Role::Coach, Resource::Players, action));
    }
}

#[test]
fn matches_are_open_to_every_role() {
    for role in [Role::Admin, Role::Coach, Role::Player] {
        for action in ALL_ACTIONS {
            assert!(is_permitted(role, Resource::Matches, action));
        }
    }
}
