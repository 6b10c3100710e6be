//! The user directory. It is a fixed roster compiled into the binary; there is
//! nothing to read from disk.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::store::PostStore;

/// Shown for a post author missing from the roster.
pub const UNKNOWN_USER: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: &'static str,
    pub login: &'static str,
    pub name: &'static str,
}

const USERS: [User; 9] = [
    User {
        id: "U0",
        login: "alex",
        name: "Alexander Töpfer",
    },
    User {
        id: "U1",
        login: "nils",
        name: "Nils Hartmann",
    },
    User {
        id: "U2",
        login: "susi",
        name: "Susi Mueller",
    },
    User {
        id: "U3",
        login: "klaus",
        name: "Klaus Schneider",
    },
    User {
        id: "U4",
        login: "sue",
        name: "Sue Taylor",
    },
    User {
        id: "U5",
        login: "lauren",
        name: "Lauren Jones",
    },
    User {
        id: "U6",
        login: "olivia",
        name: "Olivia Smith",
    },
    User {
        id: "U7",
        login: "cathy",
        name: "Cathy Brown",
    },
    User {
        id: "U8",
        login: "maja",
        name: "Maja Walsh",
    },
];

pub fn read_users() -> &'static [User] {
    &USERS
}

pub fn find_user(id: &str) -> Option<&'static User> {
    USERS.iter().find(|user| user.id == id)
}

pub fn find_user_by_login(login: &str) -> Option<&'static User> {
    USERS.iter().find(|user| user.login == login)
}

/// Maps every distinct author ID in `store` to a display name.
pub fn user_names_mapping(store: &PostStore) -> BTreeMap<String, String> {
    store
        .iter()
        .filter_map(|post| post.user_id())
        .map(|id| {
            let name = find_user(id).map_or(UNKNOWN_USER, |user| user.name);
            (id.to_string(), name.to_string())
        })
        .collect()
}
