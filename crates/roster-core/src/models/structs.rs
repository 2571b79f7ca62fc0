use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_USER_NAME;

/// A row of the `"user"` table. `id` is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ id: {}, name: '{}' }}", self.id, self.name)
    }
}

/// Insert payload for a `User`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for NewUser {
    fn default() -> Self {
        Self::new(DEFAULT_USER_NAME)
    }
}
