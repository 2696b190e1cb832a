use serde::{Deserialize, Serialize};

use super::role::Role;

/// An authenticated staff member. Issued whole by a credential resolver and never edited in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    id: String,
    email: String,
    full_name: String,
    role: Role,
}

impl Identity {
    pub fn new(id: impl Into<String>, email: impl Into<String>, full_name: impl Into<String>, role: Role) -> Self {
        Self { id: id.into(), email: email.into(), full_name: full_name.into(), role }
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn email(&self) -> &str { &self.email }
    pub fn full_name(&self) -> &str { &self.full_name }
    pub fn role(&self) -> Role { self.role }

    /// Up to two uppercase initials from the display name ("Sarah Johnson" -> "SJ").
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .flat_map(|c| c.to_uppercase())
            .take(2)
            .collect()
    }
}
