use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AuthError;

/// Staff roles. Flat: no role implies another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Counsellor,
    SafeguardingLead,
    Leadership,
    Admin,
}

/// Badge style used when a role is shown next to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Outline,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Counsellor, Role::SafeguardingLead, Role::Leadership, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Counsellor => "counsellor",
            Role::SafeguardingLead => "safeguarding_lead",
            Role::Leadership => "leadership",
            Role::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Counsellor => "Wellbeing Counsellor",
            Role::SafeguardingLead => "Safeguarding Lead",
            Role::Leadership => "Leadership",
            Role::Admin => "Administrator",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            Role::Admin => BadgeVariant::Default,
            Role::Leadership | Role::SafeguardingLead => BadgeVariant::Secondary,
            Role::Counsellor => BadgeVariant::Outline,
        }
    }

    pub(crate) const fn bit(&self) -> u8 {
        match self {
            Role::Counsellor => 1 << 0,
            Role::SafeguardingLead => 1 << 1,
            Role::Leadership => 1 << 2,
            Role::Admin => 1 << 3,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase();
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == norm)
            .ok_or_else(|| AuthError::UnknownRole(s.trim().to_string()))
    }
}
