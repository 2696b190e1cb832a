//! Access Policy: stateless role checks over an optional identity.
//!
//! `has_role` is plain membership. `can_access` is the authorization gate: it treats
//! an empty requirement as "any authenticated identity", while `has_role` with an
//! empty set is always false. Gate pages and actions with `can_access`.

use super::principal::Identity;
use super::role::Role;
use super::role_set::RoleSet;

/// True iff an identity is present and its role is in `roles`.
pub fn has_role(identity: Option<&Identity>, roles: impl Into<RoleSet>) -> bool {
    match identity {
        Some(id) => roles.into().contains(id.role()),
        None => false,
    }
}

/// Authorization decision for a resource requiring `required`.
pub fn can_access(identity: Option<&Identity>, required: impl Into<RoleSet>) -> bool {
    let Some(id) = identity else { return false; };
    let required = required.into();
    required.is_empty() || required.contains(id.role())
}

/// Role sets used by the dashboard's pages and actions.
pub mod requirements {
    use super::{Role, RoleSet};

    const CASEWORK: RoleSet = RoleSet::empty().with(Role::Counsellor).with(Role::SafeguardingLead).with(Role::Admin);
    const OVERSIGHT: RoleSet = RoleSet::empty().with(Role::Leadership).with(Role::Admin);

    pub const DASHBOARD: RoleSet = RoleSet::all();
    pub const CASES: RoleSet = RoleSet::all();
    pub const STUDENTS: RoleSet = CASEWORK;
    pub const CASE_CREATE: RoleSet = CASEWORK;
    pub const CASE_EDIT: RoleSet = CASEWORK;
    pub const CASE_CLOSE: RoleSet = CASEWORK;
    pub const ESCALATE: RoleSet = RoleSet::empty().with(Role::SafeguardingLead).with(Role::Admin);
    pub const VIEW_ALL_CASES: RoleSet = RoleSet::empty().with(Role::SafeguardingLead).with(Role::Leadership).with(Role::Admin);
    pub const REPORTS: RoleSet = OVERSIGHT;
    pub const EXPORT: RoleSet = OVERSIGHT;
    pub const SETTINGS: RoleSet = RoleSet::empty().with(Role::Admin);
    pub const MANAGE_USERS: RoleSet = SETTINGS;
}

/// Shows or hides a fragment depending on the viewer's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleGate {
    allowed: RoleSet,
}

impl RoleGate {
    pub fn new(allowed: impl Into<RoleSet>) -> Self {
        Self { allowed: allowed.into() }
    }

    pub fn admits(&self, identity: Option<&Identity>) -> bool {
        can_access(identity, self.allowed)
    }

    /// `content` when admitted, otherwise `fallback`.
    pub fn select<T>(&self, identity: Option<&Identity>, content: T, fallback: T) -> T {
        if self.admits(identity) { content } else { fallback }
    }
}
