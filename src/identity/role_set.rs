use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::role::Role;

/// Unordered set of roles permitted to reach a resource.
///
/// Callers may pass a single [`Role`], an array or slice of roles, or a built set
/// wherever `impl Into<RoleSet>` is accepted; all mean plain set membership.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RoleSet(u8);

impl RoleSet {
    pub const fn empty() -> Self { RoleSet(0) }

    pub const fn all() -> Self {
        Self::empty().with(Role::Counsellor).with(Role::SafeguardingLead).with(Role::Leadership).with(Role::Admin)
    }

    /// Const builder, for role sets declared as constants.
    pub const fn with(self, role: Role) -> Self { RoleSet(self.0 | role.bit()) }

    pub fn of(roles: &[Role]) -> Self {
        roles.iter().copied().collect()
    }

    pub const fn contains(&self, role: Role) -> bool { self.0 & role.bit() != 0 }

    pub const fn is_empty(&self) -> bool { self.0 == 0 }

    pub fn len(&self) -> usize { self.0.count_ones() as usize }

    pub fn insert(&mut self, role: Role) { self.0 |= role.bit(); }

    pub fn union(self, other: RoleSet) -> RoleSet { RoleSet(self.0 | other.0) }

    /// Roles in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        Role::ALL.into_iter().filter(move |r| self.contains(*r))
    }
}

impl From<Role> for RoleSet {
    fn from(role: Role) -> Self { RoleSet(role.bit()) }
}

impl<const N: usize> From<[Role; N]> for RoleSet {
    fn from(roles: [Role; N]) -> Self { roles.into_iter().collect() }
}

impl From<&[Role]> for RoleSet {
    fn from(roles: &[Role]) -> Self { Self::of(roles) }
}

impl From<&Vec<Role>> for RoleSet {
    fn from(roles: &Vec<Role>) -> Self { Self::of(roles) }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        let mut set = RoleSet::empty();
        for r in iter { set.insert(r); }
        set
    }
}

impl fmt::Debug for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for RoleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for RoleSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let roles = Vec::<Role>::deserialize(deserializer)?;
        Ok(roles.into_iter().collect())
    }
}
