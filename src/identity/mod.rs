//! Identity, session lifecycle and role-based access decisions.
//! Keep the public surface thin and split implementation across sub-modules.

mod role;
mod role_set;
mod principal;
mod provider;
mod session;
mod capabilities;
pub mod policy;

pub use role::{Role, BadgeVariant};
pub use role_set::RoleSet;
pub use principal::Identity;
pub use provider::{CredentialResolver, StaticCredentialResolver};
pub use session::{SessionStore, SessionSnapshot};
pub use capabilities::Capabilities;
pub use policy::{has_role, can_access, RoleGate};
