use serde::Serialize;

use super::policy::{has_role, requirements};
use super::principal::Identity;

/// Action-level permissions derived from the viewer's role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub can_view_reports: bool,
    pub can_manage_users: bool,
    pub can_edit_cases: bool,
    pub can_create_cases: bool,
    pub can_escalate_cases: bool,
    pub can_close_cases: bool,
    pub can_view_all_cases: bool,
    pub can_export_data: bool,
}

impl Capabilities {
    /// Everything false without an identity.
    pub fn for_identity(identity: Option<&Identity>) -> Self {
        if identity.is_none() {
            return Self::default();
        }
        Self {
            can_view_reports: has_role(identity, requirements::REPORTS),
            can_manage_users: has_role(identity, requirements::MANAGE_USERS),
            can_edit_cases: has_role(identity, requirements::CASE_EDIT),
            can_create_cases: has_role(identity, requirements::CASE_CREATE),
            can_escalate_cases: has_role(identity, requirements::ESCALATE),
            can_close_cases: has_role(identity, requirements::CASE_CLOSE),
            can_view_all_cases: has_role(identity, requirements::VIEW_ALL_CASES),
            can_export_data: has_role(identity, requirements::EXPORT),
        }
    }
}
