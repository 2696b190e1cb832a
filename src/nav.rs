//! Sidebar navigation model, filtered per viewer.

use serde::Serialize;

use crate::identity::policy::{can_access, requirements};
use crate::identity::{Identity, RoleSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavSection {
    Navigation,
    Administration,
}

impl NavSection {
    pub fn label(&self) -> &'static str {
        match self {
            NavSection::Navigation => "Navigation",
            NavSection::Administration => "Administration",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub title: String,
    pub href: String,
    pub section: NavSection,
    pub roles: RoleSet,
}

impl NavItem {
    pub fn new(title: impl Into<String>, href: impl Into<String>, section: NavSection, roles: impl Into<RoleSet>) -> Self {
        Self { title: title.into(), href: href.into(), section, roles: roles.into() }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NavMenu {
    items: Vec<NavItem>,
}

impl NavMenu {
    pub fn new(items: Vec<NavItem>) -> Self { Self { items } }

    pub fn dashboard() -> Self {
        use NavSection::*;
        Self::new(vec![
            NavItem::new("Dashboard", "/dashboard", Navigation, requirements::DASHBOARD),
            NavItem::new("Students", "/students", Navigation, requirements::STUDENTS),
            NavItem::new("Cases", "/cases", Navigation, requirements::CASES),
            NavItem::new("Reports", "/reports", Navigation, requirements::REPORTS),
            NavItem::new("Settings", "/settings", Administration, requirements::SETTINGS),
        ])
    }

    pub fn items(&self) -> &[NavItem] { &self.items }

    /// Items the viewer may open, in declaration order.
    pub fn visible(&self, identity: Option<&Identity>) -> Vec<&NavItem> {
        self.items.iter().filter(|i| can_access(identity, i.roles)).collect()
    }

    pub fn visible_in(&self, section: NavSection, identity: Option<&Identity>) -> Vec<&NavItem> {
        self.items
            .iter()
            .filter(|i| i.section == section && can_access(identity, i.roles))
            .collect()
    }

    /// Non-empty sections with their visible items.
    pub fn sections(&self, identity: Option<&Identity>) -> Vec<(NavSection, Vec<&NavItem>)> {
        [NavSection::Navigation, NavSection::Administration]
            .into_iter()
            .map(|s| (s, self.visible_in(s, identity)))
            .filter(|(_, items)| !items.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Role;

    fn titles(items: &[&NavItem]) -> Vec<String> {
        items.iter().map(|i| i.title.clone()).collect()
    }

    #[test]
    fn nothing_for_anonymous() {
        let m = NavMenu::dashboard();
        assert!(m.visible(None).is_empty());
        assert!(m.sections(None).is_empty());
    }

    #[test]
    fn empty_role_item_visible_to_any_signed_in_user() {
        let m = NavMenu::new(vec![NavItem::new("Help", "/help", NavSection::Navigation, RoleSet::empty())]);
        let who = Identity::new("1", "a@school.edu", "A B", Role::Leadership);
        assert_eq!(titles(&m.visible(Some(&who))), vec!["Help"]);
        assert!(m.visible(None).is_empty());
    }

    #[test]
    fn admin_section_only_for_admin() {
        let m = NavMenu::dashboard();
        let admin = Identity::new("4", "admin@school.edu", "James Brown", Role::Admin);
        let lead = Identity::new("2", "lead@school.edu", "Michael Chen", Role::SafeguardingLead);
        let sections = m.sections(Some(&admin));
        assert_eq!(sections.len(), 2);
        assert_eq!(titles(&sections[1].1), vec!["Settings"]);
        let sections = m.sections(Some(&lead));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].0, NavSection::Navigation);
    }
}
