//! Route table and guard for the dashboard pages.
//!
//! The renderer asks [`RouteTable::decide`] what to do with a path before drawing it.
//! Unauthenticated visitors go to the login path; authenticated visitors without the
//! required role go to the landing path. The two outcomes are separate variants.

use serde::Serialize;
use tracing::debug;

use crate::config::AccessConfig;
use crate::identity::policy::requirements;
use crate::identity::{RoleSet, SessionSnapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDef {
    pub path: String,
    /// Empty means any authenticated identity.
    pub required_roles: RoleSet,
    /// Rendered without a session (the login page).
    pub public: bool,
}

impl RouteDef {
    pub fn public(path: impl Into<String>) -> Self {
        Self { path: path.into(), required_roles: RoleSet::empty(), public: true }
    }

    pub fn protected(path: impl Into<String>, required_roles: impl Into<RoleSet>) -> Self {
        Self { path: path.into(), required_roles: required_roles.into(), public: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteDecision {
    /// A login/logout is in flight; show a loading state.
    Pending,
    Render,
    /// Unconditional alias, e.g. `/` to the landing page.
    Redirect { to: String },
    RedirectToLogin { to: String, from: String },
    RedirectToLanding { to: String },
    NotFound,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDef>,
    login_path: String,
    landing_path: String,
}

impl RouteTable {
    pub fn new(config: &AccessConfig) -> Self {
        Self {
            routes: Vec::new(),
            login_path: normalize(&config.login_path).to_string(),
            landing_path: normalize(&config.landing_path).to_string(),
        }
    }

    /// The dashboard's pages and their role requirements.
    pub fn dashboard(config: &AccessConfig) -> Self {
        let login = config.login_path.clone();
        Self::new(config)
            .with(RouteDef::public(login))
            .with(RouteDef::protected("/dashboard", RoleSet::empty()))
            .with(RouteDef::protected("/students", requirements::STUDENTS))
            .with(RouteDef::protected("/cases", RoleSet::empty()))
            .with(RouteDef::protected("/reports", requirements::REPORTS))
            .with(RouteDef::protected("/settings", requirements::SETTINGS))
    }

    /// Add or replace the route for `def.path`.
    pub fn with(mut self, mut def: RouteDef) -> Self {
        def.path = normalize(&def.path).to_string();
        self.routes.retain(|r| r.path != def.path);
        self.routes.push(def);
        self
    }

    pub fn routes(&self) -> &[RouteDef] { &self.routes }

    pub fn get(&self, path: &str) -> Option<&RouteDef> {
        let path = normalize(path);
        self.routes.iter().find(|r| r.path == path)
    }

    pub fn decide(&self, session: &SessionSnapshot, path: &str) -> RouteDecision {
        let path = normalize(path);
        if path == "/" {
            return RouteDecision::Redirect { to: self.landing_path.clone() };
        }
        let Some(route) = self.get(path) else {
            return RouteDecision::NotFound;
        };
        if route.public {
            return RouteDecision::Render;
        }
        // only guarded pages wait for an in-flight login/logout
        if session.loading {
            return RouteDecision::Pending;
        }
        if !session.is_authenticated() {
            debug!(target: "wellbeing", "route.guard path={} -> login", path);
            return RouteDecision::RedirectToLogin { to: self.login_path.clone(), from: path.to_string() };
        }
        if !session.can_access(route.required_roles) {
            debug!(target: "wellbeing", "route.guard path={} -> landing (insufficient role)", path);
            return RouteDecision::RedirectToLanding { to: self.landing_path.clone() };
        }
        RouteDecision::Render
    }
}

fn normalize(path: &str) -> &str {
    let p = path.trim();
    if p.len() <= 1 {
        return p;
    }
    match p.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}
