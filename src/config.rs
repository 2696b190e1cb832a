//! Runtime configuration for the access core, read from `WELLBEING_*` environment variables.

use std::time::Duration;
use tracing::warn;

pub const ENV_LOGIN_PATH: &str = "WELLBEING_LOGIN_PATH";
pub const ENV_LANDING_PATH: &str = "WELLBEING_LANDING_PATH";
pub const ENV_LOGIN_LATENCY_MS: &str = "WELLBEING_LOGIN_LATENCY_MS";
pub const ENV_LOGOUT_LATENCY_MS: &str = "WELLBEING_LOGOUT_LATENCY_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessConfig {
    /// Where unauthenticated visitors are sent.
    pub login_path: String,
    /// Where authenticated but under-privileged visitors are sent.
    pub landing_path: String,
    /// Simulated provider round-trip for login.
    pub login_latency: Duration,
    /// Simulated provider round-trip for logout.
    pub logout_latency: Duration,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            login_path: "/login".to_string(),
            landing_path: "/dashboard".to_string(),
            login_latency: Duration::from_millis(1000),
            logout_latency: Duration::from_millis(500),
        }
    }
}

impl AccessConfig {
    /// Defaults with no simulated latency.
    pub fn instant() -> Self {
        Self { login_latency: Duration::ZERO, logout_latency: Duration::ZERO, ..Self::default() }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build from an arbitrary key lookup; unset or unparsable values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(p) = lookup(ENV_LOGIN_PATH).filter(|s| !s.trim().is_empty()) {
            cfg.login_path = p.trim().to_string();
        }
        if let Some(p) = lookup(ENV_LANDING_PATH).filter(|s| !s.trim().is_empty()) {
            cfg.landing_path = p.trim().to_string();
        }
        if let Some(d) = parse_ms(&lookup, ENV_LOGIN_LATENCY_MS) {
            cfg.login_latency = d;
        }
        if let Some(d) = parse_ms(&lookup, ENV_LOGOUT_LATENCY_MS) {
            cfg.logout_latency = d;
        }
        cfg
    }
}

fn parse_ms<F>(lookup: &F, key: &str) -> Option<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(_) => {
            warn!(target: "wellbeing", "ignoring {}='{}': expected milliseconds", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = AccessConfig::from_lookup(|_| None);
        assert_eq!(cfg, AccessConfig::default());
        assert_eq!(cfg.login_latency, Duration::from_millis(1000));
        assert_eq!(cfg.logout_latency, Duration::from_millis(500));
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = AccessConfig::from_lookup(lookup_from(&[
            (ENV_LOGIN_PATH, "/signin"),
            (ENV_LANDING_PATH, " /home "),
            (ENV_LOGIN_LATENCY_MS, "0"),
            (ENV_LOGOUT_LATENCY_MS, "25"),
        ]));
        assert_eq!(cfg.login_path, "/signin");
        assert_eq!(cfg.landing_path, "/home");
        assert_eq!(cfg.login_latency, Duration::ZERO);
        assert_eq!(cfg.logout_latency, Duration::from_millis(25));
    }

    #[test]
    fn garbage_latency_falls_back() {
        let cfg = AccessConfig::from_lookup(lookup_from(&[(ENV_LOGIN_LATENCY_MS, "soon"), (ENV_LOGIN_PATH, "  ")]));
        assert_eq!(cfg.login_latency, Duration::from_millis(1000));
        assert_eq!(cfg.login_path, "/login");
    }
}
