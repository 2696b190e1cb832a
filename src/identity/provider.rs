use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

use super::principal::Identity;
use super::role::Role;
use crate::error::AuthError;

/// Turns an email/password pair into an [`Identity`].
///
/// The in-memory [`StaticCredentialResolver`] and a real identity provider are
/// interchangeable behind this trait. Provider outages should map to
/// [`AuthError::ProviderUnavailable`]; unknown or rejected credentials to
/// [`AuthError::InvalidCredentials`].
#[async_trait]
pub trait CredentialResolver: Send + Sync {
    async fn resolve_credentials(&self, email: &str, password: &str) -> Result<Identity, AuthError>;
}

/// Fixed email -> identity table. Passwords are accepted but not checked.
pub struct StaticCredentialResolver {
    accounts: HashMap<String, Identity>,
    latency: Duration,
}

impl StaticCredentialResolver {
    pub fn new<I>(accounts: I) -> Self
    where
        I: IntoIterator<Item = Identity>,
    {
        let accounts = accounts
            .into_iter()
            .map(|id| (normalize_email(id.email()), id))
            .collect();
        Self { accounts, latency: Duration::ZERO }
    }

    /// One sample account per role.
    pub fn demo() -> Self {
        Self::new([
            Identity::new("1", "counsellor@school.edu", "Sarah Johnson", Role::Counsellor),
            Identity::new("2", "lead@school.edu", "Michael Chen", Role::SafeguardingLead),
            Identity::new("3", "leadership@school.edu", "Emma Williams", Role::Leadership),
            Identity::new("4", "admin@school.edu", "James Brown", Role::Admin),
        ])
    }

    /// Sleep this long before every answer, to mimic a provider round-trip.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn len(&self) -> usize { self.accounts.len() }

    pub fn is_empty(&self) -> bool { self.accounts.is_empty() }
}

#[async_trait]
impl CredentialResolver for StaticCredentialResolver {
    async fn resolve_credentials(&self, email: &str, _password: &str) -> Result<Identity, AuthError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let key = normalize_email(email);
        match self.accounts.get(&key) {
            Some(identity) => {
                debug!(target: "wellbeing", "resolver.static hit email={} role={} (password not checked)", key, identity.role());
                Ok(identity.clone())
            }
            None => {
                debug!(target: "wellbeing", "resolver.static miss email={}", key);
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn demo_table_has_one_account_per_role() {
        let r = StaticCredentialResolver::demo();
        assert_eq!(r.len(), 4);
        for (email, role) in [
            ("counsellor@school.edu", Role::Counsellor),
            ("lead@school.edu", Role::SafeguardingLead),
            ("leadership@school.edu", Role::Leadership),
            ("admin@school.edu", Role::Admin),
        ] {
            let id = r.resolve_credentials(email, "").await.unwrap();
            assert_eq!(id.role(), role);
            assert_eq!(id.email(), email);
        }
    }

    #[tokio::test]
    async fn email_lookup_ignores_case_and_padding() {
        let r = StaticCredentialResolver::demo();
        let id = r.resolve_credentials("  Admin@School.EDU ", "whatever").await.unwrap();
        assert_eq!(id.full_name(), "James Brown");
    }

    #[tokio::test]
    async fn unknown_email_is_invalid_credentials() {
        let r = StaticCredentialResolver::demo();
        let err = r.resolve_credentials("nobody@school.edu", "pw").await.unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }
}
