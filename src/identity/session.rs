use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::{info, warn};

use super::capabilities::Capabilities;
use super::policy;
use super::principal::Identity;
use super::provider::{CredentialResolver, StaticCredentialResolver};
use super::role_set::RoleSet;
use crate::config::AccessConfig;
use crate::error::AuthError;
use crate::tprintln;

/// Point-in-time view of the session: zero-or-one identity plus the in-flight flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub identity: Option<Arc<Identity>>,
    pub loading: bool,
}

impl SessionSnapshot {
    pub fn identity(&self) -> Option<&Identity> { self.identity.as_deref() }

    pub fn is_authenticated(&self) -> bool { self.identity.is_some() }

    pub fn can_access(&self, required: impl Into<RoleSet>) -> bool {
        policy::can_access(self.identity(), required)
    }
}

/// Owns the current identity for one running client and mediates every change to it.
///
/// Only `login` and `logout` mutate state. At most one of them runs at a time; a second
/// call made while one is outstanding fails with [`AuthError::OperationInFlight`] and
/// leaves the session untouched. The `loading` flag is the in-flight marker itself, so a
/// reader that sees `loading == false` can always start a new operation.
pub struct SessionStore {
    resolver: Arc<dyn CredentialResolver>,
    state: RwLock<SessionSnapshot>,
    events: watch::Sender<SessionSnapshot>,
    logout_latency: Duration,
}

impl SessionStore {
    pub fn new(resolver: Arc<dyn CredentialResolver>, config: &AccessConfig) -> Self {
        let (events, _) = watch::channel(SessionSnapshot::default());
        Self {
            resolver,
            state: RwLock::new(SessionSnapshot::default()),
            events,
            logout_latency: config.logout_latency,
        }
    }

    /// Store backed by the four sample accounts, with latencies from `config`.
    pub fn demo(config: &AccessConfig) -> Self {
        let resolver = StaticCredentialResolver::demo().with_latency(config.login_latency);
        Self::new(Arc::new(resolver), config)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let guard = self.begin("login")?;
        match self.resolver.resolve_credentials(email, password).await {
            Ok(identity) => {
                info!(target: "wellbeing", "session.login user_id={} role={}", identity.id(), identity.role());
                let identity = Arc::new(identity);
                guard.finish(|s| s.identity = Some(identity));
                Ok(())
            }
            Err(e) => {
                warn!(target: "wellbeing", "session.login failed code={}", e.code_str());
                Err(e)
            }
        }
    }

    pub async fn logout(&self) -> Result<(), AuthError> {
        let guard = self.begin("logout")?;
        if !self.logout_latency.is_zero() {
            tokio::time::sleep(self.logout_latency).await;
        }
        let mut prior = None;
        guard.finish(|s| prior = s.identity.take().map(|i| i.id().to_string()));
        info!(target: "wellbeing", "session.logout user_id={}", prior.as_deref().unwrap_or("<none>"));
        Ok(())
    }

    pub fn current_identity(&self) -> Option<Arc<Identity>> {
        self.state.read().identity.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().identity.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.read().clone()
    }

    pub fn has_role(&self, roles: impl Into<RoleSet>) -> bool {
        policy::has_role(self.current_identity().as_deref(), roles)
    }

    pub fn can_access(&self, required: impl Into<RoleSet>) -> bool {
        policy::can_access(self.current_identity().as_deref(), required)
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::for_identity(self.current_identity().as_deref())
    }

    /// Receiver that sees every state transition, starting from the current state.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.events.subscribe()
    }

    /// Tear the session down at shutdown. Subscribers observe a final empty snapshot.
    pub fn close(self) {
        self.update(|s| {
            let changed = s.identity.is_some() || s.loading;
            *s = SessionSnapshot::default();
            changed
        });
        tprintln!("session.close");
    }

    fn begin(&self, op: &'static str) -> Result<InFlight<'_>, AuthError> {
        {
            let mut st = self.state.write();
            if st.loading {
                drop(st);
                warn!(target: "wellbeing", "session.{} rejected: operation already in flight", op);
                return Err(AuthError::OperationInFlight);
            }
            st.loading = true;
            self.events.send_replace(st.clone());
        }
        tprintln!("session.{} begin", op);
        Ok(InFlight { store: self, op, armed: true })
    }

    /// Apply `f` under the write lock; publish to subscribers when it reports a change.
    fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut SessionSnapshot) -> bool,
    {
        let mut st = self.state.write();
        if f(&mut st) {
            self.events.send_replace(st.clone());
        }
    }
}

/// Held for the duration of a login/logout. Dropping it unfinished clears `loading` even
/// if the operation failed or its future was dropped mid-flight.
struct InFlight<'a> {
    store: &'a SessionStore,
    op: &'static str,
    armed: bool,
}

impl InFlight<'_> {
    /// Apply the outcome and clear `loading` in one write, published as one snapshot.
    fn finish<F>(mut self, f: F)
    where
        F: FnOnce(&mut SessionSnapshot),
    {
        self.store.update(|s| {
            f(s);
            s.loading = false;
            true
        });
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.store.update(|s| {
                s.loading = false;
                true
            });
        }
        tprintln!("session.{} end", self.op);
    }
}
