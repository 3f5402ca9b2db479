//! Session gate
//!
//! Authentication state is one persisted marker: the key
//! [`SESSION_KEY`] holding exactly [`AUTHENTICATED_MARKER`]. Any other value,
//! or no value, means logged out. Protected views consult the gate when they
//! mount and must not render until it has answered.

use tracing::{info, instrument, warn};

use crate::credential::Authenticator;
use crate::error::{Error, Result};
use crate::storage::SessionStore;

/// Storage key of the session flag
pub const SESSION_KEY: &str = "isAuthenticated";

/// The only value that counts as logged in
pub const AUTHENTICATED_MARKER: &str = "true";

/// What a protected view knows about the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    /// Not checked yet; render a loading placeholder
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

impl GateState {
    pub fn from_check(authenticated: bool) -> Self {
        if authenticated {
            GateState::Authenticated
        } else {
            GateState::Unauthenticated
        }
    }

    /// Protected content may only render in this state
    pub fn allows_render(&self) -> bool {
        matches!(self, GateState::Authenticated)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, GateState::Unknown)
    }
}

/// Reads and writes the session flag, and checks credentials on login
pub struct SessionGate<S, A> {
    store: S,
    authenticator: A,
}

impl<S: SessionStore, A: Authenticator> SessionGate<S, A> {
    pub fn new(store: S, authenticator: A) -> Self {
        Self {
            store,
            authenticator,
        }
    }

    /// True only when the stored marker is exactly `"true"`.
    /// A failed read counts as logged out.
    pub fn check_session(&self) -> bool {
        match self.store.get(SESSION_KEY) {
            Ok(value) => value.as_deref() == Some(AUTHENTICATED_MARKER),
            Err(e) => {
                warn!(error = %e, "Session read failed, treating as logged out");
                false
            }
        }
    }

    /// Resolve the tri-state for a view that is mounting
    pub fn resolve(&self) -> GateState {
        GateState::from_check(self.check_session())
    }

    /// Check the credential pair; persist the marker only on success
    #[instrument(skip(self, password))]
    pub fn login(&self, username: &str, password: &str) -> Result<()> {
        if !self.authenticator.verify(username, password) {
            warn!("Rejected login");
            return Err(Error::InvalidCredentials);
        }
        self.store.set(SESSION_KEY, AUTHENTICATED_MARKER)?;
        info!("Session started");
        Ok(())
    }

    /// Clear the marker. Idempotent; a storage failure is logged, not raised.
    #[instrument(skip(self))]
    pub fn logout(&self) {
        match self.store.clear(SESSION_KEY) {
            Ok(()) => info!("Session cleared"),
            Err(e) => warn!(error = %e, "Failed to clear session"),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::FixedCredential;
    use crate::storage::{Database, MemoryStore};

    struct Fixed;

    impl Authenticator for Fixed {
        fn verify(&self, username: &str, password: &str) -> bool {
            username == "etumlabadmin" && password == "california"
        }
    }

    fn gate() -> SessionGate<MemoryStore, Fixed> {
        SessionGate::new(MemoryStore::new(), Fixed)
    }

    #[test]
    fn test_absent_marker_is_logged_out() {
        assert!(!gate().check_session());
    }

    #[test]
    fn test_only_exact_marker_counts() {
        let gate = gate();
        for value in ["", "false", "TRUE", "True", " true", "true ", "1", "yes"] {
            gate.store().set(SESSION_KEY, value).unwrap();
            assert!(!gate.check_session(), "value {:?} should not authenticate", value);
        }
        gate.store().set(SESSION_KEY, "true").unwrap();
        assert!(gate.check_session());
    }

    #[test]
    fn test_login_success_sets_marker() {
        let gate = gate();
        gate.login("etumlabadmin", "california").unwrap();
        assert!(gate.check_session());
        assert_eq!(
            gate.store().get(SESSION_KEY).unwrap().as_deref(),
            Some(AUTHENTICATED_MARKER)
        );
    }

    #[test]
    fn test_login_failure_leaves_state_unchanged() {
        let gate = gate();
        assert!(matches!(
            gate.login("etumlabadmin", "wrong"),
            Err(Error::InvalidCredentials)
        ));
        assert!(!gate.check_session());
        assert_eq!(gate.store().get(SESSION_KEY).unwrap(), None);

        gate.login("etumlabadmin", "california").unwrap();
        assert!(gate.login("intruder", "california").is_err());
        assert!(gate.check_session());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let gate = gate();
        gate.login("etumlabadmin", "california").unwrap();

        gate.logout();
        assert!(!gate.check_session());
        gate.logout();
        assert!(!gate.check_session());
        assert_eq!(gate.store().get(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn test_resolve_tri_state() {
        let gate = gate();
        assert!(GateState::default().is_loading());
        assert!(!GateState::default().allows_render());
        assert_eq!(gate.resolve(), GateState::Unauthenticated);

        gate.login("etumlabadmin", "california").unwrap();
        assert_eq!(gate.resolve(), GateState::Authenticated);
        assert!(gate.resolve().allows_render());
    }

    #[test]
    fn test_gate_over_database_with_argon2_credential() {
        let credential = FixedCredential::from_plaintext("etumlabadmin", "california").unwrap();
        let gate = SessionGate::new(Database::open_in_memory().unwrap(), credential);

        gate.login("etumlabadmin", "california").unwrap();
        assert!(gate.check_session());
        gate.logout();
        assert!(!gate.check_session());
    }
}
