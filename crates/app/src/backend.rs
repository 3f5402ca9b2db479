//! Simulated backend calls and the per-form submit guard
//!
//! The site has no server. Each call waits a configured delay and then
//! resolves locally; the [`Backend`] trait is the seam a real client would
//! slot into.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use etumlabs_core::{DelayConfig, Error, ProfileEditForm, RegistrationForm, Result};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::state::SiteGate;

#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Check credentials and start a session
    async fn login(&self, username: &str, password: &str) -> Result<()>;

    /// Submit an already validated registration
    async fn register(&self, form: &RegistrationForm) -> Result<()>;

    /// Persist an already validated profile edit
    async fn save_profile(&self, form: &ProfileEditForm) -> Result<()>;
}

pub struct SimulatedBackend {
    gate: Arc<SiteGate>,
    delays: DelayConfig,
}

impl SimulatedBackend {
    pub fn new(gate: Arc<SiteGate>, delays: DelayConfig) -> Self {
        Self { gate, delays }
    }
}

impl Backend for SimulatedBackend {
    #[instrument(skip(self, password))]
    async fn login(&self, username: &str, password: &str) -> Result<()> {
        tokio::time::sleep(self.delays.login()).await;
        self.gate.login(username, password)
    }

    #[instrument(skip_all, fields(username = %form.username))]
    async fn register(&self, form: &RegistrationForm) -> Result<()> {
        tokio::time::sleep(self.delays.register()).await;
        info!(newsletter = form.subscribe_newsletter, "Registration accepted");
        Ok(())
    }

    #[instrument(skip_all)]
    async fn save_profile(&self, form: &ProfileEditForm) -> Result<()> {
        tokio::time::sleep(self.delays.profile_save()).await;
        debug!(
            password_changed = !form.new_password.is_empty(),
            "Profile saved"
        );
        Ok(())
    }
}

/// Allows one in-flight submission per form
#[derive(Debug, Default)]
pub struct SubmitGuard {
    pending: AtomicBool,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the form; a second claim before the first is dropped fails
    pub fn begin(&self) -> Result<InFlight<'_>> {
        if self.pending.swap(true, Ordering::AcqRel) {
            debug!("Duplicate submission rejected");
            return Err(Error::SubmissionPending);
        }
        let id = Uuid::new_v4();
        debug!(submission = %id, "Submission started");
        Ok(InFlight {
            pending: &self.pending,
            id,
        })
    }

    /// True while a submission is running; views show their loading state
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

/// Releases the guard when dropped
#[derive(Debug)]
pub struct InFlight<'a> {
    pending: &'a AtomicBool,
    id: Uuid,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.pending.store(false, Ordering::Release);
        debug!(submission = %self.id, "Submission finished");
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::memory_state;

    #[test]
    fn test_guard_rejects_overlap() {
        let guard = SubmitGuard::new();
        let first = guard.begin().unwrap();
        assert!(guard.is_pending());
        assert!(matches!(guard.begin(), Err(Error::SubmissionPending)));
        drop(first);
        assert!(!guard.is_pending());
        assert!(guard.begin().is_ok());
    }

    #[test]
    fn test_each_submission_gets_an_id() {
        let guard = SubmitGuard::new();
        let a = guard.begin().unwrap().id;
        let b = guard.begin().unwrap().id;
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_simulated_login() {
        let state = memory_state();
        let backend = SimulatedBackend::new(state.gate.clone(), DelayConfig::none());

        assert!(matches!(
            backend.login("etumlabadmin", "nope").await,
            Err(Error::InvalidCredentials)
        ));
        assert!(!state.gate.check_session());

        backend.login("etumlabadmin", "california").await.unwrap();
        assert!(state.gate.check_session());
    }

    #[tokio::test]
    async fn test_simulated_register_leaves_session_alone() {
        let state = memory_state();
        let backend = SimulatedBackend::new(state.gate.clone(), DelayConfig::none());
        backend.register(&RegistrationForm::default()).await.unwrap();
        assert!(!state.gate.check_session());
    }
}
