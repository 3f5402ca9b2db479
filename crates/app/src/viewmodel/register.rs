//! Registration view model

use std::sync::{Arc, Mutex};

use etumlabs_core::{RegistrationForm, Result};
use tracing::{info, instrument, warn};

use super::lock;
use crate::backend::{Backend, SubmitGuard};

#[derive(Debug, Default)]
struct RegisterState {
    error: Option<String>,
    success: bool,
}

pub struct RegisterViewModel<B> {
    backend: Arc<B>,
    guard: SubmitGuard,
    state: Mutex<RegisterState>,
}

impl<B: Backend> RegisterViewModel<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            guard: SubmitGuard::new(),
            state: Mutex::new(RegisterState::default()),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.guard.is_pending()
    }

    pub fn error(&self) -> Option<String> {
        lock(&self.state).error.clone()
    }

    /// True once a registration went through; the page shows its
    /// confirmation instead of the form
    pub fn is_success(&self) -> bool {
        lock(&self.state).success
    }

    /// Validate, then submit. A validation failure returns at once without
    /// touching the backend. Registering never logs the visitor in.
    #[instrument(skip_all, fields(username = %form.username))]
    pub async fn submit(&self, form: &RegistrationForm) -> Result<()> {
        let _flight = self.guard.begin()?;
        lock(&self.state).error = None;

        if let Err(e) = form.validate() {
            warn!(reason = %e, "Registration form rejected");
            lock(&self.state).error = Some(e.to_string());
            return Err(e.into());
        }

        if let Err(e) = self.backend.register(form).await {
            lock(&self.state).error = Some(e.to_string());
            return Err(e);
        }

        lock(&self.state).success = true;
        info!("Registration complete");
        Ok(())
    }
}
