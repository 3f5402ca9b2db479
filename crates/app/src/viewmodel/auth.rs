//! Login view model

use std::sync::{Arc, Mutex};

use etumlabs_core::Result;
use tracing::{info, instrument};

use super::lock;
use crate::backend::{Backend, SubmitGuard};
use crate::routes::Route;

pub struct LoginViewModel<B> {
    backend: Arc<B>,
    guard: SubmitGuard,
    error: Mutex<Option<String>>,
}

impl<B: Backend> LoginViewModel<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            guard: SubmitGuard::new(),
            error: Mutex::new(None),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.guard.is_pending()
    }

    /// Inline error under the form
    pub fn error(&self) -> Option<String> {
        lock(&self.error).clone()
    }

    /// Submit the form. On success the caller navigates to the returned
    /// route; on failure the error is also kept for display.
    #[instrument(skip(self, password))]
    pub async fn submit(&self, username: &str, password: &str) -> Result<Route> {
        let _flight = self.guard.begin()?;
        *lock(&self.error) = None;

        match self.backend.login(username, password).await {
            Ok(()) => {
                info!("Login succeeded, opening dashboard");
                Ok(Route::Admin)
            }
            Err(e) => {
                *lock(&self.error) = Some(e.to_string());
                Err(e)
            }
        }
    }
}
