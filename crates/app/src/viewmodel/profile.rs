//! Profile view model

use std::sync::{Arc, Mutex};

use etumlabs_core::{ProfileEditForm, Result, UserProfile};
use tracing::{info, instrument};

use super::lock;
use super::protected::{ProtectedView, ViewOutcome};
use crate::backend::{Backend, SubmitGuard};
use crate::routes::Route;
use crate::state::SiteGate;

pub const PROFILE_SAVED: &str = "Profile updated successfully!";

#[derive(Debug)]
struct ProfileState {
    profile: UserProfile,
    editing: bool,
    form: ProfileEditForm,
    message: Option<String>,
}

impl ProfileState {
    fn reset_form(&mut self) {
        self.form = ProfileEditForm {
            email: self.profile.email.clone(),
            minecraft_username: self.profile.minecraft_username.clone(),
            ..Default::default()
        };
    }
}

pub struct ProfileViewModel<B> {
    backend: Arc<B>,
    guard: SubmitGuard,
    view: Mutex<ProtectedView>,
    state: Mutex<ProfileState>,
}

impl<B: Backend> ProfileViewModel<B> {
    pub fn new(backend: Arc<B>, profile: UserProfile) -> Self {
        let mut state = ProfileState {
            profile,
            editing: false,
            form: ProfileEditForm::default(),
            message: None,
        };
        state.reset_form();
        Self {
            backend,
            guard: SubmitGuard::new(),
            view: Mutex::new(ProtectedView::new(Route::Profile)),
            state: Mutex::new(state),
        }
    }

    pub fn mount(&self, gate: &SiteGate) -> ViewOutcome {
        lock(&self.view).mount(gate)
    }

    pub fn outcome(&self) -> ViewOutcome {
        lock(&self.view).outcome()
    }

    pub fn profile(&self) -> UserProfile {
        lock(&self.state).profile.clone()
    }

    pub fn form(&self) -> ProfileEditForm {
        lock(&self.state).form.clone()
    }

    pub fn is_editing(&self) -> bool {
        lock(&self.state).editing
    }

    pub fn is_saving(&self) -> bool {
        self.guard.is_pending()
    }

    /// Status line shown above the settings form
    pub fn message(&self) -> Option<String> {
        lock(&self.state).message.clone()
    }

    pub fn start_editing(&self) {
        lock(&self.state).editing = true;
    }

    /// Leave edit mode and throw the typed values away
    pub fn cancel_editing(&self) {
        let mut state = lock(&self.state);
        state.editing = false;
        state.message = None;
        state.reset_form();
    }

    pub fn update_form(&self, edit: impl FnOnce(&mut ProfileEditForm)) {
        edit(&mut lock(&self.state).form);
    }

    /// Validate the password fields, wait for the backend, then apply the
    /// new email and Minecraft username
    #[instrument(skip(self))]
    pub async fn save(&self) -> Result<()> {
        let _flight = self.guard.begin()?;

        let form = {
            let mut state = lock(&self.state);
            state.message = None;
            if let Err(e) = state.form.validate() {
                state.message = Some(e.to_string());
                return Err(e.into());
            }
            state.form.clone()
        };

        if let Err(e) = self.backend.save_profile(&form).await {
            lock(&self.state).message = Some(e.to_string());
            return Err(e);
        }

        let mut state = lock(&self.state);
        state.profile.email = form.email;
        state.profile.minecraft_username = form.minecraft_username;
        state.editing = false;
        state.form.clear_passwords();
        state.message = Some(PROFILE_SAVED.to_string());
        info!("Profile updated");
        Ok(())
    }
}
