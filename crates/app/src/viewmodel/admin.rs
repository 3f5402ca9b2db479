//! Admin dashboard view model

use std::sync::Mutex;

use etumlabs_core::{
    AdminData, ApplicationAction, ApplicationStatus, ModerationAction, ModerationItem,
    ModerationStatus, ServerStats, TeamApplication,
};
use tracing::{info, warn};

use super::lock;
use super::protected::{ProtectedView, ViewOutcome};
use crate::routes::Route;
use crate::state::SiteGate;

pub struct AdminViewModel {
    view: Mutex<ProtectedView>,
    data: Mutex<AdminData>,
}

impl AdminViewModel {
    pub fn new(data: AdminData) -> Self {
        Self {
            view: Mutex::new(ProtectedView::new(Route::Admin)),
            data: Mutex::new(data),
        }
    }

    pub fn mount(&self, gate: &SiteGate) -> ViewOutcome {
        lock(&self.view).mount(gate)
    }

    pub fn outcome(&self) -> ViewOutcome {
        lock(&self.view).outcome()
    }

    pub fn stats(&self) -> ServerStats {
        lock(&self.data).stats.clone()
    }

    pub fn applications(&self) -> Vec<TeamApplication> {
        lock(&self.data).applications.clone()
    }

    pub fn moderation(&self) -> Vec<ModerationItem> {
        lock(&self.data).moderation.clone()
    }

    /// Number of applications still waiting for a decision
    pub fn pending_applications(&self) -> usize {
        lock(&self.data)
            .applications
            .iter()
            .filter(|a| a.status == ApplicationStatus::Pending)
            .count()
    }

    /// Set the status of application `id`; false when no such application
    pub fn apply_application(&self, id: u32, action: ApplicationAction) -> bool {
        let mut data = lock(&self.data);
        match data.applications.iter_mut().find(|a| a.id == id) {
            Some(application) => {
                application.status = action.resulting_status();
                info!(id, status = ?application.status, "Application updated");
                true
            }
            None => {
                warn!(id, "No such application");
                false
            }
        }
    }

    /// Set the status of moderation entry `id`; false when no such entry
    pub fn apply_moderation(&self, id: u32, action: ModerationAction) -> bool {
        let mut data = lock(&self.data);
        match data.moderation.iter_mut().find(|m| m.id == id) {
            Some(item) => {
                item.status = action.resulting_status();
                info!(id, status = ?item.status, "Moderation item updated");
                true
            }
            None => {
                warn!(id, "No such moderation item");
                false
            }
        }
    }

    pub fn open_reports(&self) -> usize {
        lock(&self.data)
            .moderation
            .iter()
            .filter(|m| m.status == ModerationStatus::Pending)
            .count()
    }

    /// End the session and leave the dashboard
    pub fn logout(&self, gate: &SiteGate) -> Route {
        gate.logout();
        lock(&self.view).reset();
        Route::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::memory_state;

    fn admin_vm() -> (crate::state::AppState, AdminViewModel) {
        let state = memory_state();
        let vm = AdminViewModel::new(state.catalog.admin.clone());
        (state, vm)
    }

    #[test]
    fn test_redirects_home_when_logged_out() {
        let (state, vm) = admin_vm();
        assert_eq!(vm.mount(&state.gate), ViewOutcome::Redirect(Route::Home));
    }

    #[test]
    fn test_application_actions() {
        let (_state, vm) = admin_vm();
        let id = vm.applications()[0].id;
        let pending = vm.pending_applications();

        assert!(vm.apply_application(id, ApplicationAction::Approve));
        assert_eq!(vm.applications()[0].status, ApplicationStatus::Approved);
        assert_eq!(vm.pending_applications(), pending - 1);

        assert!(vm.apply_application(id, ApplicationAction::Reject));
        assert_eq!(vm.applications()[0].status, ApplicationStatus::Rejected);

        assert!(!vm.apply_application(9999, ApplicationAction::Approve));
    }

    #[test]
    fn test_moderation_actions_touch_only_target() {
        let (_state, vm) = admin_vm();
        let before = vm.moderation();
        let id = before[0].id;

        assert!(vm.apply_moderation(id, ModerationAction::Escalate));
        let after = vm.moderation();
        assert_eq!(after[0].status, ModerationStatus::Escalated);
        assert_eq!(after[1..], before[1..]);
    }

    #[test]
    fn test_logout_clears_session() {
        let (state, vm) = admin_vm();
        state.gate.login("etumlabadmin", "california").unwrap();
        assert_eq!(vm.mount(&state.gate), ViewOutcome::Render);

        assert_eq!(vm.logout(&state.gate), Route::Home);
        assert!(!state.gate.check_session());
        assert_eq!(vm.outcome(), ViewOutcome::Loading);
    }
}
