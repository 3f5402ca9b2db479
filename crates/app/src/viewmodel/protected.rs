//! Gate handling shared by the protected pages

use etumlabs_core::GateState;
use tracing::debug;

use crate::routes::Route;
use crate::state::SiteGate;

/// What a page should do right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewOutcome {
    /// Session not checked yet
    Loading,
    Render,
    Redirect(Route),
}

/// Tri-state gate tracker for one protected page
#[derive(Debug, Clone)]
pub struct ProtectedView {
    state: GateState,
    page: Route,
}

impl ProtectedView {
    /// Track the gate for `page`; its redirect comes from the route table
    pub fn new(page: Route) -> Self {
        Self {
            state: GateState::Unknown,
            page,
        }
    }

    pub fn outcome(&self) -> ViewOutcome {
        match self.state {
            GateState::Unknown => ViewOutcome::Loading,
            GateState::Authenticated => ViewOutcome::Render,
            GateState::Unauthenticated => ViewOutcome::Redirect(
                self.page.unauthenticated_redirect().unwrap_or(Route::Home),
            ),
        }
    }

    /// Consult the gate; called every time the page is entered
    pub fn mount(&mut self, gate: &SiteGate) -> ViewOutcome {
        self.state = gate.resolve();
        debug!(state = ?self.state, "Protected view mounted");
        self.outcome()
    }

    /// Forget the last answer, e.g. after logout
    pub fn reset(&mut self) {
        self.state = GateState::Unknown;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::memory_state;

    #[test]
    fn test_loading_until_mounted() {
        let view = ProtectedView::new(Route::Profile);
        assert_eq!(view.outcome(), ViewOutcome::Loading);
    }

    #[test]
    fn test_mount_redirects_when_logged_out() {
        let state = memory_state();
        let mut view = ProtectedView::new(Route::Profile);
        assert_eq!(view.mount(&state.gate), ViewOutcome::Redirect(Route::Login));

        let mut view = ProtectedView::new(Route::Admin);
        assert_eq!(view.mount(&state.gate), ViewOutcome::Redirect(Route::Home));
    }

    #[test]
    fn test_mount_renders_when_logged_in() {
        let state = memory_state();
        state.gate.login("etumlabadmin", "california").unwrap();
        let mut view = ProtectedView::new(Route::Admin);
        assert_eq!(view.mount(&state.gate), ViewOutcome::Render);

        view.reset();
        assert_eq!(view.outcome(), ViewOutcome::Loading);
    }
}
