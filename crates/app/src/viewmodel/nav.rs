//! Navigation bar view model

use tracing::info;

use crate::routes::{Route, NAV_ITEMS};
use crate::state::SiteGate;

/// Right-hand side of the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthLink {
    Profile,
    Logout,
    Login,
    Register,
}

impl AuthLink {
    pub fn label(&self) -> &'static str {
        match self {
            AuthLink::Profile => "Profile",
            AuthLink::Logout => "Logout",
            AuthLink::Login => "Login",
            AuthLink::Register => "Register",
        }
    }
}

#[derive(Debug, Default)]
pub struct NavigationViewModel {
    authenticated: bool,
    current_path: String,
    menu_open: bool,
}

impl NavigationViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-read the session; runs on every page change
    pub fn init(&mut self, gate: &SiteGate, current: &Route) {
        self.authenticated = gate.check_session();
        self.current_path = current.path();
        self.menu_open = false;
    }

    pub fn is_active(&self, path: &str) -> bool {
        self.current_path == path
    }

    pub fn items(&self) -> &'static [(&'static str, &'static str)] {
        &NAV_ITEMS
    }

    pub fn auth_links(&self) -> [AuthLink; 2] {
        if self.authenticated {
            [AuthLink::Profile, AuthLink::Logout]
        } else {
            [AuthLink::Login, AuthLink::Register]
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Clear the session and return to the home page
    pub fn logout(&mut self, gate: &SiteGate) -> Route {
        gate.logout();
        self.authenticated = false;
        info!("Logged out from navigation");
        Route::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::memory_state;

    #[test]
    fn test_logged_out_links() {
        let state = memory_state();
        let mut nav = NavigationViewModel::new();
        nav.init(&state.gate, &Route::Events);
        assert_eq!(nav.auth_links(), [AuthLink::Login, AuthLink::Register]);
        assert!(nav.is_active("/events"));
        assert!(!nav.is_active("/"));
    }

    #[test]
    fn test_logged_in_links_and_logout() {
        let state = memory_state();
        state.gate.login("etumlabadmin", "california").unwrap();

        let mut nav = NavigationViewModel::new();
        nav.init(&state.gate, &Route::Home);
        assert_eq!(nav.auth_links(), [AuthLink::Profile, AuthLink::Logout]);

        assert_eq!(nav.logout(&state.gate), Route::Home);
        assert_eq!(nav.auth_links(), [AuthLink::Login, AuthLink::Register]);
        assert!(!state.gate.check_session());

        // A second logout is harmless
        nav.logout(&state.gate);
        assert!(!state.gate.check_session());
    }

    #[test]
    fn test_menu_closes_on_page_change() {
        let state = memory_state();
        let mut nav = NavigationViewModel::new();
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        nav.init(&state.gate, &Route::News);
        assert!(!nav.is_menu_open());
        assert_eq!(nav.items().len(), 6);
    }
}
