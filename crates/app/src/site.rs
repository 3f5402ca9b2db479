//! Page routing and the view models behind each page

use std::sync::Arc;

use chrono::NaiveDate;
use etumlabs_core::{
    ApplicationAction, Error, ModerationAction, ProfileEditForm, RegistrationForm, Result,
};
use tracing::{info, instrument};

use crate::backend::SimulatedBackend;
use crate::routes::Route;
use crate::state::AppState;
use crate::viewmodel::{
    AdminViewModel, EventsViewModel, GalleryViewModel, LoginViewModel, NavigationViewModel,
    NewsViewModel, ProfileViewModel, RegisterViewModel, ViewOutcome,
};

/// Upper bound on chained redirects for one navigation
const MAX_REDIRECTS: usize = 4;

pub struct Site {
    state: Arc<AppState>,
    current: Route,
    nav: NavigationViewModel,
    login: LoginViewModel<SimulatedBackend>,
    register: RegisterViewModel<SimulatedBackend>,
    profile: ProfileViewModel<SimulatedBackend>,
    admin: AdminViewModel,
    events: EventsViewModel,
    gallery: GalleryViewModel,
    news: NewsViewModel,
}

impl Site {
    pub fn new(state: Arc<AppState>, today: NaiveDate) -> Self {
        let backend = Arc::new(SimulatedBackend::new(
            state.gate.clone(),
            state.config.delays,
        ));
        let catalog = state.catalog.clone();

        let mut nav = NavigationViewModel::new();
        nav.init(&state.gate, &Route::Home);

        Self {
            current: Route::Home,
            nav,
            login: LoginViewModel::new(backend.clone()),
            register: RegisterViewModel::new(backend.clone()),
            profile: ProfileViewModel::new(backend, catalog.profile.clone()),
            admin: AdminViewModel::new(catalog.admin.clone()),
            events: EventsViewModel::new(catalog.clone(), today),
            gallery: GalleryViewModel::new(catalog.clone()),
            news: NewsViewModel::new(catalog),
            state,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Parse `path` and navigate to it
    pub fn open(&mut self, path: &str) -> Result<Route> {
        let route = Route::parse(path)?;
        self.go(route)
    }

    /// Navigate, following gate redirects. Returns the page that ended up
    /// being shown.
    #[instrument(skip_all, fields(path = %route))]
    pub fn go(&mut self, route: Route) -> Result<Route> {
        let mut route = route;
        for _ in 0..MAX_REDIRECTS {
            if let Route::EventDetail(id) = &route {
                self.state.catalog.event_detail(id)?;
            }

            let outcome = match route {
                Route::Profile => self.profile.mount(&self.state.gate),
                Route::Admin => self.admin.mount(&self.state.gate),
                _ => ViewOutcome::Render,
            };

            match outcome {
                ViewOutcome::Redirect(next) => {
                    info!(from = %route, to = %next, "Redirecting");
                    route = next;
                }
                ViewOutcome::Render | ViewOutcome::Loading => {
                    self.nav.init(&self.state.gate, &route);
                    self.current = route.clone();
                    info!(page = %route, "Navigated");
                    return Ok(route);
                }
            }
        }
        Err(Error::RouteNotFound(route.path()))
    }

    /// Submit the login form and follow its redirect on success
    pub async fn login(&mut self, username: &str, password: &str) -> Result<Route> {
        let next = self.login.submit(username, password).await?;
        self.go(next)
    }

    /// Log out from wherever the visitor is and land on the home page
    pub fn logout(&mut self) -> Result<Route> {
        let next = if self.current == Route::Admin {
            self.admin.logout(&self.state.gate)
        } else {
            self.nav.logout(&self.state.gate)
        };
        self.go(next)
    }

    pub async fn register(&mut self, form: &RegistrationForm) -> Result<()> {
        self.register.submit(form).await
    }

    pub fn edit_profile(&mut self, edit: impl FnOnce(&mut ProfileEditForm)) {
        self.profile.start_editing();
        self.profile.update_form(edit);
    }

    pub fn cancel_profile_edit(&mut self) {
        self.profile.cancel_editing();
    }

    pub async fn save_profile(&mut self) -> Result<()> {
        self.profile.save().await
    }

    pub fn application_action(&mut self, id: u32, action: ApplicationAction) -> bool {
        self.admin.apply_application(id, action)
    }

    pub fn moderation_action(&mut self, id: u32, action: ModerationAction) -> bool {
        self.admin.apply_moderation(id, action)
    }

    pub fn nav(&self) -> &NavigationViewModel {
        &self.nav
    }

    pub fn nav_mut(&mut self) -> &mut NavigationViewModel {
        &mut self.nav
    }

    pub fn login_view(&self) -> &LoginViewModel<SimulatedBackend> {
        &self.login
    }

    pub fn register_view(&self) -> &RegisterViewModel<SimulatedBackend> {
        &self.register
    }

    pub fn profile_view(&self) -> &ProfileViewModel<SimulatedBackend> {
        &self.profile
    }

    pub fn admin_view(&self) -> &AdminViewModel {
        &self.admin
    }

    pub fn events(&self) -> &EventsViewModel {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventsViewModel {
        &mut self.events
    }

    pub fn gallery(&self) -> &GalleryViewModel {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut GalleryViewModel {
        &mut self.gallery
    }

    pub fn news(&self) -> &NewsViewModel {
        &self.news
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::memory_state;

    fn site() -> Site {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        Site::new(Arc::new(memory_state()), today)
    }

    #[test]
    fn test_protected_pages_redirect_when_logged_out() {
        let mut site = site();
        assert_eq!(site.open("/admin").unwrap(), Route::Home);
        assert_eq!(site.open("/profile").unwrap(), Route::Login);
        assert_eq!(site.current(), &Route::Login);
    }

    #[test]
    fn test_unknown_pages() {
        let mut site = site();
        assert!(matches!(site.open("/store"), Err(Error::RouteNotFound(_))));
        assert!(matches!(site.open("/events/2"), Err(Error::RouteNotFound(_))));
        assert_eq!(site.open("/events/1").unwrap(), Route::EventDetail("1".into()));
        assert_eq!(site.current(), &Route::EventDetail("1".into()));
    }

    #[tokio::test]
    async fn test_login_then_logout() {
        let mut site = site();
        site.open("/login").unwrap();

        assert!(site.login("etumlabadmin", "oops").await.is_err());
        assert_eq!(site.current(), &Route::Login);
        assert_eq!(site.nav().auth_links()[0].label(), "Login");

        assert_eq!(site.login("etumlabadmin", "california").await.unwrap(), Route::Admin);
        assert_eq!(site.nav().auth_links()[0].label(), "Profile");
        assert_eq!(site.open("/profile").unwrap(), Route::Profile);

        assert_eq!(site.open("/admin").unwrap(), Route::Admin);
        assert_eq!(site.logout().unwrap(), Route::Home);
        assert!(!site.state().gate.check_session());
        assert_eq!(site.open("/admin").unwrap(), Route::Home);
    }

    #[tokio::test]
    async fn test_register_does_not_log_in() {
        let mut site = site();
        let form = RegistrationForm {
            username: "Alex".to_string(),
            email: "alex@example.com".to_string(),
            minecraft_username: "AlexMC".to_string(),
            password: "redstone".to_string(),
            confirm_password: "redstone".to_string(),
            agree_to_terms: true,
            subscribe_newsletter: false,
        };
        site.register(&form).await.unwrap();
        assert!(site.register_view().is_success());
        assert_eq!(site.open("/profile").unwrap(), Route::Login);
    }
}
