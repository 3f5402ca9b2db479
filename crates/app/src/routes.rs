//! Site routes

use std::fmt;

use etumlabs_core::{Error, Result};

/// Links shown in the navigation bar, in display order
pub const NAV_ITEMS: [(&str, &str); 6] = [
    ("Home", "/"),
    ("Events", "/events"),
    ("Gallery", "/gallery"),
    ("News", "/news"),
    ("About", "/about"),
    ("Contact", "/contact"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Contact,
    Events,
    EventDetail(String),
    Gallery,
    News,
    Login,
    Register,
    Profile,
    Admin,
}

impl Route {
    /// Parse a path; a trailing slash is ignored
    pub fn parse(path: &str) -> Result<Self> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            p => p,
        };

        let route = match normalized {
            "/" => Route::Home,
            "/about" => Route::About,
            "/contact" => Route::Contact,
            "/events" => Route::Events,
            "/gallery" => Route::Gallery,
            "/news" => Route::News,
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/profile" => Route::Profile,
            "/admin" => Route::Admin,
            other => match other.strip_prefix("/events/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Route::EventDetail(id.to_string())
                }
                _ => return Err(Error::RouteNotFound(trimmed.to_string())),
            },
        };
        Ok(route)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Events => "/events".to_string(),
            Route::EventDetail(id) => format!("/events/{}", id),
            Route::Gallery => "/gallery".to_string(),
            Route::News => "/news".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Admin => "/admin".to_string(),
        }
    }

    /// Where a logged-out visitor is sent instead. Only the profile and
    /// the admin dashboard sit behind the session gate.
    pub fn unauthenticated_redirect(&self) -> Option<Route> {
        match self {
            Route::Profile => Some(Route::Login),
            Route::Admin => Some(Route::Home),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/").unwrap(), Route::Home);
        assert_eq!(Route::parse("/events/").unwrap(), Route::Events);
        assert_eq!(
            Route::parse("/events/1").unwrap(),
            Route::EventDetail("1".to_string())
        );
        assert_eq!(Route::parse(" /admin ").unwrap(), Route::Admin);
    }

    #[test]
    fn test_unknown_route() {
        assert!(matches!(
            Route::parse("/shop"),
            Err(Error::RouteNotFound(p)) if p == "/shop"
        ));
        assert!(Route::parse("/events/1/edit").is_err());
    }

    #[test]
    fn test_protected_redirects() {
        assert_eq!(Route::Profile.unauthenticated_redirect(), Some(Route::Login));
        assert_eq!(Route::Admin.unauthenticated_redirect(), Some(Route::Home));
        assert_eq!(Route::Events.unauthenticated_redirect(), None);
        for (_, path) in NAV_ITEMS {
            assert_eq!(Route::parse(path).unwrap().unauthenticated_redirect(), None);
        }
    }

    #[test]
    fn test_path_round_trip() {
        let route = Route::EventDetail("7".to_string());
        assert_eq!(Route::parse(&route.path()).unwrap(), route);
        assert_eq!(Route::Register.to_string(), "/register");
    }
}
