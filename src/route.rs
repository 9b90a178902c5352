//! Page Routing
//!
//! Maps the browser location to a page and back. Navigation uses the
//! History API so the page is not reloaded.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Login,
    ResetPassword { token: String },
    Dashboard,
    Projects,
    ProjectDetail(i64),
    NotFound(String),
}

impl Route {
    /// Parse a pathname plus `?query` string
    pub fn parse(path: &str, search: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] | ["dashboard"] => Route::Dashboard,
            ["login"] => Route::Login,
            ["reset-password"] => Route::ResetPassword {
                token: query_param(search, "token").unwrap_or_default(),
            },
            ["projects"] => Route::Projects,
            ["projects", id] => match id.parse() {
                Ok(id) => Route::ProjectDetail(id),
                Err(_) => Route::NotFound(path.to_string()),
            },
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::ResetPassword { token } => {
                format!("/reset-password?token={}", utf8_percent_encode(token, NON_ALPHANUMERIC))
            }
            Route::Dashboard => "/dashboard".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::ProjectDetail(id) => format!("/projects/{}", id),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Pages reachable without a session
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::ResetPassword { .. })
    }
}

fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| percent_decode_str(&v.replace('+', " ")).decode_utf8_lossy().into_owned())
}

/// Route for the current window location
pub fn current() -> Route {
    let Some(window) = web_sys::window() else {
        return Route::Dashboard;
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    Route::parse(&path, &search)
}

/// Push a history entry for `route`
pub fn push(route: &Route) {
    let Some(window) = web_sys::window() else { return };
    match window.history() {
        Ok(history) => {
            if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&route.path())) {
                log::warn!("pushState failed: {:?}", e);
            }
        }
        Err(e) => log::warn!("history unavailable: {:?}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/", ""), Route::Dashboard);
        assert_eq!(Route::parse("/dashboard", ""), Route::Dashboard);
        assert_eq!(Route::parse("/login", ""), Route::Login);
        assert_eq!(Route::parse("/projects/", ""), Route::Projects);
        assert_eq!(Route::parse("/projects/42", ""), Route::ProjectDetail(42));
    }

    #[test]
    fn test_bad_project_id_is_not_found() {
        assert_eq!(Route::parse("/projects/abc", ""), Route::NotFound("/projects/abc".into()));
        assert_eq!(Route::parse("/settings", ""), Route::NotFound("/settings".into()));
    }

    #[test]
    fn test_reset_token_is_decoded() {
        assert_eq!(
            Route::parse("/reset-password", "?token=a%2Bb&x=1"),
            Route::ResetPassword { token: "a+b".into() }
        );
        assert_eq!(Route::parse("/reset-password", ""), Route::ResetPassword { token: String::new() });
    }

    #[test]
    fn test_path_round_trips_for_pages() {
        for route in [Route::Login, Route::Dashboard, Route::Projects, Route::ProjectDetail(7)] {
            assert_eq!(Route::parse(&route.path(), ""), route);
        }
        assert!(Route::Login.is_public());
    }

    #[test]
    fn test_reset_token_survives_path_and_parse() {
        let route = Route::ResetPassword { token: "a+b&c%d=e f".into() };
        let path = route.path();
        let (pathname, search) = path.split_once('?').unwrap();
        assert_eq!(Route::parse(pathname, search), route);
        assert!(!Route::Projects.is_public());
    }
}
