//! Browser Session
//!
//! Bearer token persistence in localStorage and hard navigation.

use crate::config::TOKEN_STORAGE_KEY;
use crate::error::ApiError;

fn storage() -> Result<web_sys::Storage, ApiError> {
    web_sys::window()
        .ok_or_else(|| ApiError::Browser("no window".into()))?
        .local_storage()
        .map_err(|e| ApiError::Browser(format!("{:?}", e)))?
        .ok_or_else(|| ApiError::Browser("localStorage disabled".into()))
}

/// Stored token, if any
pub fn token() -> Option<String> {
    storage()
        .ok()?
        .get_item(TOKEN_STORAGE_KEY)
        .ok()
        .flatten()
        .filter(|t| !t.is_empty())
}

pub fn has_token() -> bool {
    token().is_some()
}

pub fn store_token(token: &str) -> Result<(), ApiError> {
    storage()?
        .set_item(TOKEN_STORAGE_KEY, token)
        .map_err(|e| ApiError::Browser(format!("{:?}", e)))
}

pub fn clear_token() {
    if let Ok(storage) = storage() {
        if let Err(e) = storage.remove_item(TOKEN_STORAGE_KEY) {
            log::warn!("failed to clear token: {:?}", e);
        }
    }
}

/// Full page load of `/login`
pub fn redirect_to_login() {
    hard_redirect("/login");
}

pub fn hard_redirect(path: &str) {
    let Some(window) = web_sys::window() else { return };
    if let Err(e) = window.location().set_href(path) {
        log::error!("redirect to {} failed: {:?}", path, e);
    }
}
