//! Auth Service
//!
//! Signup, login and password recovery against `/auth/*`.

use serde::de::IgnoredAny;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{
    AuthResponse, ForgotPasswordRequest, LoginRequest, ResetPasswordRequest, SignupRequest, User,
};
use crate::session;

pub async fn signup(request: &SignupRequest) -> Result<(), ApiError> {
    ApiClient::new()
        .post::<_, IgnoredAny>("/auth/signup", request)
        .await
        .map(|_| ())
}

/// Log in and persist the returned token
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    let auth: AuthResponse = ApiClient::new().post("/auth/login", request).await?;
    session::store_token(&auth.token)?;
    log::info!("logged in");
    Ok(auth)
}

pub async fn current_user() -> Result<User, ApiError> {
    ApiClient::new().get("/auth/me").await
}

pub async fn forgot_password(request: &ForgotPasswordRequest) -> Result<(), ApiError> {
    ApiClient::new()
        .post::<_, IgnoredAny>("/auth/forgot", request)
        .await
        .map(|_| ())
}

pub async fn reset_password(request: &ResetPasswordRequest) -> Result<(), ApiError> {
    ApiClient::new()
        .post::<_, IgnoredAny>("/auth/reset", request)
        .await
        .map(|_| ())
}

/// Drop the local session; the backend keeps no server-side state
pub fn logout() {
    session::clear_token();
    log::info!("logged out");
}
