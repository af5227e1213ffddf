//! Authentication endpoints.
//!
//! Every response that completes a sign-in shares the [`AuthResponse`]
//! shape. Committing the session is left to the caller so 2FA-pending
//! responses are never half-committed.

use serde_json::json;

use super::client::{ApiClient, Transport};
use super::error::ApiError;
use super::types::{Ack, AuthResponse, RegistrationForm, TokenPair, UserSummary};
use crate::session::substrate::KeyValueStore;

impl<T, D, C> ApiClient<T, D, C>
where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    /// `POST /auth/login` with email and password.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.post("/auth/login", json!({ "email": email, "password": password }))
            .await
    }

    /// `POST /auth/register` with the full wizard payload.
    pub async fn register(&self, form: &RegistrationForm) -> Result<AuthResponse, ApiError> {
        let body = serde_json::to_value(form).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.post("/auth/register", body).await
    }

    /// `POST /auth/google` with the provider token.
    pub async fn google_auth(&self, token: &str) -> Result<AuthResponse, ApiError> {
        self.post("/auth/google", json!({ "token": token })).await
    }

    /// `POST /auth/verify-2fa` with the emailed/app code.
    pub async fn verify_2fa(&self, email: &str, code: &str) -> Result<AuthResponse, ApiError> {
        self.post("/auth/verify-2fa", json!({ "email": email, "code": code }))
            .await
    }

    /// `GET /auth/me` — the current user snapshot.
    pub async fn me(&self) -> Result<UserSummary, ApiError> {
        self.get("/auth/me").await
    }

    /// `POST /auth/logout` — revoke the refresh token server-side.
    ///
    /// Local logout is the session store's job; callers clear it whether or
    /// not this call succeeds.
    pub async fn logout_remote(&self) -> Result<Ack, ApiError> {
        let body = match self.session().refresh_token() {
            Some(token) => json!({ "refresh_token": token }),
            None => json!({}),
        };
        self.post("/auth/logout", body).await
    }

    /// `POST /auth/refresh` — explicit exchange, outside the automatic
    /// 401 path.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ApiError> {
        self.post("/auth/refresh", json!({ "refresh_token": refresh_token }))
            .await
    }

    /// `POST /auth/forgot-password`.
    pub async fn forgot_password(&self, email: &str) -> Result<Ack, ApiError> {
        self.post("/auth/forgot-password", json!({ "email": email }))
            .await
    }

    /// `POST /auth/reset-password?token=…`.
    pub async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<Ack, ApiError> {
        let query = super::client::query_string(&[("token", token.to_owned())]);
        self.post(
            &format!("/auth/reset-password?{query}"),
            json!({ "new_password": new_password, "confirm_password": confirm_password }),
        )
        .await
    }
}
