//! User profile and directory endpoints.

use super::client::{ApiClient, Transport, query_string};
use super::error::ApiError;
use super::types::{Page, ProfileUpdate, PublicUser, UserSummary};
use crate::session::substrate::KeyValueStore;

impl<T, D, C> ApiClient<T, D, C>
where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    /// `GET /users/search?query=…` — find recipients for a transfer.
    pub async fn search_users(&self, query: &str) -> Result<Page<PublicUser>, ApiError> {
        let qs = query_string(&[("query", query.to_owned())]);
        self.get(&format!("/users/search?{qs}")).await
    }

    /// `GET /users/me`.
    pub async fn profile(&self) -> Result<UserSummary, ApiError> {
        self.get("/users/me").await
    }

    /// `PUT /users/me` — returns the updated snapshot.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserSummary, ApiError> {
        let body = serde_json::to_value(update).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.put("/users/me", body).await
    }
}
