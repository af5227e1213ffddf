//! Admin endpoints. Authorization is entirely backend-side: a non-admin
//! calling these gets a 403 and the pages fail closed.

use serde_json::json;

use super::client::{ApiClient, Transport, query_string};
use super::error::ApiError;
use super::types::{Ack, AdminDashboard, AdminUser, AuditLog, Page};
use crate::session::substrate::KeyValueStore;

impl<T, D, C> ApiClient<T, D, C>
where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    /// `GET /admin/dashboard` — system and transaction stats.
    pub async fn admin_dashboard(&self) -> Result<AdminDashboard, ApiError> {
        self.get("/admin/dashboard").await
    }

    /// `GET /admin/users` with paging and search.
    pub async fn admin_users(
        &self,
        page: u32,
        limit: u32,
        search: &str,
    ) -> Result<Page<AdminUser>, ApiError> {
        let qs = query_string(&[
            ("page", page.to_string()),
            ("limit", limit.to_string()),
            ("search", search.to_owned()),
        ]);
        self.get(&format!("/admin/users?{qs}")).await
    }

    /// `PATCH /admin/users/{id}/status` — activate or suspend a user.
    pub async fn set_user_active(&self, user_id: &str, is_active: bool) -> Result<Ack, ApiError> {
        self.patch(
            &format!("/admin/users/{user_id}/status"),
            json!({ "is_active": is_active }),
        )
        .await
    }

    /// `GET /admin/audit-logs` with paging.
    pub async fn audit_logs(&self, page: u32, limit: u32) -> Result<Page<AuditLog>, ApiError> {
        let qs = query_string(&[("page", page.to_string()), ("limit", limit.to_string())]);
        self.get(&format!("/admin/audit-logs?{qs}")).await
    }
}
