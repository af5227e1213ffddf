//! Notification endpoints.

use super::client::{ApiClient, Transport};
use super::error::ApiError;
use super::types::{Ack, Notification, UnreadCount};
use crate::session::substrate::KeyValueStore;

impl<T, D, C> ApiClient<T, D, C>
where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    /// `GET /notifications`.
    pub async fn notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.get("/notifications").await
    }

    /// `PUT /notifications/{id}/read`.
    pub async fn mark_notification_read(&self, id: &str) -> Result<Ack, ApiError> {
        self.put_empty(&format!("/notifications/{id}/read")).await
    }

    /// `GET /notifications/unread-count`.
    pub async fn unread_count(&self) -> Result<UnreadCount, ApiError> {
        self.get("/notifications/unread-count").await
    }
}
