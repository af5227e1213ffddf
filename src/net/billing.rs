//! Billing endpoints: invoices and aggregate stats.

use super::client::{ApiClient, Transport};
use super::error::ApiError;
use super::types::{Ack, BillingStats, Invoice};
use crate::session::substrate::KeyValueStore;

impl<T, D, C> ApiClient<T, D, C>
where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    /// `GET /billing/invoices`.
    pub async fn invoices(&self) -> Result<Vec<Invoice>, ApiError> {
        self.get("/billing/invoices").await
    }

    /// `GET /billing/invoices/{id}`.
    pub async fn invoice(&self, id: &str) -> Result<Invoice, ApiError> {
        self.get(&format!("/billing/invoices/{id}")).await
    }

    /// `POST /billing/invoices/{id}/pay`.
    pub async fn pay_invoice(&self, id: &str) -> Result<Ack, ApiError> {
        self.post_empty(&format!("/billing/invoices/{id}/pay")).await
    }

    /// `PUT /billing/invoices/{id}/cancel`.
    pub async fn cancel_invoice(&self, id: &str) -> Result<Ack, ApiError> {
        self.put_empty(&format!("/billing/invoices/{id}/cancel")).await
    }

    /// `GET /billing/stats`.
    pub async fn billing_stats(&self) -> Result<BillingStats, ApiError> {
        self.get("/billing/stats").await
    }
}
