//! Payment method endpoints.

use super::client::{ApiClient, Transport};
use super::error::ApiError;
use super::types::{Ack, NewPaymentMethod, PaymentMethod};
use crate::session::substrate::KeyValueStore;

impl<T, D, C> ApiClient<T, D, C>
where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    /// `GET /payment-methods`.
    pub async fn payment_methods(&self) -> Result<Vec<PaymentMethod>, ApiError> {
        self.get("/payment-methods").await
    }

    /// `POST /payment-methods`.
    pub async fn add_payment_method(
        &self,
        method: &NewPaymentMethod,
    ) -> Result<PaymentMethod, ApiError> {
        let body = serde_json::to_value(method).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.post("/payment-methods", body).await
    }

    /// `DELETE /payment-methods/{id}`.
    pub async fn remove_payment_method(&self, id: &str) -> Result<Ack, ApiError> {
        self.delete(&format!("/payment-methods/{id}")).await
    }

    /// `PATCH /payment-methods/{id}/default`.
    pub async fn set_default_payment_method(&self, id: &str) -> Result<Ack, ApiError> {
        self.patch_empty(&format!("/payment-methods/{id}/default")).await
    }
}
