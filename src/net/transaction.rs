//! Transaction endpoints: history, details, transfer, payment.

use serde_json::json;

use super::client::{ApiClient, Transport, query_string};
use super::error::ApiError;
use super::types::{HistoryQuery, Page, TransactionRecord};
use crate::session::substrate::KeyValueStore;

impl<T, D, C> ApiClient<T, D, C>
where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    /// `GET /transaction/history` with optional paging and filters.
    pub async fn history(
        &self,
        query: &HistoryQuery,
    ) -> Result<Page<TransactionRecord>, ApiError> {
        let qs = query_string(&[
            ("page", query.page.map(|p| p.to_string()).unwrap_or_default()),
            ("limit", query.limit.map(|l| l.to_string()).unwrap_or_default()),
            ("type", query.kind.clone().unwrap_or_default()),
            ("status", query.status.clone().unwrap_or_default()),
        ]);
        let path = if qs.is_empty() {
            "/transaction/history".to_owned()
        } else {
            format!("/transaction/history?{qs}")
        };
        self.get(&path).await
    }

    /// `GET /transaction/{id}`.
    pub async fn transaction(&self, id: &str) -> Result<TransactionRecord, ApiError> {
        self.get(&format!("/transaction/{id}")).await
    }

    /// `POST /transaction/transfer` — send money to another user by email.
    pub async fn transfer(
        &self,
        to_email: &str,
        amount: f64,
        description: Option<&str>,
    ) -> Result<TransactionRecord, ApiError> {
        self.post(
            "/transaction/transfer",
            json!({ "to_email": to_email, "amount": amount, "description": description }),
        )
        .await
    }

    /// `POST /transaction/payment` — pay a merchant.
    pub async fn payment(
        &self,
        merchant_id: &str,
        amount: f64,
        description: Option<&str>,
    ) -> Result<TransactionRecord, ApiError> {
        self.post(
            "/transaction/payment",
            json!({ "merchant_id": merchant_id, "amount": amount, "description": description }),
        )
        .await
    }
}
