//! Wallet endpoints.

use serde_json::json;

use super::client::{ApiClient, Transport};
use super::error::ApiError;
use super::types::{Ack, BalanceResponse, WalletRecord};
use crate::session::substrate::KeyValueStore;

impl<T, D, C> ApiClient<T, D, C>
where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    /// `GET /wallet/balance`.
    pub async fn balance(&self) -> Result<BalanceResponse, ApiError> {
        self.get("/wallet/balance").await
    }

    /// `GET /wallet` — the full wallet record.
    pub async fn wallet(&self) -> Result<WalletRecord, ApiError> {
        self.get("/wallet").await
    }

    /// `POST /wallet/topup`.
    pub async fn top_up(&self, amount: f64, currency: &str) -> Result<WalletRecord, ApiError> {
        self.post("/wallet/topup", json!({ "amount": amount, "currency": currency }))
            .await
    }

    /// `POST /wallet/withdraw`.
    pub async fn withdraw(&self, amount: f64, currency: &str) -> Result<WalletRecord, ApiError> {
        self.post("/wallet/withdraw", json!({ "amount": amount, "currency": currency }))
            .await
    }

    /// `POST /wallet/lock`.
    pub async fn lock_wallet(&self) -> Result<Ack, ApiError> {
        self.post_empty("/wallet/lock").await
    }

    /// `POST /wallet/unlock`.
    pub async fn unlock_wallet(&self) -> Result<Ack, ApiError> {
        self.post_empty("/wallet/unlock").await
    }
}
