//! Wallet mirror: balance plus recent transactions.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::client::{ApiClient, Transport};
use crate::net::types::{BalanceResponse, HistoryQuery, TransactionRecord};
use crate::session::substrate::KeyValueStore;

/// How many recent transactions the dashboard shows.
const RECENT_LIMIT: u32 = 5;

#[derive(Clone, Debug)]
pub struct WalletState {
    pub balance: f64,
    pub currency: String,
    pub transactions: Vec<TransactionRecord>,
    pub loading: bool,
    pub error: Option<String>,
    seq: u64,
}

impl Default for WalletState {
    fn default() -> Self {
        Self {
            balance: 0.0,
            currency: "USD".to_owned(),
            transactions: Vec::new(),
            loading: false,
            error: None,
            seq: 0,
        }
    }
}

impl WalletState {
    /// Start a fetch; returns the sequence a later commit must present.
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        self.seq
    }

    /// Commit a fetched dashboard snapshot. Stale responses are dropped.
    pub fn apply_dashboard(
        &mut self,
        seq: u64,
        balance: &BalanceResponse,
        recent: Vec<TransactionRecord>,
    ) -> bool {
        if seq != self.seq {
            return false;
        }
        self.balance = balance.balance;
        self.currency = balance.currency.clone();
        self.transactions = recent;
        self.loading = false;
        self.error = None;
        true
    }

    /// Record a failed fetch. Previous data stays visible.
    pub fn apply_error(&mut self, seq: u64, message: String) -> bool {
        if seq != self.seq {
            return false;
        }
        self.loading = false;
        self.error = Some(message);
        true
    }
}

/// Fetch balance and recent history together and commit both at once.
pub async fn fetch_dashboard<T, D, C>(
    client: &ApiClient<T, D, C>,
    wallet: RwSignal<WalletState>,
) where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    let mut seq = 0;
    wallet.update(|w| seq = w.begin());

    let query = HistoryQuery { limit: Some(RECENT_LIMIT), ..HistoryQuery::default() };
    let (balance, history) = futures::join!(client.balance(), client.history(&query));

    match (balance, history) {
        (Ok(balance), Ok(history)) => {
            wallet.update(|w| {
                w.apply_dashboard(seq, &balance, history.records);
            });
        }
        (Err(e), _) | (_, Err(e)) => {
            leptos::logging::warn!("wallet dashboard fetch failed: {e}");
            wallet.update(|w| {
                w.apply_error(seq, e.ui_message());
            });
        }
    }
}

/// Top up, then re-fetch the dashboard snapshot.
pub async fn top_up<T, D, C>(
    client: &ApiClient<T, D, C>,
    wallet: RwSignal<WalletState>,
    amount: f64,
) where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    let mut seq = 0;
    wallet.update(|w| seq = w.begin());

    match client.top_up(amount, "USD").await {
        Ok(_) => fetch_dashboard(client, wallet).await,
        Err(e) => {
            wallet.update(|w| {
                w.apply_error(seq, e.ui_message());
            });
        }
    }
}

/// Withdraw, then re-fetch the dashboard snapshot.
pub async fn withdraw<T, D, C>(
    client: &ApiClient<T, D, C>,
    wallet: RwSignal<WalletState>,
    amount: f64,
) where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    let mut seq = 0;
    wallet.update(|w| seq = w.begin());

    match client.withdraw(amount, "USD").await {
        Ok(_) => fetch_dashboard(client, wallet).await,
        Err(e) => {
            wallet.update(|w| {
                w.apply_error(seq, e.ui_message());
            });
        }
    }
}

/// Transfer to another user, then re-fetch the dashboard snapshot.
pub async fn transfer<T, D, C>(
    client: &ApiClient<T, D, C>,
    wallet: RwSignal<WalletState>,
    to_email: &str,
    amount: f64,
    description: Option<&str>,
) -> Result<(), String>
where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    let mut seq = 0;
    wallet.update(|w| seq = w.begin());

    match client.transfer(to_email, amount, description).await {
        Ok(_) => {
            fetch_dashboard(client, wallet).await;
            Ok(())
        }
        Err(e) => {
            let message = e.ui_message();
            wallet.update(|w| {
                w.apply_error(seq, message.clone());
            });
            Err(message)
        }
    }
}
