//! Billing mirror: invoices plus aggregate stats.

use leptos::prelude::{RwSignal, Update};

use crate::net::client::{ApiClient, Transport};
use crate::net::types::{BillingStats, Invoice};
use crate::session::substrate::KeyValueStore;

#[derive(Clone, Debug, Default)]
pub struct BillingState {
    pub invoices: Vec<Invoice>,
    pub stats: Option<BillingStats>,
    pub loading: bool,
    pub error: Option<String>,
    /// Invoice id with a pay or cancel request in flight, if any.
    pub busy_invoice: Option<String>,
    seq: u64,
}

impl BillingState {
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        self.seq
    }

    pub fn apply_billing(
        &mut self,
        seq: u64,
        invoices: Vec<Invoice>,
        stats: BillingStats,
    ) -> bool {
        if seq != self.seq {
            return false;
        }
        self.invoices = invoices;
        self.stats = Some(stats);
        self.loading = false;
        true
    }

    pub fn apply_error(&mut self, seq: u64, message: String) -> bool {
        if seq != self.seq {
            return false;
        }
        self.loading = false;
        self.busy_invoice = None;
        self.error = Some(message);
        true
    }
}

pub async fn fetch_billing<T, D, C>(client: &ApiClient<T, D, C>, state: RwSignal<BillingState>)
where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    let mut seq = 0;
    state.update(|s| seq = s.begin());

    let (invoices, stats) = futures::join!(client.invoices(), client.billing_stats());

    match (invoices, stats) {
        (Ok(invoices), Ok(stats)) => {
            state.update(|s| {
                s.apply_billing(seq, invoices, stats);
            });
        }
        (Err(e), _) | (_, Err(e)) => {
            leptos::logging::warn!("billing fetch failed: {e}");
            state.update(|s| {
                s.apply_error(seq, e.ui_message());
            });
        }
    }
}

/// Pay an invoice from the wallet, then re-fetch invoices and stats.
pub async fn pay_invoice<T, D, C>(
    client: &ApiClient<T, D, C>,
    state: RwSignal<BillingState>,
    invoice_id: &str,
) where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    state.update(|s| s.busy_invoice = Some(invoice_id.to_owned()));

    match client.pay_invoice(invoice_id).await {
        Ok(_) => {
            state.update(|s| s.busy_invoice = None);
            fetch_billing(client, state).await;
        }
        Err(e) => {
            state.update(|s| {
                s.busy_invoice = None;
                s.error = Some(e.ui_message());
            });
        }
    }
}

/// Cancel a pending invoice, then re-fetch invoices and stats.
pub async fn cancel_invoice<T, D, C>(
    client: &ApiClient<T, D, C>,
    state: RwSignal<BillingState>,
    invoice_id: &str,
) where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    state.update(|s| s.busy_invoice = Some(invoice_id.to_owned()));

    match client.cancel_invoice(invoice_id).await {
        Ok(_) => {
            state.update(|s| s.busy_invoice = None);
            fetch_billing(client, state).await;
        }
        Err(e) => {
            state.update(|s| {
                s.busy_invoice = None;
                s.error = Some(e.ui_message());
            });
        }
    }
}
