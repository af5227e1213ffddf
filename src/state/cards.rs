//! Payment method mirror.

use leptos::prelude::{RwSignal, Update};

use crate::net::client::{ApiClient, Transport};
use crate::net::types::{NewPaymentMethod, PaymentMethod};
use crate::session::substrate::KeyValueStore;

#[derive(Clone, Debug, Default)]
pub struct CardsState {
    pub methods: Vec<PaymentMethod>,
    pub loading: bool,
    pub error: Option<String>,
    /// Method id with a mutation in flight, if any.
    pub busy_method: Option<String>,
    seq: u64,
}

impl CardsState {
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        self.seq
    }

    pub fn apply_methods(&mut self, seq: u64, methods: Vec<PaymentMethod>) -> bool {
        if seq != self.seq {
            return false;
        }
        self.methods = methods;
        self.loading = false;
        true
    }

    pub fn apply_error(&mut self, seq: u64, message: String) -> bool {
        if seq != self.seq {
            return false;
        }
        self.loading = false;
        self.busy_method = None;
        self.error = Some(message);
        true
    }
}

pub async fn fetch_methods<T, D, C>(client: &ApiClient<T, D, C>, state: RwSignal<CardsState>)
where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    let mut seq = 0;
    state.update(|s| seq = s.begin());

    match client.payment_methods().await {
        Ok(methods) => {
            state.update(|s| {
                s.apply_methods(seq, methods);
            });
        }
        Err(e) => {
            leptos::logging::warn!("payment method fetch failed: {e}");
            state.update(|s| {
                s.apply_error(seq, e.ui_message());
            });
        }
    }
}

pub async fn add_method<T, D, C>(
    client: &ApiClient<T, D, C>,
    state: RwSignal<CardsState>,
    method: &NewPaymentMethod,
) where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    match client.add_payment_method(method).await {
        Ok(_) => fetch_methods(client, state).await,
        Err(e) => {
            state.update(|s| s.error = Some(e.ui_message()));
        }
    }
}

pub async fn remove_method<T, D, C>(
    client: &ApiClient<T, D, C>,
    state: RwSignal<CardsState>,
    method_id: &str,
) where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    state.update(|s| s.busy_method = Some(method_id.to_owned()));

    match client.remove_payment_method(method_id).await {
        Ok(_) => {
            state.update(|s| s.busy_method = None);
            fetch_methods(client, state).await;
        }
        Err(e) => {
            state.update(|s| {
                s.busy_method = None;
                s.error = Some(e.ui_message());
            });
        }
    }
}

pub async fn set_default<T, D, C>(
    client: &ApiClient<T, D, C>,
    state: RwSignal<CardsState>,
    method_id: &str,
) where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    state.update(|s| s.busy_method = Some(method_id.to_owned()));

    match client.set_default_payment_method(method_id).await {
        Ok(_) => {
            state.update(|s| s.busy_method = None);
            fetch_methods(client, state).await;
        }
        Err(e) => {
            state.update(|s| {
                s.busy_method = None;
                s.error = Some(e.ui_message());
            });
        }
    }
}
