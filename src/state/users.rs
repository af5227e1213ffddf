//! Recipient search mirror for the send-money page.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::client::{ApiClient, Transport};
use crate::net::types::PublicUser;
use crate::session::substrate::KeyValueStore;

#[derive(Clone, Debug, Default)]
pub struct UserSearchState {
    pub query: String,
    pub results: Vec<PublicUser>,
    pub searching: bool,
    pub error: Option<String>,
    seq: u64,
}

impl UserSearchState {
    pub fn begin(&mut self, query: &str) -> u64 {
        self.seq += 1;
        self.query = query.to_owned();
        self.searching = true;
        self.error = None;
        self.seq
    }

    pub fn apply_results(&mut self, seq: u64, results: Vec<PublicUser>) -> bool {
        if seq != self.seq {
            return false;
        }
        self.results = results;
        self.searching = false;
        true
    }

    pub fn apply_error(&mut self, seq: u64, message: String) -> bool {
        if seq != self.seq {
            return false;
        }
        self.searching = false;
        self.error = Some(message);
        true
    }

    /// Blank queries clear the panel without touching the network.
    pub fn clear(&mut self) {
        self.seq += 1;
        self.query.clear();
        self.results.clear();
        self.searching = false;
        self.error = None;
    }
}

/// Run one search round trip against the settled query text.
pub async fn search<T, D, C>(
    client: &ApiClient<T, D, C>,
    state: RwSignal<UserSearchState>,
    query: &str,
) where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    if query.trim().is_empty() {
        state.update(UserSearchState::clear);
        return;
    }

    let mut seq = 0;
    state.update(|s| seq = s.begin(query));

    match client.search_users(query).await {
        Ok(page) => {
            state.update(|s| {
                s.apply_results(seq, page.records);
            });
        }
        Err(e) => {
            leptos::logging::warn!("user search failed: {e}");
            state.update(|s| {
                s.apply_error(seq, e.ui_message());
            });
        }
    }
}
