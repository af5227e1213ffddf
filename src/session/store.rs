//! Reactive session store: repository writes + an `RwSignal` snapshot.
//!
//! Provided once via Leptos context in `app.rs`; the HTTP client and any
//! component needing identity receive it by injection rather than through
//! a global. After any mutating call returns, both substrates and the
//! signal already observe the new values.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use leptos::prelude::{GetUntracked, RwSignal, Set, Update};

use crate::net::types::{TokenPair, UserSummary};

use super::repository::SessionRepository;
use super::state::SessionState;
use super::substrate::{CookieStore, KeyValueStore, LocalStore};

/// The store used by the running app.
pub type BrowserSession = SessionStore<LocalStore, CookieStore>;

/// Couples the substrate repository with a reactive snapshot.
///
/// `Clone`/`Copy` when the substrates are (the browser ones are zero-sized),
/// so the store can live in Leptos context.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore<D: 'static, C: 'static> {
    repo: SessionRepository<D, C>,
    state: RwSignal<SessionState>,
}

impl BrowserSession {
    /// Store over localStorage + document.cookie, rehydrated at startup.
    pub fn new() -> Self {
        Self::with_substrates(LocalStore, CookieStore)
    }
}

impl Default for BrowserSession {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, C> SessionStore<D, C>
where
    D: KeyValueStore + 'static,
    C: KeyValueStore + 'static,
{
    pub fn with_substrates(durable: D, cookies: C) -> Self {
        let repo = SessionRepository::new(durable, cookies);
        let state = RwSignal::new(repo.load());
        Self { repo, state }
    }

    /// Reactive handle for views.
    pub fn signal(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// Current snapshot without subscribing.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn access_token(&self) -> Option<String> {
        self.snapshot().access_token
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.snapshot().refresh_token
    }

    /// Commit a full authenticated session atomically: user plus both
    /// tokens, persisted to both substrates, then published to the signal.
    pub fn commit(&self, user: UserSummary, tokens: TokenPair) {
        self.repo.commit(&user, &tokens);
        self.state.set(SessionState::committed(user, tokens));
    }

    /// Replace the user snapshot (e.g. after a profile re-fetch).
    pub fn set_user(&self, user: UserSummary) {
        self.repo.store_user(&user);
        self.state.update(|s| s.set_user(user));
    }

    /// Replace both tokens (e.g. after a refresh).
    pub fn set_tokens(&self, tokens: TokenPair) {
        self.repo.store_tokens(&tokens);
        self.state.update(|s| s.set_tokens(tokens));
    }

    /// Sign out locally: clear both substrates and reset the snapshot.
    /// Idempotent.
    pub fn logout(&self) {
        self.repo.clear();
        self.state.update(SessionState::clear);
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.update(|s| s.loading = loading);
    }
}
