//! Single writer for the two credential substrates.
//!
//! The repository is the only code that writes tokens anywhere. Readers
//! (the HTTP client reads durable storage, the route gate reads cookies)
//! only observe.

#[cfg(test)]
#[path = "repository_test.rs"]
mod repository_test;

use crate::net::types::{TokenPair, UserSummary};

use super::state::SessionState;
use super::substrate::{
    ACCESS_COOKIE_MAX_AGE, ACCESS_TOKEN_KEY, KeyValueStore, REFRESH_COOKIE_MAX_AGE,
    REFRESH_TOKEN_KEY, USER_KEY,
};

/// Fans session writes out to a durable store and a cookie jar.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionRepository<D, C> {
    durable: D,
    cookies: C,
}

impl<D, C> SessionRepository<D, C>
where
    D: KeyValueStore,
    C: KeyValueStore,
{
    pub fn new(durable: D, cookies: C) -> Self {
        Self { durable, cookies }
    }

    /// Rehydrate the session from durable storage at startup.
    ///
    /// `is_authenticated` is derived from what is actually present rather
    /// than trusted from a stored flag, so a half-written session heals
    /// into a consistent one. `loading` always starts false.
    pub fn load(&self) -> SessionState {
        let access_token = self.durable.get(ACCESS_TOKEN_KEY);
        let refresh_token = self.durable.get(REFRESH_TOKEN_KEY);
        let user: Option<UserSummary> = self
            .durable
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok());

        SessionState {
            is_authenticated: user.is_some() && access_token.is_some(),
            user,
            access_token,
            refresh_token,
            loading: false,
        }
    }

    /// Persist a full authenticated session: user and both tokens, to both
    /// substrates, in one operation.
    pub fn commit(&self, user: &UserSummary, tokens: &TokenPair) {
        self.store_user(user);
        self.store_tokens(tokens);
    }

    /// Persist the user snapshot only.
    pub fn store_user(&self, user: &UserSummary) {
        if let Ok(raw) = serde_json::to_string(user) {
            self.durable.set(USER_KEY, &raw, None);
        }
    }

    /// Persist both tokens: durable store for the HTTP client, cookies
    /// (30 min / 7 days) for the edge routing layer.
    pub fn store_tokens(&self, tokens: &TokenPair) {
        self.durable.set(ACCESS_TOKEN_KEY, &tokens.access_token, None);
        self.durable.set(REFRESH_TOKEN_KEY, &tokens.refresh_token, None);

        self.cookies
            .set(ACCESS_TOKEN_KEY, &tokens.access_token, Some(ACCESS_COOKIE_MAX_AGE));
        self.cookies
            .set(REFRESH_TOKEN_KEY, &tokens.refresh_token, Some(REFRESH_COOKIE_MAX_AGE));
    }

    /// Remove every trace of the session from both substrates. Idempotent.
    pub fn clear(&self) {
        self.durable.remove(ACCESS_TOKEN_KEY);
        self.durable.remove(REFRESH_TOKEN_KEY);
        self.durable.remove(USER_KEY);

        self.cookies.remove(ACCESS_TOKEN_KEY);
        self.cookies.remove(REFRESH_TOKEN_KEY);
    }
}
