//! In-memory session snapshot and its transitions.
//!
//! Invariant: `is_authenticated` is true exactly when both `user` and
//! `access_token` are present. Normal flows keep it by committing all three
//! fields at once; the narrow setters exist for the two cases where the
//! other half of the pair is already committed (profile re-fetch, token
//! refresh).

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::net::types::{TokenPair, UserSummary};

/// Snapshot of the current session, owned by the session store.
///
/// `loading` is transient UI state and is never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<UserSummary>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl SessionState {
    /// Fully authenticated state from one successful auth response.
    pub fn committed(user: UserSummary, tokens: TokenPair) -> Self {
        Self {
            user: Some(user),
            access_token: Some(tokens.access_token),
            refresh_token: Some(tokens.refresh_token),
            is_authenticated: true,
            loading: false,
        }
    }

    /// Reset to the signed-out state. `loading` is cleared too.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Replace the user snapshot wholesale.
    pub fn set_user(&mut self, user: UserSummary) {
        self.user = Some(user);
        self.is_authenticated = self.access_token.is_some();
    }

    /// Replace both tokens, e.g. after a refresh.
    pub fn set_tokens(&mut self, tokens: TokenPair) {
        self.access_token = Some(tokens.access_token);
        self.refresh_token = Some(tokens.refresh_token);
        self.is_authenticated = self.user.is_some();
    }

    /// Whether `is_authenticated` agrees with the presence of `user` and
    /// `access_token`.
    pub fn is_consistent(&self) -> bool {
        self.is_authenticated == (self.user.is_some() && self.access_token.is_some())
    }

    /// The signed-in user's role, if any.
    pub fn role(&self) -> Option<crate::net::types::Role> {
        self.user.as_ref().map(|u| u.role)
    }
}
