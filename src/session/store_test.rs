use super::*;
use crate::net::types::Role;
use crate::session::substrate::{
    ACCESS_TOKEN_KEY, MemoryStore, REFRESH_TOKEN_KEY, USER_KEY,
};

fn user() -> UserSummary {
    UserSummary {
        id: "u-1".to_owned(),
        email: "ada@example.com".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        role: Role::User,
        is_2fa_enabled: false,
    }
}

fn tokens() -> TokenPair {
    TokenPair {
        access_token: "acc-1".to_owned(),
        refresh_token: "ref-1".to_owned(),
    }
}

fn store() -> (SessionStore<MemoryStore, MemoryStore>, MemoryStore, MemoryStore) {
    let durable = MemoryStore::new();
    let cookies = MemoryStore::new();
    let store = SessionStore::with_substrates(durable.clone(), cookies.clone());
    (store, durable, cookies)
}

#[test]
fn commit_is_observable_from_snapshot_and_substrates() {
    let (store, durable, cookies) = store();
    store.commit(user(), tokens());

    let snap = store.snapshot();
    assert!(snap.is_authenticated);
    assert!(snap.is_consistent());
    assert_eq!(store.access_token().as_deref(), Some("acc-1"));
    assert_eq!(durable.get(ACCESS_TOKEN_KEY).as_deref(), Some("acc-1"));
    assert_eq!(cookies.get(ACCESS_TOKEN_KEY).as_deref(), Some("acc-1"));
}

#[test]
fn invariant_holds_for_commit_and_logout_sequences() {
    let (store, _durable, _cookies) = store();

    store.commit(user(), tokens());
    assert!(store.snapshot().is_consistent());

    store.logout();
    assert!(store.snapshot().is_consistent());

    store.commit(user(), tokens());
    store.set_tokens(TokenPair {
        access_token: "acc-2".to_owned(),
        refresh_token: "ref-2".to_owned(),
    });
    let snap = store.snapshot();
    assert!(snap.is_authenticated);
    assert!(snap.is_consistent());
    assert_eq!(snap.access_token.as_deref(), Some("acc-2"));
}

#[test]
fn logout_clears_everything_and_is_idempotent() {
    let (store, durable, cookies) = store();
    store.commit(user(), tokens());

    store.logout();
    assert_eq!(store.snapshot(), SessionState::default());
    assert!(durable.get(ACCESS_TOKEN_KEY).is_none());
    assert!(durable.get(REFRESH_TOKEN_KEY).is_none());
    assert!(durable.get(USER_KEY).is_none());
    assert!(cookies.get(ACCESS_TOKEN_KEY).is_none());
    assert!(cookies.get(REFRESH_TOKEN_KEY).is_none());

    store.logout();
    assert_eq!(store.snapshot(), SessionState::default());
}

#[test]
fn rehydration_restores_session_but_not_loading() {
    let durable = MemoryStore::new();
    let cookies = MemoryStore::new();

    let first = SessionStore::with_substrates(durable.clone(), cookies.clone());
    first.commit(user(), tokens());
    first.set_loading(true);

    // A new store over the same substrates models a page reload.
    let reloaded = SessionStore::with_substrates(durable, cookies);
    let snap = reloaded.snapshot();
    assert!(snap.is_authenticated);
    assert_eq!(snap.user.as_ref().map(|u| u.id.as_str()), Some("u-1"));
    assert!(!snap.loading);
}

#[test]
fn set_loading_does_not_disturb_credentials() {
    let (store, _durable, _cookies) = store();
    store.commit(user(), tokens());
    store.set_loading(true);

    let snap = store.snapshot();
    assert!(snap.loading);
    assert!(snap.is_authenticated);
    assert!(snap.is_consistent());
}
