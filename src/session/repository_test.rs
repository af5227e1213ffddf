use super::*;
use crate::net::types::Role;
use crate::session::substrate::MemoryStore;

fn user() -> UserSummary {
    UserSummary {
        id: "u-1".to_owned(),
        email: "ada@example.com".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        role: Role::Admin,
        is_2fa_enabled: true,
    }
}

fn tokens() -> TokenPair {
    TokenPair {
        access_token: "acc-1".to_owned(),
        refresh_token: "ref-1".to_owned(),
    }
}

fn repo() -> (SessionRepository<MemoryStore, MemoryStore>, MemoryStore, MemoryStore) {
    let durable = MemoryStore::new();
    let cookies = MemoryStore::new();
    (SessionRepository::new(durable.clone(), cookies.clone()), durable, cookies)
}

#[test]
fn commit_writes_both_substrates() {
    let (repo, durable, cookies) = repo();
    repo.commit(&user(), &tokens());

    assert_eq!(durable.get(ACCESS_TOKEN_KEY).as_deref(), Some("acc-1"));
    assert_eq!(durable.get(REFRESH_TOKEN_KEY).as_deref(), Some("ref-1"));
    assert!(durable.get(USER_KEY).is_some());

    assert_eq!(cookies.get(ACCESS_TOKEN_KEY).as_deref(), Some("acc-1"));
    assert_eq!(cookies.get(REFRESH_TOKEN_KEY).as_deref(), Some("ref-1"));
}

#[test]
fn load_rehydrates_a_committed_session() {
    let (repo, _durable, _cookies) = repo();
    repo.commit(&user(), &tokens());

    let state = repo.load();
    assert!(state.is_authenticated);
    assert!(state.is_consistent());
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some("ada@example.com"));
    assert_eq!(state.access_token.as_deref(), Some("acc-1"));
}

#[test]
fn load_on_a_fresh_device_is_signed_out() {
    let (repo, _durable, _cookies) = repo();
    let state = repo.load();
    assert_eq!(state, SessionState::default());
}

#[test]
fn load_heals_a_token_without_a_user() {
    let (repo, durable, _cookies) = repo();
    repo.store_tokens(&tokens());

    let state = repo.load();
    assert!(!state.is_authenticated);
    assert!(state.is_consistent());
    assert!(durable.get(ACCESS_TOKEN_KEY).is_some());
}

#[test]
fn load_ignores_corrupt_persisted_user() {
    let (repo, durable, _cookies) = repo();
    durable.set(USER_KEY, "{not json", None);

    let state = repo.load();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated);
}

#[test]
fn clear_empties_both_substrates_and_is_idempotent() {
    let (repo, durable, cookies) = repo();
    repo.commit(&user(), &tokens());

    repo.clear();
    assert!(durable.get(ACCESS_TOKEN_KEY).is_none());
    assert!(durable.get(REFRESH_TOKEN_KEY).is_none());
    assert!(durable.get(USER_KEY).is_none());
    assert!(cookies.get(ACCESS_TOKEN_KEY).is_none());
    assert!(cookies.get(REFRESH_TOKEN_KEY).is_none());

    // Clearing again is a no-op with the same end state.
    repo.clear();
    assert_eq!(repo.load(), SessionState::default());
}
