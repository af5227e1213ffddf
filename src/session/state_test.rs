use super::*;
use crate::net::types::Role;

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

#[test]
fn default_state_is_signed_out_and_consistent() {
    let s = SessionState::default();
    assert!(s.user.is_none());
    assert!(s.access_token.is_none());
    assert!(!s.is_authenticated);
    assert!(!s.loading);
    assert!(s.is_consistent());
}

#[test]
fn committed_state_is_authenticated_and_consistent() {
    let s = SessionState::committed(user(), tokens());
    assert!(s.is_authenticated);
    assert_eq!(s.access_token.as_deref(), Some("acc-1"));
    assert_eq!(s.refresh_token.as_deref(), Some("ref-1"));
    assert!(s.is_consistent());
}

#[test]
fn consistency_holds_across_transition_sequences() {
    let mut s = SessionState::default();
    assert!(s.is_consistent());

    // set_user alone does not claim authentication without a token.
    s.set_user(user());
    assert!(!s.is_authenticated);
    assert!(s.is_consistent());

    s.set_tokens(tokens());
    assert!(s.is_authenticated);
    assert!(s.is_consistent());

    s.clear();
    assert!(s.is_consistent());
    assert_eq!(s, SessionState::default());

    // set_tokens alone does not claim authentication without a user.
    s.set_tokens(tokens());
    assert!(!s.is_authenticated);
    assert!(s.is_consistent());
}

#[test]
fn clear_resets_loading() {
    let mut s = SessionState::committed(user(), tokens());
    s.loading = true;
    s.clear();
    assert!(!s.loading);
}

#[test]
fn role_is_read_from_the_user_snapshot() {
    let mut s = SessionState::default();
    assert!(s.role().is_none());
    s.set_user(user());
    assert_eq!(s.role(), Some(Role::User));
}
