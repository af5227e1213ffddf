use super::*;
use crate::net::types::{TransactionKind, TransactionStatus};

fn tx(id: &str) -> TransactionRecord {
    TransactionRecord {
        id: id.to_owned(),
        from_user_id: "u-1".to_owned(),
        to_user_id: None,
        amount: 10.0,
        currency: "USD".to_owned(),
        kind: TransactionKind::Topup,
        status: TransactionStatus::Completed,
        description: None,
        fee: 0.0,
        created_at: "2026-01-01T00:00:00Z".to_owned(),
    }
}

fn balance(amount: f64) -> BalanceResponse {
    BalanceResponse { balance: amount, currency: "USD".to_owned() }
}

#[test]
fn begin_sets_loading_and_clears_error() {
    let mut w = WalletState::default();
    w.error = Some("old".to_owned());

    let seq = w.begin();
    assert!(w.loading);
    assert!(w.error.is_none());
    assert_eq!(seq, 1);
}

#[test]
fn apply_dashboard_replaces_the_collection_wholesale() {
    let mut w = WalletState::default();
    w.transactions = vec![tx("old-1"), tx("old-2")];

    let seq = w.begin();
    assert!(w.apply_dashboard(seq, &balance(50.0), vec![tx("new-1")]));

    assert_eq!(w.balance, 50.0);
    assert_eq!(w.transactions.len(), 1);
    assert_eq!(w.transactions[0].id, "new-1");
    assert!(!w.loading);
}

#[test]
fn failed_fetch_keeps_previous_data_visible() {
    let mut w = WalletState::default();
    let seq = w.begin();
    w.apply_dashboard(seq, &balance(50.0), vec![tx("t-1")]);

    let seq = w.begin();
    assert!(w.apply_error(seq, "network down".to_owned()));

    // Stale-but-present: the old snapshot is still there.
    assert_eq!(w.balance, 50.0);
    assert_eq!(w.transactions.len(), 1);
    assert_eq!(w.error.as_deref(), Some("network down"));
    assert!(!w.loading);
}

#[test]
fn stale_responses_are_dropped() {
    let mut w = WalletState::default();
    let first = w.begin();
    let second = w.begin();

    // The first fetch resolves after a newer one started.
    assert!(!w.apply_dashboard(first, &balance(1.0), vec![tx("stale")]));
    assert!(w.transactions.is_empty());
    assert!(w.loading);

    assert!(w.apply_dashboard(second, &balance(2.0), vec![tx("fresh")]));
    assert_eq!(w.balance, 2.0);
}

#[test]
fn stale_errors_are_dropped_too() {
    let mut w = WalletState::default();
    let first = w.begin();
    let second = w.begin();

    assert!(!w.apply_error(first, "too late".to_owned()));
    assert!(w.error.is_none());

    assert!(w.apply_error(second, "current".to_owned()));
    assert_eq!(w.error.as_deref(), Some("current"));
}
