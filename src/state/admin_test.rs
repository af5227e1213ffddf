use super::*;

fn admin_user(id: &str, active: bool) -> AdminUser {
    AdminUser {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        first_name: "Grace".to_owned(),
        last_name: "Hopper".to_owned(),
        username: None,
        avatar_url: None,
        phone: None,
        is_active: active,
        kyc_status: "approved".to_owned(),
        created_at: "2026-01-01T00:00:00Z".to_owned(),
    }
}

fn page_of(users: Vec<AdminUser>, total: u64) -> Page<AdminUser> {
    Page { records: users, total, page: 1, limit: ADMIN_PAGE_SIZE }
}

#[test]
fn toggle_flips_immediately_and_records_the_previous_value() {
    let mut s = AdminUsersState::default();
    let seq = s.begin(1, "");
    s.apply_page(seq, page_of(vec![admin_user("u-1", true)], 1));

    let previous = s.apply_toggle("u-1");

    assert_eq!(previous, Some(true));
    assert!(!s.users[0].is_active);
    assert_eq!(s.toggling.as_deref(), Some("u-1"));
}

#[test]
fn rollback_restores_the_recorded_value() {
    let mut s = AdminUsersState::default();
    let seq = s.begin(1, "");
    s.apply_page(seq, page_of(vec![admin_user("u-1", true)], 1));

    let previous = s.apply_toggle("u-1").unwrap();
    s.rollback_toggle("u-1", previous);

    assert!(s.users[0].is_active);
    assert!(s.toggling.is_none());
}

#[test]
fn toggling_a_missing_row_is_a_no_op() {
    let mut s = AdminUsersState::default();
    assert_eq!(s.apply_toggle("ghost"), None);
    assert!(s.toggling.is_none());
}

#[test]
fn a_stale_page_does_not_overwrite_a_newer_search() {
    let mut s = AdminUsersState::default();
    let stale = s.begin(1, "");
    let fresh = s.begin(1, "grace");

    assert!(!s.apply_page(stale, page_of(vec![admin_user("u-1", true)], 50)));
    assert!(s.users.is_empty());

    assert!(s.apply_page(fresh, page_of(vec![admin_user("u-2", true)], 1)));
    assert_eq!(s.users[0].id, "u-2");
    assert_eq!(s.search, "grace");
}

#[test]
fn total_pages_rounds_up_and_never_hits_zero() {
    let mut s = AdminUsersState::default();
    assert_eq!(s.total_pages(), 1);

    s.total = 10;
    assert_eq!(s.total_pages(), 1);

    s.total = 11;
    assert_eq!(s.total_pages(), 2);
}

#[test]
fn dashboard_errors_keep_previous_stats_visible() {
    let mut s = AdminDashboardState::default();
    let seq = s.begin();
    s.apply_snapshot(
        seq,
        AdminDashboard {
            system: crate::net::types::SystemStats {
                total_users: 5,
                total_wallets: 5,
                kyc_pending: 1,
            },
            transaction: crate::net::types::TransactionStats {
                total_volume: 100.0,
                transaction_count: 7,
            },
        },
        Vec::new(),
    );

    let seq = s.begin();
    assert!(s.apply_error(seq, "backend down".to_owned()));
    assert!(s.dashboard.is_some());
    assert_eq!(s.error.as_deref(), Some("backend down"));
}
