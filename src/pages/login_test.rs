use super::post_login_path;
use crate::net::types::Role;

#[test]
fn a_user_lands_on_the_dashboard() {
    assert_eq!(post_login_path(Role::User, None), "/dashboard");
}

#[test]
fn an_admin_lands_on_the_admin_dashboard() {
    assert_eq!(post_login_path(Role::Admin, None), "/admin/dashboard");
}

#[test]
fn an_in_app_callback_wins_over_the_role_default() {
    assert_eq!(
        post_login_path(Role::Admin, Some("/dashboard/billing")),
        "/dashboard/billing"
    );
}

#[test]
fn external_and_protocol_relative_callbacks_are_ignored() {
    assert_eq!(
        post_login_path(Role::User, Some("https://evil.example")),
        "/dashboard"
    );
    assert_eq!(post_login_path(Role::User, Some("//evil.example")), "/dashboard");
}
