use super::*;

#[test]
fn protected_path_without_cookie_redirects_to_login_with_callback() {
    assert_eq!(
        classify("/dashboard", false),
        RouteDecision::Redirect("/auth/login?callbackUrl=%2Fdashboard".to_owned())
    );
}

#[test]
fn nested_protected_path_keeps_full_callback() {
    assert_eq!(
        classify("/dashboard/send", false),
        RouteDecision::Redirect("/auth/login?callbackUrl=%2Fdashboard%2Fsend".to_owned())
    );
}

#[test]
fn protected_path_with_cookie_is_allowed() {
    assert_eq!(classify("/dashboard", true), RouteDecision::Allow);
    assert_eq!(classify("/dashboard/kyc", true), RouteDecision::Allow);
}

#[test]
fn auth_path_with_cookie_redirects_to_dashboard() {
    assert_eq!(
        classify("/auth/login", true),
        RouteDecision::Redirect("/dashboard".to_owned())
    );
    assert_eq!(
        classify("/auth/register", true),
        RouteDecision::Redirect("/dashboard".to_owned())
    );
}

#[test]
fn auth_path_without_cookie_is_allowed() {
    assert_eq!(classify("/auth/login", false), RouteDecision::Allow);
}

#[test]
fn public_paths_are_always_allowed() {
    assert_eq!(classify("/", false), RouteDecision::Allow);
    assert_eq!(classify("/", true), RouteDecision::Allow);
    assert_eq!(classify("/auth/forgot-password", true), RouteDecision::Allow);
}

#[test]
fn admin_needs_only_token_presence_not_role() {
    // Role checks are deferred entirely to the backend.
    assert_eq!(classify("/admin/users", true), RouteDecision::Allow);
    assert_eq!(
        classify("/admin/users", false),
        RouteDecision::Redirect("/auth/login?callbackUrl=%2Fadmin%2Fusers".to_owned())
    );
}

#[test]
fn asset_and_api_paths_bypass_the_gate() {
    assert_eq!(classify("/api/wallet/balance", false), RouteDecision::Allow);
    assert_eq!(classify("/pkg/levpay-web.js", false), RouteDecision::Allow);
    assert_eq!(classify("/favicon.ico", false), RouteDecision::Allow);
    assert_eq!(classify("/images/hero.png", false), RouteDecision::Allow);
    assert_eq!(classify("/assets/logo.svg", false), RouteDecision::Allow);
}
