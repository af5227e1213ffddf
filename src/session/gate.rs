//! Route authorization gate.
//!
//! Classifies every navigation by path prefix using nothing but the
//! presence of the access-token cookie. This is a UX convenience, not a
//! security boundary: no signature, expiry, or claim is checked here, and
//! the backend independently authorizes every request. In particular,
//! `/admin` gets no role check at this layer; admin pages fail closed when
//! the backend rejects their API calls.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

/// Path prefixes that require a token to view.
pub const PROTECTED_PREFIXES: &[&str] = &["/dashboard", "/admin"];

/// Path prefixes that only make sense signed out.
pub const AUTH_PREFIXES: &[&str] = &["/auth/login", "/auth/register"];

/// Paths the gate never classifies: API calls and static assets.
pub const BYPASS_PREFIXES: &[&str] = &["/api", "/pkg", "/favicon.ico", "/images", "/assets"];

/// Where a protected navigation without a token is sent.
pub const LOGIN_PATH: &str = "/auth/login";

/// Where an authenticated user landing on an auth page is sent.
pub const DEFAULT_AUTHENTICATED_PATH: &str = "/dashboard";

/// Outcome of classifying one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(String),
}

/// Classify a navigation from its pathname and cookie presence alone.
///
/// Protected path without a token redirects to login with the original
/// pathname as `callbackUrl`, so the post-login flow can return the user
/// to where they were headed. Auth-only path with a token redirects to the
/// dashboard. Everything else is allowed unchanged.
pub fn classify(pathname: &str, has_access_cookie: bool) -> RouteDecision {
    if starts_with_any(pathname, BYPASS_PREFIXES) {
        return RouteDecision::Allow;
    }

    if starts_with_any(pathname, PROTECTED_PREFIXES) && !has_access_cookie {
        return RouteDecision::Redirect(login_redirect(pathname));
    }

    if starts_with_any(pathname, AUTH_PREFIXES) && has_access_cookie {
        return RouteDecision::Redirect(DEFAULT_AUTHENTICATED_PATH.to_owned());
    }

    RouteDecision::Allow
}

/// Login URL carrying the original destination as a query parameter.
fn login_redirect(pathname: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("callbackUrl", pathname)
        .finish();
    format!("{LOGIN_PATH}?{query}")
}

fn starts_with_any(pathname: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| pathname.starts_with(p))
}
