use super::*;

#[test]
fn value_from_cookie_str_finds_named_cookie() {
    let raw = "device_fingerprint=abc-123; access_token=tok; refresh_token=r1";
    assert_eq!(value_from_cookie_str(raw, "access_token"), Some("tok".to_owned()));
    assert_eq!(
        value_from_cookie_str(raw, "device_fingerprint"),
        Some("abc-123".to_owned())
    );
}

#[test]
fn value_from_cookie_str_ignores_partial_name_matches() {
    let raw = "x_access_token=nope; access_token=yes";
    assert_eq!(value_from_cookie_str(raw, "access_token"), Some("yes".to_owned()));
}

#[test]
fn value_from_cookie_str_handles_missing_and_empty() {
    assert_eq!(value_from_cookie_str("", "access_token"), None);
    assert_eq!(value_from_cookie_str("a=1; b=2", "c"), None);
}

#[test]
fn value_from_cookie_str_trims_whitespace() {
    let raw = " a=1 ;  access_token = spaced ";
    assert_eq!(value_from_cookie_str(raw, "access_token"), Some("spaced".to_owned()));
}
