//! `document.cookie` access with a pure parser.
//!
//! The cookie jar has two readers in this product: the client code itself
//! and whatever edge layer fronts the app. Only the session module writes
//! to it. All attributes are fixed to `path=/; SameSite=Lax` because every
//! cookie here is read on every route.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Extract a cookie value from a raw `document.cookie` string.
///
/// Returns `None` if the name is absent. Matches whole names only, so
/// `access_token` never matches `x_access_token`.
pub fn value_from_cookie_str(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        if k.trim() == name {
            Some(v.trim().to_owned())
        } else {
            None
        }
    })
}

/// Read a cookie by name. Returns `None` outside the browser.
pub fn read(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let raw = html_document()?.cookie().ok()?;
        value_from_cookie_str(&raw, name)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}

/// Whether a cookie with the given name is present.
pub fn has(name: &str) -> bool {
    read(name).is_some()
}

/// Write a cookie with `path=/; SameSite=Lax` and the given max-age.
pub fn write(name: &str, value: &str, max_age_secs: u32) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&format!(
                "{name}={value}; path=/; max-age={max_age_secs}; SameSite=Lax"
            ));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, value, max_age_secs);
    }
}

/// Expire a cookie immediately by writing a past expiry date.
pub fn expire(name: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&format!(
                "{name}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT"
            ));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}
