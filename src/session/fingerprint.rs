//! Device fingerprint generation and persistence.
//!
//! The fingerprint is an identification aid sent to the backend for
//! anomaly detection. It is not cryptographically secure and must never be
//! treated as a credential.

#[cfg(test)]
#[path = "fingerprint_test.rs"]
mod fingerprint_test;

use uuid::Uuid;

use super::substrate::KeyValueStore;

/// Key used in both the durable store and the cookie mirror.
pub const FINGERPRINT_KEY: &str = "device_fingerprint";

/// Cookie lifetime for the fingerprint mirror (1 year).
pub const FINGERPRINT_COOKIE_MAX_AGE: u32 = 365 * 24 * 60 * 60;

/// Return the device fingerprint, creating one if this device has none.
///
/// Lookup order: durable store, then the cookie mirror (recovering identity
/// when durable storage was cleared but cookies were not), then a freshly
/// generated UUID v4. The cookie mirror is rewritten on every call so the
/// two substrates stay synchronized.
pub fn get_or_create<D, C>(durable: &D, cookies: &C) -> String
where
    D: KeyValueStore,
    C: KeyValueStore,
{
    let fingerprint = durable.get(FINGERPRINT_KEY).unwrap_or_else(|| {
        let recovered = cookies
            .get(FINGERPRINT_KEY)
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        durable.set(FINGERPRINT_KEY, &recovered, None);
        recovered
    });

    cookies.set(FINGERPRINT_KEY, &fingerprint, Some(FINGERPRINT_COOKIE_MAX_AGE));
    fingerprint
}

/// Browser entry point over localStorage + document.cookie.
///
/// Outside the browser there is no device to identify, so a fixed marker is
/// returned instead of minting a throwaway value per call.
pub fn device_fingerprint() -> String {
    #[cfg(feature = "hydrate")]
    {
        use super::substrate::{CookieStore, LocalStore};
        get_or_create(&LocalStore, &CookieStore)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "server-side-fingerprint".to_owned()
    }
}
