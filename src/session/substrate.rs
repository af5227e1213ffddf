//! Key-value substrates backing the session layer.
//!
//! Two browser substrates ([`LocalStore`] over localStorage, [`CookieStore`]
//! over document.cookie) plus an in-memory one for native tests and the
//! server. The trait is the injection seam: everything above it is tested
//! without a browser.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Durable-store and cookie keys for the two tokens.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Durable-store key for the persisted user snapshot.
pub const USER_KEY: &str = "levpay_user";

/// Cookie lifetime for the access token (30 minutes).
pub const ACCESS_COOKIE_MAX_AGE: u32 = 30 * 60;
/// Cookie lifetime for the refresh token (7 days).
pub const REFRESH_COOKIE_MAX_AGE: u32 = 7 * 24 * 60 * 60;

/// A string key-value store.
///
/// `max_age_secs` is meaningful only for cookie-backed implementations;
/// durable stores ignore it.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str, max_age_secs: Option<u32>);
    fn remove(&self, key: &str);
}

/// localStorage-backed substrate. No-ops outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str, _max_age_secs: Option<u32>) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// document.cookie-backed substrate, `path=/; SameSite=Lax` throughout.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieStore;

impl KeyValueStore for CookieStore {
    fn get(&self, key: &str) -> Option<String> {
        crate::util::cookie::read(key)
    }

    fn set(&self, key: &str, value: &str, max_age_secs: Option<u32>) {
        // A cookie without an explicit lifetime defaults to the session.
        crate::util::cookie::write(key, value, max_age_secs.unwrap_or(0).max(1));
    }

    fn remove(&self, key: &str) {
        crate::util::cookie::expire(key);
    }
}

/// In-memory substrate for native tests and server-side code paths.
/// Clones share the underlying map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str, _max_age_secs: Option<u32>) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
