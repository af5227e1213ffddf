//! Session, device identity, and route authorization.
//!
//! DESIGN
//! ======
//! Tokens live in two substrates with different readers: durable storage
//! (read by the HTTP client) and cookies (read by the edge routing layer).
//! A single writer, [`repository::SessionRepository`], fans every commit
//! and clear out to both, so the readers never mutate anything. True
//! cross-substrate atomicity does not exist in a browser; `clear` is
//! idempotent so a partial failure self-heals on the next logout.

pub mod fingerprint;
pub mod gate;
pub mod repository;
pub mod state;
pub mod store;
pub mod substrate;

pub use state::SessionState;
pub use store::{BrowserSession, SessionStore};
