//! Small browser-facing utilities shared across the client.

pub mod cookie;
pub mod debounce;
