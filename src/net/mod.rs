//! REST networking: typed client, transport, errors, and endpoint groups.
//!
//! One endpoint module per backend concern, all going through the
//! authenticated [`client::ApiClient`].

pub mod admin;
pub mod auth;
pub mod billing;
pub mod cards;
pub mod client;
pub mod error;
pub mod kyc;
pub mod notifications;
pub mod transaction;
pub mod types;
pub mod user;
pub mod wallet;

pub use client::{ApiClient, Client};
pub use error::ApiError;
