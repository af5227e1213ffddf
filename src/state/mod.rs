//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! One mirror per backend domain, each a plain struct with `{data, loading,
//! error}` plus pure apply functions, so components depend on small focused
//! models and the update logic is testable without a browser. Every mirror
//! carries a fetch sequence number: a response whose sequence is stale (the
//! user navigated or re-queried meanwhile) is dropped, not committed.
//! Failed fetches keep the previous data visible and set the error flag;
//! successful fetches replace collections wholesale.

pub mod admin;
pub mod billing;
pub mod cards;
pub mod kyc;
pub mod notifications;
pub mod users;
pub mod wallet;
