//! Reusable UI components shared by the dashboard pages.

pub mod avatar;
pub mod balance_card;
pub mod header;
pub mod layout;
pub mod sidebar;
pub mod transaction_list;
