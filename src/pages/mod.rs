//! Route components.

pub mod admin_dashboard;
pub mod admin_users;
pub mod billing;
pub mod cards;
pub mod dashboard;
pub mod forgot_password;
pub mod home;
pub mod kyc;
pub mod login;
pub mod register;
pub mod reset_password;
pub mod send;
pub mod settings;
