//! Wire types for the LevPay REST backend.
//!
//! Shapes mirror the backend's JSON responses field for field. Collections
//! are replaced wholesale on re-fetch, never patched, so every type here is
//! an immutable snapshot.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role as reported by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// Identity snapshot for the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub is_2fa_enabled: bool,
}

/// Short-lived access token plus long-lived refresh token.
///
/// No expiry metadata is tracked client-side; expiry is discovered when a
/// request comes back 401.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Response shared by login, register, Google OAuth, and 2FA verification.
///
/// When `requires_2fa` is set the backend withholds tokens and the user
/// until the code is verified, so those fields tolerate absence.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub user: Option<UserSummary>,
    #[serde(default)]
    pub requires_2fa: bool,
}

impl AuthResponse {
    /// Token pair carried by a completed (non-2FA-pending) response.
    pub fn tokens(&self) -> TokenPair {
        TokenPair {
            access_token: self.access_token.clone(),
            refresh_token: self.refresh_token.clone(),
        }
    }
}

/// Generic `{ message }` acknowledgement.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: String,
}

/// Paginated list wrapper used by history, user search, and admin lists.
#[derive(Clone, Debug, Deserialize)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
}

// ---- wallet / transactions ----

#[derive(Clone, Debug, Deserialize)]
pub struct BalanceResponse {
    pub balance: f64,
    pub currency: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct WalletRecord {
    pub id: String,
    pub user_id: String,
    pub balance: f64,
    pub currency: String,
    pub locked: bool,
    pub last_updated: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Transfer,
    Payment,
    Topup,
    Withdrawal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Reversed,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub from_user_id: String,
    #[serde(default)]
    pub to_user_id: Option<String>,
    pub amount: f64,
    pub currency: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub status: TransactionStatus,
    #[serde(default)]
    pub description: Option<String>,
    pub fee: f64,
    pub created_at: String,
}

/// Filter parameters for `GET /transaction/history`.
#[derive(Clone, Debug, Default)]
pub struct HistoryQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub kind: Option<String>,
    pub status: Option<String>,
}

// ---- users ----

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PublicUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub username: Option<String>,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Fields collected by the three-step registration wizard.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub enable_2fa: bool,
}

// ---- KYC ----

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    #[default]
    NotStarted,
    Pending,
    Approved,
    Rejected,
}

#[derive(Clone, Debug, Deserialize)]
pub struct KycDocument {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub file_path: String,
    pub status: KycStatus,
    #[serde(default)]
    pub notes: Option<String>,
    pub uploaded_at: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct KycStatusResponse {
    pub overall_status: KycStatus,
    pub documents: Vec<KycDocument>,
}

// ---- billing ----

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Canceled,
    Overdue,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub user_id: String,
    pub amount: f64,
    pub currency: String,
    pub status: InvoiceStatus,
    pub description: String,
    pub due_date: String,
    #[serde(default)]
    pub paid_at: Option<String>,
    pub created_at: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct BillingStats {
    pub total_invoiced: f64,
    pub total_paid: f64,
    pub total_pending: f64,
    pub invoice_count: u64,
}

// ---- payment methods ----

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodKind {
    Bank,
    Card,
    MobileWallet,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PaymentMethodKind,
    pub is_default: bool,
    pub verified: bool,
    #[serde(default)]
    pub last_four_digits: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct NewPaymentMethod {
    #[serde(rename = "type")]
    pub kind: PaymentMethodKind,
    pub details: serde_json::Value,
    pub is_default: bool,
}

// ---- notifications ----

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub read: bool,
    pub created_at: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UnreadCount {
    pub count: u64,
}

// ---- admin ----

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub is_active: bool,
    pub kyc_status: String,
    pub created_at: String,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct SystemStats {
    pub total_users: u64,
    pub total_wallets: u64,
    pub kyc_pending: u64,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct TransactionStats {
    pub total_volume: f64,
    pub transaction_count: u64,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct AdminDashboard {
    pub system: SystemStats,
    pub transaction: TransactionStats,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AuditLog {
    pub id: String,
    pub user_id: String,
    pub action: String,
    pub entity: String,
    pub entity_id: String,
    pub details: String,
    pub ip_address: String,
    pub created_at: String,
}
