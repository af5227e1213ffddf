use super::*;

#[test]
fn user_summary_round_trips_role() {
    let json = serde_json::json!({
        "id": "u-1",
        "email": "ada@example.com",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "role": "admin",
        "is_2fa_enabled": true
    });
    let user: UserSummary = serde_json::from_value(json).expect("user");
    assert_eq!(user.role, Role::Admin);
    assert!(user.is_2fa_enabled);
}

#[test]
fn auth_response_tolerates_2fa_pending_shape() {
    let json = serde_json::json!({ "requires_2fa": true });
    let resp: AuthResponse = serde_json::from_value(json).expect("auth response");
    assert!(resp.requires_2fa);
    assert!(resp.user.is_none());
    assert!(resp.access_token.is_empty());
}

#[test]
fn transaction_record_maps_type_field() {
    let json = serde_json::json!({
        "id": "t-1",
        "from_user_id": "u-1",
        "amount": 12.5,
        "currency": "USD",
        "type": "topup",
        "status": "completed",
        "fee": 0.0,
        "created_at": "2026-01-01T00:00:00Z"
    });
    let tx: TransactionRecord = serde_json::from_value(json).expect("tx");
    assert_eq!(tx.kind, TransactionKind::Topup);
    assert_eq!(tx.status, TransactionStatus::Completed);
    assert!(tx.to_user_id.is_none());
}

#[test]
fn kyc_status_uses_snake_case() {
    let status: KycStatus = serde_json::from_str("\"not_started\"").expect("status");
    assert_eq!(status, KycStatus::NotStarted);
}

#[test]
fn new_payment_method_serializes_type_field() {
    let body = serde_json::to_value(NewPaymentMethod {
        kind: PaymentMethodKind::MobileWallet,
        details: serde_json::json!({"provider": "mpesa"}),
        is_default: true,
    })
    .expect("serialize");
    assert_eq!(body["type"], "mobile_wallet");
    assert_eq!(body["is_default"], true);
}

#[test]
fn registration_form_omits_missing_phone() {
    let body = serde_json::to_value(RegistrationForm {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "Secret123".to_owned(),
        confirm_password: "Secret123".to_owned(),
        phone: None,
        enable_2fa: false,
    })
    .expect("serialize");
    assert!(body.get("phone").is_none());
}
