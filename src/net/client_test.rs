use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::executor::block_on;
use futures::future::join;

use super::*;
use crate::net::types::{BalanceResponse, Role, UserSummary};
use crate::session::substrate::MemoryStore;

/// Scripted transport: answers from a queue and logs every request.
/// Each send yields once so concurrent requests actually interleave.
#[derive(Clone, Default)]
struct FakeTransport {
    responses: Rc<RefCell<VecDeque<Result<HttpResponse, ApiError>>>>,
    log: Rc<RefCell<Vec<HttpRequest>>>,
}

impl FakeTransport {
    fn push(&self, status: u16, body: serde_json::Value) {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse { status, body }));
    }

    fn requests_to(&self, path_suffix: &str) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|r| r.url.ends_with(path_suffix))
            .count()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.log.borrow_mut().push(req);
        YieldOnce(false).await;
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(ApiError::Network("script exhausted".to_owned())))
    }
}

struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

fn user() -> UserSummary {
    UserSummary {
        id: "u-1".to_owned(),
        email: "ada@example.com".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        role: Role::User,
        is_2fa_enabled: false,
    }
}

fn signed_in_client() -> (
    ApiClient<FakeTransport, MemoryStore, MemoryStore>,
    FakeTransport,
    SessionStore<MemoryStore, MemoryStore>,
) {
    let session = SessionStore::with_substrates(MemoryStore::new(), MemoryStore::new());
    session.commit(
        user(),
        TokenPair {
            access_token: "acc-1".to_owned(),
            refresh_token: "ref-1".to_owned(),
        },
    );
    let transport = FakeTransport::default();
    let client = ApiClient::with_parts(
        "https://api.test",
        transport.clone(),
        session.clone(),
        RefreshGate::default(),
    );
    (client, transport, session)
}

#[test]
fn success_attaches_bearer_fingerprint_and_base_url() {
    let (client, transport, _session) = signed_in_client();
    transport.push(200, serde_json::json!({ "balance": 42.0, "currency": "USD" }));

    let balance: BalanceResponse =
        block_on(client.get("/wallet/balance")).expect("balance");
    assert_eq!(balance.balance, 42.0);

    let log = transport.log.borrow();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].url, "https://api.test/wallet/balance");
    assert_eq!(log[0].bearer.as_deref(), Some("acc-1"));
    assert!(!log[0].fingerprint.is_empty());
}

#[test]
fn a_401_triggers_one_refresh_and_one_retry_with_the_new_token() {
    let (client, transport, session) = signed_in_client();
    transport.push(401, serde_json::json!({ "message": "token expired" }));
    transport.push(200, serde_json::json!({ "access_token": "acc-2", "refresh_token": "ref-2" }));
    transport.push(200, serde_json::json!({ "balance": 7.0, "currency": "USD" }));

    let balance: BalanceResponse =
        block_on(client.get("/wallet/balance")).expect("balance after refresh");
    assert_eq!(balance.balance, 7.0);

    let log = transport.log.borrow();
    assert_eq!(log.len(), 3);
    assert!(log[1].url.ends_with("/auth/refresh"));
    assert!(log[1].bearer.is_none());
    assert_eq!(log[1].body_refresh_token(), Some("ref-1".to_owned()));
    assert_eq!(log[2].bearer.as_deref(), Some("acc-2"));

    assert_eq!(session.access_token().as_deref(), Some("acc-2"));
    assert_eq!(session.refresh_token().as_deref(), Some("ref-2"));
}

impl HttpRequest {
    fn body_refresh_token(&self) -> Option<String> {
        match &self.body {
            Body::Json(v) => v
                .get("refresh_token")
                .and_then(|t| t.as_str())
                .map(ToOwned::to_owned),
            _ => None,
        }
    }
}

#[test]
fn refresh_failure_forces_logout_and_surfaces_the_original_401() {
    let (client, transport, session) = signed_in_client();
    transport.push(401, serde_json::json!({ "message": "token expired" }));
    transport.push(401, serde_json::json!({ "message": "refresh token revoked" }));

    let err = block_on(client.get::<BalanceResponse>("/wallet/balance"))
        .expect_err("must fail");
    assert_eq!(
        err,
        ApiError::Status { status: 401, message: Some("token expired".to_owned()) }
    );

    // No retry after a failed refresh, and the session is gone.
    assert_eq!(transport.log.borrow().len(), 2);
    assert_eq!(session.snapshot(), crate::session::SessionState::default());
}

#[test]
fn a_second_401_after_the_retry_is_surfaced_not_looped() {
    let (client, transport, _session) = signed_in_client();
    transport.push(401, serde_json::json!({ "message": "token expired" }));
    transport.push(200, serde_json::json!({ "access_token": "acc-2", "refresh_token": "ref-2" }));
    transport.push(401, serde_json::json!({ "message": "still unauthorized" }));

    let err = block_on(client.get::<BalanceResponse>("/wallet/balance"))
        .expect_err("must fail");
    assert_eq!(err.status(), Some(401));

    // issue + refresh + retry, nothing more.
    assert_eq!(transport.log.borrow().len(), 3);
    assert_eq!(transport.requests_to("/auth/refresh"), 1);
}

#[test]
fn non_401_failures_are_not_retried() {
    let (client, transport, _session) = signed_in_client();
    transport.push(500, serde_json::json!({ "message": "ledger unavailable" }));

    let err = block_on(client.get::<BalanceResponse>("/wallet/balance"))
        .expect_err("must fail");
    assert_eq!(
        err,
        ApiError::Status { status: 500, message: Some("ledger unavailable".to_owned()) }
    );
    assert_eq!(transport.log.borrow().len(), 1);
}

#[test]
fn a_401_without_a_session_is_surfaced_directly() {
    // Bad credentials on login must not spin up a refresh.
    let session = SessionStore::with_substrates(MemoryStore::new(), MemoryStore::new());
    let transport = FakeTransport::default();
    let client = ApiClient::with_parts(
        "https://api.test",
        transport.clone(),
        session,
        RefreshGate::default(),
    );
    transport.push(401, serde_json::json!({ "message": "invalid credentials" }));

    let err = block_on(
        client.post::<serde_json::Value>("/auth/login", serde_json::json!({ "email": "x" })),
    )
    .expect_err("must fail");
    assert_eq!(err.status(), Some(401));
    assert_eq!(transport.log.borrow().len(), 1);
    assert_eq!(transport.requests_to("/auth/refresh"), 0);
}

#[test]
fn error_field_is_used_when_message_is_absent() {
    let (client, transport, _session) = signed_in_client();
    transport.push(422, serde_json::json!({ "error": "amount must be positive" }));

    let err = block_on(
        client.post::<serde_json::Value>("/wallet/topup", serde_json::json!({ "amount": -1 })),
    )
    .expect_err("must fail");
    assert_eq!(
        err,
        ApiError::Status { status: 422, message: Some("amount must be positive".to_owned()) }
    );
}

#[test]
fn concurrent_401s_share_a_single_refresh() {
    let (client, transport, session) = signed_in_client();
    // Both requests hit 401, one refresh succeeds, both retries succeed.
    transport.push(401, serde_json::json!({ "message": "expired" }));
    transport.push(401, serde_json::json!({ "message": "expired" }));
    transport.push(200, serde_json::json!({ "access_token": "acc-2", "refresh_token": "ref-2" }));
    transport.push(200, serde_json::json!({ "balance": 1.0, "currency": "USD" }));
    transport.push(200, serde_json::json!({ "balance": 2.0, "currency": "USD" }));

    let (a, b) = block_on(join(
        client.get::<BalanceResponse>("/wallet/balance"),
        client.get::<BalanceResponse>("/wallet/balance"),
    ));
    assert!(a.is_ok());
    assert!(b.is_ok());

    assert_eq!(transport.requests_to("/auth/refresh"), 1);
    assert_eq!(transport.log.borrow().len(), 5);
    assert_eq!(session.access_token().as_deref(), Some("acc-2"));
}
