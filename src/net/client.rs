//! Authenticated HTTP client.
//!
//! Every request carries JSON content negotiation, the bearer token when
//! one is committed, and the device fingerprint via the `X-Fingerprint`
//! header. The header is the only transport for the fingerprint; request
//! bodies never carry it.
//!
//! A single logical request moves through at most three steps: issue, one
//! refresh attempt if the response is 401 and a session exists, one retry
//! with the new access token. A second 401 after the retry is surfaced as
//! a failure, never looped. If the refresh itself fails the session is
//! force-logged-out and the original 401 is surfaced. Concurrent 401s
//! coalesce onto one in-flight refresh via a shared future.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::cell::RefCell;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};
use serde::de::DeserializeOwned;

use crate::session::fingerprint;
use crate::session::store::{BrowserSession, SessionStore};
use crate::session::substrate::{CookieStore, KeyValueStore, LocalStore};

use super::error::ApiError;
use super::types::TokenPair;

/// Default backend mount point, overridable at build time.
const DEFAULT_API_BASE: &str = "/api/v1";

fn api_base() -> String {
    option_env!("LEVPAY_API_BASE")
        .unwrap_or(DEFAULT_API_BASE)
        .to_owned()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Request body shapes the transport understands.
#[derive(Clone, Debug)]
pub enum Body {
    Empty,
    Json(serde_json::Value),
    /// Multipart document upload (KYC). Browser only.
    #[cfg(feature = "hydrate")]
    Document {
        doc_type: String,
        file: web_sys::File,
    },
}

/// One fully-described outgoing request.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub fingerprint: String,
    pub body: Body,
}

/// Status plus parsed JSON body (`Null` when the body is empty or not
/// JSON).
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The seam between the client logic and actual HTTP. Tests inject a
/// scripted implementation; the app uses [`GlooTransport`].
pub trait Transport {
    fn send(&self, req: HttpRequest) -> impl Future<Output = Result<HttpResponse, ApiError>>;
}

/// gloo-net transport. Outside the browser every send fails with
/// [`ApiError::Unsupported`].
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let builder = match req.method {
                Method::Get => Request::get(&req.url),
                Method::Post => Request::post(&req.url),
                Method::Put => Request::put(&req.url),
                Method::Patch => Request::patch(&req.url),
                Method::Delete => Request::delete(&req.url),
            };

            let mut builder = builder
                .header("Accept", "application/json")
                .header("X-Fingerprint", &req.fingerprint);
            if let Some(token) = &req.bearer {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }

            let request = match req.body {
                Body::Empty => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
                Body::Json(value) => builder
                    .json(&value)
                    .map_err(|e| ApiError::Network(e.to_string()))?,
                Body::Document { doc_type, file } => {
                    let form = web_sys::FormData::new()
                        .map_err(|_| ApiError::Network("could not build form data".to_owned()))?;
                    form.append_with_str("type", &doc_type)
                        .map_err(|_| ApiError::Network("could not build form data".to_owned()))?;
                    form.append_with_blob("document", &file)
                        .map_err(|_| ApiError::Network("could not build form data".to_owned()))?;
                    builder
                        .body(form)
                        .map_err(|e| ApiError::Network(e.to_string()))?
                }
            };

            let resp = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .ok()
                .and_then(|t| serde_json::from_str(&t).ok())
                .unwrap_or(serde_json::Value::Null);

            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
            Err(ApiError::Unsupported)
        }
    }
}

type RefreshFuture = Shared<LocalBoxFuture<'static, Result<TokenPair, ApiError>>>;

/// Shared slot for the in-flight token refresh. Clones share the slot, so
/// every client built from the same gate coalesces its refreshes.
#[derive(Clone, Debug, Default)]
pub struct RefreshGate(Rc<RefCell<Option<RefreshFuture>>>);

thread_local! {
    static SHARED_REFRESH_GATE: RefreshGate = RefreshGate::default();
}

/// Typed client over a transport and a session store.
#[derive(Clone, Debug)]
pub struct ApiClient<T: 'static, D: 'static, C: 'static> {
    base: String,
    transport: T,
    session: SessionStore<D, C>,
    gate: RefreshGate,
}

/// The client used by the running app.
pub type Client = ApiClient<GlooTransport, LocalStore, CookieStore>;

impl Client {
    /// Client over gloo-net and the browser session store, sharing the
    /// process-wide refresh gate.
    pub fn new(session: BrowserSession) -> Self {
        let gate = SHARED_REFRESH_GATE.with(Clone::clone);
        Self::with_parts(api_base(), GlooTransport, session, gate)
    }
}

impl<T, D, C> ApiClient<T, D, C>
where
    T: Transport + Clone + 'static,
    D: KeyValueStore + Clone + 'static,
    C: KeyValueStore + Clone + 'static,
{
    pub fn with_parts(
        base: impl Into<String>,
        transport: T,
        session: SessionStore<D, C>,
        gate: RefreshGate,
    ) -> Self {
        Self { base: base.into(), transport, session, gate }
    }

    pub fn session(&self) -> SessionStore<D, C> {
        self.session.clone()
    }

    pub(crate) async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(Method::Get, path, Body::Empty).await
    }

    pub(crate) async fn post<R: DeserializeOwned>(
        &self,
        path: &str,
        json: serde_json::Value,
    ) -> Result<R, ApiError> {
        self.request(Method::Post, path, Body::Json(json)).await
    }

    pub(crate) async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(Method::Post, path, Body::Empty).await
    }

    pub(crate) async fn put<R: DeserializeOwned>(
        &self,
        path: &str,
        json: serde_json::Value,
    ) -> Result<R, ApiError> {
        self.request(Method::Put, path, Body::Json(json)).await
    }

    pub(crate) async fn put_empty<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(Method::Put, path, Body::Empty).await
    }

    pub(crate) async fn patch<R: DeserializeOwned>(
        &self,
        path: &str,
        json: serde_json::Value,
    ) -> Result<R, ApiError> {
        self.request(Method::Patch, path, Body::Json(json)).await
    }

    pub(crate) async fn patch_empty<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(Method::Patch, path, Body::Empty).await
    }

    pub(crate) async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(Method::Delete, path, Body::Empty).await
    }

    /// Run one logical request through the issue → refresh → retry state
    /// machine and decode the success body.
    pub(crate) async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Body,
    ) -> Result<R, ApiError> {
        let first = self.dispatch(method, path, &body).await?;
        if first.status != 401 || !self.can_refresh() {
            return decode(first);
        }

        match self.refresh_tokens().await {
            Ok(_) => {
                let retried = self.dispatch(method, path, &body).await?;
                decode(retried)
            }
            Err(refresh_err) => {
                leptos::logging::warn!("token refresh failed ({refresh_err}); signing out");
                self.session.logout();
                Err(status_error(&first))
            }
        }
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: &Body,
    ) -> Result<HttpResponse, ApiError> {
        let req = HttpRequest {
            method,
            url: format!("{}{path}", self.base),
            bearer: self.session.access_token(),
            fingerprint: fingerprint::device_fingerprint(),
            body: body.clone(),
        };
        self.transport.send(req).await
    }

    /// A refresh is only worth attempting when this 401 came from an
    /// authenticated request. Credential failures on login itself must
    /// surface directly.
    fn can_refresh(&self) -> bool {
        let snap = self.session.snapshot();
        snap.access_token.is_some() && snap.refresh_token.is_some()
    }

    /// Exchange the refresh token for a new pair, coalescing concurrent
    /// callers onto one in-flight exchange.
    async fn refresh_tokens(&self) -> Result<TokenPair, ApiError> {
        let fut = {
            let mut slot = self.gate.0.borrow_mut();
            if let Some(existing) = slot.clone() {
                existing
            } else {
                let fresh = self.refresh_exchange().shared();
                *slot = Some(fresh.clone());
                fresh
            }
        };

        let result = fut.await;
        self.gate.0.borrow_mut().take();
        result
    }

    /// The actual `POST /auth/refresh` call. Goes straight to the
    /// transport: a 401 here must never recurse into another refresh.
    fn refresh_exchange(&self) -> LocalBoxFuture<'static, Result<TokenPair, ApiError>> {
        let transport = self.transport.clone();
        let session = self.session.clone();
        let base = self.base.clone();

        async move {
            let refresh_token = session.refresh_token().ok_or(ApiError::Status {
                status: 401,
                message: Some("no refresh token".to_owned()),
            })?;

            let req = HttpRequest {
                method: Method::Post,
                url: format!("{base}/auth/refresh"),
                bearer: None,
                fingerprint: fingerprint::device_fingerprint(),
                body: Body::Json(serde_json::json!({ "refresh_token": refresh_token })),
            };
            let resp = transport.send(req).await?;
            if !resp.is_success() {
                return Err(status_error(&resp));
            }

            let pair: TokenPair = serde_json::from_value(resp.body)
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            session.set_tokens(pair.clone());
            Ok(pair)
        }
        .boxed_local()
    }
}

/// Decode a response into the expected type or a typed failure.
fn decode<R: DeserializeOwned>(resp: HttpResponse) -> Result<R, ApiError> {
    if resp.is_success() {
        // Some acks come back with an empty body.
        let body = if resp.body.is_null() {
            serde_json::json!({})
        } else {
            resp.body
        };
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        Err(status_error(&resp))
    }
}

/// Build a status error, extracting the backend's `message`/`error` field
/// when the body carries one.
fn status_error(resp: &HttpResponse) -> ApiError {
    let message = resp
        .body
        .get("message")
        .or_else(|| resp.body.get("error"))
        .and_then(|v| v.as_str())
        .map(ToOwned::to_owned);
    ApiError::Status { status: resp.status, message }
}

/// Build a query string from `(name, value)` pairs, skipping empty values.
pub(crate) fn query_string(pairs: &[(&str, String)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (name, value) in pairs {
        if !value.is_empty() {
            serializer.append_pair(name, value);
        }
    }
    serializer.finish()
}
