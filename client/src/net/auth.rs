//! Adapter for the remote sign-in webhook.
//!
//! SYSTEM CONTEXT
//! ==============
//! The webhook answers with loosely shaped JSON: a bare object or a
//! one-element array, with `status`/`message` either at the top level or
//! nested under a `json` key. Everything here collapses that into a single
//! [`AuthReply`] before the session state machine sees it.
//!
//! ERROR HANDLING
//! ==============
//! Anything that prevents reading a reply (network failure, non-2xx,
//! unparseable body, timeout) is a [`TransportError`]. A readable reply that
//! is not a success is *not* an error at this layer; the session store
//! decides what it means.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::AuthConfig;

/// `action` value the webhook expects for password sign-in.
pub const SIGN_IN_ACTION: &str = "signin";

/// Status text the webhook uses to signal accepted credentials.
pub const SUCCESS_STATUS: &str = "success";

/// Request body posted to the authentication webhook.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    pub action: String,
}

impl SignInRequest {
    pub fn new(email: &str, password: &str) -> Self {
        Self { email: email.to_owned(), password: password.to_owned(), action: SIGN_IN_ACTION.to_owned() }
    }
}

// Hand-written so the password never lands in logs.
impl std::fmt::Debug for SignInRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignInRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("action", &self.action)
            .finish()
    }
}

/// Canonical reply after shape normalization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthReply {
    pub status: Option<String>,
    pub message: Option<String>,
}

impl AuthReply {
    /// True when `status` equals `"success"` ignoring ASCII case.
    pub fn is_success(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|status| status.eq_ignore_ascii_case(SUCCESS_STATUS))
    }
}

/// Failure to obtain a readable reply from the collaborator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("malformed reply: {0}")]
    Malformed(String),
    #[error("request timed out")]
    TimedOut,
    #[error("not available outside the browser")]
    Unavailable,
}

/// Normalize a decoded webhook body into an [`AuthReply`].
///
/// Blank top-level `status`/`message` strings fall through to `json`.
///
/// # Errors
///
/// Returns [`TransportError::Malformed`] when the body is not an object or a
/// non-empty array whose first element is an object.
pub fn normalize_reply(body: &Value) -> Result<AuthReply, TransportError> {
    let item = match body {
        Value::Array(items) => items
            .first()
            .ok_or_else(|| TransportError::Malformed("empty reply array".to_owned()))?,
        other => other,
    };
    let Value::Object(fields) = item else {
        return Err(TransportError::Malformed(format!("expected object, got {}", value_kind(item))));
    };

    let nested = fields.get("json").and_then(Value::as_object);
    let lookup = |key: &str| {
        fields
            .get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.trim().is_empty())
            .or_else(|| nested.and_then(|inner| inner.get(key)).and_then(Value::as_str))
            .map(str::to_owned)
    };

    Ok(AuthReply { status: lookup("status"), message: lookup("message") })
}

/// Decode a raw response body and normalize it.
///
/// # Errors
///
/// Returns [`TransportError::Malformed`] for invalid JSON or an unexpected shape.
pub fn parse_reply(raw: &str) -> Result<AuthReply, TransportError> {
    let body: Value = serde_json::from_str(raw).map_err(|e| TransportError::Malformed(e.to_string()))?;
    normalize_reply(&body)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Remote service that checks credentials.
pub trait AuthCollaborator {
    /// Submit one sign-in request and return the normalized reply.
    fn submit(&self, request: &SignInRequest) -> impl Future<Output = Result<AuthReply, TransportError>>;
}

/// [`AuthCollaborator`] backed by the configured HTTP webhook.
#[derive(Clone, Debug)]
pub struct WebhookCollaborator {
    config: AuthConfig,
}

impl WebhookCollaborator {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

impl AuthCollaborator for WebhookCollaborator {
    async fn submit(&self, request: &SignInRequest) -> Result<AuthReply, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{Either, select};

            let call = std::pin::pin!(post_sign_in(&self.config.endpoint, request));
            let timeout = std::pin::pin!(gloo_timers::future::sleep(self.config.timeout));
            match select(call, timeout).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(TransportError::TimedOut),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn post_sign_in(endpoint: &str, request: &SignInRequest) -> Result<AuthReply, TransportError> {
    let resp = gloo_net::http::Request::post(endpoint)
        .header("Content-Type", "application/json")
        .json(request)
        .map_err(|e| TransportError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| TransportError::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(TransportError::Status(resp.status()));
    }
    let raw = resp.text().await.map_err(|e| TransportError::Malformed(e.to_string()))?;
    parse_reply(&raw)
}
