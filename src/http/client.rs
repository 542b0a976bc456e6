//! Low-level HTTP client: `NuamHttp`.
//!
//! Every network call in the SDK goes through [`NuamHttp::call`], which attaches
//! the JSON content type and the bearer token of the current session, and folds
//! every failure into one of the three [`HttpError`] kinds. No retries, no
//! client-side timeout: each call is a single attempt surfaced to the caller.

use crate::error::HttpError;
use crate::network::API_PREFIX;
use crate::auth::SessionHandle;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Low-level HTTP client for the NUAM Exchange REST API.
pub struct NuamHttp {
    base_url: String,
    client: Client,
    /// Shared with the auth sub-client, which is the only writer.
    session: SessionHandle,
}

impl NuamHttp {
    pub fn new(base_url: &str, session: SessionHandle) -> Result<Self, HttpError> {
        let client = Client::builder()
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| HttpError::Unreachable(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            session,
        })
    }

    /// Backend origin, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an API route (`{origin}/api{path}`).
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    /// Perform one request and return the parsed JSON payload verbatim.
    ///
    /// - request body fails to encode → [`HttpError::RequestEncoding`], nothing sent
    /// - transport failure (no response) → [`HttpError::Unreachable`]
    /// - body unreadable or not JSON → [`HttpError::MalformedResponse`]
    /// - JSON body with a non-2xx status → [`HttpError::Rejected`]
    ///
    /// An embedded `success` flag is NOT interpreted here.
    pub async fn call<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<Value, HttpError> {
        let mut req = self
            .client
            .request(method.clone(), url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = self.session.read().await.as_ref().map(|s| s.token().to_string()) {
            req = req.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        if let Some(b) = body {
            req = req.body(encode_body(b)?);
        }

        let resp = req.send().await.map_err(|e| {
            tracing::debug!(%method, url, error = %e, "request did not reach backend");
            HttpError::Unreachable(e.to_string())
        })?;
        let status = resp.status();
        tracing::debug!(%method, url, status = status.as_u16(), "response received");

        let text = resp.text().await.map_err(|e| {
            tracing::debug!(%method, url, error = %e, "response body could not be read");
            HttpError::MalformedResponse(e.to_string())
        })?;
        let payload: Value = serde_json::from_str(&text)
            .map_err(|e| HttpError::MalformedResponse(e.to_string()))?;

        if status.is_success() {
            return Ok(payload);
        }

        let status_code = status.as_u16();
        Err(HttpError::Rejected {
            status: Some(status_code),
            message: failure_message(&payload)
                .unwrap_or_else(|| format!("API Error: {}", status_code)),
        })
    }

    // ── Typed helpers ────────────────────────────────────────────────────

    /// GET + `success` envelope check + decode into `T`.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        fallback: &str,
    ) -> Result<T, HttpError> {
        let payload = self.call::<()>(Method::GET, url, None).await?;
        decode(ensure_success(payload, fallback)?)
    }

    /// POST + `success` envelope check + decode into `T`.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: Option<&B>,
        fallback: &str,
    ) -> Result<T, HttpError> {
        let payload = self.call(Method::POST, url, body).await?;
        decode(ensure_success(payload, fallback)?)
    }
}

impl Clone for NuamHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            session: self.session.clone(),
        }
    }
}

pub(crate) fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>, HttpError> {
    serde_json::to_vec(body).map_err(|e| HttpError::RequestEncoding(e.to_string()))
}

/// Reject a payload that carries `success: false`.
pub(crate) fn ensure_success(payload: Value, fallback: &str) -> Result<Value, HttpError> {
    if payload.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(HttpError::Rejected {
            status: None,
            message: failure_message(&payload).unwrap_or_else(|| fallback.to_string()),
        });
    }
    Ok(payload)
}

pub(crate) fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, HttpError> {
    serde_json::from_value(payload).map_err(|e| HttpError::MalformedResponse(e.to_string()))
}

/// Server-provided failure text: `message` from the app envelope, or the
/// framework's `detail` (a string, or a list of validation errors).
fn failure_message(payload: &Value) -> Option<String> {
    if let Some(msg) = payload.get("message").and_then(Value::as_str) {
        if !msg.is_empty() {
            return Some(msg.to_string());
        }
    }
    match payload.get("detail") {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Array(items)) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|i| i.get("msg").and_then(Value::as_str))
                .collect();
            (!msgs.is_empty()).then(|| msgs.join("; "))
        }
        _ => None,
    }
}
