//! HTTP API Client
//!
//! `fetch`-based [`Transport`] for the shared `timekeeper` client.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;
use timekeeper::client::{
    normalize_base_url, ApiClient, ApiRequest, ClientError, ClientResult, Method, Transport,
    DEFAULT_BASE_URL,
};

/// localStorage key holding a user-chosen backend URL
pub const API_URL_KEY: &str = "timekeeper_api_url";

/// Pick the backend URL: stored value, then build-time value, then default
pub fn resolve_api_base(stored: Option<String>, built_in: Option<&str>) -> String {
    let url = stored
        .filter(|s| !s.trim().is_empty())
        .or_else(|| built_in.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    normalize_base_url(&url)
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_URL_KEY).ok().flatten());
    resolve_api_base(stored, option_env!("TIMEKEEPER_API_URL"))
}

/// Typed client against the configured backend
pub fn client() -> ApiClient<GlooTransport> {
    ApiClient::new(GlooTransport::new(&get_api_base()))
}

#[derive(Debug, Clone)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
        }
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> ClientResult<Value> {
        let url = format!("{}{}", self.base_url, request.path);

        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
        .header("Content-Type", "application/json");

        let sent = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ClientError::Network(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        };
        let response = sent.map_err(|e| ClientError::Network(e.to_string()))?;

        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ClientError::request_failed(
                response.status(),
                text,
                &response.status_text(),
            ));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(ClientError::from)
    }
}
