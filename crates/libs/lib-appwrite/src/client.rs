//! # Appwrite Client
//!
//! HTTP client for the hosted Appwrite REST API. Holds the backend
//! identifiers, an optional server API key and the session fallback cookie.

use std::sync::Arc;

use lib_core::{AppError, BackendConfig, Result};
use lib_utils::time::{elapsed_ms, now_utc};
use parking_lot::RwLock;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::ErrorResponse;

const PROJECT_HEADER: &str = "X-Appwrite-Project";
const API_KEY_HEADER: &str = "X-Appwrite-Key";
const RESPONSE_FORMAT_HEADER: &str = "X-Appwrite-Response-Format";
const RESPONSE_FORMAT: &str = "1.5.0";
/// Session cookie echoed in a header when the browser blocks third-party cookies.
const FALLBACK_COOKIES_HEADER: &str = "X-Fallback-Cookies";

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Cheaply clonable client; clones share the connection pool and the session.
#[derive(Clone)]
pub struct AppwriteClient {
    pub(crate) client: Client,
    config: Arc<BackendConfig>,
    api_key: Option<String>,
    session: Arc<RwLock<Option<String>>>,
}

impl std::fmt::Debug for AppwriteClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppwriteClient")
            .field("endpoint", &self.config.endpoint)
            .field("project_id", &self.config.project_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("has_session", &self.session.read().is_some())
            .finish()
    }
}

impl AppwriteClient {
    /// Create a client for `config`.
    ///
    /// Natively the client gets a 10 second timeout; in the browser fetch
    /// handles timeouts itself.
    pub fn new(config: BackendConfig) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        #[cfg(target_arch = "wasm32")]
        let client = Client::new();

        Self {
            client,
            config: Arc::new(config),
            api_key: None,
            session: Arc::new(RwLock::new(None)),
        }
    }

    /// Authenticate as a server with an API key instead of a user session.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Current session fallback cookie, for persisting across page loads.
    pub fn session_token(&self) -> Option<String> {
        self.session.read().clone()
    }

    /// Restore a previously persisted session fallback cookie.
    pub fn restore_session(&self, token: Option<String>) {
        *self.session.write() = token.filter(|token| !token.is_empty());
    }

    pub(crate) fn remember_session(&self, response: &Response) {
        let token = response
            .headers()
            .get(FALLBACK_COOKIES_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty());

        if let Some(token) = token {
            *self.session.write() = Some(token.to_string());
        }
    }

    pub(crate) fn forget_session(&self) {
        *self.session.write() = None;
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.endpoint, path)
    }

    /// Path of a collection's documents endpoint.
    pub(crate) fn documents_path(&self, collection_id: &str) -> String {
        format!(
            "/databases/{}/collections/{}/documents",
            self.config.database_id, collection_id
        )
    }

    /// Start a request with the project, key and session headers set.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self
            .client
            .request(method, self.url(path))
            .header(PROJECT_HEADER, &self.config.project_id)
            .header(RESPONSE_FORMAT_HEADER, RESPONSE_FORMAT);

        if let Some(api_key) = &self.api_key {
            request = request.header(API_KEY_HEADER, api_key);
        }
        if let Some(token) = self.session.read().as_deref() {
            request = request.header(FALLBACK_COOKIES_HEADER, token);
        }

        request
    }
}

// region:    --- Response handling

/// Send `request`, check the status and return the raw response.
///
/// Network failures and non-2xx statuses become `kind(..)`, except 404 which
/// becomes [`AppError::NotFound`].
pub(crate) async fn send(
    request: RequestBuilder,
    kind: fn(String) -> AppError,
    action: &'static str,
) -> Result<Response> {
    let start = now_utc();

    let response = request.send().await.map_err(|e| {
        tracing::error!(error = %e, action, "Network error");
        kind(format!("Network error: {}", e))
    })?;

    let status = response.status();
    if status.is_success() {
        tracing::info!(action, status = status.as_u16(), duration_ms = elapsed_ms(start), "Request succeeded");
        return Ok(response);
    }

    let message = error_message(response).await;
    tracing::warn!(
        action,
        status = status.as_u16(),
        error = %message,
        duration_ms = elapsed_ms(start),
        "Request failed"
    );

    Err(match status {
        StatusCode::NOT_FOUND => AppError::NotFound(message),
        _ => kind(message),
    })
}

/// Send `request` and decode a JSON body.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    kind: fn(String) -> AppError,
    action: &'static str,
) -> Result<T> {
    let response = send(request, kind, action).await?;

    response.json::<T>().await.map_err(|e| {
        tracing::error!(error = %e, action, "Response parse error");
        AppError::Decoding(format!("Failed to parse response: {}", e))
    })
}

async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) => serde_json::from_str::<ErrorResponse>(&body)
            .map(|error| error.message)
            .unwrap_or_else(|_| format!("HTTP {}: {}", status.as_u16(), body.trim())),
        Err(e) => format!("HTTP {}: {}", status.as_u16(), e),
    }
}

// endregion: --- Response handling

/// New unique id for documents and files.
pub(crate) fn unique_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use reqwest::Request;
    use serde_json::Value;

    pub(crate) fn test_client() -> AppwriteClient {
        AppwriteClient::new(BackendConfig::new("https://cloud.appwrite.io/v1", "proj-1", "db-1"))
    }

    /// JSON body of a built request.
    pub(crate) fn body_json(request: &Request) -> Value {
        let bytes = request
            .body()
            .and_then(|body| body.as_bytes())
            .expect("request should carry a buffered body");
        serde_json::from_slice(bytes).expect("request body should be JSON")
    }

    /// Decoded `queries[]` parameters of a built request, in order.
    pub(crate) fn query_values(request: &Request) -> Vec<Value> {
        request
            .url()
            .query_pairs()
            .filter(|(key, _)| key == "queries[]")
            .map(|(_, value)| serde_json::from_str(&value).expect("query should be JSON"))
            .collect()
    }

    fn client() -> AppwriteClient {
        test_client()
    }

    #[test]
    fn test_documents_path() {
        let client = client();
        assert_eq!(
            client.url(&client.documents_path("products")),
            "https://cloud.appwrite.io/v1/databases/db-1/collections/products/documents"
        );
    }

    #[test]
    fn test_request_sets_project_header() {
        let request = client().request(Method::GET, "/account").build().unwrap();

        assert_eq!(request.url().as_str(), "https://cloud.appwrite.io/v1/account");
        assert_eq!(request.headers()[PROJECT_HEADER], "proj-1");
        assert!(request.headers().get(API_KEY_HEADER).is_none());
        assert!(request.headers().get(FALLBACK_COOKIES_HEADER).is_none());
    }

    #[test]
    fn test_session_and_key_headers() {
        let client = client().with_api_key("secret");
        client.restore_session(Some("{\"a_session_proj-1\":\"abc\"}".to_string()));

        let request = client.request(Method::GET, "/account").build().unwrap();
        assert_eq!(request.headers()[API_KEY_HEADER], "secret");
        assert_eq!(
            request.headers()[FALLBACK_COOKIES_HEADER],
            "{\"a_session_proj-1\":\"abc\"}"
        );

        client.forget_session();
        assert_eq!(client.session_token(), None);
    }

    #[test]
    fn test_clones_share_session() {
        let client = client();
        let clone = client.clone();
        client.restore_session(Some("token".to_string()));
        assert_eq!(clone.session_token().as_deref(), Some("token"));

        clone.restore_session(Some(String::new()));
        assert_eq!(client.session_token(), None);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let debug = format!("{:?}", client().with_api_key("secret"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_unique_id_shape() {
        let id = unique_id();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(id, unique_id());
    }
}
