//! HTTP client for the Logseq graph API.
//!
//! The API is a single POST endpoint taking `{"method": ..., "args": [...]}`
//! with a bearer token. Responses are plain JSON values; Logseq answers
//! `null` (or nothing) when the HTTP server is enabled but has no result,
//! which this client reports as the service not running.

use crate::types::{Block, CurrentGraph, Page};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

/// Errors from graph lookups and the page-to-URI mapping.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("empty response, ensure the Logseq HTTP server is running")]
    ServiceDown,

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("journal page {0:?} has no journal day")]
    MissingJournalDay(String),

    #[error("cannot build a file URI for {0:?}")]
    InvalidPath(String),
}

/// The five graph operations the capability handlers consume. Implemented
/// over HTTP by [`HttpClient`]; tests substitute a mock.
#[async_trait]
pub trait GraphQuery: Send + Sync {
    /// Name and filesystem root of the graph Logseq has open.
    async fn current_graph(&self) -> Result<CurrentGraph, GraphError>;

    /// Fetch a page by its (original or lowercased) name.
    async fn page_by_name(&self, name: &str) -> Result<Page, GraphError>;

    /// Fetch a page by its numeric id, as referenced from a block.
    async fn page_by_id(&self, id: i64) -> Result<Page, GraphError>;

    /// Fetch a block by UUID, optionally with its direct children.
    async fn block(&self, uuid: &str, include_children: bool) -> Result<Block, GraphError>;

    /// Execute a query expression, returning matching blocks in result
    /// order.
    async fn query(&self, expression: &str) -> Result<Vec<Block>, GraphError>;
}

/// Stateless reqwest-backed [`GraphQuery`] implementation. One request per
/// call; no session, no retry, no backoff.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpClient {
    /// Client for a Logseq instance listening on `localhost:<port>`.
    pub fn new(port: u16, token: String) -> Self {
        Self::with_base_url(format!("http://localhost:{port}/api"), token)
    }

    /// Client with an explicit endpoint (for tests against mock servers).
    pub fn with_base_url(base_url: String, token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            token,
        }
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, args: Value) -> Result<T, GraphError> {
        debug!(%method, "graph api call");
        let response = self
            .http
            .post(&self.base_url)
            .bearer_auth(&self.token)
            .json(&json!({ "method": method, "args": args }))
            .send()
            .await?;

        let status = response.status().as_u16();
        if status >= 400 {
            let body = response.text().await.unwrap_or_else(|_| "(no body)".into());
            return Err(GraphError::Api { status, body });
        }

        let body = response.text().await?;
        if body.is_empty() || body == "null" {
            return Err(GraphError::ServiceDown);
        }
        serde_json::from_str(&body).map_err(|err| GraphError::InvalidResponse(err.to_string()))
    }
}

#[async_trait]
impl GraphQuery for HttpClient {
    async fn current_graph(&self) -> Result<CurrentGraph, GraphError> {
        self.call("logseq.App.getCurrentGraph", Value::Null).await
    }

    async fn page_by_name(&self, name: &str) -> Result<Page, GraphError> {
        self.call("logseq.App.getPage", json!([name])).await
    }

    async fn page_by_id(&self, id: i64) -> Result<Page, GraphError> {
        self.call("logseq.App.getPage", json!([id])).await
    }

    async fn block(&self, uuid: &str, include_children: bool) -> Result<Block, GraphError> {
        self.call(
            "logseq.App.getBlock",
            json!([uuid, { "includeChildren": include_children }]),
        )
        .await
    }

    async fn query(&self, expression: &str) -> Result<Vec<Block>, GraphError> {
        self.call("logseq.App.q", json!([expression])).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_points_at_localhost_api_endpoint() {
        let client = HttpClient::new(12315, "secret".into());
        assert_eq!(client.base_url, "http://localhost:12315/api");
    }

    #[test]
    fn with_base_url_keeps_endpoint_verbatim() {
        let client = HttpClient::with_base_url("http://127.0.0.1:9999/api".into(), String::new());
        assert_eq!(client.base_url, "http://127.0.0.1:9999/api");
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = GraphError::Api {
            status: 401,
            body: "unauthorized".into(),
        };
        assert_eq!(err.to_string(), "API error (status 401): unauthorized");
        assert!(GraphError::ServiceDown.to_string().contains("Logseq HTTP server"));
    }
}
