//! HTTP transport abstraction.
//!
//! The client talks to the backend only through [`Transport`], chosen once
//! when the [`OgsClient`](crate::OgsClient) is built. Responses come back as
//! raw JSON; unwrapping and mapping happen in the caller.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{ApiError, ErrorBody};

/// Request surface used by the resource services.
///
/// `path` is absolute (`/api/groups/3`). `query` is an already encoded query
/// string without the leading `?` and may be empty. A success response with
/// an empty body yields `Value::Null`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str, query: &str) -> Result<Value, ApiError>;

    async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError>;

    async fn put(&self, path: &str, body: Value) -> Result<Value, ApiError>;

    async fn delete(&self, path: &str) -> Result<Value, ApiError>;
}

/// Transport backed by a `reqwest` client.
pub struct HttpTransport {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.bearer_token().map(str::to_string),
        })
    }

    fn url(&self, path: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query)
        }
    }

    async fn send(&self, method: &'static str, request: RequestBuilder) -> Result<Value, ApiError> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        let url = response.url().path().to_string();
        let text = response.text().await?;

        tracing::debug!(method, path = %url, status = status.as_u16(), "Backend response");

        if !status.is_success() {
            return Err(ApiError::from_status(status, ErrorBody::parse(&text)));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(method, path = %url, error = %e, "Backend returned invalid JSON");
            ApiError::Internal(format!("Invalid JSON in response: {}", e))
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &str) -> Result<Value, ApiError> {
        self.send("GET", self.client.get(self.url(path, query))).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.send("POST", self.client.post(self.url(path, "")).json(&body))
            .await
    }

    async fn put(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.send("PUT", self.client.put(self.url(path, "")).json(&body))
            .await
    }

    async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.send("DELETE", self.client.delete(self.url(path, ""))).await
    }
}

/// Request seen by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub query: String,
    pub body: Option<Value>,
}

/// Mock transport for development and testing.
///
/// Records every request and answers with queued responses in order. When
/// the queue is empty it answers `Value::Null`, like an empty 204 body.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<Value, ApiError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response body.
    pub fn respond_with(&self, body: Value) -> &Self {
        self.lock_responses().push_back(Ok(body));
        self
    }

    /// Queues a failed response.
    pub fn fail_with(&self, error: ApiError) -> &Self {
        self.lock_responses().push_back(Err(error));
        self
    }

    /// Returns a snapshot of all requests seen so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Returns the most recent request, if any.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests().pop()
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<Value, ApiError>>> {
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(
        &self,
        method: &'static str,
        path: &str,
        query: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        tracing::debug!(method, path = %path, "Mock: Would send backend request");

        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedRequest {
                method,
                path: path.to_string(),
                query: query.to_string(),
                body,
            });

        self.lock_responses().pop_front().unwrap_or(Ok(Value::Null))
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, path: &str, query: &str) -> Result<Value, ApiError> {
        self.record("GET", path, query, None)
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.record("POST", path, "", Some(body))
    }

    async fn put(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.record("PUT", path, "", Some(body))
    }

    async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.record("DELETE", path, "", None)
    }
}
