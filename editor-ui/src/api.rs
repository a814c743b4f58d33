use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;
use shared_types::SuggestRequest;

use crate::bridge::CompletionClient;
use crate::config::suggest_url;

/// Failure of a completion request
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum SuggestError {
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP error: {0}")]
    Http(u16),
    #[error("Failed to read response: {0}")]
    Decode(String),
}

/// `POST /api/suggest` and return the response body untouched.
pub async fn post_suggest(url: &str, request: &SuggestRequest) -> Result<Value, SuggestError> {
    let response = Request::post(url)
        .json(request)
        .map_err(|e| SuggestError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| SuggestError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(SuggestError::Http(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| SuggestError::Decode(e.to_string()))?;
    Ok(parse_suggest_body(body))
}

/// A 2xx body that is not JSON is handed on as a JSON string.
pub fn parse_suggest_body(body: String) -> Value {
    serde_json::from_str(&body).unwrap_or(Value::String(body))
}

/// Completion client backed by the browser's fetch
#[derive(Debug, Clone)]
pub struct HttpCompletionClient {
    url: String,
}

impl HttpCompletionClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpCompletionClient {
    fn default() -> Self {
        Self::new(suggest_url())
    }
}

#[async_trait(?Send)]
impl CompletionClient for HttpCompletionClient {
    async fn suggest(&self, request: &SuggestRequest) -> Result<Value, SuggestError> {
        post_suggest(&self.url, request).await
    }
}
