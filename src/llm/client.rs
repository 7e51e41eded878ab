use super::types::ResponsesRequest;
use crate::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends one request and returns the decoded JSON body. A non-2xx status
    /// becomes `Error::Upstream` carrying the raw body text.
    async fn create_response(&self, api_key: &str, request: ResponsesRequest) -> Result<Value>;
}

pub struct OpenAiClient {
    http: reqwest::Client,
    endpoint: String,
}

impl OpenAiClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn create_response(&self, api_key: &str, request: ResponsesRequest) -> Result<Value> {
        debug!(
            "Creating response with model {} and {} input messages",
            request.model,
            request.input.len()
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(Error::upstream(status.as_u16(), body));
        }

        // A 2xx body that is not JSON is a decoding failure, not a transport one
        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text)?;
        debug!("Received upstream response with status {}", status);

        Ok(body)
    }
}
