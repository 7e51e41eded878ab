use ask_proxy::{
    Error, Result,
    llm::{CompletionClient, ResponsesRequest},
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// What the mock answers with on every call.
#[derive(Debug, Clone)]
pub enum MockReply {
    Json(Value),
    Upstream { status: u16, body: String },
    Failure(String),
}

/// Mock completion client that records every call it receives
#[derive(Debug)]
pub struct MockCompletionClient {
    pub reply: MockReply,
    pub calls: Arc<Mutex<Vec<(String, ResponsesRequest)>>>,
}

impl MockCompletionClient {
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_json(body: Value) -> Self {
        Self::new(MockReply::Json(body))
    }

    pub fn with_upstream_error(status: u16, body: &str) -> Self {
        Self::new(MockReply::Upstream {
            status,
            body: body.to_string(),
        })
    }

    pub fn with_failure(message: &str) -> Self {
        Self::new(MockReply::Failure(message.to_string()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn get_calls(&self) -> Vec<(String, ResponsesRequest)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn create_response(&self, api_key: &str, request: ResponsesRequest) -> Result<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((api_key.to_string(), request));

        match &self.reply {
            MockReply::Json(body) => Ok(body.clone()),
            MockReply::Upstream { status, body } => Err(Error::upstream(*status, body.clone())),
            MockReply::Failure(message) => Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                message.clone(),
            ))),
        }
    }
}
