use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputMessage {
    pub role: String,
    pub content: String,
}

/// Body of a `POST /v1/responses` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsesRequest {
    pub model: String,
    pub input: Vec<InputMessage>,
}

impl InputMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }
}

impl ResponsesRequest {
    /// Persona prompt first, then the caller's question verbatim.
    pub fn for_question(
        model: impl Into<String>,
        system_prompt: impl Into<String>,
        question: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            input: vec![InputMessage::system(system_prompt), InputMessage::user(question)],
        }
    }
}
