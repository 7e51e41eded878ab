//! Locating the answer text inside an upstream response body.
//!
//! The Responses API, its `output_text` convenience field and the legacy chat
//! completions format all show up in practice. The body is classified into
//! exactly one shape, in that order of precedence, and only that shape is read.

use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamShape<'a> {
    /// Non-blank top-level `output_text`.
    OutputText(&'a str),
    /// Top-level `output` array of message items.
    Output(&'a [Value]),
    /// Legacy `choices` array.
    Choices(&'a [Value]),
    Unrecognized,
}

impl<'a> UpstreamShape<'a> {
    pub fn classify(body: &'a Value) -> Self {
        if let Some(text) = body.get("output_text").and_then(Value::as_str) {
            if !text.trim().is_empty() {
                return Self::OutputText(text);
            }
        }

        if let Some(items) = body.get("output").and_then(Value::as_array) {
            return Self::Output(items);
        }

        if let Some(choices) = body.get("choices").and_then(Value::as_array) {
            return Self::Choices(choices);
        }

        Self::Unrecognized
    }

    /// The answer this shape carries, or `None` if it is blank.
    pub fn answer(&self) -> Option<String> {
        let answer = match self {
            Self::OutputText(text) => text.to_string(),
            Self::Output(items) => items
                .iter()
                .flat_map(content_parts)
                .collect::<Vec<_>>()
                .join("\n")
                .trim()
                .to_string(),
            Self::Choices(choices) => choices
                .first()
                .and_then(|choice| choice.pointer("/message/content"))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            Self::Unrecognized => String::new(),
        };

        if answer.trim().is_empty() {
            None
        } else {
            Some(answer)
        }
    }
}

/// Text parts of one `output` item, in order.
fn content_parts(item: &Value) -> Vec<&str> {
    match item.get("content") {
        Some(Value::String(text)) if !text.is_empty() => vec![text.as_str()],
        Some(Value::Array(fragments)) => fragments
            .iter()
            .filter_map(|fragment| fragment.get("text").and_then(Value::as_str))
            .collect(),
        _ => Vec::new(),
    }
}

pub fn extract_answer(body: &Value) -> Option<String> {
    UpstreamShape::classify(body).answer()
}
