use super::types::{AskResponse, ErrorResponse, HealthResponse};
use crate::{
    Error,
    config::UpstreamConfig,
    llm::{CompletionClient, ResponsesRequest, extract_answer},
};
use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{Method, StatusCode},
    response::Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{Instrument, debug, error, info, info_span, warn};
use uuid::Uuid;

pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const INVALID_QUESTION: &str = "Missing or invalid \"question\"";
pub const MISSING_API_KEY: &str = "Missing OPENAI_API_KEY";
pub const UPSTREAM_ERROR: &str = "OpenAI API error";
pub const EMPTY_ANSWER_FALLBACK: &str = "Hmm, I came up empty. Try rephrasing that?";

const LOG_PREVIEW_CHARS: usize = 500;

pub type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn CompletionClient>,
    pub upstream: Arc<UpstreamConfig>,
}

impl AppState {
    pub fn new(client: Arc<dyn CompletionClient>, upstream: UpstreamConfig) -> Self {
        Self {
            client,
            upstream: Arc::new(upstream),
        }
    }
}

/// `/api/ask`. Routed for every method so that non-POST requests get the
/// JSON 405 body instead of axum's empty one. The body rejection is held
/// until after the method gate so oversized non-POST requests still get 405.
pub async fn ask(
    State(state): State<AppState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AskResponse>, ApiError> {
    if method != Method::POST {
        return Err(reject(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED));
    }

    let body = body.map_err(|rejection| {
        warn!("Rejected request body: {}", rejection.body_text());
        reject(rejection.status(), &rejection.body_text())
    })?;

    let request_id = Uuid::new_v4();
    let answer = answer_question(&state, &body)
        .instrument(info_span!("ask", %request_id))
        .await?;

    Ok(Json(AskResponse { answer }))
}

async fn answer_question(state: &AppState, body: &[u8]) -> Result<String, ApiError> {
    let payload: Value = if body.is_empty() {
        Value::Object(Default::default())
    } else {
        serde_json::from_slice(body).map_err(|e| failure(state, e.into()))?
    };

    let question = match payload.get("question").and_then(Value::as_str) {
        Some(question) if !question.is_empty() => question,
        _ => return Err(reject(StatusCode::BAD_REQUEST, INVALID_QUESTION)),
    };
    debug!("Received question: {}", question);

    let Some(api_key) = state.upstream.api_key() else {
        error!("Rejecting question: no API key configured");
        return Err(reject(StatusCode::INTERNAL_SERVER_ERROR, MISSING_API_KEY));
    };

    let request = ResponsesRequest::for_question(
        &state.upstream.model,
        &state.upstream.system_prompt,
        question,
    );
    let response = state
        .client
        .create_response(api_key, request)
        .await
        .map_err(|e| failure(state, e))?;

    match extract_answer(&response) {
        Some(answer) => {
            info!("Answered question ({} chars)", answer.len());
            Ok(answer)
        }
        None => {
            warn!(
                "Empty answer parsed from upstream: {}",
                preview(&response, LOG_PREVIEW_CHARS)
            );
            Ok(EMPTY_ANSWER_FALLBACK.to_string())
        }
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn not_found() -> ApiError {
    reject(StatusCode::NOT_FOUND, "Not found")
}

fn reject(status: StatusCode, message: &str) -> ApiError {
    (status, Json(ErrorResponse::new(message)))
}

/// Maps anything that went wrong after validation to a 500.
fn failure(state: &AppState, err: Error) -> ApiError {
    match err {
        Error::Upstream { status, body } => {
            error!("OpenAI API error ({}): {}", status, body);
            let mut response = ErrorResponse::new(UPSTREAM_ERROR);
            if state.upstream.expose_error_details {
                response = response.with_details(body);
            }
            (StatusCode::INTERNAL_SERVER_ERROR, Json(response))
        }
        other => {
            error!("Failed to answer question: {}", other);
            let message = other.to_string();
            let message = if message.is_empty() {
                "Unknown error".to_string()
            } else {
                message
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::new(message)))
        }
    }
}

fn preview(body: &Value, max_chars: usize) -> String {
    body.to_string().chars().take(max_chars).collect()
}
