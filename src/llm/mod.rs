mod client;
pub mod extract;
mod types;

pub use client::{CompletionClient, OpenAiClient};
pub use extract::{UpstreamShape, extract_answer};
pub use types::{InputMessage, ResponsesRequest};
