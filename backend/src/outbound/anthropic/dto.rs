//! DTOs for the Anthropic Messages API.
//!
//! The adapter serialises one request DTO and decodes success and error
//! bodies into these transport types before mapping to domain values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(super) struct MessagesRequestDto<'a> {
    pub(super) model: &'a str,
    pub(super) max_tokens: u32,
    pub(super) temperature: f32,
    pub(super) messages: Vec<MessageDto<'a>>,
}

#[derive(Debug, Serialize)]
pub(super) struct MessageDto<'a> {
    pub(super) role: &'a str,
    pub(super) content: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct MessagesResponseDto {
    #[serde(default)]
    pub(super) content: Vec<ContentBlockDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ContentBlockDto {
    #[serde(rename = "type")]
    pub(super) block_type: String,
    #[serde(default)]
    pub(super) text: Option<String>,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(super) struct ApiErrorEnvelopeDto {
    pub(super) error: Option<ApiErrorDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ApiErrorDto {
    pub(super) message: String,
}

impl MessagesResponseDto {
    /// Extract the reply text from the first text content block.
    pub(super) fn into_reply_text(self) -> Result<String, String> {
        self.content
            .into_iter()
            .find(|block| block.block_type == "text")
            .and_then(|block| block.text)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| "response contained no text content block".to_owned())
    }
}
