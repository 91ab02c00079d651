//! Reqwest-backed analysis source adapter.
//!
//! This adapter owns transport details only: prompt construction, request
//! serialisation, timeout and HTTP error mapping, and JSON decoding of the
//! Messages API reply into raw text. Parsing the four-line format happens in
//! the domain.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::dto::{ApiErrorEnvelopeDto, MessageDto, MessagesRequestDto, MessagesResponseDto};
use crate::domain::analysis::{
    FEEDBACK_PREFIX, KEYWORDS_PREFIX, MOOD_PREFIX, RECOMMENDED_TASK_PREFIX,
};
use crate::domain::ports::{AnalysisSource, AnalysisSourceError};

/// Model used when `ANTHROPIC_MODEL` is not configured.
pub const DEFAULT_MODEL: &str = "claude-3-haiku-20240307";

const MESSAGES_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 300;
const TEMPERATURE: f32 = 0.7;

/// Analysis source adapter performing HTTP POST requests against the
/// Anthropic Messages API.
pub struct AnthropicHttpSource {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl AnthropicHttpSource {
    /// Build an adapter using a reqwest client with an explicit request
    /// timeout. Timeout expiry surfaces as
    /// [`AnalysisSourceError::Timeout`].
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: MESSAGES_ENDPOINT.to_owned(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }
}

#[async_trait]
impl AnalysisSource for AnthropicHttpSource {
    async fn analyze(&self, text: &str) -> Result<String, AnalysisSourceError> {
        let request = MessagesRequestDto {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            messages: vec![MessageDto {
                role: "user",
                content: build_analysis_prompt(text),
            }],
        };

        let response = self
            .client
            .post(self.endpoint.as_str())
            .header("x-api-key", self.api_key.as_str())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        decode_reply(body.as_ref())
    }
}

/// Instructional template sent with every analysis request.
///
/// The requested reply format mirrors the prefixes the domain parser matches
/// on; changing either side requires changing both.
fn build_analysis_prompt(entry: &str) -> String {
    format!(
        "You are a diary analysis assistant. Read the diary entry below, \
         extract its keywords, judge the overall mood as Happy, Sad, or \
         Neutral, give brief feedback, and recommend one positive task.\n\
         Diary entry: {entry}\n\
         Reply in exactly this format:\n\
         {KEYWORDS_PREFIX} ...\n\
         {MOOD_PREFIX} ...\n\
         {FEEDBACK_PREFIX} ...\n\
         {RECOMMENDED_TASK_PREFIX} ..."
    )
}

fn decode_reply(body: &[u8]) -> Result<String, AnalysisSourceError> {
    let decoded: MessagesResponseDto = serde_json::from_slice(body).map_err(|error| {
        AnalysisSourceError::decode(format!("invalid messages JSON payload: {error}"))
    })?;
    decoded.into_reply_text().map_err(AnalysisSourceError::decode)
}

fn map_transport_error(error: reqwest::Error) -> AnalysisSourceError {
    if error.is_timeout() {
        AnalysisSourceError::timeout(error.to_string())
    } else {
        AnalysisSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> AnalysisSourceError {
    let message = api_error_message(body).unwrap_or_else(|| {
        let preview = body_preview(body);
        if preview.is_empty() {
            format!("status {}", status.as_u16())
        } else {
            preview
        }
    });

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            AnalysisSourceError::timeout(message)
        }
        _ => AnalysisSourceError::api(status.as_u16(), message),
    }
}

/// Pull the human-readable message out of an Anthropic error envelope.
fn api_error_message(body: &[u8]) -> Option<String> {
    let envelope: ApiErrorEnvelopeDto = serde_json::from_slice(body).ok()?;
    envelope.error.map(|error| error.message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for the non-network mapping helpers.

    use super::*;
    use rstest::rstest;

    #[test]
    fn prompt_requests_all_four_reply_prefixes() {
        let prompt = build_analysis_prompt("slept badly, long commute");

        assert!(prompt.contains("Diary entry: slept badly, long commute"));
        for prefix in [
            KEYWORDS_PREFIX,
            MOOD_PREFIX,
            FEEDBACK_PREFIX,
            RECOMMENDED_TASK_PREFIX,
        ] {
            assert!(
                prompt.contains(&format!("{prefix} ...")),
                "prompt should request the {prefix} line"
            );
        }
    }

    #[test]
    fn decodes_reply_text_from_a_success_body() {
        let body = br#"{ "content": [ { "type": "text", "text": "Keywords: sun" } ] }"#;
        assert_eq!(
            decode_reply(body).expect("body should decode"),
            "Keywords: sun"
        );
    }

    #[test]
    fn invalid_json_maps_to_decode_errors() {
        let error = decode_reply(b"<html>bad gateway</html>").expect_err("decode should fail");
        assert!(
            matches!(error, AnalysisSourceError::Decode { .. }),
            "non-JSON success bodies should map to Decode"
        );
    }

    #[rstest]
    #[case::request_timeout(StatusCode::REQUEST_TIMEOUT, true)]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT, true)]
    #[case::unauthorised(StatusCode::UNAUTHORIZED, false)]
    #[case::rate_limited(StatusCode::TOO_MANY_REQUESTS, false)]
    #[case::overloaded(StatusCode::from_u16(529).expect("valid status"), false)]
    fn maps_statuses_to_timeout_or_api_errors(
        #[case] status: StatusCode,
        #[case] expect_timeout: bool,
    ) {
        let error = map_status_error(status, b"");
        if expect_timeout {
            assert!(
                matches!(error, AnalysisSourceError::Timeout { .. }),
                "timeout statuses should map to Timeout"
            );
        } else {
            assert!(
                matches!(error, AnalysisSourceError::Api { .. }),
                "other statuses should map to Api"
            );
        }
    }

    #[test]
    fn api_errors_prefer_the_envelope_message() {
        let body = br#"{ "type": "error", "error": { "type": "authentication_error", "message": "invalid x-api-key" } }"#;
        let error = map_status_error(StatusCode::UNAUTHORIZED, body);

        assert_eq!(
            error,
            AnalysisSourceError::api(401, "invalid x-api-key"),
            "the envelope message should be surfaced verbatim"
        );
    }

    #[test]
    fn api_errors_fall_back_to_a_body_preview() {
        let error = map_status_error(StatusCode::BAD_GATEWAY, b"upstream\nexploded");
        assert_eq!(error, AnalysisSourceError::api(502, "upstream exploded"));
    }

    #[test]
    fn empty_error_bodies_fall_back_to_the_status() {
        let error = map_status_error(StatusCode::INTERNAL_SERVER_ERROR, b"");
        assert_eq!(error, AnalysisSourceError::api(500, "status 500"));
    }
}
