//! Port for the outbound text-analysis call.

use async_trait::async_trait;

use crate::domain::analysis::{
    FEEDBACK_PREFIX, KEYWORDS_PREFIX, MOOD_PREFIX, RECOMMENDED_TASK_PREFIX,
};

/// Errors surfaced while calling the analysis model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisSourceError {
    /// Network transport failed before receiving a response.
    #[error("analysis transport failed: {message}")]
    Transport {
        /// Underlying transport failure description.
        message: String,
    },
    /// The call exceeded the configured timeout.
    #[error("analysis request timed out: {message}")]
    Timeout {
        /// Underlying timeout description.
        message: String,
    },
    /// The API answered with a non-success status.
    #[error("analysis API error (status {status}): {message}")]
    Api {
        /// HTTP status returned by the API.
        status: u16,
        /// Message extracted from the API error body, or a body preview.
        message: String,
    },
    /// A success response that could not be decoded into reply text.
    #[error("analysis response could not be decoded: {message}")]
    Decode {
        /// Decoding failure description.
        message: String,
    },
}

impl AnalysisSourceError {
    /// Create a transport error with the given message.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a timeout error with the given message.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Create an API error for a non-success status.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a decode error with the given message.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Port for analysing one diary entry with a remote text-generation model.
///
/// The returned string is the raw reply text; callers run it through
/// [`crate::domain::parse_analysis`]. Failures are never retried here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisSource: Send + Sync {
    /// Analyse the given diary text and return the raw model reply.
    async fn analyze(&self, text: &str) -> Result<String, AnalysisSourceError>;
}

/// Fixture implementation returning a conforming canned reply.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureAnalysisSource;

#[async_trait]
impl AnalysisSource for FixtureAnalysisSource {
    async fn analyze(&self, _text: &str) -> Result<String, AnalysisSourceError> {
        Ok(format!(
            "{KEYWORDS_PREFIX} rest, walk\n\
             {MOOD_PREFIX} Neutral\n\
             {FEEDBACK_PREFIX} Thanks for writing today.\n\
             {RECOMMENDED_TASK_PREFIX} Take a short walk."
        ))
    }
}
