//! Central domain error payload.
//!
//! Transport agnostic: the HTTP adapter maps [`ErrorCode`] values to status
//! codes and renders the message, redacting internal detail. Port adapters
//! carry their own `thiserror` enums and are converted into this type at the
//! handler boundary.

/// Stable machine-readable category for a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// The outbound analysis call could not complete.
    AnalysisFailed,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

/// Domain error carrying a category and a human-readable message.
///
/// Analysis failures keep their underlying message when rendered (the
/// contract is to surface the cause, not retry); internal errors are
/// redacted by the HTTP adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Create an error with an explicit code.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::AnalysisFailed`].
    #[must_use]
    pub fn analysis_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AnalysisFailed, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
