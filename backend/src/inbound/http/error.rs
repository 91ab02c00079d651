//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting handlers turn
//! failures into consistent HTML error pages and status codes. Analysis
//! failures are surfaced with their underlying message by contract; internal
//! errors are redacted to a generic line and logged in full.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use tracing::error;

use crate::domain::{Error, ErrorCode};

use super::render;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Promote a read-path repository failure to an internal error.
///
/// Only the read paths use this: a create failure during analyze is handled
/// in the handler (logged, saved flag cleared) and never becomes an HTTP
/// error.
pub(crate) fn map_repository_error(error: crate::domain::ports::EntryRepositoryError) -> Error {
    Error::internal(error.to_string())
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::AnalysisFailed | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let shown = if matches!(self.code(), ErrorCode::InternalError) {
            error!(message = self.message(), "internal error surfaced to client");
            "Internal server error"
        } else {
            self.message()
        };

        HttpResponse::build(self.status_code())
            .content_type(ContentType::html())
            .body(render::error_page(self.status_code(), shown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Error::invalid_request("empty"), StatusCode::BAD_REQUEST)]
    #[case(Error::not_found("gone"), StatusCode::NOT_FOUND)]
    #[case(Error::analysis_failed("api down"), StatusCode::INTERNAL_SERVER_ERROR)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn codes_map_to_expected_statuses(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
    }

    #[actix_web::test]
    async fn analysis_failures_surface_their_message() {
        let response = Error::analysis_failed("analysis API error (status 529): overloaded")
            .error_response();
        let body = actix_web::body::to_bytes(response.into_body())
            .await
            .expect("body should collect");

        assert!(String::from_utf8_lossy(&body).contains("overloaded"));
    }

    #[actix_web::test]
    async fn internal_detail_is_redacted() {
        let response = Error::internal("connection string leaked").error_response();
        let body = actix_web::body::to_bytes(response.into_body())
            .await
            .expect("body should collect");
        let text = String::from_utf8_lossy(&body);

        assert!(text.contains("Internal server error"));
        assert!(!text.contains("connection string"));
    }
}
