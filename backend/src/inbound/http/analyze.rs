//! Analyze write path: validate, call the model, parse, persist, render.
//!
//! This is the only handler that composes every port. An analysis failure
//! aborts the request with the underlying message; a persistence failure
//! does not abort it, and the user still gets the analysis, flagged as not
//! saved.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, post, web};
use chrono::Local;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{Error, NewEntry, parse_analysis};
use crate::inbound::http::ApiResult;
use crate::inbound::http::render;
use crate::inbound::http::state::HttpState;

/// Placeholder shown in the submission textarea.
///
/// A submission equal to this string is treated the same as an empty one:
/// the user sent the form without writing anything.
pub const ENTRY_PLACEHOLDER: &str = "Write about your day...";

/// Form body for `POST /analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    /// The submitted diary text.
    pub diary: String,
}

/// Analyze a submission and persist the derived fields.
#[post("/analyze")]
pub async fn analyze(
    state: web::Data<HttpState>,
    form: web::Form<AnalyzeForm>,
) -> ApiResult<HttpResponse> {
    let text = form.into_inner().diary;
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == ENTRY_PLACEHOLDER {
        return Err(Error::invalid_request("diary entry is empty"));
    }

    let raw = state
        .analysis
        .analyze(&text)
        .await
        .map_err(|err| Error::analysis_failed(err.to_string()))?;
    let analysis = parse_analysis(&raw);

    let entry = NewEntry::from_analysis(Local::now().date_naive(), text, &analysis);
    let saved = match state.entries.create(entry).await {
        Ok(id) => {
            debug!(id, "diary entry persisted");
            true
        }
        Err(err) => {
            warn!(error = %err, "diary entry not persisted");
            false
        }
    };

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render::analysis_page(&analysis, saved)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test as actix_test};
    use rstest::rstest;

    use crate::domain::ports::{AnalysisSourceError, MockAnalysisSource, MockEntryRepository};
    use crate::inbound::http::state::HttpState;
    use crate::inbound::http::test_utils::{
        CannedAnalysisSource, read_body_text, test_app, test_state,
    };

    use super::ENTRY_PLACEHOLDER;

    fn post_diary(diary: &str) -> actix_test::TestRequest {
        actix_test::TestRequest::post()
            .uri("/analyze")
            .set_form([("diary", diary)])
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("   \n  ")]
    #[case::placeholder(ENTRY_PLACEHOLDER)]
    #[actix_web::test]
    async fn rejects_empty_and_placeholder_submissions(#[case] diary: &str) {
        let (state, entries) = test_state();
        let app = actix_test::init_service(test_app(state)).await;

        let response = actix_test::call_service(&app, post_diary(diary).to_request()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(entries.is_empty(), "no record may be created");
    }

    #[actix_web::test]
    async fn persists_parsed_fields_and_reports_saved() {
        let (state, entries) = test_state();
        let app = actix_test::init_service(test_app(state)).await;

        let response = actix_test::call_service(&app, post_diary("long day at work").to_request()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_body_text(response).await;
        assert!(body.contains("<strong>Mood:</strong> Neutral"));
        assert!(body.contains("<strong>Saved:</strong> Yes"));

        let stored = entries.snapshot();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].text, "long day at work");
        assert_eq!(stored[0].mood.as_deref(), Some("Neutral"));
        assert_eq!(stored[0].keywords.as_deref(), Some("rest, walk"));
    }

    #[actix_web::test]
    async fn malformed_replies_degrade_to_sentinels_and_store_nulls() {
        let (state, entries) = test_state();
        let state = HttpState::new(
            state.entries.clone(),
            Arc::new(CannedAnalysisSource::new("the model rambled instead")),
        );
        let app = actix_test::init_service(test_app(state)).await;

        let response = actix_test::call_service(&app, post_diary("odd day").to_request()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_body_text(response).await;
        assert!(body.contains("<strong>Keywords:</strong> Not available"));
        assert!(body.contains("<strong>Mood:</strong> Not available"));

        let stored = entries.snapshot();
        assert_eq!(stored[0].mood, None);
        assert_eq!(stored[0].keywords, None);
    }

    #[actix_web::test]
    async fn analysis_failure_surfaces_as_a_server_error() {
        let mut analysis = MockAnalysisSource::new();
        analysis
            .expect_analyze()
            .returning(|_| Err(AnalysisSourceError::api(529, "overloaded")));
        let (state, entries) = test_state();
        let state = HttpState::new(state.entries.clone(), Arc::new(analysis));
        let app = actix_test::init_service(test_app(state)).await;

        let response = actix_test::call_service(&app, post_diary("a day").to_request()).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = read_body_text(response).await;
        assert!(body.contains("overloaded"), "failure message is surfaced");
        assert!(entries.is_empty(), "nothing may be stored on failure");
    }

    #[actix_web::test]
    async fn store_failure_still_returns_the_analysis_unsaved() {
        let mut failing_repo = MockEntryRepository::new();
        failing_repo.expect_create().returning(|_| {
            Err(crate::domain::ports::EntryRepositoryError::connection(
                "disk full",
            ))
        });
        let (state, _entries) = test_state();
        let state = HttpState::new(Arc::new(failing_repo), state.analysis.clone());
        let app = actix_test::init_service(test_app(state)).await;

        let response = actix_test::call_service(&app, post_diary("a day worth keeping").to_request()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_body_text(response).await;
        assert!(body.contains("<strong>Mood:</strong> Neutral"));
        assert!(body.contains("<strong>Saved:</strong> No"));
    }
}
