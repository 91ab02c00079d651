//! Detail view for a single diary entry.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_repository_error;
use crate::inbound::http::render;
use crate::inbound::http::state::HttpState;

/// Render one entry in full, or a not-found page for an unknown id.
#[get("/diary/{id}")]
pub async fn detail(state: web::Data<HttpState>, path: web::Path<i32>) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let entry = state
        .entries
        .find_by_id(id)
        .await
        .map_err(map_repository_error)?
        .ok_or_else(|| Error::not_found(format!("no diary entry with id {id}")))?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render::detail_page(&entry)))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test as actix_test};

    use crate::inbound::http::test_utils::{read_body_text, seeded_entry, test_app, test_state};

    #[actix_web::test]
    async fn renders_the_full_entry() {
        let (state, entries) = test_state();
        entries.insert(seeded_entry(7, "2024-02-14", Some("Happy"), Some("cake")));
        let app = actix_test::init_service(test_app(state)).await;

        let request = actix_test::TestRequest::get().uri("/diary/7").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = read_body_text(response).await;
        assert!(body.contains("entry text for 7"));
        assert!(body.contains("<strong>Mood:</strong> Happy"));
    }

    #[actix_web::test]
    async fn unknown_ids_get_a_not_found_page() {
        let (state, _entries) = test_state();
        let app = actix_test::init_service(test_app(state)).await;

        let request = actix_test::TestRequest::get().uri("/diary/42").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = read_body_text(response).await;
        assert!(body.contains("no diary entry with id 42"));
    }
}
