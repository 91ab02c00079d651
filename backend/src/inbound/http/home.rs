//! Home view: entry history plus the submission form.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_repository_error;
use crate::inbound::http::render;
use crate::inbound::http::state::HttpState;

/// Render the full entry history and the input form.
#[get("/")]
pub async fn home(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let entries = state.entries.list_all().await.map_err(map_repository_error)?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render::home_page(&entries)))
}
