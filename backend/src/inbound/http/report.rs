//! Aggregate mood report view.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};

use crate::domain::{mood_distribution, mood_trend};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_repository_error;
use crate::inbound::http::render;
use crate::inbound::http::state::HttpState;

/// Render the mood distribution and the per-entry mood-score trend.
#[get("/analysis")]
pub async fn report(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let entries = state.entries.list_all().await.map_err(map_repository_error)?;
    let distribution = mood_distribution(&entries);
    let trend = mood_trend(&entries);

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render::report_page(&distribution, &trend)))
}
