//! Server assembly: adapter construction and route wiring.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, web};

use backend::RequestLog;
use backend::config::AppConfig;
use backend::domain::ports::{AnalysisSource, EntryRepository};
use backend::inbound::http::analyze::analyze;
use backend::inbound::http::detail::detail;
use backend::inbound::http::home::home;
use backend::inbound::http::report::report;
use backend::inbound::http::state::HttpState;
use backend::outbound::anthropic::AnthropicHttpSource;
use backend::outbound::persistence::{DbPool, DieselEntryRepository, PoolConfig, run_migrations};

/// Build the handler state from configuration.
///
/// Opens the SQLite pool, applies pending migrations, and constructs the
/// concrete port adapters exactly once; handlers receive them through
/// `web::Data` rather than ambient globals.
pub(crate) fn build_state(config: &AppConfig) -> std::io::Result<web::Data<HttpState>> {
    let pool =
        DbPool::new(PoolConfig::new(&config.database_url)).map_err(std::io::Error::other)?;
    run_migrations(&pool).map_err(std::io::Error::other)?;

    let entries: Arc<dyn EntryRepository> = Arc::new(DieselEntryRepository::new(pool));
    let analysis: Arc<dyn AnalysisSource> = Arc::new(
        AnthropicHttpSource::new(
            config.api_key.as_str(),
            config.model.as_str(),
            config.analysis_timeout,
        )
        .map_err(std::io::Error::other)?,
    );

    Ok(web::Data::new(HttpState::new(entries, analysis)))
}

/// Assemble the application with its four routes and middleware.
pub(crate) fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(RequestLog)
        .service(home)
        .service(analyze)
        .service(detail)
        .service(report)
}
