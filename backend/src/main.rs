//! Backend entry point: wires configuration, storage, the analysis client,
//! and the four web routes.

mod server;

use actix_web::HttpServer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::config::AppConfig;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    // A missing credential refuses startup; see AppConfig::from_env.
    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    let state = server::build_state(&config)?;

    let bind_addr = config.bind_addr;
    info!(%bind_addr, database = %config.database_url, "starting diary analyzer backend");
    HttpServer::new(move || server::build_app(state.clone()))
        .bind(bind_addr)?
        .run()
        .await
}
