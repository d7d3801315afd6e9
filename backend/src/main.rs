//! Backend entry-point: loads configuration, prepares the database and
//! serves the HTTP API.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[cfg(feature = "metrics")]
use server::build_metrics;
use server::{ServerConfig, create_server};
use travel_tracker::inbound::http::health::HealthState;
use travel_tracker::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use travel_tracker::settings::Settings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        Settings::load().map_err(|e| io::Error::other(format!("configuration error: {e}")))?;
    let database_url = settings
        .database_url()
        .map_err(|e| io::Error::other(format!("configuration error: {e}")))?;
    let pool_config = PoolConfig::new(database_url);

    if settings.run_migrations() {
        run_pending_migrations(pool_config.database_url().to_owned())
            .await
            .map_err(io::Error::other)?;
    }

    info!(url = %pool_config.redacted_url(), "connecting to database");
    let pool = DbPool::new(pool_config).await.map_err(io::Error::other)?;

    let config = ServerConfig::new(settings.bind_addr(), pool);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(build_metrics()?));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(addr = %settings.bind_addr(), "travel tracker listening");

    let result = server.await;
    health_state.mark_unhealthy();
    result
}
