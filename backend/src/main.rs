//! Backend entry-point: loads settings, prepares storage and serves the API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use taskboard::config::AppSettings;
use taskboard::domain::BearerToken;
use taskboard::inbound::http::health::HealthState;
use taskboard::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};

fn init_tracing(json: bool) {
    let builder = fmt().with_env_filter(EnvFilter::from_default_env());
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

async fn server_config(settings: &AppSettings) -> color_eyre::Result<ServerConfig> {
    let mut config =
        ServerConfig::new(settings.bind_addr()?).with_store_timeout(settings.store_timeout());

    if let Some((token, user_id)) = settings.dev_identity()? {
        warn!(user_id = %user_id, "development bearer token enabled");
        config = config.with_dev_identity(BearerToken::new(token)?, user_id);
    }

    match settings.database_url.as_deref() {
        Some(url) => {
            run_pending_migrations(url).await?;
            let pool =
                DbPool::new(PoolConfig::new(url).with_max_size(settings.pool_max_size()?)).await?;
            config = config.with_db_pool(pool);
        }
        None => warn!("no database configured; projects and tasks are kept in memory"),
    }

    Ok(config)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let settings = AppSettings::load()?;
    init_tracing(settings.log_json());

    let config = server_config(&settings).await?;
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(bind_addr = %settings.bind_addr()?, "taskboard listening");

    server.await?;
    Ok(())
}
