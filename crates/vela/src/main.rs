use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use dotenv::dotenv;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use vela::conf::configuration::Configuration;
use vela::state::AppState;
use vela::store::SeaOrmUserStore;


#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Configuration::load().context("failed to load configuration")?;
    vela::logging_tracing::init(&config)?;

    let mut options = ConnectOptions::new(config.database.url.clone());
    options
        .max_connections(config.database.max_connections)
        .connect_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    let connection = Database::connect(options)
        .await
        .context("failed to connect to the database")?;

    if config.database.run_migrations {
        Migrator::up(&connection, None)
            .await
            .context("failed to apply migrations")?;
    }

    let store = SeaOrmUserStore::new(connection);
    let state = AppState { store: Arc::new(store.clone()) };
    let routes_all = vela::app(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid server host/port")?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on PORT: {}", config.server.port);
    tracing::info!("Localhost Link: http://localhost:{}", config.server.port);

    axum::serve(listener, routes_all)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shutting down");
    store.close().await?;
    common_tracing::shutdown_tracing();

    Ok(())
}


async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Initialization of Ctrl+C handler failed: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Initialization of signal handler failed: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
