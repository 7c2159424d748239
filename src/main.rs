use std::net::SocketAddr;

use users_api::db::MySqlConnector;
use users_api::{bootstrap, init_tracing, routes, AppState, Config, Database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting users backend...");

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let db = Database::new();
    let state = AppState::new(db.clone(), config.clone());
    let app = routes::router(state);

    // Bind before bootstrap so the listener is up while storage is unavailable
    let addr: SocketAddr = config.server_address().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Backend service running on {}", addr);

    let connector = MySqlConnector::from_config(&config);
    let backoff = config.retry_backoff();
    tokio::spawn(async move {
        bootstrap(&connector, &db, backoff).await;
    });

    axum::serve(listener, app).await?;

    Ok(())
}
