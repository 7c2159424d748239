use std::net::SocketAddr;

use users_api::frontend::{self, FrontendState};
use users_api::{init_tracing, FrontendConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = FrontendConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!("Relaying to backend at {}", config.backend_url);

    let state = FrontendState::from_config(&config);
    let app = frontend::router(state, &config.static_dir);

    let addr: SocketAddr = config.server_address().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Frontend service running on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
