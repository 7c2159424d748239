//! Users API
//!
//! Backend REST service over a MySQL `users` table, the frontend proxy that
//! relays to it, and the smoke test client that exercises it.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod frontend;
pub mod harness;
pub mod models;
pub mod routes;

pub use config::{Config, FrontendConfig, HarnessConfig};
pub use db::{bootstrap, Database};
pub use error::{AppError, Result};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given database handle and configuration
    pub fn new(db: Database, config: Config) -> Self {
        Self { db, config }
    }
}

/// Install the fmt subscriber, honouring RUST_LOG when set
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "users_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
