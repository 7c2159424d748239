//! Frontend proxy: relays the user routes to the backend and serves the static page.

pub mod relay;

use axum::{routing::get, Router};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::FrontendConfig;

pub use relay::{create_user, fetch_users, RelayError};

/// State shared by the relay handlers
#[derive(Clone)]
pub struct FrontendState {
    pub client: reqwest::Client,
    /// Backend base URL without a trailing slash
    pub backend_url: String,
}

impl FrontendState {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            backend_url: backend_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &FrontendConfig) -> Self {
        Self::new(config.backend_url.clone())
    }

    pub(crate) fn users_url(&self) -> String {
        format!("{}/api/users", self.backend_url)
    }
}

/// Frontend router; `static_dir` must contain `index.html`
pub fn router(state: FrontendState, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();

    Router::new()
        .route("/users", get(fetch_users).post(create_user))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
