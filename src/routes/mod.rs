pub mod health;
pub mod users;

use axum::{
    http::Method,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub use health::health_check;
pub use users::{create_user, list_users};

/// Backend router: user endpoints, health probe, CORS and request tracing
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/users", get(list_users).post(create_user))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
