use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Health check endpoint
///
/// Reports where the database bootstrap stands. Always answers 200 so it can
/// double as a liveness probe while storage is still coming up.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let db_state = state.db.state();

    Json(json!({
        "status": if state.db.is_ready() { "healthy" } else { "unhealthy" },
        "database": db_state.as_str(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
