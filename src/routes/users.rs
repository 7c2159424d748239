use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::error::Result;
use crate::models::{CreatedUser, NewUser, User};
use crate::AppState;

/// List all users
///
/// Full table scan in storage order. Query parameters are ignored.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = state.db.store()?.list_users().await?;
    Ok(Json(users))
}

/// Create a user
///
/// No validation happens here: `name` and `email` go to storage as sent and
/// storage errors (NULL columns, over-long values) come back as a 500. A body
/// that is not a JSON object counts as `{}`. The response echoes the request
/// fields rather than re-reading the row.
pub async fn create_user(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewUser>, JsonRejection>,
) -> Result<Json<CreatedUser>> {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            tracing::debug!("Unreadable user payload, treating as empty: {}", rejection);
            NewUser::default()
        }
    };

    let store = state.db.store()?;
    let id = store
        .create_user(payload.name_param(), payload.email_param())
        .await?;

    tracing::info!(id, "User created");

    Ok(Json(payload.into_created(id)))
}
