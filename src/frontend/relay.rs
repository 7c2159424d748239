use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use super::FrontendState;
use crate::constants::{ERR_CREATE_USER, ERR_FETCH_USERS};

/// Relay failure
///
/// The cause is logged and dropped; callers only ever see the fixed message.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("{}", ERR_FETCH_USERS)]
    FetchUsers(#[source] reqwest::Error),

    #[error("{}", ERR_CREATE_USER)]
    CreateUser(#[source] reqwest::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let cause = match &self {
            RelayError::FetchUsers(e) | RelayError::CreateUser(e) => e,
        };
        tracing::warn!("{}: {}", self, cause);

        let body = Json(json!({
            "error": self.to_string()
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Backend body passed through byte for byte
fn json_response(body: Bytes) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// `application/json` or any `+json` media type
fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

/// GET /users -> backend GET /api/users
pub async fn fetch_users(State(state): State<FrontendState>) -> Result<Response, RelayError> {
    let body = state
        .client
        .get(state.users_url())
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(RelayError::FetchUsers)?
        .bytes()
        .await
        .map_err(RelayError::FetchUsers)?;

    Ok(json_response(body))
}

/// POST /users -> backend POST /api/users
///
/// A JSON body is forwarded untouched; anything else is sent as `{}` and left
/// for the backend to reject.
pub async fn create_user(
    State(state): State<FrontendState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, RelayError> {
    let body = if is_json(&headers) {
        body
    } else {
        Bytes::from_static(b"{}")
    };

    let created = state
        .client
        .post(state.users_url())
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(RelayError::CreateUser)?
        .bytes()
        .await
        .map_err(RelayError::CreateUser)?;

    Ok(json_response(created))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn with_content_type(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_is_json() {
        assert!(is_json(&with_content_type("application/json")));
        assert!(is_json(&with_content_type("application/json; charset=utf-8")));
        assert!(is_json(&with_content_type("application/merge-patch+json")));
        assert!(!is_json(&with_content_type("application/x-www-form-urlencoded")));
        assert!(!is_json(&with_content_type("text/plain")));
        assert!(!is_json(&HeaderMap::new()));
    }
}
