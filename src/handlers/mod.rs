pub mod parts;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::{
    error::{AppError, AppResult},
    AppState,
};

pub async fn health(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    state.store.ping().await?;
    Ok((
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "parts-service" })),
    ))
}

/// Two-space indented JSON body with a trailing newline.
pub(crate) fn pretty_json<T: Serialize>(status: StatusCode, value: &T) -> AppResult<Response> {
    let mut body = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Internal(format!("encode response: {e}")))?;
    body.push('\n');
    Ok((status, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}
