use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use tracing::{debug, info};

use super::pretty_json;
use crate::{
    error::{AppError, AppResult},
    models::{CreatePart, Part, PartQuery, PartResponse},
    AppState,
};

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_part(State(state): State<AppState>, body: Bytes) -> AppResult<Response> {
    // A bare `null` body decodes to an empty payload.
    let payload: Option<CreatePart> = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "Rejected part payload");
        AppError::BadRequest(format!("unmarshal body: {e}"))
    })?;
    let name = payload.unwrap_or_default().into_valid_name()?;

    let part = Part::new(name);
    state.store.insert_part(&part).await?;

    info!(id = %part.id, name = %part.name, "Created part");

    pretty_json(StatusCode::CREATED, &PartResponse::from(&part))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_part(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Response> {
    let id = PartQuery::from_pairs(pairs).part_id()?;
    let part = state.store.fetch_part_by_id(id).await?;

    info!(id = %id, deleted = part.deleted_at.is_some(), "Fetched part");

    pretty_json(StatusCode::OK, &PartResponse::from(&part))
}
