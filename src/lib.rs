use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;

use crate::db::PartStore;

/// Shared application state. The store is built by the caller and handed in.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PartStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PartStore>) -> Self {
        Self { store }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/healthcheck", get(handlers::health))

        // ── Parts ───────────────────────────────────────────────────────────
        .route(
            "/",
            get(handlers::parts::get_part).post(handlers::parts::create_part),
        )

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
