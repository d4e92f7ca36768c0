#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;
use uuid::Uuid;

use parts_service::db::{MemoryPartStore, PartStore};
use parts_service::error::{AppError, AppResult};
use parts_service::models::Part;
use parts_service::{build_router, AppState};

/// Router over a shared store, so consecutive requests see each other's writes.
pub fn build_test_app(store: Arc<dyn PartStore>) -> Router {
    build_router(AppState::new(store))
}

pub fn memory_store() -> Arc<MemoryPartStore> {
    Arc::new(MemoryPartStore::new())
}

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn post(app: Router, uri: &str, body: impl Into<String>) -> Response {
    send(app, Method::POST, uri, Body::from(body.into())).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Store whose every call fails as if the database were unreachable.
pub struct UnreachableStore;

#[async_trait]
impl PartStore for UnreachableStore {
    async fn insert_part(&self, _part: &Part) -> AppResult<()> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn fetch_part_by_id(&self, _id: Uuid) -> AppResult<Part> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> AppResult<()> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}
