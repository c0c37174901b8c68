//! HTTP API over the task store.
//!
//! | Method | Path                    | Effect                         |
//! |--------|-------------------------|--------------------------------|
//! | GET    | `/`                     | health check                   |
//! | GET    | `/tasks`                | list with decay applied        |
//! | POST   | `/tasks`                | create from `{"text": ...}`    |
//! | PUT    | `/tasks/{id}/complete`  | toggle today's completion      |
//! | DELETE | `/tasks/{id}`           | delete task and its history    |
//! | GET    | `/history`              | records in `startDate..=endDate` |
//! | GET    | `/stats`                | insights and badges            |
//!
//! Everything except `/` requires `Authorization: Bearer <token>`; the token
//! decides the owner every operation is scoped to.

pub mod auth;
pub mod routes;

use crate::libs::error::StoreError;
use anyhow::Context;
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use parking_lot::Mutex;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<TaskStore>>,
    /// Bearer token to owner id.
    pub tokens: Arc<BTreeMap<String, String>>,
}

impl AppState {
    pub fn new(store: TaskStore, tokens: BTreeMap<String, String>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            tokens: Arc::new(tokens),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/tasks", get(routes::list_tasks).post(routes::create_task))
        .route("/tasks/{id}", axum::routing::delete(routes::delete_task))
        .route("/tasks/{id}/complete", put(routes::toggle_task))
        .route("/history", get(routes::history))
        .route("/stats", get(routes::stats))
        .layer(middleware::from_fn_with_state(state.clone(), auth::auth_middleware));

    Router::new()
        .route("/", get(routes::health))
        .merge(api)
        .with_state(state)
}

/// JSON error body shared by every non-2xx response.
pub fn error_response(status: StatusCode, msg: impl Into<String>) -> Response {
    (status, Json(json!({ "msg": msg.into() }))).into_response()
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        match self {
            StoreError::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Task not found"),
            StoreError::Forbidden(_) => error_response(StatusCode::FORBIDDEN, "Not authorized"),
            StoreError::Validation(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            StoreError::Storage(err) => {
                error!(%err, "storage failure");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Server Error")
            }
        }
    }
}

pub async fn start_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = build_router(state);

    let listener = bind(host, port).await?;
    info!("{}", Message::ServerListening(listener.local_addr()?.to_string()));

    axum::serve(listener, app).await?;

    Ok(())
}

/// Binds `host:port`, resolving host names such as `localhost`.
pub async fn bind(host: &str, port: u16) -> anyhow::Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {}:{}", host, port))
}
