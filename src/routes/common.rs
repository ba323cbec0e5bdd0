//! Common routes: index, health, readiness, version.

use crate::config::ENTITIES;
use crate::routes::report::RECENT_LOANS_PATH;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

pub const WELCOME_MESSAGE: &str = "Welcome to the Library Management System API";

#[derive(Serialize)]
pub struct IndexBody {
    pub message: &'static str,
    pub endpoints: Vec<String>,
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

/// Every public data route, in registration order.
pub fn advertised_endpoints() -> Vec<String> {
    ENTITIES
        .iter()
        .flat_map(|e| [e.collection_path(), e.item_path()])
        .chain(std::iter::once(RECENT_LOANS_PATH.to_string()))
        .collect()
}

async fn index() -> Json<IndexBody> {
    Json(IndexBody {
        message: WELCOME_MESSAGE,
        endpoints: advertised_endpoints(),
    })
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    match state.executor.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadyBody {
                status: "ok",
                database: "ok",
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyBody {
                    status: "degraded",
                    database: "unavailable",
                }),
            )
        }
    }
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /, /health, /ready, /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
