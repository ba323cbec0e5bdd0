//! Router assembly and HTTP layers.

use crate::config::{validate, ENTITIES};
use crate::error::AppError;
use crate::routes::{common_routes, entity_routes, report_routes};
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Validate the entity registry and build the full router. Must run before serving.
pub fn build_router(state: AppState) -> Result<Router, AppError> {
    validate(ENTITIES)?;
    let router = Router::new()
        .merge(common_routes(state.clone()))
        .merge(entity_routes(state.clone()))
        .merge(report_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        );
    tracing::info!(entities = ENTITIES.len(), "routes registered");
    Ok(router)
}
