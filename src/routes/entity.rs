//! Entity routes: one list route and one by-id route per registered table.
//! Each entity gets its own static paths; handlers capture the entity config at registration.

use crate::config::{EntityConfig, ENTITIES};
use crate::handlers::entity::{list, read};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};

/// Register `GET /<segment>` and `GET /<segment>/:id` for one entity.
pub fn register_entity_endpoints(
    router: Router<AppState>,
    entity: &'static EntityConfig,
) -> Router<AppState> {
    tracing::debug!(entity = entity.name, path = %entity.collection_path(), "registering entity routes");
    router
        .route(
            &entity.collection_path(),
            get(move |State(state): State<AppState>| list(state, entity)),
        )
        .route(
            &entity.item_path(),
            get(move |State(state): State<AppState>, Path(id): Path<String>| read(state, entity, id)),
        )
}

pub fn entity_routes(state: AppState) -> Router {
    ENTITIES
        .iter()
        .fold(Router::new(), register_entity_endpoints)
        .with_state(state)
}
