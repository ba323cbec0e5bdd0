//! Generic handlers shared by every registered entity: list all rows, read one by id.

use crate::config::EntityConfig;
use crate::error::AppError;
use crate::executor::Row;
use crate::sql::{select_all, select_by_id};
use crate::state::AppState;
use axum::Json;
use serde_json::Value;

/// Convert the path id into the value bound to `$1`. None means no row can match.
pub(crate) fn parse_id(id_str: &str) -> Option<Value> {
    id_str.trim().parse::<i64>().ok().map(|n| Value::Number(n.into()))
}

pub async fn list(state: AppState, entity: &'static EntityConfig) -> Result<Json<Vec<Row>>, AppError> {
    let q = select_all(entity);
    let rows = state.executor.execute(&q.sql, &q.params).await.inspect_err(|e| {
        tracing::error!(entity = entity.name, error = %e, "list failed");
    })?;
    Ok(Json(rows))
}

pub async fn read(
    state: AppState,
    entity: &'static EntityConfig,
    id_str: String,
) -> Result<Json<Row>, AppError> {
    let not_found = || AppError::NotFound(entity.name.to_string());
    let id = parse_id(&id_str).ok_or_else(not_found)?;
    let q = select_by_id(entity, id);
    let rows = state.executor.execute(&q.sql, &q.params).await.inspect_err(|e| {
        tracing::error!(entity = entity.name, id = %id_str, error = %e, "read failed");
    })?;
    let row = rows.into_iter().next().ok_or_else(not_found)?;
    Ok(Json(row))
}
