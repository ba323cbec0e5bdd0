//! Recent-loans report.

use crate::error::AppError;
use crate::sql::recent_loans as recent_loans_query;
use crate::state::AppState;
use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentLoan {
    pub title: Option<String>,
    pub member_name: Option<String>,
    pub issue_date: NaiveDate,
}

pub async fn recent_loans(State(state): State<AppState>) -> Result<Json<Vec<RecentLoan>>, AppError> {
    let q = recent_loans_query();
    let rows = state.executor.execute(&q.sql, &q.params).await.inspect_err(|e| {
        tracing::error!(report = "recent-loans", error = %e, "report failed");
    })?;
    let loans = rows
        .into_iter()
        .map(|row| {
            serde_json::from_value::<RecentLoan>(serde_json::Value::Object(row))
                .map_err(|e| {
                    tracing::error!(report = "recent-loans", error = %e, "report row decode failed");
                    AppError::Decode(e.to_string())
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(loans))
}
