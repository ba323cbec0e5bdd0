use crate::handlers::report::recent_loans;
use crate::state::AppState;
use axum::{routing::get, Router};

pub const RECENT_LOANS_PATH: &str = "/reports/recent-loans";

pub fn report_routes(state: AppState) -> Router {
    Router::new()
        .route(RECENT_LOANS_PATH, get(recent_loans))
        .with_state(state)
}
