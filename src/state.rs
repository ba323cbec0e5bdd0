//! Shared application state for all routes.

use crate::executor::QueryExecutor;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub executor: Arc<dyn QueryExecutor>,
}

impl AppState {
    pub fn new(executor: impl QueryExecutor + 'static) -> Self {
        AppState {
            executor: Arc::new(executor),
        }
    }
}
