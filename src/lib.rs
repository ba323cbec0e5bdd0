//! Library API: read-only REST endpoints over the library-management database.

pub mod app;
pub mod config;
pub mod error;
pub mod executor;
pub mod handlers;
pub mod routes;
pub mod sql;
pub mod state;
pub mod telemetry;

pub use app::build_router;
pub use config::{EntityConfig, Settings, ENTITIES};
pub use error::{AppError, ConfigError};
pub use executor::{PgExecutor, QueryExecutor, Row};
pub use handlers::RecentLoan;
pub use routes::{common_routes, entity_routes, register_entity_endpoints, report_routes};
pub use state::AppState;
