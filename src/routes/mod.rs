mod common;
mod entity;
mod report;

pub use common::{advertised_endpoints, common_routes, IndexBody, WELCOME_MESSAGE};
pub use entity::{entity_routes, register_entity_endpoints};
pub use report::{report_routes, RECENT_LOANS_PATH};
