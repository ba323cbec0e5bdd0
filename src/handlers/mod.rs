//! HTTP handlers for entity reads and reports.

pub mod entity;
pub mod report;
pub use report::RecentLoan;
