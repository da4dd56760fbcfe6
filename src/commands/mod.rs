//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod common;
pub mod dashboard;
pub mod detail;
pub mod models;
pub mod overview;
pub mod utils;

// Re-export main command functions
pub use dashboard::execute_dashboard;
pub use detail::execute_detail;
pub use models::{DashboardArgs, DetailArgs, OverviewArgs, SourceArgs};
pub use overview::execute_overview;
pub use utils::{display_schema, display_version, validate_report_file};
