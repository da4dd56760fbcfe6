//! Output writers for reports and charts.
//!
//! This module handles writing data to disk:
//! - JSON reports (overview and detail)
//! - SVG bar charts

pub mod writer;

// Re-export main functions
pub use writer::{read_report, write_report, write_svg};
