//! Chart rendering for reports.
//!
//! Ranked (label, count) pairs become SVG bar charts or box-drawn text
//! tables. Both use sequential colour/size scales relative to the largest
//! count.

pub mod palette;
pub mod svg;
pub mod text;

// Re-export main types
pub use palette::ColorScheme;
pub use svg::{escape_xml, generate_bar_chart, ChartConfig, Orientation};
pub use text::{generate_detail_summary, generate_ranking_summary};
