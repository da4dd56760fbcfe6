//! Aggregation of postings into rankings and per-skill summaries.
//!
//! This module transforms a loaded dataset into:
//! - The top-N skill ranking (overview page)
//! - Per-skill detail summaries (detail page)
//! - Shared mode / top-N counting with first-seen tie-breaks

pub mod counter;
pub mod detail;
pub mod ranking;

// Re-export main types and functions
pub use counter::{mode_of, ranked_counts, OrderedCounter};
pub use detail::detail_for;
pub use ranking::{count_skills, top_skills};
