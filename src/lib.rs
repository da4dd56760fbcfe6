//! Skillscope
//!
//! Skill-demand analytics for job posting datasets: load a CSV of
//! postings, rank the most requested skills, and drill into the postings
//! behind any one skill.
//!
//! ## Getting Started
//!
//! ```bash
//! skillscope dashboard
//! skillscope overview --source jobs.csv --json overview.json --svg skills.svg
//! skillscope detail --skill SQL --source jobs.csv
//! ```
//!
//! The library exposes the same pipeline:
//!
//! ```ignore
//! let mut loader = DatasetLoader::default();
//! let dataset = loader.load("jobs.csv")?;
//! let ranking = top_skills(&dataset, 10);
//! let detail = detail_for(&dataset, "SQL");
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod dashboard;
pub mod loader;
pub mod navigation;
pub mod output;
pub mod parser;
pub mod utils;

pub use aggregator::{detail_for, top_skills};
pub use loader::DatasetLoader;
pub use navigation::NavigationState;
pub use parser::{Dataset, DetailSummary, Posting, SkillRanking};
