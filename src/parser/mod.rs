//! Dataset parsing and schema definitions.
//!
//! This module handles:
//! - Parsing CSV bytes into postings
//! - Normalizing the skills column (safe list-literal parsing)
//! - Defining the aggregate and report schema

pub mod dataset;
pub mod schema;
pub mod skill_list;

// Re-export main types
pub use dataset::{Dataset, Posting};
pub use schema::{
    CategoryCount, DetailReport, DetailSummary, NormalizationStats, OverviewReport, Report,
    SkillCount, SkillRanking,
};
pub use skill_list::{normalize, parse_list_literal, NormalizedSkills, RawSkillField, SkillFieldKind};
