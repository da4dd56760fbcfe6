//! Output JSON schema definitions for report data.
//!
//! This module defines the aggregates the dashboard displays and the
//! structure of the JSON reports we write to disk.
//! Schema is versioned to allow future evolution.

use serde::{Deserialize, Serialize};

/// A skill and how many times postings mention it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: u64,
}

/// Skills ranked by mention count, highest first
///
/// Ties keep the order in which skills were first seen in the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillRanking {
    pub entries: Vec<SkillCount>,
}

impl SkillRanking {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SkillCount> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&SkillCount> {
        self.entries.get(index)
    }

    /// Highest count in the ranking (0 when empty)
    pub fn max_count(&self) -> u64 {
        self.entries.first().map(|e| e.count).unwrap_or(0)
    }

    /// Sum of the counts in the ranking
    pub fn total_mentions(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// (label, value) pairs for charting
    pub fn chart_data(&self) -> Vec<(String, u64)> {
        self.entries
            .iter()
            .map(|e| (e.skill.clone(), e.count))
            .collect()
    }
}

/// A job category and the number of matching postings in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// Breakdown of the postings that mention one skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailSummary {
    /// Skill the summary was computed for
    pub skill: String,

    /// Number of postings mentioning the skill
    pub total_count: u64,

    /// Most frequent category, or "N/A"
    pub top_category: String,

    /// Most frequent location, or "N/A"
    pub top_location: String,

    /// Top categories, highest count first
    pub category_distribution: Vec<CategoryCount>,
}

impl DetailSummary {
    /// (label, value) pairs for charting
    pub fn chart_data(&self) -> Vec<(String, u64)> {
        self.category_distribution
            .iter()
            .map(|c| (c.category.clone(), c.count))
            .collect()
    }
}

/// How many rows fell into each normalization outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationStats {
    pub structured: u64,
    pub parsed: u64,
    pub unstructured: u64,
    pub malformed: u64,
    pub missing: u64,
}

impl NormalizationStats {
    /// Rows whose skills cell could not be read as a list
    pub fn degraded(&self) -> u64 {
        self.unstructured + self.malformed
    }

    pub fn total(&self) -> u64 {
        self.structured + self.parsed + self.unstructured + self.malformed + self.missing
    }
}

/// Overview report written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Dataset source identifier
    pub source: String,

    /// Name of the column skills were read from
    pub skills_column: String,

    /// Number of postings in the dataset
    pub total_postings: u64,

    /// Top skills (ranked by posting count)
    pub top_skills: SkillRanking,

    /// Outcome of skills-cell normalization
    pub normalization: NormalizationStats,

    /// Timestamp when report was generated
    pub generated_at: String,
}

/// Detail report for one skill written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailReport {
    pub version: String,
    pub source: String,
    pub summary: DetailSummary,
    pub generated_at: String,
}

/// Either report kind, as read back from disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Report {
    Overview(OverviewReport),
    Detail(DetailReport),
}

impl Report {
    pub fn version(&self) -> &str {
        match self {
            Report::Overview(r) => &r.version,
            Report::Detail(r) => &r.version,
        }
    }

    pub fn source(&self) -> &str {
        match self {
            Report::Overview(r) => &r.source,
            Report::Detail(r) => &r.source,
        }
    }
}
