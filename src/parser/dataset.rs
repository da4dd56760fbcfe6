//! In-memory dataset of job postings.
//!
//! Parses CSV bytes into postings. The skills column is located and
//! normalized exactly once per row here; every later consumer reads the
//! normalized `skills` vector.

use super::schema::NormalizationStats;
use super::skill_list::{normalize, RawSkillField, SkillFieldKind};
use crate::utils::config::{CATEGORY_COLUMN, LOCATION_COLUMN, SKILLS_COLUMN_MARKER};
use crate::utils::error::LoadError;
use log::{debug, info, warn};

/// One job posting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    /// Normalized skill list (possibly empty)
    pub skills: Vec<String>,

    /// Category label (`cluster_label`), unset when the cell is empty
    pub category: Option<String>,

    /// Location label (`location_cleaned`), unset when the cell is empty
    pub location: Option<String>,

    /// How the skills cell was interpreted
    pub skill_field: SkillFieldKind,
}

impl Posting {
    /// Build a posting from already-structured parts
    pub fn new(
        skills: Vec<String>,
        category: Option<&str>,
        location: Option<&str>,
    ) -> Self {
        Self {
            skills,
            category: category.map(str::to_string),
            location: location.map(str::to_string),
            skill_field: SkillFieldKind::Structured,
        }
    }

    /// Exact, case-sensitive membership test
    pub fn mentions(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

/// Read-only collection of postings
///
/// Row count and column set are fixed once constructed.
#[derive(Debug, Clone)]
pub struct Dataset {
    source: String,
    columns: Vec<String>,
    skills_column: String,
    has_category: bool,
    has_location: bool,
    postings: Vec<Posting>,
    stats: NormalizationStats,
}

impl Dataset {
    /// Build a dataset from CSV bytes
    ///
    /// **Public** - main entry point used by the loader
    ///
    /// # Errors
    /// * `LoadError::DataUnavailable` - bytes are not valid CSV, or no
    ///   column name contains "ner_skill"
    pub fn from_csv(source: &str, bytes: &[u8]) -> Result<Self, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes);

        let headers = reader
            .headers()
            .map_err(|e| LoadError::unavailable(source, format!("cannot read CSV header: {}", e)))?
            .clone();

        let columns: Vec<String> = headers.iter().map(str::to_string).collect();
        let skills_idx = find_skills_column(&columns).ok_or_else(|| {
            LoadError::unavailable(
                source,
                format!("no column name contains '{}'", SKILLS_COLUMN_MARKER),
            )
        })?;
        let category_idx = columns.iter().position(|c| c == CATEGORY_COLUMN);
        let location_idx = columns.iter().position(|c| c == LOCATION_COLUMN);

        debug!(
            "Columns: skills={:?}, category={:?}, location={:?}",
            columns[skills_idx], category_idx, location_idx
        );

        let mut postings = Vec::new();
        let mut stats = NormalizationStats::default();

        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                LoadError::unavailable(source, format!("CSV error at row {}: {}", row + 1, e))
            })?;

            let raw = RawSkillField::from_cell(record.get(skills_idx).unwrap_or(""));
            let normalized = normalize(&raw);
            record_kind(&mut stats, normalized.kind);

            postings.push(Posting {
                skills: normalized.skills,
                category: optional_cell(&record, category_idx),
                location: optional_cell(&record, location_idx),
                skill_field: normalized.kind,
            });
        }

        if stats.degraded() > 0 {
            warn!(
                "{} of {} rows have an unreadable skills cell ({} not a list, {} malformed); they contribute no skills",
                stats.degraded(),
                postings.len(),
                stats.unstructured,
                stats.malformed
            );
        }

        info!(
            "Loaded {} postings with {} columns from {}",
            postings.len(),
            columns.len(),
            source
        );

        Ok(Self {
            source: source.to_string(),
            skills_column: columns[skills_idx].clone(),
            has_category: category_idx.is_some(),
            has_location: location_idx.is_some(),
            columns,
            postings,
            stats,
        })
    }

    /// Build a dataset directly from postings
    ///
    /// Category and location columns are considered present.
    pub fn from_postings(source: impl Into<String>, postings: Vec<Posting>) -> Self {
        let mut stats = NormalizationStats::default();
        for posting in &postings {
            record_kind(&mut stats, posting.skill_field);
        }

        Self {
            source: source.into(),
            columns: vec![
                "skills_ner_skill".to_string(),
                CATEGORY_COLUMN.to_string(),
                LOCATION_COLUMN.to_string(),
            ],
            skills_column: "skills_ner_skill".to_string(),
            has_category: true,
            has_location: true,
            postings,
            stats,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn skills_column(&self) -> &str {
        &self.skills_column
    }

    pub fn has_category(&self) -> bool {
        self.has_category
    }

    pub fn has_location(&self) -> bool {
        self.has_location
    }

    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn stats(&self) -> NormalizationStats {
        self.stats
    }
}

/// First column whose name contains the skills marker, case-insensitive
fn find_skills_column(columns: &[String]) -> Option<usize> {
    columns
        .iter()
        .position(|c| c.to_lowercase().contains(SKILLS_COLUMN_MARKER))
}

fn optional_cell(record: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn record_kind(stats: &mut NormalizationStats, kind: SkillFieldKind) {
    match kind {
        SkillFieldKind::Structured => stats.structured += 1,
        SkillFieldKind::Parsed => stats.parsed += 1,
        SkillFieldKind::Unstructured => stats.unstructured += 1,
        SkillFieldKind::Malformed => stats.malformed += 1,
        SkillFieldKind::Missing => stats.missing += 1,
    }
}
