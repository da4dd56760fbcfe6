//! Configuration and constants for the CLI.

use std::time::Duration;

/// Dataset loaded when no `--source` is given
pub const DEFAULT_DATASET_URL: &str = "https://huggingface.co/datasets/seemarn/jobstreet/resolve/main/jobstreet_all_job_dataset_2025_skills_ner_clustered.csv";

/// Environment variable that overrides the dataset source
pub const SOURCE_ENV_VAR: &str = "SKILLSCOPE_SOURCE";

/// Default timeout for dataset downloads
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Number of skills shown on the overview page
pub const TOP_SKILLS: usize = 10;

/// Number of categories shown on the detail page
pub const TOP_CATEGORIES: usize = 5;

/// Upper bound accepted for `--top`
pub const MAX_TOP_SKILLS: usize = 1000;

/// Placeholder for a statistic with no underlying data
pub const NOT_AVAILABLE: &str = "N/A";

// Column names. The skills column is found by substring, case-insensitive,
// because the dataset suffixes it with the NER model name.
pub const SKILLS_COLUMN_MARKER: &str = "ner_skill";
pub const CATEGORY_COLUMN: &str = "cluster_label";
pub const LOCATION_COLUMN: &str = "location_cleaned";

/// Skills per row in the "Explore Skills" grid
pub const SKILL_GRID_COLUMNS: usize = 5;
