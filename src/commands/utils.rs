use crate::output::read_report;
use crate::parser::schema::Report;
use crate::utils::config::{DEFAULT_DATASET_URL, REPORT_SCHEMA_VERSION};
use anyhow::Result;
use std::path::Path;

/// Validate a report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version());
    println!("  Source: {}", report.source());

    match &report {
        Report::Overview(r) => {
            println!("  Kind: overview");
            println!("  Total Postings: {}", r.total_postings);
            println!("  Ranked Skills: {}", r.top_skills.len());
        }
        Report::Detail(r) => {
            println!("  Kind: detail ({})", r.summary.skill);
            println!("  Total Postings: {}", r.summary.total_count);
            println!("  Categories: {}", r.summary.category_distribution.len());
        }
    }

    if report.version() != REPORT_SCHEMA_VERSION {
        println!(
            "  Note: written with schema v{}, current is v{}",
            report.version(),
            REPORT_SCHEMA_VERSION
        );
    }

    Ok(())
}

/// Display report schema information
pub fn display_schema(show_details: bool) {
    println!("Skillscope Report Schema");
    println!("Current Version: {}", REPORT_SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Overview report:");
        println!("  version: string           - Schema version (e.g., '1.0.0')");
        println!("  source: string            - Dataset URL or path");
        println!("  skills_column: string     - Column skills were read from");
        println!("  total_postings: number    - Rows in the dataset");
        println!("  top_skills: array         - Ranked skills");
        println!("    skill: string");
        println!("    count: number           - Mentions across all postings");
        println!("  normalization: object     - Rows per skills-cell outcome");
        println!("    structured, parsed, unstructured, malformed, missing: number");
        println!("  generated_at: string      - RFC 3339 timestamp");
        println!();
        println!("Detail report:");
        println!("  version, source, generated_at");
        println!("  summary: object");
        println!("    skill: string");
        println!("    total_count: number");
        println!("    top_category: string    - 'N/A' when undefined");
        println!("    top_location: string    - 'N/A' when undefined");
        println!("    category_distribution: array of {{ category, count }}");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Skillscope v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Skill-demand dashboard for job posting datasets.");
    println!("Default dataset: {}", DEFAULT_DATASET_URL);
}
