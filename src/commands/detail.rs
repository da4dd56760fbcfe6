//! Detail command implementation.
//!
//! Loads the dataset, summarizes the postings mentioning one skill, and
//! writes/prints the result.

use super::common::{load_dataset, timestamp, validate_source};
use super::models::DetailArgs;
use crate::aggregator::detail_for;
use crate::chart::{generate_bar_chart, generate_detail_summary, ChartConfig};
use crate::output::{write_report, write_svg};
use crate::parser::schema::DetailReport;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use anyhow::{Context, Result};
use log::{info, warn};

/// Execute the detail command
///
/// **Public** - main entry point called from main.rs
pub fn execute_detail(args: &DetailArgs) -> Result<DetailReport> {
    info!("Loading dataset...");
    let dataset = load_dataset(&args.source)?;

    info!("Summarizing postings for skill: {}", args.skill);
    let summary = detail_for(&dataset, &args.skill);
    if summary.total_count == 0 {
        warn!("No postings mention {:?} (matching is case-sensitive)", args.skill);
    }

    if let Some(path) = &args.output_svg {
        if summary.category_distribution.is_empty() {
            info!("Skipping chart (no category data)");
        } else {
            let (width, height) = args.chart_size;
            let config = ChartConfig::categories(&summary.skill).with_size(width, height);
            let svg = generate_bar_chart(&summary.chart_data(), &config)
                .context("Failed to generate chart")?;
            write_svg(&svg, path).context("Failed to write chart SVG")?;
            info!("✓ Chart written to: {}", path.display());
        }
    }

    let report = DetailReport {
        version: REPORT_SCHEMA_VERSION.to_string(),
        source: dataset.source().to_string(),
        summary,
        generated_at: timestamp(),
    };

    if let Some(path) = &args.output_json {
        write_report(&report, path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("{}", generate_detail_summary(&report.summary));
        println!("{}", "=".repeat(80));
    }

    Ok(report)
}

/// Validate detail arguments
pub fn validate_args(args: &DetailArgs) -> Result<()> {
    validate_source(&args.source)?;

    if args.skill.trim().is_empty() {
        anyhow::bail!("Skill cannot be empty");
    }

    let (width, height) = args.chart_size;
    if width < 200 || height < 150 {
        anyhow::bail!("Chart size must be at least 200x150 pixels");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_requires_skill() {
        assert!(validate_args(&DetailArgs::default()).is_err());

        let args = DetailArgs {
            skill: "SQL".to_string(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_chart_size() {
        let args = DetailArgs {
            skill: "SQL".to_string(),
            chart_size: (100, 100),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }
}
