//! Overview command implementation.
//!
//! The overview command:
//! 1. Loads the dataset
//! 2. Ranks the top skills
//! 3. Renders the bar chart (if requested)
//! 4. Writes output files and prints the summary

use super::common::{load_dataset, timestamp, validate_source, validate_top};
use super::models::OverviewArgs;
use crate::aggregator::top_skills;
use crate::chart::{generate_bar_chart, generate_ranking_summary};
use crate::output::{write_report, write_svg};
use crate::parser::schema::OverviewReport;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use crate::utils::format::ranking_title;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the overview command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The report that was produced, whether or not it was written to disk
///
/// # Errors
/// * Dataset unavailable (fetch or parse failure)
/// * File write errors
pub fn execute_overview(args: &OverviewArgs) -> Result<OverviewReport> {
    let start_time = Instant::now();

    // Step 1: Load dataset
    info!("Step 1/4: Loading dataset...");
    let dataset = load_dataset(&args.source)?;

    // Step 2: Rank skills
    info!("Step 2/4: Ranking top {} skills...", args.top);
    let ranking = top_skills(&dataset, args.top);

    debug!("Top 3 skills:");
    for (i, entry) in ranking.iter().take(3).enumerate() {
        debug!("  {}. {} ({} postings)", i + 1, entry.skill, entry.count);
    }

    let report = OverviewReport {
        version: REPORT_SCHEMA_VERSION.to_string(),
        source: dataset.source().to_string(),
        skills_column: dataset.skills_column().to_string(),
        total_postings: dataset.len() as u64,
        top_skills: ranking,
        normalization: dataset.stats(),
        generated_at: timestamp(),
    };

    // Step 3: Chart
    let svg = match &args.output_svg {
        Some(_) if report.top_skills.is_empty() => {
            info!("Step 3/4: Skipping chart (no skill data)");
            None
        }
        Some(_) => {
            info!("Step 3/4: Generating bar chart...");
            let title = ranking_title(args.top, report.top_skills.len());
            let config = args.chart_config.clone().with_title(title);
            Some(generate_bar_chart(&report.top_skills.chart_data(), &config).context("Failed to generate chart")?)
        }
        None => {
            info!("Step 3/4: Skipping chart (not requested)");
            None
        }
    };

    // Step 4: Write outputs
    info!("Step 4/4: Writing outputs...");
    if let Some(path) = &args.output_json {
        write_report(&report, path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    if let (Some(svg), Some(path)) = (svg, &args.output_svg) {
        write_svg(&svg, path).context("Failed to write chart SVG")?;
        info!("✓ Chart written to: {}", path.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("{}", generate_ranking_summary(&dataset, &report.top_skills));
        println!("{}", "=".repeat(80));
    }

    info!("Overview completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(report)
}

/// Validate overview arguments
pub fn validate_args(args: &OverviewArgs) -> Result<()> {
    validate_source(&args.source)?;
    validate_top(args.top)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::models::SourceArgs;

    #[test]
    fn test_validate_args_defaults() {
        assert!(validate_args(&OverviewArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_top_zero() {
        let args = OverviewArgs {
            top: 0,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_source() {
        let args = OverviewArgs {
            source: SourceArgs {
                source: String::new(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }
}
