//! Skillscope CLI
//!
//! Skill-demand dashboard for job posting datasets.
//! Opens an interactive terminal dashboard or writes ranking and
//! per-skill reports.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;
use std::time::Duration;

use skillscope::chart::ChartConfig;
use skillscope::commands::{
    dashboard, detail, display_schema, display_version, execute_dashboard, execute_detail,
    execute_overview, overview, validate_report_file, DashboardArgs, DetailArgs, OverviewArgs,
    SourceArgs,
};
use skillscope::utils::config::{DEFAULT_DATASET_URL, SOURCE_ENV_VAR, TOP_SKILLS};

/// Skillscope - skill-demand analytics for job postings
#[derive(Parser, Debug)]
#[command(name = "skillscope")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Dataset location options shared by data-reading commands
#[derive(clap::Args, Debug)]
struct SourceOpts {
    /// Dataset URL or CSV file path
    #[arg(short, long, env = SOURCE_ENV_VAR, default_value = DEFAULT_DATASET_URL)]
    source: String,

    /// Download timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,
}

impl From<SourceOpts> for SourceArgs {
    fn from(opts: SourceOpts) -> Self {
        SourceArgs {
            source: opts.source,
            timeout: Duration::from_secs(opts.timeout_secs),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive dashboard
    Dashboard {
        #[command(flatten)]
        source: SourceOpts,

        /// Number of skills on the overview page
        #[arg(long, default_value_t = TOP_SKILLS)]
        top: usize,

        /// Start on the detail page of this skill
        #[arg(long)]
        skill: Option<String>,
    },

    /// Rank the most requested skills
    Overview {
        #[command(flatten)]
        source: SourceOpts,

        /// Number of skills to rank
        #[arg(long, default_value_t = TOP_SKILLS)]
        top: usize,

        /// Output path for JSON report
        #[arg(short, long)]
        json: Option<PathBuf>,

        /// Output path for SVG bar chart
        #[arg(long)]
        svg: Option<PathBuf>,

        /// Chart width in pixels
        #[arg(long, default_value = "900")]
        width: usize,

        /// Chart height in pixels
        #[arg(long, default_value = "500")]
        height: usize,

        /// Do not print the text summary
        #[arg(long)]
        quiet: bool,
    },

    /// Break down the postings that mention one skill
    Detail {
        #[command(flatten)]
        source: SourceOpts,

        /// Skill name (exact, case-sensitive)
        #[arg(short = 'k', long)]
        skill: String,

        /// Output path for JSON report
        #[arg(short, long)]
        json: Option<PathBuf>,

        /// Output path for SVG category chart
        #[arg(long)]
        svg: Option<PathBuf>,

        /// Chart width in pixels
        #[arg(long, default_value = "900")]
        width: usize,

        /// Chart height in pixels
        #[arg(long, default_value = "500")]
        height: usize,

        /// Do not print the text summary
        #[arg(long)]
        quiet: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display report schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Dashboard { source, top, skill } => {
            let args = DashboardArgs {
                source: source.into(),
                top,
                initial_skill: skill,
            };
            dashboard::validate_args(&args)?;
            execute_dashboard(&args)?;
        }

        Commands::Overview {
            source,
            top,
            json,
            svg,
            width,
            height,
            quiet,
        } => {
            let args = OverviewArgs {
                source: source.into(),
                top,
                output_json: json,
                output_svg: svg,
                chart_config: ChartConfig::new().with_size(width, height),
                print_summary: !quiet,
            };
            overview::validate_args(&args)?;
            execute_overview(&args)?;
        }

        Commands::Detail {
            source,
            skill,
            json,
            svg,
            width,
            height,
            quiet,
        } => {
            let args = DetailArgs {
                source: source.into(),
                skill,
                output_json: json,
                output_svg: svg,
                chart_size: (width, height),
                print_summary: !quiet,
            };
            detail::validate_args(&args)?;
            execute_detail(&args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
