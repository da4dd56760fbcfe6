use crate::chart::ChartConfig;
use crate::utils::config::{DEFAULT_DATASET_URL, DEFAULT_FETCH_TIMEOUT, TOP_SKILLS};
use std::path::PathBuf;
use std::time::Duration;

/// Where to load data from and how long to wait for it
///
/// **Public** - shared by every data-reading command
#[derive(Debug, Clone)]
pub struct SourceArgs {
    /// Dataset URL or file path
    pub source: String,

    /// Download timeout
    pub timeout: Duration,
}

impl Default for SourceArgs {
    fn default() -> Self {
        Self {
            source: DEFAULT_DATASET_URL.to_string(),
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

/// Arguments for the overview command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct OverviewArgs {
    pub source: SourceArgs,

    /// Number of skills in the ranking
    pub top: usize,

    /// Output path for JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Output path for SVG chart (optional)
    pub output_svg: Option<PathBuf>,

    /// Chart configuration
    pub chart_config: ChartConfig,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for OverviewArgs {
    fn default() -> Self {
        Self {
            source: SourceArgs::default(),
            top: TOP_SKILLS,
            output_json: None,
            output_svg: None,
            chart_config: ChartConfig::default(),
            print_summary: true,
        }
    }
}

/// Arguments for the detail command
#[derive(Debug, Clone)]
pub struct DetailArgs {
    pub source: SourceArgs,

    /// Skill to break down (exact, case-sensitive)
    pub skill: String,

    /// Output path for JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Output path for SVG chart (optional)
    pub output_svg: Option<PathBuf>,

    /// Chart width/height in pixels
    pub chart_size: (usize, usize),

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for DetailArgs {
    fn default() -> Self {
        let chart = ChartConfig::default();
        Self {
            source: SourceArgs::default(),
            skill: String::new(),
            output_json: None,
            output_svg: None,
            chart_size: (chart.width, chart.height),
            print_summary: true,
        }
    }
}

/// Arguments for the interactive dashboard
#[derive(Debug, Clone)]
pub struct DashboardArgs {
    pub source: SourceArgs,

    /// Number of skills on the overview page
    pub top: usize,

    /// Open the detail page for this skill on start
    pub initial_skill: Option<String>,
}

impl Default for DashboardArgs {
    fn default() -> Self {
        Self {
            source: SourceArgs::default(),
            top: TOP_SKILLS,
            initial_skill: None,
        }
    }
}
