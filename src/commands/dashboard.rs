//! Dashboard command implementation.

use super::common::{load_dataset, validate_source, validate_top};
use super::models::DashboardArgs;
use crate::dashboard::{run_dashboard, Dashboard};
use anyhow::Result;
use log::info;

/// Load the dataset, then hand the terminal to the dashboard
///
/// **Public** - main entry point called from main.rs
pub fn execute_dashboard(args: &DashboardArgs) -> Result<()> {
    let dataset = load_dataset(&args.source)?;
    let mut dashboard = Dashboard::new(dataset, args.top);

    if let Some(skill) = &args.initial_skill {
        dashboard.select_skill(skill);
    }

    info!("Starting dashboard ({} postings)", dashboard.dataset().len());

    // Log output would draw over the alternate screen
    let level = log::max_level();
    log::set_max_level(log::LevelFilter::Off);
    let result = run_dashboard(&mut dashboard);
    log::set_max_level(level);

    result
}

/// Validate dashboard arguments
pub fn validate_args(args: &DashboardArgs) -> Result<()> {
    validate_source(&args.source)?;
    validate_top(args.top)?;
    Ok(())
}
