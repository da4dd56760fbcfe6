//! Helpers shared by the data-reading commands.

use super::models::SourceArgs;
use crate::loader::DatasetLoader;
use crate::parser::dataset::Dataset;
use crate::utils::config::MAX_TOP_SKILLS;
use anyhow::{Context, Result};
use chrono::Utc;
use std::sync::Arc;

/// Load the dataset named by `args`
pub fn load_dataset(args: &SourceArgs) -> Result<Arc<Dataset>> {
    let mut loader = DatasetLoader::new(args.timeout);
    loader
        .load(&args.source)
        .with_context(|| format!("Failed to load dataset from {}", args.source))
}

/// Validate source arguments
///
/// **Public** - can be called before a command runs for early validation
pub fn validate_source(args: &SourceArgs) -> Result<()> {
    if args.source.trim().is_empty() {
        anyhow::bail!("Dataset source cannot be empty");
    }

    if args.timeout.is_zero() {
        anyhow::bail!("Timeout must be greater than 0");
    }

    Ok(())
}

/// Validate a top-N count
pub fn validate_top(top: usize) -> Result<()> {
    if top == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if top > MAX_TOP_SKILLS {
        anyhow::bail!("top is too large (max {})", MAX_TOP_SKILLS);
    }

    Ok(())
}

/// RFC 3339 timestamp for reports
pub fn timestamp() -> String {
    Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_validate_source() {
        assert!(validate_source(&SourceArgs::default()).is_ok());

        let empty = SourceArgs {
            source: "  ".to_string(),
            ..Default::default()
        };
        assert!(validate_source(&empty).is_err());

        let no_timeout = SourceArgs {
            timeout: Duration::ZERO,
            ..Default::default()
        };
        assert!(validate_source(&no_timeout).is_err());
    }

    #[test]
    fn test_validate_top() {
        assert!(validate_top(10).is_ok());
        assert!(validate_top(0).is_err());
        assert!(validate_top(MAX_TOP_SKILLS + 1).is_err());
    }
}
