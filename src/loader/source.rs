//! Dataset source identifiers.

use std::fmt;
use std::path::PathBuf;

/// Where a dataset is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// `http://` or `https://` URL
    Remote(String),
    /// Local file (plain path or `file://` URL)
    Local(PathBuf),
}

impl DataSource {
    /// Classify a source string
    pub fn parse(source: &str) -> Self {
        let trimmed = source.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DataSource::Remote(trimmed.to_string())
        } else if let Some(path) = trimmed.strip_prefix("file://") {
            DataSource::Local(PathBuf::from(path))
        } else {
            DataSource::Local(PathBuf::from(trimmed))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, DataSource::Remote(_))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Remote(url) => write!(f, "{}", url),
            DataSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source() {
        assert!(DataSource::parse("https://example.com/jobs.csv").is_remote());
        assert!(DataSource::parse("http://localhost/jobs.csv").is_remote());
        assert_eq!(
            DataSource::parse("file:///tmp/jobs.csv"),
            DataSource::Local(PathBuf::from("/tmp/jobs.csv"))
        );
        assert_eq!(
            DataSource::parse("data/jobs.csv"),
            DataSource::Local(PathBuf::from("data/jobs.csv"))
        );
    }
}
