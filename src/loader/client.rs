//! Fetches and caches datasets.
//!
//! A `DatasetLoader` downloads (or reads) a CSV once per source identifier
//! and hands out shared read-only handles on every later call.

use super::source::DataSource;
use crate::parser::dataset::Dataset;
use crate::utils::config::DEFAULT_FETCH_TIMEOUT;
use crate::utils::error::LoadError;
use log::{debug, info};
use reqwest::blocking::Client;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Memoizing dataset loader
pub struct DatasetLoader {
    timeout: Duration,
    cache: HashMap<String, Arc<Dataset>>,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new(DEFAULT_FETCH_TIMEOUT)
    }
}

impl DatasetLoader {
    /// Create a loader whose remote fetches give up after `timeout`
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            cache: HashMap::new(),
        }
    }

    /// Load a dataset, reusing the cached copy for a known source
    ///
    /// **Public** - main entry point for data access
    ///
    /// # Arguments
    /// * `source` - URL or file path; also the cache key
    ///
    /// # Errors
    /// * `LoadError::DataUnavailable` - fetch, read or CSV parse failure
    pub fn load(&mut self, source: &str) -> Result<Arc<Dataset>, LoadError> {
        if let Some(dataset) = self.cache.get(source) {
            debug!("Dataset cache hit: {}", source);
            return Ok(Arc::clone(dataset));
        }

        let bytes = match DataSource::parse(source) {
            DataSource::Remote(url) => self.fetch_remote(source, &url)?,
            DataSource::Local(path) => {
                info!("Reading dataset from: {}", path.display());
                std::fs::read(&path).map_err(|e| LoadError::unavailable(source, e))?
            }
        };

        debug!("Read {} bytes from {}", bytes.len(), source);

        let dataset = Arc::new(Dataset::from_csv(source, &bytes)?);
        self.cache.insert(source.to_string(), Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Whether `source` has already been loaded
    pub fn is_cached(&self, source: &str) -> bool {
        self.cache.contains_key(source)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Download `url` with the configured timeout
    ///
    /// **Private** - internal helper for load
    fn fetch_remote(&self, source: &str, url: &str) -> Result<Vec<u8>, LoadError> {
        info!("Fetching dataset from: {}", url);

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| LoadError::unavailable(source, e))?;

        let response = client
            .get(url)
            .send()
            .map_err(|e| LoadError::unavailable(source, e))?;

        // Check HTTP status
        if !response.status().is_success() {
            return Err(LoadError::unavailable(
                source,
                format!("HTTP {}", response.status()),
            ));
        }

        let bytes = response
            .bytes()
            .map_err(|e| LoadError::unavailable(source, e))?;

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_is_memoized() {
        let file = write_csv("ner_skill\n\"['Rust']\"\n");
        let source = file.path().to_str().unwrap().to_string();
        let mut loader = DatasetLoader::default();

        let first = loader.load(&source).unwrap();
        assert!(loader.is_cached(&source));

        // Changing the file must not affect the cached copy
        std::fs::write(file.path(), "ner_skill\n\"['Go']\"\n\"['Go']\"\n").unwrap();
        let second = loader.load(&source).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let mut loader = DatasetLoader::default();
        let err = loader.load("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, LoadError::DataUnavailable { .. }));
        assert!(!loader.is_cached("/definitely/not/here.csv"));
    }

    #[test]
    fn test_load_stalled_remote_times_out() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept the connection but never answer
        let server = std::thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            std::thread::sleep(Duration::from_secs(3));
            drop(stream);
        });

        let timeout = Duration::from_millis(300);
        let mut loader = DatasetLoader::new(timeout);
        let source = format!("http://{}/jobs.csv", addr);

        let started = std::time::Instant::now();
        let result = loader.load(&source);
        let elapsed = started.elapsed();

        assert!(matches!(result, Err(LoadError::DataUnavailable { .. })));
        assert!(elapsed < timeout * 5, "load took {:?}", elapsed);
        assert!(!loader.is_cached(&source));

        server.join().unwrap();
    }
}
