//! Dataset retrieval from remote URLs or local files.

pub mod client;
pub mod source;

// Re-export main types
pub use client::DatasetLoader;
pub use source::DataSource;
