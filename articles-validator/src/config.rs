//! Configuration for the article validation pipeline.
//!
//! The binary runs with the defaults below (root `articles/`, `.md` text
//! files, `data.json` metadata). The library takes the config explicitly so
//! tests and embedders can point it at any directory tree.

use std::path::PathBuf;

/// Filesystem options for one validation run.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ValidatorConfig {
    /// Root directory whose immediate subdirectories are the articles.
    pub root: PathBuf,
    /// Extension for language text files (matched exactly, case-sensitive).
    pub text_extension: String,
    /// Metadata file name expected inside every article directory.
    pub metadata_filename: String,
    /// Maximum metadata file size in bytes (default: 1 MB).
    pub max_metadata_size: u64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("articles"),
            text_extension: "md".to_owned(),
            metadata_filename: "data.json".to_owned(),
            max_metadata_size: 1_048_576,
        }
    }
}
