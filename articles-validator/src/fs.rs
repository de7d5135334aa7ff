//! Filesystem access for the validation pipeline.
//!
//! All I/O here is non-blocking (`tokio::fs`); every call is a suspension
//! point where other in-flight article validations may make progress.
//! Metadata reads are bounded so a pathological file cannot exhaust memory.

use std::path::Path;

use thiserror::Error;
use tokio::io::AsyncReadExt;

use crate::error::ArticleError;

/// Why a bounded file read failed.
#[derive(Debug, Error)]
pub(crate) enum ReadError {
    /// Underlying I/O failure (missing file, permissions, ...).
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// The file exceeds the configured size limit.
    #[error("file exceeds maximum size of {limit} bytes")]
    TooLarge {
        /// The configured limit that was exceeded.
        limit: u64,
    },
    /// The file content is not valid UTF-8.
    #[error("file is not valid UTF-8")]
    NotUtf8,
}

/// List the names of the entries directly inside a directory.
///
/// Used both for the root (entries are article names) and for a single
/// article directory (entries are file names). No ordering guarantee.
pub(crate) async fn list_entries(path: &Path) -> Result<Vec<String>, ArticleError> {
    let unreadable = |source: std::io::Error| ArticleError::DirectoryUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let mut dir = tokio::fs::read_dir(path).await.map_err(unreadable)?;

    let mut entries = Vec::new();
    while let Some(entry) = dir.next_entry().await.map_err(unreadable)? {
        entries.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(entries)
}

/// Read a file to a string, enforcing `max_size`.
///
/// Reads at most `max_size + 1` bytes through `AsyncReadExt::take` so the
/// size check and the read are the same operation — no separate metadata
/// call that could race with a growing file.
pub(crate) async fn read_bounded(path: &Path, max_size: u64) -> Result<String, ReadError> {
    let file = tokio::fs::File::open(path).await?;

    let mut buffer = Vec::new();
    let mut reader = file.take(max_size + 1);
    reader.read_to_end(&mut buffer).await?;

    if buffer.len() as u64 > max_size {
        return Err(ReadError::TooLarge { limit: max_size });
    }

    String::from_utf8(buffer).map_err(|_| ReadError::NotUtf8)
}
