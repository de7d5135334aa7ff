//! Error taxonomy for article validation.
//!
//! Every failure names the article it belongs to and the rule it violated.
//! Nothing is recovered or retried locally: errors propagate to the driver,
//! where the first one observed fails the whole run.

use std::path::PathBuf;

use thiserror::Error;

/// The rule a validation failure violated, for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Root or article directory missing/unreadable.
    DirectoryUnreadable,
    /// Article has zero files with the text extension.
    NoTextFiles,
    /// A text file's base name is not a language tag.
    InvalidFilename,
    /// Metadata file missing, oversized, or unreadable.
    MetadataUnreadable,
    /// Metadata failed to parse as JSON or failed schema validation.
    MetadataInvalid,
}

/// A validation failure tied to one article and one rule.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ArticleError {
    /// The root or an article directory could not be listed.
    #[error("cannot read directory {}: {source}", path.display())]
    DirectoryUnreadable {
        /// The directory that could not be listed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The article contains no files with the required text extension.
    #[error("article {article} has no .{extension} files")]
    NoTextFiles {
        /// Name of the offending article.
        article: String,
        /// The required text-file extension.
        extension: String,
    },

    /// A text file's base name does not conform to the language-tag pattern.
    #[error("{file} in {article} doesn't conform to the language-tag naming convention")]
    InvalidFilename {
        /// Name of the offending article.
        article: String,
        /// The offending file name.
        file: String,
    },

    /// The metadata file is missing or could not be read.
    #[error("couldn't read {file} from {article}: {reason}")]
    MetadataUnreadable {
        /// Name of the offending article.
        article: String,
        /// The metadata file name.
        file: String,
        /// Description of the underlying read failure.
        reason: String,
    },

    /// The metadata file failed JSON parsing or schema validation.
    ///
    /// Parse errors and schema violations share this kind; `reason` carries
    /// either the stringified parse error or the schema validator's message
    /// for the first violation found.
    #[error("invalid {file} in {article}: {reason}")]
    MetadataInvalid {
        /// Name of the offending article.
        article: String,
        /// The metadata file name.
        file: String,
        /// Parse error or first schema violation, stringified.
        reason: String,
    },
}

impl ArticleError {
    /// The rule this error violated.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DirectoryUnreadable { .. } => ErrorKind::DirectoryUnreadable,
            Self::NoTextFiles { .. } => ErrorKind::NoTextFiles,
            Self::InvalidFilename { .. } => ErrorKind::InvalidFilename,
            Self::MetadataUnreadable { .. } => ErrorKind::MetadataUnreadable,
            Self::MetadataInvalid { .. } => ErrorKind::MetadataInvalid,
        }
    }

    /// The article this error belongs to, when the failure is per-article.
    ///
    /// `DirectoryUnreadable` carries a path instead: for the root directory
    /// there is no article to name.
    #[must_use]
    pub fn article(&self) -> Option<&str> {
        match self {
            Self::DirectoryUnreadable { .. } => None,
            Self::NoTextFiles { article, .. }
            | Self::InvalidFilename { article, .. }
            | Self::MetadataUnreadable { article, .. }
            | Self::MetadataInvalid { article, .. } => Some(article),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_article() {
        let err = ArticleError::NoTextFiles {
            article: "history-of-tea".to_owned(),
            extension: "md".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "article history-of-tea has no .md files"
        );
        assert_eq!(err.kind(), ErrorKind::NoTextFiles);
        assert_eq!(err.article(), Some("history-of-tea"));
    }

    #[test]
    fn test_invalid_filename_message_names_the_file() {
        let err = ArticleError::InvalidFilename {
            article: "a".to_owned(),
            file: "english.md".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("english.md"), "got: {msg}");
        assert!(msg.contains("in a"), "got: {msg}");
    }

    #[test]
    fn test_directory_unreadable_has_no_article() {
        let err = ArticleError::DirectoryUnreadable {
            path: PathBuf::from("articles"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.article(), None);
        assert_eq!(err.kind(), ErrorKind::DirectoryUnreadable);
        assert!(err.to_string().contains("articles"));
    }
}
