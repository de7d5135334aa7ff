//! Text-file naming checks for one article.

use std::ffi::OsStr;
use std::path::Path;

use articles::lang::is_language_tag;

use crate::error::ArticleError;

/// Check one article's file list against the naming convention.
///
/// Filters the list to files whose extension matches `extension` exactly
/// (case-sensitive), requires at least one such file, and requires every
/// base name to be an anchored language tag. Among multiple invalid names,
/// the first one found is reported.
pub(crate) fn check_text_files(
    article: &str,
    files: &[String],
    extension: &str,
) -> Result<(), ArticleError> {
    let text_files: Vec<&String> = files
        .iter()
        .filter(|f| Path::new(f.as_str()).extension().and_then(OsStr::to_str) == Some(extension))
        .collect();

    if text_files.is_empty() {
        return Err(ArticleError::NoTextFiles {
            article: article.to_owned(),
            extension: extension.to_owned(),
        });
    }

    for file in text_files {
        let base_name = Path::new(file.as_str())
            .file_stem()
            .and_then(OsStr::to_str)
            .unwrap_or("");
        if !is_language_tag(base_name) {
            return Err(ArticleError::InvalidFilename {
                article: article.to_owned(),
                file: (*file).clone(),
            });
        }
    }

    Ok(())
}
