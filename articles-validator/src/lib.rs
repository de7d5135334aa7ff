//! # articles-validator
//!
//! Concurrent filesystem validator for multilingual article directories.
//!
//! An article is a subdirectory of the root containing one markdown file per
//! language (`en.md`, `fr-CA.md`, ...) plus a `data.json` metadata file that
//! must conform to a JSON Schema. Every article is validated concurrently on
//! a single-threaded cooperative runtime; the first failure fails the run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! use articles::MetadataSchema;
//! use articles_validator::{ValidatorConfig, validate_articles};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let schema = MetadataSchema::from_json_str(
//!     r#"{"type": "object", "required": ["tags"]}"#,
//! )?;
//!
//! let mut config = ValidatorConfig::default();
//! config.root = PathBuf::from("articles");
//!
//! let report = validate_articles(&config, Arc::new(schema)).await?;
//! println!("{}", report.summary_line());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
mod filename;
mod fs;
pub mod report;

pub use config::ValidatorConfig;
pub use error::{ArticleError, ErrorKind};
pub use report::ValidationReport;

use std::sync::Arc;

use articles::metadata::ArticleMetadata;
use articles::schema::DocumentValidator;

/// Validate every article under the configured root.
///
/// Enumerates the immediate entries of `config.root` as article names and
/// runs the per-article checks (text-file naming + metadata) as one task per
/// article. Tasks interleave cooperatively; no ordering is guaranteed across
/// articles. The first failure observed fails the run — sibling tasks are
/// not cancelled, their results are simply discarded.
///
/// # Errors
///
/// Returns the first [`ArticleError`] encountered: an unreadable directory,
/// an article without text files, a text file violating the language-tag
/// naming convention, or a missing/unparseable/non-conforming metadata file.
///
/// # Panics
///
/// Re-raises a panic from a validation task. The pipeline itself does not
/// panic; this can only propagate a panic out of a custom
/// [`DocumentValidator`] implementation.
pub async fn validate_articles(
    config: &ValidatorConfig,
    schema: Arc<dyn DocumentValidator>,
) -> Result<ValidationReport, ArticleError> {
    let articles = fs::list_entries(&config.root).await?;
    tracing::debug!(count = articles.len(), root = %config.root.display(), "listed articles");

    let mut tasks = Vec::with_capacity(articles.len());
    for article in articles {
        let config = config.clone();
        let schema = Arc::clone(&schema);
        tasks.push(tokio::task::spawn(async move {
            validate_article(&config, schema.as_ref(), &article).await
        }));
    }

    let mut articles_validated = 0;
    for task in tasks {
        match task.await {
            Ok(result) => {
                result?;
                articles_validated += 1;
            }
            // Tasks are never aborted, so a join error is always a panic.
            Err(join_error) => std::panic::resume_unwind(join_error.into_panic()),
        }
    }

    Ok(ValidationReport { articles_validated })
}

/// Run all checks for a single article.
///
/// The two per-article checks are independent; they run in sequence here
/// (naming first) purely for simplicity. On success, returns the typed
/// metadata built from the validated document.
async fn validate_article(
    config: &ValidatorConfig,
    schema: &dyn DocumentValidator,
    article: &str,
) -> Result<ArticleMetadata, ArticleError> {
    tracing::debug!(article, "validating article");
    let article_path = config.root.join(article);

    let files = fs::list_entries(&article_path).await?;
    filename::check_text_files(article, &files, &config.text_extension)?;

    let metadata_path = article_path.join(&config.metadata_filename);
    let text = fs::read_bounded(&metadata_path, config.max_metadata_size)
        .await
        .map_err(|e| ArticleError::MetadataUnreadable {
            article: article.to_owned(),
            file: config.metadata_filename.clone(),
            reason: e.to_string(),
        })?;

    let document: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| ArticleError::MetadataInvalid {
            article: article.to_owned(),
            file: config.metadata_filename.clone(),
            reason: e.to_string(),
        })?;

    if let Err(violations) = schema.validate(&document) {
        // Report the first violation, per the validator's traversal order.
        let first = violations
            .first()
            .map(ToString::to_string)
            .unwrap_or_default();
        return Err(ArticleError::MetadataInvalid {
            article: article.to_owned(),
            file: config.metadata_filename.clone(),
            reason: first,
        });
    }

    ArticleMetadata::from_validated(document).map_err(|e| ArticleError::MetadataInvalid {
        article: article.to_owned(),
        file: config.metadata_filename.clone(),
        reason: e.to_string(),
    })
}
