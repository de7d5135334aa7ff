//! Validation run summary.

use serde::Serialize;

/// Result of a successful validation run.
///
/// A run that fails never produces a report — the first `ArticleError`
/// surfaces instead. Per-article success is not reported individually.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ValidationReport {
    /// Number of articles that passed validation.
    pub articles_validated: usize,
}

impl ValidationReport {
    /// One-line human confirmation, printed by the binary on success.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "All {} article(s) were validated successfully.",
            self.articles_validated
        )
    }
}
