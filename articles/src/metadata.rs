//! Typed article metadata.
//!
//! The schema remains the source of truth for what a metadata document must
//! look like; this type mirrors only the fields the validation pipeline
//! inspects. Construct it with [`ArticleMetadata::from_validated`] after
//! schema validation has passed — a checked cast, not a projection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata for one article, as stored in its `data.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleMetadata {
    /// Article tags, in document order.
    pub tags: Vec<String>,
}

impl ArticleMetadata {
    /// Build the typed record from a document that already passed schema
    /// validation.
    ///
    /// # Errors
    ///
    /// Returns a deserialization error if the document does not carry the
    /// fields this type mirrors. With the default schema this cannot happen
    /// after a successful [`crate::schema::DocumentValidator::validate`]
    /// call; a custom schema that drops the `tags` requirement can surface
    /// an error here.
    pub fn from_validated(document: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(document)
    }
}
