#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use serde_json::json;

    use crate::metadata::ArticleMetadata;

    #[test]
    fn test_from_validated_extracts_tags() {
        let meta = ArticleMetadata::from_validated(json!({"tags": ["a", "b"]})).unwrap();
        assert_eq!(meta.tags, vec!["a", "b"]);
    }

    #[test]
    fn test_from_validated_preserves_tag_order() {
        let meta =
            ArticleMetadata::from_validated(json!({"tags": ["z", "a", "m"]})).unwrap();
        assert_eq!(meta.tags, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        // Tolerating extra fields is the schema's call; the typed record
        // simply does not mirror them.
        let meta = ArticleMetadata::from_validated(json!({
            "tags": ["x"],
            "author": "someone",
            "draft": true
        }))
        .unwrap();
        assert_eq!(meta.tags, vec!["x"]);
    }

    #[test]
    fn test_missing_tags_errors() {
        assert!(ArticleMetadata::from_validated(json!({})).is_err());
    }
}
