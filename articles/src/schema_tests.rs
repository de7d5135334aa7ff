#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use serde_json::json;

    use crate::schema::{DocumentValidator, MetadataSchema, SchemaError};

    fn tags_schema() -> MetadataSchema {
        MetadataSchema::compile(&json!({
            "type": "object",
            "required": ["tags"],
            "properties": {
                "tags": {
                    "type": "array",
                    "items": {"type": "string"}
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_valid_document_passes() {
        let schema = tags_schema();
        assert!(schema.validate(&json!({"tags": ["history", "science"]})).is_ok());
        assert!(schema.validate(&json!({"tags": []})).is_ok());
    }

    #[test]
    fn test_missing_tags_field_fails() {
        let schema = tags_schema();
        let violations = schema.validate(&json!({})).unwrap_err();
        assert!(!violations.is_empty());
        assert!(
            violations[0].message.contains("tags"),
            "expected violation mentioning 'tags', got: {violations:?}"
        );
    }

    #[test]
    fn test_non_string_tag_fails() {
        let schema = tags_schema();
        let violations = schema.validate(&json!({"tags": ["ok", 42]})).unwrap_err();
        assert!(!violations.is_empty());
        // The violating element's path points into the array.
        assert!(
            violations.iter().any(|v| v.instance_path.contains("/tags/1")),
            "expected a violation at /tags/1, got: {violations:?}"
        );
    }

    #[test]
    fn test_non_object_document_fails() {
        let schema = tags_schema();
        assert!(schema.validate(&json!(["not", "an", "object"])).is_err());
        assert!(schema.validate(&json!("scalar")).is_err());
    }

    #[test]
    fn test_extra_fields_policy_is_schema_defined() {
        // Open schema tolerates unknown fields.
        let open = tags_schema();
        assert!(open.validate(&json!({"tags": [], "author": "x"})).is_ok());

        // Closed schema rejects them.
        let closed = MetadataSchema::compile(&json!({
            "type": "object",
            "required": ["tags"],
            "properties": {
                "tags": {"type": "array", "items": {"type": "string"}}
            },
            "additionalProperties": false
        }))
        .unwrap();
        assert!(closed.validate(&json!({"tags": [], "author": "x"})).is_err());
    }

    #[test]
    fn test_invalid_schema_source_errors() {
        let err = MetadataSchema::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, SchemaError::Parse(_)));
    }

    #[test]
    fn test_violation_display_includes_path() {
        let schema = tags_schema();
        let violations = schema.validate(&json!({"tags": [1]})).unwrap_err();
        let display = violations[0].to_string();
        assert!(display.contains("/tags/0"), "got: {display}");
    }
}
