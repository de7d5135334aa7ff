//! JSON Schema validation of article metadata documents.
//!
//! The concrete schema is external: the binary embeds a default, but any
//! JSON Schema document can be compiled. Whether unknown fields are tolerated
//! is decided by the schema itself (`additionalProperties`), never hardcoded
//! here.
//!
//! Validation is exposed through the [`DocumentValidator`] capability trait
//! so the schema description format and the validation engine can be swapped
//! independently of the pipeline that calls them.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Errors from compiling a schema document into a validator.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The schema document itself is not a valid JSON Schema.
    #[error("failed to compile metadata schema: {reason}")]
    Compile {
        /// Human-readable description from the schema compiler.
        reason: String,
    },

    /// The schema document is not valid JSON.
    #[error("metadata schema is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single schema violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the instance.
    pub instance_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// Capability for validating a parsed document against a fixed schema.
///
/// Implementations must be shareable across concurrent validations; the
/// pipeline compiles one validator at startup and reuses it for every
/// article.
pub trait DocumentValidator: Send + Sync {
    /// Validate a document, returning all violations found.
    ///
    /// # Errors
    ///
    /// Returns the non-empty list of violations when the document does not
    /// conform to the schema. The list order follows the validator's own
    /// traversal; callers that report a single failure take the first entry.
    fn validate(&self, document: &Value) -> Result<(), Vec<Violation>>;
}

/// Article metadata schema, compiled once and immutable thereafter.
///
/// Backed by the `jsonschema` crate. The compiled validator is `Send + Sync`,
/// so a single instance is safely shared by all in-flight article
/// validations.
pub struct MetadataSchema {
    validator: jsonschema::Validator,
}

impl fmt::Debug for MetadataSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetadataSchema").finish_non_exhaustive()
    }
}

impl MetadataSchema {
    /// Compile a JSON Schema document into a reusable validator.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Compile`] if the document is not a valid
    /// JSON Schema.
    pub fn compile(schema: &Value) -> Result<Self, SchemaError> {
        let validator =
            jsonschema::validator_for(schema).map_err(|e| SchemaError::Compile {
                reason: e.to_string(),
            })?;
        tracing::debug!("compiled metadata schema");
        Ok(Self { validator })
    }

    /// Parse schema source text and compile it.
    ///
    /// Convenience for loading an embedded or on-disk schema file.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Parse`] if the text is not valid JSON, or
    /// [`SchemaError::Compile`] if it is not a valid JSON Schema.
    pub fn from_json_str(source: &str) -> Result<Self, SchemaError> {
        let schema: Value = serde_json::from_str(source)?;
        Self::compile(&schema)
    }
}

impl DocumentValidator for MetadataSchema {
    fn validate(&self, document: &Value) -> Result<(), Vec<Violation>> {
        let violations: Vec<Violation> = self
            .validator
            .iter_errors(document)
            .map(|e| Violation {
                instance_path: e.instance_path().to_string(),
                message: e.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
