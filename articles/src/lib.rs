//! Core types for multilingual article content.
//!
//! An article is a directory holding one markdown file per language plus a
//! `data.json` metadata file. This crate provides the input-agnostic pieces
//! of that contract:
//!
//! - [`lang`] — the language-tag naming convention for text files
//! - [`schema`] — JSON Schema validation of metadata documents
//! - [`metadata`] — the typed metadata record, constructed only from
//!   documents that already passed schema validation
//!
//! Filesystem discovery and the concurrent validation pipeline live in the
//! `articles-validator` crate.

pub mod lang;
pub mod metadata;
pub mod schema;


#[cfg(test)]
mod metadata_tests;

#[cfg(test)]
mod schema_tests;

// Re-export commonly used types
pub use lang::LanguageTag;
pub use metadata::ArticleMetadata;
pub use schema::{DocumentValidator, MetadataSchema, SchemaError, Violation};
