//! Schema document model and validation.
//!
//! This module provides the in-memory representation of a config base,
//! including:
//!
//! - Parsing a `serde_json::Value` into the typed document tree
//! - Validation of required fields, with errors naming the offending
//!   section/setting path
//! - Serialization back to a JSON value
//!
//! ## Architecture
//!
//! - [`schema`] - Document, section and metadata types
//! - [`setting`] - Individual setting representation

/// Document, section and metadata types.
pub mod schema;

/// Individual setting representation.
pub mod setting;

pub use schema::{Metadata, SchemaDocument, SchemaError, Section};
pub use setting::{Setting, SettingKind};
