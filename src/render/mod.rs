//! Textual artifact generators.
//!
//! Unlike the passes, these produce text rather than documents:
//!
//! - [`structgen`] - Go struct declaration mirroring the schema shape
//! - [`ini`] - INI config file with defaults and description comments

/// Struct declaration generator.
pub mod structgen;

/// INI renderer.
pub mod ini;
