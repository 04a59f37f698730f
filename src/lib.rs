//! # confbase
//!
//! Build-time transforms over a JSON "config base": a schema document
//! describing sections of typed settings, from which several artifacts
//! consumed by later build steps are derived.
//!
//! ## Transforms
//!
//! - **Enumerate**: inject explicit `order` lists so consumers of
//!   serializations without inherent key order can render sections and
//!   settings in the author-intended sequence
//! - **Flatten**: turn keyed section/setting mappings into ordered lists
//!   of records, each carrying its former map key as a field
//! - **Struct generation**: emit a Go struct declaration mirroring the
//!   schema shape, with `json:`/`cfg:` tags derived from the keys
//! - **INI rendering**: produce a config file with default values and
//!   descriptions as comments
//!
//! Every transform is a pure function from one in-memory document to
//! another (or to text); the only side effects are the initial file read
//! and the final file write. The tool is one-shot and single-threaded.
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface and dispatch
//! - [`data`] - Schema document model and validation
//! - [`io`] - Format-dispatched document reading and writing
//! - [`passes`] - Document-to-document transforms
//! - [`render`] - Textual artifact generators

/// Command-line interface and command dispatch.
pub mod cli;

/// Schema document model and validation.
pub mod data;

/// Document file I/O with format dispatch on extension.
pub mod io;

/// Pure document-to-document transforms.
pub mod passes;

/// Textual artifact generators.
pub mod render;
