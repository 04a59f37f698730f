//! Document file I/O with format dispatch on extension.
//!
//! Documents are JSON-shaped values regardless of the on-disk format;
//! TOML and YAML files are bridged through `serde_json::Value`, which
//! preserves key order.

use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use serde_json::Value;

fn extension(path: &Path) -> &str {
    path.extension().and_then(|s| s.to_str()).unwrap_or("")
}

/// Read a document file, parsed according to its extension.
pub fn read_document(path: &Path) -> anyhow::Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value = match extension(path) {
        "json" => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?,
        "toml" | "tml" => {
            let v: toml::Value = toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            serde_json::to_value(v)?
        }
        "yaml" | "yml" => serde_yml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?,
        ext => {
            bail!("unsupported config file extension: {ext:?}");
        }
    };
    Ok(value)
}

/// Write a document file, serialized according to its extension.
pub fn write_document(path: &Path, value: &Value) -> anyhow::Result<()> {
    let content = match extension(path) {
        "json" => serde_json::to_string_pretty(value)?,
        "toml" | "tml" => toml::to_string_pretty(value)
            .with_context(|| format!("Failed to serialize {}", path.display()))?,
        "yaml" | "yml" => serde_yml::to_string(value)?,
        ext => {
            bail!("unsupported config file extension: {ext:?}");
        }
    };
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Write an already-rendered artifact verbatim.
pub fn write_text(path: &Path, text: &str) -> anyhow::Result<()> {
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}
