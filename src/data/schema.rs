use log::warn;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::data::setting::Setting;

/// Errors produced while validating a schema document.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A required field is absent.
    #[error("missing required field `{field}` at `{path}`")]
    MissingField { path: String, field: &'static str },
    /// A field holds a value of the wrong shape.
    #[error("type mismatch at `{path}`: expected {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },
}

pub(crate) fn as_object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a Map<String, Value>, SchemaError> {
    value.as_object().ok_or_else(|| SchemaError::TypeMismatch {
        path: path.to_string(),
        expected: "object".to_string(),
        actual: format!("{value}"),
    })
}

fn string_list(value: &Value, path: &str) -> Result<Vec<String>, SchemaError> {
    let arr = value.as_array().ok_or_else(|| SchemaError::TypeMismatch {
        path: path.to_string(),
        expected: "array of strings".to_string(),
        actual: format!("{value}"),
    })?;
    arr.iter()
        .map(|v| {
            v.as_str()
                .map(str::to_string)
                .ok_or_else(|| SchemaError::TypeMismatch {
                    path: path.to_string(),
                    expected: "string".to_string(),
                    actual: format!("{v}"),
                })
        })
        .collect()
}

/// Reconcile a declared order list with the keys actually present.
///
/// Without a declared order, insertion order wins. With one, entries
/// that have no backing key are skipped and keys missing from the list
/// are appended, each with a warning; nothing is dropped silently.
pub(crate) fn resolve_order(
    declared: Option<&[String]>,
    keys: &[String],
    scope: &str,
) -> Vec<String> {
    let Some(declared) = declared else {
        return keys.to_vec();
    };
    let mut resolved = Vec::with_capacity(keys.len());
    for name in declared {
        if keys.contains(name) {
            resolved.push(name.clone());
        } else {
            warn!("{scope}: `{name}` is listed in the order but has no entry, skipping it");
        }
    }
    for key in keys {
        if !declared.contains(key) {
            warn!("{scope}: `{key}` is missing from the declared order, appending it");
            resolved.push(key.clone());
        }
    }
    resolved
}

/// Display metadata shared by a section's settings.
#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    /// Friendly name of the section.
    pub name: String,
    /// Plain-text description, rendered as a comment in INI output.
    pub description: String,
    /// Fields this tool does not interpret, in input order.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn require_str(
    obj: &Map<String, Value>,
    key: &'static str,
    path: &str,
) -> Result<String, SchemaError> {
    let v = obj.get(key).ok_or(SchemaError::MissingField {
        path: path.to_string(),
        field: key,
    })?;
    v.as_str()
        .map(str::to_string)
        .ok_or_else(|| SchemaError::TypeMismatch {
            path: format!("{path}.{key}"),
            expected: "string".to_string(),
            actual: format!("{v}"),
        })
}

impl Metadata {
    fn from_value(value: &Value, path: &str) -> Result<Self, SchemaError> {
        let obj = as_object(value, path)?;
        let name = require_str(obj, "name", path)?;
        let description = require_str(obj, "description", path)?;
        let extra = obj
            .iter()
            .filter(|(k, _)| k.as_str() != "name" && k.as_str() != "description")
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Ok(Metadata {
            name,
            description,
            extra,
        })
    }

    pub fn as_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("name".to_string(), Value::String(self.name.clone()));
        obj.insert(
            "description".to_string(),
            Value::String(self.description.clone()),
        );
        obj.extend(self.extra.clone());
        Value::Object(obj)
    }
}

/// Named grouping of related settings plus shared metadata.
#[derive(Debug, Clone)]
pub struct Section {
    /// Display metadata. Required on every section.
    pub meta: Metadata,
    /// Explicit setting order, once the ordering pass has run.
    pub order: Option<Vec<String>>,
    /// Settings keyed by name, in input order.
    pub settings: Vec<(String, Setting)>,
    /// Fields this tool does not interpret, in input order.
    pub extra: Map<String, Value>,
}

const SECTION_FIELDS: [&str; 3] = ["meta", "order", "settings"];

impl Section {
    fn from_value(value: &Value, path: &str) -> Result<Self, SchemaError> {
        let obj = as_object(value, path)?;

        let meta = obj.get("meta").ok_or(SchemaError::MissingField {
            path: path.to_string(),
            field: "meta",
        })?;
        let meta = Metadata::from_value(meta, &format!("{path}.meta"))?;

        let order = obj
            .get("order")
            .map(|v| string_list(v, &format!("{path}.order")))
            .transpose()?;

        let settings_value = obj.get("settings").ok_or(SchemaError::MissingField {
            path: path.to_string(),
            field: "settings",
        })?;
        let settings_obj = as_object(settings_value, &format!("{path}.settings"))?;
        let mut settings = Vec::with_capacity(settings_obj.len());
        for (key, v) in settings_obj {
            let setting = Setting::from_value(v, &format!("{path}.settings.{key}"))?;
            settings.push((key.clone(), setting));
        }

        let extra = obj
            .iter()
            .filter(|(k, _)| !SECTION_FIELDS.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(Section {
            meta,
            order,
            settings,
            extra,
        })
    }

    /// Look up a setting by name.
    pub fn setting(&self, name: &str) -> Option<&Setting> {
        self.settings
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, setting)| setting)
    }

    fn setting_names(&self) -> Vec<String> {
        self.settings.iter().map(|(key, _)| key.clone()).collect()
    }

    /// Setting names in author-intended order. `scope` labels any
    /// divergence warnings (e.g. ``settings of `ui` ``).
    pub fn setting_order(&self, scope: &str) -> Vec<String> {
        resolve_order(self.order.as_deref(), &self.setting_names(), scope)
    }

    /// Serialize the section back into a JSON value.
    pub fn as_json(&self) -> Value {
        let mut obj = Map::new();
        if let Some(order) = &self.order {
            obj.insert(
                "order".to_string(),
                Value::Array(order.iter().map(|s| Value::String(s.clone())).collect()),
            );
        }
        obj.insert("meta".to_string(), self.meta.as_json());
        let mut settings = Map::new();
        for (key, setting) in &self.settings {
            settings.insert(key.clone(), setting.as_json());
        }
        obj.insert("settings".to_string(), Value::Object(settings));
        obj.extend(self.extra.clone());
        Value::Object(obj)
    }
}

/// Root of a config base: sections keyed by name, optionally with an
/// explicit order.
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    /// Explicit section order, once the ordering pass has run.
    pub order: Option<Vec<String>>,
    /// Sections keyed by name, in input order.
    pub sections: Vec<(String, Section)>,
    /// Fields this tool does not interpret, in input order.
    pub extra: Map<String, Value>,
}

const DOCUMENT_FIELDS: [&str; 2] = ["order", "sections"];

impl TryFrom<&Value> for SchemaDocument {
    type Error = SchemaError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let obj = as_object(value, "(root)")?;

        let order = obj
            .get("order")
            .map(|v| string_list(v, "order"))
            .transpose()?;

        let sections_value = obj.get("sections").ok_or(SchemaError::MissingField {
            path: "(root)".to_string(),
            field: "sections",
        })?;
        let sections_obj = as_object(sections_value, "sections")?;
        let mut sections = Vec::with_capacity(sections_obj.len());
        for (name, v) in sections_obj {
            let section = Section::from_value(v, &format!("sections.{name}"))?;
            sections.push((name.clone(), section));
        }

        let extra = obj
            .iter()
            .filter(|(k, _)| !DOCUMENT_FIELDS.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(SchemaDocument {
            order,
            sections,
            extra,
        })
    }
}

impl SchemaDocument {
    /// Look up a section by name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, section)| section)
    }

    fn section_names(&self) -> Vec<String> {
        self.sections.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Section names in author-intended order.
    pub fn section_order(&self) -> Vec<String> {
        resolve_order(self.order.as_deref(), &self.section_names(), "sections")
    }

    /// Serialize the document back into a JSON value.
    pub fn as_json(&self) -> Value {
        let mut obj = Map::new();
        if let Some(order) = &self.order {
            obj.insert(
                "order".to_string(),
                Value::Array(order.iter().map(|s| Value::String(s.clone())).collect()),
            );
        }
        let mut sections = Map::new();
        for (name, section) in &self.sections {
            sections.insert(name.clone(), section.as_json());
        }
        obj.insert("sections".to_string(), Value::Object(sections));
        obj.extend(self.extra.clone());
        Value::Object(obj)
    }
}
