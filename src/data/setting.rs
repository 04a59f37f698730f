use log::warn;
use serde_json::{Map, Value};

use crate::data::schema::{SchemaError, as_object};

/// Declared type of a setting.
///
/// The recognized spellings are `bool`, `number`, `select` and `note`;
/// everything else behaves as free text and keeps its raw spelling for
/// re-serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingKind {
    /// Boolean toggle.
    Bool,
    /// Whole number.
    Number,
    /// Single choice from a list of permitted string options.
    Select,
    /// Descriptive entry with no value of its own.
    Note,
    /// Free text (`string`, `text`, `password`, `email`, `list`, ...).
    Text(String),
}

impl SettingKind {
    /// Classify a declared type string.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "bool" => SettingKind::Bool,
            "number" => SettingKind::Number,
            "select" => SettingKind::Select,
            "note" => SettingKind::Note,
            other => SettingKind::Text(other.to_string()),
        }
    }

    /// The raw spelling as it appeared in the document.
    pub fn as_str(&self) -> &str {
        match self {
            SettingKind::Bool => "bool",
            SettingKind::Number => "number",
            SettingKind::Select => "select",
            SettingKind::Note => "note",
            SettingKind::Text(raw) => raw,
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self, SettingKind::Select)
    }

    pub fn is_note(&self) -> bool {
        matches!(self, SettingKind::Note)
    }

    /// `list` settings are free text on the wire, but the INI renderer
    /// attaches an explanatory comment to them.
    pub fn is_list(&self) -> bool {
        matches!(self, SettingKind::Text(raw) if raw == "list")
    }
}

/// Single configurable key with declared type, default value and
/// descriptive metadata.
///
/// The full original record is kept alongside the parsed views, so
/// fields this tool does not interpret (`advanced`, `depends_true`,
/// `style`, ...) survive every transform unchanged.
#[derive(Debug, Clone)]
pub struct Setting {
    /// Declared type.
    pub kind: SettingKind,
    /// Default value. Its shape is not checked against the declared
    /// type; it is passed through uninterpreted.
    pub value: Value,
    /// Permitted options, present on `select` settings.
    pub options: Option<Vec<Value>>,
    /// The original record, in input order.
    raw: Map<String, Value>,
}

impl Setting {
    pub(crate) fn from_value(value: &Value, path: &str) -> Result<Self, SchemaError> {
        let obj = as_object(value, path)?;

        let kind_value = obj.get("type").ok_or_else(|| SchemaError::MissingField {
            path: path.to_string(),
            field: "type",
        })?;
        let kind_str = kind_value.as_str().ok_or_else(|| SchemaError::TypeMismatch {
            path: format!("{path}.type"),
            expected: "string".to_string(),
            actual: format!("{kind_value}"),
        })?;
        let kind = SettingKind::parse(kind_str);

        let value_field = obj
            .get("value")
            .ok_or_else(|| SchemaError::MissingField {
                path: path.to_string(),
                field: "value",
            })?
            .clone();

        let options = match obj.get("options") {
            Some(v) => Some(
                v.as_array()
                    .cloned()
                    .ok_or_else(|| SchemaError::TypeMismatch {
                        path: format!("{path}.options"),
                        expected: "array".to_string(),
                        actual: format!("{v}"),
                    })?,
            ),
            None => None,
        };
        if kind.is_select() && options.is_none() {
            warn!("`{path}`: select setting has no options list");
        }

        Ok(Setting {
            kind,
            value: value_field,
            options,
            raw: obj.clone(),
        })
    }

    /// Human-readable description, when present.
    pub fn description(&self) -> Option<&str> {
        self.raw.get("description").and_then(Value::as_str)
    }

    /// Serialize the setting back into a JSON value.
    pub fn as_json(&self) -> Value {
        Value::Object(self.raw.clone())
    }

    /// Consume the setting, yielding its fields in input order.
    pub(crate) fn into_fields(self) -> Map<String, Value> {
        self.raw
    }
}
