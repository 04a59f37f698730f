//! Struct declaration generator.
//!
//! Emits a Go struct declaration mirroring the schema shape, so the
//! consuming application gets compile-time-checked access to the
//! document the other passes produce. The declaration is built as a
//! field tree walked from the in-memory schema, then rendered; the
//! renderer knows nothing about sections or settings.

use serde_json::Value;

use crate::data::{SchemaDocument, Section, Setting, SettingKind};

/// A field in the generated declaration.
struct Field {
    name: String,
    ty: FieldType,
    tags: Vec<(&'static str, String)>,
    comment: Option<String>,
}

enum FieldType {
    /// A named type: `string`, `int`, `bool`, `Metadata`.
    Named(&'static str),
    /// `[]string`.
    StringList,
    /// Nested anonymous struct.
    Struct(Vec<Field>),
}

impl Field {
    fn named(name: &str, ty: &'static str, tags: Vec<(&'static str, String)>) -> Self {
        Field {
            name: name.to_string(),
            ty: FieldType::Named(ty),
            tags,
            comment: None,
        }
    }
}

fn json_tag(value: &str) -> Vec<(&'static str, String)> {
    vec![("json", value.to_string())]
}

/// Generate the full declaration source for a schema document.
pub fn generate(doc: &SchemaDocument, package: &str) -> String {
    let mut w = Lines::default();
    w.push(&format!("package {package}"));
    w.push("");
    w.push("type Metadata struct{");
    emit(&mut w, &metadata_fields());
    w.push("}");
    w.push("");
    w.push("type Config struct{");
    emit(&mut w, &config_fields(doc));
    w.push("}");
    w.finish()
}

fn metadata_fields() -> Vec<Field> {
    vec![
        Field::named("Name", "string", json_tag("name")),
        Field::named("Description", "string", json_tag("description")),
    ]
}

fn config_fields(doc: &SchemaDocument) -> Vec<Field> {
    let mut fields = Vec::with_capacity(doc.sections.len() + 1);
    if doc.order.is_some() {
        fields.push(order_field());
    }
    for (name, section) in &doc.sections {
        fields.push(section_field(name, section));
    }
    fields
}

fn order_field() -> Field {
    Field {
        name: "Order".to_string(),
        ty: FieldType::StringList,
        tags: json_tag("order"),
        comment: None,
    }
}

fn section_field(name: &str, section: &Section) -> Field {
    let mut children = Vec::with_capacity(section.settings.len() + 2);
    if section.order.is_some() {
        children.push(order_field());
    }
    children.push(Field::named("Meta", "Metadata", json_tag("meta")));
    for (key, setting) in &section.settings {
        children.push(setting_field(key, setting));
    }
    Field {
        name: identifier(name),
        ty: FieldType::Struct(children),
        tags: json_tag(name),
        comment: None,
    }
}

fn setting_field(key: &str, setting: &Setting) -> Field {
    let mut children = vec![
        Field::named("Name", "string", json_tag("name")),
        Field::named("Required", "bool", json_tag("required")),
        Field::named("Restart", "bool", json_tag("requires_restart")),
        Field::named("Description", "string", json_tag("description")),
        Field::named("Type", "string", json_tag("type")),
    ];
    if setting.kind.is_select() {
        children.push(Field {
            name: "Options".to_string(),
            ty: FieldType::StringList,
            tags: json_tag("options"),
            comment: options_literal(setting),
        });
    }
    children.push(Field::named(
        "Value",
        value_type(&setting.kind),
        vec![("json", "value".to_string()), ("cfg", key.to_string())],
    ));
    Field {
        name: identifier(key),
        ty: FieldType::Struct(children),
        tags: vec![("json", key.to_string()), ("cfg", key.to_string())],
        comment: None,
    }
}

/// Closed type table. Unknown declared types fall back to `string`;
/// they never error.
fn value_type(kind: &SettingKind) -> &'static str {
    match kind {
        SettingKind::Bool => "bool",
        SettingKind::Number => "int",
        SettingKind::Select | SettingKind::Note | SettingKind::Text(_) => "string",
    }
}

fn options_literal(setting: &Setting) -> Option<String> {
    setting
        .options
        .as_ref()
        .map(|opts| Value::Array(opts.clone()).to_string())
}

/// Turn a snake_case key into the declaration identifier: the first
/// letter of each underscore-separated token uppercased, the rest left
/// unchanged.
fn identifier(key: &str) -> String {
    key.split('_').map(capitalize).collect()
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn emit(w: &mut Lines, fields: &[Field]) {
    for field in fields {
        let tags = render_tags(&field.tags);
        let comment = field
            .comment
            .as_ref()
            .map(|c| format!(" // {c}"))
            .unwrap_or_default();
        match &field.ty {
            FieldType::Named(ty) => w.push(&format!("{} {ty}{tags}{comment}", field.name)),
            FieldType::StringList => w.push(&format!("{} []string{tags}{comment}", field.name)),
            FieldType::Struct(children) => {
                w.push(&format!("{} struct{{", field.name));
                emit(w, children);
                w.push(&format!("}}{tags}"));
            }
        }
    }
}

fn render_tags(tags: &[(&'static str, String)]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let inner = tags
        .iter()
        .map(|(key, value)| format!("{key}:\"{value}\""))
        .collect::<Vec<_>>()
        .join(" ");
    format!(" `{inner}`")
}

/// Line accumulator tracking indentation by brace nesting: one level
/// gained per line with an unmatched `{`, given back on the line with
/// the matching `}`.
#[derive(Default)]
struct Lines {
    out: String,
    indent: usize,
}

impl Lines {
    fn push(&mut self, line: &str) {
        if line.contains('}') && !line.contains('{') {
            self.indent = self.indent.saturating_sub(1);
        }
        if !line.is_empty() {
            for _ in 0..self.indent {
                self.out.push('\t');
            }
        }
        self.out.push_str(line);
        self.out.push('\n');
        if line.contains('{') && !line.contains('}') {
            self.indent += 1;
        }
    }

    fn finish(self) -> String {
        self.out
    }
}
