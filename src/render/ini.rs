//! INI renderer.
//!
//! Produces the shipped default config file: one INI section per schema
//! section in document order, each setting rendered as `key = value`
//! with its description as a preceding comment. Output is byte-stable
//! for a fixed input.

use serde_json::Value;

use crate::data::{SchemaDocument, Setting};

/// Render a schema document as INI text.
pub fn generate(doc: &SchemaDocument) -> String {
    let mut out = String::new();
    for name in doc.section_order() {
        let Some(section) = doc.section(&name) else {
            continue;
        };
        out.push('[');
        out.push_str(&name);
        out.push_str("]\n");
        if !section.meta.description.is_empty() {
            out.push_str(&comment(&section.meta.description));
        }
        for key in section.setting_order(&format!("settings of `{name}`")) {
            let Some(setting) = section.setting(&key) else {
                continue;
            };
            render_setting(&mut out, &key, setting);
        }
        out.push('\n');
    }
    out
}

fn render_setting(out: &mut String, key: &str, setting: &Setting) {
    if let Some(desc) = setting.description()
        && !desc.is_empty()
    {
        out.push_str(&comment(desc));
    }
    if setting.kind.is_list() {
        out.push_str("; List type: duplicate and edit the line to add more entries.\n");
    }
    if setting.kind.is_note() {
        // Notes are purely descriptive; the comment is all there is.
        return;
    }
    out.push_str(key);
    out.push_str(" = ");
    out.push_str(&value_str(&setting.value));
    out.push('\n');
}

/// Prefix the text with the comment marker, re-applied after every
/// embedded newline so multi-line descriptions stay valid comments.
fn comment(text: &str) -> String {
    format!("; {}\n", text.replace('\n', "\n; "))
}

fn value_str(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
