//! Ordering pass.
//!
//! JSON objects carry no inherent key order once they reach consumers
//! that parse them into unordered maps, so this pass records the
//! author-intended sequence as an explicit `order` list on the document
//! and on every section.

use crate::data::SchemaDocument;
use crate::passes::take_ordered;

/// Inject explicit `order` lists into a schema document.
///
/// The declared order wins when present (divergences are warned about
/// and reconciled, see [`SchemaDocument::section_order`]); otherwise
/// insertion order is recorded. Sections and settings are re-sequenced
/// to match, so re-running the pass on its own output is a no-op.
pub fn enumerate(mut doc: SchemaDocument) -> SchemaDocument {
    let order = doc.section_order();
    doc.sections = take_ordered(std::mem::take(&mut doc.sections), &order);
    doc.order = Some(order);

    for (name, section) in doc.sections.iter_mut() {
        let order = section.setting_order(&format!("settings of `{name}`"));
        section.settings = take_ordered(std::mem::take(&mut section.settings), &order);
        section.order = Some(order);
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: &serde_json::Value) -> SchemaDocument {
        SchemaDocument::try_from(value).unwrap()
    }

    fn base() -> serde_json::Value {
        json!({
            "sections": {
                "jellyfin": {
                    "meta": { "name": "Jellyfin", "description": "Server." },
                    "settings": {
                        "server": { "type": "string", "value": "http://localhost:8096" },
                        "version": { "type": "string", "value": "0.1.0" }
                    }
                },
                "ui": {
                    "meta": { "name": "UI", "description": "Appearance." },
                    "settings": {
                        "theme": { "type": "select", "options": ["light", "dark"], "value": "dark" }
                    }
                }
            }
        })
    }

    #[test]
    fn records_insertion_order() {
        let out = enumerate(doc(&base()));
        assert_eq!(out.order.as_deref().unwrap(), ["jellyfin", "ui"]);
        let jellyfin = out.section("jellyfin").unwrap();
        assert_eq!(jellyfin.order.as_deref().unwrap(), ["server", "version"]);
    }

    #[test]
    fn idempotent_byte_for_byte() {
        let once = enumerate(doc(&base())).as_json();
        let twice = enumerate(doc(&once)).as_json();
        assert_eq!(
            serde_json::to_string(&once).unwrap(),
            serde_json::to_string(&twice).unwrap()
        );
    }

    #[test]
    fn reconciles_divergent_declared_order() {
        let mut input = base();
        input["order"] = json!(["ui", "ghost"]);
        let out = enumerate(doc(&input));
        // "ghost" is skipped, unlisted "jellyfin" is appended.
        assert_eq!(out.order.as_deref().unwrap(), ["ui", "jellyfin"]);
        assert_eq!(out.sections[0].0, "ui");
        assert_eq!(out.sections[1].0, "jellyfin");
    }

    #[test]
    fn section_count_is_preserved() {
        let input = base();
        let mapping_len = input["sections"].as_object().unwrap().len();
        let out = enumerate(doc(&input));
        assert_eq!(out.sections.len(), mapping_len);
        assert_eq!(out.order.as_deref().unwrap().len(), mapping_len);
    }
}
