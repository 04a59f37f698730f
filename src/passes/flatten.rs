//! Flattening pass.
//!
//! Converts the keyed section/setting mappings into ordered lists of
//! records, each record carrying its former map key as a `section` /
//! `setting` field. The separate `order` lists are dropped: once the
//! records are a sequence, their position encodes the order.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::data::{Metadata, SchemaDocument, Section};
use crate::passes::take_ordered;

/// Flattened document: sections as an ordered list of records.
#[derive(Debug, Serialize)]
pub struct FlatDocument {
    pub sections: Vec<FlatSection>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Section record carrying its former map key.
#[derive(Debug, Serialize)]
pub struct FlatSection {
    pub section: String,
    pub meta: Metadata,
    pub settings: Vec<FlatSetting>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Setting record carrying its former map key. All other fields pass
/// through unchanged.
#[derive(Debug, Serialize)]
pub struct FlatSetting {
    pub setting: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Flatten a schema document into ordered record lists.
///
/// Order-preserving: the n-th record corresponds to the n-th name of
/// the source document's order. Applying this to already-flattened
/// input is undefined; callers guarantee the mapping shape.
pub fn flatten(doc: SchemaDocument) -> FlatDocument {
    let order = doc.section_order();
    let SchemaDocument {
        sections, extra, ..
    } = doc;

    let sections = take_ordered(sections, &order)
        .into_iter()
        .map(|(name, section)| flatten_section(name, section))
        .collect();

    FlatDocument { sections, extra }
}

fn flatten_section(name: String, section: Section) -> FlatSection {
    let order = section.setting_order(&format!("settings of `{name}`"));
    let Section {
        meta,
        settings,
        extra,
        ..
    } = section;

    let settings = take_ordered(settings, &order)
        .into_iter()
        .map(|(key, setting)| FlatSetting {
            setting: key,
            fields: setting.into_fields(),
        })
        .collect();

    FlatSection {
        section: name,
        meta,
        settings,
        extra,
    }
}
