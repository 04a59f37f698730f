//! Pure document-to-document transforms.
//!
//! Each pass consumes the document it receives and produces a new one;
//! there is no shared state between passes and no side effect beyond the
//! caller's final file write.
//!
//! - [`enumerate`] - Make the author-intended order explicit
//! - [`flatten`] - Keyed mappings to ordered record lists

/// Ordering pass.
pub mod enumerate;

/// Flattening pass.
pub mod flatten;

pub use enumerate::enumerate;
pub use flatten::{FlatDocument, FlatSection, FlatSetting, flatten};

/// Reorder keyed entries to match `order`, consuming the input.
///
/// Names absent from `order` are dropped here, so callers must pass an
/// order already reconciled against the keys (see
/// [`crate::data::SchemaDocument::section_order`]).
pub(crate) fn take_ordered<T>(items: Vec<(String, T)>, order: &[String]) -> Vec<(String, T)> {
    let mut slots: Vec<Option<(String, T)>> = items.into_iter().map(Some).collect();
    let mut out = Vec::with_capacity(slots.len());
    for name in order {
        if let Some(slot) = slots
            .iter_mut()
            .find(|s| matches!(s, Some((key, _)) if key == name))
            && let Some(entry) = slot.take()
        {
            out.push(entry);
        }
    }
    out
}
