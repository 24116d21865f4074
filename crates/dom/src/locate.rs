//! Tree-search helpers shared by the templating passes.
use crate::tree::{Document, NodeId};

/// Direct element children of `parent` whose tag matches `tag`
/// case-insensitively, in document order. Does not descend.
pub fn child_elements_by_tag(doc: &Document, parent: NodeId, tag: &str) -> Vec<NodeId> {
    doc.children(parent)
        .iter()
        .copied()
        .filter(|&child| doc.tag_is(child, tag))
        .collect()
}

/// Depth-first, pre-order search below `from` for the first element whose
/// `id` attribute equals `id`. Duplicate ids are tolerated; the first match
/// in document order wins.
pub fn find_by_id(doc: &Document, from: NodeId, id: &str) -> Option<NodeId> {
    for &child in doc.children(from) {
        if doc.is_element(child) {
            if doc.attribute(child, "id") == Some(id) {
                return Some(child);
            }
            if let Some(found) = find_by_id(doc, child, id) {
                return Some(found);
            }
        }
    }
    None
}
