//! Wrapper-removal primitive used by the conditional-expansion pass.
use crate::tree::{Document, NodeId};

/// Replaces `wrapper` with its own element children.
///
/// Every element child of `wrapper` is moved, in its original order, under
/// `insertion_point`'s parent immediately before `insertion_point`; text and
/// comment children of the wrapper are discarded, not promoted. The wrapper
/// itself is detached afterwards. For plain wrapper removal the two
/// arguments are the same node; else-branch merging passes the `<else>`
/// element as the wrapper and the enclosing `<if>` as the insertion point.
pub fn splice(doc: &mut Document, wrapper: NodeId, insertion_point: NodeId) {
    let movable: Vec<NodeId> = doc
        .children(wrapper)
        .iter()
        .copied()
        .filter(|&child| doc.is_element(child))
        .collect();
    for child in movable {
        doc.detach(child);
        doc.insert_before(child, insertion_point);
    }
    doc.detach(wrapper);
}
