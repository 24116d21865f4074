//! Second traversal: `<if>`/`<else>` branch resolution and the `if=""`
//! attribute shorthand.
use crate::condition::ConditionSet;
use glaze_dom::{Document, NodeId, child_elements_by_tag, splice};
use log::debug;

/// Resolves conditionals below `node`. Children are fully resolved before
/// their parent, since resolving a parent `<if>` relocates its (already
/// resolved) children into the grandparent.
pub(crate) fn run(doc: &mut Document, node: NodeId, flags: &ConditionSet) {
    let children: Vec<NodeId> = doc.children(node).to_vec();
    for child in children {
        if !doc.is_element(child) {
            continue;
        }
        run(doc, child, flags);
        if doc.tag_is(child, "if") {
            resolve_if_element(doc, child, flags);
        } else {
            let attr = doc.attribute(child, "if").unwrap_or("").to_string();
            if attr.is_empty() {
                continue;
            }
            if flags.evaluate(&attr) {
                doc.remove_attribute(child, "if");
            } else {
                debug!(
                    "Removed '{}' by attribute: {}",
                    doc.tag_name(child).unwrap_or("?"),
                    attr
                );
                doc.detach(child);
            }
        }
    }
}

/// Exactly one of then-content, else-content, or nothing survives at the
/// `<if>` element's position, in original document order.
fn resolve_if_element(doc: &mut Document, element: NodeId, flags: &ConditionSet) {
    let condition = doc
        .attribute(element, "condition")
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    if flags.evaluate(&condition) {
        debug!("Allowed node {}", condition);
        for else_el in child_elements_by_tag(doc, element, "else") {
            doc.detach(else_el);
        }
        splice(doc, element, element);
    } else {
        debug!("Removed node {}", condition);
        for else_el in child_elements_by_tag(doc, element, "else") {
            splice(doc, else_el, element);
        }
        doc.detach(element);
    }
}
