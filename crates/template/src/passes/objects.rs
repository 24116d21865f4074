//! First traversal: `<copyobject>` expansion and icon-path rewriting.
use crate::icon::IconPathMap;
use glaze_dom::{Document, NodeId, find_by_id};
use log::{debug, warn};

/// Walks the children of `node` pre-order. `copyobject` tags are replaced
/// by a deep clone of the element their `id` points at, and the clone is
/// immediately re-walked so nested directives inside copied content resolve
/// too. After recursing into any other element, `<property name="pixbuf">`
/// and `<property name="icon">` text is passed through the remap table.
pub(crate) fn run(doc: &mut Document, node: NodeId, icons: &IconPathMap) {
    expand(doc, node, icons, &mut Vec::new());
}

/// `expanding` holds the ids on the current expansion path. Copies of
/// copies are fine; re-entering an id that is still being expanded is a
/// cycle and would grow the tree without bound.
fn expand(doc: &mut Document, node: NodeId, icons: &IconPathMap, expanding: &mut Vec<String>) {
    let children: Vec<NodeId> = doc.children(node).to_vec();
    for child in children {
        if !doc.is_element(child) {
            continue;
        }
        if doc.tag_is(child, "copyobject") {
            resolve_copy(doc, child, icons, expanding);
        } else {
            expand(doc, child, icons, expanding);
            if doc.tag_is(child, "property") {
                let is_icon_property = matches!(
                    doc.attribute(child, "name"),
                    Some("pixbuf") | Some("icon")
                );
                if is_icon_property {
                    remap_icon_paths(doc, child, icons);
                }
            }
        }
    }
}

/// Dangling references are recoverable: the tag is left in place for the
/// downstream builder to reject, rather than half-guessing an expansion.
fn resolve_copy(doc: &mut Document, tag: NodeId, icons: &IconPathMap, expanding: &mut Vec<String>) {
    let id = doc.attribute(tag, "id").unwrap_or("").to_string();
    if id.is_empty() {
        warn!("COPYOBJECT tag without id");
        return;
    }
    if expanding.iter().any(|open| *open == id) {
        warn!("COPYOBJECT id '{}' is cyclic, skipping", id);
        return;
    }
    let Some(source) = find_by_id(doc, doc.root(), &id) else {
        warn!("COPYOBJECT references unknown id '{}'", id);
        return;
    };
    if doc.is_in_subtree(source, tag) {
        // A self-referential copy would clone its own copyobject tag forever.
        warn!("COPYOBJECT id '{}' points into its own subtree", id);
        return;
    }
    let copy = doc.clone_subtree(source);
    doc.insert_before(copy, tag);
    doc.detach(tag);
    debug!("Copied object '{}'", id);
    expanding.push(id);
    expand(doc, copy, icons, expanding);
    expanding.pop();
}

fn remap_icon_paths(doc: &mut Document, property: NodeId, icons: &IconPathMap) {
    let texts: Vec<NodeId> = doc.children(property).to_vec();
    for text in texts {
        let Some(path) = doc.text(text) else { continue };
        if let Some(remapped) = icons.remap(path) {
            debug!("Remapped icon path to {}", remapped);
            doc.set_text(text, remapped);
        }
    }
}
