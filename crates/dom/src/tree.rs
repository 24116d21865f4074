//! Arena-backed document tree.
//!
//! Nodes are addressed by copyable [`NodeId`]s into a `Vec` owned by the
//! [`Document`]. Detaching a node only unlinks it from its parent; the slot
//! stays allocated for the lifetime of the document, which keeps every
//! outstanding id valid while passes rearrange the tree.

/// Compares two XML names case-insensitively.
///
/// Tag names in glade templating are matched without regard to case
/// (`<IF>` and `<if>` are the same construct). Attribute *names* are not
/// routed through this helper; XML attributes stay case-sensitive.
pub fn tag_eq(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Handle to a node inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// A single `name="value"` pair. Order of appearance is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Tag name plus ordered attribute list of an element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    pub name: String,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Synthetic document root. Never serialized itself; its children are
    /// the top-level element plus any leading comments.
    Root,
    Element(ElementData),
    Text(String),
    Comment(String),
    ProcessingInstruction(String),
}

/// The `<?xml ...?>` declaration of the source document, re-emitted verbatim
/// on serialization so the declared encoding survives a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDecl {
    pub version: String,
    pub encoding: Option<String>,
    pub standalone: Option<String>,
}

#[derive(Debug, Clone)]
struct NodeData {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

/// A mutable, in-memory XML tree.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
    decl: Option<XmlDecl>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Document {
            nodes: vec![NodeData {
                parent: None,
                children: Vec::new(),
                kind: NodeKind::Root,
            }],
            decl: None,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn decl(&self) -> Option<&XmlDecl> {
        self.decl.as_ref()
    }

    pub fn set_decl(&mut self, decl: XmlDecl) {
        self.decl = Some(decl);
    }

    fn push_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            parent: None,
            children: Vec::new(),
            kind,
        });
        id
    }

    /// Creates a detached element node.
    pub fn new_element(&mut self, name: impl Into<String>) -> NodeId {
        self.push_node(NodeKind::Element(ElementData {
            name: name.into(),
            attributes: Vec::new(),
        }))
    }

    /// Creates a detached text node.
    pub fn new_text(&mut self, content: impl Into<String>) -> NodeId {
        self.push_node(NodeKind::Text(content.into()))
    }

    /// Creates a detached comment node.
    pub fn new_comment(&mut self, content: impl Into<String>) -> NodeId {
        self.push_node(NodeKind::Comment(content.into()))
    }

    /// Creates a detached processing-instruction node.
    pub fn new_pi(&mut self, content: impl Into<String>) -> NodeId {
        self.push_node(NodeKind::ProcessingInstruction(content.into()))
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.nodes[id.0].kind, NodeKind::Element(_))
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match &self.nodes[id.0].kind {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Tag name of an element node, `None` for any other kind.
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|el| el.name.as_str())
    }

    /// True if `id` is an element whose tag matches `name` case-insensitively.
    pub fn tag_is(&self, id: NodeId, name: &str) -> bool {
        self.tag_name(id).is_some_and(|tag| tag_eq(tag, name))
    }

    /// Value of the named attribute (exact-case name match), if present.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?
            .attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Sets an attribute, replacing the value in place if the name exists.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        if let NodeKind::Element(el) = &mut self.nodes[id.0].kind {
            match el.attributes.iter_mut().find(|a| a.name == name) {
                Some(attr) => attr.value = value.into(),
                None => el.attributes.push(Attribute {
                    name: name.to_string(),
                    value: value.into(),
                }),
            }
        }
    }

    /// Removes the named attribute. Returns whether it was present.
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> bool {
        if let NodeKind::Element(el) = &mut self.nodes[id.0].kind {
            let before = el.attributes.len();
            el.attributes.retain(|a| a.name != name);
            return el.attributes.len() != before;
        }
        false
    }

    /// Payload of a text node, `None` for any other kind.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Text(t) => Some(t.as_str()),
            _ => None,
        }
    }

    pub fn set_text(&mut self, id: NodeId, content: impl Into<String>) {
        if let NodeKind::Text(t) = &mut self.nodes[id.0].kind {
            *t = content.into();
        }
    }

    /// Appends a detached node as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(self.nodes[child.0].parent.is_none());
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Inserts a detached node under `reference`'s parent, immediately
    /// before `reference`. No-op if `reference` has no parent.
    pub fn insert_before(&mut self, new: NodeId, reference: NodeId) {
        debug_assert!(self.nodes[new.0].parent.is_none());
        let Some(parent) = self.nodes[reference.0].parent else {
            return;
        };
        let siblings = &mut self.nodes[parent.0].children;
        let pos = siblings
            .iter()
            .position(|&c| c == reference)
            .unwrap_or(siblings.len());
        siblings.insert(pos, new);
        self.nodes[new.0].parent = Some(parent);
    }

    /// Unlinks a node (and implicitly its subtree) from its parent. The node
    /// itself stays valid and can be re-inserted elsewhere.
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.nodes[id.0].parent.take() else {
            return;
        };
        self.nodes[parent.0].children.retain(|&c| c != id);
    }

    /// Deep-clones a subtree. The returned root is detached and fully
    /// independent of the original: mutating one never affects the other.
    pub fn clone_subtree(&mut self, id: NodeId) -> NodeId {
        let kind = self.nodes[id.0].kind.clone();
        let copy = self.push_node(kind);
        let children = self.nodes[id.0].children.clone();
        for child in children {
            let child_copy = self.clone_subtree(child);
            self.append_child(copy, child_copy);
        }
        copy
    }

    /// True if `ancestor` lies on the parent chain of `node` (or is `node`).
    pub fn is_in_subtree(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes[id.0].parent;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_and_detach_keep_order() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = doc.new_element("a");
        let b = doc.new_element("b");
        let c = doc.new_element("c");
        doc.append_child(root, a);
        doc.append_child(root, b);
        doc.append_child(root, c);
        assert_eq!(doc.children(root), &[a, b, c]);

        doc.detach(b);
        assert_eq!(doc.children(root), &[a, c]);
        assert_eq!(doc.parent(b), None);

        doc.insert_before(b, a);
        assert_eq!(doc.children(root), &[b, a, c]);
    }

    #[test]
    fn attributes_replace_in_place() {
        let mut doc = Document::new();
        let el = doc.new_element("object");
        doc.set_attribute(el, "id", "one");
        doc.set_attribute(el, "class", "GtkButton");
        doc.set_attribute(el, "id", "two");
        assert_eq!(doc.attribute(el, "id"), Some("two"));
        assert_eq!(doc.element(el).unwrap().attributes.len(), 2);
        assert!(doc.remove_attribute(el, "id"));
        assert!(!doc.remove_attribute(el, "id"));
    }

    #[test]
    fn clone_subtree_is_independent() {
        let mut doc = Document::new();
        let obj = doc.new_element("object");
        doc.set_attribute(obj, "id", "src");
        let child = doc.new_element("child");
        doc.append_child(obj, child);

        let copy = doc.clone_subtree(obj);
        assert_eq!(doc.attribute(copy, "id"), Some("src"));
        assert_eq!(doc.children(copy).len(), 1);

        doc.set_attribute(copy, "id", "changed");
        assert_eq!(doc.attribute(obj, "id"), Some("src"));
    }

    #[test]
    fn tag_matching_is_case_insensitive() {
        let mut doc = Document::new();
        let el = doc.new_element("CopyObject");
        assert!(doc.tag_is(el, "copyobject"));
        assert!(doc.tag_is(el, "COPYOBJECT"));
        assert!(!doc.tag_is(el, "object"));
    }

    #[test]
    fn subtree_membership_follows_parent_chain() {
        let mut doc = Document::new();
        let outer = doc.new_element("outer");
        let inner = doc.new_element("inner");
        doc.append_child(outer, inner);
        assert!(doc.is_in_subtree(outer, inner));
        assert!(doc.is_in_subtree(inner, inner));
        assert!(!doc.is_in_subtree(inner, outer));
    }
}
