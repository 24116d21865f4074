//! Mutable XML document tree for the Glaze UI preprocessor.
//!
//! Glade-style UI descriptions are parsed once into an arena-backed
//! [`Document`], mutated in place by the templating passes, and serialized
//! back to text for the real UI-toolkit builder. The tree deliberately stays
//! small: elements, text, comments and processing instructions are all the
//! node kinds the preprocessor ever needs to touch.

pub mod error;
pub mod locate;
pub mod parse;
pub mod serialize;
pub mod splice;
pub mod tree;

pub use error::DomError;
pub use locate::{child_elements_by_tag, find_by_id};
pub use parse::parse_document;
pub use serialize::serialize_document;
pub use splice::splice;
pub use tree::{Attribute, Document, ElementData, NodeId, NodeKind, XmlDecl, tag_eq};
