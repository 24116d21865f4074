//! Serializes a [`Document`] back to XML text for the UI-toolkit builder.
use crate::error::DomError;
use crate::tree::{Document, NodeId, NodeKind};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event as XmlEvent};

/// Writes the whole tree to a string, re-emitting the declaration captured
/// at parse time. Childless elements are written in the `<tag/>` form.
pub fn serialize_document(doc: &Document) -> Result<String, DomError> {
    let mut writer = Writer::new(Vec::new());

    if let Some(decl) = doc.decl() {
        writer.write_event(XmlEvent::Decl(BytesDecl::new(
            &decl.version,
            decl.encoding.as_deref(),
            decl.standalone.as_deref(),
        )))?;
    }
    for &child in doc.children(doc.root()) {
        write_node(doc, child, &mut writer)?;
    }

    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_node(doc: &Document, id: NodeId, writer: &mut Writer<Vec<u8>>) -> Result<(), DomError> {
    match doc.kind(id) {
        NodeKind::Element(el) => {
            let mut start = BytesStart::new(el.name.as_str());
            for attr in &el.attributes {
                start.push_attribute((attr.name.as_str(), attr.value.as_str()));
            }
            let children = doc.children(id);
            if children.is_empty() {
                writer.write_event(XmlEvent::Empty(start))?;
            } else {
                writer.write_event(XmlEvent::Start(start))?;
                for &child in children {
                    write_node(doc, child, writer)?;
                }
                writer.write_event(XmlEvent::End(BytesEnd::new(el.name.as_str())))?;
            }
        }
        NodeKind::Text(t) => {
            writer.write_event(XmlEvent::Text(BytesText::new(t)))?;
        }
        NodeKind::Comment(c) => {
            writer.write_event(XmlEvent::Comment(BytesText::from_escaped(c.as_str())))?;
        }
        NodeKind::ProcessingInstruction(pi) => {
            writer.write_event(XmlEvent::PI(BytesPI::new(pi.as_str())))?;
        }
        NodeKind::Root => {
            for &child in doc.children(id) {
                write_node(doc, child, writer)?;
            }
        }
    }
    Ok(())
}
