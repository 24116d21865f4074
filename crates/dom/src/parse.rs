//! Event-driven XML parse into a [`Document`].
use crate::error::DomError;
use crate::tree::{Document, NodeId, XmlDecl};
use quick_xml::Reader;
use quick_xml::events::{BytesDecl, BytesStart, Event as XmlEvent};

/// Parses UI-description text into a mutable tree.
///
/// Whitespace-only text nodes are kept so a document without templating
/// constructs serializes back structurally unchanged.
pub fn parse_document(source: &str) -> Result<Document, DomError> {
    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(false);
    let mut buf = Vec::new();

    let mut doc = Document::new();
    let mut stack: Vec<NodeId> = vec![doc.root()];

    loop {
        match reader.read_event_into(&mut buf)? {
            XmlEvent::Start(e) => {
                let element = open_element(&mut doc, &e)?;
                let parent = *stack.last().ok_or_else(|| unexpected_close(&e))?;
                doc.append_child(parent, element);
                stack.push(element);
            }
            XmlEvent::Empty(e) => {
                let element = open_element(&mut doc, &e)?;
                let parent = *stack.last().ok_or_else(|| unexpected_close(&e))?;
                doc.append_child(parent, element);
            }
            XmlEvent::End(e) => {
                stack.pop();
                if stack.is_empty() {
                    let name = std::str::from_utf8(e.name().as_ref())?.to_string();
                    return Err(DomError::UnexpectedClose(name));
                }
            }
            XmlEvent::Text(e) => {
                let raw = std::str::from_utf8(e.as_ref())?;
                let text = quick_xml::escape::unescape(raw)
                    .map_err(|err| DomError::Escape(err.to_string()))?
                    .into_owned();
                let node = doc.new_text(text);
                let parent = *stack.last().unwrap_or(&doc.root());
                doc.append_child(parent, node);
            }
            XmlEvent::CData(e) => {
                let text = std::str::from_utf8(e.as_ref())?.to_string();
                let node = doc.new_text(text);
                let parent = *stack.last().unwrap_or(&doc.root());
                doc.append_child(parent, node);
            }
            XmlEvent::Comment(e) => {
                let content = std::str::from_utf8(e.as_ref())?.to_string();
                let node = doc.new_comment(content);
                let parent = *stack.last().unwrap_or(&doc.root());
                doc.append_child(parent, node);
            }
            XmlEvent::PI(e) => {
                let content = std::str::from_utf8(e.as_ref())?.to_string();
                let node = doc.new_pi(content);
                let parent = *stack.last().unwrap_or(&doc.root());
                doc.append_child(parent, node);
            }
            XmlEvent::Decl(e) => {
                doc.set_decl(read_decl(&e)?);
            }
            // UI descriptions carry no doctype worth preserving.
            XmlEvent::DocType(_) => (),
            XmlEvent::Eof => break,
            _ => (),
        }
        buf.clear();
    }

    if stack.len() != 1 {
        let open = stack
            .last()
            .and_then(|&id| doc.tag_name(id))
            .unwrap_or("?")
            .to_string();
        return Err(DomError::UnclosedElement(open));
    }
    Ok(doc)
}

fn open_element(doc: &mut Document, e: &BytesStart<'_>) -> Result<NodeId, DomError> {
    let name = std::str::from_utf8(e.name().as_ref())?.to_string();
    let element = doc.new_element(name);
    for attr in e.attributes() {
        let attr = attr?;
        let name = std::str::from_utf8(attr.key.as_ref())?.to_string();
        let raw = std::str::from_utf8(&attr.value)?;
        let value = quick_xml::escape::unescape(raw)
            .map_err(|err| DomError::Escape(err.to_string()))?
            .into_owned();
        doc.set_attribute(element, &name, value);
    }
    Ok(element)
}

fn read_decl(e: &BytesDecl<'_>) -> Result<XmlDecl, DomError> {
    let version = std::str::from_utf8(e.version()?.as_ref())?.to_string();
    let encoding = match e.encoding() {
        Some(enc) => Some(std::str::from_utf8(enc?.as_ref())?.to_string()),
        None => None,
    };
    let standalone = match e.standalone() {
        Some(sa) => Some(std::str::from_utf8(sa?.as_ref())?.to_string()),
        None => None,
    };
    Ok(XmlDecl {
        version,
        encoding,
        standalone,
    })
}

fn unexpected_close(e: &BytesStart<'_>) -> DomError {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    DomError::UnexpectedClose(name)
}
