use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("XML parsing error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    #[error("XML escape error: {0}")]
    Escape(String),

    #[error("unexpected closing tag </{0}>")]
    UnexpectedClose(String),

    #[error("unclosed element <{0}>")]
    UnclosedElement(String),

    #[error("UTF-8 string error: {0}")]
    Utf8Str(#[from] std::str::Utf8Error),

    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
