use glaze_dom::DomError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    /// Input text is not well-formed XML, or the resolved tree failed to
    /// serialize. Fatal for the build call that raised it.
    #[error("XML error: {0}")]
    Dom(#[from] DomError),

    /// A condition name was disabled without having been enabled first.
    #[error("unknown condition '{0}'")]
    UnknownCondition(String),

    /// The requested operation is deliberately not implemented.
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}
