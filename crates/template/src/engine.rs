//! The orchestrator that owns the flag set and remap table and runs the
//! passes over a parsed document.
use crate::condition::ConditionSet;
use crate::error::TemplateError;
use crate::icon::IconPathMap;
use crate::passes;
use glaze_dom::{parse_document, serialize_document};
use log::debug;

/// Expands templating constructs in glade-style UI descriptions.
///
/// Configuration (conditions, icon remaps) happens through `&mut self`
/// before building; [`build`](TemplateEngine::build) takes `&self` and owns
/// its document exclusively for the whole call. There is no internal
/// locking: one configuring writer at a time is the caller's discipline,
/// which the borrow checker enforces for any single engine value.
#[derive(Debug, Default)]
pub struct TemplateEngine {
    conditions: ConditionSet,
    icon_paths: IconPathMap,
}

impl TemplateEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables a condition name. Names are case-insensitive.
    pub fn enable_condition(&mut self, name: &str) {
        self.conditions.enable(name);
    }

    pub fn enable_conditions<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.conditions.enable(name.as_ref());
        }
    }

    /// Disables a previously enabled condition. Disabling a name that is
    /// not currently enabled is a caller error.
    pub fn disable_condition(&mut self, name: &str) -> Result<(), TemplateError> {
        if !self.conditions.disable(name) {
            return Err(TemplateError::UnknownCondition(name.to_string()));
        }
        Ok(())
    }

    pub fn conditions(&self) -> &ConditionSet {
        &self.conditions
    }

    /// Registers an icon-path remap rule. Earlier registrations win.
    pub fn replace_icon_path(&mut self, prefix: &str, replacement: &str) {
        self.icon_paths.register(prefix, replacement);
    }

    /// Parses `source`, expands every templating construct, and returns the
    /// resolved XML text with the input's declaration preserved.
    pub fn build(&self, source: &str) -> Result<String, TemplateError> {
        debug!("Enabled conditions: {:?}", self.conditions);
        let mut doc = parse_document(source)?;
        let root = doc.root();
        passes::objects::run(&mut doc, root, &self.icon_paths);
        passes::conditions::run(&mut doc, root, &self.conditions);
        Ok(serialize_document(&doc)?)
    }

    /// Resource bundles are not a supported input; fails fast with no
    /// partial attempt.
    pub fn build_from_resource(&self, _resource_path: &str) -> Result<String, TemplateError> {
        Err(TemplateError::Unsupported(
            "building from a resource bundle is not supported".to_string(),
        ))
    }
}
