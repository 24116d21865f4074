//! Templating passes and condition language for the Glaze UI preprocessor.
//!
//! A [`TemplateEngine`] expands the custom constructs of a glade-style UI
//! description: `<if condition="...">`/`<else>` branches, the `if="..."`
//! attribute shorthand, `<copyobject id="..."/>` duplication, and icon-path
//! prefix remapping. The result is plain XML for the UI-toolkit builder.
//!
//! Usage:
//! - create an engine
//! - enable conditions ([`TemplateEngine::enable_condition`])
//! - register icon path remaps ([`TemplateEngine::replace_icon_path`])
//! - call [`TemplateEngine::build`] with the raw XML text

pub mod condition;
pub mod engine;
pub mod error;
pub mod icon;

mod passes;

pub use condition::ConditionSet;
pub use engine::TemplateEngine;
pub use error::TemplateError;
pub use icon::IconPathMap;
