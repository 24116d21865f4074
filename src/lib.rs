//! Glaze: a glade-style UI description preprocessor.
//!
//! Glaze lets one XML UI description adapt itself to differing runtime
//! conditions (platform, feature flags) without duplicating markup. The
//! file is extended with three templating constructs:
//!
//! - `<if condition="c"> ... <else> ... </else></if>`: conditional branch
//! - `if="c"` attribute on any element: conditional element
//! - `<copyobject id="i"/>`: replaced by a copy of the element with that id
//!
//! plus icon-path prefix remapping for `pixbuf`/`icon` properties. The
//! [`TemplateEngine`] resolves all of it into plain XML, and [`UiLoader`]
//! feeds that text to whatever UI-toolkit builder implements
//! [`BuilderSink`].

pub mod loader;

pub use glaze_dom::{Document, DomError, NodeId, NodeKind};
pub use glaze_template::{ConditionSet, IconPathMap, TemplateEngine, TemplateError};
pub use loader::{BuilderSink, LoadError, UiLoader};
