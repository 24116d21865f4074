//! Glue between the template engine and the real UI-toolkit builder.
use glaze_template::{TemplateEngine, TemplateError};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read UI description {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// The "add from string" seam to the actual UI-toolkit builder. Glaze hands
/// it fully resolved XML text and does not depend on what it does with it.
pub trait BuilderSink {
    fn add_from_string(&mut self, xml: &str);
}

/// Loads templated UI description files, runs the engine over them, and
/// feeds the resolved text to a [`BuilderSink`].
#[derive(Debug, Default)]
pub struct UiLoader {
    engine: TemplateEngine,
    debug_dump: Option<PathBuf>,
}

impl UiLoader {
    pub fn new(engine: TemplateEngine) -> Self {
        UiLoader {
            engine,
            debug_dump: None,
        }
    }

    /// Also writes every resolved document to `path`, for inspecting what
    /// the builder actually receives. A failed dump is logged and ignored;
    /// it is a diagnostic side effect, not part of the contract.
    pub fn with_debug_dump(mut self, path: impl Into<PathBuf>) -> Self {
        self.debug_dump = Some(path.into());
        self
    }

    pub fn engine(&self) -> &TemplateEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut TemplateEngine {
        &mut self.engine
    }

    /// Builds UI from a file.
    pub fn load_file(&self, path: &Path, sink: &mut dyn BuilderSink) -> Result<(), LoadError> {
        debug!("Loading UI description {}", path.display());
        let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_string(&source, sink)
    }

    /// Builds UI from already-acquired text.
    pub fn load_string(&self, source: &str, sink: &mut dyn BuilderSink) -> Result<(), LoadError> {
        let xml = self.engine.build(source)?;
        if let Some(dump) = &self.debug_dump {
            if let Err(err) = fs::write(dump, &xml) {
                warn!("failed to write debug dump {}: {}", dump.display(), err);
            }
        }
        sink.add_from_string(&xml);
        Ok(())
    }
}
