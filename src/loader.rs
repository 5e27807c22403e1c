use std::{
    collections::HashMap,
    io,
    path::PathBuf,
};

use thiserror::Error;

/// Failure to provide the text of a script.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No script with that name exists.
    #[error("file not found")]
    NotFound,
    /// The script exists but reading it failed.
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Supplies script source text by name.
///
/// The parser asks its loader for the text of every file named in a
/// `Get "<file>"` statement, and `Interpreter::run_file` uses it for the
/// entry script.
pub trait SourceLoader {
    /// Returns the UTF-8 text of the named script.
    fn load_source(&self, name: &str) -> Result<String, LoadError>;
}

/// Loads scripts from disk, relative to a base directory.
#[derive(Debug, Clone)]
pub struct FsLoader {
    base_dir: PathBuf,
}

impl FsLoader {
    /// Creates a loader resolving names against `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: base_dir.into() }
    }
}

impl Default for FsLoader {
    fn default() -> Self {
        Self::new(".")
    }
}

impl SourceLoader for FsLoader {
    fn load_source(&self, name: &str) -> Result<String, LoadError> {
        let path = self.base_dir.join(name);
        tracing::debug!(path = %path.display(), "loading script");

        std::fs::read_to_string(&path).map_err(|e| match e.kind() {
                                          io::ErrorKind::NotFound => LoadError::NotFound,
                                          _ => LoadError::Io(e),
                                      })
    }
}

/// Serves scripts from memory; useful for embedding and tests.
///
/// # Example
/// ```
/// use quill::loader::{MemoryLoader, SourceLoader};
///
/// let loader = MemoryLoader::new().with_file("lib.ql", "x=1;");
/// assert_eq!(loader.load_source("lib.ql").unwrap(), "x=1;");
/// assert!(loader.load_source("other.ql").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    files: HashMap<String, String>,
}

impl MemoryLoader {
    /// Creates an empty loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a script.
    #[must_use]
    pub fn with_file(mut self, name: &str, source: &str) -> Self {
        self.files.insert(name.to_string(), source.to_string());
        self
    }
}

impl SourceLoader for MemoryLoader {
    fn load_source(&self, name: &str) -> Result<String, LoadError> {
        self.files.get(name).cloned().ok_or(LoadError::NotFound)
    }
}
