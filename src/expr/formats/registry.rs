//! Named output formats for parsed expressions
//!
//! A [`FormatRegistry`] maps a name such as `tree` or `infix` to a boxed [`Formatter`]. The
//! CLI resolves `--format` through it and lists its contents for `--list-formats`.

use crate::expr::tree::Node;
use std::collections::HashMap;
use std::fmt;

/// Why a tree could not be turned into text
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No formatter registered under this name
    FormatNotFound(String),
    /// The formatter refused or failed on the tree
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Turns a [`Node`] into text of one format
pub trait Formatter: Send + Sync {
    /// Lookup key, e.g. `tree` or `json`
    fn name(&self) -> &str;

    /// Render `node`, including any trailing newline the format wants
    fn serialize(&self, node: &Node) -> Result<String, FormatError>;

    /// One line shown by `--list-formats`
    fn description(&self) -> &str {
        ""
    }
}

/// Formatters keyed by name
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// A registry with no formats; see [`FormatRegistry::with_defaults`] for the built-ins.
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Add `formatter` under its own name, replacing any earlier one with that name.
    ///
    /// The CLI relies on this to swap in a `tree` formatter built from the loaded config.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Render `node` with the formatter called `format`
    pub fn serialize(&self, node: &Node, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(node)
    }

    /// Registered names in alphabetical order
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// `(name, description)` pairs, sorted by name
    pub fn describe(&self) -> Vec<(String, String)> {
        let mut entries: Vec<_> = self
            .formatters
            .values()
            .map(|f| (f.name().to_string(), f.description().to_string()))
            .collect();
        entries.sort();
        entries
    }

    /// `tree` (default layout), `infix`, `json` and `yaml`
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::IndentedFormatter::default());
        registry.register(super::InfixFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
