//! Shared configuration loader for the filterexpr tools.
//!
//! `defaults/filterexpr.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files and
//! `FILTEREXPR_*` environment variables on top of those defaults via [`Loader`]
//! before deserializing into [`ExprConfig`].
//!
//! Environment keys use `__` between sections: `FILTEREXPR_RENDER__INDENT_WIDTH=2`.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use filterexpr::expr::formats::RenderOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/filterexpr.default.toml");

/// Prefix of environment variables read by [`Loader::with_env`]
pub const ENV_PREFIX: &str = "FILTEREXPR";

/// Top-level configuration consumed by filterexpr applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ExprConfig {
    pub render: RenderConfig,
    pub output: OutputConfig,
}

/// Layout of the indented `tree` format.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub indent_width: usize,
    pub frame: bool,
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        RenderOptions {
            indent_width: config.indent_width,
            frame: config.frame,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of the default output format
    pub format: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `FILTEREXPR_*` environment variables.
    pub fn with_env(self) -> Self {
        self.with_env_source(Environment::with_prefix(ENV_PREFIX))
    }

    fn with_env_source(mut self, env: Environment) -> Self {
        let source = env.prefix_separator("_").separator("__").try_parsing(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ExprConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ExprConfig, ConfigError> {
    Loader::new().build()
}
