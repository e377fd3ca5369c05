//! Layered configuration loader for logseq-lsp.
//!
//! `defaults/logseq-lsp.default.toml` is embedded into the binary so the
//! documented defaults and the runtime behavior stay in sync. The binary
//! layers an optional user file on top via [`Loader`], then applies CLI
//! overrides, before deserializing into [`LspConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/logseq-lsp.default.toml");

/// Top-level configuration consumed by the logseq-lsp binary.
#[derive(Debug, Clone, Deserialize)]
pub struct LspConfig {
    pub api: ApiConfig,
    pub graph: GraphConfig,
    pub log: LogConfig,
}

/// How to reach the Logseq HTTP API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub port: u16,
    pub token: String,
}

/// Sub-directories of the graph root where note files live.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    pub pages_path: String,
    pub journals_path: String,
}

/// Diagnostic log settings. When `file` is unset the binary picks a path
/// under the user's config directory.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub enabled: bool,
    #[serde(default)]
    pub file: Option<PathBuf>,
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

    /// Apply a single key/value override (useful for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<LspConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<LspConfig, ConfigError> {
    Loader::new().build()
}
