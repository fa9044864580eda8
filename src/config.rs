//! Configuration surface consumed by the pipeline.
//!
//! Loaded from `.bigolens.toml` when present; every field has a
//! default so an absent or partial file still yields a working
//! configuration.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub const CONFIG_FILE_NAME: &str = ".bigolens.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BigolensConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub annotations: AnnotationConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Explicit engine binary path; overrides PATH discovery.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Program name used for PATH discovery.
    #[serde(default = "default_program")]
    pub program: String,

    /// Maximum source size in characters; larger inputs degrade
    /// without invoking the engine.
    #[serde(default = "default_max_source_size")]
    pub max_source_size: usize,

    /// Bound on a single engine call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            path: None,
            program: default_program(),
            max_source_size: default_max_source_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationConfig {
    /// Whether inline annotations are applied to the source view.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self { enabled: default_true() }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Theme for the styled-document export. Affects colors only,
    /// never semantics.
    #[serde(default)]
    pub theme: DisplayTheme,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayTheme {
    #[default]
    Light,
    Dark,
}

fn default_program() -> String {
    "bigo-engine".to_string()
}

fn default_max_source_size() -> usize {
    100_000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

/// Load configuration from an explicit path, or from
/// `.bigolens.toml` in the current directory, falling back to
/// defaults when no file exists.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<BigolensConfig> {
    let candidate = match path {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(CONFIG_FILE_NAME),
    };

    if !candidate.exists() {
        if path.is_some() {
            anyhow::bail!("config file not found: {}", candidate.display());
        }
        return Ok(BigolensConfig::default());
    }

    let contents = std::fs::read_to_string(&candidate)
        .with_context(|| format!("failed to read config from {}", candidate.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("failed to parse config from {}", candidate.display()))
}

static CONFIG: OnceLock<BigolensConfig> = OnceLock::new();

/// Process-wide configuration, loaded on first access.
pub fn get_config() -> &'static BigolensConfig {
    CONFIG.get_or_init(|| {
        load_config(None).unwrap_or_else(|err| {
            log::warn!("falling back to default config: {err}");
            BigolensConfig::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::io::Write;

    #[test]
    fn defaults_are_complete() {
        let config = BigolensConfig::default();
        assert_eq!(config.engine.program, "bigo-engine");
        assert_eq!(config.engine.max_source_size, 100_000);
        assert_eq!(config.engine.timeout_secs, 30);
        assert!(config.engine.path.is_none());
        assert!(config.annotations.enabled);
        assert_eq!(config.display.theme, DisplayTheme::Light);
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let contents = indoc! {r#"
            [engine]
            max_source_size = 5000

            [display]
            theme = "dark"
        "#};
        file.write_all(contents.as_bytes()).unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.engine.max_source_size, 5000);
        assert_eq!(config.engine.program, "bigo-engine");
        assert_eq!(config.display.theme, DisplayTheme::Dark);
        assert!(config.annotations.enabled);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        assert!(load_config(Some(Path::new("/nonexistent/bigolens.toml"))).is_err());
    }
}
