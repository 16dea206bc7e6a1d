//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use redactor_engine::EngineConfig;
use redactor_models::{embedding, ner, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Detection and rendering settings
    #[serde(default)]
    pub engine: EngineConfig,

    /// Entity-recognition service
    #[serde(default)]
    pub ner: NerSettings,

    /// Sentence-embedding service
    #[serde(default)]
    pub embedding: EmbeddingSettings,
}

/// Entity-recognition service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NerSettings {
    /// Call the recognizer at all
    pub enabled: bool,

    /// Service base URL
    pub endpoint: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Sentence-embedding service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingSettings {
    /// Use semantic concept matching
    pub enabled: bool,

    /// Ollama base URL
    pub endpoint: String,

    /// Embedding model name
    pub model: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for NerSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: ner::DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: embedding::DEFAULT_ENDPOINT.to_string(),
            model: embedding::DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".redactor").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise the default path is used when
    /// present, and built-in defaults when not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        match Self::path() {
            Ok(path) if path.exists() => Self::from_path(&path),
            _ => {
                debug!("No configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate configuration from a file.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.engine.validate().map_err(CliError::Config)?;
        if self.ner.enabled && self.ner.endpoint.trim().is_empty() {
            return Err(CliError::Config("ner.endpoint must not be empty".into()));
        }
        if self.embedding.enabled && self.embedding.model.trim().is_empty() {
            return Err(CliError::Config("embedding.model must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.ner.enabled);
        assert_eq!(config.ner.endpoint, "http://localhost:8000");
        assert_eq!(config.embedding.model, "all-minilm");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[engine]\nredaction_char = \"#\"\n\n[embedding]\nenabled = false\n"
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.engine.redaction_char, '#');
        assert_eq!(config.engine.context_window, 30);
        assert!(!config.embedding.enabled);
        assert!(config.ner.enabled);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(&dir.path().join("missing.toml")));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn test_load_invalid_engine_settings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[engine]\nsimilarity_threshold = 4.0\n").unwrap();
        assert!(matches!(
            Config::load(Some(file.path())),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_load_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[engine\n").unwrap();
        assert!(matches!(
            Config::load(Some(file.path())),
            Err(CliError::Toml(_))
        ));
    }

    #[test]
    fn test_round_trip() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(config, parsed);
    }
}
