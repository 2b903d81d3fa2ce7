//! Configuration management
//!
//! Collaborator endpoints, timeouts and pipeline policy. Config is read from
//! `--config <path>` when given, else from `~/.config/docverify/config.toml`
//! (XDG standard), else built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::prompt::DEFAULT_MAX_TEXT_CHARS;
use crate::core::services::{InferenceFailurePolicy, PipelineSettings};
use crate::paths;

/// Errors loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Config path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file is not valid config TOML
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// Config path
        path: PathBuf,
        /// Underlying parse error
        source: toml::de::Error,
    },
}

/// docverify configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// OCR engine settings
    #[serde(default)]
    pub ocr: OcrConfig,
    /// Inference service settings
    #[serde(default)]
    pub inference: InferenceConfig,
    /// Verdict policy
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// Background worker pool
    #[serde(default)]
    pub worker: WorkerConfig,
    /// Record storage
    #[serde(default)]
    pub storage: StorageConfig,
}

/// OCR engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Path or name of the tesseract binary
    pub binary: String,
    /// Tesseract language pack
    pub language: String,
    /// Seconds before an OCR run is abandoned
    pub timeout_secs: u64,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            binary: "tesseract".to_string(),
            language: "eng".to_string(),
            timeout_secs: 60,
        }
    }
}

/// Inference service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Ollama server URL
    pub base_url: String,
    /// Model name
    pub model: String,
    /// Seconds before an inference call is abandoned
    pub timeout_secs: u64,
    /// Cap on recognized-text characters placed in the prompt
    pub max_text_chars: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "llama3.2:1b".to_string(),
            timeout_secs: 120,
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
        }
    }
}

/// Verdict policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// What an unreachable or timed-out model means for the verdict
    pub on_inference_failure: InferenceFailurePolicy,
}

/// Background worker pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    /// Verifications allowed to run at once
    pub max_concurrent: usize,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self { max_concurrent: 4 }
    }
}

/// Record storage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Records directory; defaults to the platform data dir
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_dir: Option<PathBuf>,
}

impl Config {
    /// Parse config from TOML text
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load config from an explicit path; any failure is an error
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded config from {}", path.display());
        Self::from_toml(&content, path)
    }

    /// Load config from `path` if given, else from the default location
    ///
    /// An explicit path must exist and parse. The default location may be
    /// absent; if it is present but broken, defaults are used with a warning.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        let default_path = paths::config_file();
        if !default_path.exists() {
            return Ok(Self::default());
        }

        Ok(Self::load_from(&default_path).unwrap_or_else(|e| {
            warn!("{e}; using defaults");
            Self::default()
        }))
    }

    /// Render as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Settings for the verification pipeline
    #[must_use]
    pub const fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            max_text_chars: self.inference.max_text_chars,
            on_inference_failure: self.pipeline.on_inference_failure,
        }
    }

    /// OCR timeout
    #[must_use]
    pub const fn ocr_timeout(&self) -> Duration {
        Duration::from_secs(self.ocr.timeout_secs)
    }

    /// Inference timeout
    #[must_use]
    pub const fn inference_timeout(&self) -> Duration {
        Duration::from_secs(self.inference.timeout_secs)
    }

    /// Effective records directory
    #[must_use]
    pub fn records_dir(&self) -> PathBuf {
        self.storage.records_dir.clone().unwrap_or_else(paths::records_dir)
    }
}
