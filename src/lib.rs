//! Text classification inference pipeline
//!
//! Adapts a trained neural-network text model to a request/response pipeline:
//! JSON input → model-ready tensors → forward pass → decoded result → JSON output.

pub mod data;
pub mod model;
pub mod predict;
pub mod training;
pub mod vectorize;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single raw text example, optionally labeled
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextSample {
    pub text: String,
    /// Absent for inference-only examples
    pub label: Option<String>,
}

impl TextSample {
    pub fn labeled(text: impl Into<String>, label: impl Into<String>) -> Self {
        TextSample {
            text: text.into(),
            label: Some(label.into()),
        }
    }

    pub fn unlabeled(text: impl Into<String>) -> Self {
        TextSample {
            text: text.into(),
            label: None,
        }
    }
}

/// Application-wide errors
#[derive(Debug, Error)]
pub enum InferError {
    #[error("missing model parameter \"{0}\"")]
    MissingParam(String),

    #[error("model parameter \"{name}\" has the wrong kind, expected {expected}")]
    ParamKind {
        name: String,
        expected: &'static str,
    },

    #[error("{0} is not implemented for this predictor")]
    NotImplemented(&'static str),

    #[error("missing input field \"{0}\"")]
    MissingField(&'static str),

    #[error("unknown token: {0}")]
    UnknownToken(String),

    #[error("no label at index {0}")]
    UnknownLabel(usize),

    #[error("cannot fit a vectorizer from an empty corpus")]
    EmptyCorpus,

    #[error("tensor data error: {0}")]
    Tensor(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InferError>;

/// Application configuration loaded from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub model: ModelConfig,
    pub vectorizer: VectorizerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub hidden_dims: Vec<usize>,
    pub dropout: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerConfig {
    /// Token used for out-of-vocabulary words
    pub unknown_token: String,
    /// Minimum number of occurrences for a token to enter the vocabulary
    pub token_cutoff: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            hidden_dims: vec![128, 64],
            dropout: 0.1,
        }
    }
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        VectorizerConfig {
            unknown_token: "<unk>".to_string(),
            token_cutoff: 1,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            InferError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;
        toml::from_str(&content)
            .map_err(|e| InferError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| InferError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
