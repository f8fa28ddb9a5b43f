//! Error types for the drill application.

use drill_core::MatchError;
use std::path::PathBuf;
use thiserror::Error;

/// Phrase and statistics file errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {}: {}", .path.display(), .source)]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Invalid settings detected at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid thresholds: {0}")]
    Thresholds(#[source] MatchError),

    #[error("maximum answer length must be at least 1")]
    ZeroAnswerLength,

    #[error("target language name must not be empty")]
    EmptyLanguage,
}
