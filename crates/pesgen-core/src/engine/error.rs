use super::config::ConfigError;
use crate::core::io::samples::SampleWriteError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("The {kind} does not exist: {}", .path.display())]
    MissingPath { kind: &'static str, path: PathBuf },

    #[error("The {kind} must be a {expected}: {}", .path.display())]
    WrongPathKind {
        kind: &'static str,
        expected: &'static str,
        path: PathBuf,
    },

    #[error("Failed to export scan samples: {source}")]
    Export {
        #[from]
        source: SampleWriteError,
    },
}
