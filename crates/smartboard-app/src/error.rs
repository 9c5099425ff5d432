//! Application errors.

use smartboard_core::BoardError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid pointer script: {0}")]
    Script(#[from] serde_json::Error),
    #[error("Board error: {0}")]
    Board(#[from] BoardError),
}

impl AppError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
