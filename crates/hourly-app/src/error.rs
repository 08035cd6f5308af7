use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors (CLI and outbox)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    PlanError(#[from] hourly_plan::error::PlanError),

    #[error("Outbox I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Outbox session already active: {0}")]
    SessionActive(PathBuf),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
