use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot load config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: webpify::Error,
    },

    #[error("Cannot write summary {}: {source}", path.display())]
    Summary {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Convert(#[from] webpify::Error),
}

impl AppError {
    /// 1 when the input folder is missing, 2 for every other fatal error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::Convert(e) if e.is_directory_not_found() => ExitCode::from(1),
            _ => ExitCode::from(2),
        }
    }
}
