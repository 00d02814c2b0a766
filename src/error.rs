//! Crate-level error type and `Result` alias.
//! Converts underlying I/O, image decoding and config parsing errors, and
//! provides semantic variants for the fatal and per-file failure cases.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input folder '{}' not found", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("WebP encoding failed: {0}")]
    Encode(String),

    #[error("Failed to convert {file}: {reason}")]
    ConversionFailed { file: String, reason: String },
}

impl Error {
    /// True for the one condition that aborts a run before any side effect.
    pub fn is_directory_not_found(&self) -> bool {
        matches!(self, Error::DirectoryNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_not_found_names_the_folder() {
        let err = Error::DirectoryNotFound {
            path: PathBuf::from("malin_kundang"),
        };
        assert!(err.is_directory_not_found());
        assert_eq!(err.to_string(), "Input folder 'malin_kundang' not found");
    }

    #[test]
    fn conversion_failed_carries_file_and_reason() {
        let err = Error::ConversionFailed {
            file: "d.png".to_string(),
            reason: "unexpected end of file".to_string(),
        };
        assert!(!err.is_directory_not_found());
        assert_eq!(
            err.to_string(),
            "Failed to convert d.png: unexpected end of file"
        );
    }
}
