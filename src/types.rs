//! Shared types used across webpify.
//! Includes the accepted input set (`ImageExtension`) and the per-file
//! outcome (`ConversionResult`).
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Input formats accepted by the converter, keyed by file name suffix.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum ImageExtension {
    Png,
    Jpg,
    Jpeg,
}

impl ImageExtension {
    pub const ALL: [ImageExtension; 3] =
        [ImageExtension::Png, ImageExtension::Jpg, ImageExtension::Jpeg];

    pub fn as_str(self) -> &'static str {
        match self {
            ImageExtension::Png => "png",
            ImageExtension::Jpg => "jpg",
            ImageExtension::Jpeg => "jpeg",
        }
    }

    /// Match the lowercased file name against `.png`, `.jpg` and `.jpeg`.
    ///
    /// Only the name is inspected: a bare `.png` qualifies, and so does a
    /// directory named `folder.png`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_lowercase();
        Self::ALL.into_iter().find(|known| {
            name.strip_suffix(known.as_str())
                .is_some_and(|rest| rest.ends_with('.'))
        })
    }
}

/// Outcome of converting one candidate file.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConversionResult {
    Converted { file: String, output: PathBuf },
    Failed { file: String, reason: String },
}

impl ConversionResult {
    pub fn file(&self) -> &str {
        match self {
            ConversionResult::Converted { file, .. } | ConversionResult::Failed { file, .. } => {
                file
            }
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, ConversionResult::Converted { .. })
    }
}
