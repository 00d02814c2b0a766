use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_QUALITY: u8 = 85;
pub const MAX_QUALITY: u8 = 100;

/// Conversion parameters passed explicitly into `convert_all`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionParams {
    /// Folder holding the PNG/JPEG sources; must exist
    pub input_folder: PathBuf,
    /// Folder receiving the `.webp` files; created if absent
    pub output_folder: PathBuf,
    /// Lossy WebP quality, 0..=100
    pub quality: u8,
}

impl Default for ConversionParams {
    fn default() -> Self {
        Self {
            input_folder: PathBuf::from("."),
            output_folder: PathBuf::from("."),
            quality: DEFAULT_QUALITY,
        }
    }
}

impl ConversionParams {
    pub fn new(input_folder: impl Into<PathBuf>, output_folder: impl Into<PathBuf>) -> Self {
        Self {
            input_folder: input_folder.into(),
            output_folder: output_folder.into(),
            quality: DEFAULT_QUALITY,
        }
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.quality > MAX_QUALITY {
            return Err(Error::InvalidArgument {
                arg: "quality",
                value: self.quality.to_string(),
            });
        }
        Ok(())
    }
}

/// Partial parameters as found in a JSON config file or on the command line.
/// Every key is optional; `resolve` fills the gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParamsOverrides {
    pub input_folder: Option<PathBuf>,
    pub output_folder: Option<PathBuf>,
    pub quality: Option<u8>,
}

impl ParamsOverrides {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Layer `other` on top of `self`; keys set in `other` win.
    pub fn merged(self, other: ParamsOverrides) -> Self {
        Self {
            input_folder: other.input_folder.or(self.input_folder),
            output_folder: other.output_folder.or(self.output_folder),
            quality: other.quality.or(self.quality),
        }
    }

    /// Fill unset keys and validate. The output folder defaults to the
    /// input folder, so a bare run converts in place.
    pub fn resolve(self) -> Result<ConversionParams> {
        let input_folder = self.input_folder.unwrap_or_else(|| PathBuf::from("."));
        let output_folder = self.output_folder.unwrap_or_else(|| input_folder.clone());
        let params = ConversionParams {
            input_folder,
            output_folder,
            quality: self.quality.unwrap_or(DEFAULT_QUALITY),
        };
        params.validate()?;
        Ok(params)
    }
}
