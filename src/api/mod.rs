//! High-level library API: convert a whole folder or a single file and get a
//! structured `RunSummary` back. Prefer these entrypoints over the low-level
//! `core` and `io` modules when embedding webpify.
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::params::ConversionParams;
use crate::core::processing::convert::convert_to_webp;
use crate::error::{Error, Result};
use crate::io::scan::{iterate_candidates, output_file_name};
use crate::types::ConversionResult;

/// Aggregate outcome of one `convert_all` run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of `Converted` entries in `results`
    pub converted: usize,
    /// Number of `Failed` entries in `results`
    pub failed: usize,
    /// Entries that were not eligible (wrong extension or a directory)
    pub skipped: usize,
    /// One result per eligible file, in processing order
    pub results: Vec<ConversionResult>,
}

impl RunSummary {
    fn record(&mut self, result: ConversionResult) {
        if result.is_converted() {
            self.converted += 1;
        } else {
            self.failed += 1;
        }
        self.results.push(result);
    }

    pub fn failures(&self) -> impl Iterator<Item = &ConversionResult> {
        self.results.iter().filter(|r| !r.is_converted())
    }

    /// One-line, human-readable outcome of the run.
    pub fn message(&self) -> String {
        if self.converted == 0 {
            "No PNG or JPEG files found in the folder, or all of them failed.".to_string()
        } else {
            format!("Done! Converted {} file(s) to WebP.", self.converted)
        }
    }
}

/// Convert one image into `output_dir/<stem>.webp`.
///
/// Never fails as a whole: any decode, encode or write error is captured
/// in the returned `ConversionResult::Failed`.
pub fn convert_file(input: &Path, output_dir: &Path, quality: u8) -> ConversionResult {
    let file = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    let output = output_dir.join(output_file_name(input));

    match convert_to_webp(input, &output, quality) {
        Ok((width, height)) => {
            info!(
                "Converted: {} -> {} ({}x{})",
                file,
                output.file_name().unwrap_or_default().to_string_lossy(),
                width,
                height
            );
            ConversionResult::Converted { file, output }
        }
        Err(e) => {
            let reason = e.to_string();
            warn!(
                "{}",
                Error::ConversionFailed {
                    file: file.clone(),
                    reason: reason.clone(),
                }
            );
            ConversionResult::Failed { file, reason }
        }
    }
}

/// Convert every eligible image directly inside `params.input_folder`.
///
/// Fails only when the input folder is missing, the parameters are invalid,
/// or the output folder cannot be created; all of these are checked before
/// any file is written. Per-file failures are recorded in the summary and
/// never stop the batch.
pub fn convert_all(params: &ConversionParams) -> Result<RunSummary> {
    let input_dir = params.input_folder.as_path();
    let output_dir = params.output_folder.as_path();

    if !input_dir.is_dir() {
        return Err(Error::DirectoryNotFound {
            path: input_dir.to_path_buf(),
        });
    }
    params.validate()?;

    std::fs::create_dir_all(output_dir)?;

    info!("Converting images from: {:?}", input_dir);
    info!("Output folder: {:?}", output_dir);

    let (candidates, skipped) = iterate_candidates(input_dir)?;
    let mut summary = RunSummary {
        skipped,
        ..RunSummary::default()
    };

    let mut written: HashSet<OsString> = HashSet::new();
    for path in candidates {
        let result = convert_file(&path, output_dir, params.quality);
        if let ConversionResult::Converted { output, .. } = &result {
            let name = output.file_name().map(OsString::from).unwrap_or_default();
            if !written.insert(name) {
                warn!("Overwrote {:?} produced earlier in this run", output);
            }
        }
        summary.record(result);
    }

    if summary.converted == 0 {
        warn!("{}", summary.message());
    } else {
        info!("{}", summary.message());
    }
    if summary.failed > 0 {
        warn!("{} file(s) failed to convert", summary.failed);
    }

    Ok(summary)
}
