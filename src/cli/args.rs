use clap::Parser;
use std::path::PathBuf;

use webpify::ParamsOverrides;

#[derive(Parser, Debug)]
#[command(
    name = "webpify",
    version,
    about = "Convert every PNG/JPEG image in a folder to lossy WebP"
)]
pub struct CliArgs {
    /// Folder containing the PNG/JPEG files (default: current folder)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Folder to write the .webp files to (default: the input folder)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Lossy WebP quality, 0-100 (default: 85)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub quality: Option<u8>,

    /// JSON config with input_folder, output_folder and quality; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the run summary as JSON to this file
    #[arg(long)]
    pub summary_json: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    pub fn overrides(&self) -> ParamsOverrides {
        ParamsOverrides {
            input_folder: self.input.clone(),
            output_folder: self.output.clone(),
            quality: self.quality,
        }
    }
}
