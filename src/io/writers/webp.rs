use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::RgbImage;
use webp::Encoder;

use crate::error::{Error, Result};

/// Encode an RGB buffer as lossy WebP at `quality` (0..=100).
pub fn encode_rgb_webp(rgb: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    let (width, height) = rgb.dimensions();
    let encoder = Encoder::from_rgb(rgb.as_raw(), width, height);
    let memory = encoder
        .encode_simple(false, f32::from(quality))
        .map_err(|e| Error::Encode(format!("{e:?}")))?;
    Ok(memory.to_vec())
}

/// Encode and write a lossy WebP file, replacing any existing file at `output`.
pub fn write_rgb_webp(output: &Path, rgb: &RgbImage, quality: u8) -> Result<()> {
    let bytes = encode_rgb_webp(rgb, quality)?;
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
