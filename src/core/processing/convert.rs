use std::path::Path;

use image::ImageReader;
use tracing::debug;

use crate::core::processing::normalize::to_three_channel;
use crate::error::Result;
use crate::io::writers::webp::write_rgb_webp;

/// Decode `input`, normalize it to RGB and write it to `output` as lossy WebP.
///
/// The format is sniffed from the file content first and falls back to the
/// extension. The decoded image lives only for the duration of this call.
/// Returns the dimensions of the written image.
pub fn convert_to_webp(input: &Path, output: &Path, quality: u8) -> Result<(u32, u32)> {
    let decoded = ImageReader::open(input)?.with_guessed_format()?.decode()?;
    debug!(
        "Decoded {:?}: {}x{} {:?}",
        input,
        decoded.width(),
        decoded.height(),
        decoded.color()
    );

    let rgb = to_three_channel(decoded);
    write_rgb_webp(output, &rgb, quality)?;
    Ok(rgb.dimensions())
}
