use image::{DynamicImage, RgbImage};

/// Collapse any decoded color representation into 8-bit RGB.
///
/// Alpha is dropped, not composited; palette and grayscale inputs are
/// expanded; 16-bit and float channels are scaled down to 8 bits.
pub fn to_three_channel(image: DynamicImage) -> RgbImage {
    match image {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other => other.to_rgb8(),
    }
}
