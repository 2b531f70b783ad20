//! PNG decoding into RGB pixels.
//!
//! Palette images are expanded to RGB and 16-bit channels are stripped to
//! 8 bits by the decoder. Alpha is dropped. Grayscale images are rejected:
//! the attribute palette contains no greys other than black and the two
//! whites, so a grayscale source is almost always the wrong file.

use png::{ColorType, Transformations};
use sp1_tiles::Rgb;
use std::path::Path;

use crate::error::DecodeError;

/// Decoded image, one [`Rgb`] per pixel in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    pub pixels: Vec<Rgb>,
    pub width: usize,
    pub height: usize,
}

/// Read and decode a PNG file.
pub fn load_png(path: &Path) -> Result<RgbImage, DecodeError> {
    let bytes = std::fs::read(path)?;
    decode_png(&bytes)
}

/// Decode PNG bytes.
pub fn decode_png(bytes: &[u8]) -> Result<RgbImage, DecodeError> {
    let mut decoder = png::Decoder::new(bytes);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let data = &buf[..info.buffer_size()];

    let channels = match info.color_type {
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => return Err(DecodeError::UnsupportedColorType(other)),
    };

    let width = info.width as usize;
    let height = info.height as usize;
    let row_bytes = info.line_size;

    let pixels = data
        .chunks(row_bytes)
        .take(height)
        .flat_map(|row| {
            row[..width * channels]
                .chunks_exact(channels)
                .map(|px| Rgb::new(px[0], px[1], px[2]))
        })
        .collect();

    tracing::debug!(width, height, color_type = ?info.color_type, "Decoded PNG");

    Ok(RgbImage {
        pixels,
        width,
        height,
    })
}
