//! Palette-resolved pixel grid.

use super::block::BLOCK_SIZE;
use crate::api::EncodeError;
use crate::color::Rgb;
use crate::palette::SpectrumColor;

/// An image whose pixels have all been matched to palette colors.
///
/// Construction validates the whole input up front, in this order: block
/// geometry, buffer length, then palette membership of every pixel in
/// row-major order. Block quantization can therefore only fail on the
/// two-color rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    colors: Vec<SpectrumColor>,
    width: usize,
    height: usize,
}

impl IndexedImage {
    /// Resolve row-major RGB pixels against the palette.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::InvalidGeometry`] if either dimension is not a
    ///   multiple of 8
    /// - [`EncodeError::PixelCountMismatch`] if `pixels.len() != width * height`
    /// - [`EncodeError::UnknownColor`] for the first pixel outside the palette
    pub fn from_rgb(pixels: &[Rgb], width: usize, height: usize) -> Result<Self, EncodeError> {
        if width % BLOCK_SIZE != 0 || height % BLOCK_SIZE != 0 {
            return Err(EncodeError::InvalidGeometry { width, height });
        }
        if pixels.len() != width * height {
            return Err(EncodeError::PixelCountMismatch {
                expected: width * height,
                actual: pixels.len(),
            });
        }

        let colors = pixels
            .iter()
            .enumerate()
            .map(|(i, &rgb)| {
                SpectrumColor::from_rgb(rgb).ok_or(EncodeError::UnknownColor {
                    rgb,
                    x: i % width,
                    y: i / width,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            colors,
            width,
            height,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of block columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.width / BLOCK_SIZE
    }

    /// Number of block rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.height / BLOCK_SIZE
    }

    /// Color of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the image.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> SpectrumColor {
        self.colors[y * self.width + x]
    }
}
