//! TileEncoder builder -- the primary entry point for the crate.
//!
//! [`TileEncoder`] runs the whole pipeline (palette resolution, block
//! quantization, tile and pair deduplication, print string) with fluent
//! configuration.

use crate::api::EncodeError;
use crate::color::Rgb;
use crate::output::EncodedImage;
use crate::palette::SpectrumColor;
use crate::quantize::{quantize_block, ColorPreferences, IndexedImage, BLOCK_SIZE};
use crate::stream::{compress, PrintStreamEncoder};
use crate::tiles::{tile_byte, MatrixEntry, MatrixTable, TileSet};

/// High-level encoder for attribute-mapped displays.
///
/// # Design
///
/// - Configuration methods consume and return `self`
/// - [`encode()`](Self::encode) takes `&self`, so one encoder can be reused
///   across images; every call starts from empty tables
/// - Output is fully deterministic for a given image and configuration
///
/// # Example
///
/// ```
/// use sp1_tiles::{Rgb, SpectrumColor, TileEncoder};
///
/// let encoder = TileEncoder::new()
///     .base(64)
///     .preferred_background(Some(SpectrumColor::Blue));
///
/// let pixels = vec![Rgb::new(0, 0, 205); 16 * 8];
/// let encoded = encoder.encode(&pixels, 16, 8).unwrap();
///
/// assert_eq!(encoded.tile_count(), 1);
/// assert_eq!(encoded.matrix_map(), &[0, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileEncoder {
    base: u8,
    limit: usize,
    preferences: ColorPreferences,
}

impl Default for TileEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TileEncoder {
    /// Default base offset for tile references.
    pub const DEFAULT_BASE: u8 = 128;

    /// Create an encoder with the defaults: base 128, no print-string
    /// limit, black preferred as background and white as foreground.
    pub fn new() -> Self {
        Self {
            base: Self::DEFAULT_BASE,
            limit: 0,
            preferences: ColorPreferences {
                background: Some(SpectrumColor::Black),
                foreground: Some(SpectrumColor::White),
            },
        }
    }

    /// Set the value added to tile ids in tile references.
    #[inline]
    pub fn base(mut self, base: u8) -> Self {
        self.base = base;
        self
    }

    /// Limit the print string to the first `limit` blocks (0 = no limit).
    ///
    /// Tile data and the pair table always cover the whole image.
    #[inline]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the preferred background color, or `None` to disable it.
    #[inline]
    pub fn preferred_background(mut self, color: Option<SpectrumColor>) -> Self {
        self.preferences.background = color;
        self
    }

    /// Set the preferred foreground color, or `None` to disable it.
    #[inline]
    pub fn preferred_foreground(mut self, color: Option<SpectrumColor>) -> Self {
        self.preferences.foreground = color;
        self
    }

    /// Set both preferred colors by palette name.
    ///
    /// # Errors
    ///
    /// [`EncodeError::Palette`] if a name is not a palette color.
    pub fn preferred_names(
        self,
        background: Option<&str>,
        foreground: Option<&str>,
    ) -> Result<Self, EncodeError> {
        let background = background.map(str::parse).transpose()?;
        let foreground = foreground.map(str::parse).transpose()?;
        Ok(self
            .preferred_background(background)
            .preferred_foreground(foreground))
    }

    /// The configured preferred colors.
    #[inline]
    pub fn preferences(&self) -> ColorPreferences {
        self.preferences
    }

    /// Encode row-major RGB pixels.
    ///
    /// # Errors
    ///
    /// Any [`EncodeError`] aborts the encode; no partial output is returned.
    pub fn encode(
        &self,
        pixels: &[Rgb],
        width: usize,
        height: usize,
    ) -> Result<EncodedImage, EncodeError> {
        let image = IndexedImage::from_rgb(pixels, width, height)?;
        self.encode_indexed(&image)
    }

    /// Encode an image that has already been resolved against the palette.
    pub fn encode_indexed(&self, image: &IndexedImage) -> Result<EncodedImage, EncodeError> {
        let mut tiles = TileSet::new();
        let mut matrix = MatrixTable::new();
        let mut print = PrintStreamEncoder::new(self.limit);

        for y in (0..image.height()).step_by(BLOCK_SIZE) {
            for x in (0..image.width()).step_by(BLOCK_SIZE) {
                let block = quantize_block(image, x, y, &self.preferences)?;
                let tile = tile_byte(tiles.intern(block.bitmap), self.base)?;
                matrix.push(MatrixEntry {
                    attr: block.attribute.byte(),
                    tile,
                });
                print.push_block(block.attribute, tile);
            }
            print.end_row();
        }

        let raw_print_stream = print.finish();
        let print_stream = compress(&raw_print_stream);
        let (matrix_table, matrix_map) = matrix.into_parts();

        Ok(EncodedImage {
            width: image.width(),
            height: image.height(),
            base: self.base,
            limit: self.limit,
            tiles: tiles.into_bytes(),
            matrix_table,
            matrix_map,
            raw_print_stream,
            print_stream,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteError;
    use SpectrumColor::*;

    fn solid(color: SpectrumColor, width: usize, height: usize) -> Vec<Rgb> {
        vec![color.rgb(); width * height]
    }

    #[test]
    fn test_defaults() {
        let encoder = TileEncoder::default();
        assert_eq!(encoder.base, 128);
        assert_eq!(encoder.limit, 0);
        assert_eq!(encoder.preferences().background, Some(Black));
        assert_eq!(encoder.preferences().foreground, Some(White));
    }

    #[test]
    fn test_preferred_names() {
        let encoder = TileEncoder::new()
            .preferred_names(Some("Bright-Cyan"), None)
            .unwrap();
        assert_eq!(encoder.preferences().background, Some(BrightCyan));
        assert_eq!(encoder.preferences().foreground, None);

        let err = TileEncoder::new()
            .preferred_names(None, Some("orange"))
            .unwrap_err();
        assert_eq!(
            err,
            EncodeError::Palette(PaletteError::UnknownName("orange".to_string()))
        );
    }

    #[test]
    fn test_encoder_is_reusable() {
        let encoder = TileEncoder::new();
        let first = encoder.encode(&solid(Red, 16, 16), 16, 16).unwrap();
        let second = encoder.encode(&solid(Red, 16, 16), 16, 16).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_limit_does_not_truncate_tables() {
        let mut pixels = solid(Black, 24, 8);
        // Distinct tile in the last block
        pixels[20] = White.rgb();
        let encoded = TileEncoder::new()
            .limit(1)
            .encode(&pixels, 24, 8)
            .unwrap();

        assert_eq!(encoded.tile_count(), 2);
        assert_eq!(encoded.matrix_map(), &[0, 0, 1]);
        assert_eq!(encoded.raw_print_stream(), &[20, 0x07, 128, 0]);
    }

    #[test]
    fn test_base_overflow() {
        // 8x8 blocks each with a distinct single set pixel => many tiles
        let width = 8 * 8;
        let mut pixels = solid(Black, width, 8);
        for block in 0..8 {
            pixels[block * 8 + block] = White.rgb();
        }
        let err = TileEncoder::new()
            .base(250)
            .encode(&pixels, width, 8)
            .unwrap_err();
        assert_eq!(
            err,
            EncodeError::BaseOverflow {
                tile_id: 6,
                base: 250
            }
        );
    }
}
