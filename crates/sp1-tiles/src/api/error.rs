//! Unified error type for encoding an image.
//!
//! Every variant is fatal: the encoder never produces partial output.

use crate::color::Rgb;
use crate::palette::PaletteError;
use std::fmt;

/// Error type for [`TileEncoder::encode()`](crate::TileEncoder::encode).
///
/// Each variant means the input cannot be expressed in the fixed-palette,
/// two-colors-per-block model, so there is nothing to recover locally.
///
/// # Example
///
/// ```
/// use sp1_tiles::{EncodeError, Rgb, TileEncoder};
///
/// let pixels = vec![Rgb::new(0, 0, 0); 4 * 8];
/// let err = TileEncoder::new().encode(&pixels, 4, 8).unwrap_err();
/// assert!(matches!(err, EncodeError::InvalidGeometry { width: 4, height: 8 }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Width or height is not a multiple of the 8-pixel block size
    InvalidGeometry {
        /// Image width in pixels
        width: usize,
        /// Image height in pixels
        height: usize,
    },
    /// The pixel buffer does not hold `width * height` pixels
    PixelCountMismatch {
        /// `width * height`
        expected: usize,
        /// Length of the buffer that was passed in
        actual: usize,
    },
    /// A pixel is not one of the fifteen palette colors
    UnknownColor {
        /// The offending color
        rgb: Rgb,
        /// Pixel column
        x: usize,
        /// Pixel row
        y: usize,
    },
    /// A block holds more than two distinct colors
    TooManyColors {
        /// Block origin column in pixels
        x: usize,
        /// Block origin row in pixels
        y: usize,
    },
    /// `tile_id + base` does not fit in a byte
    BaseOverflow {
        /// Tile that could not be referenced
        tile_id: usize,
        /// Configured base offset
        base: u8,
    },
    /// A preferred color name did not resolve
    Palette(PaletteError),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::InvalidGeometry { width, height } => {
                write!(f, "image size {}x{} is not a multiple of 8", width, height)
            }
            EncodeError::PixelCountMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel buffer holds {} pixels, expected {}",
                    actual, expected
                )
            }
            EncodeError::UnknownColor { rgb, x, y } => {
                write!(f, "invalid color {} in image at ({}, {})", rgb, x, y)
            }
            EncodeError::TooManyColors { x, y } => {
                write!(
                    f,
                    "more than 2 colors in an attribute block in ({}, {})",
                    x, y
                )
            }
            EncodeError::BaseOverflow { tile_id, base } => {
                write!(
                    f,
                    "tile {} does not fit in a byte with base {} (too many unique tiles)",
                    tile_id, base
                )
            }
            EncodeError::Palette(err) => write!(f, "palette error: {}", err),
        }
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EncodeError::Palette(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PaletteError> for EncodeError {
    fn from(err: PaletteError) -> Self {
        EncodeError::Palette(err)
    }
}
