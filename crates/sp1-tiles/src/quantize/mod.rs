//! Block quantization
//!
//! Turns the palette-resolved image into per-block canonical bitmaps and
//! (paper, ink) attributes:
//!
//! - [`IndexedImage`]: the pixel grid after every pixel has been matched
//!   against the palette
//! - [`quantize_block()`]: one 8x8 block to a [`QuantizedBlock`]
//! - [`ColorPreferences`]: preferred paper/ink used to canonicalize blocks

mod block;
mod image;

pub use block::{quantize_block, Attribute, Bitmap, ColorPreferences, QuantizedBlock, BLOCK_SIZE};
pub use image::IndexedImage;
