//! sp1-tiles: tile and attribute encoding for 8x8 attribute displays
//!
//! This library converts an image drawn in the fifteen-color attribute
//! palette into the data a character-mapped renderer (such as the SP1
//! sprite library) consumes: deduplicated 8x8 tile bitmaps, a table of
//! unique (attribute, tile) pairs with a per-block map into it, and a
//! run-length compressed "print string" that redraws the image tile by
//! tile.
//!
//! # Quick Start
//!
//! The [`TileEncoder`] builder is the primary entry point:
//!
//! ```
//! use sp1_tiles::{Rgb, TileEncoder};
//!
//! // An 8x8 image in solid black
//! let pixels = vec![Rgb::new(0, 0, 0); 64];
//! let encoded = TileEncoder::new().encode(&pixels, 8, 8).unwrap();
//!
//! assert_eq!(encoded.tiles(), &[0; 8]);
//! assert_eq!(encoded.raw_print_stream(), &[20, 0x07, 128, 13, 0]);
//! ```
//!
//! # The Attribute Model
//!
//! The display divides the screen into 8x8 cells. Each cell shows a 1-bit
//! bitmap in exactly two colors: *paper* for clear bits and *ink* for set
//! bits. The pair is stored as one attribute byte, with ink in bits 0-2,
//! paper in bits 3-5 and a shared bright flag in bit 6. See
//! [`SpectrumColor`] for the table.
//!
//! Consequently an input image must satisfy two rules, checked in this
//! order:
//!
//! 1. every pixel is exactly one of the fifteen palette colors
//! 2. no 8x8 block uses more than two colors
//!
//! # Pipeline Overview
//!
//! ```text
//! RGB pixels
//!     |
//!     v
//! IndexedImage            (geometry + palette check)
//!     |
//!     v  per block, row-major
//! quantize_block()        (bitmap relative to first color,
//!     |                    background pass, then foreground pass)
//!     +---> TileSet        (bitmap -> tile id, tile data)
//!     +---> MatrixTable    ((attr, tile + base) -> pair index, tile map)
//!     +---> PrintStreamEncoder
//!               |
//!               v
//!           compress()     (run escapes)
//! ```
//!
//! ## Canonical Bitmaps
//!
//! A block's bitmap is built relative to the first color met in the block,
//! which makes the bitmap independent of which colors were used. The
//! preferred background and foreground then normalize the orientation:
//! when the preferred background sits on the ink side it is swapped to
//! paper and the bitmap inverted, and likewise for the foreground in the
//! other direction. The two passes are independent and run in that order.
//!
//! ## Print String
//!
//! The print string interleaves set-attribute codes (only when the
//! attribute changes), tile references and row breaks, ending with a 0.
//! Runs of six or more identical tile references are then packed into
//! four-byte escapes. See the [`stream`] module for the byte format.

pub mod api;
pub mod color;
pub mod output;
pub mod palette;
pub mod quantize;
pub mod stream;
pub mod tiles;


pub use api::{EncodeError, TileEncoder};
pub use color::Rgb;
pub use output::EncodedImage;
pub use palette::{PaletteError, SpectrumColor};
pub use quantize::{quantize_block, Attribute, Bitmap, ColorPreferences, IndexedImage};
pub use stream::{compress, decode, decompress, replay, PrintOp, PrintStreamEncoder, StreamError};
pub use tiles::{MatrixEntry, MatrixTable, TileSet};
