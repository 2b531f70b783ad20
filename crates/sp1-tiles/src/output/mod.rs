//! Output types for the encoding pipeline.
//!
//! This module provides [`EncodedImage`], which bundles every artifact of
//! one encode:
//!
//! - **Tile data** ([`EncodedImage::tiles`]): eight bytes per unique tile
//! - **Pair table** ([`EncodedImage::matrix_table`]): unique (attribute, tile)
//!   pairs
//! - **Tile map** ([`EncodedImage::matrix_map`]): pair index of every block
//! - **Print string** ([`EncodedImage::print_stream`]): compressed replay
//!   stream

mod encoded_image;

pub use encoded_image::EncodedImage;
