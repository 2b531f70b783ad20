//! EncodedImage struct holding the artifacts of one encode.

use crate::quantize::BLOCK_SIZE;
use crate::tiles::MatrixEntry;

/// The result of encoding one image.
///
/// All buffers are final; nothing here depends on how they will be
/// formatted or stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) base: u8,
    pub(crate) limit: usize,
    pub(crate) tiles: Vec<u8>,
    pub(crate) matrix_table: Vec<MatrixEntry>,
    pub(crate) matrix_map: Vec<usize>,
    pub(crate) raw_print_stream: Vec<u8>,
    pub(crate) print_stream: Vec<u8>,
}

impl EncodedImage {
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

    /// Base offset added to tile ids.
    #[inline]
    pub fn base(&self) -> u8 {
        self.base
    }

    /// Print-string block limit the image was encoded with (0 = none).
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Tile data: eight bytes per unique tile, in id order.
    #[inline]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Number of unique tiles.
    #[inline]
    pub fn tile_count(&self) -> usize {
        self.tiles.len() / BLOCK_SIZE
    }

    /// Unique (attribute, tile) pairs in first-seen order.
    #[inline]
    pub fn matrix_table(&self) -> &[MatrixEntry] {
        &self.matrix_table
    }

    /// Index into [`matrix_table()`](Self::matrix_table) for every block,
    /// in scan order.
    #[inline]
    pub fn matrix_map(&self) -> &[usize] {
        &self.matrix_map
    }

    /// Print string before run escapes were applied.
    #[inline]
    pub fn raw_print_stream(&self) -> &[u8] {
        &self.raw_print_stream
    }

    /// Compressed print string, the form the display side consumes.
    #[inline]
    pub fn print_stream(&self) -> &[u8] {
        &self.print_stream
    }
}
