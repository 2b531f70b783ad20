//! Tile and attribute/tile table deduplication
//!
//! Both tables are insertion-ordered and append-only for the lifetime of one
//! encode: a hash index gives the existing id, a growable sequence fixes the
//! order ids are handed out in.

mod matrix;
mod tile_set;

pub use matrix::{MatrixEntry, MatrixTable};
pub use tile_set::TileSet;

use crate::api::EncodeError;

/// Reference byte for a tile: `tile_id + base`.
///
/// # Errors
///
/// [`EncodeError::BaseOverflow`] when the sum exceeds 255.
pub fn tile_byte(tile_id: usize, base: u8) -> Result<u8, EncodeError> {
    u8::try_from(tile_id)
        .ok()
        .and_then(|id| id.checked_add(base))
        .ok_or(EncodeError::BaseOverflow { tile_id, base })
}
