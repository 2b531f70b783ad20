//! Unique tile bitmaps in first-seen order.

use std::collections::HashMap;

use crate::quantize::Bitmap;

/// Deduplicated tile bitmaps.
///
/// Ids are dense and 0-based. The byte buffer is the concatenation of each
/// unique bitmap's eight rows in id order, which is exactly the tile data
/// the display side loads.
///
/// # Example
///
/// ```
/// use sp1_tiles::{Bitmap, TileSet};
///
/// let mut tiles = TileSet::new();
/// assert_eq!(tiles.intern(Bitmap([0; 8])), 0);
/// assert_eq!(tiles.intern(Bitmap([0xff; 8])), 1);
/// assert_eq!(tiles.intern(Bitmap([0; 8])), 0);
/// assert_eq!(tiles.len(), 2);
/// assert_eq!(tiles.bytes().len(), 16);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TileSet {
    ids: HashMap<Bitmap, usize>,
    bytes: Vec<u8>,
}

impl TileSet {
    /// Create an empty tile set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id of `bitmap`, assigning the next id if it is new.
    pub fn intern(&mut self, bitmap: Bitmap) -> usize {
        if let Some(&id) = self.ids.get(&bitmap) {
            return id;
        }
        let id = self.ids.len();
        self.ids.insert(bitmap, id);
        self.bytes.extend_from_slice(bitmap.rows());
        id
    }

    /// Number of unique tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if no tile has been interned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Bitmap with the given id.
    pub fn get(&self, id: usize) -> Option<Bitmap> {
        let rows = self.bytes.get(id * 8..id * 8 + 8)?;
        let mut bitmap = Bitmap::default();
        bitmap.0.copy_from_slice(rows);
        Some(bitmap)
    }

    /// Tile data: eight bytes per tile, in id order.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the set, keeping only the tile data.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
