//! Attribute/tile pair table and the per-block index map.

use std::collections::HashMap;

/// One (attribute byte, tile byte) pair, as laid out in the `sp1_tp`
/// table on the display side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatrixEntry {
    /// Attribute byte
    pub attr: u8,
    /// Tile reference byte (tile id + base)
    pub tile: u8,
}

/// Deduplicated (attribute, tile) pairs plus the index of every block.
///
/// Every [`push()`](Self::push) records one block: the pair is interned
/// with first-seen semantics and its table index appended to the map.
#[derive(Debug, Clone, Default)]
pub struct MatrixTable {
    index: HashMap<MatrixEntry, usize>,
    entries: Vec<MatrixEntry>,
    map: Vec<usize>,
}

impl MatrixTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one block and return its table index.
    pub fn push(&mut self, entry: MatrixEntry) -> usize {
        let next = self.entries.len();
        let idx = *self.index.entry(entry).or_insert(next);
        if idx == next {
            self.entries.push(entry);
        }
        self.map.push(idx);
        idx
    }

    /// Unique pairs in first-seen order.
    #[inline]
    pub fn entries(&self) -> &[MatrixEntry] {
        &self.entries
    }

    /// Table index of every block, in scan order.
    #[inline]
    pub fn map(&self) -> &[usize] {
        &self.map
    }

    /// Consume the table into `(entries, map)`.
    pub fn into_parts(self) -> (Vec<MatrixEntry>, Vec<usize>) {
        (self.entries, self.map)
    }
}
