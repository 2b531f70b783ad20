//! Raw print-string encoder.

use super::{END, ROW_BREAK, SET_ATTRIBUTE};
use crate::quantize::Attribute;

/// Builds the raw (uncompressed) print string in scan order.
///
/// Feed every block with [`push_block()`](Self::push_block), close every
/// block row with [`end_row()`](Self::end_row), then call
/// [`finish()`](Self::finish).
///
/// With a non-zero limit `L`, only the first `L` blocks produce output. The
/// block counter keeps advancing and the attribute state keeps tracking the
/// image after the limit is reached; only the appending stops. The end code
/// is always written.
///
/// # Example
///
/// ```
/// use sp1_tiles::{Attribute, PrintStreamEncoder, SpectrumColor};
///
/// let attr = Attribute::new(SpectrumColor::Black, SpectrumColor::White);
/// let mut print = PrintStreamEncoder::new(0);
/// print.push_block(attr, 128);
/// print.push_block(attr, 129);
/// print.end_row();
///
/// assert_eq!(print.finish(), vec![20, 0x07, 128, 129, 13, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct PrintStreamEncoder {
    tokens: Vec<u8>,
    current: Option<Attribute>,
    scanned: usize,
    limit: usize,
}

impl PrintStreamEncoder {
    /// Create an encoder. A `limit` of 0 means unlimited.
    pub fn new(limit: usize) -> Self {
        Self {
            tokens: Vec::new(),
            current: None,
            scanned: 0,
            limit,
        }
    }

    /// Whether output is still being appended.
    #[inline]
    pub fn is_emitting(&self) -> bool {
        self.limit == 0 || self.scanned < self.limit
    }

    /// Number of blocks fed so far, including the ones past the limit.
    #[inline]
    pub fn scanned(&self) -> usize {
        self.scanned
    }

    /// Append one block: an attribute change if needed, then the tile byte.
    pub fn push_block(&mut self, attribute: Attribute, tile: u8) {
        let emitting = self.is_emitting();
        if self.current != Some(attribute) {
            if emitting {
                self.tokens.extend([SET_ATTRIBUTE, attribute.byte()]);
            }
            self.current = Some(attribute);
        }
        if emitting {
            self.tokens.push(tile);
        }
        self.scanned += 1;
    }

    /// Close the current block row.
    pub fn end_row(&mut self) {
        if self.is_emitting() {
            self.tokens.push(ROW_BREAK);
        }
    }

    /// Append the end code and return the raw stream.
    pub fn finish(mut self) -> Vec<u8> {
        self.tokens.push(END);
        self.tokens
    }
}
