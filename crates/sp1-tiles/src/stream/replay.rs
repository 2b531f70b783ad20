//! Replaying a print string as drawing operations.

use super::error::StreamError;
use super::rle::decompress;
use super::{is_control, END, ROW_BREAK, SET_ATTRIBUTE};

/// One drawing operation of an expanded print string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintOp {
    /// Subsequent tiles use this attribute byte
    SetAttribute(u8),
    /// Draw the tile with this reference byte and advance one cell
    Tile(u8),
    /// Continue at the start of the next row
    RowBreak,
    /// End of the string
    End,
}

/// Interpret an expanded (run escapes already undone) print string.
///
/// Replay stops at the first end code, which is included as
/// [`PrintOp::End`]; anything after it is ignored.
///
/// # Errors
///
/// - [`StreamError::MissingArgument`] for a trailing set-attribute code
/// - [`StreamError::UnexpectedControl`] for any other control code,
///   including run escape codes
/// - [`StreamError::MissingTerminator`] if the end code never appears
pub fn replay(raw: &[u8]) -> Result<Vec<PrintOp>, StreamError> {
    let mut ops = Vec::new();
    let mut bytes = raw.iter().copied().enumerate();

    while let Some((offset, byte)) = bytes.next() {
        let op = match byte {
            END => {
                ops.push(PrintOp::End);
                return Ok(ops);
            }
            ROW_BREAK => PrintOp::RowBreak,
            SET_ATTRIBUTE => {
                let (_, arg) = bytes
                    .next()
                    .ok_or(StreamError::MissingArgument { offset })?;
                PrintOp::SetAttribute(arg)
            }
            code if is_control(code) => {
                return Err(StreamError::UnexpectedControl { code, offset });
            }
            tile => PrintOp::Tile(tile),
        };
        ops.push(op);
    }

    Err(StreamError::MissingTerminator)
}

/// Expand and replay a compressed print string.
///
/// # Example
///
/// ```
/// use sp1_tiles::{decode, PrintOp};
///
/// let ops = decode(&[20, 0x07, 14, 6, 128, 15, 13, 0]).unwrap();
/// assert_eq!(ops[0], PrintOp::SetAttribute(0x07));
/// assert_eq!(ops.len(), 1 + 6 + 2);
/// assert_eq!(ops[8], PrintOp::End);
/// ```
pub fn decode(packed: &[u8]) -> Result<Vec<PrintOp>, StreamError> {
    replay(&decompress(packed)?)
}
