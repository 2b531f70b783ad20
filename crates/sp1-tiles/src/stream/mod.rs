//! Print-string token stream
//!
//! The print string replays an image as a sequence of control codes and
//! tile references. Bytes below 32 are control codes; everything else is a
//! tile reference (tile id + base).
//!
//! | Code | Meaning                                          |
//! |------|--------------------------------------------------|
//! | 0    | end of string                                    |
//! | 13   | row break                                        |
//! | 14   | run escape `[14, count, byte, 15]` (compressed)  |
//! | 20   | set attribute, next byte is the attribute        |
//!
//! - [`PrintStreamEncoder`] builds the raw stream block by block
//! - [`compress()`] / [`decompress()`] apply and undo the run escapes
//! - [`replay()`] / [`decode()`] turn a stream back into [`PrintOp`]s

mod error;
mod print;
mod replay;
mod rle;

pub use error::StreamError;
pub use print::PrintStreamEncoder;
pub use replay::{decode, replay, PrintOp};
pub use rle::{compress, decompress, MAX_RUN, MIN_RUN};

/// End of the print string.
pub const END: u8 = 0;
/// Move to the start of the next row.
pub const ROW_BREAK: u8 = 13;
/// Opens a run escape.
pub const RUN_START: u8 = 14;
/// Closes a run escape.
pub const RUN_END: u8 = 15;
/// Set the current attribute; the argument byte follows.
pub const SET_ATTRIBUTE: u8 = 20;

/// Returns true for bytes interpreted as control codes.
#[inline]
pub fn is_control(byte: u8) -> bool {
    byte < 32
}
