//! Run escapes for the print string.
//!
//! Only tile references are run-length coded. A run of `n` identical tile
//! bytes with `n >= 6` becomes `[14, n, byte, 15]`; shorter runs are left
//! literal since the escape itself costs four bytes. Control codes pass
//! through untouched, and the argument of a set-attribute code is copied
//! without inspection even when it looks like a tile byte.

use super::error::StreamError;
use super::{is_control, RUN_END, RUN_START, SET_ATTRIBUTE};

/// Shortest run that is escaped.
pub const MIN_RUN: usize = 6;

/// Longest run a single escape can hold (the count is one byte).
pub const MAX_RUN: usize = 255;

/// Apply run escapes to a raw print string.
///
/// Runs longer than [`MAX_RUN`] are split into consecutive escapes, with a
/// tail shorter than [`MIN_RUN`] left literal.
///
/// # Example
///
/// ```
/// use sp1_tiles::compress;
///
/// let raw = [20, 0x07, 128, 128, 128, 128, 128, 128, 129, 13, 0];
/// assert_eq!(compress(&raw), vec![20, 0x07, 14, 6, 128, 15, 129, 13, 0]);
/// ```
pub fn compress(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    let mut p = 0;

    while p < raw.len() {
        let c = raw[p];

        if is_control(c) {
            out.push(c);
            if c == SET_ATTRIBUTE {
                if let Some(&arg) = raw.get(p + 1) {
                    out.push(arg);
                    p += 1;
                }
            }
            p += 1;
            continue;
        }

        let run = 1 + raw[p + 1..]
            .iter()
            .take(MAX_RUN - 1)
            .take_while(|&&b| b == c)
            .count();

        if run >= MIN_RUN {
            out.extend([RUN_START, run as u8, c, RUN_END]);
            p += run;
        } else {
            out.push(c);
            p += 1;
        }
    }

    out
}

/// Undo [`compress()`], expanding every run escape.
///
/// # Errors
///
/// Returns a [`StreamError`] for a set-attribute code without argument or a
/// run escape that is truncated or not closed by the run end code.
///
/// # Example
///
/// ```
/// use sp1_tiles::decompress;
///
/// let packed = [14, 7, 130, 15, 13, 0];
/// assert_eq!(
///     decompress(&packed).unwrap(),
///     vec![130, 130, 130, 130, 130, 130, 130, 13, 0]
/// );
/// ```
pub fn decompress(packed: &[u8]) -> Result<Vec<u8>, StreamError> {
    let mut out = Vec::with_capacity(packed.len() * 2);
    let mut p = 0;

    while p < packed.len() {
        match packed[p] {
            SET_ATTRIBUTE => {
                let arg = *packed
                    .get(p + 1)
                    .ok_or(StreamError::MissingArgument { offset: p })?;
                out.extend([SET_ATTRIBUTE, arg]);
                p += 2;
            }
            RUN_START => {
                let escape = packed
                    .get(p + 1..p + 4)
                    .ok_or(StreamError::TruncatedRun { offset: p })?;
                if escape[2] != RUN_END {
                    return Err(StreamError::UnterminatedRun { offset: p });
                }
                out.extend(std::iter::repeat(escape[1]).take(escape[0] as usize));
                p += 4;
            }
            byte => {
                out.push(byte);
                p += 1;
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A non-repeating stream with a run of `n` copies of `c` in the middle.
    fn with_run(n: usize, c: u8) -> Vec<u8> {
        let mut raw = vec![20, 0x07, 200, 201];
        raw.extend(std::iter::repeat(c).take(n));
        raw.extend([202, 13, 0]);
        raw
    }

    #[test]
    fn test_short_runs_stay_literal() {
        for n in 1..MIN_RUN {
            let raw = with_run(n, 150);
            assert_eq!(compress(&raw), raw, "run of {n} must not be escaped");
        }
    }

    #[test]
    fn test_run_of_five_is_not_escaped() {
        let raw = with_run(5, 150);
        assert_eq!(
            compress(&raw),
            vec![20, 0x07, 200, 201, 150, 150, 150, 150, 150, 202, 13, 0]
        );
    }

    #[test]
    fn test_run_of_six_is_escaped() {
        let raw = with_run(6, 150);
        assert_eq!(
            compress(&raw),
            vec![20, 0x07, 200, 201, 14, 6, 150, 15, 202, 13, 0]
        );
    }

    #[test]
    fn test_long_runs_are_escaped() {
        for n in [7, 42, 254, 255] {
            let packed = compress(&with_run(n, 150));
            assert_eq!(
                packed,
                vec![20, 0x07, 200, 201, 14, n as u8, 150, 15, 202, 13, 0]
            );
        }
    }

    #[test]
    fn test_run_longer_than_one_escape_is_split() {
        let packed = compress(&with_run(300, 150));
        // 255 escaped, 45 remaining escaped again
        assert_eq!(
            packed,
            vec![20, 0x07, 200, 201, 14, 255, 150, 15, 14, 45, 150, 15, 202, 13, 0]
        );

        let packed = compress(&with_run(258, 150));
        // Tail of three stays literal
        assert_eq!(
            packed,
            vec![20, 0x07, 200, 201, 14, 255, 150, 15, 150, 150, 150, 202, 13, 0]
        );
    }

    #[test]
    fn test_attribute_argument_is_not_a_run() {
        // Argument 0x80 equals the following tile bytes but is copied as-is
        let raw = vec![20, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0];
        assert_eq!(compress(&raw), vec![20, 0x80, 14, 6, 0x80, 15, 0]);
    }

    #[test]
    fn test_control_codes_are_never_escaped() {
        let raw = vec![13, 13, 13, 13, 13, 13, 13, 0];
        assert_eq!(compress(&raw), raw);
    }

    #[test]
    fn test_run_at_end_of_stream() {
        let raw = vec![140; 8];
        assert_eq!(compress(&raw), vec![14, 8, 140, 15]);
    }

    #[test]
    fn test_dangling_set_attribute_is_copied() {
        assert_eq!(compress(&[128, 20]), vec![128, 20]);
    }

    #[test]
    fn test_decompress_inverts_compress() {
        for n in [1, 5, 6, 100, 255, 256, 600] {
            let raw = with_run(n, 170);
            assert_eq!(decompress(&compress(&raw)).unwrap(), raw);
        }
    }

    #[test]
    fn test_decompress_errors() {
        assert_eq!(
            decompress(&[128, 20]),
            Err(StreamError::MissingArgument { offset: 1 })
        );
        assert_eq!(
            decompress(&[14, 6, 128]),
            Err(StreamError::TruncatedRun { offset: 0 })
        );
        assert_eq!(
            decompress(&[13, 14, 6, 128, 16]),
            Err(StreamError::UnterminatedRun { offset: 1 })
        );
    }
}
