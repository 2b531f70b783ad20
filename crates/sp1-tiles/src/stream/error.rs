//! Error type for malformed print strings.

use std::fmt;

/// Error returned when decoding a print string fails.
///
/// Offsets are byte positions in the stream being decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// A set-attribute code is the last byte of the stream
    MissingArgument {
        /// Offset of the set-attribute code
        offset: usize,
    },
    /// A run escape is cut short by the end of the stream
    TruncatedRun {
        /// Offset of the run start code
        offset: usize,
    },
    /// A run escape is not closed by the run end code
    UnterminatedRun {
        /// Offset of the run start code
        offset: usize,
    },
    /// A control code with no meaning in an expanded stream
    UnexpectedControl {
        /// The code
        code: u8,
        /// Where it was found
        offset: usize,
    },
    /// The stream ended without the end code
    MissingTerminator,
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::MissingArgument { offset } => {
                write!(f, "set-attribute at offset {} has no argument", offset)
            }
            StreamError::TruncatedRun { offset } => {
                write!(f, "run escape at offset {} is truncated", offset)
            }
            StreamError::UnterminatedRun { offset } => {
                write!(f, "run escape at offset {} is not terminated", offset)
            }
            StreamError::UnexpectedControl { code, offset } => {
                write!(f, "unexpected control code {} at offset {}", code, offset)
            }
            StreamError::MissingTerminator => write!(f, "print string is not terminated"),
        }
    }
}

impl std::error::Error for StreamError {}
