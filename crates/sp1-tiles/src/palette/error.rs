//! Error types for palette lookups

use std::fmt;

/// Error type for resolving a color name against the palette.
///
/// Returned when a configured preferred color does not name one of the
/// fifteen palette entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// The name is not a palette color (as given by the caller)
    UnknownName(String),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::UnknownName(name) => {
                write!(f, "invalid color name '{}'", name)
            }
        }
    }
}

impl std::error::Error for PaletteError {}
