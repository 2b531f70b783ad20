//! The fixed 15-color attribute palette
//!
//! This module provides [`SpectrumColor`], the closed set of colors an
//! attribute cell can show, together with the ink and paper bit patterns
//! that combine into an attribute byte.

mod error;
mod palette;

pub use error::PaletteError;
pub use palette::SpectrumColor;
