//! Palette table with attribute components and name lookup.
//!
//! Every palette color carries two bit patterns: the value it contributes to
//! an attribute byte when used as ink (bits 0-2) and when used as paper
//! (bits 3-5). Bright colors additionally set bit 6 in both patterns, so an
//! attribute mixing a bright and a non-bright color comes out bright.

use std::fmt;
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Rgb;

/// Bright flag shared by the ink and paper patterns.
const BRIGHT: u8 = 0x40;

/// One of the fifteen colors an attribute cell can display.
///
/// Non-bright colors use channel level 205, bright ones 255. Black has no
/// bright variant, which is why there are fifteen colors rather than
/// sixteen.
///
/// # Example
///
/// ```
/// use sp1_tiles::{Rgb, SpectrumColor};
///
/// let color = SpectrumColor::from_rgb(Rgb::new(0, 255, 255)).unwrap();
/// assert_eq!(color, SpectrumColor::BrightCyan);
/// assert_eq!(color.name(), "bright-cyan");
/// assert_eq!(color.ink(), 0x45);
/// assert_eq!(color.paper(), 0x68);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpectrumColor {
    Black,
    Blue,
    BrightBlue,
    Red,
    BrightRed,
    Magenta,
    BrightMagenta,
    Green,
    BrightGreen,
    Cyan,
    BrightCyan,
    Yellow,
    BrightYellow,
    White,
    BrightWhite,
}

struct Entry {
    rgb: Rgb,
    ink: u8,
    paper: u8,
    name: &'static str,
}

const fn entry(rgb: [u8; 3], code: u8, bright: bool, name: &'static str) -> Entry {
    let flag = if bright { BRIGHT } else { 0 };
    Entry {
        rgb: Rgb::from_bytes(rgb),
        ink: code | flag,
        paper: (code << 3) | flag,
        name,
    }
}

// Indexed by `SpectrumColor as usize`.
const ENTRIES: [Entry; 15] = [
    entry([0, 0, 0], 0, false, "black"),
    entry([0, 0, 205], 1, false, "blue"),
    entry([0, 0, 255], 1, true, "bright-blue"),
    entry([205, 0, 0], 2, false, "red"),
    entry([255, 0, 0], 2, true, "bright-red"),
    entry([205, 0, 205], 3, false, "magenta"),
    entry([255, 0, 255], 3, true, "bright-magenta"),
    entry([0, 205, 0], 4, false, "green"),
    entry([0, 255, 0], 4, true, "bright-green"),
    entry([0, 205, 205], 5, false, "cyan"),
    entry([0, 255, 255], 5, true, "bright-cyan"),
    entry([205, 205, 0], 6, false, "yellow"),
    entry([255, 255, 0], 6, true, "bright-yellow"),
    entry([205, 205, 205], 7, false, "white"),
    entry([255, 255, 255], 7, true, "bright-white"),
];

impl SpectrumColor {
    /// All palette colors in table order.
    pub const ALL: [SpectrumColor; 15] = [
        SpectrumColor::Black,
        SpectrumColor::Blue,
        SpectrumColor::BrightBlue,
        SpectrumColor::Red,
        SpectrumColor::BrightRed,
        SpectrumColor::Magenta,
        SpectrumColor::BrightMagenta,
        SpectrumColor::Green,
        SpectrumColor::BrightGreen,
        SpectrumColor::Cyan,
        SpectrumColor::BrightCyan,
        SpectrumColor::Yellow,
        SpectrumColor::BrightYellow,
        SpectrumColor::White,
        SpectrumColor::BrightWhite,
    ];

    #[inline]
    fn entry(self) -> &'static Entry {
        &ENTRIES[self as usize]
    }

    /// The exact RGB value pixels must have to map to this color.
    #[inline]
    pub fn rgb(self) -> Rgb {
        self.entry().rgb
    }

    /// Attribute bits contributed when this color is the ink.
    #[inline]
    pub fn ink(self) -> u8 {
        self.entry().ink
    }

    /// Attribute bits contributed when this color is the paper.
    #[inline]
    pub fn paper(self) -> u8 {
        self.entry().paper
    }

    /// Human-readable name, as accepted by [`FromStr`].
    #[inline]
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Look up the palette color with exactly this RGB value.
    pub fn from_rgb(rgb: Rgb) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.rgb() == rgb)
    }

    /// Look up a palette color by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Names of all palette colors in table order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        ENTRIES.iter().map(|e| e.name)
    }
}

impl FromStr for SpectrumColor {
    type Err = PaletteError;

    /// Parse a palette color name such as `"bright-cyan"`.
    ///
    /// Surrounding whitespace is trimmed and case is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use sp1_tiles::SpectrumColor;
    ///
    /// let white: SpectrumColor = "White".parse().unwrap();
    /// assert_eq!(white, SpectrumColor::White);
    /// assert!("orange".parse::<SpectrumColor>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.trim()).ok_or_else(|| PaletteError::UnknownName(s.to_string()))
    }
}

impl fmt::Display for SpectrumColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
