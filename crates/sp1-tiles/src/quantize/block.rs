//! Per-block quantization and paper/ink canonicalization.
//!
//! A block is reduced to a 1-bit bitmap plus the two colors it uses. The
//! bitmap is relative to the first color seen in the block, so two blocks
//! with the same shape but different colors share a bitmap. The preferred
//! background/foreground passes then flip blocks so that, where possible,
//! the preferred colors land on the paper/ink side respectively.

use super::image::IndexedImage;
use crate::api::EncodeError;
use crate::palette::SpectrumColor;

/// Edge length of an attribute block in pixels.
pub const BLOCK_SIZE: usize = 8;

/// One 8x8 block as 1-bit rows.
///
/// Byte `j` is pixel row `j`; the most significant bit is the leftmost
/// pixel. A set bit means "ink", a clear bit "paper".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitmap(pub [u8; BLOCK_SIZE]);

impl Bitmap {
    /// The eight row bytes.
    #[inline]
    pub fn rows(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }

    /// Bitwise NOT of every row.
    #[inline]
    pub fn inverted(self) -> Self {
        Self(self.0.map(|row| !row))
    }
}

/// The (paper, ink) pair of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attribute {
    /// Background color (clear bits)
    pub paper: SpectrumColor,
    /// Foreground color (set bits)
    pub ink: SpectrumColor,
}

impl Attribute {
    /// Create an attribute from paper and ink colors.
    #[inline]
    pub fn new(paper: SpectrumColor, ink: SpectrumColor) -> Self {
        Self { paper, ink }
    }

    /// Display attribute byte: ink component OR paper component.
    ///
    /// # Example
    /// ```
    /// use sp1_tiles::{Attribute, SpectrumColor};
    ///
    /// let attr = Attribute::new(SpectrumColor::Black, SpectrumColor::White);
    /// assert_eq!(attr.byte(), 0x07);
    /// ```
    #[inline]
    pub fn byte(self) -> u8 {
        self.ink.ink() | self.paper.paper()
    }

    #[inline]
    fn swapped(self) -> Self {
        Self {
            paper: self.ink,
            ink: self.paper,
        }
    }
}

/// Preferred colors used to canonicalize blocks.
///
/// `None` disables the corresponding normalization pass. The foreground
/// color also supplies the ink of single-color blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorPreferences {
    /// Color that should end up as paper when a block uses it
    pub background: Option<SpectrumColor>,
    /// Color that should end up as ink when a block uses it
    pub foreground: Option<SpectrumColor>,
}

/// A block after quantization and canonicalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantizedBlock {
    /// Canonical bitmap
    pub bitmap: Bitmap,
    /// Resolved (paper, ink)
    pub attribute: Attribute,
}

impl QuantizedBlock {
    fn swapped(self) -> Self {
        Self {
            bitmap: self.bitmap.inverted(),
            attribute: self.attribute.swapped(),
        }
    }

    /// Move `background` to the paper side if the block uses it as ink.
    fn prefer_background(self, background: Option<SpectrumColor>) -> Self {
        match background {
            Some(bg) if self.attribute.paper != bg && self.attribute.ink == bg => self.swapped(),
            _ => self,
        }
    }

    /// Move `foreground` to the ink side if the block uses it as paper.
    fn prefer_foreground(self, foreground: Option<SpectrumColor>) -> Self {
        match foreground {
            Some(fg) if self.attribute.ink != fg && self.attribute.paper == fg => self.swapped(),
            _ => self,
        }
    }
}

/// Quantize the block whose top-left pixel is `(x, y)`.
///
/// The first color met in row-major order becomes the provisional paper and
/// the second the provisional ink. A single-color block takes the preferred
/// foreground as ink (or its own color when there is none). The background
/// pass runs before the foreground pass, and each may swap the block
/// independently, so a block matching both preferences can be swapped twice.
///
/// # Errors
///
/// [`EncodeError::TooManyColors`] if a third color appears.
pub fn quantize_block(
    image: &IndexedImage,
    x: usize,
    y: usize,
    preferences: &ColorPreferences,
) -> Result<QuantizedBlock, EncodeError> {
    let first = image.get(x, y);
    let mut second: Option<SpectrumColor> = None;
    let mut rows = [0u8; BLOCK_SIZE];

    for (j, row) in rows.iter_mut().enumerate() {
        for i in 0..BLOCK_SIZE {
            let color = image.get(x + i, y + j);
            if color == first {
                continue;
            }
            match second {
                None => second = Some(color),
                Some(seen) if seen == color => {}
                Some(_) => return Err(EncodeError::TooManyColors { x, y }),
            }
            *row |= 0x80 >> i;
        }
    }

    let ink = second.or(preferences.foreground).unwrap_or(first);
    let block = QuantizedBlock {
        bitmap: Bitmap(rows),
        attribute: Attribute::new(first, ink),
    };

    Ok(block
        .prefer_background(preferences.background)
        .prefer_foreground(preferences.foreground))
}
