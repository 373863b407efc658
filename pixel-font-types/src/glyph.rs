use crate::{Bitmap, Point};

/// A glyph: a name, advances, placement offsets, and a pixel bitmap.
///
/// Everything here is raw build input in pixel units. Outline generation
/// and metric derivation live with the build context, not on the glyph.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph {
    /// Glyph name, unique within a build.
    pub name: String,
    /// Horizontal advance in pixels.
    pub advance_width: u16,
    /// Vertical advance in pixels.
    pub advance_height: u16,
    /// Bitmap placement relative to the horizontal origin: `x` shifts the
    /// bitmap right, `y` raises its bottom edge above the baseline.
    pub horizontal_offset: Point<i16>,
    /// Bitmap placement relative to the vertical layout origin.
    pub vertical_offset: Point<i16>,
    /// The pixel grid holding the glyph image.
    pub bitmap: Bitmap,
}

impl Glyph {
    /// Creates an empty glyph with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            advance_width: 0,
            advance_height: 0,
            horizontal_offset: Point::default(),
            vertical_offset: Point::default(),
            bitmap: Bitmap::default(),
        }
    }

    /// Bitmap width in pixels.
    pub fn width(&self) -> usize {
        self.bitmap.width()
    }

    /// Bitmap height in pixels.
    pub fn height(&self) -> usize {
        self.bitmap.height()
    }

    /// Bitmap `(width, height)` in pixels.
    pub fn dimensions(&self) -> (usize, usize) {
        self.bitmap.dimensions()
    }
}
