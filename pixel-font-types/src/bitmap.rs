/// A rectangular grid of pixel values backing a glyph.
///
/// Rows run top to bottom and columns left to right (y-down). A value of
/// `0` is blank; any positive value is ink. Magnitudes above 1 carry no
/// extra meaning for outline tracing.
///
/// The row-per-entry representation lets irregular input exist long enough
/// to be rejected during build validation; all operations here treat cells
/// outside the grid (including cells past the end of a short row) as blank.
#[derive(Clone, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bitmap(Vec<Vec<u8>>);

impl Bitmap {
    /// Creates a bitmap from rows of pixel values.
    pub fn new(rows: Vec<Vec<u8>>) -> Self {
        Self(rows)
    }

    /// The number of columns, taken from the first row.
    pub fn width(&self) -> usize {
        self.0.first().map_or(0, |row| row.len())
    }

    /// The number of rows.
    pub fn height(&self) -> usize {
        self.0.len()
    }

    /// `(width, height)` in one call.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// The rows of the bitmap, top to bottom.
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.0
    }

    /// Mutable access to the rows.
    pub fn rows_mut(&mut self) -> &mut Vec<Vec<u8>> {
        &mut self.0
    }

    /// Whether the cell at `(x, y)` holds ink.
    ///
    /// Coordinates outside the grid are blank, which is exactly the
    /// neighbor rule boundary tracing wants at the bitmap edges.
    pub fn is_ink(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.0
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .is_some_and(|value| *value > 0)
    }

    /// Whether no cell holds ink.
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|row| row.iter().all(|value| *value == 0))
    }

    fn column_is_blank(&self, x: usize) -> bool {
        self.0
            .iter()
            .all(|row| row.get(x).is_none_or(|value| *value == 0))
    }

    /// Count of leading blank columns. A fully blank bitmap reports its
    /// full width.
    pub fn left_padding(&self) -> usize {
        (0..self.width())
            .take_while(|x| self.column_is_blank(*x))
            .count()
    }

    /// Count of trailing blank columns. A fully blank bitmap reports its
    /// full width.
    pub fn right_padding(&self) -> usize {
        (0..self.width())
            .rev()
            .take_while(|x| self.column_is_blank(*x))
            .count()
    }

    /// Count of leading blank rows. A fully blank bitmap reports its full
    /// height.
    pub fn top_padding(&self) -> usize {
        self.0
            .iter()
            .take_while(|row| row.iter().all(|value| *value == 0))
            .count()
    }

    /// Count of trailing blank rows. A fully blank bitmap reports its full
    /// height.
    pub fn bottom_padding(&self) -> usize {
        self.0
            .iter()
            .rev()
            .take_while(|row| row.iter().all(|value| *value == 0))
            .count()
    }
}

impl From<Vec<Vec<u8>>> for Bitmap {
    fn from(rows: Vec<Vec<u8>>) -> Self {
        Self::new(rows)
    }
}
