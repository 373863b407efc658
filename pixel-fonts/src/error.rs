//! Errors that occur while assembling a font build.

/// A font build failed validation.
///
/// Validation is eager and fatal: problems are reported before any outline
/// is painted, each with enough context to find the offending entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// No glyph named `.notdef` was added.
    MissingNotdef,
    /// Two glyphs share a name.
    DuplicateGlyphName(String),
    /// A character mapping entry points at a glyph that does not exist.
    UnknownMappingTarget {
        /// The mapped code point.
        code_point: u32,
        /// The missing glyph name.
        name: String,
    },
    /// A kerning pair references a glyph that does not exist.
    UnknownKerningGlyph {
        /// Left glyph name of the pair.
        left: String,
        /// Right glyph name of the pair.
        right: String,
        /// Whichever side is missing.
        name: String,
    },
    /// A glyph bitmap has rows of differing lengths.
    IrregularBitmap {
        /// The glyph whose bitmap is irregular.
        glyph: String,
        /// Index of the first offending row.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Length of the first row, which sets the bitmap width.
        expected: usize,
    },
    /// Emission requires a family name.
    MissingFamilyName,
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::MissingNotdef => write!(f, "missing glyph: '.notdef'"),
            BuildError::DuplicateGlyphName(name) => write!(f, "duplicate glyph name: '{name}'"),
            BuildError::UnknownMappingTarget { code_point, name } => write!(
                f,
                "code point U+{code_point:04X} maps to missing glyph: '{name}'"
            ),
            BuildError::UnknownKerningGlyph { left, right, name } => write!(
                f,
                "kerning pair ('{left}', '{right}') references missing glyph: '{name}'"
            ),
            BuildError::IrregularBitmap {
                glyph,
                row,
                len,
                expected,
            } => write!(
                f,
                "glyph '{glyph}' bitmap row {row} has {len} pixels, expected {expected}"
            ),
            BuildError::MissingFamilyName => write!(f, "meta info is missing a family name"),
        }
    }
}

impl std::error::Error for BuildError {}
