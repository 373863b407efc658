//! Font naming, provenance and style metadata.

use std::fmt;

/// Weight style of a typeface, from thinnest to heaviest.
///
/// `Normal` and `Regular` are alternate names for the same weight, as are
/// `Black` and `Heavy`; both members are kept so round-tripped fonts keep
/// the wording they came with.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeightName {
    Thin,
    ExtraLight,
    Light,
    Normal,
    Regular,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
    Heavy,
}

impl WeightName {
    /// The canonical name string.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Thin => "Thin",
            Self::ExtraLight => "Extra Light",
            Self::Light => "Light",
            Self::Normal => "Normal",
            Self::Regular => "Regular",
            Self::Medium => "Medium",
            Self::SemiBold => "Semi Bold",
            Self::Bold => "Bold",
            Self::ExtraBold => "Extra Bold",
            Self::Black => "Black",
            Self::Heavy => "Heavy",
        }
    }

    /// The OS/2 `usWeightClass` value, 100 through 900.
    pub const fn weight_class(self) -> u16 {
        match self {
            Self::Thin => 100,
            Self::ExtraLight => 200,
            Self::Light => 300,
            Self::Normal | Self::Regular => 400,
            Self::Medium => 500,
            Self::SemiBold => 600,
            Self::Bold => 700,
            Self::ExtraBold => 800,
            Self::Black | Self::Heavy => 900,
        }
    }
}

impl fmt::Display for WeightName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether the typeface carries serifs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SerifStyle {
    Serif,
    SansSerif,
}

impl SerifStyle {
    /// The canonical name string.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Serif => "Serif",
            Self::SansSerif => "Sans Serif",
        }
    }
}

impl fmt::Display for SerifStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Slant posture of the typeface.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlantStyle {
    Normal,
    Italic,
    Oblique,
    ReverseItalic,
    ReverseOblique,
}

impl SlantStyle {
    /// The canonical name string.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Italic => "Italic",
            Self::Oblique => "Oblique",
            Self::ReverseItalic => "Reverse Italic",
            Self::ReverseOblique => "Reverse Oblique",
        }
    }

    /// The XLFD `SLANT` field code.
    pub const fn xlfd_code(self) -> &'static str {
        match self {
            Self::Normal => "R",
            Self::Italic => "I",
            Self::Oblique => "O",
            Self::ReverseItalic => "RI",
            Self::ReverseOblique => "RO",
        }
    }
}

impl fmt::Display for SlantStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Horizontal spacing discipline of the typeface.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WidthStyle {
    Monospaced,
    Duospaced,
    CharacterCell,
    Proportional,
}

impl WidthStyle {
    /// The canonical name string.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monospaced => "Monospaced",
            Self::Duospaced => "Duospaced",
            Self::CharacterCell => "Character Cell",
            Self::Proportional => "Proportional",
        }
    }

    /// The XLFD `SPACING` field code.
    pub const fn xlfd_code(self) -> &'static str {
        match self {
            Self::Monospaced => "M",
            Self::Duospaced => "D",
            Self::CharacterCell => "C",
            Self::Proportional => "P",
        }
    }
}

impl fmt::Display for WidthStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Naming and provenance strings for a font.
///
/// Only `family_name` is required (checked during build validation); every
/// other field is optional and simply left out of emitted name records when
/// absent.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetaInfo {
    /// Version string, `"0.0.0"` until set.
    pub version: String,
    /// Creation moment, seconds since the Unix epoch. Emitters convert to
    /// their own epochs.
    pub created_time: Option<i64>,
    /// Last-modified moment, seconds since the Unix epoch.
    pub modified_time: Option<i64>,
    pub family_name: Option<String>,
    pub weight_name: Option<WeightName>,
    pub serif_style: Option<SerifStyle>,
    pub slant_style: Option<SlantStyle>,
    pub width_style: Option<WidthStyle>,
    pub manufacturer: Option<String>,
    pub designer: Option<String>,
    pub description: Option<String>,
    pub copyright_info: Option<String>,
    pub license_info: Option<String>,
    pub vendor_url: Option<String>,
    pub designer_url: Option<String>,
    pub license_url: Option<String>,
    pub sample_text: Option<String>,
}

impl Default for MetaInfo {
    fn default() -> Self {
        Self {
            version: String::from("0.0.0"),
            created_time: None,
            modified_time: None,
            family_name: None,
            weight_name: None,
            serif_style: None,
            slant_style: None,
            width_style: None,
            manufacturer: None,
            designer: None,
            description: None,
            copyright_info: None,
            license_info: None,
            vendor_url: None,
            designer_url: None,
            license_url: None,
            sample_text: None,
        }
    }
}
