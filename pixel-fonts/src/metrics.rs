//! Font-wide and per-glyph metric derivation.
//!
//! Everything here is exact integer arithmetic: pixel quantities multiplied
//! by a design-units-per-pixel factor. Per-glyph bearings and extents come
//! from the glyph bitmap's blank margins, never from painted outlines, so
//! all outline painters report identical metrics for the same glyph.

use crate::types::{BoundingBox, Glyph};

/// Ascent, descent and line gap for one layout direction.
///
/// `descent` is conventionally non-positive. Values are in pixel units until
/// scaled, design units after.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineMetrics {
    pub ascent: i32,
    pub descent: i32,
    pub line_gap: i32,
}

impl LineMetrics {
    pub const fn new(ascent: i32, descent: i32, line_gap: i32) -> Self {
        Self {
            ascent,
            descent,
            line_gap,
        }
    }

    /// Distance between the top and bottom of a line, `ascent - descent`.
    pub const fn line_height(&self) -> i32 {
        self.ascent - self.descent
    }

    /// Multiplies every field by `factor`.
    pub const fn scale(&self, factor: i32) -> Self {
        Self {
            ascent: self.ascent * factor,
            descent: self.descent * factor,
            line_gap: self.line_gap * factor,
        }
    }
}

/// Font-wide metric values, in pixel units.
///
/// Emitters call [`scale`](Self::scale) once with their
/// design-units-per-pixel factor; integer multiplication keeps every field
/// exact, so a value computed in pixels and scaled equals the value computed
/// directly in design units.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontMetric {
    pub font_size: i32,
    pub horizontal_layout: LineMetrics,
    pub vertical_layout: LineMetrics,
    pub x_height: i32,
    pub cap_height: i32,
    pub underline_position: i32,
    pub underline_thickness: i32,
    pub strikeout_position: i32,
    pub strikeout_thickness: i32,
}

impl FontMetric {
    /// Multiplies every field by `factor`.
    pub const fn scale(&self, factor: i32) -> Self {
        Self {
            font_size: self.font_size * factor,
            horizontal_layout: self.horizontal_layout.scale(factor),
            vertical_layout: self.vertical_layout.scale(factor),
            x_height: self.x_height * factor,
            cap_height: self.cap_height * factor,
            underline_position: self.underline_position * factor,
            underline_thickness: self.underline_thickness * factor,
            strikeout_position: self.strikeout_position * factor,
            strikeout_thickness: self.strikeout_thickness * factor,
        }
    }
}

/// Horizontal layout values for one glyph, in design units.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct HorizontalMetrics {
    pub advance_width: i32,
    pub left_side_bearing: i32,
    pub right_side_bearing: i32,
    /// Right edge of the inked region, `left_side_bearing + ink width`.
    pub x_extent: i32,
}

impl HorizontalMetrics {
    /// Derives the horizontal metrics of `glyph` at `units_per_pixel`.
    ///
    /// A blank bitmap reports its full width as leading padding, which
    /// collapses the extent onto the bitmap origin; advances pass through
    /// regardless of ink.
    pub fn new(glyph: &Glyph, units_per_pixel: i32) -> Self {
        let advance_width = i32::from(glyph.advance_width) * units_per_pixel;
        let offset_x = i32::from(glyph.horizontal_offset.x);
        let left = glyph.bitmap.left_padding() as i32;
        let right = glyph.bitmap.right_padding() as i32;
        let x_extent = (offset_x + glyph.width() as i32 - right) * units_per_pixel;
        Self {
            advance_width,
            left_side_bearing: (offset_x + left) * units_per_pixel,
            right_side_bearing: advance_width - x_extent,
            x_extent,
        }
    }
}

/// Vertical layout values for one glyph, in design units.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct VerticalMetrics {
    pub advance_height: i32,
    pub top_side_bearing: i32,
    pub bottom_side_bearing: i32,
    /// Bottom edge of the inked region measured from the vertical origin,
    /// `top_side_bearing + ink height`.
    pub y_extent: i32,
}

impl VerticalMetrics {
    /// Derives the vertical metrics of `glyph` at `units_per_pixel`.
    pub fn new(glyph: &Glyph, units_per_pixel: i32) -> Self {
        let advance_height = i32::from(glyph.advance_height) * units_per_pixel;
        let offset_y = i32::from(glyph.vertical_offset.y);
        let top = glyph.bitmap.top_padding() as i32;
        let bottom = glyph.bitmap.bottom_padding() as i32;
        let y_extent = (offset_y + glyph.height() as i32 - bottom) * units_per_pixel;
        Self {
            advance_height,
            top_side_bearing: (offset_y + top) * units_per_pixel,
            bottom_side_bearing: advance_height - y_extent,
            y_extent,
        }
    }
}

/// The design-unit box around a glyph's inked pixels under horizontal
/// placement, or `None` when the bitmap holds no ink.
///
/// Equals the control bounds of the glyph's solid outline at the same scale.
pub fn ink_box(glyph: &Glyph, units_per_pixel: i32) -> Option<BoundingBox<i32>> {
    if glyph.bitmap.is_blank() {
        return None;
    }
    let offset_x = i32::from(glyph.horizontal_offset.x);
    let offset_y = i32::from(glyph.horizontal_offset.y);
    let pixel_box = BoundingBox {
        x_min: offset_x + glyph.bitmap.left_padding() as i32,
        y_min: offset_y + glyph.bitmap.bottom_padding() as i32,
        x_max: offset_x + glyph.width() as i32 - glyph.bitmap.right_padding() as i32,
        y_max: offset_y + glyph.height() as i32 - glyph.bitmap.top_padding() as i32,
    };
    Some(pixel_box.scale(units_per_pixel))
}

/// Font-wide extremes over every glyph, as consumed by the `hhea`, `vhea`
/// and `head` tables.
///
/// Each field is the minimum or maximum of the matching per-glyph value,
/// and `bounding_box` is the union of the per-glyph outline boxes. A font
/// with no glyphs (or no outline boxes) reports zeros, mirroring how the
/// table builders default these fields.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct MetricsSummary {
    pub advance_width_max: i32,
    pub min_left_side_bearing: i32,
    pub min_right_side_bearing: i32,
    pub x_max_extent: i32,
    pub advance_height_max: i32,
    pub min_top_side_bearing: i32,
    pub min_bottom_side_bearing: i32,
    pub y_max_extent: i32,
    pub bounding_box: BoundingBox<i32>,
}

impl MetricsSummary {
    /// Folds per-glyph metrics into font-wide extremes.
    ///
    /// Each entry pairs a glyph with the control-bounds box of its painted
    /// outline (`None` for blank glyphs, which then contribute nothing to
    /// `bounding_box`).
    pub fn aggregate<'a>(
        entries: impl IntoIterator<Item = (&'a Glyph, Option<BoundingBox<i32>>)>,
        units_per_pixel: i32,
    ) -> Self {
        let mut extremes: Option<Self> = None;
        let mut bounding_box: Option<BoundingBox<i32>> = None;
        for (glyph, outline_box) in entries {
            let horizontal = HorizontalMetrics::new(glyph, units_per_pixel);
            let vertical = VerticalMetrics::new(glyph, units_per_pixel);
            extremes = Some(match extremes {
                None => Self {
                    advance_width_max: horizontal.advance_width,
                    min_left_side_bearing: horizontal.left_side_bearing,
                    min_right_side_bearing: horizontal.right_side_bearing,
                    x_max_extent: horizontal.x_extent,
                    advance_height_max: vertical.advance_height,
                    min_top_side_bearing: vertical.top_side_bearing,
                    min_bottom_side_bearing: vertical.bottom_side_bearing,
                    y_max_extent: vertical.y_extent,
                    bounding_box: BoundingBox::default(),
                },
                Some(so_far) => Self {
                    advance_width_max: so_far.advance_width_max.max(horizontal.advance_width),
                    min_left_side_bearing: so_far
                        .min_left_side_bearing
                        .min(horizontal.left_side_bearing),
                    min_right_side_bearing: so_far
                        .min_right_side_bearing
                        .min(horizontal.right_side_bearing),
                    x_max_extent: so_far.x_max_extent.max(horizontal.x_extent),
                    advance_height_max: so_far.advance_height_max.max(vertical.advance_height),
                    min_top_side_bearing: so_far
                        .min_top_side_bearing
                        .min(vertical.top_side_bearing),
                    min_bottom_side_bearing: so_far
                        .min_bottom_side_bearing
                        .min(vertical.bottom_side_bearing),
                    y_max_extent: so_far.y_max_extent.max(vertical.y_extent),
                    bounding_box: BoundingBox::default(),
                },
            });
            bounding_box = match (bounding_box, outline_box) {
                (Some(a), Some(b)) => Some(a.union(b)),
                (a, b) => a.or(b),
            };
        }
        let mut summary = extremes.unwrap_or_default();
        summary.bounding_box = bounding_box.unwrap_or_default();
        summary
    }
}
