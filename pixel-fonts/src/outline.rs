//! Outline painting strategies.
//!
//! A painter turns glyph pixel data into pen commands in scaled design
//! space. The shared transform flips the y-down pixel grid into y-up
//! design units: `x = (px + offset.x) * k`, `y = (height + offset.y - py) * k`,
//! with `k` design units per pixel and `offset` the glyph's horizontal
//! placement. Painters are pure shape generators: a blank bitmap produces
//! no pen calls, and metrics never depend on the painter in use.

use crate::trace::trace_contours;
use crate::types::{Glyph, Pen};

/// Strategy turning a glyph bitmap into outline pen commands.
pub trait OutlinePainter {
    /// Draw `glyph` into `pen` at `units_per_pixel` design units per pixel.
    ///
    /// Every subpath is bracketed by `move_to` .. `close`. Outer contours
    /// come out clockwise in y-up design space, holes counter-clockwise.
    fn draw(&self, glyph: &Glyph, units_per_pixel: i32, pen: &mut dyn Pen);
}

/// Draws each filled region as one polygon per boundary.
///
/// Adjacent pixels fuse into a single contour; enclosed blank areas become
/// holes with opposite winding.
#[derive(Clone, Copy, Default, Debug)]
pub struct SolidPainter;

impl OutlinePainter for SolidPainter {
    fn draw(&self, glyph: &Glyph, units_per_pixel: i32, pen: &mut dyn Pen) {
        let k = units_per_pixel as f32;
        let top = (glyph.height() as i32 + glyph.horizontal_offset.y as i32) as f32;
        for contour in trace_contours(&glyph.bitmap) {
            for (i, point) in contour.iter().enumerate() {
                let x = (point.x as f32 + glyph.horizontal_offset.x as f32) * k;
                let y = (top - point.y as f32) * k;
                if i == 0 {
                    pen.move_to(x, y);
                } else {
                    pen.line_to(x, y);
                }
            }
            pen.close();
        }
    }
}

/// Draws every ink pixel as a separate axis-aligned square, centered in
/// its cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SquareDotPainter {
    /// Square edge length as a fraction of the pixel cell.
    pub size: f32,
}

impl SquareDotPainter {
    /// Creates a painter with the given dot size fraction.
    pub fn new(size: f32) -> Self {
        Self { size }
    }
}

impl Default for SquareDotPainter {
    fn default() -> Self {
        Self::new(0.8)
    }
}

impl OutlinePainter for SquareDotPainter {
    fn draw(&self, glyph: &Glyph, units_per_pixel: i32, pen: &mut dyn Pen) {
        let k = units_per_pixel as f32;
        let side = self.size * k;
        let inset = (1.0 - self.size) / 2.0 * k;
        let grid_top = (glyph.height() as i32 + glyph.horizontal_offset.y as i32) as f32;
        for (y, row) in glyph.bitmap.rows().iter().enumerate() {
            let top = (grid_top - y as f32) * k - inset;
            for (x, value) in row.iter().enumerate() {
                if *value == 0 {
                    continue;
                }
                let left = (x as f32 + glyph.horizontal_offset.x as f32) * k + inset;
                pen.move_to(left, top);
                pen.line_to(left + side, top);
                pen.line_to(left + side, top - side);
                pen.line_to(left, top - side);
                pen.close();
            }
        }
    }
}

/// Draws every ink pixel as a separate circle, centered in its cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleDotPainter {
    /// Circle radius as a fraction of the pixel cell.
    pub radius: f32,
}

impl CircleDotPainter {
    /// Creates a painter with the given dot radius fraction.
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

impl Default for CircleDotPainter {
    fn default() -> Self {
        Self::new(0.4)
    }
}

impl OutlinePainter for CircleDotPainter {
    fn draw(&self, glyph: &Glyph, units_per_pixel: i32, pen: &mut dyn Pen) {
        let k = units_per_pixel as f32;
        let radius = self.radius * k;
        // Control distance approximating a quarter arc with one cubic.
        let c = radius * 4.0 / 3.0 * (2.0f32.sqrt() - 1.0);
        let grid_top = (glyph.height() as i32 + glyph.horizontal_offset.y as i32) as f32;
        for (y, row) in glyph.bitmap.rows().iter().enumerate() {
            let cy = (grid_top - y as f32 - 0.5) * k;
            for (x, value) in row.iter().enumerate() {
                if *value == 0 {
                    continue;
                }
                let cx = (x as f32 + glyph.horizontal_offset.x as f32 + 0.5) * k;
                pen.move_to(cx, cy + radius);
                pen.curve_to(cx + c, cy + radius, cx + radius, cy + c, cx + radius, cy);
                pen.curve_to(cx + radius, cy - c, cx + c, cy - radius, cx, cy - radius);
                pen.curve_to(cx - c, cy - radius, cx - radius, cy - c, cx - radius, cy);
                pen.curve_to(cx - radius, cy + c, cx - c, cy + radius, cx, cy + radius);
                pen.close();
            }
        }
    }
}
