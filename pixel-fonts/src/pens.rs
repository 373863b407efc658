//! Pen implementations based on <https://github.com/fonttools/fonttools/tree/main/Lib/fontTools/pens>

use kurbo::{BezPath, CubicBez, Point};

use crate::round::OtRound;
use crate::types::{BoundingBox, Pen};

fn as_kurbo_point(x: f32, y: f32) -> Point {
    Point {
        x: x as f64,
        y: y as f64,
    }
}

/// A pen that collects commands into a [`kurbo::BezPath`].
///
/// Open subpaths simply end, so `end_path` is a no-op.
pub struct BezPathPen {
    path: BezPath,
}

impl BezPathPen {
    pub fn new() -> BezPathPen {
        BezPathPen {
            path: BezPath::new(),
        }
    }

    pub fn into_inner(self) -> BezPath {
        self.path
    }
}

impl Default for BezPathPen {
    fn default() -> Self {
        Self::new()
    }
}

impl Pen for BezPathPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to(as_kurbo_point(x, y))
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to(as_kurbo_point(x, y))
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.path
            .quad_to(as_kurbo_point(cx0, cy0), as_kurbo_point(x, y));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.path.curve_to(
            as_kurbo_point(cx0, cy0),
            as_kurbo_point(cx1, cy1),
            as_kurbo_point(x, y),
        );
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

/// A pen that rewrites cubic segments as quadratic splines.
///
/// Sits in front of consumers that only accept quadratics (TrueType-style
/// sinks). Everything else passes through unchanged. Conversion uses
/// kurbo's cu2qu port with the configured accuracy in design units.
pub struct QuadPen<'a, T: Pen> {
    inner_pen: &'a mut T,
    accuracy: f64,
    current: Option<Point>,
    subpath_start: Option<Point>,
}

impl<'a, T: Pen> QuadPen<'a, T> {
    /// Wraps `inner_pen` with the default accuracy of one design unit.
    pub fn new(inner_pen: &'a mut T) -> QuadPen<'a, T> {
        Self::with_accuracy(inner_pen, 1.0)
    }

    /// Wraps `inner_pen`, allowing conversion error up to `accuracy`.
    pub fn with_accuracy(inner_pen: &'a mut T, accuracy: f64) -> QuadPen<'a, T> {
        QuadPen {
            inner_pen,
            accuracy,
            current: None,
            subpath_start: None,
        }
    }
}

impl<T: Pen> Pen for QuadPen<'_, T> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.inner_pen.move_to(x, y);
        self.current = Some(as_kurbo_point(x, y));
        self.subpath_start = self.current;
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.inner_pen.line_to(x, y);
        self.current = Some(as_kurbo_point(x, y));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.inner_pen.quad_to(cx0, cy0, x, y);
        self.current = Some(as_kurbo_point(x, y));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let Some(start) = self.current else {
            panic!("cubic segment before any move_to");
        };
        let cubic = CubicBez::new(
            start,
            as_kurbo_point(cx0, cy0),
            as_kurbo_point(cx1, cy1),
            as_kurbo_point(x, y),
        );
        let Some(spline) = cubic.approx_spline(self.accuracy) else {
            panic!("no quadratic spline within {} of {cubic:?}", self.accuracy);
        };
        for quad in spline.to_quads() {
            self.inner_pen.quad_to(
                quad.p1.x as f32,
                quad.p1.y as f32,
                quad.p2.x as f32,
                quad.p2.y as f32,
            );
        }
        self.current = Some(cubic.p3);
    }

    fn close(&mut self) {
        self.inner_pen.close();
        self.current = self.subpath_start;
    }

    fn end_path(&mut self) {
        self.inner_pen.end_path();
        self.current = None;
        self.subpath_start = None;
    }
}

/// A pen that tracks the bounding box of everything drawn through it,
/// control points included.
///
/// Control bounds overshoot the true curve bounds but never undershoot
/// them, and they are cheap and exact for the shapes painters emit.
#[derive(Clone, Default, Debug)]
pub struct ControlBoundsPen {
    bounds: Option<BoundingBox<f32>>,
}

impl ControlBoundsPen {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tracked box, rounded to integer design units. `None` when
    /// nothing was drawn.
    pub fn bounds(&self) -> Option<BoundingBox<i32>> {
        self.bounds.map(|b| BoundingBox {
            x_min: b.x_min.ot_round(),
            y_min: b.y_min.ot_round(),
            x_max: b.x_max.ot_round(),
            y_max: b.y_max.ot_round(),
        })
    }

    fn include(&mut self, x: f32, y: f32) {
        self.bounds = Some(match self.bounds {
            Some(b) => BoundingBox {
                x_min: b.x_min.min(x),
                y_min: b.y_min.min(y),
                x_max: b.x_max.max(x),
                y_max: b.y_max.max(y),
            },
            None => BoundingBox {
                x_min: x,
                y_min: y,
                x_max: x,
                y_max: y,
            },
        });
    }
}

impl Pen for ControlBoundsPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.include(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.include(x, y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.include(cx0, cy0);
        self.include(x, y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.include(cx0, cy0);
        self.include(cx1, cy1);
        self.include(x, y);
    }

    fn close(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::{BezPathPen, ControlBoundsPen, QuadPen};
    use crate::types::{BoundingBox, PathElement, Pen};
    use pretty_assertions::assert_eq;

    #[test]
    fn bez_path_pen_collects_kurbo_path() {
        let mut pen = BezPathPen::new();
        pen.move_to(0.0, 0.0);
        pen.line_to(4.0, 0.0);
        pen.quad_to(4.0, 4.0, 0.0, 4.0);
        pen.close();
        assert_eq!("M0,0 L4,0 Q4,4 0,4 Z", pen.into_inner().to_svg());
    }

    #[test]
    fn quad_pen_passes_quadratics_through() {
        let mut recorded = Vec::new();
        let mut pen = QuadPen::new(&mut recorded);
        pen.move_to(0.0, 0.0);
        pen.quad_to(1.0, 1.0, 2.0, 0.0);
        pen.close();
        assert_eq!(
            recorded,
            vec![
                PathElement::MoveTo { x: 0.0, y: 0.0 },
                PathElement::QuadTo {
                    cx0: 1.0,
                    cy0: 1.0,
                    x: 2.0,
                    y: 0.0
                },
                PathElement::Close,
            ]
        );
    }

    #[test]
    fn quad_pen_rewrites_cubics() {
        let mut recorded = Vec::new();
        let mut pen = QuadPen::new(&mut recorded);
        pen.move_to(0.0, 0.0);
        // Quarter arc of a radius 100 circle.
        pen.curve_to(55.0, 0.0, 100.0, 45.0, 100.0, 100.0);
        pen.close();

        assert!(recorded
            .iter()
            .all(|e| !matches!(e, PathElement::CurveTo { .. })));
        let quad_ends: Vec<_> = recorded
            .iter()
            .filter(|e| matches!(e, PathElement::QuadTo { .. }))
            .collect();
        assert!(!quad_ends.is_empty());
        // The spline lands exactly on the cubic's end point.
        assert_eq!(
            quad_ends.last().and_then(|e| e.end_point()),
            Some(crate::types::Point::new(100.0, 100.0))
        );
    }

    #[test]
    fn quad_pen_accuracy_controls_segment_count() {
        let count_quads = |accuracy: f64| {
            let mut recorded = Vec::new();
            let mut pen = QuadPen::with_accuracy(&mut recorded, accuracy);
            pen.move_to(0.0, 0.0);
            pen.curve_to(55.0, 0.0, 100.0, 45.0, 100.0, 100.0);
            recorded
                .iter()
                .filter(|e| matches!(e, PathElement::QuadTo { .. }))
                .count()
        };
        assert!(count_quads(0.01) >= count_quads(10.0));
    }

    #[test]
    #[should_panic(expected = "cubic segment before any move_to")]
    fn quad_pen_rejects_unanchored_cubic() {
        let mut recorded = Vec::new();
        let mut pen = QuadPen::new(&mut recorded);
        pen.curve_to(1.0, 1.0, 2.0, 2.0, 3.0, 3.0);
    }

    #[test]
    fn control_bounds_cover_off_curve_points() {
        let mut pen = ControlBoundsPen::new();
        pen.move_to(0.0, 0.0);
        pen.curve_to(0.0, 10.0, 10.0, 10.0, 10.0, 0.0);
        pen.close();
        assert_eq!(
            pen.bounds(),
            Some(BoundingBox {
                x_min: 0,
                y_min: 0,
                x_max: 10,
                y_max: 10,
            })
        );
    }

    #[test]
    fn control_bounds_round_half_up() {
        let mut pen = ControlBoundsPen::new();
        pen.move_to(-0.5, 0.6);
        pen.line_to(2.5, 1.0);
        assert_eq!(
            pen.bounds(),
            Some(BoundingBox {
                x_min: 0,
                y_min: 1,
                x_max: 3,
                y_max: 1,
            })
        );
    }

    #[test]
    fn empty_control_bounds() {
        assert_eq!(ControlBoundsPen::new().bounds(), None);
    }
}
