//! The path command interface between outline generators and consumers.

use crate::Point;

/// Interface for accepting a sequence of path commands.
///
/// This is a general abstraction to unify output for processes that
/// generate or transform outlines. Coordinates are in scaled design space,
/// y-up.
///
/// AbstractPen in Python terms.
/// <https://github.com/fonttools/fonttools/blob/78e10d8b42095b709cd4125e592d914d3ed1558e/Lib/fontTools/pens/basePen.py#L54>
pub trait Pen {
    /// Emit a command to begin a new subpath at (x, y).
    fn move_to(&mut self, x: f32, y: f32);

    /// Emit a line segment from the current point to (x, y).
    fn line_to(&mut self, x: f32, y: f32);

    /// Emit a quadratic bezier segment from the current point with a control
    /// point at (cx0, cy0) and ending at (x, y).
    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32);

    /// Emit a cubic bezier segment from the current point with control
    /// points at (cx0, cy0) and (cx1, cy1) and ending at (x, y).
    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32);

    /// Emit a command to close the current subpath.
    fn close(&mut self);

    /// Emit a command to end the current subpath without closing it.
    ///
    /// Only meaningful to consumers that keep open paths apart from closed
    /// ones, so the default is a no-op.
    fn end_path(&mut self) {}
}

/// Path command representing one prior invocation of a [`Pen`].
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathElement {
    /// Begin a new subpath at the given point.
    MoveTo {
        /// X coordinate.
        x: f32,
        /// Y coordinate.
        y: f32,
    },
    /// A line segment to the given point.
    LineTo {
        /// X coordinate.
        x: f32,
        /// Y coordinate.
        y: f32,
    },
    /// A quadratic bezier segment.
    QuadTo {
        /// Control point X coordinate.
        cx0: f32,
        /// Control point Y coordinate.
        cy0: f32,
        /// End point X coordinate.
        x: f32,
        /// End point Y coordinate.
        y: f32,
    },
    /// A cubic bezier segment.
    CurveTo {
        /// First control point X coordinate.
        cx0: f32,
        /// First control point Y coordinate.
        cy0: f32,
        /// Second control point X coordinate.
        cx1: f32,
        /// Second control point Y coordinate.
        cy1: f32,
        /// End point X coordinate.
        x: f32,
        /// End point Y coordinate.
        y: f32,
    },
    /// Close the current subpath.
    Close,
    /// End the current subpath without closing it.
    EndPath,
}

impl PathElement {
    /// Replay this element into `pen`.
    pub fn apply_to(&self, pen: &mut dyn Pen) {
        match *self {
            Self::MoveTo { x, y } => pen.move_to(x, y),
            Self::LineTo { x, y } => pen.line_to(x, y),
            Self::QuadTo { cx0, cy0, x, y } => pen.quad_to(cx0, cy0, x, y),
            Self::CurveTo {
                cx0,
                cy0,
                cx1,
                cy1,
                x,
                y,
            } => pen.curve_to(cx0, cy0, cx1, cy1, x, y),
            Self::Close => pen.close(),
            Self::EndPath => pen.end_path(),
        }
    }

    /// The on-curve point this element ends at, if any.
    ///
    /// `Close` and `EndPath` return `None`; the relevant point is the start
    /// of the subpath, which the consumer tracks.
    pub fn end_point(&self) -> Option<Point<f32>> {
        match *self {
            Self::MoveTo { x, y }
            | Self::LineTo { x, y }
            | Self::QuadTo { x, y, .. }
            | Self::CurveTo { x, y, .. } => Some(Point::new(x, y)),
            Self::Close | Self::EndPath => None,
        }
    }
}

/// Record the sequence of path commands for later replay.
impl Pen for Vec<PathElement> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.push(PathElement::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push(PathElement::LineTo { x, y });
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.push(PathElement::QuadTo { cx0, cy0, x, y });
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.push(PathElement::CurveTo {
            cx0,
            cy0,
            cx1,
            cy1,
            x,
            y,
        });
    }

    fn close(&mut self) {
        self.push(PathElement::Close);
    }

    fn end_path(&mut self) {
        self.push(PathElement::EndPath);
    }
}

/// A pen that discards all commands.
pub struct NullPen;

impl Pen for NullPen {
    fn move_to(&mut self, _x: f32, _y: f32) {}
    fn line_to(&mut self, _x: f32, _y: f32) {}
    fn quad_to(&mut self, _cx0: f32, _cy0: f32, _x: f32, _y: f32) {}
    fn curve_to(&mut self, _cx0: f32, _cy0: f32, _cx1: f32, _cy1: f32, _x: f32, _y: f32) {}
    fn close(&mut self) {}
}
