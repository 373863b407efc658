//! Common data types shared between pixel font builders and emitters.
//!
//! Everything here is plain data: pixel [bitmaps](Bitmap), [glyphs](Glyph),
//! and the [pen](Pen) contract that outline generators draw through.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod bbox;
mod bitmap;
mod glyph;
mod pen;
mod point;

pub use bbox::BoundingBox;
pub use bitmap::Bitmap;
pub use glyph::Glyph;
pub use pen::{NullPen, PathElement, Pen};
pub use point::Point;
