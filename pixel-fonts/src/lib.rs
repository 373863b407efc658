//! Building vector and bitmap fonts from pixel glyph data.
//!
//! A [`FontBuilder`] collects [glyphs](Glyph), a character mapping, kerning
//! and metadata, validates the whole set, and serves format emitters a
//! deterministic glyph order plus painted outlines and derived metrics.
//! Outlines come from a pluggable [`OutlinePainter`]: the default
//! [`SolidPainter`] traces filled pixel regions into closed contours, while
//! [`SquareDotPainter`] and [`CircleDotPainter`] draw each ink pixel as a
//! separate decorative dot. Painted outlines are memoized per glyph, so
//! emitting several formats from one build paints each glyph once.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod cache;
mod error;
pub mod font_builder;
pub mod meta;
pub mod metrics;
pub mod outline;
pub mod pens;
mod round;
pub mod trace;

/// Re-export of the shared data types crate.
pub use pixel_font_types as types;

pub use error::BuildError;
pub use font_builder::{FontBuilder, OutlineConfig, PreparedGlyphs, NOTDEF};
pub use meta::{MetaInfo, SerifStyle, SlantStyle, WeightName, WidthStyle};
pub use metrics::{FontMetric, HorizontalMetrics, LineMetrics, MetricsSummary, VerticalMetrics};
pub use outline::{CircleDotPainter, OutlinePainter, SolidPainter, SquareDotPainter};
pub use round::OtRound;
pub use types::{Bitmap, BoundingBox, Glyph, PathElement, Pen, Point};
