//! Memoized outline recordings.

use std::collections::hash_map::{DefaultHasher, Entry, HashMap};
use std::hash::{Hash, Hasher};

use log::trace;

use crate::outline::OutlinePainter;
use crate::pens::ControlBoundsPen;
use crate::types::{BoundingBox, Glyph, PathElement, Pen};

/// One painted outline, recorded for replay.
#[derive(Clone, Debug)]
pub struct CachedOutline {
    fingerprint: u64,
    units_per_pixel: i32,
    elements: Vec<PathElement>,
    bbox: Option<BoundingBox<i32>>,
}

impl CachedOutline {
    /// The recorded pen commands.
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Control bounds of the painter's output, `None` when the glyph was
    /// blank and nothing real was painted.
    pub fn bbox(&self) -> Option<BoundingBox<i32>> {
        self.bbox
    }

    /// Replays the recording into `pen`.
    pub fn replay(&self, pen: &mut dyn Pen) {
        for element in &self.elements {
            element.apply_to(pen);
        }
    }
}

/// Memoizes painter output, one recording per glyph name.
///
/// A recording is served only while the fingerprint of the glyph's content
/// and the recorded scale both still match; anything stale is repainted and
/// replaced. The painter is not part of the freshness check because a cache
/// lives inside one build context, which owns exactly one configured
/// painter.
#[derive(Default, Debug)]
pub struct OutlineCache {
    entries: HashMap<String, CachedOutline>,
}

impl OutlineCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recordings held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every recording.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the recording for `glyph`, painting one first unless a fresh
    /// recording is already held.
    pub fn entry(
        &mut self,
        glyph: &Glyph,
        painter: &dyn OutlinePainter,
        units_per_pixel: i32,
    ) -> &CachedOutline {
        let fingerprint = fingerprint(glyph);
        match self.entries.entry(glyph.name.clone()) {
            Entry::Occupied(slot) => {
                let entry = slot.into_mut();
                if entry.fingerprint != fingerprint || entry.units_per_pixel != units_per_pixel {
                    trace!("repainting stale outline for '{}'", glyph.name);
                    *entry = record(glyph, painter, units_per_pixel, fingerprint);
                } else {
                    trace!("cached outline hit for '{}'", glyph.name);
                }
                entry
            }
            Entry::Vacant(slot) => {
                trace!("painting outline for '{}'", glyph.name);
                slot.insert(record(glyph, painter, units_per_pixel, fingerprint))
            }
        }
    }

    /// Replays the (possibly freshly painted) recording for `glyph` into
    /// `pen`.
    pub fn draw(
        &mut self,
        glyph: &Glyph,
        painter: &dyn OutlinePainter,
        units_per_pixel: i32,
        pen: &mut dyn Pen,
    ) {
        self.entry(glyph, painter, units_per_pixel).replay(pen);
    }
}

/// Runs the painter and captures its output and control bounds.
///
/// A painter that draws nothing (blank bitmap) is recorded as the
/// degenerate single-point path `move_to(0, 0)`, `close`, so every glyph
/// replays at least one drawing command; its bounds stay `None`.
fn record(
    glyph: &Glyph,
    painter: &dyn OutlinePainter,
    units_per_pixel: i32,
    fingerprint: u64,
) -> CachedOutline {
    let mut elements = Vec::new();
    painter.draw(glyph, units_per_pixel, &mut elements);
    let mut bounds_pen = ControlBoundsPen::new();
    for element in &elements {
        element.apply_to(&mut bounds_pen);
    }
    let bbox = bounds_pen.bounds();
    if elements.is_empty() {
        elements.push(PathElement::MoveTo { x: 0.0, y: 0.0 });
        elements.push(PathElement::Close);
    }
    CachedOutline {
        fingerprint,
        units_per_pixel,
        elements,
        bbox,
    }
}

/// Hash of everything outline painting reads from a glyph.
///
/// The name stays out of the hash: it is the cache key, while the
/// fingerprint tracks content, so passing an equal-content glyph under the
/// same name stays a hit.
fn fingerprint(glyph: &Glyph) -> u64 {
    let mut hasher = DefaultHasher::new();
    glyph.advance_width.hash(&mut hasher);
    glyph.advance_height.hash(&mut hasher);
    glyph.horizontal_offset.hash(&mut hasher);
    glyph.vertical_offset.hash(&mut hasher);
    glyph.bitmap.hash(&mut hasher);
    hasher.finish()
}
