//! The build context: glyphs, mappings, kerning and metadata for one font.

use std::cell::RefCell;
use std::collections::BTreeMap;

use indexmap::IndexMap;
use log::debug;

use crate::cache::OutlineCache;
use crate::error::BuildError;
use crate::meta::MetaInfo;
use crate::metrics::{FontMetric, MetricsSummary};
use crate::outline::{OutlinePainter, SolidPainter};
use crate::types::{BoundingBox, Glyph, Pen};

/// Name of the required fallback glyph. Always first in glyph order.
pub const NOTDEF: &str = ".notdef";

/// Offset from an ASCII letter or digit to its fullwidth counterpart.
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Outline generation settings shared by every emission pass.
pub struct OutlineConfig {
    /// Design units per pixel.
    pub units_per_pixel: i32,
    /// Outline style applied to every glyph in the font.
    pub painter: Box<dyn OutlinePainter>,
    /// Whether emitters should produce vertical layout tables.
    pub vertical_metrics: bool,
    /// Replaces the aggregated font bounding box when set, in pixel units.
    pub bounding_box_override: Option<BoundingBox<i32>>,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            units_per_pixel: 100,
            painter: Box::new(SolidPainter),
            vertical_metrics: true,
            bounding_box_override: None,
        }
    }
}

impl OutlineConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Everything one font is built from.
///
/// Data fields are plain and public; emitters consume them through
/// [`prepare_glyphs`](Self::prepare_glyphs), which validates the whole
/// context and hands back read-only views. Outlines are served through an
/// interior cache, so repeated emission passes (multiple formats, or
/// collection members sharing letterforms) paint each glyph once.
#[derive(Default)]
pub struct FontBuilder {
    pub font_metric: FontMetric,
    pub meta_info: MetaInfo,
    /// Glyphs in the order they were added. Order is meaningful: it fixes
    /// glyph ids for every output format.
    pub glyphs: Vec<Glyph>,
    /// Code point to glyph name.
    pub character_mapping: BTreeMap<u32, String>,
    /// `(left, right)` glyph name pair to horizontal adjustment in pixels.
    pub kerning: BTreeMap<(String, String), i32>,
    pub config: OutlineConfig,
    cache: RefCell<OutlineCache>,
}

impl FontBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a glyph. Names must be unique across the build; duplicates
    /// are rejected during preparation.
    pub fn add_glyph(&mut self, glyph: Glyph) {
        self.glyphs.push(glyph);
    }

    /// Runs every build validation without constructing the views.
    pub fn validate(&self) -> Result<(), BuildError> {
        self.prepare_glyphs().map(|_| ())
    }

    /// Validates the context and fixes the deterministic glyph order:
    /// `.notdef` first, every other glyph in insertion order.
    ///
    /// The returned views also carry the effective character mapping, where
    /// each mapped ASCII letter or digit additionally maps its fullwidth
    /// counterpart to the same glyph. Explicit entries always win over the
    /// fallback.
    ///
    /// All failures are fatal and reported before any outline is painted.
    pub fn prepare_glyphs(&self) -> Result<PreparedGlyphs<'_>, BuildError> {
        let mut glyphs: IndexMap<&str, &Glyph> = IndexMap::with_capacity(self.glyphs.len());
        for glyph in &self.glyphs {
            if glyphs.insert(glyph.name.as_str(), glyph).is_some() {
                return Err(BuildError::DuplicateGlyphName(glyph.name.clone()));
            }
        }
        let Some(notdef_index) = glyphs.get_index_of(NOTDEF) else {
            return Err(BuildError::MissingNotdef);
        };
        glyphs.move_index(notdef_index, 0);

        for (name, glyph) in &glyphs {
            let expected = glyph.bitmap.width();
            for (row, len) in glyph.bitmap.rows().iter().map(Vec::len).enumerate() {
                if len != expected {
                    return Err(BuildError::IrregularBitmap {
                        glyph: (*name).to_string(),
                        row,
                        len,
                        expected,
                    });
                }
            }
        }

        let mut character_mapping: BTreeMap<u32, &str> = BTreeMap::new();
        for (&code_point, glyph_name) in &self.character_mapping {
            let Some((name, _)) = glyphs.get_key_value(glyph_name.as_str()) else {
                return Err(BuildError::UnknownMappingTarget {
                    code_point,
                    name: glyph_name.clone(),
                });
            };
            character_mapping.insert(code_point, *name);
        }
        let explicit: Vec<(u32, &str)> = character_mapping
            .iter()
            .map(|(&code_point, &name)| (code_point, name))
            .collect();
        for (code_point, name) in explicit {
            if let Some(fullwidth) = fullwidth_counterpart(code_point) {
                character_mapping.entry(fullwidth).or_insert(name);
            }
        }

        for (left, right) in self.kerning.keys() {
            for name in [left, right] {
                if !glyphs.contains_key(name.as_str()) {
                    return Err(BuildError::UnknownKerningGlyph {
                        left: left.clone(),
                        right: right.clone(),
                        name: name.clone(),
                    });
                }
            }
        }

        if self.meta_info.family_name.as_deref().is_none_or(str::is_empty) {
            return Err(BuildError::MissingFamilyName);
        }

        debug!(
            "prepared {} glyphs, {} character mappings ({} explicit), {} kerning pairs",
            glyphs.len(),
            character_mapping.len(),
            self.character_mapping.len(),
            self.kerning.len()
        );

        Ok(PreparedGlyphs {
            glyphs,
            character_mapping,
        })
    }

    /// Draws `glyph` into `pen` with the configured painter and scale,
    /// replaying the cached recording when it is still fresh.
    ///
    /// A blank glyph replays the degenerate substitute `move_to(0, 0)`,
    /// `close`, so every glyph emits at least one drawing command.
    pub fn draw_glyph(&self, glyph: &Glyph, pen: &mut dyn Pen) {
        self.cache.borrow_mut().draw(
            glyph,
            self.config.painter.as_ref(),
            self.config.units_per_pixel,
            pen,
        );
    }

    /// Control bounds of the glyph's painted outline, `None` for blank
    /// glyphs.
    pub fn glyph_bbox(&self, glyph: &Glyph) -> Option<BoundingBox<i32>> {
        self.cache
            .borrow_mut()
            .entry(glyph, self.config.painter.as_ref(), self.config.units_per_pixel)
            .bbox()
    }

    /// Font-wide metric extremes over the stored glyphs at the configured
    /// scale.
    ///
    /// The bounding box unions each glyph's painted outline bounds unless
    /// [`OutlineConfig::bounding_box_override`] is set, in which case the
    /// override is scaled and used as is.
    pub fn metrics_summary(&self) -> MetricsSummary {
        let mut summary = MetricsSummary::aggregate(
            self.glyphs.iter().map(|glyph| (glyph, self.glyph_bbox(glyph))),
            self.config.units_per_pixel,
        );
        if let Some(bounding_box) = self.config.bounding_box_override {
            summary.bounding_box = bounding_box.scale(self.config.units_per_pixel);
        }
        summary
    }

    /// Renders the kerning table as OpenType feature source.
    ///
    /// Pairs are ordered by (left, right) glyph id and values scaled to
    /// design units. Callers typically skip the feature entirely when the
    /// kerning table is empty.
    pub fn kern_feature_text(&self, prepared: &PreparedGlyphs<'_>) -> String {
        let mut pairs: Vec<(&str, &str, i32)> = self
            .kerning
            .iter()
            .map(|((left, right), value)| (left.as_str(), right.as_str(), *value))
            .collect();
        pairs.sort_by_key(|&(left, right, _)| (prepared.glyph_id(left), prepared.glyph_id(right)));
        let mut text = String::from("languagesystem DFLT dflt;\n\nfeature kern {\n");
        for (left, right, value) in pairs {
            let units = value * self.config.units_per_pixel;
            text.push_str(&format!("    position {left} {right} {units};\n"));
        }
        text.push_str("} kern;\n");
        text
    }
}

/// Read-only views over a validated build: deterministic glyph order, name
/// lookup, and the effective character mapping.
pub struct PreparedGlyphs<'a> {
    glyphs: IndexMap<&'a str, &'a Glyph>,
    character_mapping: BTreeMap<u32, &'a str>,
}

impl<'a> PreparedGlyphs<'a> {
    /// Glyph names in glyph order.
    pub fn glyph_order(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.glyphs.keys().copied()
    }

    /// Number of glyphs in the build.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Never true: a validated build always holds `.notdef`.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Position of `name` in glyph order.
    pub fn glyph_id(&self, name: &str) -> Option<usize> {
        self.glyphs.get_index_of(name)
    }

    /// Looks up a glyph by name.
    pub fn get(&self, name: &str) -> Option<&'a Glyph> {
        self.glyphs.get(name).copied()
    }

    /// `(name, glyph)` pairs in glyph order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Glyph)> + '_ {
        self.glyphs.iter().map(|(name, glyph)| (*name, *glyph))
    }

    /// The effective character mapping: explicit entries plus fullwidth
    /// fallbacks, ordered by code point.
    pub fn character_mapping(&self) -> &BTreeMap<u32, &'a str> {
        &self.character_mapping
    }
}

/// The fullwidth counterpart of an ASCII letter or digit.
///
/// Only `A`-`Z`, `a`-`z` and `0`-`9` take part in the fallback policy;
/// every other code point maps to nothing.
fn fullwidth_counterpart(code_point: u32) -> Option<u32> {
    matches!(code_point, 0x30..=0x39 | 0x41..=0x5A | 0x61..=0x7A)
        .then_some(code_point + FULLWIDTH_OFFSET)
}

#[cfg(test)]
mod tests {
    use super::{FontBuilder, NOTDEF};
    use crate::error::BuildError;
    use crate::outline::{OutlinePainter, SolidPainter};
    use crate::pens::BezPathPen;
    use crate::types::{Bitmap, BoundingBox, Glyph, Pen};
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    fn notdef() -> Glyph {
        Glyph {
            advance_width: 4,
            advance_height: 4,
            bitmap: Bitmap::new(vec![vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]]),
            ..Glyph::new(NOTDEF)
        }
    }

    fn letter(name: &str) -> Glyph {
        Glyph {
            advance_width: 2,
            advance_height: 2,
            bitmap: Bitmap::new(vec![vec![1]]),
            ..Glyph::new(name)
        }
    }

    fn builder() -> FontBuilder {
        let mut builder = FontBuilder::new();
        builder.meta_info.family_name = Some(String::from("Test Pixel"));
        builder.add_glyph(notdef());
        builder
    }

    struct CountingPainter {
        calls: Rc<Cell<usize>>,
    }

    impl OutlinePainter for CountingPainter {
        fn draw(&self, glyph: &Glyph, units_per_pixel: i32, pen: &mut dyn Pen) {
            self.calls.set(self.calls.get() + 1);
            SolidPainter.draw(glyph, units_per_pixel, pen);
        }
    }

    #[test]
    fn missing_notdef() {
        let mut builder = FontBuilder::new();
        builder.meta_info.family_name = Some(String::from("Test Pixel"));
        builder.add_glyph(letter("a"));
        assert_eq!(builder.validate(), Err(BuildError::MissingNotdef));
    }

    #[test]
    fn duplicate_glyph_name() {
        let mut builder = builder();
        builder.add_glyph(letter("a"));
        builder.add_glyph(letter("a"));
        assert_eq!(
            builder.validate(),
            Err(BuildError::DuplicateGlyphName(String::from("a")))
        );
    }

    #[test]
    fn unknown_mapping_target() {
        let mut builder = builder();
        builder.add_glyph(letter("a"));
        builder
            .character_mapping
            .insert(0x41, String::from("missing"));
        assert_eq!(
            builder.validate(),
            Err(BuildError::UnknownMappingTarget {
                code_point: 0x41,
                name: String::from("missing"),
            })
        );
    }

    #[test]
    fn mapping_may_target_notdef() {
        let mut builder = builder();
        builder
            .character_mapping
            .insert(0xFFFE, String::from(NOTDEF));
        let prepared = builder.prepare_glyphs().unwrap();
        assert_eq!(prepared.character_mapping()[&0xFFFE], NOTDEF);
    }

    #[test]
    fn unknown_kerning_glyph() {
        let mut builder = builder();
        builder.add_glyph(letter("a"));
        builder
            .kerning
            .insert((String::from("a"), String::from("b")), -1);
        assert_eq!(
            builder.validate(),
            Err(BuildError::UnknownKerningGlyph {
                left: String::from("a"),
                right: String::from("b"),
                name: String::from("b"),
            })
        );
    }

    #[test]
    fn irregular_bitmap() {
        let mut builder = builder();
        let mut glyph = letter("a");
        glyph.bitmap = Bitmap::new(vec![vec![1, 1], vec![1]]);
        builder.add_glyph(glyph);
        assert_eq!(
            builder.validate(),
            Err(BuildError::IrregularBitmap {
                glyph: String::from("a"),
                row: 1,
                len: 1,
                expected: 2,
            })
        );
    }

    #[test]
    fn family_name_is_required() {
        let mut builder = builder();
        builder.meta_info.family_name = None;
        assert_eq!(builder.validate(), Err(BuildError::MissingFamilyName));
        builder.meta_info.family_name = Some(String::new());
        assert_eq!(builder.validate(), Err(BuildError::MissingFamilyName));
    }

    #[test]
    fn glyph_order_is_notdef_then_insertion() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut builder = FontBuilder::new();
        builder.meta_info.family_name = Some(String::from("Test Pixel"));
        builder.add_glyph(letter("b"));
        builder.add_glyph(letter("a"));
        builder.add_glyph(notdef());
        builder.add_glyph(letter("c"));
        let prepared = builder.prepare_glyphs().unwrap();
        assert_eq!(
            prepared.glyph_order().collect::<Vec<_>>(),
            [NOTDEF, "b", "a", "c"]
        );
        assert_eq!(prepared.glyph_id(NOTDEF), Some(0));
        assert_eq!(prepared.glyph_id("a"), Some(2));
        assert_eq!(prepared.glyph_id("missing"), None);
        assert_eq!(prepared.len(), 4);
        assert_eq!(prepared.get("c"), Some(&letter("c")));

        let again = builder.prepare_glyphs().unwrap();
        assert_eq!(
            prepared.glyph_order().collect::<Vec<_>>(),
            again.glyph_order().collect::<Vec<_>>()
        );
    }

    #[test]
    fn fullwidth_fallback_mapping() {
        let mut builder = builder();
        builder.add_glyph(letter("a"));
        builder.add_glyph(letter("five"));
        builder.add_glyph(letter("bang"));
        builder.character_mapping.insert(0x41, String::from("a"));
        builder.character_mapping.insert(0x35, String::from("five"));
        builder.character_mapping.insert(0x21, String::from("bang"));
        let prepared = builder.prepare_glyphs().unwrap();
        let mapping = prepared.character_mapping();
        assert_eq!(mapping[&0x41], "a");
        assert_eq!(mapping[&0xFF21], "a");
        assert_eq!(mapping[&0x35], "five");
        assert_eq!(mapping[&0xFF15], "five");
        assert_eq!(mapping[&0x21], "bang");
        assert!(!mapping.contains_key(&0xFF01));
        assert_eq!(mapping.len(), 5);
    }

    #[test]
    fn explicit_fullwidth_entry_wins() {
        let mut builder = builder();
        builder.add_glyph(letter("a"));
        builder.add_glyph(letter("wide_a"));
        builder.character_mapping.insert(0x41, String::from("a"));
        builder
            .character_mapping
            .insert(0xFF21, String::from("wide_a"));
        let prepared = builder.prepare_glyphs().unwrap();
        assert_eq!(prepared.character_mapping()[&0xFF21], "wide_a");
    }

    #[test]
    fn blank_glyph_draws_degenerate_path() {
        let builder = builder();
        let space = Glyph {
            advance_width: 2,
            bitmap: Bitmap::new(vec![vec![0, 0]]),
            ..Glyph::new("space")
        };
        let mut pen = BezPathPen::new();
        builder.draw_glyph(&space, &mut pen);
        assert_eq!(pen.into_inner().to_svg(), "M0,0 Z");
    }

    #[test]
    fn drawing_reuses_cached_outlines() {
        let calls = Rc::new(Cell::new(0));
        let mut builder = builder();
        builder.config.painter = Box::new(CountingPainter {
            calls: Rc::clone(&calls),
        });
        let mut glyph = letter("a");

        builder.draw_glyph(&glyph, &mut BezPathPen::new());
        builder.draw_glyph(&glyph, &mut BezPathPen::new());
        assert_eq!(calls.get(), 1);

        glyph.bitmap.rows_mut().push(vec![1]);
        builder.draw_glyph(&glyph, &mut BezPathPen::new());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn metrics_summary_unions_outline_bounds() {
        let mut builder = builder();
        builder.add_glyph(letter("a"));
        builder.config.units_per_pixel = 10;
        let summary = builder.metrics_summary();
        assert_eq!(summary.advance_width_max, 40);
        assert_eq!(summary.advance_height_max, 40);
        // the 3x3 .notdef dominates the 1x1 letter
        assert_eq!(
            summary.bounding_box,
            BoundingBox {
                x_min: 0,
                y_min: 0,
                x_max: 30,
                y_max: 30,
            }
        );
    }

    #[test]
    fn bounding_box_override_is_scaled() {
        let mut builder = builder();
        builder.config.units_per_pixel = 10;
        builder.config.bounding_box_override = Some(BoundingBox {
            x_min: -1,
            y_min: -2,
            x_max: 5,
            y_max: 6,
        });
        assert_eq!(
            builder.metrics_summary().bounding_box,
            BoundingBox {
                x_min: -10,
                y_min: -20,
                x_max: 50,
                y_max: 60,
            }
        );
    }

    #[test]
    fn kern_feature_orders_pairs_by_glyph_id() {
        let mut builder = builder();
        builder.add_glyph(letter("a"));
        builder.add_glyph(letter("b"));
        builder.add_glyph(letter("c"));
        builder
            .kerning
            .insert((String::from("b"), String::from("a")), -1);
        builder
            .kerning
            .insert((String::from("a"), String::from("c")), 2);
        builder
            .kerning
            .insert((String::from("a"), String::from("b")), 3);
        let prepared = builder.prepare_glyphs().unwrap();
        let expected = [
            "languagesystem DFLT dflt;",
            "",
            "feature kern {",
            "    position a b 300;",
            "    position a c 200;",
            "    position b a -100;",
            "} kern;",
            "",
        ]
        .join("\n");
        assert_eq!(builder.kern_feature_text(&prepared), expected);
    }
}
