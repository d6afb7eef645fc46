//! Shared constants for chord symbol layout and drawing (all in SVG user units).
//!
//! The kerning and sizing values are the fixed heuristics of the chord
//! symbol layout rules, not values derived from font metrics.

// ── Block construction ──────────────────────────────────────────────
pub(crate) const GLYPH_BASE_POINT: f64 = 20.0; // point size of a normal glyph block
pub(crate) const SCRIPT_SIZE_RATIO: f64 = 1.3; // super/subscripts are this much smaller
pub(crate) const GLYPH_WIDTH_PADDING: f64 = 1.5; // glyph bbox width → advance (side bearings)
pub(crate) const TEXT_WIDTH_CORRECTION: f64 = 4.0 / 3.0; // measured text runs short by about a third

// ── Glyph outlines ──────────────────────────────────────────────────
pub(crate) const GLYPH_RESOLUTION: f64 = 1000.0; // font units per em in the outline table

// ── Kerning ─────────────────────────────────────────────────────────
pub(crate) const SLASH_KERNING: f64 = -2.0; // pull blocks into the '/' over bar
pub(crate) const SUPERSCRIPT_KERNING: f64 = -2.0; // superscript after a letter with no top stroke
pub(crate) const LOWERCASE_KERNING: f64 = -1.0; // lowercase text after an open-bottomed letter
pub(crate) const UPPER_LOWER_KERNING: f64 = -1.0; // extra for letters open at both ends ('I')

/// Letters whose right side is open near the baseline.
pub(crate) const LOWER_KERNING_TEXT: [char; 7] = ['D', 'F', 'I', 'P', 'T', 'V', 'Y'];
/// Letters whose right side is open near the cap height.
pub(crate) const UPPER_KERNING_TEXT: [char; 3] = ['A', 'I', 'L'];

// ── Drawing ─────────────────────────────────────────────────────────
pub(crate) const SCRIPT_RAISE_RATIO: f64 = 2.2; // super/subscript shift = height / 2.2
pub(crate) const TALL_GLYPH_HEIGHT: f64 = 12.0; // glyphs taller than this sink by the excess
pub(crate) const ABOVE_NOTE_CLEARANCE: f64 = 10.0;
pub(crate) const ABOVE_STEM_CLEARANCE: f64 = 5.0;
pub(crate) const TEXT_HEIGHT_OFFSET_HACK: usize = 1; // text origin is the baseline, not the top
pub(crate) const LINE_BLOCK_WIDTH: f64 = 1.0;

// ── Staff dimensions ────────────────────────────────────────────────
pub(crate) const STAFF_LINE_SPACING: f64 = 10.0; // distance between staff lines
pub(crate) const STAFF_LINE_COUNT: usize = 5;
pub(crate) const SPACE_ABOVE_STAFF_LINES: f64 = 4.0;
pub(crate) const TOP_TEXT_POSITION: f64 = 1.0;
pub(crate) const BOTTOM_TEXT_POSITION: f64 = 5.0; // one line below the bottom staff line
pub(crate) const NOTEHEAD_WIDTH: f64 = 11.0;
pub(crate) const STEM_LENGTH: f64 = 35.0;

// ── Standalone chart rendering ──────────────────────────────────────
pub(crate) const DEFAULT_PAGE_WIDTH: f64 = 820.0;
pub(crate) const PAGE_MARGIN_LEFT: f64 = 50.0;
pub(crate) const PAGE_MARGIN_RIGHT: f64 = 30.0;
pub(crate) const PAGE_MARGIN_TOP: f64 = 30.0;
pub(crate) const CHART_HEIGHT: f64 = 200.0;
pub(crate) const STAFF_LINE_WIDTH: f64 = 0.8;

// ── Colors ──────────────────────────────────────────────────────────
pub(crate) const STAFF_COLOR: &str = "#555555";
pub(crate) const CHORD_COLOR: &str = "#4a4a9a";
