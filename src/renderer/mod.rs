//! Drawing surfaces for chord symbols.
//!
//! Chord symbols draw through [`RenderContext`], a canvas-like capability
//! with a saved/restored font state. [`SvgSurface`] is the built-in
//! implementation and produces a self-contained SVG string.

mod svg_builder;

pub use svg_builder::{empty_svg, vexflow_outline_to_svg, SvgSurface};

use std::rc::Rc;

use crate::chord_symbol::{format, ChordSymbol, LayoutGroupState};
use crate::constants::*;
use crate::error::Result;
use crate::glyphs::Glyph;
use crate::model::Harmony;
use crate::note::{Stave, StaveNote};
use crate::text::{ChordSymbolFont, TextMetrics};

/// The operations a chord symbol needs from a drawing backend.
pub trait RenderContext {
    /// Push the current font and line width.
    fn save(&mut self);
    /// Pop the state pushed by the matching [`save`](RenderContext::save).
    fn restore(&mut self);
    fn set_font(&mut self, font: &ChordSymbolFont);
    fn set_line_width(&mut self, width: f64);
    /// Measure `text` in the current font.
    fn measure_text(&self, text: &str) -> TextMetrics;
    /// Fill `text` with its baseline starting at `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
    /// Fill a glyph outline with its origin at `(x, y)`.
    fn fill_glyph(&mut self, glyph: &Glyph, x: f64, y: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
}

// ═══════════════════════════════════════════════════════════════════════
// Chord chart
// ═══════════════════════════════════════════════════════════════════════

/// Render a row of chord symbols over an empty staff.
///
/// Each harmony sits on its own stemless note, spaced evenly across the
/// page, and is formatted as a group of one. `page_width` sets the SVG
/// width in user units; `None` uses the default (820).
pub fn render_harmonies_to_svg(harmonies: &[Harmony], page_width: Option<f64>) -> Result<String> {
    let page_width = match page_width {
        Some(w) if w > 0.0 => w,
        _ => DEFAULT_PAGE_WIDTH,
    };

    if harmonies.is_empty() {
        return Ok(empty_svg("No harmonies"));
    }

    let mut svg = SvgSurface::new(page_width, CHART_HEIGHT);
    svg.rect(0.0, 0.0, page_width, CHART_HEIGHT, "white");

    let stave = Stave::new(PAGE_MARGIN_TOP);
    let x_start = PAGE_MARGIN_LEFT;
    let x_end = page_width - PAGE_MARGIN_RIGHT;
    for line in 0..STAFF_LINE_COUNT {
        let y = stave.y_for_line(line as f64);
        svg.line(x_start, y, x_end, y, STAFF_COLOR, STAFF_LINE_WIDTH);
    }

    let spacing = (x_end - x_start) / (harmonies.len() as f64 + 1.0);
    for (i, harmony) in harmonies.iter().enumerate() {
        let x = x_start + spacing * (i as f64 + 0.5);
        let note = Rc::new(StaveNote::new(stave, x, &[4.0], false));

        let mut cs = ChordSymbol::from_harmony(harmony)?;
        cs.set_note(note, 0);
        format(std::slice::from_mut(&mut cs), &mut LayoutGroupState::default());
        cs.draw(&mut svg)?;
    }

    Ok(svg.build())
}
