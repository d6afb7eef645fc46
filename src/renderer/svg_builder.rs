//! SVG surface — accumulates SVG elements and produces the final string.
//!
//! Also contains the VexFlow outline → SVG path conversion used for glyphs.

use std::fmt::Write as _;

use super::RenderContext;
use crate::constants::*;
use crate::glyphs::Glyph;
use crate::text::{ChordSymbolFont, EstimatedTextMeasure, TextMeasure, TextMetrics};

// ═══════════════════════════════════════════════════════════════════════
// SvgSurface
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
struct SurfaceState {
    font: ChordSymbolFont,
    line_width: f64,
}

/// An in-memory SVG canvas.
#[derive(Debug)]
pub struct SvgSurface {
    elements: Vec<String>,
    width: f64,
    height: f64,
    state: SurfaceState,
    saved: Vec<SurfaceState>,
    path: String,
    fill: String,
    measure: EstimatedTextMeasure,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
            state: SurfaceState {
                font: ChordSymbolFont::default(),
                line_width: 1.0,
            },
            saved: Vec::new(),
            path: String::new(),
            fill: CHORD_COLOR.to_string(),
            measure: EstimatedTextMeasure,
        }
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    pub fn font(&self) -> &ChordSymbolFont {
        &self.state.font
    }

    pub fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.elements.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}" stroke-linecap="round"/>"#,
            x1, y1, x2, y2, color, width
        ));
    }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        self.elements.push(format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            x, y, w, h, fill
        ));
    }
}

impl RenderContext for SvgSurface {
    fn save(&mut self) {
        self.saved.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    fn set_font(&mut self, font: &ChordSymbolFont) {
        self.state.font = font.clone();
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn measure_text(&self, text: &str) -> TextMetrics {
        self.measure.measure(text, &self.state.font)
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let font = &self.state.font;
        let weight = if font.weight.is_empty() { "normal" } else { font.weight.as_str() };
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-family="{}" font-size="{:.1}" font-weight="{}" fill="{}" text-anchor="start">{}</text>"#,
            x,
            y,
            escape(&font.family),
            font.size,
            escape(weight),
            self.fill,
            escape(text)
        ));
    }

    fn fill_glyph(&mut self, glyph: &Glyph, x: f64, y: f64) {
        let path = vexflow_outline_to_svg(glyph.outline(), glyph.scale(), x, y);
        self.elements.push(format!(
            r#"<path d="{}" fill="{}" stroke="none"/>"#,
            path, self.fill
        ));
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.path, "M{:.1} {:.1}", x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.path, "L{:.1} {:.1}", x, y);
    }

    fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }
        self.elements.push(format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{:.1}"/>"#,
            self.path, self.fill, self.state.line_width
        ));
    }
}

fn escape(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ═══════════════════════════════════════════════════════════════════════
// VexFlow outline → SVG path
// ═══════════════════════════════════════════════════════════════════════

/// Convert a VexFlow glyph outline string to an SVG path `d` attribute.
///
/// The y-axis is inverted (font y goes up; SVG y goes down).
pub fn vexflow_outline_to_svg(outline: &str, scale: f64, ox: f64, oy: f64) -> String {
    let tokens: Vec<&str> = outline.split_whitespace().collect();
    let mut path = String::with_capacity(outline.len());
    let num = |i: usize| -> f64 { tokens[i].parse().unwrap_or(0.0) };
    let mut i = 0;

    while i < tokens.len() {
        match tokens[i] {
            "m" if i + 2 < tokens.len() => {
                let _ = write!(path, "M{:.1} {:.1}", ox + num(i + 1) * scale, oy - num(i + 2) * scale);
                i += 3;
            }
            "l" if i + 2 < tokens.len() => {
                let _ = write!(path, "L{:.1} {:.1}", ox + num(i + 1) * scale, oy - num(i + 2) * scale);
                i += 3;
            }
            "b" if i + 6 < tokens.len() => {
                let _ = write!(
                    path,
                    "C{:.1} {:.1} {:.1} {:.1} {:.1} {:.1}",
                    ox + num(i + 3) * scale, oy - num(i + 4) * scale,
                    ox + num(i + 5) * scale, oy - num(i + 6) * scale,
                    ox + num(i + 1) * scale, oy - num(i + 2) * scale,
                );
                i += 7;
            }
            "q" if i + 4 < tokens.len() => {
                let _ = write!(
                    path,
                    "Q{:.1} {:.1} {:.1} {:.1}",
                    ox + num(i + 3) * scale, oy - num(i + 4) * scale,
                    ox + num(i + 1) * scale, oy - num(i + 2) * scale,
                );
                i += 5;
            }
            _ => { i += 1; }
        }
    }

    path.push('Z');
    path
}

// ═══════════════════════════════════════════════════════════════════════
// Empty SVG fallback
// ═══════════════════════════════════════════════════════════════════════

pub fn empty_svg(message: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 400 100\">\
         <text x=\"200\" y=\"50\" text-anchor=\"middle\" font-size=\"14\" fill=\"gray\">{}</text>\
         </svg>",
        escape(message)
    )
}
