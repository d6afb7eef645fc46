//! Fonts and text measurement.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Text width estimate ─────────────────────────────────────────────

const CHAR_WIDTH_FACTOR: f64 = 0.55;

/// Font used for the text blocks of a chord symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChordSymbolFont {
    pub family: String,
    pub size: f64,
    pub weight: String,
}

impl Default for ChordSymbolFont {
    fn default() -> Self {
        Self {
            family: "Arial".to_string(),
            size: 10.0,
            weight: String::new(),
        }
    }
}

impl ChordSymbolFont {
    pub fn new(family: impl Into<String>, size: f64, weight: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            size,
            weight: weight.into(),
        }
    }

    /// Default text font to pair with a music font. Petaluma is a
    /// handwritten face, so chord text switches to a cursive family.
    pub fn for_music_font(music_font: &str) -> Self {
        let mut font = Self::default();
        if music_font == "Petaluma" {
            font.family = "Cursive".to_string();
        }
        font
    }

    /// Same family and weight at `size / ratio`.
    pub fn reduced(&self, ratio: f64) -> Self {
        Self {
            size: self.size / ratio,
            ..self.clone()
        }
    }
}

/// Width and height of a measured string, in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
}

/// Text measurement backend used when blocks are appended.
pub trait TextMeasure: fmt::Debug {
    fn measure(&self, text: &str, font: &ChordSymbolFont) -> TextMetrics;
}

/// Fixed per-character estimate. Deterministic, so it is also what the
/// SVG surface uses to answer `measure_text`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasure;

impl TextMeasure for EstimatedTextMeasure {
    fn measure(&self, text: &str, font: &ChordSymbolFont) -> TextMetrics {
        TextMetrics {
            width: estimate_text_width(text, font.size),
            height: if text.is_empty() { 0.0 } else { font.size },
        }
    }
}

/// Estimate the rendered width of a text string for a given font size.
pub fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * CHAR_WIDTH_FACTOR
}
