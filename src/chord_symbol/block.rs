//! Symbol blocks and the append API that builds them.

use serde::Serialize;

use super::ChordSymbol;
use crate::constants::*;
use crate::error::Result;
use crate::glyphs::{self, Glyph, GlyphEntry};

/// Vertical role of a block within the chord symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolModifier {
    #[default]
    None,
    Subscript,
    Superscript,
}

/// What a block draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SymbolKind {
    Text { text: String },
    Glyph { glyph: Glyph },
    /// A horizontal rule as wide as the block.
    Line,
}

/// One atomic layout unit of a chord symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolBlock {
    pub kind: SymbolKind,
    pub modifier: SymbolModifier,
    /// Advance width. Starts at the intrinsic width; the formatter and the
    /// renderer may change it.
    pub width: f64,
    /// Nudge on top of the natural advance.
    pub x_offset: f64,
    pub y_shift: f64,
    #[serde(skip)]
    intrinsic_width: f64,
}

impl SymbolBlock {
    fn new(kind: SymbolKind, modifier: SymbolModifier, width: f64, y_shift: f64) -> Self {
        Self {
            kind,
            modifier,
            width,
            x_offset: 0.0,
            y_shift,
            intrinsic_width: width,
        }
    }

    pub fn is_superscript(&self) -> bool {
        self.modifier == SymbolModifier::Superscript
    }

    pub fn is_subscript(&self) -> bool {
        self.modifier == SymbolModifier::Subscript
    }

    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            SymbolKind::Text { text } => Some(text),
            _ => None,
        }
    }

    pub fn glyph(&self) -> Option<&Glyph> {
        match &self.kind {
            SymbolKind::Glyph { glyph } => Some(glyph),
            _ => None,
        }
    }

    /// The slash of a slash chord.
    pub fn is_diagonal_slash(&self) -> bool {
        self.glyph().is_some_and(Glyph::is_diagonal_slash)
    }

    pub(crate) fn reset(&mut self) {
        self.width = self.intrinsic_width;
        self.x_offset = 0.0;
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Append API
// ═══════════════════════════════════════════════════════════════════════

impl ChordSymbol {
    fn push_block(&mut self, block: SymbolBlock) -> &mut Self {
        self.blocks.push(block);
        self
    }

    fn text_block(&self, text: &str, modifier: SymbolModifier) -> SymbolBlock {
        let width = self.measure.measure(text, &self.font).width * TEXT_WIDTH_CORRECTION;
        SymbolBlock::new(
            SymbolKind::Text { text: text.to_string() },
            modifier,
            width,
            0.0,
        )
    }

    fn glyph_block(entry: &'static GlyphEntry, modifier: SymbolModifier) -> SymbolBlock {
        let point = match modifier {
            SymbolModifier::None => GLYPH_BASE_POINT,
            _ => GLYPH_BASE_POINT / SCRIPT_SIZE_RATIO,
        };
        let glyph = Glyph::new(entry, point);
        let width = glyph.metrics().width * GLYPH_WIDTH_PADDING;
        let y_shift = glyph.y_shift();
        SymbolBlock::new(SymbolKind::Glyph { glyph }, modifier, width, y_shift)
    }

    /// Append a text block sized with the current font.
    pub fn add_text(&mut self, text: &str, modifier: SymbolModifier) -> &mut Self {
        let block = self.text_block(text, modifier);
        self.push_block(block)
    }

    pub fn add_text_superscript(&mut self, text: &str) -> &mut Self {
        self.add_text(text, SymbolModifier::Superscript)
    }

    pub fn add_text_subscript(&mut self, text: &str) -> &mut Self {
        self.add_text(text, SymbolModifier::Subscript)
    }

    /// Append a catalog glyph by name (`"majorSeventh"`) or shorthand (`"#"`).
    pub fn add_glyph(&mut self, name: &str, modifier: SymbolModifier) -> Result<&mut Self> {
        let entry = glyphs::lookup(name)?;
        Ok(self.push_block(Self::glyph_block(entry, modifier)))
    }

    pub fn add_glyph_superscript(&mut self, name: &str) -> Result<&mut Self> {
        self.add_glyph(name, SymbolModifier::Superscript)
    }

    /// Split `text` into glyph and text blocks: every glyph shorthand
    /// character becomes its own glyph block, and each run of other
    /// characters becomes one text block. `"(#11b9)"` gives
    /// `( # "11" b "9" )`.
    pub fn add_glyph_or_text(&mut self, text: &str, modifier: SymbolModifier) -> &mut Self {
        let mut run = String::new();

        for c in text.chars() {
            match glyphs::shorthand(c) {
                Some(entry) => {
                    if !run.is_empty() {
                        self.add_text(&run, modifier);
                        run.clear();
                    }
                    self.push_block(Self::glyph_block(entry, modifier));
                }
                None => run.push(c),
            }
        }
        if !run.is_empty() {
            self.add_text(&run, modifier);
        }
        self
    }

    /// Append a horizontal rule `width` units long.
    pub fn add_line(&mut self, width: f64, modifier: SymbolModifier) -> &mut Self {
        self.push_block(SymbolBlock::new(SymbolKind::Line, modifier, width, 0.0))
    }
}
