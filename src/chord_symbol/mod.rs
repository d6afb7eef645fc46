//! Chord symbols: blocks of text, glyphs and lines drawn above or below a note.
//!
//! A [`ChordSymbol`] is built block by block (`add_text`, `add_glyph`,
//! `add_glyph_or_text`, `add_line`), formatted together with the other
//! chord symbols of its note by [`format`], then drawn with
//! [`ChordSymbol::draw`].

mod block;
mod draw;
mod format;
mod harmony;
mod kerning;

pub use block::{SymbolBlock, SymbolKind, SymbolModifier};
pub use format::{format, LayoutGroupState};

use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChordSymbolError, Result};
use crate::note::NoteGeometry;
use crate::text::{ChordSymbolFont, EstimatedTextMeasure, TextMeasure};

// ═══════════════════════════════════════════════════════════════════════
// Justification
// ═══════════════════════════════════════════════════════════════════════

/// Horizontal placement relative to the note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HorizontalJustify {
    #[serde(rename = "left")]
    Left,
    #[serde(rename = "center")]
    Center,
    #[serde(rename = "right")]
    Right,
    /// Centered on the stem rather than the notehead.
    #[default]
    #[serde(rename = "centerStem")]
    CenterStem,
}

impl FromStr for HorizontalJustify {
    type Err = ChordSymbolError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "center" => Ok(Self::Center),
            "centerStem" => Ok(Self::CenterStem),
            _ => Err(ChordSymbolError::UnknownJustification(s.to_string())),
        }
    }
}

/// Which side of the staff the chord symbol goes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalJustify {
    #[default]
    #[serde(rename = "top", alias = "above")]
    Top,
    #[serde(rename = "bottom", alias = "below")]
    Bottom,
}

impl FromStr for VerticalJustify {
    type Err = ChordSymbolError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "top" | "above" => Ok(Self::Top),
            "bottom" | "below" => Ok(Self::Bottom),
            _ => Err(ChordSymbolError::UnknownJustification(s.to_string())),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ChordSymbol
// ═══════════════════════════════════════════════════════════════════════

/// The note a chord symbol is attached to, and its modifier index there.
#[derive(Debug, Clone)]
struct NoteBinding {
    note: Rc<dyn NoteGeometry>,
    index: usize,
}

/// One chord symbol attached to one note.
#[derive(Debug, Clone, Serialize)]
pub struct ChordSymbol {
    blocks: Vec<SymbolBlock>,
    horizontal: HorizontalJustify,
    vertical: VerticalJustify,
    font: ChordSymbolFont,
    /// Row above/below the staff; set by [`format`].
    text_line: Option<usize>,
    use_kerning: bool,
    /// Set when the formatter stacks a subscript under a superscript.
    #[serde(skip)]
    stacked: bool,
    /// Set once the kerning pass has run in the current format cycle.
    #[serde(skip)]
    kerned: bool,
    #[serde(skip)]
    measure: Rc<dyn TextMeasure>,
    #[serde(skip)]
    note: Option<NoteBinding>,
}

impl Default for ChordSymbol {
    fn default() -> Self {
        Self::new()
    }
}

impl ChordSymbol {
    pub fn new() -> Self {
        Self::with_measure(Rc::new(EstimatedTextMeasure))
    }

    /// A chord symbol whose text blocks are sized by `measure`.
    pub fn with_measure(measure: Rc<dyn TextMeasure>) -> Self {
        Self {
            blocks: Vec::new(),
            horizontal: HorizontalJustify::default(),
            vertical: VerticalJustify::default(),
            font: ChordSymbolFont::default(),
            text_line: None,
            use_kerning: true,
            stacked: false,
            kerned: false,
            measure,
            note: None,
        }
    }

    pub fn blocks(&self) -> &[SymbolBlock] {
        &self.blocks
    }

    /// Sum of the block widths.
    pub fn width(&self) -> f64 {
        self.blocks.iter().map(|b| b.width).sum()
    }

    pub fn text_line(&self) -> Option<usize> {
        self.text_line
    }

    pub fn font(&self) -> &ChordSymbolFont {
        &self.font
    }

    /// Font for blocks appended from now on; existing blocks keep their width.
    pub fn set_font(&mut self, font: ChordSymbolFont) -> &mut Self {
        self.font = font;
        self
    }

    pub fn set_font_size(&mut self, size: f64) -> &mut Self {
        self.font.size = size;
        self
    }

    pub fn horizontal(&self) -> HorizontalJustify {
        self.horizontal
    }

    pub fn set_horizontal(&mut self, just: HorizontalJustify) -> &mut Self {
        self.horizontal = just;
        self
    }

    pub fn vertical(&self) -> VerticalJustify {
        self.vertical
    }

    pub fn set_vertical(&mut self, just: VerticalJustify) -> &mut Self {
        self.vertical = just;
        self
    }

    /// Whether the kerning pass will adjust this symbol. False when kerning
    /// was switched off by the caller or by the super/subscript overlay.
    pub fn kerning_enabled(&self) -> bool {
        self.use_kerning && !self.stacked
    }

    pub fn set_enable_kerning(&mut self, enabled: bool) -> &mut Self {
        self.use_kerning = enabled;
        self
    }

    /// Attach to `note` as the modifier at `index`.
    pub fn set_note(&mut self, note: Rc<dyn NoteGeometry>, index: usize) -> &mut Self {
        self.note = Some(NoteBinding { note, index });
        self
    }

    pub fn has_note(&self) -> bool {
        self.note.is_some()
    }

    /// Formatted layout as JSON, for host UIs that draw on their own.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Drop everything a previous format pass derived, so the next pass
    /// starts from the intrinsic block widths.
    pub(crate) fn reset_layout(&mut self) {
        for block in &mut self.blocks {
            block.reset();
        }
        self.text_line = None;
        self.stacked = false;
        self.kerned = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::{Stave, StaveNote};

    #[test]
    fn justification_aliases() {
        assert_eq!("top".parse::<VerticalJustify>().unwrap(), VerticalJustify::Top);
        assert_eq!("above".parse::<VerticalJustify>().unwrap(), VerticalJustify::Top);
        assert_eq!("below".parse::<VerticalJustify>().unwrap(), VerticalJustify::Bottom);
        assert_eq!("bottom".parse::<VerticalJustify>().unwrap(), VerticalJustify::Bottom);
        assert_eq!(
            "centerStem".parse::<HorizontalJustify>().unwrap(),
            HorizontalJustify::CenterStem
        );
        assert!(matches!(
            "middle".parse::<HorizontalJustify>(),
            Err(ChordSymbolError::UnknownJustification(s)) if s == "middle"
        ));
    }

    #[test]
    fn justification_deserializes_from_aliases() {
        let v: VerticalJustify = serde_json::from_str(r#""below""#).unwrap();
        assert_eq!(v, VerticalJustify::Bottom);
        let h: HorizontalJustify = serde_json::from_str(r#""right""#).unwrap();
        assert_eq!(h, HorizontalJustify::Right);
    }

    #[test]
    fn defaults() {
        let cs = ChordSymbol::new();
        assert_eq!(cs.horizontal(), HorizontalJustify::CenterStem);
        assert_eq!(cs.vertical(), VerticalJustify::Top);
        assert!(cs.kerning_enabled());
        assert_eq!(cs.text_line(), None);
        assert_eq!(cs.width(), 0.0);
        assert!(!cs.has_note());
    }

    #[test]
    fn setters_chain() {
        let mut cs = ChordSymbol::new();
        cs.set_horizontal(HorizontalJustify::Left)
            .set_vertical(VerticalJustify::Bottom)
            .set_font_size(14.0)
            .set_enable_kerning(false)
            .set_note(Rc::new(StaveNote::new(Stave::new(0.0), 0.0, &[2.0], true)), 0);
        assert_eq!(cs.horizontal(), HorizontalJustify::Left);
        assert_eq!(cs.vertical(), VerticalJustify::Bottom);
        assert_eq!(cs.font().size, 14.0);
        assert!(!cs.kerning_enabled());
        assert!(cs.has_note());
    }

    #[test]
    fn json_export_lists_blocks() {
        let mut cs = ChordSymbol::new();
        cs.add_text("C", SymbolModifier::None);
        cs.add_glyph("majorSeventh", SymbolModifier::Superscript).unwrap();
        let json = cs.to_json().unwrap();
        assert!(json.contains(r#""text": "C""#));
        assert!(json.contains("csymMajorSeventh"));
        assert!(json.contains("superscript"));
    }
}
