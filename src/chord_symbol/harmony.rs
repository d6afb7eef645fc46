//! Building chord symbols from parsed MusicXML harmonies.

use super::{ChordSymbol, SymbolModifier};
use crate::error::Result;
use crate::model::{Harmony, HarmonyRoot};

impl ChordSymbol {
    fn add_step(&mut self, root: &HarmonyRoot) -> Result<&mut Self> {
        self.add_text(&root.step, SymbolModifier::None);
        match root.alter {
            Some(a) if a > 0.0 => self.add_glyph("#", SymbolModifier::None),
            Some(a) if a < 0.0 => self.add_glyph("b", SymbolModifier::None),
            _ => Ok(self),
        }
    }

    fn add_kind(&mut self, kind: &str) -> Result<&mut Self> {
        let sup = SymbolModifier::Superscript;
        match kind {
            "major" | "" => {}
            "minor" => {
                self.add_text("m", SymbolModifier::None);
            }
            "augmented" => {
                self.add_glyph("+", sup)?;
            }
            "diminished" => {
                self.add_glyph("diminished", sup)?;
            }
            "dominant" | "dominant-seventh" => {
                self.add_text("7", sup);
            }
            "major-seventh" => {
                self.add_glyph("majorSeventh", sup)?;
            }
            "minor-seventh" => {
                self.add_text("m", SymbolModifier::None).add_text("7", sup);
            }
            "diminished-seventh" => {
                self.add_glyph("diminished", sup)?.add_text("7", sup);
            }
            "half-diminished" => {
                self.add_glyph("halfDiminished", sup)?;
            }
            "augmented-seventh" => {
                self.add_glyph("+", sup)?.add_text("7", sup);
            }
            "major-minor" => {
                self.add_text("m", SymbolModifier::None).add_glyph("majorSeventh", sup)?;
            }
            "major-sixth" => {
                self.add_text("6", sup);
            }
            "minor-sixth" => {
                self.add_text("m", SymbolModifier::None).add_text("6", sup);
            }
            "dominant-ninth" => {
                self.add_text("9", sup);
            }
            "major-ninth" => {
                self.add_glyph("majorSeventh", sup)?.add_text("9", sup);
            }
            "minor-ninth" => {
                self.add_text("m", SymbolModifier::None).add_text("9", sup);
            }
            "dominant-11th" => {
                self.add_text("11", sup);
            }
            "dominant-13th" => {
                self.add_text("13", sup);
            }
            "suspended-second" => {
                self.add_text("sus2", sup);
            }
            "suspended-fourth" => {
                self.add_text("sus4", sup);
            }
            "power" => {
                self.add_text("5", sup);
            }
            other => {
                log::debug!("no chord symbol layout for harmony kind '{other}', using its name");
                self.add_text(other, sup);
            }
        }
        Ok(self)
    }

    /// Chord symbol blocks for a MusicXML harmony: the root with its
    /// accidental, the chord quality (mostly superscripts) and, for slash
    /// chords, a slash followed by the bass note. A harmony of kind
    /// `"none"` becomes `N.C.`.
    pub fn from_harmony(harmony: &Harmony) -> Result<ChordSymbol> {
        let mut cs = ChordSymbol::new();
        cs.append_harmony(harmony)?;
        Ok(cs)
    }

    /// Append the blocks of `harmony` to this symbol (see [`ChordSymbol::from_harmony`]).
    pub fn append_harmony(&mut self, harmony: &Harmony) -> Result<&mut Self> {
        if harmony.kind == "none" {
            return Ok(self.add_text("N.C.", SymbolModifier::None));
        }
        self.add_step(&harmony.root)?;
        self.add_kind(&harmony.kind)?;
        if let Some(bass) = &harmony.bass {
            self.add_glyph("/", SymbolModifier::None)?;
            self.add_step(bass)?;
        }
        Ok(self)
    }
}
