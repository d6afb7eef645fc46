//! Drawing a formatted chord symbol next to its note.

use super::{ChordSymbol, HorizontalJustify, SymbolKind, VerticalJustify};
use crate::constants::*;
use crate::error::{ChordSymbolError, Result};
use crate::note::{NoteGeometry, StemDirection};
use crate::renderer::RenderContext;

impl ChordSymbol {
    /// Baseline y of the symbol's text row.
    fn anchor_y(&self, note: &dyn NoteGeometry) -> f64 {
        let text_line = self.text_line.unwrap_or(0);
        let stem = note.stem();
        let spacing = note.spacing_between_lines();

        match self.vertical {
            VerticalJustify::Bottom => {
                let y = note.y_for_bottom_text(text_line + TEXT_HEIGHT_OFFSET_HACK);
                match stem {
                    Some((direction, extents)) => {
                        let stem_base = match direction {
                            StemDirection::Up => extents.base_y,
                            StemDirection::Down => extents.top_y,
                        };
                        y.max(stem_base + spacing * (text_line as f64 + 2.0))
                    }
                    None => y,
                }
            }
            VerticalJustify::Top => {
                let note_top = note.ys().first().copied().unwrap_or(f64::INFINITY);
                let y = note
                    .y_for_top_text(text_line)
                    .min(note_top - ABOVE_NOTE_CLEARANCE);
                match stem {
                    Some((_, extents)) => y.min(
                        (extents.top_y - ABOVE_STEM_CLEARANCE) - spacing * text_line as f64,
                    ),
                    None => y,
                }
            }
        }
    }

    /// Left x of the first block.
    fn anchor_x(&self, note: &dyn NoteGeometry, index: usize) -> f64 {
        let start = note.modifier_start_x(index);
        let width = self.width();
        match self.horizontal {
            HorizontalJustify::Left => start,
            HorizontalJustify::Right => start - width,
            HorizontalJustify::Center => start - width / 2.0,
            HorizontalJustify::CenterStem => note.stem_x() - width / 2.0,
        }
    }

    /// Render text and glyphs above or below the attached note.
    ///
    /// Text block widths are re-measured on `ctx`, so the advance matches
    /// what was actually drawn.
    pub fn draw(&mut self, ctx: &mut dyn RenderContext) -> Result<()> {
        let binding = self.note.clone().ok_or(ChordSymbolError::MissingNoteBinding)?;
        let note = binding.note.as_ref();

        ctx.save();
        ctx.set_font(&self.font);

        let y = self.anchor_y(note);
        let mut x = self.anchor_x(note, binding.index);
        log::debug!("rendering chord symbol at ({x:.1}, {y:.1})");

        let script_font = self.font.reduced(SCRIPT_SIZE_RATIO);
        for symbol in &mut self.blocks {
            let sup = symbol.is_superscript();
            let sub = symbol.is_subscript();
            let mut cur_y = y;

            match &symbol.kind {
                SymbolKind::Text { text } => {
                    if sup || sub {
                        ctx.save();
                        ctx.set_font(&script_font);
                    }
                    let dim = ctx.measure_text(text);
                    symbol.width = dim.width * TEXT_WIDTH_CORRECTION;
                    if sup {
                        cur_y -= dim.height / SCRIPT_RAISE_RATIO;
                    }
                    if sub {
                        cur_y += dim.height / SCRIPT_RAISE_RATIO;
                    }
                    ctx.fill_text(text, x + symbol.x_offset, cur_y);
                    if sup || sub {
                        ctx.restore();
                    }
                }
                SymbolKind::Glyph { glyph } => {
                    cur_y += symbol.y_shift;
                    let bbox_h = glyph.bbox().h;
                    if bbox_h > TALL_GLYPH_HEIGHT {
                        cur_y += bbox_h - TALL_GLYPH_HEIGHT;
                    }
                    let height = glyph.metrics().height;
                    if sup {
                        cur_y -= height / SCRIPT_RAISE_RATIO;
                    }
                    if sub {
                        cur_y += height / SCRIPT_RAISE_RATIO;
                    }
                    ctx.fill_glyph(glyph, x + symbol.x_offset, cur_y);
                }
                SymbolKind::Line => {
                    ctx.begin_path();
                    ctx.set_line_width(LINE_BLOCK_WIDTH);
                    ctx.move_to(x, y);
                    ctx.line_to(x + symbol.width, cur_y);
                    ctx.stroke();
                }
            }

            x += symbol.width + symbol.x_offset;
        }

        ctx.restore();
        Ok(())
    }
}
