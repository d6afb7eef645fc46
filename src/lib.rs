//! chordlib — chord symbol layout, kerning and rendering for music notation.
//!
//! A chord symbol is a row of text, glyph and line blocks drawn above or
//! below a note ("F7(#11b9)", "C/E", "Cm⁶₄"). This crate builds the blocks,
//! assigns every chord symbol of a note its own text row, stacks
//! subscripts under superscripts, applies letter-shape kerning, and draws
//! the result onto any [`RenderContext`] (an SVG surface is included).
//!
//! # Example
//! ```
//! use std::rc::Rc;
//! use chordlib::{format, ChordSymbol, LayoutGroupState, Stave, StaveNote, SvgSurface, SymbolModifier};
//!
//! let note = Rc::new(StaveNote::new(Stave::new(10.0), 100.0, &[4.0], false));
//!
//! let mut cs = ChordSymbol::new();
//! cs.add_text("F7", SymbolModifier::None)
//!     .add_glyph_or_text("(#11b9)", SymbolModifier::Superscript)
//!     .set_note(note, 0);
//!
//! let mut state = LayoutGroupState::default();
//! format(std::slice::from_mut(&mut cs), &mut state);
//!
//! let mut svg = SvgSurface::new(300.0, 120.0);
//! cs.draw(&mut svg).unwrap();
//! assert!(svg.build().contains(">F7</text>"));
//! ```

pub mod chord_symbol;
mod constants;
pub mod error;
pub mod glyphs;
pub mod model;
pub mod note;
pub mod parser;
pub mod renderer;
pub mod text;

pub use chord_symbol::{
    format, ChordSymbol, HorizontalJustify, LayoutGroupState, SymbolBlock, SymbolKind,
    SymbolModifier, VerticalJustify,
};
pub use error::{ChordSymbolError, Result};
pub use model::*;
pub use note::{NoteGeometry, Stave, StaveNote, StemDirection, StemExtents};
pub use parser::parse_harmonies;
pub use renderer::{render_harmonies_to_svg, RenderContext, SvgSurface};
pub use text::{ChordSymbolFont, EstimatedTextMeasure, TextMeasure, TextMetrics};

/// Parse the `<harmony>` elements of a MusicXML document or fragment and
/// render them as a chord chart.
///
/// `page_width` sets the SVG width in user units. Pass `None` to use the
/// default (820).
pub fn render_harmony_xml_to_svg(xml: &str, page_width: Option<f64>) -> Result<String> {
    let harmonies = parse_harmonies(xml)?;
    render_harmonies_to_svg(&harmonies, page_width)
}

/// Build one chord symbol per `<harmony>` element, in document order.
pub fn chord_symbols_from_xml(xml: &str) -> Result<Vec<ChordSymbol>> {
    parse_harmonies(xml)?
        .iter()
        .map(ChordSymbol::from_harmony)
        .collect()
}
