//! Integration tests for chord symbol formatting: text rows, overlay,
//! kerning and the width handed back to note spacing.

use std::rc::Rc;

use chordlib::{
    format, ChordSymbol, ChordSymbolFont, LayoutGroupState, SymbolKind, SymbolModifier,
    TextMeasure, TextMetrics, VerticalJustify,
};
use float_cmp::approx_eq;
use pretty_assertions::assert_eq;

/// Every character measures 3, so every text block is 4 wide after the
/// 4/3 correction.
#[derive(Debug)]
struct FixedMeasure;

impl TextMeasure for FixedMeasure {
    fn measure(&self, text: &str, _font: &ChordSymbolFont) -> TextMetrics {
        TextMetrics { width: text.chars().count() as f64 * 3.0, height: 10.0 }
    }
}

fn symbol() -> ChordSymbol {
    ChordSymbol::with_measure(Rc::new(FixedMeasure))
}

fn offsets(cs: &ChordSymbol) -> Vec<f64> {
    cs.blocks().iter().map(|b| b.x_offset).collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Text rows
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn plain_symbols_advance_rows_by_one_above_and_two_below() {
    let mut above = symbol();
    above.add_text("C", SymbolModifier::None);
    let mut below = symbol();
    below.add_text("G", SymbolModifier::None).set_vertical(VerticalJustify::Bottom);

    let mut state = LayoutGroupState::default();
    format(&mut [above, below], &mut state);
    assert_eq!(state.top_text_line, 1);
    assert_eq!(state.text_line, 2);
}

#[test]
fn scripted_symbols_take_two_rows() {
    let mut a = symbol();
    a.add_text("C", SymbolModifier::None).add_text_superscript("7");
    let mut b = symbol();
    b.add_text("C", SymbolModifier::None).add_text_subscript("9");
    let mut c = symbol();
    c.add_text_superscript("7");

    let mut state = LayoutGroupState::default();
    let mut symbols = [a, b, c];
    format(&mut symbols, &mut state);
    assert_eq!(state.top_text_line, 6);
    let lines: Vec<_> = symbols.iter().map(|s| s.text_line()).collect();
    assert_eq!(lines, vec![Some(0), Some(2), Some(4)]);
}

#[test]
fn group_state_carries_over_between_calls() {
    let mut state = LayoutGroupState { top_text_line: 3, text_line: 1, ..Default::default() };

    let mut above = symbol();
    above.add_text("C", SymbolModifier::None);
    let mut below = symbol();
    below.add_text("C", SymbolModifier::None).set_vertical(VerticalJustify::Bottom);
    let mut symbols = [above, below];
    format(&mut symbols, &mut state);

    assert_eq!(symbols[0].text_line(), Some(3));
    assert_eq!(symbols[1].text_line(), Some(2));
    assert_eq!(state.top_text_line, 4);
    assert_eq!(state.text_line, 3);
}

// ═══════════════════════════════════════════════════════════════════════
// Width aggregation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn shift_does_not_depend_on_order() {
    let make = || {
        let mut a = symbol();
        a.add_text("Cmaj", SymbolModifier::None);
        let mut b = symbol();
        b.add_glyph_or_text("Bb7", SymbolModifier::None).set_vertical(VerticalJustify::Bottom);
        let mut c = symbol();
        c.add_text("D", SymbolModifier::None).add_glyph("#", SymbolModifier::None).unwrap();
        [a, b, c]
    };

    let mut forward = make();
    let expected: f64 = forward.iter().map(ChordSymbol::width).sum::<f64>() / 2.0;
    let mut state = LayoutGroupState::default();
    format(&mut forward, &mut state);
    assert!(approx_eq!(f64, state.left_shift, expected, epsilon = 1e-9));
    assert!(approx_eq!(f64, state.right_shift, expected, epsilon = 1e-9));

    let mut reversed = make();
    reversed.reverse();
    let mut state_rev = LayoutGroupState::default();
    format(&mut reversed, &mut state_rev);
    assert!(approx_eq!(f64, state_rev.left_shift, expected, epsilon = 1e-9));
}

#[test]
fn f7_sharp11_flat9_scenario() {
    let mut cs = ChordSymbol::new();
    cs.add_text("F7", SymbolModifier::None)
        .add_glyph_or_text("(#11b9)", SymbolModifier::Superscript);
    assert_eq!(cs.blocks().len(), 7);

    let expected_width = cs.width();
    let mut symbols = [cs];
    let mut state = LayoutGroupState::default();
    assert!(format(&mut symbols, &mut state));

    // superscripts take two rows
    assert_eq!(state.top_text_line, 2);
    assert!(approx_eq!(f64, state.left_shift * 2.0, expected_width, epsilon = 1e-9));
    // no subscripts, so nothing was stacked and kerning stays on
    assert!(symbols[0].kerning_enabled());
    assert!(offsets(&symbols[0]).iter().all(|&o| o == 0.0));
}

// ═══════════════════════════════════════════════════════════════════════
// Overlay and kerning
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn six_four_inversion_is_stacked() {
    let mut cs = symbol();
    cs.add_text("I", SymbolModifier::None)
        .add_text_superscript("6")
        .add_text_subscript("4");
    let mut symbols = [cs];
    let mut state = LayoutGroupState::default();
    format(&mut symbols, &mut state);

    let cs = &symbols[0];
    // the subscript starts where the superscript started (x = 4),
    // i.e. one superscript width back from its natural position (x = 8)
    assert_eq!(offsets(cs), vec![0.0, 0.0, -4.0]);
    assert!(!cs.kerning_enabled());
    // 'I' before a superscript would normally kern by -2; stacking turned it off
    assert_eq!(cs.kerning_adjustment(1), 0.0);
    assert_eq!(state.top_text_line, 2);
    // the walk ends at the width before the superscript ("I"), not the
    // per-block sum of 12
    assert_eq!(cs.width(), 12.0);
    assert_eq!(state.left_shift, 2.0);
    assert_eq!(state.right_shift, 2.0);
}

#[test]
fn slash_nudges_sum_with_kerning() {
    let mut cs = symbol();
    cs.add_glyph_or_text("C/E", SymbolModifier::None);
    let mut symbols = [cs];
    format(&mut symbols, &mut LayoutGroupState::default());
    // -2 from the formatter and -2 from kerning, on the slash and on 'E'
    assert_eq!(offsets(&symbols[0]), vec![0.0, -4.0, -4.0]);
}

#[test]
fn slash_nudges_without_kerning() {
    let mut cs = symbol();
    cs.add_glyph_or_text("C/E", SymbolModifier::None).set_enable_kerning(false);
    let mut symbols = [cs];
    format(&mut symbols, &mut LayoutGroupState::default());
    assert_eq!(offsets(&symbols[0]), vec![0.0, -2.0, -2.0]);
}

#[test]
fn slash_followed_by_stacked_scripts() {
    // C/E with a 6/4 stacked after the bass note
    let mut cs = symbol();
    cs.add_glyph_or_text("C/E", SymbolModifier::None)
        .add_text_superscript("6")
        .add_text_subscript("4");
    let mut symbols = [cs];
    let mut state = LayoutGroupState::default();
    format(&mut symbols, &mut state);

    let cs = &symbols[0];
    let slash_width = cs.blocks()[1].width;
    // the overlay overwrites the subscript offset; the slash nudges stay
    // formatter-only because stacking turns kerning off for the whole symbol
    assert_eq!(offsets(cs), vec![0.0, -2.0, -2.0, 0.0, -4.0]);
    assert!(!cs.kerning_enabled());
    assert!(approx_eq!(f64, state.left_shift * 2.0, 8.0 + slash_width, epsilon = 1e-9));
}

#[test]
fn kerning_on_letters() {
    let mut a = symbol();
    a.add_text("A", SymbolModifier::None).add_text_superscript("7");
    let mut f = symbol();
    f.add_text("F", SymbolModifier::None).add_text("m", SymbolModifier::None);
    let mut i = symbol();
    i.add_text("I", SymbolModifier::None).add_text("m", SymbolModifier::None);
    let mut symbols = [a, f, i];
    format(&mut symbols, &mut LayoutGroupState::default());

    assert_eq!(offsets(&symbols[0]), vec![0.0, -2.0]);
    assert_eq!(offsets(&symbols[1]), vec![0.0, -1.0]);
    assert_eq!(offsets(&symbols[2]), vec![0.0, -2.0]);
}

#[test]
fn kerning_pass_does_not_double_apply() {
    let mut cs = symbol();
    cs.add_text("A", SymbolModifier::None).add_text_superscript("7");
    let mut symbols = [cs];
    format(&mut symbols, &mut LayoutGroupState::default());
    symbols[0].update_kerning_adjustments();
    assert_eq!(offsets(&symbols[0]), vec![0.0, -2.0]);
}

#[test]
fn reformatting_gives_identical_layout() {
    let make = || {
        let mut a = symbol();
        a.add_glyph_or_text("F/A", SymbolModifier::None);
        let mut b = symbol();
        b.add_text("I", SymbolModifier::None)
            .add_text_superscript("6")
            .add_text_subscript("4")
            .set_vertical(VerticalJustify::Bottom);
        [a, b]
    };
    let mut symbols = make();

    let mut first = LayoutGroupState::default();
    format(&mut symbols, &mut first);
    let snapshot: Vec<Vec<f64>> = symbols.iter().map(offsets).collect();
    let lines: Vec<_> = symbols.iter().map(|s| s.text_line()).collect();

    let mut second = LayoutGroupState::default();
    format(&mut symbols, &mut second);
    assert_eq!(symbols.iter().map(offsets).collect::<Vec<_>>(), snapshot);
    assert_eq!(symbols.iter().map(|s| s.text_line()).collect::<Vec<_>>(), lines);
    assert_eq!(first, second);
}

// ═══════════════════════════════════════════════════════════════════════
// Block construction
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn shorthand_runs_keep_reading_order() {
    let mut cs = ChordSymbol::new();
    cs.add_glyph_or_text("(#11b9)", SymbolModifier::None);
    let kinds: Vec<String> = cs
        .blocks()
        .iter()
        .map(|b| match &b.kind {
            SymbolKind::Text { text } => format!("\"{text}\""),
            SymbolKind::Glyph { glyph } => glyph.code.to_string(),
            SymbolKind::Line => "line".to_string(),
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            "csymParensLeftTall",
            "accidentalSharp",
            "\"11\"",
            "accidentalFlat",
            "\"9\"",
            "csymParensRightTall",
        ]
    );
}

#[test]
fn json_export_after_format() {
    let mut cs = symbol();
    cs.add_glyph_or_text("C/E", SymbolModifier::None);
    let mut symbols = [cs];
    format(&mut symbols, &mut LayoutGroupState::default());
    let json: serde_json::Value = serde_json::from_str(&symbols[0].to_json().unwrap()).unwrap();
    assert_eq!(json["text_line"], 0);
    assert_eq!(json["blocks"][1]["kind"]["type"], "glyph");
    assert_eq!(json["blocks"][1]["x_offset"], -4.0);
    assert_eq!(json["vertical"], "top");
}
