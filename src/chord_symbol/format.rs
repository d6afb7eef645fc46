//! Group formatting: text-line slots, super/subscript overlay and the
//! horizontal space a note must reserve for its chord symbols.

use serde::{Deserialize, Serialize};

use super::{ChordSymbol, VerticalJustify};
use crate::constants::SLASH_KERNING;

/// Running state shared by every modifier formatted around one note.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutGroupState {
    /// Next free text row above the staff.
    pub top_text_line: usize,
    /// Last used text row below the staff.
    pub text_line: usize,
    pub left_shift: f64,
    pub right_shift: f64,
}

/// Result of walking one chord symbol's blocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BlockRun {
    pub(crate) width: f64,
    /// Text rows the symbol occupies.
    pub(crate) line_spaces: usize,
}

impl ChordSymbol {
    /// Walk the blocks left to right: count text rows, nudge slash-chord
    /// blocks, and stack a subscript under the superscript run before it.
    pub(crate) fn layout_blocks(&mut self) -> BlockRun {
        let mut line_spaces = 1;
        let mut width = 0.0;
        let mut non_super_width = 0.0;

        for j in 0..self.blocks.len() {
            let prev_is_slash = j > 0 && self.blocks[j - 1].is_diagonal_slash();
            let prev_is_super = j > 0 && self.blocks[j - 1].is_superscript();
            let symbol = &mut self.blocks[j];
            let sup = symbol.is_superscript();
            let sub = symbol.is_subscript();

            // Super/subscripts stick out of the line, so assume two rows
            if sup || sub {
                line_spaces = 2;
            }

            if symbol.is_diagonal_slash() {
                line_spaces = 2;
                symbol.x_offset += SLASH_KERNING;
            }
            if prev_is_slash {
                symbol.x_offset += SLASH_KERNING;
            }

            if sup && j > 0 && !prev_is_super {
                non_super_width = width;
            }
            if sub && non_super_width > 0.0 {
                // Slide back so the subscript starts where the superscript run did
                symbol.x_offset = non_super_width - width;
                width = non_super_width - symbol.width;
                non_super_width = 0.0;
                self.stacked = true;
            }
            if !sup && !sub {
                non_super_width = 0.0;
            }
            width += symbol.width;
        }

        BlockRun { width, line_spaces }
    }
}

/// Format every chord symbol attached to one note.
///
/// Symbols are handled in slice order: each one gets its block offsets,
/// kerning and a text row (rows above and below the staff are counted
/// separately in `state`). Half of the combined width is added to both
/// shifts of `state`. Returns `false` when there is nothing to format.
///
/// Re-formatting the same symbols starts over from their intrinsic widths.
pub fn format(instances: &mut [ChordSymbol], state: &mut LayoutGroupState) -> bool {
    if instances.is_empty() {
        return false;
    }

    let mut width = 0.0;

    for instance in instances.iter_mut() {
        instance.reset_layout();
        let run = instance.layout_blocks();
        width += run.width;

        // make kerning adjustments after computing super/subscripts
        instance.update_kerning_adjustments();

        let line = match instance.vertical {
            VerticalJustify::Top => {
                let line = state.top_text_line;
                state.top_text_line += run.line_spaces;
                line
            }
            VerticalJustify::Bottom => {
                let line = state.text_line + 1;
                state.text_line += run.line_spaces + 1;
                line
            }
        };
        instance.text_line = Some(line);

        log::debug!(
            "chord symbol formatted: {} blocks, width {:.1}, line {} ({:?}, {} rows)",
            instance.blocks.len(),
            run.width,
            line,
            instance.vertical,
            run.line_spaces
        );
    }

    state.left_shift += width / 2.0;
    state.right_shift += width / 2.0;
    true
}
