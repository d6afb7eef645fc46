//! Letter-shape kerning between adjacent blocks.

use super::{ChordSymbol, SymbolBlock, SymbolKind};
use crate::constants::*;

fn last_char(block: &SymbolBlock) -> Option<char> {
    block.text().and_then(|t| t.chars().last())
}

impl ChordSymbol {
    /// Horizontal correction for block `j`, from the shape of block `j`
    /// and the block before it. Zero when kerning is disabled.
    pub fn kerning_adjustment(&self, j: usize) -> f64 {
        if !self.kerning_enabled() {
            return 0.0;
        }
        let Some(symbol) = self.blocks.get(j) else {
            return 0.0;
        };
        let prev = j.checked_sub(1).and_then(|p| self.blocks.get(p));
        let mut rv = 0.0;

        // Move things into the '/' over bar
        if symbol.is_diagonal_slash() {
            rv += SLASH_KERNING;
        }
        if prev.is_some_and(SymbolBlock::is_diagonal_slash) {
            rv += SLASH_KERNING;
        }

        let prev_last = prev.and_then(last_char);
        let pre_kern_upper = prev_last.is_some_and(|c| UPPER_KERNING_TEXT.contains(&c));
        let pre_kern_lower = prev_last.is_some_and(|c| LOWER_KERNING_TEXT.contains(&c));

        // Superscripts after a letter with an open top ('A', 'L') tuck in
        if pre_kern_upper && symbol.is_superscript() {
            rv += SUPERSCRIPT_KERNING;
        }

        if pre_kern_lower {
            if let SymbolKind::Text { text } = &symbol.kind {
                if text.chars().next().is_some_and(|c| c.is_ascii_lowercase()) {
                    rv += LOWERCASE_KERNING;
                }
                if pre_kern_upper {
                    rv += UPPER_LOWER_KERNING;
                }
            }
        }

        rv
    }

    /// Add each block's kerning adjustment to its `x_offset`. Runs at most
    /// once per format cycle; later calls leave the offsets alone.
    pub fn update_kerning_adjustments(&mut self) {
        if self.kerned {
            return;
        }
        let adjustments: Vec<f64> = (0..self.blocks.len())
            .map(|j| self.kerning_adjustment(j))
            .collect();
        for (block, adj) in self.blocks.iter_mut().zip(adjustments) {
            block.x_offset += adj;
        }
        self.kerned = true;
        log::trace!("kerning applied to {} blocks", self.blocks.len());
    }
}
