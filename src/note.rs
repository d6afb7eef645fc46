//! Note and staff geometry consumed when drawing a chord symbol.
//!
//! The layout engine only reads geometry; [`StaveNote`] is a plain-data
//! implementation driven by the staff constants, enough for standalone
//! charts and tests. Hosts with their own engraving model implement
//! [`NoteGeometry`] directly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemDirection {
    Up,
    Down,
}

/// Vertical extent of a stem. `top_y` is the tip end, `base_y` the
/// notehead end, whichever way the stem points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StemExtents {
    pub top_y: f64,
    pub base_y: f64,
}

/// Read-only geometry of the note a chord symbol is attached to.
pub trait NoteGeometry: fmt::Debug {
    /// Stem direction and extents, or `None` for stemless notes.
    fn stem(&self) -> Option<(StemDirection, StemExtents)>;
    fn stem_x(&self) -> f64;
    fn spacing_between_lines(&self) -> f64;
    /// y coordinate of the `line`-th text row above the staff.
    fn y_for_top_text(&self, line: usize) -> f64;
    /// y coordinate of the `line`-th text row below the staff.
    fn y_for_bottom_text(&self, line: usize) -> f64;
    /// Notehead y coordinates, one per key.
    fn ys(&self) -> &[f64];
    /// Left x where above/below modifiers attached at `index` start.
    fn modifier_start_x(&self, index: usize) -> f64;
}

// ═══════════════════════════════════════════════════════════════════════
// Stave
// ═══════════════════════════════════════════════════════════════════════

/// A five-line staff at a given top y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stave {
    pub y: f64,
    pub spacing: f64,
}

impl Stave {
    pub fn new(y: f64) -> Self {
        Self {
            y,
            spacing: STAFF_LINE_SPACING,
        }
    }

    /// y of staff line `line` (0 = top line); fractional and negative lines allowed.
    pub fn y_for_line(&self, line: f64) -> f64 {
        self.y + line * self.spacing + SPACE_ABOVE_STAFF_LINES * self.spacing
    }

    pub fn top_line_y(&self) -> f64 {
        self.y_for_line(0.0)
    }

    pub fn bottom_line_y(&self) -> f64 {
        self.y_for_line((STAFF_LINE_COUNT - 1) as f64)
    }

    /// y for a note at `position` staff steps above the bottom line
    /// (0 = bottom line, 1 = first space, ...).
    pub fn y_for_position(&self, position: f64) -> f64 {
        self.bottom_line_y() - position * self.spacing / 2.0
    }
}

// ═══════════════════════════════════════════════════════════════════════
// StaveNote
// ═══════════════════════════════════════════════════════════════════════

/// A chord of noteheads on a stave, with an optional stem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaveNote {
    pub stave: Stave,
    /// Left edge of the noteheads.
    pub x: f64,
    pub head_width: f64,
    /// Notehead y coordinates, top to bottom.
    pub ys: Vec<f64>,
    pub stem: Option<StemDirection>,
}

impl StaveNote {
    /// Build a note from staff positions (see [`Stave::y_for_position`]).
    /// The stem points down when the average position is on or above the
    /// middle line.
    pub fn new(stave: Stave, x: f64, positions: &[f64], stemmed: bool) -> Self {
        let mut ys: Vec<f64> = positions.iter().map(|&p| stave.y_for_position(p)).collect();
        ys.sort_by(|a, b| a.total_cmp(b));

        let stem = if stemmed && !positions.is_empty() {
            let avg = positions.iter().sum::<f64>() / positions.len() as f64;
            if avg >= 4.0 {
                Some(StemDirection::Down)
            } else {
                Some(StemDirection::Up)
            }
        } else {
            None
        };

        Self {
            stave,
            x,
            head_width: NOTEHEAD_WIDTH,
            ys,
            stem,
        }
    }

    fn highest_y(&self) -> f64 {
        self.ys.first().copied().unwrap_or(self.stave.top_line_y())
    }

    fn lowest_y(&self) -> f64 {
        self.ys.last().copied().unwrap_or(self.stave.bottom_line_y())
    }
}

impl NoteGeometry for StaveNote {
    fn stem(&self) -> Option<(StemDirection, StemExtents)> {
        let direction = self.stem?;
        let extents = match direction {
            StemDirection::Up => StemExtents {
                top_y: self.highest_y() - STEM_LENGTH,
                base_y: self.lowest_y(),
            },
            StemDirection::Down => StemExtents {
                top_y: self.lowest_y() + STEM_LENGTH,
                base_y: self.highest_y(),
            },
        };
        Some((direction, extents))
    }

    fn stem_x(&self) -> f64 {
        match self.stem {
            Some(StemDirection::Up) => self.x + self.head_width,
            _ => self.x,
        }
    }

    fn spacing_between_lines(&self) -> f64 {
        self.stave.spacing
    }

    fn y_for_top_text(&self, line: usize) -> f64 {
        self.stave.y_for_line(-(line as f64) - TOP_TEXT_POSITION)
    }

    fn y_for_bottom_text(&self, line: usize) -> f64 {
        self.stave.y_for_line(BOTTOM_TEXT_POSITION + line as f64)
    }

    fn ys(&self) -> &[f64] {
        &self.ys
    }

    fn modifier_start_x(&self, _index: usize) -> f64 {
        self.x + self.head_width / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stave_lines() {
        let stave = Stave::new(10.0);
        assert_eq!(stave.top_line_y(), 50.0);
        assert_eq!(stave.bottom_line_y(), 90.0);
        assert_eq!(stave.y_for_position(2.0), 80.0);
    }

    #[test]
    fn text_rows_move_away_from_staff() {
        let note = StaveNote::new(Stave::new(0.0), 100.0, &[2.0], false);
        assert_eq!(note.y_for_top_text(0), 30.0);
        assert_eq!(note.y_for_top_text(1), 20.0);
        assert_eq!(note.y_for_bottom_text(0), 90.0);
        assert_eq!(note.y_for_bottom_text(2), 110.0);
    }

    #[test]
    fn stem_direction_follows_middle_line() {
        let low = StaveNote::new(Stave::new(0.0), 0.0, &[0.0, 2.0], true);
        assert_eq!(low.stem.unwrap(), StemDirection::Up);
        let (_, ext) = low.stem().unwrap();
        // bottom line at 80, first-space notehead at 70
        assert_eq!(ext.base_y, 80.0);
        assert_eq!(ext.top_y, 70.0 - STEM_LENGTH);
        assert_eq!(low.stem_x(), NOTEHEAD_WIDTH);

        let high = StaveNote::new(Stave::new(0.0), 0.0, &[6.0], true);
        assert_eq!(high.stem.unwrap(), StemDirection::Down);
        let (_, ext) = high.stem().unwrap();
        assert_eq!(ext.base_y, 50.0);
        assert_eq!(ext.top_y, 85.0);
        assert_eq!(high.stem_x(), 0.0);
    }

    #[test]
    fn stemless_note() {
        let whole = StaveNote::new(Stave::new(0.0), 0.0, &[4.0], false);
        assert!(whole.stem().is_none());
        assert_eq!(whole.modifier_start_x(0), NOTEHEAD_WIDTH / 2.0);
    }
}
