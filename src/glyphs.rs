//! Chord symbol glyph catalog.
//!
//! Glyph names used by chord symbols (including single-character
//! shorthands such as `#` or `/`) resolve to an entry holding the SMuFL
//! code point name and a VexFlow-style outline: a whitespace-separated
//! command string (`m x y`, `l x y`, `q ex ey cx cy`, `b ex ey c1x c1y c2x c2y`)
//! in font units with the y-axis pointing up.

use serde::Serialize;

use crate::constants::GLYPH_RESOLUTION;
use crate::error::{ChordSymbolError, Result};

// ═══════════════════════════════════════════════════════════════════════
// Outlines
// ═══════════════════════════════════════════════════════════════════════

const SHARP_OUTLINE: &str = "m 60 -350 l 60 300 l 84 300 l 84 -350 \
m 166 -300 l 166 350 l 190 350 l 190 -300 \
m 0 -150 l 250 -80 l 250 -20 l 0 -90 \
m 0 70 l 250 140 l 250 200 l 0 130";

const FLAT_OUTLINE: &str = "m 0 -180 l 0 520 l 24 520 l 24 -20 \
b 190 40 90 120 190 80 b 0 -180 190 -20 120 -120";

const PARENS_LEFT_TALL_OUTLINE: &str = "m 200 -250 b 200 750 -40 0 -40 500 \
l 230 730 b 230 -230 30 500 30 0";

const PARENS_RIGHT_TALL_OUTLINE: &str = "m 30 -250 b 30 750 270 0 270 500 \
l 0 730 b 0 -230 200 500 200 0";

const PARENS_LEFT_VERY_TALL_OUTLINE: &str = "m 240 -500 b 240 1000 -60 0 -60 500 \
l 270 980 b 270 -480 30 500 30 0";

const PARENS_RIGHT_VERY_TALL_OUTLINE: &str = "m 30 -500 b 30 1000 330 0 330 500 \
l 0 980 b 0 -480 240 500 240 0";

const BRACKET_LEFT_TALL_OUTLINE: &str =
    "m 0 -250 l 0 750 l 180 750 l 180 710 l 50 710 l 50 -210 l 180 -210 l 180 -250";

const BRACKET_RIGHT_TALL_OUTLINE: &str =
    "m 180 -250 l 180 750 l 0 750 l 0 710 l 130 710 l 130 -210 l 0 -210 l 0 -250";

const DIAGONAL_SLASH_OUTLINE: &str = "m 0 -250 l 420 750 l 470 750 l 50 -250";

const DIMINISHED_OUTLINE: &str = "m 20 250 b 250 480 20 377 123 480 \
b 480 250 377 480 480 377 b 250 20 480 123 377 20 b 20 250 123 20 20 123 \
m 70 250 b 250 430 70 350 150 430 b 430 250 350 430 430 350 \
b 250 70 430 150 350 70 b 70 250 150 70 70 150";

const HALF_DIMINISHED_OUTLINE: &str = "m 20 250 b 250 480 20 377 123 480 \
b 480 250 377 480 480 377 b 250 20 480 123 377 20 b 20 250 123 20 20 123 \
m 70 250 b 250 430 70 350 150 430 b 430 250 350 430 430 350 \
b 250 70 430 150 350 70 b 70 250 150 70 70 150 \
m 0 0 l 460 500 l 500 500 l 40 0";

const AUGMENTED_OUTLINE: &str = "m 160 80 l 160 230 l 10 230 l 10 290 l 160 290 \
l 160 440 l 220 440 l 220 290 l 370 290 l 370 230 l 220 230 l 220 80";

const MAJOR_SEVENTH_OUTLINE: &str = "m 0 0 l 250 430 l 500 0 m 80 45 l 420 45 l 250 340";

const MINOR_OUTLINE: &str = "m 0 220 l 300 220 l 300 280 l 0 280";

// ═══════════════════════════════════════════════════════════════════════
// Catalog
// ═══════════════════════════════════════════════════════════════════════

/// One renderable glyph: SMuFL name, outline and chord-symbol metrics.
#[derive(Debug, PartialEq)]
pub struct GlyphEntry {
    pub code: &'static str,
    pub outline: &'static str,
    /// Point-size multiplier applied on top of the requested size.
    pub scale: f64,
    /// Vertical nudge applied when drawing.
    pub y_shift: f64,
}

pub static ACCIDENTAL_SHARP: GlyphEntry = GlyphEntry {
    code: "accidentalSharp",
    outline: SHARP_OUTLINE,
    scale: 1.0,
    y_shift: -3.0,
};

pub static ACCIDENTAL_FLAT: GlyphEntry = GlyphEntry {
    code: "accidentalFlat",
    outline: FLAT_OUTLINE,
    scale: 1.0,
    y_shift: -3.0,
};

pub static PARENS_LEFT_TALL: GlyphEntry = GlyphEntry {
    code: "csymParensLeftTall",
    outline: PARENS_LEFT_TALL_OUTLINE,
    scale: 1.0,
    y_shift: 0.0,
};

pub static PARENS_RIGHT_TALL: GlyphEntry = GlyphEntry {
    code: "csymParensRightTall",
    outline: PARENS_RIGHT_TALL_OUTLINE,
    scale: 1.0,
    y_shift: 0.0,
};

pub static PARENS_LEFT_VERY_TALL: GlyphEntry = GlyphEntry {
    code: "csymParensLeftVeryTall",
    outline: PARENS_LEFT_VERY_TALL_OUTLINE,
    scale: 1.0,
    y_shift: 0.0,
};

pub static PARENS_RIGHT_VERY_TALL: GlyphEntry = GlyphEntry {
    code: "csymParensRightVeryTall",
    outline: PARENS_RIGHT_VERY_TALL_OUTLINE,
    scale: 1.0,
    y_shift: 0.0,
};

pub static BRACKET_LEFT_TALL: GlyphEntry = GlyphEntry {
    code: "csymBracketLeftTall",
    outline: BRACKET_LEFT_TALL_OUTLINE,
    scale: 1.0,
    y_shift: 0.0,
};

pub static BRACKET_RIGHT_TALL: GlyphEntry = GlyphEntry {
    code: "csymBracketRightTall",
    outline: BRACKET_RIGHT_TALL_OUTLINE,
    scale: 1.0,
    y_shift: 0.0,
};

/// The slash used for slash chords (`C/E`); the formatter and the
/// kerning pass both treat it specially.
pub static DIAGONAL_ARRANGEMENT_SLASH: GlyphEntry = GlyphEntry {
    code: "csymDiagonalArrangementSlash",
    outline: DIAGONAL_SLASH_OUTLINE,
    scale: 1.0,
    y_shift: 0.0,
};

pub static DIMINISHED: GlyphEntry = GlyphEntry {
    code: "csymDiminished",
    outline: DIMINISHED_OUTLINE,
    scale: 0.8,
    y_shift: 0.0,
};

pub static HALF_DIMINISHED: GlyphEntry = GlyphEntry {
    code: "csymHalfDiminished",
    outline: HALF_DIMINISHED_OUTLINE,
    scale: 0.8,
    y_shift: 0.0,
};

pub static AUGMENTED: GlyphEntry = GlyphEntry {
    code: "csymAugmented",
    outline: AUGMENTED_OUTLINE,
    scale: 0.8,
    y_shift: 0.0,
};

pub static MAJOR_SEVENTH: GlyphEntry = GlyphEntry {
    code: "csymMajorSeventh",
    outline: MAJOR_SEVENTH_OUTLINE,
    scale: 0.8,
    y_shift: 0.0,
};

pub static MINOR: GlyphEntry = GlyphEntry {
    code: "csymMinor",
    outline: MINOR_OUTLINE,
    scale: 0.8,
    y_shift: 0.0,
};

/// Resolve a chord symbol glyph name (or shorthand) to its catalog entry.
pub fn lookup(name: &str) -> Result<&'static GlyphEntry> {
    let entry = match name {
        "diminished" | "dim" => &DIMINISHED,
        "halfDiminished" => &HALF_DIMINISHED,
        "+" | "augmented" => &AUGMENTED,
        "majorSeventh" => &MAJOR_SEVENTH,
        "minor" | "-" => &MINOR,
        "(" | "leftParen" => &PARENS_LEFT_TALL,
        ")" | "rightParen" => &PARENS_RIGHT_TALL,
        "leftBracket" => &BRACKET_LEFT_TALL,
        "rightBracket" => &BRACKET_RIGHT_TALL,
        "leftParenTall" => &PARENS_LEFT_VERY_TALL,
        "rightParenTall" => &PARENS_RIGHT_VERY_TALL,
        "/" | "over" => &DIAGONAL_ARRANGEMENT_SLASH,
        "#" => &ACCIDENTAL_SHARP,
        "b" => &ACCIDENTAL_FLAT,
        _ => return Err(ChordSymbolError::UnknownGlyphName(name.to_string())),
    };
    Ok(entry)
}

/// The catalog entry a single character stands for (`#`, `b`, `(`, `/`, ...),
/// if it is a glyph shorthand.
pub fn shorthand(c: char) -> Option<&'static GlyphEntry> {
    let mut buf = [0u8; 4];
    lookup(c.encode_utf8(&mut buf)).ok()
}

// ═══════════════════════════════════════════════════════════════════════
// Sized glyph
// ═══════════════════════════════════════════════════════════════════════

/// Axis-aligned bounds of an outline, in the units it was measured in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Rendered width and height of a glyph at its point size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMetrics {
    pub width: f64,
    pub height: f64,
}

/// A catalog glyph at a concrete point size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Glyph {
    pub code: &'static str,
    pub point: f64,
    #[serde(skip)]
    entry: &'static GlyphEntry,
}

impl Glyph {
    /// Size a catalog entry; the entry's own scale is folded into `point`.
    pub fn new(entry: &'static GlyphEntry, point: f64) -> Self {
        Self {
            code: entry.code,
            point: point * entry.scale,
            entry,
        }
    }

    pub fn outline(&self) -> &'static str {
        self.entry.outline
    }

    pub fn y_shift(&self) -> f64 {
        self.entry.y_shift
    }

    /// Font units → user units.
    pub fn scale(&self) -> f64 {
        (self.point * 72.0) / (GLYPH_RESOLUTION * 100.0)
    }

    /// Bounds of the outline in user units (y still pointing up).
    pub fn bbox(&self) -> BoundingBox {
        let s = self.scale();
        let (min_x, min_y, max_x, max_y) = outline_bounds(self.entry.outline);
        BoundingBox {
            x: min_x * s,
            y: min_y * s,
            w: (max_x - min_x) * s,
            h: (max_y - min_y) * s,
        }
    }

    pub fn metrics(&self) -> GlyphMetrics {
        let bbox = self.bbox();
        GlyphMetrics {
            width: bbox.w,
            height: bbox.h,
        }
    }

    pub fn is_diagonal_slash(&self) -> bool {
        std::ptr::eq(self.entry, &DIAGONAL_ARRANGEMENT_SLASH)
    }
}

/// Min/max over every coordinate pair in an outline, control points
/// included. Returns all zeros for an empty outline.
fn outline_bounds(outline: &str) -> (f64, f64, f64, f64) {
    let tokens: Vec<&str> = outline.split_whitespace().collect();
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    let mut i = 0;

    while i < tokens.len() {
        let pairs = match tokens[i] {
            "m" | "l" => 1,
            "q" => 2,
            "b" => 3,
            _ => {
                i += 1;
                continue;
            }
        };
        for p in 0..pairs {
            let xi = i + 1 + p * 2;
            if xi + 1 >= tokens.len() {
                break;
            }
            let x: f64 = tokens[xi].parse().unwrap_or(0.0);
            let y: f64 = tokens[xi + 1].parse().unwrap_or(0.0);
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
        i += 1 + pairs * 2;
    }

    if min_x > max_x {
        return (0.0, 0.0, 0.0, 0.0);
    }
    (min_x, min_y, max_x, max_y)
}
