//! Data model for chord symbols read from MusicXML `<harmony>` elements.

use serde::{Deserialize, Serialize};

/// A chord symbol (harmony).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Harmony {
    /// Root note
    pub root: HarmonyRoot,
    /// Chord quality: "major", "minor", "dominant", "diminished", etc.
    pub kind: String,
    /// Bass note (for slash chords)
    pub bass: Option<HarmonyRoot>,
}

/// Root or bass note of a harmony.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonyRoot {
    /// Note name: A–G
    pub step: String,
    /// Alteration: -1 = flat, 1 = sharp
    pub alter: Option<f64>,
}

impl HarmonyRoot {
    pub fn new(step: impl Into<String>, alter: Option<f64>) -> Self {
        Self { step: step.into(), alter }
    }
}

impl Harmony {
    pub fn new(root: HarmonyRoot, kind: impl Into<String>) -> Self {
        Self { root, kind: kind.into(), bass: None }
    }

    pub fn with_bass(mut self, bass: HarmonyRoot) -> Self {
        self.bass = Some(bass);
        self
    }
}
