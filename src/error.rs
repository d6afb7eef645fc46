//! Error type shared by block construction, rendering and harmony import.

use thiserror::Error;

/// Everything that can go wrong while building or drawing a chord symbol.
/// Formatting itself never fails.
#[derive(Debug, Error)]
pub enum ChordSymbolError {
    /// A glyph name (or single-character shorthand) is not in the catalog.
    #[error("unknown chord symbol glyph '{0}'")]
    UnknownGlyphName(String),

    /// `draw` was called on a chord symbol that was never attached to a note.
    #[error("can't draw chord symbol without an attached note")]
    MissingNoteBinding,

    /// A justification string did not match any known alias.
    #[error("unknown justification '{0}'")]
    UnknownJustification(String),

    /// The MusicXML fragment handed to the harmony importer is malformed.
    #[error("XML parse error: {0}")]
    Xml(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChordSymbolError>;
