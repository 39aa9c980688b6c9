//! Categories for colourizing ABC notation

use serde::Serialize;

use crate::language::Length;

/// Types of content that can be rendered with different styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Syntax {
    PlainText, // default
    Newline,
    Bar,
    Accidental,
    Note,
    Duration(Length),
    Rest,
    RestInvisible,
    Tie { dotted: bool },
    Ornament,
    Slur(u8),
    Tuplet,
    Chord,
    ChordSymbol,
    Decoration,
    GraceNote,
    Annotation,
    InlineField,
    VoltaBracket,
    BrokenRhythm,
    MetaKey,
    MetaValue,
    LyricsKey,
    LyricsValue,
    Comment,
}

/// Trait for different rendering backends (the no-op no-markup one, HTML
/// class spans for editors, ANSI escapes for terminal colouring)
pub trait Render {
    /// Apply styling to content with the specified syntax type
    fn style(&self, syntax: Syntax, content: &str) -> String;
}

/// Returns content unchanged, with no markup applied
pub struct Identity;

impl Render for Identity {
    fn style(&self, _syntax: Syntax, content: &str) -> String {
        content.to_string()
    }
}
