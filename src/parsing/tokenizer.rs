//! Span tokenizer for lines of ABC notation

use tracing::trace;

use crate::formatting::Syntax;
use crate::language::*;

/// The three kinds of line found in an ABC file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'i> {
    Comment(&'i str),
    Field { key: &'i str, value: &'i str },
    Music(&'i str),
}

pub fn classify_line(line: &str) -> Line<'_> {
    if is_comment_line(line) {
        return Line::Comment(line);
    }
    match match_field(line) {
        Some((key, value)) => Line::Field { key, value },
        None => Line::Music(line),
    }
}

/// Break one line into classified spans. Concatenating the text of the
/// returned spans reproduces the line exactly.
pub fn tokenize_line(number: usize, line: &str) -> Vec<Span<'_>> {
    let mut input = Tokenizer::new(number, line);

    match classify_line(line) {
        Line::Comment(content) => {
            input.take(Syntax::Comment, content.len());
        }
        Line::Field { key, .. } => {
            let (left, right) = if is_lyrics_key(key) {
                (Syntax::LyricsKey, Syntax::LyricsValue)
            } else {
                (Syntax::MetaKey, Syntax::MetaValue)
            };
            input.take(left, key.len());
            if !input.is_finished() {
                input.take(right, input.remaining());
            }
        }
        Line::Music(_) => {
            while !input.is_finished() {
                input.read_token();
            }
        }
    }

    input.spans
}

#[derive(Debug)]
struct Tokenizer<'i> {
    source: &'i str,
    line: usize,
    column: usize,
    level: usize,
    spans: Vec<Span<'i>>,
}

impl<'i> Tokenizer<'i> {
    fn new(line: usize, content: &'i str) -> Tokenizer<'i> {
        Tokenizer {
            source: content,
            line,
            column: 0,
            level: 0,
            spans: Vec::new(),
        }
    }

    fn is_finished(&self) -> bool {
        self.source
            .is_empty()
    }

    fn remaining(&self) -> usize {
        self.source
            .len()
    }

    fn peek_next_char(&self) -> Option<char> {
        self.source
            .chars()
            .next()
    }

    /// Emit a span of the given width (in bytes) and advance past it.
    fn take(&mut self, syntax: Syntax, width: usize) {
        let text = &self.source[..width];
        let count = text
            .chars()
            .count();

        self.spans
            .push(Span {
                syntax,
                text,
                line: self.line,
                start: self.column,
                end: self.column + count,
            });

        self.source = &self.source[width..];
        self.column += count;
    }

    fn take_matching(&mut self, syntax: Syntax, matcher: fn(&str) -> Option<usize>) -> bool {
        match matcher(self.source) {
            Some(width) if width > 0 => {
                self.take(syntax, width);
                true
            }
            _ => false,
        }
    }

    /// Try each recognizer in turn; the first to match wins. Anything not
    /// recognized becomes a single character of plain text.
    fn read_token(&mut self) {
        let found = self.take_matching(Syntax::Bar, match_bar)
            || self.take_matching(Syntax::Decoration, match_decoration)
            || self.take_matching(Syntax::GraceNote, match_grace_note)
            || self.take_matching(Syntax::Accidental, match_accidental)
            || self.take_matching(Syntax::Ornament, match_ornament)
            || self.take_matching(Syntax::Annotation, match_annotation)
            || self.take_matching(Syntax::ChordSymbol, match_chord_symbol)
            || self.take_tuplet_or_slur()
            || self.take_rest()
            || self.take_note()
            || self.take_matching(Syntax::BrokenRhythm, match_broken_rhythm)
            || self.take_matching(Syntax::InlineField, match_inline_field)
            || self.take_matching(Syntax::VoltaBracket, match_volta_bracket)
            || self.take_chord_bracket()
            || self.take_tie()
            || self.take_matching(Syntax::Comment, match_comment);

        if !found {
            self.take_plain();
        }
    }

    fn take_plain(&mut self) {
        if let Some(c) = self.peek_next_char() {
            self.take(Syntax::PlainText, c.len_utf8());
        }
    }

    /// Slur colours cycle through five levels. An opening paren takes the
    /// level before it is incremented, a closing one the level after it is
    /// decremented.
    fn take_tuplet_or_slur(&mut self) -> bool {
        if self.take_matching(Syntax::Tuplet, match_tuplet) {
            return true;
        }

        match self.peek_next_char() {
            Some('(') => {
                let level = (self.level % 5) as u8;
                self.level += 1;
                self.take(Syntax::Slur(level), 1);
                true
            }
            Some(')') => {
                self.level = self
                    .level
                    .saturating_sub(1);
                let level = (self.level % 5) as u8;
                self.take(Syntax::Slur(level), 1);
                true
            }
            _ => false,
        }
    }

    fn take_rest(&mut self) -> bool {
        let syntax = if is_invisible_rest(self.source) {
            Syntax::RestInvisible
        } else {
            Syntax::Rest
        };

        if self.take_matching(syntax, match_rest) {
            self.take_duration();
            true
        } else {
            false
        }
    }

    fn take_note(&mut self) -> bool {
        if self.take_matching(Syntax::Note, match_note) {
            self.take_duration();
            true
        } else {
            false
        }
    }

    fn take_duration(&mut self) {
        if let Some(duration) = parse_duration(self.source) {
            trace!(?duration);
            self.take(Syntax::Duration(duration.length), duration.width);
        }
    }

    /// A closing bracket can carry a duration for the chord as a whole.
    fn take_chord_bracket(&mut self) -> bool {
        let closing = self
            .source
            .starts_with(']');

        if self.take_matching(Syntax::Chord, match_chord_bracket) {
            if closing {
                self.take_duration();
            }
            true
        } else {
            false
        }
    }

    fn take_tie(&mut self) -> bool {
        let dotted = self
            .source
            .starts_with('.');
        self.take_matching(Syntax::Tie { dotted }, match_tie)
    }
}
