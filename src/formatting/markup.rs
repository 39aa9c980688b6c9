//! HTML markup for highlighting ABC notation in an editor or web page

use std::borrow::Cow;

use crate::formatting::*;
use crate::language::Length;

/// Wrap each span in a `<span>` element carrying `abc-*` class names for a
/// stylesheet to colour. Plain text and line breaks are emitted unwrapped.
pub struct Markup;

impl Render for Markup {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        let content = escape(content);
        match classes(syntax) {
            Some(class) => format!(r#"<span class="{}">{}</span>"#, class, content),
            None => content.into_owned(),
        }
    }
}

/// The CSS class (or classes) applied to a given kind of span.
pub fn classes(syntax: Syntax) -> Option<Cow<'static, str>> {
    let class = match syntax {
        Syntax::PlainText | Syntax::Newline => return None,
        Syntax::Bar => "abc-bar",
        Syntax::Accidental => "abc-accidental",
        Syntax::Note => "abc-note",
        Syntax::Duration(Length::Long) => "abc-duration abc-duration-long",
        Syntax::Duration(Length::Short) => "abc-duration abc-duration-short",
        Syntax::Duration(Length::Fraction) => "abc-duration abc-duration-fraction",
        Syntax::Rest => "abc-rest",
        Syntax::RestInvisible => "abc-rest abc-rest-invisible",
        Syntax::Tie { dotted: false } => "abc-tie",
        Syntax::Tie { dotted: true } => "abc-tie abc-tie-dotted",
        Syntax::Ornament => "abc-ornament",
        Syntax::Slur(level) => {
            return Some(Cow::Owned(format!("abc-slur abc-slur-level-{}", level)));
        }
        Syntax::Tuplet => "abc-tuplet",
        Syntax::Chord => "abc-chord",
        Syntax::ChordSymbol => "abc-chord-symbol",
        Syntax::Decoration => "abc-decoration",
        Syntax::GraceNote => "abc-grace-note",
        Syntax::Annotation => "abc-annotation",
        Syntax::InlineField => "abc-inline-field",
        Syntax::VoltaBracket => "abc-volta",
        Syntax::BrokenRhythm => "abc-broken-rhythm",
        Syntax::MetaKey => "abc-meta-key",
        Syntax::MetaValue => "abc-meta-value",
        Syntax::LyricsKey => "abc-lyrics-key",
        Syntax::LyricsValue => "abc-lyrics-value",
        Syntax::Comment => "abc-comment",
    };
    Some(Cow::Borrowed(class))
}

/// Escape the characters which are significant in HTML.
pub fn escape(content: &str) -> Cow<'_, str> {
    if !content.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(content);
    }

    let mut result = String::with_capacity(content.len() + 8);
    for c in content.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}
