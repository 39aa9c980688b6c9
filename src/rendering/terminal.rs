//! Renderers for colourizing ABC notation

use abcheck::formatting::*;
use owo_colors::OwoColorize;

/// Embellish spans with ANSI escapes to create syntax highlighting in
/// terminal output.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::PlainText => content.to_string(),
            Syntax::Newline => "\n".to_string(),
            Syntax::MetaKey => content // #75507b (purple) bold
                .color(owo_colors::Rgb(0x75, 0x50, 0x7b))
                .bold()
                .to_string(),
            Syntax::MetaValue => content
                .color(owo_colors::Rgb(0x75, 0x50, 0x7b))
                .to_string(),
            Syntax::LyricsKey => content // #4e9a06 (green) bold
                .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                .bold()
                .to_string(),
            Syntax::LyricsValue => content
                .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                .to_string(),
            Syntax::Comment => content // #999999 (grey) italic
                .color(owo_colors::Rgb(0x99, 0x99, 0x99))
                .italic()
                .to_string(),
            Syntax::Bar => content // #cc0000 (red) bold
                .color(owo_colors::Rgb(204, 0, 0))
                .bold()
                .to_string(),
            Syntax::Note => content // #3465a4 (blue) bold
                .color(owo_colors::Rgb(0x34, 0x65, 0xa4))
                .bold()
                .to_string(),
            Syntax::Accidental | Syntax::Tuplet => content // #ad7fa8 (light purple) bold
                .color(owo_colors::Rgb(0xad, 0x7f, 0xa8))
                .bold()
                .to_string(),
            Syntax::Duration(_) => content // #8f5902 (brown)
                .color(owo_colors::Rgb(0x8f, 0x59, 0x02))
                .to_string(),
            Syntax::Rest => content
                .color(owo_colors::Rgb(0x60, 0x98, 0x9a))
                .bold()
                .to_string(),
            Syntax::RestInvisible => content
                .color(owo_colors::Rgb(0x60, 0x98, 0x9a))
                .dimmed()
                .to_string(),
            Syntax::Tie { .. } => content // #c4a000 (yellow)
                .color(owo_colors::Rgb(0xc4, 0xa0, 0x00))
                .to_string(),
            Syntax::Ornament | Syntax::Decoration => content // #f57900 (orange)
                .color(owo_colors::Rgb(0xf5, 0x79, 0x00))
                .to_string(),
            Syntax::Slur(level) => {
                let (r, g, b) = SLURS[level as usize % SLURS.len()];
                content
                    .color(owo_colors::Rgb(r, g, b))
                    .bold()
                    .to_string()
            }
            Syntax::Chord | Syntax::ChordSymbol => content // #4e9a06 (green) bold
                .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                .bold()
                .to_string(),
            Syntax::Annotation => content
                .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                .italic()
                .to_string(),
            Syntax::GraceNote => content // #729fcf (light blue)
                .color(owo_colors::Rgb(0x72, 0x9f, 0xcf))
                .to_string(),
            Syntax::InlineField | Syntax::VoltaBracket => content
                .color(owo_colors::Rgb(0x75, 0x50, 0x7b))
                .bold()
                .to_string(),
            Syntax::BrokenRhythm => content
                .color(owo_colors::Rgb(204, 0, 0))
                .to_string(),
        }
    }
}

// blue, green, orange, purple, red
const SLURS: [(u8, u8, u8); 5] = [
    (0x34, 0x65, 0xa4),
    (0x4e, 0x9a, 0x06),
    (0xf5, 0x79, 0x00),
    (0x75, 0x50, 0x7b),
    (0xcc, 0x00, 0x00),
];
