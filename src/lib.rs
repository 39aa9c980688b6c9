//! Syntax highlighting and measure checking for ABC music notation.

#[macro_use]
mod regex;

pub mod checking;
pub mod formatting;
pub mod language;
pub mod parsing;

pub use checking::validate;
pub use parsing::classify;

/// Classify the text and render it as HTML with `abc-*` class spans.
pub fn highlight(text: &str) -> String {
    let spans = classify(text);
    formatting::render(&formatting::Markup, &spans)
}
