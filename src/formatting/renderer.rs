//! Applying a renderer to classified spans

use crate::formatting::*;
use crate::language::Span;

/// Highlighting happens in two passes. First the tokenizer converts source
/// text into a Vec of spans (Syntax tag, text pairs). Then the specified
/// renderer is applied to each one and the results are concatenated into
/// an embellished/highlighted/marked-up String.
pub fn render(renderer: &impl Render, spans: &[Span]) -> String {
    let mut output = String::new();

    for span in spans {
        let rendered = renderer.style(span.syntax, span.text);
        output.push_str(&rendered);
    }

    output
}
