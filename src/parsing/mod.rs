//! Classifying the text of ABC notation

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::formatting::Syntax;
use crate::language::{LoadingError, Span};

mod context;
mod tokenizer;

pub use context::*;
pub use tokenizer::{classify_line, tokenize_line, Line};

/// Read a file and return an owned String. A filename of `-` reads standard
/// input instead.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    let result = if filename == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map(|_| content)
    } else {
        std::fs::read_to_string(filename)
    };

    match result {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Classify every character of the text into spans. Lines are separated by
/// Newline spans so that the concatenated span text is the original input.
pub fn classify(text: &str) -> Vec<Span<'_>> {
    let mut spans: Vec<Span> = Vec::new();
    let mut count = 0;

    for (number, line) in text
        .split('\n')
        .enumerate()
    {
        if number > 0 {
            let start = spans
                .last()
                .filter(|span| span.line == number - 1)
                .map_or(0, |span| span.end);
            spans.push(Span {
                syntax: Syntax::Newline,
                text: "\n",
                line: number - 1,
                start,
                end: start + 1,
            });
        }
        spans.extend(tokenize_line(number, line));
        count = number + 1;
    }

    debug!(
        "Classified {} line{} into {} spans",
        count,
        if count == 1 { "" } else { "s" },
        spans.len()
    );

    spans
}
