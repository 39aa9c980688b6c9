//! Checking that every measure holds the number of beats the time signature
//! calls for

use tracing::debug;

use crate::checking::measure_beats;
use crate::language::*;
use crate::parsing::{classify_line, extract_context, Line};

/// Measures within this many beats of the expected count are accepted.
pub const TOLERANCE: f64 = 0.01;

/// Check every music line of the document, returning a diagnostic for each
/// measure whose beats don't add up.
pub fn validate(text: &str) -> Vec<ValidationError> {
    let context = extract_context(text);
    let mut errors = Vec::new();

    for (number, line) in text
        .split('\n')
        .enumerate()
    {
        if let Line::Music(content) = classify_line(line) {
            errors.extend(check_line(number, content, &context));
        }
    }

    debug!(
        "Found {} problem{}",
        errors.len(),
        if errors.len() == 1 { "" } else { "s" }
    );

    errors
}

pub fn is_within_tolerance(actual: f64, expected: u32) -> bool {
    (actual - f64::from(expected)).abs() <= TOLERANCE
}

/// Split one line of music on its bar lines and check each measure.
/// Fragments that are empty, or that begin with `:` or `[` (the remains of
/// repeat signs and volta brackets), are skipped and don't count towards
/// the measure index.
pub fn check_line(number: usize, line: &str, context: &Context) -> Vec<ValidationError> {
    let music = strip_comment(line);
    let mut errors = Vec::new();

    if !music.contains('|') {
        return errors;
    }

    let expected = context
        .meter
        .beats;
    let mut cursor = 0;
    let mut index = 0;

    for candidate in music.split('|') {
        let trimmed = candidate.trim();
        // the ] of a |] bar is left at the start of the following fragment
        let trimmed = trimmed
            .strip_prefix(']')
            .unwrap_or(trimmed)
            .trim_start();

        if trimmed.is_empty() || trimmed.starts_with([':', '[']) {
            cursor += candidate.len() + 1;
            continue;
        }

        let actual = measure_beats(trimmed, context);
        debug!(line = number, measure = index, actual, "{}", trimmed);

        if !is_within_tolerance(actual, expected) {
            let start = music[cursor..]
                .find(trimmed)
                .map_or(cursor, |i| cursor + i);
            let end = start + trimmed.len();

            errors.push(ValidationError {
                line: number,
                measure: index,
                start: column_of(music, start),
                end: column_of(music, end),
                expected,
                actual,
                message: format!("Expected {} beats, got {:.2}", expected, actual),
            });
        }

        index += 1;
        cursor += candidate.len() + 1;
    }

    errors
}

// Convert a byte offset into a character column.
fn column_of(line: &str, offset: usize) -> usize {
    line[..offset]
        .chars()
        .count()
}
