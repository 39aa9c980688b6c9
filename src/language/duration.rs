//! Note length suffixes: `2`, `/2`, `/`, `//`, `3/2` and so on.

use serde::Serialize;

/// The shape a duration suffix was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Length {
    /// A bare number, lengthening the note.
    Long,
    /// A `/`-led suffix, shortening the note.
    Short,
    /// An explicit `n/m` fraction.
    Fraction,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Duration {
    pub length: Length,
    pub multiplier: f64,
    pub width: usize,
}

/// Parse the duration suffix at the start of the input, if there is one.
/// A `/` that doesn't complete a valid shape (`3/`, `/0`) is left in the
/// input rather than consumed.
pub fn parse_duration(input: &str) -> Option<Duration> {
    let bytes = input.as_bytes();

    let digits = count_digits(bytes, 0);
    let slashes = bytes[digits..]
        .iter()
        .take_while(|&&b| b == b'/')
        .count();

    if digits > 0 {
        let numerator = parse_number(&input[..digits]);

        if slashes == 1 {
            let more = count_digits(bytes, digits + 1);
            if more > 0 {
                let denominator = parse_number(&input[digits + 1..digits + 1 + more]);
                if denominator != 0.0 {
                    return Some(Duration {
                        length: Length::Fraction,
                        multiplier: numerator / denominator,
                        width: digits + 1 + more,
                    });
                }
            }
        }

        return Some(Duration {
            length: Length::Long,
            multiplier: numerator,
            width: digits,
        });
    }

    if slashes == 0 {
        return None;
    }

    if slashes == 1 {
        let more = count_digits(bytes, 1);
        if more > 0 {
            let denominator = parse_number(&input[1..1 + more]);
            if denominator == 0.0 {
                return None;
            }
            return Some(Duration {
                length: Length::Short,
                multiplier: 1.0 / denominator,
                width: 1 + more,
            });
        }
    }

    // each bare slash halves the note
    let halvings = slashes.min(i32::MAX as usize) as i32;

    Some(Duration {
        length: Length::Short,
        multiplier: 0.5_f64.powi(halvings),
        width: slashes,
    })
}

fn count_digits(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .unwrap_or_default()
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count()
}

// Runs too long for any integer type keep their magnitude as a float,
// saturating to infinity.
fn parse_number(digits: &str) -> f64 {
    digits
        .parse::<f64>()
        .unwrap_or(f64::INFINITY)
}
