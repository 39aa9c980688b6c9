//! Extracting the time signature and unit note length from header fields

use num_rational::Rational32;
use tracing::debug;

use crate::language::*;

/// Scan every line for M: and L: fields. Later fields override earlier
/// ones; anything missing or unparsable falls back to 4/4 and 1/8.
pub fn extract_context(text: &str) -> Context {
    let mut context = Context::default();

    for line in text.split('\n') {
        if let Some((key, value)) = match_field(line) {
            match key {
                "M:" => context.meter = parse_meter(value),
                "L:" => context.unit_length = parse_unit_length(value),
                _ => {}
            }
        }
    }

    debug!(
        "Meter {}/{}, unit note length {}",
        context.meter.beats, context.meter.unit, context.unit_length
    );

    context
}

/// Interpret the value of an M: field. `C` is common time and `C|` is cut
/// time.
pub fn parse_meter(value: &str) -> Meter {
    let value = strip_comment(value).trim();

    match value {
        "C" => Meter { beats: 4, unit: 4 },
        "C|" => Meter { beats: 2, unit: 2 },
        _ => match parse_fraction(value) {
            Some((beats, unit)) => Meter { beats, unit },
            None => Meter::default(),
        },
    }
}

/// Interpret the value of an L: field.
pub fn parse_unit_length(value: &str) -> Rational32 {
    let value = strip_comment(value).trim();

    let fraction = parse_fraction(value).and_then(|(numerator, denominator)| {
        let numerator = i32::try_from(numerator).ok()?;
        let denominator = i32::try_from(denominator).ok()?;
        Some(Rational32::new(numerator, denominator))
    });

    match fraction {
        Some(length) => length,
        None => Context::default().unit_length,
    }
}

// Both halves must be positive whole numbers.
fn parse_fraction(value: &str) -> Option<(u32, u32)> {
    let re = regex!(r"^(\d+)/(\d+)$");

    let cap = re.captures(value)?;
    let one: u32 = cap
        .get(1)?
        .as_str()
        .parse()
        .ok()?;
    let two: u32 = cap
        .get(2)?
        .as_str()
        .parse()
        .ok()?;

    if one == 0 || two == 0 {
        return None;
    }
    Some((one, two))
}
