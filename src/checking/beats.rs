//! Counting the beats in a single measure

use crate::language::*;

/// Total the beats of the notes, rests, and chords in one measure. The
/// input is the text between two bar lines. Chord symbols, annotations,
/// decorations, grace notes, and inline fields take no time and are
/// skipped whole so their letters are not mistaken for notes.
pub fn measure_beats(measure: &str, context: &Context) -> f64 {
    let mut total = 0.0;
    let mut tuplet: Option<Tuplet> = None;
    let mut rest = measure;

    while let Some(c) = rest
        .chars()
        .next()
    {
        let width = match c {
            '\\' => 1,
            '(' => match parse_tuplet(rest) {
                Some((found, width)) => {
                    tuplet = Some(found);
                    width
                }
                None => 1,
            },
            '"' => match_quoted(rest).unwrap_or(1),
            '!' => match_decoration(rest).unwrap_or(1),
            '{' => match_grace_note(rest).unwrap_or(1),
            '[' => {
                if let Some(width) = match_inline_field(rest).or_else(|| match_volta_bracket(rest)) {
                    width
                } else {
                    let (multiplier, width) = read_chord(rest);
                    if let Some(multiplier) = multiplier {
                        total += note_beats(multiplier, &mut tuplet, context);
                    }
                    width
                }
            }
            'A'..='G' | 'a'..='g' | 'z' | 'Z' | 'x' | 'X' => {
                let (multiplier, width) = read_note(rest);
                total += note_beats(multiplier, &mut tuplet, context);
                width
            }
            _ => c.len_utf8(),
        };

        rest = &rest[width..];
    }

    total
}

/// The beats for one note (or chord) of the given length multiplier,
/// scaled by and counted against any active tuplet.
fn note_beats(multiplier: f64, tuplet: &mut Option<Tuplet>, context: &Context) -> f64 {
    let mut multiplier = multiplier;

    if let Some(mut current) = tuplet.take() {
        multiplier *= current.ratio();
        current.remaining = current
            .remaining
            .saturating_sub(1);
        if current.remaining > 0 {
            *tuplet = Some(current);
        }
    }

    context.beats_for(multiplier)
}

/// Parse a tuplet marker `(p`, `(p:q`, or `(p:q:r`, returning it and the
/// number of bytes it occupies. A bare `(` is a slur, not a tuplet.
pub fn parse_tuplet(input: &str) -> Option<(Tuplet, usize)> {
    let re = regex!(r"^\((\d+)(?::(\d*)(?::(\d*))?)?");

    let cap = re.captures(input)?;
    let width = cap
        .get(0)?
        .end();

    let p: u32 = cap
        .get(1)?
        .as_str()
        .parse()
        .ok()?;
    if p == 0 {
        return None;
    }

    let explicit = |i: usize| {
        cap.get(i)
            .and_then(|m| {
                m.as_str()
                    .parse::<u32>()
                    .ok()
            })
            .filter(|&n| n > 0)
    };

    let q = explicit(2).unwrap_or_else(|| Tuplet::default_q(p));
    let r = explicit(3).unwrap_or(p);

    Some((Tuplet { p, q, remaining: r }, width))
}

// A note or rest letter, its octave marks, and its duration suffix.
fn read_note(input: &str) -> (f64, usize) {
    let width = match_note(input)
        .or_else(|| match_rest(input))
        .unwrap_or(1);

    match parse_duration(&input[width..]) {
        Some(duration) => (duration.multiplier, width + duration.width),
        None => (1.0, width),
    }
}

// A chord counts as a single note; only the duration following the
// closing bracket matters. An unclosed chord runs to the end of the
// measure and contributes nothing.
fn read_chord(input: &str) -> (Option<f64>, usize) {
    let close = match input[1..].find(']') {
        Some(i) => i + 2,
        None => return (None, input.len()),
    };

    match parse_duration(&input[close..]) {
        Some(duration) => (Some(duration.multiplier), close + duration.width),
        None => (Some(1.0), close),
    }
}
