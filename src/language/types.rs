//! Value types produced by classifying and checking ABC notation

use num_rational::Rational32;
use serde::Serialize;

use crate::formatting::Syntax;

/// A classified run of characters within one line. The text is the raw
/// source slice; escaping for display is left to the renderer. Columns are
/// zero-origin character (not byte) positions within the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span<'i> {
    pub syntax: Syntax,
    pub text: &'i str,
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

/// The time signature, from the M: field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Meter {
    pub beats: u32,
    pub unit: u32,
}

impl Default for Meter {
    fn default() -> Self {
        Meter { beats: 4, unit: 4 }
    }
}

/// Header values in effect for a whole document. This is recomputed on
/// every validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub meter: Meter,
    pub unit_length: Rational32,
}

impl Default for Context {
    fn default() -> Self {
        Context {
            meter: Meter::default(),
            unit_length: Rational32::new(1, 8),
        }
    }
}

impl Context {
    /// Convert a note length, expressed as a multiple of the unit note
    /// length, into beats of the current meter.
    pub fn beats_for(&self, multiplier: f64) -> f64 {
        let length = f64::from(*self
            .unit_length
            .numer())
            / f64::from(*self
                .unit_length
                .denom());

        length * multiplier * f64::from(self.meter.unit)
    }
}

/// An active tuplet: `p` notes in the time of `q`, with `remaining` notes
/// still to be consumed before it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tuplet {
    pub p: u32,
    pub q: u32,
    pub remaining: u32,
}

impl Tuplet {
    /// The conventional q for a given p when the tuplet marker omits it.
    pub fn default_q(p: u32) -> u32 {
        match p {
            2 | 4 | 8 => 3,
            3 | 6 => 2,
            5 | 7 | 9 => 2,
            _ => 2,
        }
    }

    pub fn ratio(&self) -> f64 {
        f64::from(self.q) / f64::from(self.p)
    }
}

/// A measure whose beat count doesn't agree with the time signature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    pub line: usize,
    pub measure: usize,
    pub start: usize,
    pub end: usize,
    pub expected: u32,
    pub actual: f64,
    pub message: String,
}
