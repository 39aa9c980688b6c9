//! Recognizers for the tokens of an ABC music line. Each answers whether
//! the input begins with a token of that kind and, if so, how many bytes
//! the token occupies.

/// Bar lines: `|`, `||`, `|]`, `|:`, `:|`, `:|:`, `::` and friends.
pub fn match_bar(input: &str) -> Option<usize> {
    let re = regex!(r"^(?::*\|[|:\]]*|::+)");
    re.find(input)
        .map(|m| m.end())
}

/// Accidentals: sharp `^`, flat `_`, natural `=`.
pub fn match_accidental(input: &str) -> Option<usize> {
    let re = regex!(r"^[\^_=]");
    re.find(input)
        .map(|m| m.end())
}

/// A pitch letter along with any octave marks.
pub fn match_note(input: &str) -> Option<usize> {
    let re = regex!(r"^[A-Ga-g][',]*");
    re.find(input)
        .map(|m| m.end())
}

/// Rests, both visible (`z`, `Z`) and invisible (`x`, `X`).
pub fn match_rest(input: &str) -> Option<usize> {
    let re = regex!(r"^[zZxX]");
    re.find(input)
        .map(|m| m.end())
}

pub fn is_invisible_rest(input: &str) -> bool {
    input.starts_with(['x', 'X'])
}

/// Ties, either `-` or the dotted `.-`.
pub fn match_tie(input: &str) -> Option<usize> {
    let re = regex!(r"^\.?-");
    re.find(input)
        .map(|m| m.end())
}

/// Single character ornament shorthands. A `.` that begins a dotted tie is
/// not a staccato mark.
pub fn match_ornament(input: &str) -> Option<usize> {
    if input.starts_with(".-") {
        return None;
    }
    let re = regex!(r"^[.~HLMOPSTuv]");
    re.find(input)
        .map(|m| m.end())
}

/// Tuplet markers: `(3`, `(3:2`, `(3:2:3`.
pub fn match_tuplet(input: &str) -> Option<usize> {
    let re = regex!(r"^\(\d+(?::\d*(?::\d*)?)?");
    re.find(input)
        .map(|m| m.end())
}

/// Decorations enclosed in `!…!`.
pub fn match_decoration(input: &str) -> Option<usize> {
    let re = regex!(r"^![^!\n]*!");
    re.find(input)
        .map(|m| m.end())
}

/// Grace notes enclosed in `{…}`.
pub fn match_grace_note(input: &str) -> Option<usize> {
    let re = regex!(r"^\{[^}\n]*\}");
    re.find(input)
        .map(|m| m.end())
}

/// Any double quoted string, chord symbol or annotation alike.
pub fn match_quoted(input: &str) -> Option<usize> {
    let re = regex!(r#"^"[^"\n]*""#);
    re.find(input)
        .map(|m| m.end())
}

/// Quoted text which is not a chord symbol. Annotations with an explicit
/// placement prefix win even if the remainder looks like a chord.
pub fn match_annotation(input: &str) -> Option<usize> {
    let width = match_quoted(input)?;
    let content = &input[1..width - 1];

    if is_placement(content) || !is_chord_shape(content) {
        Some(width)
    } else {
        None
    }
}

/// Quoted chord symbols like `"Am"`, `"G7"`, `"D/F#"`.
pub fn match_chord_symbol(input: &str) -> Option<usize> {
    let width = match_quoted(input)?;
    let content = &input[1..width - 1];

    if match_annotation(input).is_some() {
        return None;
    }
    if is_chord_shape(content) {
        Some(width)
    } else {
        None
    }
}

fn is_placement(content: &str) -> bool {
    content.starts_with(['^', '_', '<', '>', '@'])
}

fn is_chord_shape(content: &str) -> bool {
    let re = regex!(
        r"^[A-G][#b♯♭]?(?:maj|min|dim|aug|sus|add|m|M|\+|°|ø)?[0-9]*(?:(?:sus|add|maj|[#b♯♭+\-])[0-9]+)*(?:/[A-Ga-g][#b♯♭]?)?$"
    );
    re.is_match(content)
}

/// Broken rhythm markers, a run of `>` or of `<`.
pub fn match_broken_rhythm(input: &str) -> Option<usize> {
    let re = regex!(r"^(?:>+|<+)");
    re.find(input)
        .map(|m| m.end())
}

/// Header fields written inline in a music line, like `[K:G]`.
pub fn match_inline_field(input: &str) -> Option<usize> {
    let re = regex!(r"^\[[ABCDFGHIKLMmNOPQRrSsTUVWwXZ]:[^\]\n]*\]");
    re.find(input)
        .map(|m| m.end())
}

/// First and second ending markers: `[1`, `[2`, `[1,3`, `[1-3`.
pub fn match_volta_bracket(input: &str) -> Option<usize> {
    let re = regex!(r"^\[\d+(?:[,\-]\d+)*");
    re.find(input)
        .map(|m| m.end())
}

/// The square brackets surrounding the notes of a chord.
pub fn match_chord_bracket(input: &str) -> Option<usize> {
    let re = regex!(r"^[\[\]]");
    re.find(input)
        .map(|m| m.end())
}

/// A `%` comment running to the end of the line.
pub fn match_comment(input: &str) -> Option<usize> {
    let re = regex!(r"^%[^\n]*");
    re.find(input)
        .map(|m| m.end())
}

/// Split a header field line like `M:6/8` into its key (including the
/// colon) and value.
pub fn match_field(line: &str) -> Option<(&str, &str)> {
    let re = regex!(r"^([ABCDFGHIKLMmNOPQRrSsTUVWwXZ]:)(.*)$");
    let cap = re.captures(line)?;
    let key = cap.get(1)?;
    let value = cap.get(2)?;
    Some((key.as_str(), value.as_str()))
}

pub fn is_lyrics_key(key: &str) -> bool {
    key == "w:" || key == "W:"
}

pub fn is_comment_line(line: &str) -> bool {
    line.trim_start()
        .starts_with('%')
}

/// Remove a trailing `%` comment from a line of music, ignoring any `%`
/// that occurs inside a quoted chord symbol or annotation.
pub fn strip_comment(line: &str) -> &str {
    let mut quoted = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => quoted = !quoted,
            '%' if !quoted => return &line[..i],
            _ => {}
        }
    }
    line
}
