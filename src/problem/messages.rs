use abcheck::{
    formatting::{Render, Syntax},
    language::{Context, ValidationError},
};

/// Generate problem and detail messages for a measure with the wrong
/// number of beats.
pub fn generate_error_message(
    error: &ValidationError,
    context: &Context,
    renderer: &dyn Render,
) -> (String, String) {
    let meter = format!("{}/{}", context.meter.beats, context.meter.unit);
    let length = context
        .unit_length
        .to_string();

    let example = format!(
        "{}{}\n{}{}",
        renderer.style(Syntax::MetaKey, "M:"),
        renderer.style(Syntax::MetaValue, &meter),
        renderer.style(Syntax::MetaKey, "L:"),
        renderer.style(Syntax::MetaValue, &length),
    );

    let problem = if error.actual < f64::from(error.expected) {
        format!("Measure {} is short", error.measure + 1)
    } else {
        format!("Measure {} is too long", error.measure + 1)
    };

    let details = format!(
        r#"
{}. The header of this tune declares

{}

so every measure must add up to {} beat{}. Note lengths are multiples of
the unit note length, and tuplets like {} scale the notes they group.
        "#,
        error.message,
        example,
        error.expected,
        if error.expected == 1 { "" } else { "s" },
        renderer.style(Syntax::Tuplet, "(3"),
    )
    .trim_ascii()
    .to_string();

    (problem, details)
}
