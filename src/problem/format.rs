use super::messages::generate_error_message;
use abcheck::{
    formatting::Render,
    language::{Context, LoadingError, ValidationError},
};
use owo_colors::OwoColorize;
use std::path::Path;

/// Format a validation error with full details including the offending
/// measure underlined in its source line. The underline is padded by
/// character count, so it drifts right of the measure on lines holding
/// double-width characters such as CJK lyrics in quoted text.
pub fn full_validation_error<'i>(
    error: &ValidationError,
    context: &Context,
    filename: &'i Path,
    source: &'i str,
    renderer: &impl Render,
) -> String {
    let (problem, details) = generate_error_message(error, context, renderer);

    let code = source
        .split('\n')
        .nth(error.line)
        .unwrap_or("?")
        .trim_end_matches('\r');
    let line = error.line + 1;
    let column = error.start + 1;
    let width = 3.max(
        line.to_string()
            .len(),
    );
    let underline = "^".repeat(
        error
            .end
            .saturating_sub(error.start)
            .max(1),
    );

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>indent$}

{}
        "#,
        "error".bright_red(),
        filename.to_string_lossy(),
        line,
        column,
        problem.bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        code,
        ' ',
        '|'.bright_blue(),
        underline.bright_red(),
        details,
        indent = error.start + underline.len(),
    )
    .trim_ascii()
    .to_string()
}

/// Format a validation error with concise single-line output
pub fn concise_validation_error<'i>(error: &ValidationError, filename: &'i Path) -> String {
    format!(
        "{}: {}:{}:{} {}",
        "error".bright_red(),
        filename.to_string_lossy(),
        error.line + 1,
        error.start + 1,
        error
            .message
            .bold(),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    format!(
        "{}: {}:{}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    )
}
