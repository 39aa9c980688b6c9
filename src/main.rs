use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use abcheck::formatting::{self, Identity, Markup};
use abcheck::{checking, parsing};

mod problem;
mod rendering;

#[derive(Eq, Debug, PartialEq)]
enum Output {
    Concise,
    Full,
    Json,
}

#[derive(Eq, Debug, PartialEq)]
enum Highlight {
    Terminal,
    Html,
    Page,
    Spans,
    Plain,
}

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("abcheck")
        .version(VERSION)
        .propagate_version(true)
        .about("Syntax highlighting and measure checking for ABC music notation.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log diagnostic information to standard error. RUST_LOG, if set, takes precedence."),
        )
        .subcommand(
            Command::new("check")
                .about("Check that every measure has the number of beats the time signature requires")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(["concise", "full", "json"])
                        .default_value("full")
                        .action(ArgAction::Set)
                        .help("Which kind of diagnostic output to print."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the ABC tune you want to check. Use - to read from standard input."),
                ),
        )
        .subcommand(
            Command::new("highlight")
                .about("Syntax highlight the given ABC tune")
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(["terminal", "html", "page", "spans", "none"])
                        .default_value("terminal")
                        .action(ArgAction::Set)
                        .help("Which kind of highlighted output to print."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the ABC tune you want to highlight. Use - to read from standard input."),
                ),
        )
        .get_matches();

    setup_logging(matches.get_flag("debug"));

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let output = match submatches
                .get_one::<String>("output")
                .map(String::as_str)
            {
                Some("concise") => Output::Concise,
                Some("json") => Output::Json,
                _ => Output::Full,
            };
            debug!(?output);

            let filename = submatches
                .get_one::<String>("filename")
                .map(Path::new)
                .unwrap_or(Path::new("-"));

            let content = match parsing::load(filename) {
                Ok(data) => data,
                Err(error) => {
                    eprintln!("{}", problem::concise_loading_error(&error));
                    std::process::exit(1);
                }
            };

            let context = parsing::extract_context(&content);
            let errors = checking::validate(&content);

            match output {
                Output::Json => match serde_json::to_string_pretty(&errors) {
                    Ok(json) => println!("{}", json),
                    Err(error) => {
                        eprintln!("{}: {}", "error".bright_red(), error);
                        std::process::exit(1);
                    }
                },
                Output::Concise => {
                    for error in &errors {
                        eprintln!("{}", problem::concise_validation_error(error, filename));
                    }
                }
                Output::Full => {
                    // Choose renderer based on whether stderr is a terminal
                    let highlighted = std::io::stderr().is_terminal();
                    for (i, error) in errors
                        .iter()
                        .enumerate()
                    {
                        if i > 0 {
                            eprintln!();
                        }
                        let message = if highlighted {
                            problem::full_validation_error(
                                error,
                                &context,
                                filename,
                                &content,
                                &rendering::Terminal,
                            )
                        } else {
                            problem::full_validation_error(
                                error, &context, filename, &content, &Identity,
                            )
                        };
                        eprintln!("{}", message);
                    }
                }
            }

            if !errors.is_empty() {
                std::process::exit(1);
            }
        }
        Some(("highlight", submatches)) => {
            let raw_output = submatches.get_flag("raw-control-chars");

            let output = match submatches
                .get_one::<String>("output")
                .map(String::as_str)
            {
                Some("html") => Highlight::Html,
                Some("page") => Highlight::Page,
                Some("spans") => Highlight::Spans,
                Some("none") => Highlight::Plain,
                _ => Highlight::Terminal,
            };
            debug!(?output);

            let filename = submatches
                .get_one::<String>("filename")
                .map(Path::new)
                .unwrap_or(Path::new("-"));

            let content = match parsing::load(filename) {
                Ok(data) => data,
                Err(error) => {
                    eprintln!("{}", problem::concise_loading_error(&error));
                    std::process::exit(1);
                }
            };

            let spans = parsing::classify(&content);

            let result = match output {
                Highlight::Terminal => {
                    if raw_output
                        || std::io::stdout()
                            .is_terminal()
                    {
                        formatting::render(&rendering::Terminal, &spans)
                    } else {
                        formatting::render(&Identity, &spans)
                    }
                }
                Highlight::Html => formatting::render(&Markup, &spans),
                Highlight::Page => {
                    let markup = formatting::render(&Markup, &spans);
                    match rendering::via_html_page(filename, &content, &markup) {
                        Ok(page) => page,
                        Err(error) => {
                            eprintln!("{}: {}", "error".bright_red(), error);
                            std::process::exit(1);
                        }
                    }
                }
                Highlight::Spans => match serde_json::to_string_pretty(&spans) {
                    Ok(json) => json,
                    Err(error) => {
                        eprintln!("{}: {}", "error".bright_red(), error);
                        std::process::exit(1);
                    }
                },
                Highlight::Plain => formatting::render(&Identity, &spans),
            };

            print!("{}", result);
            if !result.ends_with('\n') {
                println!();
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: abcheck [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn setup_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("abcheck=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
