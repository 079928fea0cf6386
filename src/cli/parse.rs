//! Parse command implementations (parse, pair, describe)

use std::path::Path;
use std::process::ExitCode;

use crate::colour::NamedColour;
use crate::fmt::{format_colour, format_named, format_pair};
use crate::parser::{describe_allowed_pair_values, describe_allowed_values, ParseError};

use super::{runtime_or_exit, select_families, OutputFormat, EXIT_ERROR, EXIT_SUCCESS};

fn colour_json(colour: &NamedColour) -> serde_json::Value {
    serde_json::json!({
        "name": colour.name(),
        "rgba": colour.colour(),
        "literal": format_colour(colour.colour()),
    })
}

fn report_parse_error(err: &ParseError, format: OutputFormat) -> ExitCode {
    match format {
        OutputFormat::Text => eprintln!("Error: {}", err),
        OutputFormat::Json => {
            let error_json = serde_json::json!({ "valid": false, "error": err.to_string() });
            println!(
                "{}",
                serde_json::to_string_pretty(&error_json).expect("JSON value serialization")
            );
        }
    }
    ExitCode::from(EXIT_ERROR)
}

/// Execute the parse command
pub fn run_parse(
    config: Option<&Path>,
    text: &str,
    families: Option<&str>,
    param: Option<&str>,
    format: OutputFormat,
) -> ExitCode {
    let runtime = match runtime_or_exit(config) {
        Ok(r) => r,
        Err(code) => return code,
    };
    let families = match select_families(&runtime, families, param) {
        Ok(f) => f,
        Err(code) => return code,
    };

    let colour = match runtime.parser().parse_named_colour(text, &families) {
        Ok(c) => c,
        Err(e) => return report_parse_error(&e, format),
    };

    match format {
        OutputFormat::Text => {
            println!("{}", format_named(&colour));
            if colour.name().is_some() {
                println!("{}", format_colour(colour.colour()));
            }
        }
        OutputFormat::Json => {
            let mut output = colour_json(&colour);
            output["valid"] = serde_json::json!(true);
            println!(
                "{}",
                serde_json::to_string_pretty(&output).expect("JSON value serialization")
            );
        }
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the pair command
pub fn run_pair(
    config: Option<&Path>,
    text: &str,
    families: Option<&str>,
    param: Option<&str>,
    format: OutputFormat,
) -> ExitCode {
    let runtime = match runtime_or_exit(config) {
        Ok(r) => r,
        Err(code) => return code,
    };
    let families = match select_families(&runtime, families, param) {
        Ok(f) => f,
        Err(code) => return code,
    };

    let (first, second) = match runtime.parser().parse_paired_named_colours(text, &families) {
        Ok(pair) => pair,
        Err(e) => return report_parse_error(&e, format),
    };

    match format {
        OutputFormat::Text => println!("{}", format_pair(&first, &second)),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "valid": true,
                "first": colour_json(&first),
                "second": colour_json(&second),
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&output).expect("JSON value serialization")
            );
        }
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the describe command
pub fn run_describe(
    config: Option<&Path>,
    families: Option<&str>,
    param: Option<&str>,
) -> ExitCode {
    let runtime = match runtime_or_exit(config) {
        Ok(r) => r,
        Err(code) => return code,
    };
    let families = match select_families(&runtime, families, param) {
        Ok(f) => f,
        Err(code) => return code,
    };

    println!("colour: {}", describe_allowed_values(&families));
    println!();
    println!("colour;colour: {}", describe_allowed_pair_values(&families));
    ExitCode::from(EXIT_SUCCESS)
}
