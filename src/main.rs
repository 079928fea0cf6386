//! Colourparam - command-line tool for parsing and checking colour parameters

use std::process::ExitCode;

use colourparam::cli;

fn main() -> ExitCode {
    cli::run()
}
