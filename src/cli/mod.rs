//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod check;
mod families;
mod parse;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::config::{load_runtime, Runtime};
use crate::families::FamilyList;
use crate::parser::ParseError;
use crate::setter::{parse_family_list, FAMILY_LIST_SEPARATOR};
use crate::suggest::{format_suggestion, suggest};

pub use families::FamilyAction;

pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Environment variable holding the log filter, e.g. `colourparam=debug`.
pub const LOG_ENV: &str = "COLOURPARAM_LOG";

/// Colourparam - parse and check colour parameters
#[derive(Parser)]
#[command(name = "colourparam")]
#[command(about = "Colourparam - parse colour names and RGB literals, check colour families")]
#[command(version)]
pub struct Cli {
    /// Path to colourparam.toml (default: search upwards, then XDG config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for parse results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a colour name, family:name or RGB{...} literal
    Parse {
        /// Colour text
        text: String,

        /// Comma-separated families (or aliases) to resolve names against
        #[arg(short, long, value_name = "FAMILIES")]
        families: Option<String>,

        /// Use the families declared for this parameter in the config
        #[arg(short, long, conflicts_with = "families")]
        param: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Parse two colours separated by ';'
    Pair {
        /// Colour pair text, e.g. "white;RGB{B: 0x80}"
        text: String,

        /// Comma-separated families (or aliases) to resolve names against
        #[arg(short, long, value_name = "FAMILIES")]
        families: Option<String>,

        /// Use the families declared for this parameter in the config
        #[arg(short, long, conflicts_with = "families")]
        param: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List colour families or show one family's colours
    Families {
        #[command(subcommand)]
        action: FamilyAction,
    },

    /// Check a comma-separated family list and report every problem
    CheckFamilies {
        /// Family list, e.g. "x11,web" (aliases allowed)
        list: String,
    },

    /// Describe the colour values accepted with a family list
    Describe {
        /// Comma-separated families (or aliases)
        #[arg(short, long, value_name = "FAMILIES")]
        families: Option<String>,

        /// Use the families declared for this parameter in the config
        #[arg(short, long, conflicts_with = "families")]
        param: Option<String>,
    },

    /// Load and validate a colourparam.toml
    CheckConfig {
        /// Config file (default: the discovered one)
        path: Option<PathBuf>,
    },
}

/// Install the stderr log subscriber, filtered by `COLOURPARAM_LOG`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second install (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Commands::Parse { text, families, param, format } => parse::run_parse(
            cli.config.as_deref(),
            &text,
            families.as_deref(),
            param.as_deref(),
            format,
        ),
        Commands::Pair { text, families, param, format } => parse::run_pair(
            cli.config.as_deref(),
            &text,
            families.as_deref(),
            param.as_deref(),
            format,
        ),
        Commands::Families { action } => families::run_families(cli.config.as_deref(), action),
        Commands::CheckFamilies { list } => check::run_check_families(cli.config.as_deref(), &list),
        Commands::Describe { families, param } => {
            parse::run_describe(cli.config.as_deref(), families.as_deref(), param.as_deref())
        }
        Commands::CheckConfig { path } => {
            check::run_check_config(path.as_deref().or(cli.config.as_deref()))
        }
    }
}

/// Load the runtime, printing the error on failure.
pub(crate) fn runtime_or_exit(config: Option<&Path>) -> Result<Runtime, ExitCode> {
    load_runtime(config).map_err(|e| {
        eprintln!("Error: {}", e);
        ExitCode::from(EXIT_ERROR)
    })
}

/// Pick the family list from `--families` or `--param`.
pub(crate) fn select_families(
    runtime: &Runtime,
    families: Option<&str>,
    param: Option<&str>,
) -> Result<FamilyList, ExitCode> {
    if let Some(name) = param {
        return match runtime.param(name) {
            Some(p) => Ok(p.families.clone()),
            None => {
                eprintln!("Error: no parameter named '{}' in the config", name);
                let names: Vec<&str> = runtime.params.keys().map(String::as_str).collect();
                if let Some(s) = format_suggestion(&suggest(name, names)) {
                    eprintln!("{}", s);
                }
                Err(ExitCode::from(EXIT_INVALID_ARGS))
            }
        };
    }

    match families {
        None => Ok(FamilyList::empty()),
        Some(text) => {
            let list = parse_family_list(
                text,
                FAMILY_LIST_SEPARATOR,
                &runtime.registry,
                &runtime.aliases,
            );
            list.map_err(|e: ParseError| {
                eprintln!("Error: {}", e);
                ExitCode::from(EXIT_INVALID_ARGS)
            })
        }
    }
}
