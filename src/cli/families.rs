//! Family command implementations (families list, families show)

use clap::Subcommand;
use std::path::Path;
use std::process::ExitCode;

use crate::families::Family;
use crate::fmt::format_colour;
use crate::suggest::{format_suggestion, suggest};

use super::{runtime_or_exit, EXIT_ERROR, EXIT_SUCCESS};

#[derive(Subcommand)]
pub enum FamilyAction {
    /// List all registered colour families and aliases
    List,
    /// Show the colours of one family
    Show {
        /// Family identifier or alias
        name: String,
    },
}

/// Execute the families command
pub fn run_families(config: Option<&Path>, action: FamilyAction) -> ExitCode {
    let runtime = match runtime_or_exit(config) {
        Ok(r) => r,
        Err(code) => return code,
    };
    let registry = &runtime.registry;

    match action {
        FamilyAction::List => {
            println!("Colour families:");
            for family in registry.families() {
                let count = registry.names_of(family).map(|n| n.len()).unwrap_or_default();
                println!("  {:<16} {} colours", family.id(), count);
            }
            println!("  {:<16} every family above", Family::ANY.id());
            if !runtime.aliases.is_empty() {
                println!();
                println!("Aliases:");
                for (alias, targets) in runtime.aliases.iter() {
                    let ids: Vec<&str> = targets.iter().map(Family::id).collect();
                    println!("  {:<16} {}", alias, ids.join(", "));
                }
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        FamilyAction::Show { name } => {
            let family = Family::normalized(&name);
            let families: Vec<Family> = match runtime.aliases.targets(family.id()) {
                Some(targets) if !registry.is_valid_family(&family) => targets.to_vec(),
                _ => vec![family],
            };

            for family in &families {
                let names = match registry.names_of(family) {
                    Ok(names) => names,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        let ids = registry.identifiers();
                        let candidates =
                            ids.into_iter().map(Family::id).chain(runtime.aliases.names());
                        let suggestions = suggest(family.id(), candidates);
                        if let Some(suggestion) = format_suggestion(&suggestions) {
                            eprintln!("{}", suggestion);
                        }
                        return ExitCode::from(EXIT_ERROR);
                    }
                };

                println!("Family: {}", family);
                println!();
                for colour_name in names {
                    if let Ok(colour) = registry.lookup(family, colour_name) {
                        println!("  {} => {}", colour_name, format_colour(colour));
                    }
                }
            }
            ExitCode::from(EXIT_SUCCESS)
        }
    }
}
