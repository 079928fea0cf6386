//! Check command implementations (check-families, check-config)

use std::path::Path;
use std::process::ExitCode;

use crate::config::{find_config, load_config, Runtime};
use crate::families::{Family, FamilyList};
use crate::setter::FAMILY_LIST_SEPARATOR;
use crate::validate::validate_family_list;

use super::{runtime_or_exit, EXIT_ERROR, EXIT_SUCCESS};

/// Expand aliases in a comma-separated list, keeping unknown entries so
/// that validation reports them.
fn expand_entries(runtime: &Runtime, list: &str) -> FamilyList {
    let mut families = Vec::new();
    for entry in list.split(FAMILY_LIST_SEPARATOR) {
        let family = Family::normalized(entry);
        if family.id().is_empty() {
            continue;
        }
        match runtime.aliases.targets(family.id()) {
            Some(targets) if !runtime.registry.is_valid_family(&family) => {
                families.extend(targets.iter().cloned())
            }
            _ => families.push(family),
        }
    }
    FamilyList::new(families)
}

/// Execute the check-families command
///
/// Unlike `--families`, which stops at the first unknown entry, every
/// problem in the list is reported.
pub fn run_check_families(config: Option<&Path>, list: &str) -> ExitCode {
    let runtime = match runtime_or_exit(config) {
        Ok(r) => r,
        Err(code) => return code,
    };

    let families = expand_entries(&runtime, list);
    let problems = validate_family_list(&families, &runtime.registry);
    if problems.is_empty() {
        println!("OK: {}", families);
        return ExitCode::from(EXIT_SUCCESS);
    }

    eprintln!("{} problem(s) found:", problems.len());
    for problem in &problems {
        eprintln!("  - {}", problem);
    }
    ExitCode::from(EXIT_ERROR)
}

/// Execute the check-config command
pub fn run_check_config(path: Option<&Path>) -> ExitCode {
    let resolved = path.map(Path::to_path_buf).or_else(find_config);
    let Some(config_path) = resolved else {
        println!("No colourparam.toml found; using built-in families only");
        return ExitCode::from(EXIT_SUCCESS);
    };

    let runtime = match load_config(Some(&config_path)).and_then(|c| c.build()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}: {}", config_path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    println!("{}: OK", config_path.display());
    println!("  families: {}", runtime.registry.families().count());
    println!("  aliases:  {}", runtime.aliases.len());
    println!("  params:   {}", runtime.params.len());
    ExitCode::from(EXIT_SUCCESS)
}
