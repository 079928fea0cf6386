//! Building a validated runtime from configuration
//!
//! Every section is checked before anything is returned, and all problems
//! are reported together.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::loader::ConfigError;
use super::schema::{ColourparamConfig, ConfigValidationError, FamilyConfig, ParamConfig};
use crate::alias::{validate_aliases, AliasTable};
use crate::colour::{Colour, NamedColour};
use crate::families::{Family, FamilyList, FamilyRegistry};
use crate::parser::ColourParser;
use crate::setter::{FamiliesSetter, NamedColourSetter};
use crate::validate::{validate_family_list, ValidationError};

/// A declared parameter after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub families: FamilyList,
    pub default: Option<NamedColour>,
}

/// Registry, aliases and parameters ready for use.
#[derive(Debug, Clone)]
pub struct Runtime {
    pub registry: Arc<FamilyRegistry>,
    pub aliases: AliasTable,
    pub params: BTreeMap<String, Param>,
}

impl Default for Runtime {
    fn default() -> Self {
        Self {
            registry: FamilyRegistry::shared_builtin(),
            aliases: AliasTable::builtin(),
            params: BTreeMap::new(),
        }
    }
}

impl Runtime {
    pub fn parser(&self) -> ColourParser<'_> {
        ColourParser::new(&self.registry)
    }

    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.get(name)
    }

    /// A setter for a declared parameter, starting from its default.
    ///
    /// Returns `Ok(None)` if no parameter has that name.
    pub fn named_setter(&self, name: &str) -> Result<Option<NamedColourSetter>, ConfigError> {
        let Some(param) = self.param(name) else {
            return Ok(None);
        };
        let initial = param
            .default
            .clone()
            .unwrap_or_else(|| NamedColour::from(Colour::default()));
        NamedColourSetter::with_registry(initial, param.families.clone(), self.registry.clone())
            .map(Some)
            .map_err(validation_failed)
    }

    /// A setter for family lists using this runtime's registry and aliases.
    pub fn families_setter(&self, initial: FamilyList) -> Result<FamiliesSetter, ConfigError> {
        FamiliesSetter::with_registry(initial, self.aliases.clone(), self.registry.clone())
            .map_err(validation_failed)
    }
}

fn validation_failed(error: ValidationError) -> ConfigError {
    ConfigError::Validation(error.problems.iter().map(|p| p.to_string()).collect())
}

impl ColourparamConfig {
    /// Validate the configuration and build a [`Runtime`].
    ///
    /// Custom family colours are parsed against the built-in families only.
    pub fn build(&self) -> Result<Runtime, ConfigError> {
        let mut errors = Vec::new();

        let registry = build_registry(&self.families, &mut errors);

        let mut aliases = AliasTable::builtin();
        aliases.merge(self.aliases.clone());
        for problem in validate_aliases(&aliases, &registry) {
            errors.push(ConfigValidationError::new("aliases", problem));
        }

        let mut params = BTreeMap::new();
        for (name, config) in &self.params {
            if let Some(param) = build_param(name, config, &registry, &aliases, &mut errors) {
                params.insert(name.clone(), param);
            }
        }

        if !errors.is_empty() {
            for error in &errors {
                tracing::warn!("{}", error);
            }
            return Err(ConfigError::Validation(errors.iter().map(|e| e.to_string()).collect()));
        }

        tracing::debug!(
            families = registry.families().count(),
            aliases = aliases.len(),
            params = params.len(),
            "built runtime from config"
        );
        Ok(Runtime { registry: Arc::new(registry), aliases, params })
    }
}

fn build_registry(
    families: &[FamilyConfig],
    errors: &mut Vec<ConfigValidationError>,
) -> FamilyRegistry {
    let builtin = ColourParser::new(FamilyRegistry::builtin());
    let mut registry = FamilyRegistry::builtin().clone();

    for family in families {
        let mut colours = Vec::with_capacity(family.colours.len());
        let mut ok = true;

        for (name, text) in &family.colours {
            match builtin.parse_colour(text, &FamilyList::empty()) {
                Ok(colour) => colours.push((name.as_str(), colour)),
                Err(e) => {
                    errors.push(ConfigValidationError::new(
                        format!("family.{}.colours.{}", family.name, name),
                        e,
                    ));
                    ok = false;
                }
            }
        }

        if ok {
            let id = Family::normalized(&family.name);
            if let Err(e) = registry.add_family(id, colours) {
                errors.push(ConfigValidationError::new(format!("family.{}", family.name), e));
            }
        }
    }

    registry
}

fn build_param(
    name: &str,
    config: &ParamConfig,
    registry: &FamilyRegistry,
    aliases: &AliasTable,
    errors: &mut Vec<ConfigValidationError>,
) -> Option<Param> {
    // Aliases expand in place, as they do on the command line
    let mut families = Vec::new();
    for family in &config.families {
        match aliases.targets(family.id()) {
            Some(targets) if !registry.is_valid_family(family) => {
                families.extend(targets.iter().cloned())
            }
            _ => families.push(family.clone()),
        }
    }
    let families = FamilyList::new(families);

    let problems = validate_family_list(&families, registry);
    if !problems.is_empty() {
        for problem in problems {
            errors.push(ConfigValidationError::new(format!("params.{}.families", name), problem));
        }
        return None;
    }

    let default = match &config.default {
        Some(text) => match ColourParser::new(registry).parse_named_colour(text, &families) {
            Ok(colour) => Some(colour),
            Err(e) => {
                errors.push(ConfigValidationError::new(format!("params.{}.default", name), e));
                return None;
            }
        },
        None => None,
    };

    Some(Param { families, default })
}

#[cfg(test)]
mod tests {
    use crate::config::parse_config;
    use super::*;
    use crate::setter::ColourSetter;

    fn build(toml: &str) -> Result<Runtime, ConfigError> {
        parse_config(toml).expect("valid toml").build()
    }

    fn validation_errors(toml: &str) -> Vec<String> {
        match build(toml) {
            Err(ConfigError::Validation(errors)) => errors,
            other => panic!("expected validation errors, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_config_builds_builtin_runtime() {
        let runtime = build("").unwrap();
        assert!(runtime.params.is_empty());
        assert_eq!(runtime.aliases, AliasTable::builtin());
        assert_eq!(runtime.registry.families().count(), 7);
    }

    #[test]
    fn test_custom_family_and_param() {
        let runtime = build(
            r#"
[aliases]
corp = ["brand", "web"]

[[family]]
name = "Brand"
[family.colours]
"Signal Red" = "RGB{R: 0xe1, G: 0x06, B: 0x00}"
accent = "web:teal"
ink = "black"

[params.background]
families = ["corp"]
default = "signal red"
"#,
        )
        .unwrap();

        let brand = Family::new("brand");
        assert_eq!(runtime.registry.lookup(&brand, "signal red"), Ok(Colour::rgb(0xe1, 6, 0)));
        assert_eq!(runtime.registry.lookup(&brand, "accent"), Ok(Colour::rgb(0, 128, 128)));

        let param = runtime.param("background").unwrap();
        assert_eq!(param.families.as_slice(), &[brand, Family::WEB]);
        assert_eq!(param.default.as_ref().map(|c| c.colour()), Some(Colour::rgb(0xe1, 6, 0)));

        let mut setter = runtime.named_setter("background").unwrap().unwrap();
        assert_eq!(setter.current_value(), "signal red");
        setter.set_with_value("teal").unwrap();
        assert_eq!(setter.value().colour(), Colour::rgb(0, 128, 128));
        assert!(runtime.named_setter("nonesuch").unwrap().is_none());
    }

    #[test]
    fn test_config_family_ids_match_case_insensitively() {
        let runtime = build(
            r#"
[aliases]
Corp = ["BRAND", " Web "]

[[family]]
name = "Brand"
[family.colours]
"signal red" = "RGB{R: 0xe1, G: 0x06, B: 0x00}"

[params.bg]
families = ["Brand", "X11"]
default = "Signal Red"

[params.fg]
families = ["CORP"]
"#,
        )
        .unwrap();

        let brand = Family::new("brand");
        assert_eq!(runtime.aliases.targets("corp"), Some(&[brand.clone(), Family::WEB][..]));
        assert_eq!(runtime.param("bg").unwrap().families.as_slice(), &[brand.clone(), Family::X11]);
        assert_eq!(runtime.param("fg").unwrap().families.as_slice(), &[brand, Family::WEB]);
    }

    #[test]
    fn test_named_setter_reports_invalid_param() {
        let mut runtime = Runtime::default();
        runtime.params.insert(
            "bad".to_string(),
            Param { families: FamilyList::new(vec![Family::CGA, Family::CGA]), default: None },
        );
        match runtime.named_setter("bad") {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("\"cga\" appears 2 times"), "{errors:?}");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_all_problems_reported_together() {
        let errors = validation_errors(
            r#"
[aliases]
web = ["x11"]
empty = []

[[family]]
name = "brand"
[family.colours]
bad = "nonesuch"

[params.a]
families = ["cga", "cga"]

[params.b]
families = ["any", "web"]
default = "red"
"#,
        );
        assert_eq!(errors.len(), 5, "{errors:#?}");
        assert!(errors[0].contains("'family.brand.colours.bad'"));
        assert!(errors.iter().any(|e| e.contains("alias \"web\" is also the name of a family")));
        assert!(errors.iter().any(|e| e.contains("alias \"empty\" does not refer to any family")));
        assert!(errors.iter().any(|e| e.contains("'params.a.families'")));
        assert!(errors.iter().any(|e| e.contains("'params.b.families'")));
    }

    #[test]
    fn test_duplicate_custom_family() {
        let errors = validation_errors(
            r#"
[[family]]
name = "web"
[family.colours]
red = "red"
"#,
        );
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("'family.web'"));
    }

    #[test]
    fn test_bad_param_default() {
        let errors = validation_errors(
            r#"
[params.border]
families = ["cga"]
default = "rebeccapurple"
"#,
        );
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("'params.border.default'"));
    }

    #[test]
    fn test_families_setter_uses_runtime_aliases() {
        let runtime = build("[aliases]\ngreens = [\"x11\", \"web\"]\n").unwrap();
        let mut setter = runtime.families_setter(FamilyList::empty()).unwrap();
        setter.set_with_value("greens,cga").unwrap();
        assert_eq!(setter.value().as_slice(), &[Family::X11, Family::WEB, Family::CGA]);
    }
}
