//! Setters binding colour text to a value
//!
//! Each setter owns the value it sets and the families it resolves names
//! against. The family list is validated once, when the setter is built, so
//! only user input can fail afterwards. A failed `set_with_value` leaves the
//! previous value in place.

use std::sync::Arc;

use crate::alias::{validate_aliases, AliasTable};
use crate::colour::{Colour, NamedColour};
use crate::families::{Family, FamilyList, FamilyRegistry};
use crate::fmt::{describe_colour, format_colour, format_named, format_pair};
use crate::parser::{
    describe_allowed_pair_values, describe_allowed_values, ColourParser, ParseError,
};
use crate::suggest::suggestion_suffix;
use crate::validate::{validate_family_list, ValidationError};

/// Default separator between entries of a family list.
pub const FAMILY_LIST_SEPARATOR: &str = ",";

/// A value that can be set from colour text.
pub trait ColourSetter {
    /// Parse `text` and, on success, replace the current value.
    fn set_with_value(&mut self, text: &str) -> Result<(), ParseError>;

    /// Help text describing the accepted values.
    fn allowed_values(&self) -> String;

    /// Short name for the kind of value.
    fn value_description(&self) -> &'static str;

    /// The current value, rendered so that it parses back to itself.
    fn current_value(&self) -> String;
}

/// Sets a single colour.
#[derive(Debug, Clone)]
pub struct RgbSetter {
    value: Colour,
    families: FamilyList,
    registry: Arc<FamilyRegistry>,
}

impl RgbSetter {
    /// A setter resolving names against the built-in families.
    pub fn new(initial: Colour, families: FamilyList) -> Result<Self, ValidationError> {
        Self::with_registry(initial, families, FamilyRegistry::shared_builtin())
    }

    pub fn with_registry(
        initial: Colour,
        families: FamilyList,
        registry: Arc<FamilyRegistry>,
    ) -> Result<Self, ValidationError> {
        let families = families.checked(&registry)?;
        Ok(Self { value: initial, families, registry })
    }

    pub fn value(&self) -> Colour {
        self.value
    }

    pub fn families(&self) -> &FamilyList {
        &self.families
    }
}

impl ColourSetter for RgbSetter {
    fn set_with_value(&mut self, text: &str) -> Result<(), ParseError> {
        self.value = ColourParser::new(&self.registry).parse_colour(text, &self.families)?;
        Ok(())
    }

    fn allowed_values(&self) -> String {
        describe_allowed_values(&self.families)
    }

    fn value_description(&self) -> &'static str {
        "colour"
    }

    /// A standard-family name only when it resolves to the same value
    /// under this setter's families, else the literal form.
    fn current_value(&self) -> String {
        let described = describe_colour(&self.registry, self.value);
        let parser = ColourParser::new(&self.registry);
        match parser.parse_colour(&described, &self.families) {
            Ok(colour) if colour == self.value => described,
            _ => format_colour(self.value),
        }
    }
}

/// Sets a colour, remembering the name it was given.
#[derive(Debug, Clone)]
pub struct NamedColourSetter {
    value: NamedColour,
    families: FamilyList,
    registry: Arc<FamilyRegistry>,
}

impl NamedColourSetter {
    pub fn new(initial: NamedColour, families: FamilyList) -> Result<Self, ValidationError> {
        Self::with_registry(initial, families, FamilyRegistry::shared_builtin())
    }

    pub fn with_registry(
        initial: NamedColour,
        families: FamilyList,
        registry: Arc<FamilyRegistry>,
    ) -> Result<Self, ValidationError> {
        let families = families.checked(&registry)?;
        Ok(Self { value: initial, families, registry })
    }

    pub fn value(&self) -> &NamedColour {
        &self.value
    }
}

impl ColourSetter for NamedColourSetter {
    fn set_with_value(&mut self, text: &str) -> Result<(), ParseError> {
        self.value = ColourParser::new(&self.registry).parse_named_colour(text, &self.families)?;
        Ok(())
    }

    fn allowed_values(&self) -> String {
        describe_allowed_values(&self.families)
    }

    fn value_description(&self) -> &'static str {
        "colour"
    }

    fn current_value(&self) -> String {
        format_named(&self.value)
    }
}

/// Sets a pair of colours, e.g. foreground and background.
#[derive(Debug, Clone)]
pub struct RgbPairSetter {
    value: (NamedColour, NamedColour),
    families: FamilyList,
    registry: Arc<FamilyRegistry>,
}

impl RgbPairSetter {
    pub fn new(initial: (Colour, Colour), families: FamilyList) -> Result<Self, ValidationError> {
        Self::with_registry(initial, families, FamilyRegistry::shared_builtin())
    }

    pub fn with_registry(
        initial: (Colour, Colour),
        families: FamilyList,
        registry: Arc<FamilyRegistry>,
    ) -> Result<Self, ValidationError> {
        let families = families.checked(&registry)?;
        let value = (NamedColour::unnamed(initial.0), NamedColour::unnamed(initial.1));
        Ok(Self { value, families, registry })
    }

    pub fn value(&self) -> (Colour, Colour) {
        (self.value.0.colour(), self.value.1.colour())
    }
}

impl ColourSetter for RgbPairSetter {
    fn set_with_value(&mut self, text: &str) -> Result<(), ParseError> {
        self.value =
            ColourParser::new(&self.registry).parse_paired_named_colours(text, &self.families)?;
        Ok(())
    }

    fn allowed_values(&self) -> String {
        describe_allowed_pair_values(&self.families)
    }

    fn value_description(&self) -> &'static str {
        "colour;colour"
    }

    fn current_value(&self) -> String {
        format_pair(&self.value.0, &self.value.1)
    }
}

/// Parse a delimited list of family identifiers and aliases.
///
/// Entries are trimmed and matched case-insensitively; empty entries are
/// skipped. Aliases expand in place. The assembled list must pass
/// [`validate_family_list`].
pub fn parse_family_list(
    text: &str,
    separator: &str,
    registry: &FamilyRegistry,
    aliases: &AliasTable,
) -> Result<FamilyList, ParseError> {
    let mut families = Vec::new();

    for entry in text.split(separator) {
        let family = Family::normalized(entry);
        let id = family.id();
        if id.is_empty() {
            continue;
        }

        if registry.is_valid_family(&family) {
            families.push(family);
        } else if let Some(targets) = aliases.targets(id) {
            tracing::debug!(alias = %id, "expanding family alias");
            families.extend(targets.iter().cloned());
        } else {
            let ids = registry.identifiers();
            let candidates = ids.into_iter().map(Family::id).chain(aliases.names());
            return Err(ParseError::UnknownFamily {
                family: entry.trim().to_string(),
                suggestion: suggestion_suffix(&id, candidates),
            });
        }
    }

    FamilyList::new(families).checked(registry).map_err(ParseError::from)
}

/// Sets the list of families that colour names are resolved against.
#[derive(Debug, Clone)]
pub struct FamiliesSetter {
    value: FamilyList,
    separator: String,
    aliases: AliasTable,
    registry: Arc<FamilyRegistry>,
}

impl FamiliesSetter {
    /// A setter using the built-in families and aliases.
    pub fn new(initial: FamilyList) -> Result<Self, ValidationError> {
        Self::with_registry(initial, AliasTable::builtin(), FamilyRegistry::shared_builtin())
    }

    /// Fails if the alias table or the initial list has problems; every
    /// problem from both is reported.
    pub fn with_registry(
        initial: FamilyList,
        aliases: AliasTable,
        registry: Arc<FamilyRegistry>,
    ) -> Result<Self, ValidationError> {
        let mut problems = validate_aliases(&aliases, &registry);
        problems.extend(validate_family_list(&initial, &registry));
        ValidationError::check(problems)?;

        Ok(Self {
            value: initial,
            separator: FAMILY_LIST_SEPARATOR.to_string(),
            aliases,
            registry,
        })
    }

    /// Use a different separator between entries.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn value(&self) -> &FamilyList {
        &self.value
    }
}

impl ColourSetter for FamiliesSetter {
    fn set_with_value(&mut self, text: &str) -> Result<(), ParseError> {
        self.value = parse_family_list(text, &self.separator, &self.registry, &self.aliases)?;
        Ok(())
    }

    fn allowed_values(&self) -> String {
        let mut ids: Vec<&str> = self.registry.identifiers().into_iter().map(Family::id).collect();
        ids.extend(self.aliases.names());
        format!(
            "a list of colour families separated by '{}', from: {}",
            self.separator,
            ids.join(", ")
        )
    }

    fn value_description(&self) -> &'static str {
        "colour-families"
    }

    fn current_value(&self) -> String {
        self.value.iter().map(Family::id).collect::<Vec<_>>().join(&self.separator)
    }
}
