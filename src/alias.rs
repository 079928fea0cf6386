//! Family aliases
//!
//! An alias is a convenience identifier standing for one or more families,
//! e.g. `fnb` for `farrow-and-ball`. Aliases are only expanded where a list
//! of families is typed by a user; they are not family identifiers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::families::{Family, FamilyRegistry};
use crate::validate::{Problem, ValidationError};

/// Alias for the Farrow & Ball family.
pub const FARROW_AND_BALL_ALIAS: &str = "fnb";

/// Mapping from alias to the families it expands to.
///
/// Alias names are stored lower-case and matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Vec<Family>>", into = "BTreeMap<String, Vec<Family>>")]
pub struct AliasTable {
    aliases: BTreeMap<String, Vec<Family>>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self { aliases: BTreeMap::new() }
    }

    /// The aliases every program gets.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.insert(FARROW_AND_BALL_ALIAS, vec![Family::FARROW_AND_BALL]);
        table
    }

    /// Add or replace an alias. Target ids are normalized.
    pub fn insert(&mut self, alias: &str, targets: Vec<Family>) {
        let targets = targets.iter().map(|f| Family::normalized(f.id())).collect();
        self.aliases.insert(alias.trim().to_lowercase(), targets);
    }

    /// Add every alias in `other`, replacing any with the same name.
    pub fn merge(&mut self, other: AliasTable) {
        self.aliases.extend(other.aliases);
    }

    pub fn is_alias(&self, name: &str) -> bool {
        self.aliases.contains_key(&name.to_lowercase())
    }

    /// The families an alias expands to.
    pub fn targets(&self, name: &str) -> Option<&[Family]> {
        self.aliases.get(&name.to_lowercase()).map(Vec::as_slice)
    }

    /// Alias names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.aliases.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Family])> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Validate this table, returning it unchanged if there are no problems.
    pub fn checked(self, registry: &FamilyRegistry) -> Result<Self, ValidationError> {
        ValidationError::check(validate_aliases(&self, registry))?;
        Ok(self)
    }
}

impl From<BTreeMap<String, Vec<Family>>> for AliasTable {
    fn from(raw: BTreeMap<String, Vec<Family>>) -> Self {
        let mut table = Self::new();
        for (alias, targets) in raw {
            table.insert(&alias, targets);
        }
        table
    }
}

impl From<AliasTable> for BTreeMap<String, Vec<Family>> {
    fn from(table: AliasTable) -> Self {
        table.aliases
    }
}

/// Check every alias against the registry.
///
/// The table must be re-checked whenever it or the registry changes.
pub fn validate_aliases(table: &AliasTable, registry: &FamilyRegistry) -> Vec<Problem> {
    let mut problems = Vec::new();

    for (alias, targets) in table.iter() {
        if registry.is_valid_family(&Family::new(alias)) {
            problems.push(Problem::AliasShadowsFamily { alias: alias.to_string() });
        }
        if targets.is_empty() {
            problems.push(Problem::EmptyAlias { alias: alias.to_string() });
        }
        for target in targets {
            if !registry.is_valid_family(target) {
                problems.push(Problem::InvalidAliasTarget {
                    alias: alias.to_string(),
                    target: target.clone(),
                });
            }
        }
    }

    problems
}
