//! Colour families: named dictionaries of colour names.
//!
//! The built-in families can be referenced by identifier (`web`, `x11`, ...)
//! and the [`FamilyRegistry`] binds each identifier to its dictionary. The
//! registry is read-only once built; the built-in one is shared process-wide.

mod builtin;

use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::{Arc, LazyLock};
use thiserror::Error;

use crate::colour::Colour;

/// Identifier of a colour family.
///
/// Two families are equal iff their identifiers are equal. An identifier
/// need not name a registered family; use
/// [`FamilyRegistry::is_valid_family`] to check. Deserialized ids are
/// normalized like user-typed ones.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Family(Cow<'static, str>);

impl Family {
    /// The default family, used when no families are given.
    pub const STANDARD: Family = Family(Cow::Borrowed("standard"));
    pub const WEB: Family = Family(Cow::Borrowed("web"));
    pub const X11: Family = Family(Cow::Borrowed("x11"));
    pub const CGA: Family = Family(Cow::Borrowed("cga"));
    pub const CRAYOLA: Family = Family(Cow::Borrowed("crayola"));
    pub const PANTONE: Family = Family(Cow::Borrowed("pantone"));
    pub const FARROW_AND_BALL: Family = Family(Cow::Borrowed("farrow-and-ball"));
    /// The wildcard family: every registered name, without narrowing.
    pub const ANY: Family = Family(Cow::Borrowed("any"));

    pub fn new(id: impl Into<String>) -> Self {
        Family(Cow::Owned(id.into()))
    }

    /// An identifier as typed by a user: trimmed and lower-cased.
    pub fn normalized(text: &str) -> Self {
        Family::new(text.trim().to_lowercase())
    }

    pub fn id(&self) -> &str {
        &self.0
    }

    pub fn is_wildcard(&self) -> bool {
        *self == Family::ANY
    }
}

impl<'de> Deserialize<'de> for Family {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Family::normalized(&text))
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered, caller-supplied priority list of families.
///
/// An empty list means "the standard family only". The list is not
/// validated on construction; see [`crate::validate::validate_family_list`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FamilyList(Vec<Family>);

impl FamilyList {
    pub fn new(families: Vec<Family>) -> Self {
        Self(families)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Family> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Family] {
        &self.0
    }

    /// True if name lookups should use only the standard family: the list
    /// is empty or holds exactly the standard family.
    pub fn uses_default(&self) -> bool {
        match self.0.as_slice() {
            [] => true,
            [only] => *only == Family::STANDARD,
            _ => false,
        }
    }

    /// True if the list holds exactly the wildcard family.
    pub fn is_wildcard_only(&self) -> bool {
        matches!(self.0.as_slice(), [only] if only.is_wildcard())
    }
}

impl From<Vec<Family>> for FamilyList {
    fn from(families: Vec<Family>) -> Self {
        Self(families)
    }
}

impl FromIterator<Family> for FamilyList {
    fn from_iter<I: IntoIterator<Item = Family>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FamilyList {
    type Item = &'a Family;
    type IntoIter = std::slice::Iter<'a, Family>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for FamilyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<&str> = self.0.iter().map(Family::id).collect();
        f.write_str(&ids.join(", "))
    }
}

/// Error from a registry lookup or registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RegistryError {
    #[error("unknown colour family: \"{0}\"")]
    UnknownFamily(Family),
    #[error("\"{name}\" is not a colour in the {family} family")]
    UnknownColourName { family: Family, name: String },
    #[error("the {0} family is already registered")]
    DuplicateFamily(Family),
    #[error("colour \"{name}\" appears more than once in the {family} family")]
    DuplicateColourName { family: Family, name: String },
    #[error("the wildcard family \"{}\" cannot be given colours", Family::ANY)]
    WildcardFamily,
}

#[derive(Debug, Clone)]
struct FamilyEntry {
    family: Family,
    colours: BTreeMap<String, Colour>,
}

/// The catalogue of known families and their dictionaries.
///
/// Names are stored lower-cased and looked up case-insensitively. Families
/// keep their registration order, which is the search order for the
/// wildcard family.
#[derive(Debug, Clone)]
pub struct FamilyRegistry {
    entries: Vec<FamilyEntry>,
}

static WILDCARD: Family = Family::ANY;

static BUILTIN: LazyLock<Arc<FamilyRegistry>> =
    LazyLock::new(|| Arc::new(FamilyRegistry::from_tables(builtin::TABLES)));

impl FamilyRegistry {
    /// The shared registry of built-in families.
    pub fn builtin() -> &'static FamilyRegistry {
        &BUILTIN
    }

    /// A shared handle on the built-in registry.
    pub fn shared_builtin() -> Arc<FamilyRegistry> {
        Arc::clone(&BUILTIN)
    }

    /// A registry with no families; only the wildcard is valid.
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    fn from_tables(tables: &[(Family, &[(&str, Colour)])]) -> Self {
        let entries = tables
            .iter()
            .map(|(family, colours)| FamilyEntry {
                family: family.clone(),
                colours: colours.iter().map(|(n, c)| (n.to_lowercase(), *c)).collect(),
            })
            .collect();
        Self { entries }
    }

    /// Register a new family.
    ///
    /// Fails, leaving the registry untouched, if the identifier is already
    /// registered, is the wildcard, or if a name repeats (case-insensitively).
    pub fn add_family<I, S>(&mut self, family: Family, colours: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = (S, Colour)>,
        S: AsRef<str>,
    {
        if family.is_wildcard() {
            return Err(RegistryError::WildcardFamily);
        }
        if self.entry(&family).is_some() {
            return Err(RegistryError::DuplicateFamily(family));
        }

        let mut dict = BTreeMap::new();
        for (name, colour) in colours {
            let name = name.as_ref().to_lowercase();
            if dict.insert(name.clone(), colour).is_some() {
                return Err(RegistryError::DuplicateColourName { family, name });
            }
        }

        tracing::debug!(family = %family, colours = dict.len(), "registered colour family");
        self.entries.push(FamilyEntry { family, colours: dict });
        Ok(())
    }

    fn entry(&self, family: &Family) -> Option<&FamilyEntry> {
        self.entries.iter().find(|e| e.family == *family)
    }

    /// The families with dictionaries, in registration order.
    pub fn families(&self) -> impl Iterator<Item = &Family> {
        self.entries.iter().map(|e| &e.family)
    }

    /// Every valid identifier: the registered families then the wildcard.
    pub fn identifiers(&self) -> Vec<&Family> {
        self.families().chain(std::iter::once(&WILDCARD)).collect()
    }

    pub fn is_valid_family(&self, family: &Family) -> bool {
        family.is_wildcard() || self.entry(family).is_some()
    }

    /// The names in a family, sorted. The wildcard gives the deduplicated
    /// union of every family's names.
    pub fn names_of(&self, family: &Family) -> Result<Vec<&str>, RegistryError> {
        if family.is_wildcard() {
            let all: BTreeSet<&str> = self
                .entries
                .iter()
                .flat_map(|e| e.colours.keys().map(String::as_str))
                .collect();
            return Ok(all.into_iter().collect());
        }

        self.entry(family)
            .map(|e| e.colours.keys().map(String::as_str).collect())
            .ok_or_else(|| RegistryError::UnknownFamily(family.clone()))
    }

    /// Look up a name in a family, case-insensitively.
    ///
    /// The wildcard searches every family in registration order.
    pub fn lookup(&self, family: &Family, name: &str) -> Result<Colour, RegistryError> {
        let key = name.to_lowercase();

        let found = if family.is_wildcard() {
            self.entries.iter().find_map(|e| e.colours.get(&key))
        } else {
            let entry =
                self.entry(family).ok_or_else(|| RegistryError::UnknownFamily(family.clone()))?;
            entry.colours.get(&key)
        };

        found.copied().ok_or_else(|| RegistryError::UnknownColourName {
            family: family.clone(),
            name: name.to_string(),
        })
    }

    /// The alphabetically first name in `family` whose value is `colour`.
    pub fn first_name_of(&self, family: &Family, colour: Colour) -> Option<&str> {
        self.entry(family)?
            .colours
            .iter()
            .find(|(_, c)| **c == colour)
            .map(|(n, _)| n.as_str())
    }
}

impl Default for FamilyRegistry {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
