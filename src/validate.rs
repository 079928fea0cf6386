//! Validation of family lists and alias tables
//!
//! These checks catch defects in how a program declares its colour
//! parameters, not in what a user types. Every problem is collected so a
//! single report can name all of them.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::families::{Family, FamilyList, FamilyRegistry};
use crate::fmt::join_list;

/// A defect in a family list or alias table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Problem {
    /// The identifier at `position` is not a registered family
    InvalidFamily { family: Family, position: usize },
    /// The identifier appears at more than one position
    DuplicateFamily { family: Family, positions: Vec<usize> },
    /// The wildcard family shares the list with other entries
    WildcardNotExclusive { position: usize },
    /// An alias maps to a family that is not registered
    InvalidAliasTarget { alias: String, target: Family },
    /// An alias maps to no families at all
    EmptyAlias { alias: String },
    /// An alias has the same name as a registered family
    AliasShadowsFamily { alias: String },
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::InvalidFamily { family, position } => {
                write!(f, "\"{}\" is not a valid family (at position {})", family, position)
            }
            Problem::DuplicateFamily { family, positions } => write!(
                f,
                "\"{}\" appears {} times in the family list, at positions: {:?}",
                family,
                positions.len(),
                positions
            ),
            Problem::WildcardNotExclusive { position } => write!(
                f,
                "the wildcard family \"{}\" (at position {}) is not the only family",
                Family::ANY,
                position
            ),
            Problem::InvalidAliasTarget { alias, target } => {
                write!(
                    f,
                    "alias \"{}\" refers to \"{}\" which is not a valid family",
                    alias, target
                )
            }
            Problem::EmptyAlias { alias } => {
                write!(f, "alias \"{}\" does not refer to any family", alias)
            }
            Problem::AliasShadowsFamily { alias } => {
                write!(f, "alias \"{}\" is also the name of a family", alias)
            }
        }
    }
}

/// A non-empty set of problems found while checking configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", summarize(.problems))]
pub struct ValidationError {
    pub problems: Vec<Problem>,
}

impl ValidationError {
    /// `Ok(())` when there are no problems.
    pub fn check(problems: Vec<Problem>) -> Result<(), ValidationError> {
        if problems.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { problems })
        }
    }
}

fn summarize(problems: &[Problem]) -> String {
    let noun = if problems.len() == 1 { "problem" } else { "problems" };
    format!("{} {} found: {}", problems.len(), noun, join_list(problems, ", ", " and "))
}

/// Check a family list against the registry.
///
/// Reports, in this order: every unregistered identifier (by position),
/// every identifier that repeats (in order of first appearance), and every
/// wildcard entry in a list with more than one entry. A repeated wildcard
/// is reported both as a duplicate and as non-exclusive.
pub fn validate_family_list(families: &FamilyList, registry: &FamilyRegistry) -> Vec<Problem> {
    let mut problems = Vec::new();
    let mut seen: Vec<(&Family, Vec<usize>)> = Vec::new();

    for (position, family) in families.iter().enumerate() {
        if !registry.is_valid_family(family) {
            problems.push(Problem::InvalidFamily { family: family.clone(), position });
        }
        match seen.iter_mut().find(|(f, _)| *f == family) {
            Some((_, positions)) => positions.push(position),
            None => seen.push((family, vec![position])),
        }
    }

    for (family, positions) in seen {
        if positions.len() > 1 {
            problems.push(Problem::DuplicateFamily { family: family.clone(), positions });
        }
    }

    if families.len() > 1 {
        for (position, family) in families.iter().enumerate() {
            if family.is_wildcard() {
                problems.push(Problem::WildcardNotExclusive { position });
            }
        }
    }

    problems
}

impl FamilyList {
    /// Validate this list, returning it unchanged if there are no problems.
    pub fn checked(self, registry: &FamilyRegistry) -> Result<Self, ValidationError> {
        ValidationError::check(validate_family_list(&self, registry))?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(families: Vec<Family>) -> Vec<Problem> {
        validate_family_list(&FamilyList::new(families), FamilyRegistry::builtin())
    }

    #[test]
    fn test_valid_lists() {
        assert!(validate(vec![]).is_empty());
        assert!(validate(vec![Family::ANY]).is_empty());
        assert!(validate(vec![Family::X11, Family::WEB]).is_empty());
    }

    #[test]
    fn test_duplicate_reported_once_with_positions() {
        assert_eq!(
            validate(vec![Family::CGA, Family::WEB, Family::CGA]),
            vec![Problem::DuplicateFamily { family: Family::CGA, positions: vec![0, 2] }]
        );
    }

    #[test]
    fn test_wildcard_not_exclusive() {
        assert_eq!(
            validate(vec![Family::ANY, Family::X11]),
            vec![Problem::WildcardNotExclusive { position: 0 }]
        );
    }

    #[test]
    fn test_invalid_duplicates_report_every_problem() {
        let bad = Family::new("nonesuch");
        assert_eq!(
            validate(vec![bad.clone(), bad.clone()]),
            vec![
                Problem::InvalidFamily { family: bad.clone(), position: 0 },
                Problem::InvalidFamily { family: bad.clone(), position: 1 },
                Problem::DuplicateFamily { family: bad, positions: vec![0, 1] },
            ]
        );
    }

    #[test]
    fn test_repeated_wildcard_reports_both_checks() {
        assert_eq!(
            validate(vec![Family::ANY, Family::ANY]),
            vec![
                Problem::DuplicateFamily { family: Family::ANY, positions: vec![0, 1] },
                Problem::WildcardNotExclusive { position: 0 },
                Problem::WildcardNotExclusive { position: 1 },
            ]
        );
    }

    #[test]
    fn test_duplicates_in_order_of_first_appearance() {
        let problems = validate(vec![
            Family::CGA,
            Family::CRAYOLA,
            Family::CGA,
            Family::CRAYOLA,
            Family::new("nonesuch"),
        ]);
        assert_eq!(problems.len(), 3);
        assert_eq!(
            problems[0],
            Problem::InvalidFamily { family: Family::new("nonesuch"), position: 4 }
        );
        assert_eq!(
            problems[1],
            Problem::DuplicateFamily { family: Family::CGA, positions: vec![0, 2] }
        );
        assert_eq!(
            problems[2],
            Problem::DuplicateFamily { family: Family::CRAYOLA, positions: vec![1, 3] }
        );
    }

    #[test]
    fn test_validation_error_message() {
        let err = FamilyList::new(vec![Family::CGA, Family::CGA])
            .checked(FamilyRegistry::builtin())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "1 problem found: \"cga\" appears 2 times in the family list, at positions: [0, 1]"
        );

        let err = FamilyList::new(vec![Family::new("a"), Family::new("b")])
            .checked(FamilyRegistry::builtin())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "2 problems found: \"a\" is not a valid family (at position 0) and \
             \"b\" is not a valid family (at position 1)"
        );
    }

    #[test]
    fn test_checked_passes_valid_list_through() {
        let list = FamilyList::new(vec![Family::WEB, Family::X11]);
        assert_eq!(list.clone().checked(FamilyRegistry::builtin()), Ok(list));
    }
}
