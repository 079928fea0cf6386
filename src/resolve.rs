//! Colour name resolution against a family list.

use thiserror::Error;

use crate::colour::NamedColour;
use crate::families::{Family, FamilyList, FamilyRegistry};

/// A name that no family in the list defines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no colour named \"{name}\" in: {}", display_families(.families_tried))]
pub struct ColourNotFound {
    pub name: String,
    pub families_tried: Vec<Family>,
}

fn display_families(families: &[Family]) -> String {
    FamilyList::new(families.to_vec()).to_string()
}

/// The families a name is looked up in, in priority order.
///
/// An empty list, or one holding only the standard family, means the
/// standard family alone.
pub fn search_order(families: &FamilyList) -> Vec<Family> {
    if families.uses_default() {
        vec![Family::STANDARD]
    } else {
        families.iter().cloned().collect()
    }
}

/// Resolve a colour name, case-insensitively.
///
/// Families are tried in list order and the first match wins, so when
/// several families define the same name the earlier one decides its value.
/// The resolved colour is named by the lower-cased input.
pub fn resolve(
    registry: &FamilyRegistry,
    name: &str,
    families: &FamilyList,
) -> Result<NamedColour, ColourNotFound> {
    let key = name.to_lowercase();
    let order = search_order(families);

    for family in &order {
        if let Ok(colour) = registry.lookup(family, &key) {
            tracing::debug!(name = %key, family = %family, "resolved colour name");
            return Ok(NamedColour::new(colour, key));
        }
    }

    Err(ColourNotFound { name: name.to_string(), families_tried: order })
}

/// Every name a lookup with this family list could match, sorted and
/// deduplicated. Unregistered families contribute nothing.
pub fn candidate_names<'r>(registry: &'r FamilyRegistry, families: &FamilyList) -> Vec<&'r str> {
    let mut names: Vec<&str> = search_order(families)
        .iter()
        .filter_map(|family| match registry.names_of(family) {
            Ok(names) => Some(names),
            Err(e) => {
                tracing::debug!("skipping family for suggestions: {}", e);
                None
            }
        })
        .flatten()
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Colour;

    fn list(families: &[Family]) -> FamilyList {
        FamilyList::new(families.to_vec())
    }

    #[test]
    fn test_default_family_used_for_empty_list() {
        let reg = FamilyRegistry::builtin();
        let nc = resolve(reg, "Green", &FamilyList::empty()).expect("green is standard");
        assert_eq!(nc.colour(), Colour::rgb(0, 128, 0));
        assert_eq!(nc.name(), Some("green"));
    }

    #[test]
    fn test_first_family_wins() {
        let reg = FamilyRegistry::builtin();
        let x11_first = resolve(reg, "green", &list(&[Family::X11, Family::WEB])).unwrap();
        assert_eq!(x11_first.colour(), Colour::rgb(0, 255, 0));
        let web_first = resolve(reg, "green", &list(&[Family::WEB, Family::X11])).unwrap();
        assert_eq!(web_first.colour(), Colour::rgb(0, 128, 0));
    }

    #[test]
    fn test_later_family_searched_on_miss() {
        let reg = FamilyRegistry::builtin();
        let nc = resolve(reg, "Hague Blue", &list(&[Family::CGA, Family::FARROW_AND_BALL]))
            .expect("found in the second family");
        assert_eq!(nc.colour(), Colour::rgb(49, 66, 79));
    }

    #[test]
    fn test_not_found_lists_families_tried() {
        let reg = FamilyRegistry::builtin();
        let err = resolve(reg, "hague blue", &FamilyList::empty()).unwrap_err();
        assert_eq!(err.families_tried, vec![Family::STANDARD]);

        let err = resolve(reg, "nope", &list(&[Family::CGA, Family::WEB])).unwrap_err();
        assert_eq!(err.name, "nope");
        assert_eq!(err.families_tried, vec![Family::CGA, Family::WEB]);
        assert_eq!(err.to_string(), "no colour named \"nope\" in: cga, web");
    }

    #[test]
    fn test_wildcard_searches_everything() {
        let reg = FamilyRegistry::builtin();
        let nc = resolve(reg, "very peri", &list(&[Family::ANY])).expect("pantone name");
        assert_eq!(nc.colour(), Colour::rgb(102, 103, 171));
    }

    #[test]
    fn test_candidate_names() {
        let reg = FamilyRegistry::builtin();
        let names = candidate_names(reg, &list(&[Family::CGA, Family::WEB]));
        assert!(names.contains(&"light magenta"));
        assert!(names.contains(&"rebeccapurple"));
        assert_eq!(names.iter().filter(|n| **n == "black").count(), 1);

        let names = candidate_names(reg, &list(&[Family::new("nonesuch"), Family::CGA]));
        assert_eq!(names.len(), 16);
    }
}
