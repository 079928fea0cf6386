//! Colour text parsing
//!
//! Three grammars are tried in order:
//! 1. Structured literal: `RGB{R: 0xff, G: 0, B: 0}` (`RGB`, `RGBA` or no
//!    tag; any case; channels in decimal, `0x` hex or `0o` octal)
//! 2. Family-qualified name: `pantone:black olive`
//! 3. Bare name: `lawn green`, resolved against a family list
//!
//! Unresolved names and families produce errors carrying "did you mean"
//! suggestions.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::colour::{Colour, Component, NamedColour};
use crate::families::{Family, FamilyList, FamilyRegistry, RegistryError};
use crate::fmt::{join_list, PAIR_SEPARATOR};
use crate::resolve::{candidate_names, resolve};
use crate::suggest::suggestion_suffix;
use crate::validate::ValidationError;

static LITERAL_INTRO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?i:rgba?)?\s*\{").expect("literal intro pattern is valid")
});
static LITERAL_OUTRO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\}\s*$").expect("literal outro pattern is valid"));

/// Why a channel value could not be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChannelValueError {
    #[error("value out of range")]
    OutOfRange,
    #[error("invalid syntax")]
    Malformed,
}

/// Error parsing user-supplied colour text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    #[error("the value starts with {intro:?} but has no trailing '}}'")]
    UnterminatedLiteral { intro: String },

    #[error(
        "bad colour component: {segment:?}, the name and value should be separated by a colon (:)"
    )]
    MissingSeparator { segment: String },

    #[error("unknown colour component: {name:?}, allowed values: {allowed}")]
    UnknownComponent { name: String, allowed: String },

    #[error("cannot convert the {component} value ({raw:?}) to a valid number: {cause}")]
    InvalidChannelValue { component: Component, raw: String, cause: ChannelValueError },

    #[error("bad colour family name: {family:?}{suggestion}")]
    UnknownFamily { family: String, suggestion: String },

    #[error("bad colour name: {name:?}, not found in the {family} family{suggestion}")]
    UnknownColourName { family: Family, name: String, suggestion: String },

    #[error("bad colour name ({name:?}){suggestion}")]
    ColourNotFound { name: String, families_tried: Vec<Family>, suggestion: String },

    #[error("missing '{0}' - two colours separated by {0} are needed", PAIR_SEPARATOR)]
    MissingPairSeparator,

    #[error(transparent)]
    InvalidFamilyList(#[from] ValidationError),
}

/// Parse a channel value: decimal, `0x` hex or `0o` octal, 0 to 255.
pub fn parse_channel_value(raw: &str) -> Result<u8, ChannelValueError> {
    let (digits, radix) = if let Some(hex) = raw.strip_prefix("0x").or(raw.strip_prefix("0X")) {
        (hex, 16)
    } else if let Some(oct) = raw.strip_prefix("0o").or(raw.strip_prefix("0O")) {
        (oct, 8)
    } else {
        (raw, 10)
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(ChannelValueError::Malformed);
    }

    // Digits are valid, so the only possible failure is overflow
    let value = u64::from_str_radix(digits, radix).map_err(|_| ChannelValueError::OutOfRange)?;
    u8::try_from(value).map_err(|_| ChannelValueError::OutOfRange)
}

/// True if the text opens a structured literal.
pub fn is_structured_literal(text: &str) -> bool {
    LITERAL_INTRO.is_match(text)
}

/// Parse a structured literal such as `RGB{R: 0xff, G: 0, B: 0}`.
///
/// Omitted red, green and blue channels are 0; omitted alpha is 255. A
/// component given twice takes its last value.
pub fn parse_structured_literal(text: &str) -> Result<Colour, ParseError> {
    let intro = LITERAL_INTRO.find(text).ok_or_else(|| ParseError::UnterminatedLiteral {
        intro: text.trim().to_string(),
    })?;
    let outro = LITERAL_OUTRO.find_at(text, intro.end()).ok_or_else(|| {
        ParseError::UnterminatedLiteral { intro: intro.as_str().trim().to_string() }
    })?;

    let body = &text[intro.end()..outro.start()];
    let mut colour = Colour::default();

    for segment in body.split(',') {
        let (tag, raw) = segment
            .split_once(':')
            .ok_or_else(|| ParseError::MissingSeparator { segment: segment.to_string() })?;

        let tag = tag.trim();
        let component = Component::from_tag(tag).ok_or_else(|| {
            let mut letters: Vec<char> = Component::ALL.iter().map(|c| c.letter()).collect();
            letters.sort_unstable();
            ParseError::UnknownComponent {
                name: tag.to_string(),
                allowed: join_list(&letters, ", ", " or "),
            }
        })?;

        let raw = raw.trim();
        let value = parse_channel_value(raw).map_err(|cause| ParseError::InvalidChannelValue {
            component,
            raw: raw.to_string(),
            cause,
        })?;
        colour = colour.with_channel(component, value);
    }

    Ok(colour)
}

/// Parses colour text against a registry.
///
/// The free functions in this module use the built-in registry; use this
/// type directly for a registry extended with custom families.
#[derive(Debug, Clone, Copy)]
pub struct ColourParser<'r> {
    registry: &'r FamilyRegistry,
}

impl<'r> ColourParser<'r> {
    pub fn new(registry: &'r FamilyRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r FamilyRegistry {
        self.registry
    }

    /// Parse colour text, keeping the name it resolved from (if any).
    ///
    /// A family-qualified result is named `family:name` so that the name
    /// parses back to the same colour.
    pub fn parse_named_colour(
        &self,
        text: &str,
        families: &FamilyList,
    ) -> Result<NamedColour, ParseError> {
        if is_structured_literal(text) {
            return parse_structured_literal(text).map(NamedColour::unnamed);
        }

        if text.matches(':').count() == 1 {
            if let Some((family, name)) = text.split_once(':') {
                return self.parse_qualified(family, name);
            }
        }

        self.parse_bare_name(text, families)
    }

    /// Parse colour text to a colour value.
    pub fn parse_colour(&self, text: &str, families: &FamilyList) -> Result<Colour, ParseError> {
        self.parse_named_colour(text, families).map(|nc| nc.colour())
    }

    /// Parse two colours separated by `;`, each parsed independently.
    pub fn parse_paired_colours(
        &self,
        text: &str,
        families: &FamilyList,
    ) -> Result<(Colour, Colour), ParseError> {
        let (first, second) = self.parse_paired_named_colours(text, families)?;
        Ok((first.colour(), second.colour()))
    }

    /// As [`ColourParser::parse_paired_colours`], keeping names.
    pub fn parse_paired_named_colours(
        &self,
        text: &str,
        families: &FamilyList,
    ) -> Result<(NamedColour, NamedColour), ParseError> {
        let (first, second) =
            text.split_once(PAIR_SEPARATOR).ok_or(ParseError::MissingPairSeparator)?;
        Ok((self.parse_named_colour(first, families)?, self.parse_named_colour(second, families)?))
    }

    fn parse_qualified(&self, family_text: &str, name: &str) -> Result<NamedColour, ParseError> {
        let family_id = family_text.trim().to_lowercase();
        let family = Family::new(family_id.clone());
        let name = name.trim();

        if !self.registry.is_valid_family(&family) {
            let ids = self.registry.identifiers();
            return Err(ParseError::UnknownFamily {
                family: family_text.to_string(),
                suggestion: suggestion_suffix(&family_id, ids.into_iter().map(Family::id)),
            });
        }

        match self.registry.lookup(&family, name) {
            Ok(colour) => {
                let qualified = format!("{}:{}", family, name.to_lowercase());
                Ok(NamedColour::new(colour, qualified))
            }
            Err(RegistryError::UnknownColourName { .. }) => {
                let names = self.registry.names_of(&family).unwrap_or_default();
                Err(ParseError::UnknownColourName {
                    family,
                    name: name.to_string(),
                    suggestion: suggestion_suffix(&name.to_lowercase(), names),
                })
            }
            Err(e) => {
                tracing::debug!("qualified lookup failed: {}", e);
                Err(ParseError::UnknownFamily {
                    family: family_text.to_string(),
                    suggestion: String::new(),
                })
            }
        }
    }

    fn parse_bare_name(
        &self,
        text: &str,
        families: &FamilyList,
    ) -> Result<NamedColour, ParseError> {
        let name = text.trim();
        resolve(self.registry, name, families).map_err(|not_found| {
            let candidates = candidate_names(self.registry, families);
            ParseError::ColourNotFound {
                suggestion: suggestion_suffix(&name.to_lowercase(), candidates),
                name: not_found.name,
                families_tried: not_found.families_tried,
            }
        })
    }
}

/// Parse colour text using the built-in families.
pub fn parse_colour(text: &str, families: &FamilyList) -> Result<Colour, ParseError> {
    ColourParser::new(FamilyRegistry::builtin()).parse_colour(text, families)
}

/// Parse colour text using the built-in families, keeping the name.
pub fn parse_named_colour(text: &str, families: &FamilyList) -> Result<NamedColour, ParseError> {
    ColourParser::new(FamilyRegistry::builtin()).parse_named_colour(text, families)
}

/// Parse a `;`-separated pair of colours using the built-in families.
pub fn parse_paired_colours(
    text: &str,
    families: &FamilyList,
) -> Result<(Colour, Colour), ParseError> {
    ColourParser::new(FamilyRegistry::builtin()).parse_paired_colours(text, families)
}

/// Help text describing what colour text is accepted with this family list.
pub fn describe_allowed_values(families: &FamilyList) -> String {
    let scope = if families.uses_default() {
        " in the standard colour-name family".to_string()
    } else if families.is_wildcard_only() {
        " in any of the colour-name families".to_string()
    } else if families.len() == 1 {
        format!(" in the {} colour-name family", families.as_slice()[0])
    } else {
        let ids: Vec<&str> = families.iter().map(Family::id).collect();
        format!(" in one of the {} colour-name families", join_list(&ids, ", ", " or "))
    };

    format!(
        "Either a colour name{} or a family name, a colon (:) and a colour name \
         or else a string giving the Red/Green/Blue/Alpha values as follows: \
         RGB{{R: #, G: #, B: #, A: #}} (Red, Green and Blue default to 0, \
         Alpha defaults to 0xFF)",
        scope
    )
}

/// Help text for a pair of colours.
pub fn describe_allowed_pair_values(families: &FamilyList) -> String {
    format!(
        "a pair of colours separated by '{}' where each is: {}",
        PAIR_SEPARATOR,
        describe_allowed_values(families)
    )
}
