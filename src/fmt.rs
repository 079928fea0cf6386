//! Formatter for colour values
//!
//! Renders colours back to text the parser accepts:
//! - Named colours render as their name
//! - Unnamed colours render as an `RGBA{...}` literal with two-digit hex
//!   channels, e.g. `RGBA{R: 0xff, G: 0x00, B: 0x00, A: 0xff}`
//! - Pairs render as two formatted values separated by `;`

use std::fmt::Display;

use crate::colour::{Colour, Component, NamedColour};
use crate::families::{Family, FamilyRegistry};

/// Separator between the two halves of a paired colour value.
pub const PAIR_SEPARATOR: char = ';';

/// Render one channel value as `0x` and two hex digits.
pub fn format_channel(value: u8) -> String {
    format!("0x{:02x}", value)
}

/// Render a colour as a structured literal giving every channel.
pub fn format_colour(colour: Colour) -> String {
    let parts: Vec<String> = Component::ALL
        .iter()
        .map(|c| format!("{}: {}", c.letter(), format_channel(colour.channel(*c))))
        .collect();
    format!("RGBA{{{}}}", parts.join(", "))
}

/// Render a named colour by name, or as a literal if it has none.
pub fn format_named(named: &NamedColour) -> String {
    format_current_value(named.colour(), named.name())
}

/// Render a colour for display, preferring the name it was given.
pub fn format_current_value(colour: Colour, name: Option<&str>) -> String {
    match name {
        Some(name) => name.to_string(),
        None => format_colour(colour),
    }
}

/// Render two colours as a single paired value.
pub fn format_pair(first: &NamedColour, second: &NamedColour) -> String {
    format!("{}{}{}", format_named(first), PAIR_SEPARATOR, format_named(second))
}

/// Describe a colour by the first standard-family name with exactly its
/// value, falling back to the literal form.
pub fn describe_colour(registry: &FamilyRegistry, colour: Colour) -> String {
    registry
        .first_name_of(&Family::STANDARD, colour)
        .map(str::to_string)
        .unwrap_or_else(|| format_colour(colour))
}

/// Join items as English prose: `a, b and c` with `sep` = ", " and
/// `last_sep` = " and ".
pub fn join_list<T: Display>(items: &[T], sep: &str, last_sep: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let head: Vec<String> = init.iter().map(ToString::to_string).collect();
            format!("{}{}{}", head.join(sep), last_sep, last)
        }
    }
}
