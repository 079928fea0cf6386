//! Colour values
//!
//! A [`Colour`] is four independent 8-bit channels. A [`NamedColour`] pairs a
//! colour with the text that produced it so it can be displayed by name.

use image::Rgba;
use serde::Serialize;
use std::fmt;

use crate::fmt::{format_colour, format_named};

/// An RGBA colour with 8 bits per channel.
///
/// The default value is opaque black, the same value an empty structured
/// literal would describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// An opaque colour from red, green and blue channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }

    /// A colour with an explicit alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the value of a single channel.
    pub const fn channel(self, component: Component) -> u8 {
        match component {
            Component::Red => self.r,
            Component::Green => self.g,
            Component::Blue => self.b,
            Component::Alpha => self.a,
        }
    }

    /// Returns a copy of this colour with one channel replaced.
    pub const fn with_channel(mut self, component: Component, value: u8) -> Self {
        match component {
            Component::Red => self.r = value,
            Component::Green => self.g = value,
            Component::Blue => self.b = value,
            Component::Alpha => self.a = value,
        }
        self
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_colour(*self))
    }
}

impl From<Colour> for Rgba<u8> {
    fn from(c: Colour) -> Self {
        Rgba([c.r, c.g, c.b, c.a])
    }
}

impl From<Rgba<u8>> for Colour {
    fn from(p: Rgba<u8>) -> Self {
        let [r, g, b, a] = p.0;
        Self { r, g, b, a }
    }
}

/// One channel of a colour, as named in a structured literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Component {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Component {
    /// All components in literal order.
    pub const ALL: [Component; 4] =
        [Component::Red, Component::Green, Component::Blue, Component::Alpha];

    /// The single-letter tag used in a structured literal.
    pub const fn letter(self) -> char {
        match self {
            Component::Red => 'R',
            Component::Green => 'G',
            Component::Blue => 'B',
            Component::Alpha => 'A',
        }
    }

    /// Look up a component by its tag, case-insensitively.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_uppercase().as_str() {
            "R" => Some(Component::Red),
            "G" => Some(Component::Green),
            "B" => Some(Component::Blue),
            "A" => Some(Component::Alpha),
            _ => None,
        }
    }

    /// The value a literal gives this component when it is omitted.
    pub const fn default_value(self) -> u8 {
        match self {
            Component::Alpha => u8::MAX,
            _ => 0,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Red => write!(f, "Red"),
            Component::Green => write!(f, "Green"),
            Component::Blue => write!(f, "Blue"),
            Component::Alpha => write!(f, "Alpha"),
        }
    }
}

/// A resolved colour together with the name it was resolved from.
///
/// Colours built from a structured literal carry no name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedColour {
    colour: Colour,
    name: Option<String>,
}

impl NamedColour {
    pub fn new(colour: Colour, name: impl Into<String>) -> Self {
        Self { colour, name: Some(name.into()) }
    }

    /// A colour with no associated name.
    pub fn unnamed(colour: Colour) -> Self {
        Self { colour, name: None }
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl From<Colour> for NamedColour {
    fn from(colour: Colour) -> Self {
        Self::unnamed(colour)
    }
}

impl fmt::Display for NamedColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_named(self))
    }
}
