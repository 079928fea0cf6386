//! Colourparam - parse, validate and format human-typed colour parameters
//!
//! This library provides functionality to:
//! - Parse colour names, `family:name` references and `RGB{...}` literals
//! - Resolve names against a caller-chosen priority list of colour families
//! - Validate family lists and alias tables, reporting every problem at once
//! - Suggest close matches for mistyped names
//! - Format colours back to text that parses to the same value

pub mod alias;
pub mod cli;
pub mod colour;
pub mod config;
pub mod families;
pub mod fmt;
pub mod parser;
pub mod resolve;
pub mod setter;
pub mod suggest;
pub mod validate;

pub use colour::{Colour, Component, NamedColour};
pub use families::{Family, FamilyList, FamilyRegistry};
pub use parser::{parse_colour, parse_named_colour, parse_paired_colours, ParseError};
