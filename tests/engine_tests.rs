//! Integration tests for the colour parsing engine
//!
//! These tests exercise the public API end to end: parsing, resolution,
//! validation, suggestions and formatting.

use colourparam::colour::{Colour, Component, NamedColour};
use colourparam::families::{Family, FamilyList, FamilyRegistry};
use colourparam::fmt::{format_channel, format_colour, format_current_value};
use colourparam::parser::{
    describe_allowed_values, parse_colour, parse_named_colour, parse_paired_colours,
    ChannelValueError, ParseError,
};
use colourparam::setter::{ColourSetter, FamiliesSetter, RgbPairSetter, RgbSetter};
use colourparam::validate::{validate_family_list, Problem};
use image::Rgba;

fn list(families: &[Family]) -> FamilyList {
    FamilyList::new(families.to_vec())
}

#[test]
fn test_literal_round_trips_hex_channels() {
    let colour = parse_colour("RGB{R: 0xff, G: 0, B: 0, A: 0xff}", &FamilyList::empty()).unwrap();
    assert_eq!(colour, Colour::rgba(255, 0, 0, 255));

    let channels: Vec<String> =
        Component::ALL.iter().map(|c| format_channel(colour.channel(*c))).collect();
    assert_eq!(channels, vec!["0xff", "0x00", "0x00", "0xff"]);
}

#[test]
fn test_omitted_components_default() {
    assert_eq!(
        parse_colour("RGB{R: 0xf}", &FamilyList::empty()),
        Ok(Colour::rgba(15, 0, 0, 255))
    );
}

#[test]
fn test_resolution_is_case_insensitive_and_ordered() {
    assert_eq!(
        parse_colour("GREEN", &list(&[Family::X11, Family::WEB])),
        Ok(Colour::rgba(0, 255, 0, 255))
    );
    assert_eq!(
        parse_colour("Green", &list(&[Family::WEB, Family::X11])),
        Ok(Colour::rgba(0, 128, 0, 255))
    );
}

#[test]
fn test_duplicate_family_reported_once() {
    let problems = validate_family_list(
        &list(&[Family::CGA, Family::WEB, Family::CGA]),
        FamilyRegistry::builtin(),
    );
    assert_eq!(
        problems,
        vec![Problem::DuplicateFamily { family: Family::CGA, positions: vec![0, 2] }]
    );
}

#[test]
fn test_wildcard_must_be_exclusive() {
    let problems =
        validate_family_list(&list(&[Family::ANY, Family::X11]), FamilyRegistry::builtin());
    assert_eq!(problems.len(), 1);
    assert!(matches!(problems[0], Problem::WildcardNotExclusive { .. }));
}

#[test]
fn test_unknown_name_suggestions_are_ranked() {
    let err = parse_colour("law green", &FamilyList::empty()).unwrap_err();
    let message = err.to_string();
    let lawn = message.find("\"lawn green\"").expect("suggests lawn green");
    let joined = message.find("\"lawngreen\"").expect("suggests lawngreen");
    let low = message.find("\"low green\"").expect("suggests low green");
    assert!(lawn < joined && joined < low, "{message}");

    // Same input, same message
    assert_eq!(parse_colour("law green", &FamilyList::empty()).unwrap_err().to_string(), message);
}

#[test]
fn test_channel_errors_name_component_and_text() {
    match parse_colour("RGB{R: 0xfff}", &FamilyList::empty()) {
        Err(ParseError::InvalidChannelValue { component, raw, cause }) => {
            assert_eq!(component, Component::Red);
            assert_eq!(raw, "0xfff");
            assert_eq!(cause, ChannelValueError::OutOfRange);
        }
        other => panic!("unexpected result: {other:?}"),
    }

    match parse_colour("RGB{R: xxx}", &FamilyList::empty()) {
        Err(ParseError::InvalidChannelValue { component, raw, cause }) => {
            assert_eq!(component, Component::Red);
            assert_eq!(raw, "xxx");
            assert_eq!(cause, ChannelValueError::Malformed);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_format_then_parse_is_idempotent() {
    let inputs = [
        "RGB{R: 0xff, G: 0, B: 0, A: 0xff}",
        "RGB{R: 0xf}",
        "rgba{a: 0}",
        "{G: 0o17, B: 200}",
        "RGBA { R : 1 , G : 2 , B : 3 , A : 4 }",
    ];
    for input in inputs {
        let first = parse_colour(input, &FamilyList::empty()).unwrap();
        let formatted = format_colour(first);
        let second = parse_colour(&formatted, &FamilyList::empty()).unwrap();
        assert_eq!(first, second, "{input} -> {formatted}");
        assert_eq!(format_colour(second), formatted);
    }
}

#[test]
fn test_named_values_format_back_to_parseable_text() {
    for input in ["lawn green", "pantone:very peri", "RGB{B: 0x80}"] {
        let named = parse_named_colour(input, &FamilyList::empty()).unwrap();
        let text = format_current_value(named.colour(), named.name());
        assert_eq!(parse_colour(&text, &FamilyList::empty()), Ok(named.colour()));
    }
}

#[test]
fn test_paired_colours() {
    assert_eq!(
        parse_paired_colours("white;x11:green", &FamilyList::empty()),
        Ok((Colour::rgb(255, 255, 255), Colour::rgb(0, 255, 0)))
    );
    assert_eq!(
        parse_paired_colours("white", &FamilyList::empty()),
        Err(ParseError::MissingPairSeparator)
    );
}

#[test]
fn test_describe_names_scope() {
    assert!(describe_allowed_values(&FamilyList::empty()).contains("standard colour-name family"));
    assert!(describe_allowed_values(&list(&[Family::CGA, Family::WEB]))
        .contains("one of the cga or web colour-name families"));
}

#[test]
fn test_setters_share_one_interface() {
    let mut setters: Vec<Box<dyn ColourSetter>> = vec![
        Box::new(RgbSetter::new(Colour::default(), FamilyList::empty()).unwrap()),
        Box::new(
            RgbPairSetter::new((Colour::default(), Colour::default()), FamilyList::empty())
                .unwrap(),
        ),
        Box::new(FamiliesSetter::new(FamilyList::empty()).unwrap()),
    ];
    let inputs = ["red", "red;blue", "x11,fnb"];
    let expected = ["red", "red;blue", "x11,farrow-and-ball"];

    for ((setter, input), want) in setters.iter_mut().zip(inputs).zip(expected) {
        setter.set_with_value(input).unwrap();
        assert_eq!(setter.current_value(), want);
        assert!(!setter.allowed_values().is_empty());
    }
}

#[test]
fn test_concurrent_reads_of_builtin_registry() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let families = if i % 2 == 0 { list(&[Family::X11]) } else { list(&[Family::WEB]) };
                parse_colour("green", &families).unwrap()
            })
        })
        .collect();
    let results: Vec<Colour> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0], Colour::rgb(0, 255, 0));
    assert_eq!(results[1], Colour::rgb(0, 128, 0));
}

#[test]
fn test_image_interop() {
    let colour = parse_colour("cga:light magenta", &FamilyList::empty()).unwrap();
    let pixel: Rgba<u8> = colour.into();
    assert_eq!(pixel, Rgba([255, 85, 255, 255]));
    assert_eq!(Colour::from(pixel), colour);
    assert_eq!(NamedColour::from(colour).name(), None);
}
