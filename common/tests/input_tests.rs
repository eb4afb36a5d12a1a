/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for input validation and parsing functions

use common::consts::{COLOR_DEPTH_FIELDS, SCREEN_SIZE_FIELDS};
use common::input::*;

#[test]
fn test_port_in_range() {
    let port = port_in_range("8080").unwrap();
    assert_eq!(port, 8080);

    let port = port_in_range("65535").unwrap();
    assert_eq!(port, 65535);

    let port = port_in_range("65536").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("0").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("http").unwrap_err();
    assert_eq!(port, "`http` is not a port number");
}

#[test]
fn test_greater_than_zero() {
    let num = greater_than_zero::<u32>("1").unwrap();
    assert_eq!(num, 1);

    let num = greater_than_zero::<usize>("0").unwrap_err();
    assert_eq!(num, "`0` is not larger than 0");

    let num = greater_than_zero::<u32>("-1").unwrap_err();
    assert_eq!(num, "`-1` is not a valid number");

    let num = greater_than_zero::<i32>("-1").unwrap_err();
    assert_eq!(num, "`-1` is not larger than 0");
}

#[test]
fn test_check_factory_name() {
    check_factory_name("factory").unwrap();
    check_factory_name("web-01").unwrap();
    check_factory_name("9").unwrap();
    check_factory_name("a-b-c").unwrap();

    let name = check_factory_name("").unwrap_err();
    assert_eq!(name, "Name cannot be empty");

    let name = check_factory_name("-").unwrap_err();
    assert_eq!(name, "Name can only start and end with letters or numbers");

    let name = check_factory_name("factory-").unwrap_err();
    assert_eq!(name, "Name can only start and end with letters or numbers");

    let name = check_factory_name("Factory").unwrap_err();
    assert_eq!(name, "Name must be lowercase");

    let name = check_factory_name("my_factory").unwrap_err();
    assert_eq!(name, "Name can only contain letters, numbers, and dashes");

    let name = check_factory_name("my factory").unwrap_err();
    assert_eq!(name, "Name can only contain letters, numbers, and dashes");

    let name = check_factory_name("a-very-long-factory-name").unwrap_err();
    assert_eq!(name, "Name cannot be longer than 20 characters");
}

#[test]
fn test_parse_lookup_key() {
    assert_eq!(parse_lookup_key("width").unwrap(), ("width", Lookup::Exact));
    assert_eq!(parse_lookup_key("width__exact").unwrap(), ("width", Lookup::Exact));
    assert_eq!(parse_lookup_key("width__gte").unwrap(), ("width", Lookup::Gte));
    assert_eq!(parse_lookup_key("height__lt").unwrap(), ("height", Lookup::Lt));
    assert_eq!(
        parse_lookup_key("bits_per_pixel__gt").unwrap(),
        ("bits_per_pixel", Lookup::Gt)
    );

    let err = parse_lookup_key("width__between").unwrap_err();
    assert_eq!(err, InputError::UnknownLookup("between".to_string()));
}

#[test]
fn test_lookup_display() {
    for lookup in [Lookup::Exact, Lookup::Gt, Lookup::Gte, Lookup::Lt, Lookup::Lte] {
        assert_eq!(lookup.to_string().parse::<Lookup>().unwrap(), lookup);
    }
}

#[test]
fn test_parse_lookups() {
    let lookups = parse_lookups(
        [("width__gte", "800"), ("height", " 600 ")],
        &SCREEN_SIZE_FIELDS,
    )
    .unwrap();

    assert_eq!(
        lookups,
        vec![
            FieldLookup::new("width", Lookup::Gte, 800),
            FieldLookup::exact("height", 600),
        ]
    );

    let lookups = parse_lookups(Vec::<(String, String)>::new(), &COLOR_DEPTH_FIELDS).unwrap();
    assert!(lookups.is_empty());
}

#[test]
fn test_parse_lookups_errors() {
    let err = parse_lookups([("width", "800")], &COLOR_DEPTH_FIELDS).unwrap_err();
    assert_eq!(err, InputError::UnknownField("width".to_string()));

    let err = parse_lookups([("width__gte", "wide")], &SCREEN_SIZE_FIELDS).unwrap_err();
    assert_eq!(err, InputError::InvalidNumber("wide".to_string()));
    assert_eq!(err.to_string(), "`wide` is not a valid number");

    let err = parse_lookups([("width__in", "800")], &SCREEN_SIZE_FIELDS).unwrap_err();
    assert_eq!(err.to_string(), "unknown lookup `in`");
}
