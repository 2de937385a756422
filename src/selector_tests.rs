// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `selector.rs`

use crate::errors::AdminError;
use crate::selector::{parse_selectors, split_key_value};
use std::collections::BTreeMap;

#[test]
fn test_split_key_value_shapes() {
    // (token, expected key/value on success)
    let cases: Vec<(&str, Option<(&str, &str)>)> = vec![
        ("app=abc", Some(("app", "abc"))),
        (" app=abc ", Some(("app", "abc"))),
        ("app = abc", Some(("app", "abc"))),
        ("=", None),
        (" = ", None),
        ("=abc", None),
        (" =abc", None),
        ("app=", None),
        ("app= ", None),
        ("app=aaa=bbb", None),
        ("app.123", None),
        ("", None),
    ];

    for (token, expected) in cases {
        match expected {
            Some((key, value)) => {
                let (got_key, got_value) =
                    split_key_value(token).unwrap_or_else(|e| panic!("{token:?} failed: {e}"));
                assert_eq!(got_key, key, "key for {token:?}");
                assert_eq!(got_value, value, "value for {token:?}");
            }
            None => {
                let err = split_key_value(token).expect_err(token);
                assert!(
                    matches!(err, AdminError::InvalidSelectorFormat { .. }),
                    "unexpected error for {token:?}: {err}"
                );
            }
        }
    }
}

#[test]
fn test_split_key_value_echoes_offending_token() {
    let err = split_key_value("app").unwrap_err();
    assert_eq!(
        err.to_string(),
        "expecting the selector format 'name=value', found 'app'"
    );
}

#[test]
fn test_parse_selectors_empty_input() {
    let selector = parse_selectors(Vec::<String>::new()).unwrap();
    assert!(selector.is_empty());
}

#[test]
fn test_parse_selectors_multiple_tokens() {
    let selector = parse_selectors(["app=web", "env = prod "]).unwrap();

    let expected = BTreeMap::from([
        ("app".to_string(), "web".to_string()),
        ("env".to_string(), "prod".to_string()),
    ]);
    assert_eq!(selector, expected);
}

#[test]
fn test_parse_selectors_duplicate_keys_last_write_wins() {
    let selector = parse_selectors(["app=web", "app=api"]).unwrap();

    assert_eq!(selector.len(), 1);
    assert_eq!(selector.get("app").map(String::as_str), Some("api"));
}

#[test]
fn test_parse_selectors_fails_on_first_bad_token() {
    let err = parse_selectors(["app=web", "bogus", "env=prod"]).unwrap_err();
    assert!(err.to_string().contains("'bogus'"));
}
