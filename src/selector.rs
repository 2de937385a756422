// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Label selector parsing for `--selector` command-line tokens.
//!
//! A selector scopes a route domain to workloads carrying matching labels.
//! On the command line a selector is supplied as repeated `name=value`
//! tokens; this module validates them and builds the selector mapping that
//! is later embedded in the domain `ConfigMap` payload.
//!
//! Parsing is pure: no I/O, no side effects.

use crate::constants::SELECTOR_SEPARATOR;
use crate::errors::AdminError;
use std::collections::BTreeMap;

/// Split a single `name=value` token into its trimmed name and value.
///
/// The whole token is trimmed first, then split on `=`. Exactly one
/// separator must be present, and both sides must be non-empty after
/// trimming their own surrounding whitespace.
///
/// # Errors
///
/// Returns [`AdminError::InvalidSelectorFormat`] echoing the raw token when
/// the shape does not match.
pub fn split_key_value(token: &str) -> Result<(String, String), AdminError> {
    let invalid = || AdminError::InvalidSelectorFormat {
        token: token.to_string(),
    };

    let parts: Vec<&str> = token.trim().split(SELECTOR_SEPARATOR).collect();
    if parts.len() != 2 {
        return Err(invalid());
    }

    let key = parts[0].trim();
    let value = parts[1].trim();
    if key.is_empty() || value.is_empty() {
        return Err(invalid());
    }

    Ok((key.to_string(), value.to_string()))
}

/// Parse zero or more raw `name=value` tokens into a selector mapping.
///
/// An empty token list yields an empty mapping: the domain is then
/// registered without a selector. Duplicate names are accepted with
/// last-write-wins semantics in input order.
///
/// # Errors
///
/// Returns [`AdminError::InvalidSelectorFormat`] for the first token that
/// does not match the `name=value` shape.
pub fn parse_selectors<I, S>(tokens: I) -> Result<BTreeMap<String, String>, AdminError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut selector = BTreeMap::new();
    for token in tokens {
        let (key, value) = split_key_value(token.as_ref())?;
        selector.insert(key, value);
    }
    Ok(selector)
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod selector_tests;
