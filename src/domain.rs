// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Domain record merging for the `config-domain` `ConfigMap`.
//!
//! The `ConfigMap` maps each route domain suffix to an opaque payload
//! string: empty when the domain applies to every route, otherwise a YAML
//! document with a single `selector` field scoping the domain to matching
//! workloads.
//!
//! The merge functions here decide whether the record needs to change at
//! all. An unchanged record signals the caller to skip the persistence
//! write, so concurrent editors never see a spurious resource-version bump.
//!
//! All functions in this module are pure computations over an in-memory
//! [`DomainRecord`]; fetching and persisting belong to [`crate::store`].

use crate::errors::AdminError;
use crate::store::DomainRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Payload stored under a domain key when a selector is attached.
///
/// Serialized as YAML with the selector mapping nested under a single
/// `selector` field, e.g.:
///
/// ```yaml
/// selector:
///   app: prod
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSelector {
    /// Label constraints a route must carry to receive this domain
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub selector: BTreeMap<String, String>,
}

/// Compute the `ConfigMap` payload for a selector mapping.
///
/// An empty mapping yields the empty string; a non-empty mapping yields the
/// YAML serialization of [`DomainSelector`].
///
/// # Errors
///
/// Returns [`AdminError::SelectorSerializationFailed`] if YAML serialization
/// fails.
pub fn selector_payload(selector: &BTreeMap<String, String>) -> Result<String, AdminError> {
    if selector.is_empty() {
        return Ok(String::new());
    }
    let payload = serde_yaml::to_string(&DomainSelector {
        selector: selector.clone(),
    })?;
    Ok(payload)
}

/// Merge a domain and its selector into the record.
///
/// Looks up `domain` in the record:
/// - absent: inserts the computed payload
/// - present with a byte-identical payload: leaves the record untouched
/// - present with a different payload: overwrites it
///
/// Every other entry in the record is preserved byte-identical.
///
/// # Returns
///
/// `true` when the record was mutated and needs to be persisted, `false`
/// when the write can be skipped entirely.
///
/// # Errors
///
/// Returns [`AdminError::SelectorSerializationFailed`] if the selector
/// payload cannot be serialized.
pub fn set_domain(
    record: &mut DomainRecord,
    domain: &str,
    selector: &BTreeMap<String, String>,
) -> Result<bool, AdminError> {
    let payload = selector_payload(selector)?;

    if record.data.get(domain) == Some(&payload) {
        return Ok(false);
    }

    record.data.insert(domain.to_string(), payload);
    Ok(true)
}

/// Remove a domain from the record.
///
/// # Returns
///
/// `true` when the domain was present and removed, `false` when the record
/// did not contain it.
pub fn remove_domain(record: &mut DomainRecord, domain: &str) -> bool {
    record.data.remove(domain).is_some()
}

#[cfg(test)]
#[path = "domain_tests.rs"]
mod domain_tests;
