// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Route domain commands: `domain set` and `domain unset`.
//!
//! Both commands mutate the `config-domain` record through an injected
//! [`DomainConfigStore`], so they run identically against a live cluster
//! and an in-memory test store. The record is fetched once, merged at most
//! once in memory, and written back only when the merge reports a change.

use crate::context::InstallationMethod;
use crate::domain::{remove_domain, set_domain};
use crate::errors::AdminError;
use crate::selector::parse_selectors;
use crate::store::DomainConfigStore;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Register or update a route domain, optionally scoped by a selector.
///
/// # Arguments
///
/// * `method` - Discovered installation method; operator-managed
///   installations are rejected before anything is fetched
/// * `store` - Fetch/persist boundary for the domain record
/// * `domain` - The route domain suffix to register
/// * `selectors` - Raw `name=value` tokens from repeated `--selector` flags
///
/// # Returns
///
/// The user-facing success message.
///
/// # Errors
///
/// Returns [`AdminError::OperatorNotSupported`], [`AdminError::MissingDomain`],
/// [`AdminError::InvalidSelectorFormat`], or any fetch/persist error from
/// the store.
pub async fn run_domain_set<S>(
    method: InstallationMethod,
    store: &S,
    domain: &str,
    selectors: &[String],
) -> Result<String, AdminError>
where
    S: DomainConfigStore + Sync,
{
    ensure_standalone(method)?;

    let domain = domain.trim();
    if domain.is_empty() {
        return Err(AdminError::MissingDomain { subcommand: "set" });
    }

    let selector = parse_selectors(selectors)?;

    let mut record = store.fetch().await?;
    let changed = set_domain(&mut record, domain, &selector)?;

    if changed {
        store.persist(&record).await?;
        info!("Updated route domain \"{}\"", domain);
    } else {
        debug!(
            "Route domain \"{}\" already configured, skipping update",
            domain
        );
    }

    Ok(set_message(domain, &selector))
}

/// Remove a route domain mapping.
///
/// # Errors
///
/// Returns [`AdminError::DomainNotFound`] when the domain is not configured,
/// plus the same gating, validation, and store errors as [`run_domain_set`].
pub async fn run_domain_unset<S>(
    method: InstallationMethod,
    store: &S,
    domain: &str,
) -> Result<String, AdminError>
where
    S: DomainConfigStore + Sync,
{
    ensure_standalone(method)?;

    let domain = domain.trim();
    if domain.is_empty() {
        return Err(AdminError::MissingDomain { subcommand: "unset" });
    }

    let mut record = store.fetch().await?;
    if !remove_domain(&mut record, domain) {
        return Err(AdminError::DomainNotFound {
            domain: domain.to_string(),
        });
    }

    store.persist(&record).await?;
    info!("Removed route domain \"{}\"", domain);

    Ok(format!("Unset knative route domain \"{domain}\""))
}

/// Refuse to mutate configuration owned by the Knative operator.
fn ensure_standalone(method: InstallationMethod) -> Result<(), AdminError> {
    match method {
        InstallationMethod::Standalone => Ok(()),
        InstallationMethod::Operator => Err(AdminError::OperatorNotSupported),
    }
}

/// Build the `domain set` success message, listing the applied selector
/// pairs when there are any.
fn set_message(domain: &str, selector: &BTreeMap<String, String>) -> String {
    if selector.is_empty() {
        return format!("Set knative route domain \"{domain}\"");
    }

    let pairs: Vec<String> = selector
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect();

    format!(
        "Set knative route domain \"{domain}\" with selector [{}]",
        pairs.join(" ")
    )
}
