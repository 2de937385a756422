// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for knadmin commands.
//!
//! This module provides the error taxonomy for the administration CLI:
//! - Input validation failures (selector format, missing arguments)
//! - Installation gating failures (operator-managed installations)
//! - Kubernetes API failures when fetching or persisting configuration
//!
//! All errors are terminal for a single command invocation. The only
//! retryable condition is [`AdminError::UpdateConflict`], which callers may
//! handle by re-fetching and re-running the command.

use thiserror::Error;

/// Errors returned by knadmin command execution.
#[derive(Error, Debug)]
pub enum AdminError {
    /// A `--selector` token did not match the `name=value` shape.
    ///
    /// Raised for a missing separator, more than one separator, or an empty
    /// name or value after trimming. The offending raw token is echoed back.
    #[error("expecting the selector format 'name=value', found '{token}'")]
    InvalidSelectorFormat {
        /// The raw token as supplied on the command line
        token: String,
    },

    /// The required route domain argument was absent or empty.
    #[error("'domain {subcommand}' requires the route name provided with the --custom-domain option")]
    MissingDomain {
        /// The subcommand that rejected the invocation ("set" or "unset")
        subcommand: &'static str,
    },

    /// The target installation is managed by the Knative operator.
    ///
    /// Direct `ConfigMap` mutation would be reverted by the operator's
    /// reconciliation, so the command refuses to proceed.
    #[error("Knative managed by operator is not supported yet")]
    OperatorNotSupported,

    /// No Knative Serving installation was found in the target namespace.
    #[error("no Knative Serving installation found in namespace '{namespace}'")]
    InstallationNotFound {
        /// The namespace that was inspected
        namespace: String,
    },

    /// Listing deployments to classify the installation failed.
    #[error("failed to inspect installation in namespace '{namespace}': {source}")]
    InstallationDiscoveryFailed {
        /// The namespace that was inspected
        namespace: String,
        /// The underlying Kubernetes API error
        #[source]
        source: kube::Error,
    },

    /// The domain `ConfigMap` does not exist (HTTP 404).
    #[error("failed to get ConfigMap {name} in namespace {namespace}: not found")]
    ConfigMapNotFound {
        /// The `ConfigMap` name
        name: String,
        /// The namespace that was queried
        namespace: String,
    },

    /// Fetching the domain `ConfigMap` failed for a reason other than 404.
    #[error("failed to get ConfigMap {name} in namespace {namespace}: {source}")]
    ConfigMapFetchFailed {
        /// The `ConfigMap` name
        name: String,
        /// The namespace that was queried
        namespace: String,
        /// The underlying Kubernetes API error
        #[source]
        source: kube::Error,
    },

    /// The conditional update was rejected because the resource version
    /// changed underneath us (HTTP 409).
    ///
    /// A concurrent editor modified the `ConfigMap` between fetch and
    /// persist. Re-fetching and re-running the command resolves this.
    #[error("conflict updating ConfigMap {name} in namespace {namespace}: resource version changed, re-fetch and retry")]
    UpdateConflict {
        /// The `ConfigMap` name
        name: String,
        /// The namespace holding the `ConfigMap`
        namespace: String,
    },

    /// Persisting the updated `ConfigMap` failed for a reason other than a
    /// version conflict.
    #[error("failed to update ConfigMap {name} in namespace {namespace}: {source}")]
    ConfigMapPersistFailed {
        /// The `ConfigMap` name
        name: String,
        /// The namespace holding the `ConfigMap`
        namespace: String,
        /// The underlying Kubernetes API error
        #[source]
        source: kube::Error,
    },

    /// `domain unset` targeted a domain that is not configured.
    #[error("knative route domain \"{domain}\" not found")]
    DomainNotFound {
        /// The domain suffix that was requested
        domain: String,
    },

    /// Serializing a selector set into its `ConfigMap` payload failed.
    #[error("failed to serialize selector: {0}")]
    SelectorSerializationFailed(#[from] serde_yaml::Error),
}

impl AdminError {
    /// Returns true if re-fetching and re-running the command may succeed.
    ///
    /// Only version conflicts qualify; every other error is permanent for
    /// the supplied input. The command itself never retries internally.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::UpdateConflict { .. })
    }
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod errors_tests;
