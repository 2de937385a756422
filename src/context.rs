// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Shared command context and installation-method discovery.
//!
//! Every command receives an [`AdminContext`] holding the Kubernetes client
//! and the discovered [`InstallationMethod`]. Discovery classifies the
//! Deployments in the `knative-serving` namespace: an installation whose
//! workloads are owned by a `KnativeServing` resource is operator-managed
//! and must not be mutated directly, because the operator would revert any
//! out-of-band `ConfigMap` change on its next reconciliation.
//!
//! Classification over an already-listed deployment slice is a pure
//! function so it can be tested without a cluster.

use crate::constants::{KIND_KNATIVE_SERVING, KNATIVE_SERVING_NAMESPACE};
use crate::errors::AdminError;
use k8s_openapi::api::apps::v1::Deployment;
use kube::api::{Api, ListParams};
use kube::Client;
use tracing::debug;

/// How the target Knative Serving installation is managed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallationMethod {
    /// Installed directly from manifests; configuration `ConfigMap`s may be
    /// mutated by this tool.
    Standalone,

    /// Managed by the Knative operator; configuration is owned by the
    /// `KnativeServing` resource and direct mutation is rejected.
    Operator,
}

/// Shared context passed to all commands.
#[derive(Clone)]
pub struct AdminContext {
    /// Kubernetes client for API operations
    pub client: Client,

    /// Discovered installation method for the target cluster
    pub installation_method: InstallationMethod,
}

impl AdminContext {
    /// Discover the installation method and build the command context.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InstallationDiscoveryFailed`] when the
    /// deployment list call fails and [`AdminError::InstallationNotFound`]
    /// when the namespace holds no Knative Serving workloads at all.
    pub async fn discover(client: Client) -> Result<Self, AdminError> {
        let api: Api<Deployment> = Api::namespaced(client.clone(), KNATIVE_SERVING_NAMESPACE);

        let deployments = api.list(&ListParams::default()).await.map_err(|e| {
            AdminError::InstallationDiscoveryFailed {
                namespace: KNATIVE_SERVING_NAMESPACE.to_string(),
                source: e,
            }
        })?;

        let installation_method = classify_deployments(&deployments.items)?;
        debug!(
            "Discovered installation method {:?} from {} deployments in {}",
            installation_method,
            deployments.items.len(),
            KNATIVE_SERVING_NAMESPACE
        );

        Ok(Self {
            client,
            installation_method,
        })
    }
}

/// Classify an installation from the deployments in its namespace.
///
/// A deployment owned by a `KnativeServing` resource marks the whole
/// installation as operator-managed.
///
/// # Errors
///
/// Returns [`AdminError::InstallationNotFound`] for an empty deployment
/// list.
pub fn classify_deployments(
    deployments: &[Deployment],
) -> Result<InstallationMethod, AdminError> {
    if deployments.is_empty() {
        return Err(AdminError::InstallationNotFound {
            namespace: KNATIVE_SERVING_NAMESPACE.to_string(),
        });
    }

    let operator_owned = deployments.iter().any(|deployment| {
        deployment
            .metadata
            .owner_references
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|owner| owner.kind == KIND_KNATIVE_SERVING)
    });

    if operator_owned {
        Ok(InstallationMethod::Operator)
    } else {
        Ok(InstallationMethod::Standalone)
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod context_tests;
