// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Fetch and persist boundary for the domain configuration record.
//!
//! The merge logic in [`crate::domain`] is a pure computation; this module
//! owns the Kubernetes side. [`DomainConfigStore`] abstracts the two
//! operations the commands need (fetch the current record, persist a new
//! version), so command orchestration unit-tests against an in-memory
//! implementation without a cluster.
//!
//! The live implementation, [`ConfigMapStore`], is backed by the
//! `config-domain` `ConfigMap` in the `knative-serving` namespace. Persist
//! is a conditional update: the `resourceVersion` captured at fetch time
//! rides along on the replace call, so a concurrent editor surfaces as an
//! HTTP 409 instead of a silent lost update.

use crate::constants::{CONFIG_DOMAIN, KNATIVE_SERVING_NAMESPACE};
use crate::errors::AdminError;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::ConfigMap;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::api::{Api, PostParams};
use kube::Client;
use std::collections::BTreeMap;
use tracing::debug;

/// In-memory snapshot of the domain configuration record.
///
/// `data` maps each domain suffix to its serialized selector payload (empty
/// string for "no selector"). `resource_version` is the optimistic
/// concurrency token captured at fetch time; it is `None` only for records
/// that never touched a cluster (tests, dry computations).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainRecord {
    /// Domain suffix to serialized selector payload
    pub data: BTreeMap<String, String>,

    /// `resourceVersion` of the backing `ConfigMap` at fetch time
    pub resource_version: Option<String>,
}

/// Remote store offering get-by-name and conditional-update for the domain
/// configuration record.
#[async_trait]
pub trait DomainConfigStore {
    /// Fetch the current record.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::ConfigMapNotFound`] when the record does not
    /// exist and [`AdminError::ConfigMapFetchFailed`] for any other failure.
    async fn fetch(&self) -> Result<DomainRecord, AdminError>;

    /// Persist a new version of the record.
    ///
    /// The update is conditional on the record's `resource_version`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::UpdateConflict`] when the resource version
    /// changed since fetch and [`AdminError::ConfigMapPersistFailed`] for
    /// any other failure.
    async fn persist(&self, record: &DomainRecord) -> Result<(), AdminError>;
}

/// Kubernetes-backed [`DomainConfigStore`] over a named `ConfigMap`.
pub struct ConfigMapStore {
    api: Api<ConfigMap>,
    name: String,
    namespace: String,
}

impl ConfigMapStore {
    /// Create a store over the standard `config-domain` `ConfigMap` in the
    /// `knative-serving` namespace.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self::with_location(client, CONFIG_DOMAIN, KNATIVE_SERVING_NAMESPACE)
    }

    /// Create a store over an arbitrary `ConfigMap` location.
    #[must_use]
    pub fn with_location(client: Client, name: &str, namespace: &str) -> Self {
        Self {
            api: Api::namespaced(client, namespace),
            name: name.to_string(),
            namespace: namespace.to_string(),
        }
    }
}

#[async_trait]
impl DomainConfigStore for ConfigMapStore {
    async fn fetch(&self) -> Result<DomainRecord, AdminError> {
        debug!(
            "Fetching ConfigMap {}/{}",
            self.namespace, self.name
        );

        let cm = match self.api.get(&self.name).await {
            Ok(cm) => cm,
            Err(kube::Error::Api(ae)) if ae.code == 404 => {
                return Err(AdminError::ConfigMapNotFound {
                    name: self.name.clone(),
                    namespace: self.namespace.clone(),
                });
            }
            Err(e) => {
                return Err(AdminError::ConfigMapFetchFailed {
                    name: self.name.clone(),
                    namespace: self.namespace.clone(),
                    source: e,
                });
            }
        };

        Ok(DomainRecord {
            data: cm.data.unwrap_or_default(),
            resource_version: cm.metadata.resource_version,
        })
    }

    async fn persist(&self, record: &DomainRecord) -> Result<(), AdminError> {
        debug!(
            "Updating ConfigMap {}/{} with {} domain entries",
            self.namespace,
            self.name,
            record.data.len()
        );

        let cm = ConfigMap {
            metadata: ObjectMeta {
                name: Some(self.name.clone()),
                namespace: Some(self.namespace.clone()),
                resource_version: record.resource_version.clone(),
                ..Default::default()
            },
            data: Some(record.data.clone()),
            ..Default::default()
        };

        match self
            .api
            .replace(&self.name, &PostParams::default(), &cm)
            .await
        {
            Ok(_) => Ok(()),
            Err(kube::Error::Api(ae)) if ae.code == 409 => Err(AdminError::UpdateConflict {
                name: self.name.clone(),
                namespace: self.namespace.clone(),
            }),
            Err(e) => Err(AdminError::ConfigMapPersistFailed {
                name: self.name.clone(),
                namespace: self.namespace.clone(),
                source: e,
            }),
        }
    }
}
