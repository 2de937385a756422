// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `domain.rs` command orchestration.
//!
//! These tests drive `domain set` / `domain unset` against an in-memory
//! store, asserting the same behavior the live `ConfigMap`-backed store
//! sees: gating order, merge results, and the no-write short-circuit.

use crate::commands::{run_domain_set, run_domain_unset};
use crate::context::InstallationMethod;
use crate::domain::DomainSelector;
use crate::errors::AdminError;
use crate::store::{DomainConfigStore, DomainRecord};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory [`DomainConfigStore`] that counts persist calls.
struct MemoryStore {
    record: Mutex<DomainRecord>,
    persist_calls: AtomicUsize,
    missing: bool,
}

impl MemoryStore {
    fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            record: Mutex::new(DomainRecord {
                data: entries
                    .iter()
                    .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                    .collect(),
                resource_version: Some("1".to_string()),
            }),
            persist_calls: AtomicUsize::new(0),
            missing: false,
        }
    }

    fn absent() -> Self {
        Self {
            record: Mutex::new(DomainRecord::default()),
            persist_calls: AtomicUsize::new(0),
            missing: true,
        }
    }

    fn data(&self) -> BTreeMap<String, String> {
        self.record.lock().unwrap().data.clone()
    }

    fn persist_calls(&self) -> usize {
        self.persist_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DomainConfigStore for MemoryStore {
    async fn fetch(&self) -> Result<DomainRecord, AdminError> {
        if self.missing {
            return Err(AdminError::ConfigMapNotFound {
                name: "config-domain".to_string(),
                namespace: "knative-serving".to_string(),
            });
        }
        Ok(self.record.lock().unwrap().clone())
    }

    async fn persist(&self, record: &DomainRecord) -> Result<(), AdminError> {
        self.persist_calls.fetch_add(1, Ordering::SeqCst);
        *self.record.lock().unwrap() = record.clone();
        Ok(())
    }
}

#[tokio::test]
async fn test_set_rejects_operator_installation_before_fetch() {
    // The absent store would fail any fetch, so hitting the operator error
    // proves gating happens first
    let store = MemoryStore::absent();

    let err = run_domain_set(InstallationMethod::Operator, &store, "test.domain", &[])
        .await
        .unwrap_err();

    assert!(matches!(err, AdminError::OperatorNotSupported));
    assert_eq!(
        err.to_string(),
        "Knative managed by operator is not supported yet"
    );
}

#[tokio::test]
async fn test_set_rejects_empty_domain() {
    let store = MemoryStore::new(&[]);

    let err = run_domain_set(InstallationMethod::Standalone, &store, "", &[])
        .await
        .unwrap_err();

    assert!(matches!(err, AdminError::MissingDomain { .. }));
    assert!(err.to_string().contains("requires the route name"));
    assert_eq!(store.persist_calls(), 0);
}

#[tokio::test]
async fn test_set_rejects_whitespace_domain() {
    let store = MemoryStore::new(&[]);

    let err = run_domain_set(InstallationMethod::Standalone, &store, "   ", &[])
        .await
        .unwrap_err();

    assert!(matches!(err, AdminError::MissingDomain { .. }));
}

#[tokio::test]
async fn test_set_propagates_missing_config_map() {
    let store = MemoryStore::absent();

    let err = run_domain_set(InstallationMethod::Standalone, &store, "test.domain", &[])
        .await
        .unwrap_err();

    assert!(err.to_string().contains("failed to get ConfigMap"));
}

#[tokio::test]
async fn test_set_without_selector_inserts_empty_payload() {
    let store = MemoryStore::new(&[]);

    let message = run_domain_set(InstallationMethod::Standalone, &store, "test.domain", &[])
        .await
        .unwrap();

    assert_eq!(message, "Set knative route domain \"test.domain\"");
    assert_eq!(store.persist_calls(), 1);

    let data = store.data();
    assert_eq!(data.len(), 1);
    assert_eq!(data.get("test.domain").map(String::as_str), Some(""));
}

#[tokio::test]
async fn test_set_unchanged_value_skips_persist() {
    let store = MemoryStore::new(&[("test.domain", "")]);
    let before = store.data();

    let message = run_domain_set(InstallationMethod::Standalone, &store, "test.domain", &[])
        .await
        .unwrap();

    assert_eq!(message, "Set knative route domain \"test.domain\"");
    assert_eq!(store.persist_calls(), 0, "unchanged record must not be written");
    assert_eq!(store.data(), before);
}

#[tokio::test]
async fn test_set_preserves_existing_domains() {
    let store = MemoryStore::new(&[("foo.bar", "")]);

    let message = run_domain_set(InstallationMethod::Standalone, &store, "test.domain", &[])
        .await
        .unwrap();

    assert!(message.contains("Set knative route domain \"test.domain\""));

    let data = store.data();
    assert_eq!(data.len(), 2);
    assert_eq!(data.get("foo.bar").map(String::as_str), Some(""));
    assert_eq!(data.get("test.domain").map(String::as_str), Some(""));
}

#[tokio::test]
async fn test_set_with_selector_serializes_payload() {
    let store = MemoryStore::new(&[("foo.bar", "")]);
    let selectors = vec!["app=test".to_string()];

    let message = run_domain_set(
        InstallationMethod::Standalone,
        &store,
        "test.domain",
        &selectors,
    )
    .await
    .unwrap();

    assert_eq!(
        message,
        "Set knative route domain \"test.domain\" with selector [app=test]"
    );

    let data = store.data();
    assert_eq!(data.len(), 2);

    let payload = data.get("test.domain").expect("domain key missing");
    let parsed: DomainSelector = serde_yaml::from_str(payload).unwrap();
    assert_eq!(parsed.selector.len(), 1);
    assert_eq!(parsed.selector.get("app").map(String::as_str), Some("test"));
}

#[tokio::test]
async fn test_set_with_invalid_selector_fails_without_write() {
    let store = MemoryStore::new(&[("foo.bar", "")]);
    let selectors = vec!["app".to_string()];

    let err = run_domain_set(
        InstallationMethod::Standalone,
        &store,
        "test.domain",
        &selectors,
    )
    .await
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "expecting the selector format 'name=value', found 'app'"
    );
    assert_eq!(store.persist_calls(), 0);
}

#[tokio::test]
async fn test_unset_removes_domain() {
    let store = MemoryStore::new(&[("test.domain", ""), ("foo.bar", "")]);

    let message = run_domain_unset(InstallationMethod::Standalone, &store, "test.domain")
        .await
        .unwrap();

    assert_eq!(message, "Unset knative route domain \"test.domain\"");
    assert_eq!(store.persist_calls(), 1);

    let data = store.data();
    assert_eq!(data.len(), 1);
    assert!(data.contains_key("foo.bar"));
}

#[tokio::test]
async fn test_unset_missing_domain_fails_without_write() {
    let store = MemoryStore::new(&[("foo.bar", "")]);

    let err = run_domain_unset(InstallationMethod::Standalone, &store, "test.domain")
        .await
        .unwrap_err();

    assert!(matches!(err, AdminError::DomainNotFound { .. }));
    assert_eq!(
        err.to_string(),
        "knative route domain \"test.domain\" not found"
    );
    assert_eq!(store.persist_calls(), 0);
}

#[tokio::test]
async fn test_unset_rejects_operator_installation() {
    let store = MemoryStore::new(&[("test.domain", "")]);

    let err = run_domain_unset(InstallationMethod::Operator, &store, "test.domain")
        .await
        .unwrap_err();

    assert!(matches!(err, AdminError::OperatorNotSupported));
    assert_eq!(store.persist_calls(), 0);
}
