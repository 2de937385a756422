// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the knadmin CLI.
//!
//! This module contains all string and numeric constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// Knative Installation Constants
// ============================================================================

/// Namespace holding the Knative Serving installation and its configuration
pub const KNATIVE_SERVING_NAMESPACE: &str = "knative-serving";

/// Name of the `ConfigMap` that maps route domain suffixes to selectors
pub const CONFIG_DOMAIN: &str = "config-domain";

/// Kind name of the operator-managed Knative Serving resource.
///
/// Deployments owned by a resource of this kind indicate an operator-managed
/// installation, which knadmin refuses to mutate directly.
pub const KIND_KNATIVE_SERVING: &str = "KnativeServing";

// ============================================================================
// Selector Constants
// ============================================================================

/// Separator between name and value in a `--selector` token
pub const SELECTOR_SEPARATOR: char = '=';

// ============================================================================
// Runtime Constants
// ============================================================================

/// Number of worker threads for the Tokio runtime
pub const TOKIO_WORKER_THREADS: usize = 2;
