// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # knadmin - Knative Administration CLI
//!
//! knadmin is a command-line tool for administering a Knative Serving
//! installation, starting with its route domain configuration.
//!
//! ## Overview
//!
//! This library provides the core functionality for the knadmin CLI,
//! including:
//!
//! - Selector parsing for `--selector name=value` tokens
//! - Merge and update-decision logic over the `config-domain` `ConfigMap`
//! - Installation-method discovery (standalone vs operator-managed)
//! - A store abstraction so command logic tests without a cluster
//!
//! ## Modules
//!
//! - [`cli`] - clap argument surface
//! - [`commands`] - command orchestration (`domain set`, `domain unset`)
//! - [`context`] - shared context and installation-method discovery
//! - [`domain`] - domain record merging and payload serialization
//! - [`selector`] - `name=value` selector token parsing
//! - [`store`] - `ConfigMap`-backed fetch/persist boundary
//!
//! ## Example
//!
//! ```rust,no_run
//! use knadmin::commands::run_domain_set;
//! use knadmin::context::InstallationMethod;
//! use knadmin::store::ConfigMapStore;
//!
//! # async fn example(client: kube::Client) -> Result<(), knadmin::errors::AdminError> {
//! let store = ConfigMapStore::new(client);
//! let message = run_domain_set(
//!     InstallationMethod::Standalone,
//!     &store,
//!     "example.com",
//!     &["app=prod".to_string()],
//! )
//! .await?;
//! println!("{message}");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod constants;
pub mod context;
pub mod domain;
pub mod errors;
pub mod selector;
pub mod store;
