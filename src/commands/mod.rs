// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Command orchestration for the knadmin CLI.
//!
//! Each command follows the same shape:
//!
//! 1. **Gate** - Refuse operator-managed installations before any mutation
//! 2. **Validate** - Reject malformed input with the offending value echoed
//! 3. **Fetch** - Read the current configuration record through the store
//! 4. **Merge** - Compute the new record and a changed/unchanged decision
//! 5. **Persist** - Write back only when something actually changed
//!
//! Commands return their user-facing success message instead of printing,
//! which keeps them assertable in tests; `main` owns stdout.
//!
//! # Available Commands
//!
//! - [`run_domain_set`] - Register or update a route domain mapping
//! - [`run_domain_unset`] - Remove a route domain mapping

pub mod domain;

#[cfg(test)]
mod domain_tests;

pub use domain::{run_domain_set, run_domain_unset};
