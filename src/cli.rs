// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Command-line argument surface for knadmin.
//!
//! Argument parsing stops here: the typed argument structs are handed to
//! the command layer, which owns validation that carries domain semantics
//! (an empty `--custom-domain`, a malformed `--selector`). Keeping those
//! checks out of clap means the error messages are ours and the command
//! layer stays testable without a terminal.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Knative administration CLI.
#[derive(Debug, Parser)]
#[command(
    name = "knadmin",
    version,
    about = "Manage Knative Serving configuration from the command line"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level command tree.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage route domain configuration
    #[command(subcommand)]
    Domain(DomainCommands),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Route domain subcommands.
#[derive(Debug, Subcommand)]
pub enum DomainCommands {
    /// Register or update a route domain, optionally scoped by a selector
    Set(DomainSetArgs),

    /// Remove a route domain mapping
    Unset(DomainUnsetArgs),
}

/// Arguments for `domain set`.
#[derive(Debug, Args)]
pub struct DomainSetArgs {
    /// Custom route domain suffix to register
    #[arg(long = "custom-domain", value_name = "DOMAIN")]
    pub custom_domain: String,

    /// Label selector in name=value form; repeat to add more constraints
    #[arg(long = "selector", value_name = "NAME=VALUE")]
    pub selector: Vec<String>,
}

/// Arguments for `domain unset`.
#[derive(Debug, Args)]
pub struct DomainUnsetArgs {
    /// Custom route domain suffix to remove
    #[arg(long = "custom-domain", value_name = "DOMAIN")]
    pub custom_domain: String,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
