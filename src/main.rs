// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::Result;
use clap::{CommandFactory, Parser};
use knadmin::cli::{Cli, Commands, DomainCommands};
use knadmin::commands::{run_domain_set, run_domain_unset};
use knadmin::constants::TOKIO_WORKER_THREADS;
use knadmin::context::AdminContext;
use knadmin::store::ConfigMapStore;
use kube::Client;
use tracing::debug;

fn main() -> Result<()> {
    // Build Tokio runtime with custom thread names
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(TOKIO_WORKER_THREADS)
        .thread_name("knadmin")
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<()> {
    // Initialize logging with custom format
    //
    // Respects RUST_LOG environment variable if set, otherwise defaults to
    // WARN so command output stays clean
    // Example: RUST_LOG=debug knadmin domain set --custom-domain example.com
    //
    // Respects RUST_LOG_FORMAT environment variable for output format
    // Example: RUST_LOG_FORMAT=json knadmin domain set --custom-domain example.com
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(true)
                .compact()
                .init();
        }
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Domain(command) => run_domain_command(command).await?,
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "knadmin", &mut std::io::stdout());
        }
    }

    Ok(())
}

async fn run_domain_command(command: DomainCommands) -> Result<()> {
    debug!("Initializing Kubernetes client");
    let client = Client::try_default().await?;

    let ctx = AdminContext::discover(client.clone()).await?;
    let store = ConfigMapStore::new(client);

    let message = match command {
        DomainCommands::Set(args) => {
            run_domain_set(
                ctx.installation_method,
                &store,
                &args.custom_domain,
                &args.selector,
            )
            .await?
        }
        DomainCommands::Unset(args) => {
            run_domain_unset(ctx.installation_method, &store, &args.custom_domain).await?
        }
    };

    println!("{message}");
    Ok(())
}
