//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;

use crate::config::Config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load()?;

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "f5ops=debug,f5ops_client=debug,f5ops_device=debug".into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    // Determine output format: flag, then config file, then pretty
    let output_format = cli
        .output
        .or(config.output_format)
        .unwrap_or(OutputFormat::Pretty);

    // Create context for commands
    let ctx = commands::Context {
        config,
        output_format,
        insecure: cli.insecure,
        verbose: cli.verbose,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Inventory(args) => commands::inventory::execute(ctx, args).await,
        Commands::Exec(args) => commands::exec::execute(ctx, args).await,
        Commands::Shell(args) => commands::shell::execute(ctx, args).await,
        Commands::RegenCert(args) => commands::regen_cert::execute(&ctx, &args),
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}
