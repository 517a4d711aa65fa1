//! component-deployer CLI
//!
//! Usage: component-deployer <COMMAND>
//!
//! Commands:
//!   validate  Check a staged component directory
//!   install   Install a staged component onto the cluster

mod commands;
mod presentation;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use presentation::cli::{Cli, Commands};

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Validate {
            staged,
            name,
            component_type,
        } => commands::validate::cmd_validate(&staged, name.as_deref(), component_type, cli.json),
        Commands::Install {
            staged,
            application,
            user,
            name,
            component_type,
            dry_run,
            config,
        } => commands::install::cmd_install(
            commands::install::InstallArgs {
                staged: &staged,
                application: &application,
                user: &user,
                name: name.as_deref(),
                component_type,
                dry_run,
                config: config.as_deref(),
            },
            cli.json,
        ),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json = cli.json;

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            if json {
                println!("{}", presentation::output::error_json(&err));
            } else {
                eprintln!("Error: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}
