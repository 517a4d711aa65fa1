//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use component_deployer::ComponentType;

/// Component deployer - install staged application components onto a cluster
#[derive(Parser, Debug)]
#[command(name = "component-deployer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a staged component directory for missing or deprecated files
    Validate {
        /// Staged component directory
        staged: PathBuf,

        /// Component name (defaults to the directory name)
        #[arg(long)]
        name: Option<String>,

        /// Component type
        #[arg(long = "type", value_enum, default_value = "sparkStreaming")]
        component_type: ComponentType,
    },

    /// Install a staged component onto the cluster
    Install {
        /// Staged component directory
        staged: PathBuf,

        /// Owning application
        #[arg(long)]
        application: String,

        /// User the application runs as
        #[arg(long)]
        user: String,

        /// Component name (defaults to the directory name)
        #[arg(long)]
        name: Option<String>,

        /// Component type
        #[arg(long = "type", value_enum, default_value = "sparkStreaming")]
        component_type: ComponentType,

        /// Dry run - show the remote commands without contacting any host
        #[arg(long)]
        dry_run: bool,

        /// Deployer configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
