//! Configuration module for the deployer
//!
//! Holds the environment context shared by every component of a deployment
//! run. Resolution order:
//! 1. Environment variables (DEPLOYER_*)
//! 2. Explicit `--config` file
//! 3. Project config (./deployer.toml)
//! 4. User config (~/.config/component-deployer/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! The loaded value is read-only afterwards and shared through `DeployContext`.

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ClusterConfig, DeployerConfig};
