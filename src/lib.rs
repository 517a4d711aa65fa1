//! Component deployer - installs staged application components onto a cluster
//!
//! A staged application package holds one directory per component. For each
//! component the deployer picks the creator registered for its type, checks
//! the staged files, renders the service unit and helper files, stages them
//! on the cluster over ssh/scp and returns the commands that later undo,
//! start and stop the installed component.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{ComponentCreator, CreatorRegistry, DeployContext, InstallRequest};
pub use config::DeployerConfig;
pub use domain::entities::{ComponentManifest, LifecycleCommands, Properties};
pub use domain::value_objects::{ComponentType, RemoteOp};
pub use error::{DeployerError, DeployerResult};
