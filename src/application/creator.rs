//! Component creator contract
//!
//! Every component type the deployer can install provides one creator. The
//! creator validates a staged component and, on install, stages it on the
//! cluster and returns the commands that later undo, start and stop it.

use std::path::Path;
use std::sync::Arc;

use crate::config::DeployerConfig;
use crate::domain::entities::{ComponentManifest, LifecycleCommands, Properties};
use crate::domain::ports::{FileTransfer, RemoteExecutor, TemplateRenderer};
use crate::domain::value_objects::ComponentType;
use crate::error::DeployerResult;
use crate::infrastructure::{DryRunTransport, PlaceholderRenderer, ScpTransfer, SshExecutor};

/// Everything a creator needs to reach the cluster
#[derive(Clone)]
pub struct DeployContext {
    pub config: Arc<DeployerConfig>,
    pub executor: Arc<dyn RemoteExecutor>,
    pub transfer: Arc<dyn FileTransfer>,
    pub renderer: Arc<dyn TemplateRenderer>,
}

impl DeployContext {
    pub fn new(
        config: Arc<DeployerConfig>,
        executor: Arc<dyn RemoteExecutor>,
        transfer: Arc<dyn FileTransfer>,
        renderer: Arc<dyn TemplateRenderer>,
    ) -> Self {
        Self {
            config,
            executor,
            transfer,
            renderer,
        }
    }

    /// ssh/scp transport with the placeholder renderer
    pub fn system(config: DeployerConfig) -> Self {
        Self::new(
            Arc::new(config),
            Arc::new(SshExecutor::new()),
            Arc::new(ScpTransfer::new()),
            Arc::new(PlaceholderRenderer::new()),
        )
    }

    /// Records remote work instead of performing it; templates are still
    /// rendered locally.
    pub fn dry_run(config: DeployerConfig) -> (Self, Arc<DryRunTransport>) {
        let transport = Arc::new(DryRunTransport::new());
        let context = Self::new(
            Arc::new(config),
            transport.clone(),
            transport.clone(),
            Arc::new(PlaceholderRenderer::new()),
        );
        (context, transport)
    }
}

/// One install of a staged component
#[derive(Debug, Clone, Copy)]
pub struct InstallRequest<'a> {
    /// Local directory holding the staged component files
    pub staged_path: &'a Path,
    pub application: &'a str,
    pub user: &'a str,
    pub component: &'a ComponentManifest,
    pub properties: &'a Properties,
}

/// Per component type validation and install
pub trait ComponentCreator: Send + Sync {
    fn component_type(&self) -> ComponentType;

    /// Human readable problems with the staged component; empty when valid.
    fn validate_component(&self, component: &ComponentManifest) -> Vec<String>;

    /// Stage, install and register the component on the cluster.
    fn create_component(&self, request: &InstallRequest<'_>) -> DeployerResult<LifecycleCommands>;
}
