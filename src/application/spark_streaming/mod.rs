//! sparkStreaming component creator
//!
//! A sparkStreaming component is a long-running Spark job wrapped in a systemd
//! service on the primary host. Install renders the service unit and helper
//! files locally, stages them on the cluster, pushes `log4j.properties` to
//! every YARN node manager and moves everything into place with sudo.

mod install;
mod staging;


pub use install::{install_ops, prepare_ops, worker_ops};
pub use staging::{StagedComponent, RENDERED_FILES};

use crate::domain::entities::{ComponentManifest, LifecycleCommands};
use crate::domain::policies::ManifestPolicy;
use crate::domain::value_objects::ComponentType;
use crate::error::DeployerResult;

use super::creator::{ComponentCreator, DeployContext, InstallRequest};

/// Creator for `sparkStreaming` components
pub struct SparkStreamingCreator {
    context: DeployContext,
    policy: ManifestPolicy,
}

impl SparkStreamingCreator {
    pub fn new(context: DeployContext) -> Self {
        Self {
            context,
            policy: ManifestPolicy::spark_streaming(),
        }
    }
}

impl ComponentCreator for SparkStreamingCreator {
    fn component_type(&self) -> ComponentType {
        ComponentType::SparkStreaming
    }

    fn validate_component(&self, component: &ComponentManifest) -> Vec<String> {
        tracing::debug!(component = %component.component_name, "validate_component");
        self.policy.check(component)
    }

    fn create_component(&self, request: &InstallRequest<'_>) -> DeployerResult<LifecycleCommands> {
        self.install(request)
    }
}
