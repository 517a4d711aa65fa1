//! Creator registry keyed by component type

use crate::domain::entities::{ComponentManifest, LifecycleCommands};
use crate::domain::value_objects::ComponentType;
use crate::error::{DeployerError, DeployerResult};

use super::creator::{ComponentCreator, DeployContext, InstallRequest};
use super::spark_streaming::SparkStreamingCreator;

/// Looks up the creator responsible for a component type
#[derive(Default)]
pub struct CreatorRegistry {
    creators: Vec<Box<dyn ComponentCreator>>,
}

impl CreatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with a creator for every built-in component type
    pub fn with_default_creators(context: &DeployContext) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(SparkStreamingCreator::new(context.clone())));
        registry
    }

    /// Add a creator, replacing any existing one for the same type
    pub fn register(&mut self, creator: Box<dyn ComponentCreator>) {
        let component_type = creator.component_type();
        self.creators
            .retain(|existing| existing.component_type() != component_type);
        self.creators.push(creator);
    }

    pub fn get(&self, component_type: ComponentType) -> Option<&dyn ComponentCreator> {
        self.creators
            .iter()
            .find(|creator| creator.component_type() == component_type)
            .map(|creator| creator.as_ref())
    }

    pub fn all(&self) -> &[Box<dyn ComponentCreator>] {
        &self.creators
    }

    fn require(&self, component_type: ComponentType) -> DeployerResult<&dyn ComponentCreator> {
        self.get(component_type)
            .ok_or_else(|| DeployerError::UnknownComponentType(component_type.to_string()))
    }

    /// Validate with the creator for the manifest's type
    pub fn validate(&self, component: &ComponentManifest) -> DeployerResult<Vec<String>> {
        Ok(self
            .require(component.component_type)?
            .validate_component(component))
    }

    /// Install with the creator for the request's component type
    pub fn create(&self, request: &InstallRequest<'_>) -> DeployerResult<LifecycleCommands> {
        self.require(request.component.component_type)?
            .create_component(request)
    }
}
