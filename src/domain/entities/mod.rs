//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `ComponentManifest` - A staged component and the files it ships
//! - `Properties` - Key/value mapping used for template substitution
//! - `LifecycleCommands` - Uninstall/start/stop operations handed back to the caller

mod lifecycle;
mod manifest;
mod properties;

pub use lifecycle::LifecycleCommands;
pub use manifest::{
    ComponentManifest, APPLICATION_PROPERTIES, LOG4J_PROPERTIES, PROPERTIES_JSON, UPSTART_CONF,
};
pub use properties::{keys, Properties};
