//! Application Layer
//!
//! Orchestrates component installs on top of the domain and the ports.
//!
//! - `ComponentCreator` - per component type validation and install
//! - `CreatorRegistry` - creator lookup by component type
//! - `package` - staged manifest and property loading

pub mod creator;
pub mod package;
pub mod registry;
pub mod spark_streaming;

pub use creator::{ComponentCreator, DeployContext, InstallRequest};
pub use package::{install_properties, load_component_properties, load_manifest};
pub use registry::CreatorRegistry;
pub use spark_streaming::SparkStreamingCreator;
