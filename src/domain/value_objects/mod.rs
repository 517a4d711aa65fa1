//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod component_paths;
mod component_type;
mod remote_op;
mod service_variant;

pub use component_paths::{ComponentPaths, SYSTEMD_UNIT_DIR};
pub use component_type::ComponentType;
pub use remote_op::{render_shell, RemoteOp};
pub use service_variant::{ServiceVariant, COMPILED_SERVICE_TEMPLATE, SCRIPTED_SERVICE_TEMPLATE};
