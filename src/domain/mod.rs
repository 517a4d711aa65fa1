//! Domain Layer
//!
//! The core of the deployer - component identity, property defaulting, the
//! manifest policy and the typed remote operations, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (ComponentManifest, Properties, LifecycleCommands)
//! - `value_objects/` - Immutable value types (ComponentType, ComponentPaths, ServiceVariant, RemoteOp)
//! - `policies/` - Business rules (ManifestPolicy)
//! - `ports/` - Interface definitions for infrastructure (RemoteExecutor, FileTransfer, TemplateRenderer)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Defaulting and command synthesis return new values
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod value_objects;
