//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `remote/` - ssh executor, scp transfer, dry-run transport
//! - `template` - `${key}` placeholder renderer
//! - `assets/` - embedded service templates and helper script

pub mod assets;
pub mod remote;
pub mod template;

// Re-export for convenience
pub use remote::{DryRunCall, DryRunTransport, ScpTransfer, SshExecutor};
pub use template::PlaceholderRenderer;
