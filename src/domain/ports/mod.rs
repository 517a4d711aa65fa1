//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations (ssh, scp,
//! placeholder rendering, dry run); tests provide recording stubs.

pub mod file_transfer;
pub mod remote_executor;
pub mod template_renderer;

pub use file_transfer::FileTransfer;
pub use remote_executor::{RemoteExecutor, RemoteTarget, TransportError};
pub use template_renderer::{RenderError, TemplateRenderer};
