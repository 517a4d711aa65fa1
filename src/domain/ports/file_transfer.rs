//! File Transfer Port
//!
//! Copies local files to a path on a remote host.

use std::path::PathBuf;

use super::remote_executor::{RemoteTarget, TransportError};

/// Trait for copying files to a remote host
pub trait FileTransfer: Send + Sync {
    /// Get the name of this transfer method (for logging)
    fn name(&self) -> &'static str;

    /// Copy `sources` to `destination` on `target`.
    ///
    /// With several sources `destination` is a directory; with one source it
    /// may also name the destination file.
    fn copy(
        &self,
        target: &RemoteTarget,
        sources: &[PathBuf],
        destination: &str,
    ) -> Result<(), TransportError>;
}
