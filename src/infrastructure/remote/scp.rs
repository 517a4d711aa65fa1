//! SCP Transfer
//!
//! Copies local files to a remote host through the system `scp` binary.
//! The destination directory must already exist; the installer creates it
//! through the executor before transferring.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::{check_output, common_args, spawn_error};
use crate::domain::ports::{FileTransfer, RemoteTarget, TransportError};

/// File transfer using scp
#[derive(Debug, Clone, Copy, Default)]
pub struct ScpTransfer;

impl ScpTransfer {
    pub fn new() -> Self {
        Self
    }

    /// Check if scp is installed and available
    pub fn check_available() -> bool {
        // scp without args returns non-zero, but if we can spawn it, it's available
        Command::new("scp")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }

    /// Argument list for one scp invocation
    fn args(target: &RemoteTarget, sources: &[PathBuf], destination: &str) -> Vec<String> {
        let mut args = vec!["-r".to_string(), "-p".to_string()];
        args.extend(common_args(target));
        args.extend(
            sources
                .iter()
                .map(|source| source.to_string_lossy().into_owned()),
        );
        args.push(format!("{}:{}", target.destination(), destination));
        args
    }
}

impl FileTransfer for ScpTransfer {
    fn name(&self) -> &'static str {
        "scp"
    }

    fn copy(
        &self,
        target: &RemoteTarget,
        sources: &[PathBuf],
        destination: &str,
    ) -> Result<(), TransportError> {
        if sources.is_empty() {
            return Ok(());
        }

        tracing::debug!(
            host = %target.host,
            files = sources.len(),
            destination,
            "scp copy"
        );

        let output = Command::new("scp")
            .args(Self::args(target, sources, destination))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| spawn_error("scp", &target.host, e))?;

        check_output("scp", &target.host, &output)
    }
}
