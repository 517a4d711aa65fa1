//! Remote transports
//!
//! Implements the RemoteExecutor and FileTransfer ports through the system
//! `ssh` and `scp` binaries, plus a dry-run transport that only records.

mod dry_run;
mod scp;
mod ssh;

pub use dry_run::{DryRunCall, DryRunTransport};
pub use scp::ScpTransfer;
pub use ssh::SshExecutor;

use std::process::Output;

use crate::domain::ports::{RemoteTarget, TransportError};

/// Options shared by every ssh/scp invocation
fn common_args(target: &RemoteTarget) -> Vec<String> {
    vec![
        "-i".to_string(),
        target.key_file.to_string_lossy().into_owned(),
        "-o".to_string(),
        "StrictHostKeyChecking=no".to_string(),
        "-o".to_string(),
        "BatchMode=yes".to_string(),
    ]
}

/// Map a spawn failure to a transport error
fn spawn_error(program: &str, host: &str, err: std::io::Error) -> TransportError {
    if err.kind() == std::io::ErrorKind::NotFound {
        TransportError::NotAvailable(format!("{} is not installed or not in PATH", program))
    } else {
        TransportError::ConnectionError {
            host: host.to_string(),
            message: err.to_string(),
        }
    }
}

/// Map a finished process to success or a transport error.
///
/// ssh and scp both exit with 255 when the connection itself fails.
fn check_output(program: &str, host: &str, output: &Output) -> Result<(), TransportError> {
    if output.status.success() {
        return Ok(());
    }
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    let message = format!(
        "{} exited with {:?}{}",
        program,
        output.status.code(),
        if stderr.is_empty() {
            String::new()
        } else {
            format!(": {}", stderr)
        }
    );
    if output.status.code() == Some(255) {
        Err(TransportError::ConnectionError {
            host: host.to_string(),
            message,
        })
    } else {
        Err(TransportError::CommandFailed {
            host: host.to_string(),
            message,
        })
    }
}
