//! Remote Executor Port
//!
//! Runs an ordered list of operations on one host as one user, authenticated
//! with a private key. Timeouts and retries belong to the implementation;
//! callers see only success or a `TransportError`.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::value_objects::RemoteOp;

/// Error while talking to a remote host
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Could not reach the host or start the transport program
    #[error("connection to {host} failed: {message}")]
    ConnectionError { host: String, message: String },
    /// The remote command or copy ran and failed
    #[error("command on {host} failed: {message}")]
    CommandFailed { host: String, message: String },
    /// Transport program is not installed
    #[error("not available: {0}")]
    NotAvailable(String),
    /// Local file system error while preparing a transfer
    #[error("I/O error: {0}")]
    Io(String),
}

/// Host, login user and key used for every remote call
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteTarget {
    pub host: String,
    pub user: String,
    pub key_file: PathBuf,
}

impl RemoteTarget {
    pub fn new(host: impl Into<String>, user: impl Into<String>, key_file: impl AsRef<Path>) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            key_file: key_file.as_ref().to_path_buf(),
        }
    }

    /// `user@host` destination string
    pub fn destination(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }
}

/// Trait for running operations on a remote host
pub trait RemoteExecutor: Send + Sync {
    /// Get the name of this executor (for logging)
    fn name(&self) -> &'static str;

    /// Run `ops` in order on `target`, stopping at the first failure
    fn execute(&self, target: &RemoteTarget, ops: &[RemoteOp]) -> Result<(), TransportError>;
}
