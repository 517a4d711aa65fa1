//! SSH Executor
//!
//! Runs remote operations as one `ssh` invocation per call. The operations
//! are rendered to a `set -e` script, so the first failing command aborts
//! the rest and its exit status is reported.

use std::process::{Command, Stdio};

use super::{check_output, common_args, spawn_error};
use crate::domain::ports::{RemoteExecutor, RemoteTarget, TransportError};
use crate::domain::value_objects::RemoteOp;

/// Remote executor using the system `ssh` binary
#[derive(Debug, Clone, Copy, Default)]
pub struct SshExecutor;

impl SshExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Check if ssh is installed and available
    pub fn check_available() -> bool {
        Command::new("ssh")
            .arg("-V")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Shell script run on the remote host for `ops`
    pub fn script(ops: &[RemoteOp]) -> String {
        let mut script = String::from("set -e");
        for op in ops {
            script.push('\n');
            script.push_str(&op.to_shell());
        }
        script
    }
}

impl RemoteExecutor for SshExecutor {
    fn name(&self) -> &'static str {
        "ssh"
    }

    fn execute(&self, target: &RemoteTarget, ops: &[RemoteOp]) -> Result<(), TransportError> {
        if ops.is_empty() {
            return Ok(());
        }

        let script = Self::script(ops);
        tracing::debug!(host = %target.host, user = %target.user, %script, "ssh exec");

        let output = Command::new("ssh")
            .args(common_args(target))
            .arg(target.destination())
            .arg(&script)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| spawn_error("ssh", &target.host, e))?;

        check_output("ssh", &target.host, &output)
    }
}
