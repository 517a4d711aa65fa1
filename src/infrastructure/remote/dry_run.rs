//! Dry-run transport
//!
//! Implements both remote ports without contacting any host. Every call is
//! logged and recorded so the CLI can show what an install would do.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use serde::Serialize;

use crate::domain::ports::{FileTransfer, RemoteExecutor, RemoteTarget, TransportError};
use crate::domain::value_objects::{render_shell, RemoteOp};

/// One recorded remote call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DryRunCall {
    Execute {
        host: String,
        commands: Vec<String>,
    },
    Copy {
        host: String,
        sources: Vec<PathBuf>,
        destination: String,
    },
}

/// Transport that records instead of executing
#[derive(Debug, Default)]
pub struct DryRunTransport {
    calls: Mutex<Vec<DryRunCall>>,
}

impl DryRunTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded so far, in order
    pub fn calls(&self) -> Vec<DryRunCall> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<DryRunCall>> {
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RemoteExecutor for DryRunTransport {
    fn name(&self) -> &'static str {
        "dry-run"
    }

    fn execute(&self, target: &RemoteTarget, ops: &[RemoteOp]) -> Result<(), TransportError> {
        let commands = render_shell(ops);
        for command in &commands {
            tracing::info!(host = %target.host, "[dry-run] {}", command);
        }
        self.lock().push(DryRunCall::Execute {
            host: target.host.clone(),
            commands,
        });
        Ok(())
    }
}

impl FileTransfer for DryRunTransport {
    fn name(&self) -> &'static str {
        "dry-run"
    }

    fn copy(
        &self,
        target: &RemoteTarget,
        sources: &[PathBuf],
        destination: &str,
    ) -> Result<(), TransportError> {
        tracing::info!(
            host = %target.host,
            files = sources.len(),
            "[dry-run] copy to {}",
            destination
        );
        self.lock().push(DryRunCall::Copy {
            host: target.host.clone(),
            sources: sources.to_vec(),
            destination: destination.to_string(),
        });
        Ok(())
    }
}
