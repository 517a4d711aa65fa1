//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use component_deployer::domain::ports::{
    FileTransfer, RemoteExecutor, RemoteTarget, TransportError,
};
use component_deployer::domain::value_objects::render_shell;
use component_deployer::infrastructure::PlaceholderRenderer;
use component_deployer::{DeployContext, DeployerConfig, RemoteOp};
use tempfile::TempDir;

/// One recorded port call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Execute { host: String, commands: Vec<String> },
    Copy { host: String, sources: Vec<String>, destination: String },
}

impl Call {
    pub fn host(&self) -> &str {
        match self {
            Call::Execute { host, .. } | Call::Copy { host, .. } => host,
        }
    }
}

/// Records every call; can be told to fail on the first call to a host.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<Call>>,
    fail_on_host: Option<String>,
}

impl RecordingTransport {
    pub fn failing_on(host: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on_host: Some(host.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), TransportError> {
        let host = call.host().to_string();
        self.calls.lock().unwrap().push(call);
        if self.fail_on_host.as_deref() == Some(host.as_str()) {
            return Err(TransportError::CommandFailed {
                host,
                message: "exit status 1".to_string(),
            });
        }
        Ok(())
    }
}

impl RemoteExecutor for RecordingTransport {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn execute(&self, target: &RemoteTarget, ops: &[RemoteOp]) -> Result<(), TransportError> {
        self.record(Call::Execute {
            host: target.host.clone(),
            commands: render_shell(ops),
        })
    }
}

impl FileTransfer for RecordingTransport {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn copy(
        &self,
        target: &RemoteTarget,
        sources: &[PathBuf],
        destination: &str,
    ) -> Result<(), TransportError> {
        let sources = sources
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        self.record(Call::Copy {
            host: target.host.clone(),
            sources,
            destination: destination.to_string(),
        })
    }
}

pub fn config(namespace: &str, node_managers: &str) -> DeployerConfig {
    let mut config = DeployerConfig {
        namespace: namespace.to_string(),
        ..DeployerConfig::default()
    };
    config.cluster.yarn_node_managers = node_managers.to_string();
    config.cluster.primary_host = "primary".to_string();
    config
}

pub fn context(config: DeployerConfig, transport: Arc<RecordingTransport>) -> DeployContext {
    DeployContext::new(
        Arc::new(config),
        transport.clone(),
        transport,
        Arc::new(PlaceholderRenderer::new()),
    )
}

/// Staged component directory `<tmp>/<name>` with the given files
pub fn staged_component<S: AsRef<str>>(name: &str, files: &[(&str, S)]) -> (TempDir, PathBuf) {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join(name);
    fs::create_dir(&dir).unwrap();
    for (file, content) in files {
        fs::write(dir.join(file), content.as_ref()).unwrap();
    }
    (root, dir)
}

pub fn standard_files(properties_json: &str) -> Vec<(&'static str, String)> {
    vec![
        ("application.properties", "job.name=${component_job_name}\n".to_string()),
        ("log4j.properties", "log4j.rootLogger=INFO, console\n".to_string()),
        ("properties.json", properties_json.to_string()),
    ]
}

pub fn read(dir: &Path, file: &str) -> String {
    fs::read_to_string(dir.join(file)).unwrap()
}
