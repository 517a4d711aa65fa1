//! Lifecycle command sets handed back to the caller
//!
//! These are data only. Nothing in this crate executes them; the deployment
//! manager runs or persists them for later uninstall/start/stop.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::domain::value_objects::{render_shell, ComponentPaths, RemoteOp};

/// Uninstall, start and stop operations for one installed component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleCommands {
    pub undo: Vec<RemoteOp>,
    pub start: Vec<RemoteOp>,
    pub stop: Vec<RemoteOp>,
}

impl LifecycleCommands {
    /// Build the command sets for a service installed at `paths`.
    ///
    /// - undo: stop the service, remove the install directory, remove the unit file
    /// - start: reload unit definitions, start the service
    /// - stop: stop the service
    pub fn for_service(paths: &ComponentPaths) -> Self {
        Self {
            undo: vec![
                RemoteOp::stop_service(&paths.service_name),
                RemoteOp::sudo_remove_dir(&paths.install_path),
                RemoteOp::sudo_remove_file(paths.unit_install_path()),
            ],
            start: vec![
                RemoteOp::ReloadServiceManager,
                RemoteOp::start_service(&paths.service_name),
            ],
            stop: vec![RemoteOp::stop_service(&paths.service_name)],
        }
    }

    pub fn undo_commands(&self) -> Vec<String> {
        render_shell(&self.undo)
    }

    pub fn start_commands(&self) -> Vec<String> {
        render_shell(&self.start)
    }

    pub fn stop_commands(&self) -> Vec<String> {
        render_shell(&self.stop)
    }
}

// Serialized in the shape the deployment manager persists:
// {"ssh": [...], "start_cmds": [...], "stop_cmds": [...]}
impl Serialize for LifecycleCommands {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LifecycleCommands", 3)?;
        state.serialize_field("ssh", &self.undo_commands())?;
        state.serialize_field("start_cmds", &self.start_commands())?;
        state.serialize_field("stop_cmds", &self.stop_commands())?;
        state.end()
    }
}
