//! sparkStreaming install sequence
//!
//! 1. derive remote paths and fill property defaults
//! 2. reject legacy packages and pick the service variant
//! 3. write and render the service unit and helper files locally
//! 4. stage the directory on the primary host
//! 5. push `log4j.properties` to every node manager
//! 6. move the staged files into place and drop the staging directory
//!
//! Configuration errors surface before any host is contacted. A transport
//! failure stops the sequence; nothing already done is rolled back.

use crate::domain::entities::{LifecycleCommands, APPLICATION_PROPERTIES, LOG4J_PROPERTIES};
use crate::domain::value_objects::{ComponentPaths, RemoteOp, ServiceVariant};
use crate::error::{DeployerError, DeployerResult};
use crate::infrastructure::assets::YARN_KILL_SCRIPT;

use super::staging::StagedComponent;
use super::SparkStreamingCreator;
use crate::application::creator::InstallRequest;

/// Create the staging directory and the install directory on the primary host
pub fn prepare_ops(paths: &ComponentPaths) -> Vec<RemoteOp> {
    vec![
        RemoteOp::mkdir(&paths.tmp_path),
        RemoteOp::sudo_mkdir(&paths.install_path),
    ]
}

/// Operations run on a node manager after `log4j.properties` was copied
/// into its staging directory
pub fn worker_ops(paths: &ComponentPaths) -> Vec<RemoteOp> {
    vec![
        RemoteOp::sudo_mkdir(&paths.install_path),
        RemoteOp::sudo_move(
            paths.tmp_file(LOG4J_PROPERTIES),
            paths.install_file(LOG4J_PROPERTIES),
        ),
    ]
}

/// Privileged install on the primary host once the staging directory is filled
pub fn install_ops(
    paths: &ComponentPaths,
    service_template: &str,
    variant: &ServiceVariant,
) -> Vec<RemoteOp> {
    let mut ops = vec![
        RemoteOp::sudo_copy(paths.tmp_file(service_template), paths.unit_install_path()),
        RemoteOp::sudo_copy_contents(&paths.tmp_path, &paths.install_path),
        RemoteOp::sudo_make_executable(paths.install_file(YARN_KILL_SCRIPT)),
    ];
    if let Some(jar) = variant.main_jar() {
        ops.push(RemoteOp::sudo_update_jar(
            &paths.install_path,
            jar,
            APPLICATION_PROPERTIES,
        ));
    }
    ops.push(RemoteOp::sudo_remove_dir(&paths.tmp_path));
    ops
}

impl SparkStreamingCreator {
    pub(super) fn install(
        &self,
        request: &InstallRequest<'_>,
    ) -> DeployerResult<LifecycleCommands> {
        let config = &self.context.config;
        let application = request.application;
        let component = &request.component.component_name;

        tracing::debug!(
            application,
            user = request.user,
            component = %component,
            staged = %request.staged_path.display(),
            properties = ?request.properties,
            "create_component"
        );

        let paths = ComponentPaths::new(&config.namespace, application, component);
        let properties = request.properties.with_defaults();

        if request.component.is_legacy_format() {
            return Err(DeployerError::DeprecatedUpstart {
                application: application.to_string(),
                component: component.to_string(),
            });
        }

        let variant = ServiceVariant::resolve(&properties, application, component)?;
        tracing::debug!(?variant, "selected service variant");

        let staged = StagedComponent::prepare(request.staged_path, &variant)?;
        let properties = properties.with_respawn_defaults();
        staged.render(self.context.renderer.as_ref(), &properties)?;

        let executor = self.context.executor.as_ref();
        let transfer = self.context.transfer.as_ref();
        let primary = config.primary_target();

        tracing::info!(
            host = %primary.host,
            staging = %paths.tmp_path,
            executor = executor.name(),
            transfer = transfer.name(),
            "staging component"
        );
        executor.execute(&primary, &prepare_ops(&paths))?;
        transfer.copy(&primary, &staged.entries()?, &paths.tmp_path)?;

        let node_managers = config.node_managers();
        tracing::info!(count = node_managers.len(), "distributing log4j.properties to node managers");
        for host in node_managers {
            tracing::debug!(host = %host, "staging log4j.properties on node manager");
            let node = config.target_for(&host);
            executor.execute(&node, &[RemoteOp::mkdir(&paths.tmp_path)])?;
            transfer.copy(
                &node,
                &[staged.file(LOG4J_PROPERTIES)],
                &paths.tmp_file(LOG4J_PROPERTIES),
            )?;
            executor.execute(&node, &worker_ops(&paths))?;
        }

        tracing::info!(host = %primary.host, install = %paths.install_path, "installing service");
        executor.execute(
            &primary,
            &install_ops(&paths, staged.service_template(), &variant),
        )?;

        let commands = LifecycleCommands::for_service(&paths);
        tracing::info!(
            application,
            component = %component,
            service = %paths.service_name,
            "installed sparkStreaming component"
        );
        tracing::debug!(
            undo = ?commands.undo_commands(),
            start = ?commands.start_commands(),
            stop = ?commands.stop_commands(),
            "lifecycle commands"
        );
        Ok(commands)
    }
}
