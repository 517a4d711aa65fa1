use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};

use component_deployer::application::{install_properties, load_component_properties, load_manifest};
use component_deployer::infrastructure::{ScpTransfer, SshExecutor};
use component_deployer::{
    ComponentType, CreatorRegistry, DeployContext, DeployerConfig, InstallRequest,
};

use crate::presentation::output;

pub struct InstallArgs<'a> {
    pub staged: &'a Path,
    pub application: &'a str,
    pub user: &'a str,
    pub name: Option<&'a str>,
    pub component_type: ComponentType,
    pub dry_run: bool,
    pub config: Option<&'a Path>,
}

pub fn cmd_install(args: InstallArgs<'_>, json: bool) -> Result<ExitCode> {
    let (config, warnings) = DeployerConfig::discover(args.config)?;
    let config = config.with_env_overrides();
    if !json {
        for warning in &warnings {
            eprintln!(
                "Warning: unknown config key '{}' in {}",
                warning.key,
                warning.file.display()
            );
        }
    }

    let component = load_manifest(args.staged, args.name, args.component_type)
        .with_context(|| format!("reading staged component {}", args.staged.display()))?;
    let component_properties = load_component_properties(args.staged)
        .with_context(|| format!("reading properties.json in {}", args.staged.display()))?;
    let properties = install_properties(
        component_properties,
        &config,
        args.application,
        &component.component_name,
        args.user,
    );

    let (context, recorder) = if args.dry_run {
        let (context, recorder) = DeployContext::dry_run(config);
        (context, Some(recorder))
    } else {
        if !SshExecutor::check_available() || !ScpTransfer::check_available() {
            bail!("ssh and scp must be installed to deploy components");
        }
        (DeployContext::system(config), None)
    };

    let registry = CreatorRegistry::with_default_creators(&context);
    let commands = registry.create(&InstallRequest {
        staged_path: args.staged,
        application: args.application,
        user: args.user,
        component: &component,
        properties: &properties,
    })?;

    let calls = recorder.map(|recorder| recorder.calls());
    if json {
        println!(
            "{}",
            output::install_json(&component, &commands, calls.as_deref())
        );
    } else {
        print!(
            "{}",
            output::render_install(&component, &commands, calls.as_deref())
        );
    }
    Ok(ExitCode::SUCCESS)
}
