use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use component_deployer::application::load_manifest;
use component_deployer::{ComponentType, CreatorRegistry, DeployContext, DeployerConfig};

use crate::presentation::output;

/// Validate a staged component; exits non-zero when problems are found.
pub fn cmd_validate(
    staged: &Path,
    name: Option<&str>,
    component_type: ComponentType,
    json: bool,
) -> Result<ExitCode> {
    let component = load_manifest(staged, name, component_type)?;
    // Validation never reaches the cluster.
    let (context, _) = DeployContext::dry_run(DeployerConfig::default());
    let registry = CreatorRegistry::with_default_creators(&context);
    let problems = registry.validate(&component)?;

    if json {
        println!("{}", output::validation_json(&component, &problems));
    } else {
        print!("{}", output::render_validation(&component, &problems));
    }

    if problems.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
