//! Output Rendering
//!
//! Text for humans, one JSON document per command for scripting.

use std::fmt::Write as _;

use serde_json::{json, Value};

use component_deployer::infrastructure::DryRunCall;
use component_deployer::{ComponentManifest, DeployerError, LifecycleCommands};

/// Text report for `validate`
pub fn render_validation(component: &ComponentManifest, problems: &[String]) -> String {
    let mut out = String::new();
    if problems.is_empty() {
        let _ = writeln!(
            out,
            "[OK] {} ({}) is valid",
            component.component_name, component.component_type
        );
        return out;
    }
    let _ = writeln!(
        out,
        "[FAIL] {} ({}) has {} problem(s):",
        component.component_name,
        component.component_type,
        problems.len()
    );
    for problem in problems {
        let _ = writeln!(out, "  - {}", problem);
    }
    out
}

pub fn validation_json(component: &ComponentManifest, problems: &[String]) -> Value {
    json!({
        "command": "validate",
        "component": component.component_name,
        "type": component.component_type,
        "valid": problems.is_empty(),
        "errors": problems,
    })
}

fn write_section(out: &mut String, title: &str, commands: &[String]) {
    let _ = writeln!(out, "{}:", title);
    for command in commands {
        let _ = writeln!(out, "  {}", command);
    }
}

/// Text report for `install`, listing the recorded calls of a dry run first
pub fn render_install(
    component: &ComponentManifest,
    commands: &LifecycleCommands,
    dry_run: Option<&[DryRunCall]>,
) -> String {
    let mut out = String::new();
    if let Some(calls) = dry_run {
        let _ = writeln!(out, "Dry run, no host was contacted:");
        for call in calls {
            match call {
                DryRunCall::Execute { host, commands } => {
                    for command in commands {
                        let _ = writeln!(out, "  [{}] {}", host, command);
                    }
                }
                DryRunCall::Copy {
                    host,
                    sources,
                    destination,
                } => {
                    let _ = writeln!(
                        out,
                        "  [{}] copy {} file(s) -> {}",
                        host,
                        sources.len(),
                        destination
                    );
                }
            }
        }
    }
    let _ = writeln!(out, "[OK] installed {}", component.component_name);
    write_section(&mut out, "undo", &commands.undo_commands());
    write_section(&mut out, "start", &commands.start_commands());
    write_section(&mut out, "stop", &commands.stop_commands());
    out
}

pub fn install_json(
    component: &ComponentManifest,
    commands: &LifecycleCommands,
    dry_run: Option<&[DryRunCall]>,
) -> Value {
    let mut value = json!({
        "command": "install",
        "component": component.component_name,
        "type": component.component_type,
        "dry_run": dry_run.is_some(),
        "lifecycle": commands,
    });
    if let Some(calls) = dry_run {
        value["calls"] = json!(calls);
    }
    value
}

/// JSON document for a failed command
pub fn error_json(err: &anyhow::Error) -> Value {
    let configuration = err
        .downcast_ref::<DeployerError>()
        .is_some_and(DeployerError::is_configuration_error);
    json!({
        "event": "error",
        "message": format!("{:#}", err),
        "configuration": configuration,
    })
}
