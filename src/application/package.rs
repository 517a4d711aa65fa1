//! Staged package loading
//!
//! Reads a staged component directory into a manifest and builds the
//! property map handed to the creator.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::config::DeployerConfig;
use crate::domain::entities::{keys, ComponentManifest, Properties, PROPERTIES_JSON};
use crate::domain::value_objects::ComponentType;
use crate::error::DeployerResult;

/// Build a manifest from the files present in `dir`.
///
/// The component name defaults to the directory name.
pub fn load_manifest(
    dir: &Path,
    name: Option<&str>,
    component_type: ComponentType,
) -> DeployerResult<ComponentManifest> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    let component_name = match name {
        Some(name) => name.to_string(),
        None => dir
            .canonicalize()?
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };
    tracing::debug!(component = %component_name, files = files.len(), "loaded manifest");
    Ok(ComponentManifest::new(component_name, component_type, files))
}

/// Read `properties.json` from `dir`, each key prefixed with `component_`.
///
/// A missing file yields an empty map. Non-string scalars are stringified;
/// nested values keep their JSON text.
pub fn load_component_properties(dir: &Path) -> DeployerResult<Properties> {
    let path = dir.join(PROPERTIES_JSON);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no properties.json, using empty properties");
        return Ok(Properties::new());
    }
    let raw: Map<String, Value> = serde_json::from_str(&fs::read_to_string(&path)?)?;
    Ok(raw
        .into_iter()
        .map(|(key, value)| (format!("component_{}", key), stringify(value)))
        .collect())
}

fn stringify(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Full property map for one install: component properties, identity keys
/// and the environment context.
pub fn install_properties(
    component: Properties,
    config: &DeployerConfig,
    application: &str,
    component_name: &str,
    user: &str,
) -> Properties {
    let mut properties = component;
    properties.extend(config.environment_properties());
    properties.insert(keys::APPLICATION, application);
    properties.insert(keys::NAME, component_name);
    properties.insert(
        keys::JOB_NAME,
        format!("{}-{}-{}-job", config.namespace, application, component_name),
    );
    properties.insert(keys::APPLICATION_USER, user);
    properties
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn manifest_lists_files_and_defaults_name_to_dir() {
        let root = tempdir().unwrap();
        let dir = root.path().join("ingest");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("log4j.properties"), "").unwrap();
        fs::create_dir(dir.join("lib")).unwrap();

        let manifest = load_manifest(&dir, None, ComponentType::SparkStreaming).unwrap();

        assert_eq!(manifest.component_name, "ingest");
        assert!(manifest.has_file("log4j.properties"));
        assert!(!manifest.has_file("lib"));
    }

    #[test]
    fn properties_are_prefixed_and_stringified() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("properties.json"),
            r#"{"main_py": "job.py", "respawn_timeout_sec": 5, "debug": true, "extra": null}"#,
        )
        .unwrap();

        let props = load_component_properties(dir.path()).unwrap();

        assert_eq!(props.get("component_main_py"), Some("job.py"));
        assert_eq!(props.get("component_respawn_timeout_sec"), Some("5"));
        assert_eq!(props.get("component_debug"), Some("true"));
        assert_eq!(props.get("component_extra"), Some(""));
    }

    #[test]
    fn missing_properties_file_is_empty() {
        let dir = tempdir().unwrap();
        assert!(load_component_properties(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn invalid_properties_json_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("properties.json"), "[1, 2]").unwrap();
        assert!(load_component_properties(dir.path()).is_err());
    }

    #[test]
    fn install_properties_add_identity_and_environment() {
        let config = DeployerConfig {
            namespace: "ns".to_string(),
            ..DeployerConfig::default()
        };
        let props = install_properties(Properties::new(), &config, "app", "comp", "alice");

        assert_eq!(props.get(keys::APPLICATION), Some("app"));
        assert_eq!(props.get(keys::NAME), Some("comp"));
        assert_eq!(props.get(keys::JOB_NAME), Some("ns-app-comp-job"));
        assert_eq!(props.get(keys::APPLICATION_USER), Some("alice"));
        assert_eq!(props.get("environment_namespace"), Some("ns"));
    }
}
