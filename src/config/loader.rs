//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DeployerError, DeployerResult};

use super::types::DeployerConfig;

/// Config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "deployer.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeployerResult<(DeployerConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: DeployerConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployerError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| {
            tracing::warn!(key = %key, file = %path.display(), "unknown config key ignored");
            ConfigWarning {
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit path, the project file, the user file, or defaults.
///
/// An explicit path must exist; the fallbacks are skipped when absent.
pub fn discover(explicit: Option<&Path>) -> DeployerResult<(DeployerConfig, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        tracing::debug!(path = %path.display(), "loading explicit config");
        return load_with_warnings(path);
    }

    let project_config = PathBuf::from(PROJECT_CONFIG_FILE);
    if project_config.is_file() {
        tracing::debug!(path = %project_config.display(), "loading project config");
        return load_with_warnings(&project_config);
    }

    if let Some(user_config) = user_config_path() {
        if user_config.is_file() {
            tracing::debug!(path = %user_config.display(), "loading user config");
            return load_with_warnings(&user_config);
        }
    }

    tracing::debug!("no config file found, using defaults");
    Ok((DeployerConfig::default(), Vec::new()))
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("component-deployer").join("config.toml"))
}

/// Apply environment variable overrides (DEPLOYER_* prefix)
pub fn with_env_overrides<F>(mut config: DeployerConfig, lookup: F) -> DeployerConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(namespace) = lookup("DEPLOYER_NAMESPACE") {
        config.namespace = namespace;
    }
    if let Some(key) = lookup("DEPLOYER_PRIVATE_KEY") {
        config.cluster.private_key = PathBuf::from(key);
    }
    if let Some(user) = lookup("DEPLOYER_ROOT_USER") {
        config.cluster.root_user = user;
    }
    if let Some(hosts) = lookup("DEPLOYER_NODE_MANAGERS") {
        config.cluster.yarn_node_managers = hosts;
    }
    if let Some(host) = lookup("DEPLOYER_PRIMARY_HOST") {
        config.cluster.primary_host = host;
    }
    config
}
