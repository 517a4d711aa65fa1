//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::Properties;
use crate::domain::ports::RemoteTarget;
use crate::error::DeployerResult;

use super::loader::{self, ConfigWarning};

/// Cluster access settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Private key used for every ssh/scp call
    #[serde(default = "default_private_key")]
    pub private_key: PathBuf,

    /// Login user on every host
    #[serde(default = "default_root_user")]
    pub root_user: String,

    /// Comma-separated worker host list
    #[serde(default)]
    pub yarn_node_managers: String,

    /// Host the service itself is installed on
    #[serde(default = "default_primary_host")]
    pub primary_host: String,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            private_key: default_private_key(),
            root_user: default_root_user(),
            yarn_node_managers: String::new(),
            primary_host: default_primary_host(),
        }
    }
}

fn default_private_key() -> PathBuf {
    PathBuf::from("dm.pem")
}

fn default_root_user() -> String {
    "root".to_string()
}

fn default_primary_host() -> String {
    "localhost".to_string()
}

fn default_namespace() -> String {
    "deployer".to_string()
}

/// Environment context for one deployment run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployerConfig {
    /// Deployment namespace, used to build every remote path
    #[serde(default = "default_namespace")]
    pub namespace: String,

    #[serde(default)]
    pub cluster: ClusterConfig,

    /// Extra values exposed to templates as `environment_<key>`
    #[serde(default)]
    pub environment: BTreeMap<String, String>,
}

impl Default for DeployerConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            cluster: ClusterConfig::default(),
            environment: BTreeMap::new(),
        }
    }
}

impl DeployerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DeployerResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DeployerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, the project file, the user file, or defaults
    pub fn discover(explicit: Option<&Path>) -> DeployerResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit)
    }

    /// Apply environment variable overrides (DEPLOYER_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |name| std::env::var(name).ok())
    }

    /// Worker hosts, in listed order, without blanks
    pub fn node_managers(&self) -> Vec<String> {
        self.cluster
            .yarn_node_managers
            .split(',')
            .map(str::trim)
            .filter(|host| !host.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Remote target for `host` using the cluster user and key
    pub fn target_for(&self, host: &str) -> RemoteTarget {
        RemoteTarget::new(host, &self.cluster.root_user, &self.cluster.private_key)
    }

    /// Remote target for the primary host
    pub fn primary_target(&self) -> RemoteTarget {
        self.target_for(&self.cluster.primary_host)
    }

    /// Context values exposed to templates, each prefixed with `environment_`
    pub fn environment_properties(&self) -> Properties {
        let mut props = Properties::new()
            .with("environment_namespace", &self.namespace)
            .with("environment_cluster_root_user", &self.cluster.root_user)
            .with(
                "environment_cluster_private_key",
                self.cluster.private_key.to_string_lossy(),
            )
            .with(
                "environment_yarn_node_managers",
                &self.cluster.yarn_node_managers,
            );
        for (key, value) in &self.environment {
            props.insert(format!("environment_{}", key), value);
        }
        props
    }
}
