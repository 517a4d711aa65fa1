//! Component type value object - selects the creator plugin for a component

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DeployerError;

/// Component type as it appears in an application package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum ComponentType {
    /// Long-running Spark Streaming job managed as a systemd service
    #[serde(rename = "sparkStreaming")]
    #[value(name = "sparkStreaming", alias = "spark-streaming")]
    SparkStreaming,
}

impl ComponentType {
    /// All known component types
    pub const ALL: [ComponentType; 1] = [ComponentType::SparkStreaming];

    /// Identifier used in manifests and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::SparkStreaming => "sparkStreaming",
        }
    }
}

impl FromStr for ComponentType {
    type Err = DeployerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DeployerError::UnknownComponentType(s.to_string()))
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
