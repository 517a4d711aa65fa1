//! Component manifest entity - identity plus the files a staged component ships

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::value_objects::ComponentType;

/// Application properties file every component must ship
pub const APPLICATION_PROPERTIES: &str = "application.properties";
/// Logging configuration every component must ship
pub const LOG4J_PROPERTIES: &str = "log4j.properties";
/// Legacy service definition, no longer accepted
pub const UPSTART_CONF: &str = "upstart.conf";
/// Optional flat JSON object of component properties
pub const PROPERTIES_JSON: &str = "properties.json";

/// A component inside a staged application package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentManifest {
    pub component_name: String,
    pub component_type: ComponentType,
    /// File names present in the staged component directory (exact, case-sensitive)
    #[serde(default)]
    pub component_detail: BTreeSet<String>,
}

impl ComponentManifest {
    pub fn new(
        component_name: impl Into<String>,
        component_type: ComponentType,
        files: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            component_name: component_name.into(),
            component_type,
            component_detail: files.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the staged component contains `file_name`
    pub fn has_file(&self, file_name: &str) -> bool {
        self.component_detail.contains(file_name)
    }

    /// Packages that still ship their own `upstart.conf`
    pub fn is_legacy_format(&self) -> bool {
        self.has_file(UPSTART_CONF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_file_is_exact_match() {
        let manifest = ComponentManifest::new(
            "ingest",
            ComponentType::SparkStreaming,
            ["application.properties", "Log4j.properties"],
        );
        assert!(manifest.has_file(APPLICATION_PROPERTIES));
        assert!(!manifest.has_file(LOG4J_PROPERTIES));
    }

    #[test]
    fn legacy_format_detected_by_upstart_conf() {
        let manifest =
            ComponentManifest::new("ingest", ComponentType::SparkStreaming, [UPSTART_CONF]);
        assert!(manifest.is_legacy_format());
    }

    #[test]
    fn deserializes_from_package_json() {
        let manifest: ComponentManifest = serde_json::from_str(
            r#"{
                "component_name": "ingest",
                "component_type": "sparkStreaming",
                "component_detail": ["application.properties", "log4j.properties"]
            }"#,
        )
        .unwrap();
        assert_eq!(manifest.component_type, ComponentType::SparkStreaming);
        assert_eq!(manifest.component_detail.len(), 2);
    }
}
