//! Manifest Policy
//!
//! Required-file and deprecated-file rules for a staged component.
//! Pure: the result depends only on the manifest's file set.

use crate::domain::entities::{
    ComponentManifest, APPLICATION_PROPERTIES, LOG4J_PROPERTIES, UPSTART_CONF,
};
use crate::error::UPSTART_DEPRECATION_MESSAGE;

pub const MISSING_APPLICATION_PROPERTIES: &str = "missing file application.properties";
pub const MISSING_LOG4J_PROPERTIES: &str = "missing file log4j.properties";

/// Files a component must ship and files it must not ship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestPolicy {
    required: &'static [(&'static str, &'static str)],
    deprecated: &'static [(&'static str, &'static str)],
}

impl ManifestPolicy {
    /// Policy for Spark Streaming components
    pub const fn spark_streaming() -> Self {
        Self {
            required: &[
                (APPLICATION_PROPERTIES, MISSING_APPLICATION_PROPERTIES),
                (LOG4J_PROPERTIES, MISSING_LOG4J_PROPERTIES),
            ],
            deprecated: &[(UPSTART_CONF, UPSTART_DEPRECATION_MESSAGE)],
        }
    }

    /// Check a manifest, returning one message per violation.
    ///
    /// An empty list means the component is valid. The result is advisory;
    /// callers decide whether to abort.
    pub fn check(&self, manifest: &ComponentManifest) -> Vec<String> {
        let missing = self
            .required
            .iter()
            .filter(|(file, _)| !manifest.has_file(file));
        let forbidden = self
            .deprecated
            .iter()
            .filter(|(file, _)| manifest.has_file(file));

        missing
            .chain(forbidden)
            .map(|(_, message)| (*message).to_string())
            .collect()
    }
}

impl Default for ManifestPolicy {
    fn default() -> Self {
        Self::spark_streaming()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ComponentType;

    fn manifest(files: &[&str]) -> ComponentManifest {
        ComponentManifest::new("ingest", ComponentType::SparkStreaming, files.iter().copied())
    }

    #[test]
    fn valid_manifest_has_no_errors() {
        let errors = ManifestPolicy::spark_streaming()
            .check(&manifest(&[APPLICATION_PROPERTIES, LOG4J_PROPERTIES, "app.jar"]));
        assert!(errors.is_empty());
    }

    #[test]
    fn empty_manifest_reports_both_required_files() {
        let errors = ManifestPolicy::spark_streaming().check(&manifest(&[]));
        assert_eq!(
            errors,
            vec![MISSING_APPLICATION_PROPERTIES, MISSING_LOG4J_PROPERTIES]
        );
    }

    #[test]
    fn upstart_conf_is_reported_as_deprecated() {
        let errors = ManifestPolicy::spark_streaming().check(&manifest(&[
            APPLICATION_PROPERTIES,
            LOG4J_PROPERTIES,
            UPSTART_CONF,
        ]));
        assert_eq!(errors, vec![UPSTART_DEPRECATION_MESSAGE]);
    }
}
