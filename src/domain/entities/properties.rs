//! Properties entity
//!
//! The string-keyed mapping substituted into component templates. Defaulting
//! never mutates the receiver: `with_defaults` and `with_respawn_defaults`
//! return a new mapping, and applying either twice is a no-op.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Recognized property keys
pub mod keys {
    pub const SPARK_VERSION: &str = "component_spark_version";
    pub const SPARK_SUBMIT_ARGS: &str = "component_spark_submit_args";
    pub const PY_FILES: &str = "component_py_files";
    pub const MAIN_JAR: &str = "component_main_jar";
    pub const MAIN_PY: &str = "component_main_py";
    pub const MAIN_CLASS: &str = "component_main_class";
    pub const RESPAWN_TYPE: &str = "component_respawn_type";
    pub const RESPAWN_TIMEOUT_SEC: &str = "component_respawn_timeout_sec";

    pub const APPLICATION: &str = "component_application";
    pub const NAME: &str = "component_name";
    pub const JOB_NAME: &str = "component_job_name";
    pub const APPLICATION_USER: &str = "application_user";
}

const SPARK_DEFAULTS: [(&str, &str); 3] = [
    (keys::SPARK_VERSION, "1"),
    (keys::SPARK_SUBMIT_ARGS, ""),
    (keys::PY_FILES, ""),
];

const RESPAWN_DEFAULTS: [(&str, &str); 2] = [
    (keys::RESPAWN_TYPE, "always"),
    (keys::RESPAWN_TIMEOUT_SEC, "2"),
];

/// Property mapping for one component install
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(BTreeMap<String, String>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert every entry of `other`, overwriting existing keys
    pub fn extend(&mut self, other: Properties) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy with the Spark defaults filled in where absent:
    /// `component_spark_version = "1"`, `component_spark_submit_args = ""`,
    /// `component_py_files = ""`.
    pub fn with_defaults(&self) -> Self {
        self.with_missing(&SPARK_DEFAULTS)
    }

    /// Copy with `component_respawn_type = "always"` and
    /// `component_respawn_timeout_sec = "2"` filled in where absent.
    pub fn with_respawn_defaults(&self) -> Self {
        self.with_missing(&RESPAWN_DEFAULTS)
    }

    fn with_missing(&self, defaults: &[(&str, &str)]) -> Self {
        let mut out = self.clone();
        for (key, value) in defaults {
            out.0
                .entry((*key).to_string())
                .or_insert_with(|| (*value).to_string());
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, String>> for Properties {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}
