//! Domain Policies
//!
//! Business rules that govern behavior.
//! These are pure functions that operate on domain entities.

mod manifest_policy;

pub use manifest_policy::{
    ManifestPolicy, MISSING_APPLICATION_PROPERTIES, MISSING_LOG4J_PROPERTIES,
};
