//! Property tests for staged component validation.

use proptest::prelude::*;

use component_deployer::domain::policies::ManifestPolicy;
use component_deployer::error::UPSTART_DEPRECATION_MESSAGE;
use component_deployer::{ComponentManifest, ComponentType};

fn file_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("application.properties".to_string()),
        Just("log4j.properties".to_string()),
        Just("upstart.conf".to_string()),
        Just("properties.json".to_string()),
        Just("Log4j.properties".to_string()),
        proptest::string::string_regex("[a-z]{1,8}\\.[a-z]{2,4}").unwrap(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: one message per missing required file plus one for upstart.conf.
    #[test]
    fn property_error_count_matches_file_set(
        files in proptest::collection::btree_set(file_name(), 0..8),
    ) {
        let manifest = ComponentManifest::new("comp", ComponentType::SparkStreaming, files.clone());
        let errors = ManifestPolicy::spark_streaming().check(&manifest);

        let expected = usize::from(!files.contains("application.properties"))
            + usize::from(!files.contains("log4j.properties"))
            + usize::from(files.contains("upstart.conf"));
        prop_assert_eq!(errors.len(), expected);
        prop_assert_eq!(
            errors.last().map(String::as_str) == Some(UPSTART_DEPRECATION_MESSAGE),
            files.contains("upstart.conf")
        );
    }

    /// PROPERTY: validation is deterministic.
    #[test]
    fn property_validation_is_deterministic(
        files in proptest::collection::btree_set(file_name(), 0..8),
    ) {
        let manifest = ComponentManifest::new("comp", ComponentType::SparkStreaming, files);
        let policy = ManifestPolicy::spark_streaming();
        prop_assert_eq!(policy.check(&manifest), policy.check(&manifest));
    }
}
