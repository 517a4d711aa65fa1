//! Property tests for property defaulting.

use proptest::prelude::*;

use component_deployer::domain::entities::keys;
use component_deployer::Properties;

fn entries() -> impl Strategy<Value = Vec<(String, String)>> {
    let key = prop_oneof![
        Just(keys::SPARK_VERSION.to_string()),
        Just(keys::SPARK_SUBMIT_ARGS.to_string()),
        Just(keys::PY_FILES.to_string()),
        Just(keys::MAIN_PY.to_string()),
        proptest::string::string_regex("component_[a-z_]{1,12}").unwrap(),
    ];
    proptest::collection::vec((key, "[ -~]{0,16}"), 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: defaulting is idempotent and never overrides a caller value.
    #[test]
    fn property_defaults_are_idempotent_and_preserving(entries in entries()) {
        let props: Properties = entries.into_iter().collect();
        let once = props.with_defaults();

        prop_assert_eq!(once.with_defaults(), once.clone());
        for (key, value) in props.iter() {
            prop_assert_eq!(once.get(key), Some(value));
        }
        for key in [keys::SPARK_VERSION, keys::SPARK_SUBMIT_ARGS, keys::PY_FILES] {
            prop_assert!(once.contains(key));
        }
    }

    /// PROPERTY: defaulting leaves the input untouched.
    #[test]
    fn property_defaults_do_not_mutate_input(entries in entries()) {
        let props: Properties = entries.into_iter().collect();
        let before = props.clone();
        let _ = props.with_defaults().with_respawn_defaults();
        prop_assert_eq!(props, before);
    }
}
