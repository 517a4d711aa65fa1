//! Property tests for remote path derivation.

use proptest::prelude::*;

use component_deployer::domain::value_objects::ComponentPaths;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9]{1,10}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: staging and install paths differ only by their root.
    #[test]
    fn property_paths_share_suffix(ns in segment(), app in segment(), comp in segment()) {
        let paths = ComponentPaths::new(&ns, &app, &comp);
        let suffix = format!("/{}/{}/{}", ns, app, comp);

        prop_assert_eq!(paths.tmp_path, format!("/tmp{}", suffix));
        prop_assert_eq!(paths.install_path, format!("/opt{}", suffix));
        prop_assert_eq!(paths.service_name, format!("{}-{}-{}", ns, app, comp));
    }

    /// PROPERTY: distinct triples never share an install path.
    #[test]
    fn property_distinct_components_do_not_collide(
        a in (segment(), segment(), segment()),
        b in (segment(), segment(), segment()),
    ) {
        prop_assume!(a != b);
        let pa = ComponentPaths::new(&a.0, &a.1, &a.2);
        let pb = ComponentPaths::new(&b.0, &b.1, &b.2);
        prop_assert_ne!(pa.install_path, pb.install_path);
        prop_assert_ne!(pa.tmp_path, pb.tmp_path);
    }
}
