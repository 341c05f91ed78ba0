//! Property tests for bucket classification.

use proptest::prelude::*;

use scenemap::{Bucket, Manifest};

fn relative_path_string() -> impl Strategy<Value = String> {
    // Manifest keys are already normalized: non-empty segments joined by
    // '/' with no separators inside a segment.
    let segment = proptest::string::string_regex("[A-Za-z0-9._-]{1,12}").unwrap();
    proptest::collection::vec(segment, 1..=5).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: classification is total and never yields the reserved
    /// `shared` scene name.
    #[test]
    fn property_classify_never_yields_reserved_scene(
        rel in relative_path_string()
    ) {
        match Bucket::classify(&rel) {
            Bucket::Scene(name) => {
                prop_assert_ne!(name.as_str(), "shared");
                let prefix = format!("scenes/{}/", name);
                prop_assert!(rel.starts_with(&prefix));
            }
            Bucket::Shared => {}
        }
    }

    /// PROPERTY: an inserted path appears in exactly one bucket.
    #[test]
    fn property_inserted_path_lands_in_exactly_one_bucket(
        rel in relative_path_string()
    ) {
        let mut manifest = Manifest::new("v1");
        manifest.insert(
            Bucket::classify(&rel),
            rel.clone(),
            "d41d8cd98f00b204e9800998ecf8427e",
        );

        let in_shared = usize::from(manifest.shared.contains_key(&rel));
        let in_scenes = manifest
            .scenes
            .values()
            .filter(|files| files.contains_key(&rel))
            .count();
        prop_assert_eq!(in_shared + in_scenes, 1);
    }

    /// PROPERTY: classifying the same path twice gives the same bucket.
    #[test]
    fn property_classification_is_deterministic(
        rel in relative_path_string()
    ) {
        prop_assert_eq!(Bucket::classify(&rel), Bucket::classify(&rel));
    }
}
