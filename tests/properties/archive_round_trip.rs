//! Property tests for building and reading back archives.

use std::collections::BTreeMap;

use proptest::prelude::*;

use exercise_pack::archive::read_bodies;
use exercise_pack::{ArchiveBuilder, BuildOptions, Compression, TemplateSet};

fn segment() -> impl Strategy<Value = String> {
    // No leading dot, so `.` and `..` never come out of this.
    proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,11}").unwrap()
}

fn entry_path() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..=3).prop_map(|segments| segments.join("/"))
}

/// Non-empty template sets with unique, non-colliding paths
fn template_set() -> impl Strategy<Value = TemplateSet> {
    proptest::collection::btree_map(entry_path(), "(?s).{0,200}", 1..=8).prop_map(
        |pairs: BTreeMap<String, String>| {
            let mut set = TemplateSet::new();
            for (path, content) in pairs {
                // Drop paths that collide with an earlier file/directory.
                let _ = set.insert(path, content);
            }
            set
        },
    )
}

fn compression() -> impl Strategy<Value = Compression> {
    prop_oneof![Just(Compression::Deflate), Just(Compression::Stored)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The archive holds exactly the template set, byte for byte, in order.
    #[test]
    fn property_build_round_trip(set in template_set(), compression in compression()) {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.zip");
        let builder = ArchiveBuilder::new(BuildOptions { compression, overwrite: true });

        builder.build(&set, &out).unwrap();
        let bodies = read_bodies(&out).unwrap();

        let names: Vec<&str> = bodies.iter().map(|(n, _)| n.as_str()).collect();
        prop_assert_eq!(names, set.paths());
        for (name, body) in &bodies {
            let decoded = std::str::from_utf8(body).unwrap();
            prop_assert_eq!(Some(decoded), set.get(name));
        }
    }

    /// PROPERTY: Building the same set twice yields identical bytes.
    #[test]
    fn property_build_is_idempotent(set in template_set(), compression in compression()) {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.zip");
        let builder = ArchiveBuilder::new(BuildOptions { compression, overwrite: true });

        builder.build(&set, &out).unwrap();
        let first = std::fs::read(&out).unwrap();
        builder.build(&set, &out).unwrap();
        let second = std::fs::read(&out).unwrap();

        prop_assert_eq!(first, second);
    }

    /// PROPERTY: Verification of a freshly built archive is always clean.
    #[test]
    fn property_verify_fresh_archive(set in template_set()) {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.zip");

        exercise_pack::build(&set, &out).unwrap();
        let report = exercise_pack::verify(&set, &out).unwrap();

        prop_assert!(report.is_clean(), "{:?}", report);
        prop_assert_eq!(report.checked, set.len());
    }
}
