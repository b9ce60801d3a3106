//! Property tests for entry path validation.

use proptest::prelude::*;

use exercise_pack::{EntryPath, PackError, TemplateSet};

fn safe_segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap()
}

fn safe_segments() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(safe_segment(), 0..=3)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Path validation never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,256}") {
        let _ = EntryPath::parse(&s);
    }

    /// PROPERTY: A `..` segment anywhere is rejected, and nothing is inserted.
    #[test]
    fn property_traversal_always_rejected(
        before in safe_segments(),
        after in safe_segments(),
    ) {
        let mut segments = before;
        segments.push("..".to_string());
        segments.extend(after);
        let path = segments.join("/");

        prop_assert!(EntryPath::parse(&path).is_err());

        let mut set = TemplateSet::new();
        let err = set.insert(&path, "payload").unwrap_err();
        let is_invalid_path = matches!(err, PackError::InvalidEntryPath { .. });
        prop_assert!(is_invalid_path);
        prop_assert!(set.is_empty());
    }

    /// PROPERTY: Accepted paths never contain traversal or absolute markers.
    #[test]
    fn property_accepted_paths_are_relative(s in "[A-Za-z0-9./\\\\:_-]{0,48}") {
        if let Ok(path) = EntryPath::parse(&s) {
            let p = path.as_str();
            prop_assert!(!p.starts_with('/'));
            prop_assert!(!p.contains('\\'));
            prop_assert!(p.split('/').all(|seg| !seg.is_empty() && seg != "." && seg != ".."));
        }
    }

    /// PROPERTY: Plain relative paths built from safe segments are accepted verbatim.
    #[test]
    fn property_safe_paths_accepted(segments in proptest::collection::vec(safe_segment(), 1..=4)) {
        let raw = segments.join("/");
        let parsed = EntryPath::parse(&raw);
        prop_assert!(parsed.is_ok());
        let parsed = parsed.unwrap();
        prop_assert_eq!(parsed.as_str(), raw.as_str());
    }
}
