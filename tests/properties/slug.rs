//! Property tests for slug derivation.

use proptest::prelude::*;

use navbuilder::slugify;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: slugs from printable ASCII are lowercase alphanumeric with
    /// single '-' separators, never at the edges.
    #[test]
    fn property_slugify_ascii_output_is_clean(input in "[ -~]{0,40}") {
        let slug = slugify(&input);

        prop_assert!(
            slug.chars().all(|c| c == '-' || c.is_ascii_lowercase() || c.is_ascii_digit()),
            "unexpected char in {slug:?}"
        );
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
    }

    /// PROPERTY: slugifying a slug changes nothing.
    #[test]
    fn property_slugify_is_idempotent(input in "(?s).{0,40}") {
        let once = slugify(&input);
        prop_assert_eq!(slugify(&once), once);
    }

    /// PROPERTY: slugify never panics on arbitrary input.
    #[test]
    fn property_slugify_never_panics(input in "(?s).{0,200}") {
        let _ = slugify(&input);
    }
}
