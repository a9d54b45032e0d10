//! Property-based invariant tests for armature-resolver.
//!
//! 1. Parsing a parsed tag returns it unchanged
//! 2. Parsed language is lowercase and country uppercase
//! 3. Parsing never panics on arbitrary strings
//! 4. `ext` and `name` depend only on the requested name
//! 5. A located file's root joined with the name gives the file back

use armature_resolver::{LanguageTag, locate, parse_lang_tag};
use proptest::prelude::*;
use std::fs;

fn segment() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn file_name() -> impl Strategy<Value = String> {
    (segment(), prop::option::of("[a-z]{1,4}")).prop_map(|(stem, ext)| match ext {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem,
    })
}

proptest! {
    #[test]
    fn parse_is_idempotent(raw in "[A-Za-z_-]{0,16}") {
        let once = parse_lang_tag(raw.as_str());
        let twice = parse_lang_tag(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn parsed_pair_is_passed_through(language in "\\PC{0,6}", country in "\\PC{0,6}") {
        let pair = LanguageTag { language, country };
        prop_assert_eq!(parse_lang_tag(pair.clone()), pair);
    }

    #[test]
    fn parse_normalizes_case(language in "[A-Za-z]{1,8}", country in "[A-Za-z]{0,8}", sep in "[-_]") {
        let tag = parse_lang_tag(format!("{language}{sep}{country}"));
        prop_assert_eq!(tag.language, language.to_lowercase());
        prop_assert_eq!(tag.country, country.to_uppercase());
    }

    #[test]
    fn parse_never_panics(raw in "\\PC*") {
        let _ = parse_lang_tag(raw.as_str());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn ext_and_name_ignore_existence(dir in segment(), name in file_name()) {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        let requested = format!("{dir}/{name}");

        let missing = locate(&requested, root, root);
        fs::create_dir_all(root.join(&dir)).unwrap();
        fs::write(root.join(&dir).join(&name), "").unwrap();
        let found = locate(&requested, root, root);

        prop_assert!(!missing.is_found());
        prop_assert!(found.is_found());
        prop_assert_eq!(&missing.ext, &found.ext);
        prop_assert_eq!(&missing.name, &found.name);
    }

    #[test]
    fn located_root_joins_back_to_file(dir in segment(), name in file_name()) {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join(&dir)).unwrap();
        fs::write(root.join(&dir).join(&name), "").unwrap();

        let result = locate(&format!("{dir}/{name}"), root, root);

        let location = result.location.unwrap();
        prop_assert_eq!(location.root.join(&dir).join(&name), location.file);
    }
}
