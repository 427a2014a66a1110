use super::*;
use crate::options::{DEFAULT_INTERNAL_PREFIX, DEFAULT_PRIVATE_PREFIX};

#[test]
fn defaults_match_documented_values() {
    let options = RenameOptions::default();
    assert!(options.entry_source_files.is_empty());
    assert_eq!(options.private_prefix, DEFAULT_PRIVATE_PREFIX);
    assert_eq!(options.internal_prefix, DEFAULT_INTERNAL_PREFIX);
    assert_eq!(options.public_jsdoc_tag, "public");
}

#[test]
fn partial_json_keeps_remaining_defaults() {
    let options: RenameOptions =
        serde_json::from_str(r#"{ "privatePrefix": "$p$", "entrySourceFiles": ["src/index.ts"] }"#)
            .unwrap();
    assert_eq!(options.private_prefix, "$p$");
    assert_eq!(options.internal_prefix, "_internal_");
    assert_eq!(options.entry_source_files, vec!["src/index.ts".to_string()]);
    assert_eq!(options.public_jsdoc_tag, "public");
}

#[test]
fn jsdoc_tag_keeps_its_exact_key() {
    let options: RenameOptions = serde_json::from_str(r#"{ "publicJSDocTag": "" }"#).unwrap();
    assert_eq!(options.public_jsdoc_marker(), None);

    let options: RenameOptions =
        serde_json::from_str(r#"{ "publicJSDocTag": "external" }"#).unwrap();
    assert_eq!(options.public_jsdoc_marker().as_deref(), Some("@external"));
}

#[test]
fn new_name_uses_prefix_of_tier() {
    let options = RenameOptions::default();
    assert_eq!(
        options.new_name("field", VisibilityType::Private),
        "_private_field"
    );
    assert_eq!(
        options.new_name("field", VisibilityType::Internal),
        "_internal_field"
    );
    assert_eq!(options.new_name("field", VisibilityType::External), "field");
}

#[test]
fn validate_rejects_non_identifier_prefix() {
    let options = RenameOptions {
        internal_prefix: "in-ternal".to_string(),
        ..RenameOptions::default()
    };
    let err = options.validate().unwrap_err();
    assert!(matches!(
        err,
        RenameError::InvalidOption {
            option: "internalPrefix",
            ..
        }
    ));

    let options = RenameOptions {
        private_prefix: "1p".to_string(),
        ..RenameOptions::default()
    };
    assert!(options.validate().is_err());
}

#[test]
fn validate_accepts_empty_and_dollar_prefixes() {
    let options = RenameOptions {
        private_prefix: String::new(),
        internal_prefix: "$i$".to_string(),
        ..RenameOptions::default()
    };
    assert!(options.validate().is_ok());
}

#[test]
fn external_wins_when_joining() {
    assert_eq!(
        VisibilityType::Private.join(VisibilityType::External),
        VisibilityType::External
    );
    assert_eq!(
        VisibilityType::Internal.join(VisibilityType::Private),
        VisibilityType::Private
    );
    assert_eq!(
        VisibilityType::Internal.join(VisibilityType::Internal),
        VisibilityType::Internal
    );
}

#[test]
fn error_messages_name_the_offending_input() {
    let err = RenameError::EntrySourceFileNotFound {
        file_name: "src/missing.ts".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Cannot find source file for entry 'src/missing.ts'"
    );
}
