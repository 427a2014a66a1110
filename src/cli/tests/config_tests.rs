use super::*;
use clap::Parser;
use std::path::Path;

use args::CliArgs;
use config::{apply_cli_overrides, parse_rename_options, resolve_options};
use tsprops_common::RenameOptions;

fn args(extra: &[&str]) -> CliArgs {
    let mut argv = vec!["tsprops", "--program", "snapshot.json"];
    argv.extend_from_slice(extra);
    CliArgs::try_parse_from(argv).expect("parse")
}

#[test]
fn partial_options_keep_defaults() {
    let options = parse_rename_options(r#"{ "entrySourceFiles": ["src/index.ts"] }"#).expect("parse");
    assert_eq!(options.entry_source_files, ["src/index.ts"]);
    assert_eq!(options.private_prefix, "_private_");
    assert_eq!(options.internal_prefix, "_internal_");
    assert_eq!(options.public_jsdoc_tag, "public");
}

#[test]
fn public_jsdoc_tag_keeps_its_spelling() {
    let options = parse_rename_options(r#"{ "publicJSDocTag": "api" }"#).expect("parse");
    assert_eq!(options.public_jsdoc_tag, "api");
}

#[test]
fn malformed_json_is_reported() {
    let err = parse_rename_options("{ entrySourceFiles: ").unwrap_err();
    assert!(err.to_string().contains("failed to parse rename options JSON"));
}

#[test]
fn cli_overrides_replace_configured_values() {
    let mut options = RenameOptions::default().with_entry_source_files(["a.ts"]);
    apply_cli_overrides(
        &mut options,
        &args(&["--entry", "b.ts", "--internal-prefix", "i_", "--public-jsdoc-tag", ""]),
    );
    assert_eq!(options.entry_source_files, ["b.ts"]);
    assert_eq!(options.private_prefix, "_private_");
    assert_eq!(options.internal_prefix, "i_");
    assert_eq!(options.public_jsdoc_tag, "");
}

#[test]
fn no_entry_flags_keep_configured_entries() {
    let mut options = RenameOptions::default().with_entry_source_files(["a.ts"]);
    apply_cli_overrides(&mut options, &args(&[]));
    assert_eq!(options.entry_source_files, ["a.ts"]);
}

#[test]
fn invalid_prefix_fails_resolution() {
    let err = resolve_options(&args(&["--private-prefix", "a-b"])).unwrap_err();
    assert!(err.to_string().contains("invalid rename options"));
}

#[test]
fn missing_config_file_names_the_path() {
    let err = config::load_rename_options(Path::new("/nonexistent/tsprops.json")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/tsprops.json"));
}
