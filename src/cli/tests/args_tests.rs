use super::*;
use clap::Parser;
use std::path::PathBuf;

use args::CliArgs;

#[test]
fn parses_program_and_repeated_entries() {
    let args = CliArgs::try_parse_from([
        "tsprops",
        "--program",
        "snapshot.json",
        "--entry",
        "index.ts",
        "-e",
        "cli.ts",
    ])
    .expect("parse");
    assert_eq!(args.program, PathBuf::from("snapshot.json"));
    assert_eq!(args.entries, ["index.ts", "cli.ts"]);
    assert!(args.config.is_none());
    assert!(args.out_dir.is_none());
    assert!(!args.report);
}

#[test]
fn accepts_camel_case_aliases() {
    let args = CliArgs::try_parse_from([
        "tsprops",
        "-p",
        "snapshot.json",
        "--privatePrefix",
        "$p_",
        "--internalPrefix",
        "$i_",
        "--publicJSDocTag",
        "api",
        "--outDir",
        "dist",
    ])
    .expect("parse");
    assert_eq!(args.private_prefix.as_deref(), Some("$p_"));
    assert_eq!(args.internal_prefix.as_deref(), Some("$i_"));
    assert_eq!(args.public_jsdoc_tag.as_deref(), Some("api"));
    assert_eq!(args.out_dir, Some(PathBuf::from("dist")));
}

#[test]
fn program_is_required() {
    assert!(CliArgs::try_parse_from(["tsprops", "--entry", "index.ts"]).is_err());
}
