//! CLI driver runs over snapshot and config files on disk.

use clap::Parser;
use std::path::Path;
use tempfile::TempDir;
use tsprops::cli::args::CliArgs;
use tsprops::cli::driver;
use tsprops_program::{ProgramBuilder, TypeId, modifier_flags};

/// `src/index.ts` exports `Api { count }`, `src/util.ts` has an unexported `Helper { count }`.
fn write_snapshot(dir: &Path) -> std::path::PathBuf {
    let mut b = ProgramBuilder::new();
    let util = b.source_file("/project/src/util.ts");
    let helper = b.class(util, "Helper", modifier_flags::NONE);
    b.property(helper, "count", modifier_flags::NONE, TypeId::NUMBER);
    let index = b.source_file("/project/src/index.ts");
    let api = b.interface(index, "Api", modifier_flags::EXPORT);
    b.property(api, "count", modifier_flags::NONE, TypeId::NUMBER);
    let program = b.finish();

    let path = dir.join("snapshot.json");
    std::fs::write(&path, program.to_json().expect("serialize")).expect("write snapshot");
    path
}

fn parse(argv: &[&str]) -> CliArgs {
    let mut full = vec!["tsprops"];
    full.extend_from_slice(argv);
    CliArgs::try_parse_from(full).expect("parse args")
}

#[test]
fn writes_renamed_files_under_out_dir() {
    let temp = TempDir::new().expect("temp dir");
    let snapshot = write_snapshot(temp.path());
    let config = temp.path().join("tsprops.json");
    std::fs::write(
        &config,
        r#"{ "entrySourceFiles": ["/project/src/index.ts"], "internalPrefix": "$i_" }"#,
    )
    .expect("write config");
    let out_dir = temp.path().join("out");

    let args = parse(&[
        "--program",
        snapshot.to_str().expect("utf-8 path"),
        "--config",
        config.to_str().expect("utf-8 path"),
        "--out-dir",
        out_dir.to_str().expect("utf-8 path"),
    ]);
    let outcome = driver::run(&args).expect("run");
    assert_eq!(outcome.rename_count(), 1);
    let mut stdout = Vec::new();
    driver::write_outputs(&outcome.files, args.out_dir.as_deref(), &mut stdout).expect("write");
    assert!(stdout.is_empty());

    let util = std::fs::read_to_string(out_dir.join("project/src/util.ts")).expect("util.ts");
    assert_eq!(util, "class Helper {\n    $i_count: number;\n}\n");
    let index = std::fs::read_to_string(out_dir.join("project/src/index.ts")).expect("index.ts");
    assert_eq!(index, "export interface Api {\n    count: number;\n}\n");
}

#[test]
fn prints_to_stdout_with_file_headers() {
    let temp = TempDir::new().expect("temp dir");
    let snapshot = write_snapshot(temp.path());
    let args = parse(&[
        "--program",
        snapshot.to_str().expect("utf-8 path"),
        "--entry",
        "/project/src/index.ts",
    ]);
    let outcome = driver::run(&args).expect("run");
    let mut stdout = Vec::new();
    driver::write_outputs(&outcome.files, None, &mut stdout).expect("write");

    let text = String::from_utf8(stdout).expect("utf-8");
    assert_eq!(
        text,
        "// /project/src/util.ts\nclass Helper {\n    _internal_count: number;\n}\n\
         // /project/src/index.ts\nexport interface Api {\n    count: number;\n}\n"
    );
}

#[test]
fn command_line_entries_override_the_config() {
    let temp = TempDir::new().expect("temp dir");
    let snapshot = write_snapshot(temp.path());
    let config = temp.path().join("tsprops.json");
    std::fs::write(&config, r#"{ "entrySourceFiles": ["/project/src/missing.ts"] }"#).expect("write config");

    let args = parse(&[
        "--program",
        snapshot.to_str().expect("utf-8 path"),
        "--config",
        config.to_str().expect("utf-8 path"),
        "--entry",
        "/project/src/index.ts",
    ]);
    assert!(driver::run(&args).is_ok());
}

#[test]
fn unresolved_entry_fails_the_run() {
    let temp = TempDir::new().expect("temp dir");
    let snapshot = write_snapshot(temp.path());
    let args = parse(&[
        "--program",
        snapshot.to_str().expect("utf-8 path"),
        "--entry",
        "/project/src/missing.ts",
    ]);
    let err = driver::run(&args).unwrap_err();
    assert!(
        err.to_string().contains("/project/src/missing.ts"),
        "unexpected error: {err:#}"
    );
}

#[test]
fn unreadable_snapshot_is_reported_with_its_path() {
    let temp = TempDir::new().expect("temp dir");
    let bogus = temp.path().join("snapshot.json");
    std::fs::write(&bogus, "not json").expect("write");
    let args = parse(&["--program", bogus.to_str().expect("utf-8 path")]);
    let err = driver::run(&args).unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse program snapshot"));
}

#[test]
fn output_paths_stay_inside_the_out_dir() {
    let out = Path::new("/tmp/out");
    assert_eq!(
        driver::output_path(out, "/abs/a.ts").expect("path"),
        Path::new("/tmp/out/abs/a.ts")
    );
    assert_eq!(
        driver::output_path(out, "./src/b.ts").expect("path"),
        Path::new("/tmp/out/src/b.ts")
    );
    assert!(driver::output_path(out, "../escape.ts").is_err());
}
