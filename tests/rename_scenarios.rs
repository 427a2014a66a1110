//! End-to-end renames through the public `tsprops` API.

use rustc_hash::FxHashMap;
use tsprops::{
    PropertiesRenameTransformer, Program, ProgramBuilder, RenameError, RenameOptions, SymbolId,
    rename_program,
};
use tsprops_program::{TypeId, modifier_flags};

fn options(entries: &[&str]) -> RenameOptions {
    RenameOptions::default().with_entry_source_files(entries.iter().copied())
}

fn text_of<'a>(files: &'a [tsprops::EmittedFile], file_name: &str) -> &'a str {
    files
        .iter()
        .find(|file| file.file_name == file_name)
        .map(|file| file.text.as_str())
        .expect("printed file")
}

/// ```ts
/// // lib.ts
/// export interface Options { verbose: boolean }
/// export class Engine {
///     private state: number;
///     options: Options;
///     step(): void { this.state; this.tick(); }
///     tick(): void { }
/// }
/// class Detail { note: string }
/// ```
fn library() -> Program {
    let mut b = ProgramBuilder::new();
    let file = b.source_file("lib.ts");
    let options_decl = b.interface(file, "Options", modifier_flags::EXPORT);
    b.property(options_decl, "verbose", modifier_flags::NONE, TypeId::BOOLEAN);
    let options_type = b.instance_type(options_decl).expect("options type");

    let engine = b.class(file, "Engine", modifier_flags::EXPORT);
    b.property(engine, "state", modifier_flags::PRIVATE, TypeId::NUMBER);
    b.property(engine, "options", modifier_flags::NONE, options_type);
    let step = b.method(engine, "step", modifier_flags::NONE, Some(TypeId::VOID));
    b.method(engine, "tick", modifier_flags::PRIVATE, Some(TypeId::VOID));
    let body = b.body(step);
    let this = b.this_expr(engine);
    let state = b.property_access(this, "state");
    b.expression_statement(body, state);
    let this = b.this_expr(engine);
    let tick = b.property_access(this, "tick");
    let call = b.call(tick, &[]);
    b.expression_statement(body, call);

    let detail = b.class(file, "Detail", modifier_flags::NONE);
    b.property(detail, "note", modifier_flags::NONE, TypeId::STRING);
    b.finish()
}

#[test]
fn public_surface_is_kept_and_the_rest_prefixed() {
    let program = library();
    let files = rename_program(&program, options(&["lib.ts"])).expect("rename");
    let expected = "\
export interface Options {
    verbose: boolean;
}
export class Engine {
    private _private_state: number;
    options: Options;
    step(): void {
        this._private_state;
        this._private_tick();
    }
    private _private_tick(): void {}
}
class Detail {
    _internal_note: string;
}
";
    assert_eq!(text_of(&files, "lib.ts"), expected);
}

#[test]
fn without_entries_everything_unannotated_is_internal() {
    let program = library();
    let files = rename_program(&program, options(&[])).expect("rename");
    let text = text_of(&files, "lib.ts");
    assert!(text.contains("_internal_verbose: boolean;"));
    assert!(text.contains("_internal_options: Options;"));
    assert!(text.contains("_internal_step(): void {"));
    assert!(text.contains("private _private_state: number;"));
}

#[test]
fn every_occurrence_of_a_symbol_gets_the_same_name() {
    let program = library();
    let mut transformer = PropertiesRenameTransformer::new(&program, options(&[])).expect("transformer");
    let contexts = transformer.transform_program().expect("transform");

    let mut names: FxHashMap<SymbolId, &str> = FxHashMap::default();
    let mut edits = 0;
    for edit in contexts.iter().flat_map(|context| context.edits()) {
        edits += 1;
        let Some(symbol) = edit.symbol else {
            continue;
        };
        let first = *names.entry(symbol).or_insert(edit.renamed.as_str());
        assert_eq!(first, edit.renamed, "symbol {symbol:?} renamed two ways");
    }
    assert!(edits > names.len(), "expected repeated occurrences");
}

#[test]
fn jsdoc_public_tag_keeps_a_field_without_entries() {
    let mut b = ProgramBuilder::new();
    let file = b.source_file("index.ts");
    let config = b.class(file, "Config", modifier_flags::NONE);
    let verbose = b.property(config, "verbose", modifier_flags::NONE, TypeId::BOOLEAN);
    b.set_js_doc(verbose, "/** @public */");
    b.property(config, "level", modifier_flags::NONE, TypeId::NUMBER);
    let program = b.finish();

    let files = rename_program(&program, options(&[])).expect("rename");
    assert_eq!(
        text_of(&files, "index.ts"),
        "class Config {\n    /** @public */\n    verbose: boolean;\n    _internal_level: number;\n}\n"
    );
}

#[test]
fn union_access_with_an_external_side_is_kept() {
    let mut b = ProgramBuilder::new();
    let file = b.source_file("index.ts");
    let public = b.interface(file, "Public", modifier_flags::EXPORT);
    b.property(public, "key", modifier_flags::NONE, TypeId::STRING);
    let hidden = b.interface(file, "Hidden", modifier_flags::NONE);
    b.property(hidden, "key", modifier_flags::NONE, TypeId::STRING);
    let public_type = b.instance_type(public).expect("public type");
    let hidden_type = b.instance_type(hidden).expect("hidden type");
    let either = b.union(&[public_type, hidden_type]);
    let value = b.variable(file, "value", modifier_flags::NONE, either);
    let value_symbol = b.symbol_of(value).expect("value symbol");
    let receiver = b.ident(value_symbol);
    let access = b.property_access(receiver, "key");
    b.expression_statement(file, access);
    let program = b.finish();

    let files = rename_program(&program, options(&["index.ts"])).expect("rename");
    assert!(text_of(&files, "index.ts").contains("\nvalue.key;\n"));
}

#[test]
fn snapshot_round_trip_renames_identically() {
    let program = library();
    let json = program.to_json().expect("serialize");
    let restored = Program::from_json(&json).expect("deserialize");

    let original = rename_program(&program, options(&["lib.ts"])).expect("rename");
    let reloaded = rename_program(&restored, options(&["lib.ts"])).expect("rename restored");
    assert_eq!(original, reloaded);
}

#[test]
fn unknown_entry_aborts_without_output() {
    let program = library();
    let err = rename_program(&program, options(&["missing.ts"])).unwrap_err();
    assert_eq!(
        err,
        RenameError::EntrySourceFileNotFound {
            file_name: "missing.ts".to_string()
        }
    );
}
