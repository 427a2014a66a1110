use super::*;

#[test]
fn source_file_lookup_normalizes_paths() {
    let mut b = ProgramBuilder::new();
    let file = b.source_file("src/index.ts");
    let program = b.finish();

    assert_eq!(program.get_source_file("src/index.ts"), Some(file));
    assert_eq!(program.get_source_file("./src/index.ts"), Some(file));
    assert_eq!(program.get_source_file("src\\index.ts"), Some(file));
    assert_eq!(program.get_source_file("src/other.ts"), None);
}

#[test]
fn normalize_path_strips_repeated_dot_prefixes() {
    assert_eq!(normalize_path("././a/b.ts"), "a/b.ts");
    assert_eq!(normalize_path("a\\b.ts"), "a/b.ts");
}

#[test]
fn alias_chains_resolve_to_target() {
    let mut b = ProgramBuilder::new();
    let lib = b.source_file("lib.ts");
    let class = b.class(lib, "Engine", modifier_flags::EXPORT);
    let engine = b.symbol_of(class).expect("Engine");
    let index = b.source_file("index.ts");
    let imported = b.named_import(index, "Engine", engine);
    let reexported = b.export_specifier(index, imported, "Motor");
    let program = b.finish();

    assert_eq!(program.get_aliased_symbol(reexported), engine);
    assert_eq!(program.get_aliased_symbol(engine), engine);
}

#[test]
fn unknown_nodes_have_any_type() {
    let program = Program::default();
    assert_eq!(program.get_type_at_location(NodeIndex(7)), TypeId::ANY);
    assert_eq!(program.get_symbol_at_location(NodeIndex::NONE), None);
}

#[test]
fn union_lookup_requires_every_constituent() {
    let mut b = ProgramBuilder::new();
    let file = b.source_file("index.ts");
    let a = b.interface(file, "A", modifier_flags::NONE);
    let shared = b.property(a, "shared", modifier_flags::NONE, TypeId::STRING);
    b.property(a, "only_a", modifier_flags::NONE, TypeId::STRING);
    let c = b.interface(file, "C", modifier_flags::NONE);
    b.extends(c, a);
    let a_type = b.instance_type(a).expect("A");
    let c_type = b.instance_type(c).expect("C");
    let union = b.union(&[a_type, c_type]);
    let shared_symbol = b.symbol_of(shared).expect("shared");
    let program = b.finish();

    // Both constituents resolve to the same inherited symbol.
    assert_eq!(
        program.lookup_property(union, "shared"),
        PropertyLookup::Found(shared_symbol)
    );
    assert_eq!(
        program.lookup_property(union, "missing"),
        PropertyLookup::Missing
    );
}

#[test]
fn primitives_use_apparent_types() {
    let b = ProgramBuilder::with_default_lib();
    let mut program = b.finish();
    let literal = program.types.string_literal("hello");
    assert!(program.get_property_of_type(TypeId::STRING, "length").is_some());
    assert_eq!(
        program.get_property_of_type(literal, "length"),
        program.get_property_of_type(TypeId::STRING, "length")
    );
    assert_eq!(program.get_property_of_type(TypeId::BOOLEAN, "length"), None);
}

#[test]
fn snapshot_survives_json() {
    let mut b = ProgramBuilder::new();
    let file = b.source_file("index.ts");
    let iface = b.interface(file, "I", modifier_flags::EXPORT);
    let prop = b.property(iface, "value", modifier_flags::NONE, TypeId::NUMBER);
    let a = b.instance_type(iface).expect("I");
    let union = b.union(&[a, TypeId::NULL]);
    b.variable(file, "maybe", modifier_flags::EXPORT, union);
    let program = b.finish();

    let json = program.to_json().expect("serialize");
    let restored = Program::from_json(&json).expect("deserialize");
    assert_eq!(restored.arena.len(), program.arena.len());
    assert_eq!(restored.get_source_file("index.ts"), Some(file));
    let name = restored.arena.name_of(prop);
    assert_eq!(
        restored.get_symbol_at_location(name),
        program.get_symbol_at_location(name)
    );
    assert_eq!(
        restored.get_type_at_location(iface),
        program.get_type_at_location(iface)
    );
}
