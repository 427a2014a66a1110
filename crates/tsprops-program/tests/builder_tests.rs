use super::*;

#[test]
fn interface_members_are_bound_to_their_names() {
    let mut b = ProgramBuilder::new();
    let file = b.source_file("index.ts");
    let iface = b.interface(file, "Options", modifier_flags::EXPORT);
    let prop = b.property(iface, "verbose", modifier_flags::NONE, TypeId::BOOLEAN);
    let program = b.finish();

    let name = program.arena.name_of(prop);
    let symbol = program.get_symbol_at_location(name).expect("property symbol");
    let sym = program.symbol(symbol).expect("symbol data");
    assert_eq!(sym.escaped_name, "verbose");
    assert!(sym.has_flags(symbol_flags::PROPERTY));
    assert_eq!(sym.declarations, vec![prop]);

    let iface_type = program.get_type_at_location(iface);
    assert_eq!(program.get_property_of_type(iface_type, "verbose"), Some(symbol));
}

#[test]
fn exported_declarations_populate_module_exports() {
    let mut b = ProgramBuilder::new();
    let file = b.source_file("index.ts");
    let class = b.class(file, "Widget", modifier_flags::EXPORT);
    b.class(file, "Hidden", modifier_flags::NONE);
    let widget = b.symbol_of(class).expect("class symbol");
    let program = b.finish();

    let module = program.get_symbol_at_location(file).expect("module symbol");
    let exports = program.get_exports_of_module(module);
    assert_eq!(exports, vec![widget]);
}

#[test]
fn class_instance_type_inherits_base_members() {
    let mut b = ProgramBuilder::new();
    let file = b.source_file("index.ts");
    let base = b.class(file, "Base", modifier_flags::NONE);
    let field = b.property(base, "id", modifier_flags::NONE, TypeId::NUMBER);
    let derived = b.class(file, "Derived", modifier_flags::NONE);
    b.extends(derived, base);
    let field_symbol = b.symbol_of(field);
    let program = b.finish();

    let derived_type = program.get_type_at_location(derived);
    assert_eq!(program.get_property_of_type(derived_type, "id"), field_symbol);
}

#[test]
fn static_members_live_on_the_constructor_side() {
    let mut b = ProgramBuilder::new();
    let file = b.source_file("index.ts");
    let class = b.class(file, "Counter", modifier_flags::NONE);
    let method = b.method(class, "create", modifier_flags::STATIC, None);
    let static_side = b.static_type(class).expect("static side");
    let instance = b.instance_type(class).expect("instance side");
    let method_symbol = b.symbol_of(method);
    let program = b.finish();

    assert_eq!(program.get_property_of_type(static_side, "create"), method_symbol);
    assert_eq!(program.get_property_of_type(instance, "create"), None);
    let prototype = program
        .get_property_of_type(static_side, "prototype")
        .expect("prototype property");
    assert!(
        program
            .symbol(prototype)
            .is_some_and(|s| s.has_flags(symbol_flags::PROTOTYPE))
    );
}

#[test]
fn parameter_property_declares_class_member() {
    let mut b = ProgramBuilder::new();
    let file = b.source_file("index.ts");
    let class = b.class(file, "Point", modifier_flags::NONE);
    let ctor = b.constructor(class);
    let param = b.parameter_property(ctor, "x", modifier_flags::PRIVATE, TypeId::NUMBER);
    let local = b.parameter_local(param).expect("parameter local");
    let instance = b.instance_type(class).expect("instance type");
    let program = b.finish();

    let member = program.get_property_of_type(instance, "x").expect("member");
    assert_ne!(member, local);
    assert_eq!(program.get_symbol_at_location(program.arena.name_of(param)), Some(member));
    assert_eq!(program.symbol(local).map(|s| s.declarations.clone()), Some(vec![param]));
}

#[test]
fn property_access_resolves_through_receiver_type() {
    let mut b = ProgramBuilder::new();
    let file = b.source_file("index.ts");
    let class = b.class(file, "Foo", modifier_flags::NONE);
    let field = b.property(class, "bar", modifier_flags::NONE, TypeId::STRING);
    let method = b.method(class, "run", modifier_flags::NONE, None);
    let body = b.body(method);
    let this = b.this_expr(class);
    let access = b.property_access(this, "bar");
    b.expression_statement(body, access);
    let field_symbol = b.symbol_of(field);
    let program = b.finish();

    let name = program.arena.name_of(access);
    assert_eq!(program.get_symbol_at_location(name), field_symbol);
    assert_eq!(program.get_type_at_location(access), TypeId::STRING);
    assert_eq!(program.arena.parent(name), access);
}

#[test]
fn union_properties_are_synthesized_as_transient_symbols() {
    let mut b = ProgramBuilder::new();
    let file = b.source_file("index.ts");
    let a = b.interface(file, "A", modifier_flags::NONE);
    let a_kind = b.property(a, "kind", modifier_flags::NONE, TypeId::STRING);
    let c = b.interface(file, "C", modifier_flags::NONE);
    let c_kind = b.property(c, "kind", modifier_flags::NONE, TypeId::STRING);
    b.property(c, "only_c", modifier_flags::NONE, TypeId::NUMBER);
    let a_type = b.instance_type(a).expect("A");
    let c_type = b.instance_type(c).expect("C");
    let union = b.union(&[a_type, c_type]);
    let program = b.finish();

    let kind = program.get_property_of_type(union, "kind").expect("union property");
    let sym = program.symbol(kind).expect("symbol");
    assert!(sym.is_transient());
    assert_eq!(sym.declarations, vec![a_kind, c_kind]);
    assert_eq!(program.get_property_of_type(union, "only_c"), None);
}

#[test]
fn identical_unions_share_one_type() {
    let mut b = ProgramBuilder::new();
    let first = b.union(&[TypeId::STRING, TypeId::NUMBER]);
    let second = b.union(&[TypeId::STRING, TypeId::NUMBER]);
    assert_eq!(first, second);
    assert_eq!(b.union(&[TypeId::STRING, TypeId::STRING]), TypeId::STRING);
}

#[test]
fn homomorphic_mapped_properties_keep_source_declarations() {
    let mut b = ProgramBuilder::new();
    let file = b.source_file("index.ts");
    let iface = b.interface(file, "Config", modifier_flags::NONE);
    let host = b.property(iface, "host", modifier_flags::NONE, TypeId::STRING);
    let config = b.instance_type(iface).expect("Config");
    let partial = b.homomorphic_mapped_type(config);
    let program = b.finish();

    assert!(program.type_data(partial).is_some_and(TypeData::is_mapped));
    let mapped_host = program.get_property_of_type(partial, "host").expect("mapped property");
    let sym = program.symbol(mapped_host).expect("symbol");
    assert!(sym.is_transient());
    assert_eq!(sym.declarations, vec![host]);
}

#[test]
fn destructuring_binds_locals_and_property_names() {
    let mut b = ProgramBuilder::new();
    let file = b.source_file("index.ts");
    let iface = b.interface(file, "Pair", modifier_flags::NONE);
    let left = b.property(iface, "left", modifier_flags::NONE, TypeId::NUMBER);
    b.property(iface, "right", modifier_flags::NONE, TypeId::NUMBER);
    let pair_type = b.instance_type(iface).expect("Pair");
    let source = b.variable(file, "pair", modifier_flags::NONE, pair_type);
    let pair = b.symbol_of(source).expect("pair");
    let init = b.ident(pair);
    let d = b.destructure(
        file,
        init,
        &[
            BindingSpec::Shorthand("right"),
            BindingSpec::Renamed {
                property: "left",
                local: "l",
            },
        ],
    );
    let left_symbol = b.symbol_of(left);
    let program = b.finish();

    assert_eq!(program.get_type_at_location(d.pattern), pair_type);
    assert_eq!(program.arena.parent(d.elements[0]), d.pattern);
    match &program.arena.get(d.elements[1]).expect("element").data {
        NodeData::BindingElement(data) => {
            assert_eq!(program.get_symbol_at_location(data.property_name), left_symbol);
            assert_eq!(program.get_symbol_at_location(data.name), Some(d.locals[1]));
        }
        other => panic!("unexpected payload {other:?}"),
    }
}

#[test]
fn default_lib_file_is_flagged() {
    let b = ProgramBuilder::with_default_lib();
    let lib = b.lib().expect("lib installed");
    let program = b.finish();
    assert!(program.is_source_file_default_library(lib.file));
    assert!(
        program
            .arena
            .source_file_data(lib.file)
            .is_some_and(|data| data.is_declaration_file)
    );
    assert!(program.get_property_of_type(TypeId::NUMBER, "toFixed").is_some());
}

#[test]
fn type_annotations_reference_named_types() {
    let mut b = ProgramBuilder::new();
    let file = b.source_file("index.ts");
    let iface = b.interface(file, "Shape", modifier_flags::NONE);
    let shape = b.instance_type(iface).expect("Shape");
    let func = b.function(file, "draw", modifier_flags::EXPORT, None);
    let param = b.parameter(func, "shape", shape);
    let shape_symbol = b.symbol_of(iface);
    let program = b.finish();

    let annotation = program.arena.get(param).expect("param").type_annotation();
    assert!(program.arena.is_kind(annotation, SyntaxKind::TypeReference));
    let type_name = match &program.arena.get(annotation).expect("type ref").data {
        NodeData::TypeReference(data) => data.type_name,
        _ => NodeIndex::NONE,
    };
    assert_eq!(program.get_symbol_at_location(type_name), shape_symbol);
}
