use super::*;
use crate::fixtures::{
    destructured_internal_shape, interface_implemented_by_class, jsdoc_tagged_members, name,
    options, renamed_to, transform,
};
use rustc_hash::FxHashMap;
use tsprops_common::{RenameError, RenameOptions, VisibilityType};
use tsprops_program::{
    BindingSpec, NodeData, NodeIndex, Program, ProgramBuilder, SyntaxKind, TypeId, modifier_flags,
};

fn in_operand(program: &Program, binary: NodeIndex) -> NodeIndex {
    match program.arena.get(binary).map(|n| &n.data) {
        Some(NodeData::BinaryExpr(data)) => data.left,
        _ => NodeIndex::NONE,
    }
}

fn element_key(program: &Program, access: NodeIndex) -> NodeIndex {
    match program.arena.get(access).map(|n| &n.data) {
        Some(NodeData::AccessExpr(data)) => data.name_or_argument,
        _ => NodeIndex::NONE,
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn class_implementing_exported_interface() {
    let scenario = interface_implemented_by_class();
    let program = &scenario.program;
    let contexts = transform(program, options(&["index.ts"])).expect("transform");

    assert_eq!(renamed_to(&contexts, name(program, scenario.x_access)), None);
    assert_eq!(renamed_to(&contexts, name(program, scenario.class_x)), None);
    assert_eq!(renamed_to(&contexts, name(program, scenario.interface_x)), None);

    assert_eq!(
        renamed_to(&contexts, name(program, scenario.y_access)),
        Some("_private_y")
    );
    assert_eq!(
        renamed_to(&contexts, name(program, scenario.private_y)),
        Some("_private_y")
    );
    assert_eq!(
        renamed_to(&contexts, name(program, scenario.helper_access)),
        Some("_internal_helper")
    );
    assert_eq!(
        renamed_to(&contexts, name(program, scenario.helper)),
        Some("_internal_helper")
    );
}

#[test]
fn destructured_keys_are_expanded_and_locals_kept() {
    let scenario = destructured_internal_shape();
    let program = &scenario.program;
    let contexts = transform(program, options(&[])).expect("transform");

    for (element, expected) in scenario
        .destructuring
        .elements
        .iter()
        .zip(["_internal_a", "_internal_b"])
    {
        assert_eq!(
            contexts[0].get(*element),
            Some(&RenameDirective::ExpandShorthandBinding {
                property_name: expected.to_string()
            })
        );
    }
    assert_eq!(renamed_to(&contexts, name(program, scenario.shape_a)), Some("_internal_a"));
    assert_eq!(renamed_to(&contexts, name(program, scenario.shape_b)), Some("_internal_b"));
    for &reference in &scenario.references {
        assert_eq!(renamed_to(&contexts, reference), None);
    }

    let rewritten = contexts[0].apply(&program.arena);
    let element = scenario.destructuring.elements[0];
    let Some(NodeData::BindingElement(binding)) = rewritten.get(element).map(|n| &n.data) else {
        panic!("binding element");
    };
    assert_eq!(rewritten.identifier_text(binding.property_name), Some("_internal_a"));
    assert_eq!(rewritten.identifier_text(binding.name), Some("a"));
    assert_eq!(rewritten.identifier_text(scenario.references[0]), Some("a"));
}

#[test]
fn rest_element_in_object_pattern_is_never_renamed() {
    let mut b = ProgramBuilder::with_default_lib();
    let file = b.source_file("index.ts");
    let shape = b.interface(file, "Shape", modifier_flags::NONE);
    b.property(shape, "a", modifier_flags::NONE, TypeId::NUMBER);
    b.property(shape, "rest", modifier_flags::NONE, TypeId::NUMBER);
    let shape_type = b.instance_type(shape).expect("shape type");
    let obj = b.variable(file, "obj", modifier_flags::NONE, shape_type);
    b.annotate(obj);
    let obj_symbol = b.symbol_of(obj).expect("obj symbol");
    let initializer = b.ident(obj_symbol);
    let destructuring = b.destructure(
        file,
        initializer,
        &[BindingSpec::Shorthand("a"), BindingSpec::Shorthand("rest")],
    );
    let rest = destructuring.elements[1];
    b.set_rest(rest);
    let program = b.finish();

    assert_eq!(
        Occurrence::detect(&program, rest),
        None,
        "a rest element names no property"
    );
    let contexts = transform(&program, options(&[])).expect("transform");
    assert_eq!(contexts[0].get(rest), None);
    assert!(contexts[0].edits().iter().all(|edit| edit.node != rest));
    assert_eq!(
        contexts[0].get(destructuring.elements[0]),
        Some(&RenameDirective::ExpandShorthandBinding {
            property_name: "_internal_a".to_string()
        })
    );
}

#[test]
fn jsdoc_tagged_field_is_kept() {
    let scenario = jsdoc_tagged_members();
    let program = &scenario.program;
    let contexts = transform(program, options(&[])).expect("transform");

    assert_eq!(renamed_to(&contexts, name(program, scenario.tagged)), None);
    assert_eq!(renamed_to(&contexts, name(program, scenario.nested)), None);
    assert_eq!(
        renamed_to(&contexts, name(program, scenario.untagged)),
        Some("_internal_level")
    );
}

// =============================================================================
// Occurrence kinds
// =============================================================================

#[test]
fn in_operand_follows_the_right_operand_type() {
    let mut b = ProgramBuilder::new();
    let file = b.source_file("index.ts");
    let public = b.interface(file, "Public", modifier_flags::EXPORT);
    b.property(public, "flag", modifier_flags::NONE, TypeId::BOOLEAN);
    let local = b.interface(file, "Local", modifier_flags::NONE);
    let is_another = b.property(local, "isAnother", modifier_flags::NONE, TypeId::BOOLEAN);
    let is_another_symbol = b.symbol_of(is_another).expect("isAnother symbol");

    let public_type = b.instance_type(public).expect("public type");
    let local_type = b.instance_type(local).expect("local type");
    let public_value = b.variable(file, "pub", modifier_flags::NONE, public_type);
    let local_value = b.variable(file, "loc", modifier_flags::NONE, local_type);
    let public_symbol = b.symbol_of(public_value).expect("pub symbol");
    let local_symbol = b.symbol_of(local_value).expect("loc symbol");

    let target = b.ident(public_symbol);
    let kept = b.in_expr("flag", target);
    b.expression_statement(file, kept);
    let target = b.ident(local_symbol);
    let renamed = b.in_expr("isAnother", target);
    b.expression_statement(file, renamed);
    let program = b.finish();

    let contexts = transform(&program, options(&["index.ts"])).expect("transform");
    assert_eq!(renamed_to(&contexts, in_operand(&program, kept)), None);

    let literal = in_operand(&program, renamed);
    assert_eq!(
        contexts[0].get(literal),
        Some(&RenameDirective::StringLiteral {
            new_text: "_internal_isAnother".to_string()
        })
    );
    let edit = contexts[0]
        .edits()
        .iter()
        .find(|edit| edit.node == literal)
        .expect("edit");
    assert_eq!(edit.symbol, Some(is_another_symbol));
    assert_eq!(edit.visibility, VisibilityType::Internal);
}

#[test]
fn in_operand_naming_a_private_member_uses_the_private_prefix() {
    let mut b = ProgramBuilder::new();
    let file = b.source_file("index.ts");
    let class = b.class(file, "Counter", modifier_flags::NONE);
    let count = b.property(class, "count", modifier_flags::PRIVATE, TypeId::NUMBER);
    let count_symbol = b.symbol_of(count).expect("count symbol");
    let counter_type = b.instance_type(class).expect("counter type");
    let counter = b.variable(file, "counter", modifier_flags::NONE, counter_type);
    let counter_symbol = b.symbol_of(counter).expect("counter symbol");
    let target = b.ident(counter_symbol);
    let check = b.in_expr("count", target);
    b.expression_statement(file, check);
    let program = b.finish();

    let contexts = transform(&program, options(&[])).expect("transform");
    assert_eq!(renamed_to(&contexts, name(&program, count)), Some("_private_count"));

    let literal = in_operand(&program, check);
    assert_eq!(
        contexts[0].get(literal),
        Some(&RenameDirective::StringLiteral {
            new_text: "_private_count".to_string()
        })
    );
    let edit = contexts[0]
        .edits()
        .iter()
        .find(|edit| edit.node == literal)
        .expect("edit");
    assert_eq!(edit.symbol, Some(count_symbol));
    assert_eq!(edit.visibility, VisibilityType::Private);
}

#[test]
fn in_operand_without_a_matching_property_is_internal() {
    let mut b = ProgramBuilder::new();
    let file = b.source_file("index.ts");
    let shape = b.interface(file, "Shape", modifier_flags::NONE);
    b.property(shape, "width", modifier_flags::NONE, TypeId::NUMBER);
    let shape_type = b.instance_type(shape).expect("shape type");
    let value = b.variable(file, "value", modifier_flags::NONE, shape_type);
    let value_symbol = b.symbol_of(value).expect("value symbol");
    let target = b.ident(value_symbol);
    let check = b.in_expr("height", target);
    b.expression_statement(file, check);
    let program = b.finish();

    let contexts = transform(&program, options(&[])).expect("transform");
    let literal = in_operand(&program, check);
    assert_eq!(renamed_to(&contexts, literal), Some("_internal_height"));
    let edit = contexts[0]
        .edits()
        .iter()
        .find(|edit| edit.node == literal)
        .expect("edit");
    assert_eq!(edit.symbol, None);
}

#[test]
fn non_literal_in_operand_is_an_error() {
    let mut b = ProgramBuilder::new();
    let file = b.source_file("index.ts");
    let local = b.interface(file, "Local", modifier_flags::NONE);
    let local_type = b.instance_type(local).expect("local type");
    let value = b.variable(file, "value", modifier_flags::NONE, local_type);
    let value_symbol = b.symbol_of(value).expect("value symbol");
    let target = b.ident(value_symbol);
    let binary = b.in_expr("key", target);
    b.expression_statement(file, binary);
    let mut program = b.finish();
    let literal = in_operand(&program, binary);
    program.node_types.insert(literal, TypeId::STRING);

    let err = transform(&program, options(&[])).unwrap_err();
    assert_eq!(
        err,
        RenameError::NonLiteralInOperand {
            text: "key".to_string(),
            file_name: "index.ts".to_string()
        }
    );
}

#[test]
fn element_access_keys_are_renamed_by_value() {
    let mut b = ProgramBuilder::new();
    let file = b.source_file("index.ts");
    let counter = b.class(file, "Counter", modifier_flags::NONE);
    let count = b.property(counter, "count", modifier_flags::NONE, TypeId::NUMBER);
    let counter_type = b.instance_type(counter).expect("counter type");
    let value = b.variable(file, "counter", modifier_flags::NONE, counter_type);
    let value_symbol = b.symbol_of(value).expect("counter symbol");
    let receiver = b.ident(value_symbol);
    let access = b.element_access(receiver, "count");
    b.expression_statement(file, access);
    let program = b.finish();

    let contexts = transform(&program, options(&[])).expect("transform");
    let key = element_key(&program, access);
    assert_eq!(
        contexts[0].get(key),
        Some(&RenameDirective::StringLiteral {
            new_text: "_internal_count".to_string()
        })
    );
    assert_eq!(renamed_to(&contexts, name(&program, count)), Some("_internal_count"));

    let rewritten = contexts[0].apply(&program.arena);
    assert_eq!(rewritten.literal_text(key), Some("_internal_count"));
}

#[test]
fn shorthand_property_is_expanded() {
    let mut b = ProgramBuilder::new();
    let file = b.source_file("index.ts");
    let options_iface = b.interface(file, "Options", modifier_flags::EXPORT);
    b.property(options_iface, "width", modifier_flags::NONE, TypeId::NUMBER);
    let options_type = b.instance_type(options_iface).expect("options type");

    let width = b.variable(file, "width", modifier_flags::NONE, TypeId::NUMBER);
    let width_symbol = b.symbol_of(width).expect("width symbol");

    let internal = b.object_literal(None);
    let expanded = b.shorthand_property(internal, width_symbol);
    b.local(file, "internal", internal);

    let typed = b.object_literal(Some(options_type));
    let kept = b.shorthand_property(typed, width_symbol);
    b.local(file, "typed", typed);
    let program = b.finish();

    let contexts = transform(&program, options(&["index.ts"])).expect("transform");
    assert_eq!(
        contexts[0].get(expanded),
        Some(&RenameDirective::ExpandShorthandProperty {
            property_name: "_internal_width".to_string()
        })
    );
    assert_eq!(contexts[0].get(kept), None);

    let value = name(&program, expanded);
    let rewritten = contexts[0].apply(&program.arena);
    let node = rewritten.get(expanded).expect("assignment");
    assert_eq!(node.kind, SyntaxKind::PropertyAssignment);
    let NodeData::PropertyAssignment(assignment) = &node.data else {
        panic!("property assignment");
    };
    assert_eq!(rewritten.identifier_text(assignment.name), Some("_internal_width"));
    assert_eq!(assignment.initializer, value);
    assert_eq!(rewritten.identifier_text(value), Some("width"));
}

#[test]
fn constructor_parameter_properties_and_references() {
    let mut b = ProgramBuilder::with_default_lib();
    let file = b.source_file("index.ts");

    // class Measure { constructor(public width: number) { console.log(width, this.width); } }
    let measure = b.class(file, "Measure", modifier_flags::NONE);
    let ctor = b.constructor(measure);
    let width = b.parameter_property(ctor, "width", modifier_flags::PUBLIC, TypeId::NUMBER);
    let body = b.body(ctor);
    let width_local = b.parameter_local(width).expect("parameter local");
    let width_reference = b.ident(width_local);
    let this = b.this_expr(measure);
    let width_access = b.property_access(this, "width");
    b.console_log(body, &[width_reference, width_access]);

    // export class Exported { constructor(public pub: number, private priv: number) { console.log(pub, priv); } }
    let exported = b.class(file, "Exported", modifier_flags::EXPORT);
    let ctor = b.constructor(exported);
    let public = b.parameter_property(ctor, "pub", modifier_flags::PUBLIC, TypeId::NUMBER);
    let private = b.parameter_property(ctor, "priv", modifier_flags::PRIVATE, TypeId::NUMBER);
    let body = b.body(ctor);
    let public_local = b.parameter_local(public).expect("pub local");
    let private_local = b.parameter_local(private).expect("priv local");
    let public_reference = b.ident(public_local);
    let private_reference = b.ident(private_local);
    b.console_log(body, &[public_reference, private_reference]);
    let program = b.finish();

    let contexts = transform(&program, options(&["index.ts"])).expect("transform");
    for node in [name(&program, width), width_reference, name(&program, width_access)] {
        assert_eq!(renamed_to(&contexts, node), Some("_internal_width"));
    }
    for node in [name(&program, public), public_reference] {
        assert_eq!(renamed_to(&contexts, node), None);
    }
    for node in [name(&program, private), private_reference] {
        assert_eq!(renamed_to(&contexts, node), Some("_private_priv"));
    }
}

#[test]
fn enum_members_follow_the_enum() {
    let mut b = ProgramBuilder::new();
    let file = b.source_file("index.ts");
    let color = b.enum_declaration(file, "Color", modifier_flags::NONE);
    let red = b.enum_member(color, "Red");
    let color_symbol = b.symbol_of(color).expect("enum symbol");
    let reference = b.ident(color_symbol);
    let access = b.property_access(reference, "Red");
    b.expression_statement(file, access);

    let level = b.enum_declaration(file, "Level", modifier_flags::EXPORT);
    let high = b.enum_member(level, "High");
    let program = b.finish();

    let contexts = transform(&program, options(&["index.ts"])).expect("transform");
    assert_eq!(renamed_to(&contexts, name(&program, red)), Some("_internal_Red"));
    assert_eq!(renamed_to(&contexts, name(&program, access)), Some("_internal_Red"));
    assert_eq!(renamed_to(&contexts, name(&program, high)), None);
}

#[test]
fn custom_prefixes_are_applied() {
    let scenario = interface_implemented_by_class();
    let program = &scenario.program;
    let options = RenameOptions {
        private_prefix: "$p_".to_string(),
        internal_prefix: "i_".to_string(),
        ..options(&["index.ts"])
    };
    let contexts = transform(program, options).expect("transform");

    assert_eq!(renamed_to(&contexts, name(program, scenario.y_access)), Some("$p_y"));
    assert_eq!(
        renamed_to(&contexts, name(program, scenario.helper_access)),
        Some("i_helper")
    );
}

#[test]
fn invalid_prefix_is_rejected_before_any_work() {
    let scenario = interface_implemented_by_class();
    let options = RenameOptions {
        internal_prefix: "not-valid".to_string(),
        ..RenameOptions::default()
    };
    let err = transform(&scenario.program, options).unwrap_err();
    assert!(matches!(
        err,
        RenameError::InvalidOption {
            option: "internalPrefix",
            ..
        }
    ));
}

#[test]
fn missing_symbol_for_a_renamed_site_is_an_error() {
    let scenario = destructured_internal_shape();
    let mut program = scenario.program;
    let element = scenario.destructuring.elements[0];
    let binding_name = program.arena.name_of(element);
    program.node_symbols.remove(&binding_name);

    let err = transform(&program, options(&[])).unwrap_err();
    assert_eq!(
        err,
        RenameError::UnresolvedSymbol {
            name: "a".to_string(),
            file_name: "index.ts".to_string()
        }
    );
}

// =============================================================================
// Whole program
// =============================================================================

#[test]
fn occurrences_of_one_symbol_share_one_name() {
    let scenario = interface_implemented_by_class();
    let options = options(&["index.ts"]);
    let contexts = transform(&scenario.program, options.clone()).expect("transform");

    let mut names: FxHashMap<_, &str> = FxHashMap::default();
    for edit in contexts.iter().flat_map(RenameContext::edits) {
        assert_ne!(edit.visibility, VisibilityType::External);
        assert_eq!(edit.renamed, options.new_name(&edit.original, edit.visibility));
        if let Some(symbol) = edit.symbol {
            let first = names.entry(symbol).or_insert(edit.renamed.as_str());
            assert_eq!(*first, edit.renamed);
        }
    }
    assert!(!names.is_empty());
}

#[test]
fn declaration_and_library_files_are_skipped() {
    let mut b = ProgramBuilder::with_default_lib();
    let types = b.declaration_file("types.d.ts");
    let env = b.interface(types, "Env", modifier_flags::NONE);
    b.property(env, "home", modifier_flags::NONE, TypeId::STRING);
    b.source_file("index.ts");
    b.source_file("util.ts");
    let program = b.finish();

    let contexts = transform(&program, options(&[])).expect("transform");
    let files: Vec<&str> = contexts.iter().map(RenameContext::file_name).collect();
    assert_eq!(files, vec!["index.ts", "util.ts"]);
}

#[test]
fn transformer_reuses_one_cache_across_files() {
    let mut b = ProgramBuilder::new();
    let lib = b.source_file("lib.ts");
    let store = b.class(lib, "Store", modifier_flags::EXPORT);
    b.property(store, "items", modifier_flags::PRIVATE, TypeId::NUMBER);
    let store_symbol = b.symbol_of(store).expect("store symbol");
    let index = b.source_file("index.ts");
    b.named_import(index, "Store", store_symbol);
    let program = b.finish();

    let mut transformer =
        PropertiesRenameTransformer::new(&program, options(&["lib.ts"])).expect("transformer");
    assert_eq!(transformer.export_graph().export_count(), 1);
    assert_eq!(transformer.classify_symbol(store_symbol), VisibilityType::External);
    let cached = transformer.cache().len();
    let contexts = transformer.transform_program().expect("transform");
    assert_eq!(contexts.len(), 2);
    assert!(transformer.cache().len() >= cached);
    assert_eq!(transformer.cache().get(store_symbol), Some(VisibilityType::External));
}

#[test]
fn apply_all_rewrites_every_file() {
    let scenario = interface_implemented_by_class();
    let program = &scenario.program;
    let contexts = transform(program, options(&["index.ts"])).expect("transform");

    let rewritten = apply_all(&program.arena, &contexts);
    let y_name = name(program, scenario.y_access);
    let x_name = name(program, scenario.x_access);
    assert_eq!(rewritten.identifier_text(y_name), Some("_private_y"));
    assert_eq!(rewritten.identifier_text(x_name), Some("x"));
    assert_eq!(program.arena.identifier_text(y_name), Some("y"));
}
