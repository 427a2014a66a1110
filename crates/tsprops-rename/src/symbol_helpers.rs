//! Symbol and declaration predicates shared by the export graph and the classifier.

use smallvec::SmallVec;
use tsprops_program::{
    NodeArena, NodeIndex, SymbolId, SyntaxKind, TypeChecker, internal_symbol_name,
    modifier_flags, normalize_path, symbol_flags,
};

const NODE_MODULES_SEGMENT: &str = "/node_modules/";

/// Canonical symbol: aliases (import/export specifiers) resolve to their target.
pub fn actual_symbol(checker: &dyn TypeChecker, symbol: SymbolId) -> SymbolId {
    match checker.symbol(symbol) {
        Some(sym) if sym.has_flags(symbol_flags::ALIAS) => checker.get_aliased_symbol(symbol),
        _ => symbol,
    }
}

/// Symbol at `node`, alias-resolved.
pub fn node_symbol(checker: &dyn TypeChecker, node: NodeIndex) -> Option<SymbolId> {
    checker
        .get_symbol_at_location(node)
        .map(|symbol| actual_symbol(checker, symbol))
}

/// Split a transient (merged) symbol into the declared symbols it was built from.
///
/// Non-transient symbols are returned as-is. A transient symbol without named
/// declarations (tuple elements, keyed mapped properties) splits into nothing.
pub fn split_transient_symbol(checker: &dyn TypeChecker, symbol: SymbolId) -> SmallVec<[SymbolId; 2]> {
    let Some(sym) = checker.symbol(symbol) else {
        return SmallVec::new();
    };
    if !sym.is_transient() {
        return smallvec::smallvec![symbol];
    }

    let arena = checker.arena();
    let mut result = SmallVec::new();
    for declaration in declarations_for_symbol(checker, symbol) {
        let is_named = arena
            .kind(declaration)
            .is_some_and(SyntaxKind::is_named_declaration);
        if !is_named {
            continue;
        }
        let name = arena.name_of(declaration);
        if name.is_none() {
            continue;
        }
        if let Some(declared) = node_symbol(checker, name) {
            if !result.contains(&declared) {
                result.push(declared);
            }
        }
    }
    result
}

/// Declarations of a symbol plus its value declaration, without duplicates.
pub fn declarations_for_symbol(checker: &dyn TypeChecker, symbol: SymbolId) -> SmallVec<[NodeIndex; 4]> {
    let mut result = SmallVec::new();
    let Some(sym) = checker.symbol(symbol) else {
        return result;
    };
    result.extend(sym.declarations.iter().copied());
    if sym.value_declaration.is_some() && !result.contains(&sym.value_declaration) {
        result.push(sym.value_declaration);
    }
    result
}

/// Exported symbols of a module, alias-resolved.
///
/// An `export =` assignment is the module's only export. Otherwise the export
/// table is used, with `default` appended when the checker did not list it.
pub fn exports_for_source_file(checker: &dyn TypeChecker, module: SymbolId) -> Vec<SymbolId> {
    let Some(sym) = checker.symbol(module) else {
        return Vec::new();
    };
    if let Some(&export_equals) = sym.exports.get(internal_symbol_name::EXPORT_EQUALS) {
        return vec![actual_symbol(checker, export_equals)];
    }

    let mut result = checker.get_exports_of_module(module);
    if let Some(&default_export) = sym.exports.get(internal_symbol_name::DEFAULT) {
        if !result.contains(&default_export) {
            result.push(default_export);
        }
    }
    result
        .into_iter()
        .map(|symbol| actual_symbol(checker, symbol))
        .collect()
}

/// Method, property or accessor declaration.
pub fn is_class_member(arena: &NodeArena, node: NodeIndex) -> bool {
    arena.kind(node).is_some_and(SyntaxKind::is_class_member)
}

/// `constructor(private x: T)`: a constructor parameter with an accessibility modifier.
pub fn is_constructor_parameter(arena: &NodeArena, node: NodeIndex) -> bool {
    arena.is_kind(node, SyntaxKind::Parameter)
        && arena.is_kind(arena.parent(node), SyntaxKind::Constructor)
        && arena.has_modifier(node, modifier_flags::ACCESSIBILITY_MODIFIER)
}

pub fn has_private_keyword(arena: &NodeArena, node: NodeIndex) -> bool {
    arena.has_modifier(node, modifier_flags::PRIVATE)
}

/// Declarations of `symbol` that are class members or parameter properties.
pub fn class_member_declarations(checker: &dyn TypeChecker, symbol: SymbolId) -> SmallVec<[NodeIndex; 2]> {
    let arena = checker.arena();
    checker
        .symbol(symbol)
        .map(|sym| {
            sym.declarations
                .iter()
                .copied()
                .filter(|&decl| is_class_member(arena, decl) || is_constructor_parameter(arena, decl))
                .collect()
        })
        .unwrap_or_default()
}

pub fn is_symbol_class_member(checker: &dyn TypeChecker, symbol: SymbolId) -> bool {
    !class_member_declarations(checker, symbol).is_empty()
}

pub fn is_private_class_member(checker: &dyn TypeChecker, symbol: SymbolId) -> bool {
    let arena = checker.arena();
    class_member_declarations(checker, symbol)
        .iter()
        .any(|&decl| has_private_keyword(arena, decl))
}

/// Declaration owning a class member: the class (or object literal) for a
/// member, the class of the constructor for a parameter property.
pub fn class_of_member_symbol(checker: &dyn TypeChecker, symbol: SymbolId) -> Option<NodeIndex> {
    let arena = checker.arena();
    let member = *class_member_declarations(checker, symbol).first()?;
    let owner = if is_constructor_parameter(arena, member) {
        arena.parent(arena.parent(member))
    } else {
        arena.parent(member)
    };
    owner.is_some().then_some(owner)
}

/// Declarations from `.d.ts` files, default libraries or `node_modules` are
/// outside the analyzed program and never renamed.
pub fn is_declaration_from_externals(checker: &dyn TypeChecker, declaration: NodeIndex) -> bool {
    let arena = checker.arena();
    let source_file = arena.source_file_of(declaration);
    let Some(data) = arena.source_file_data(source_file) else {
        return false;
    };
    data.is_declaration_file
        || checker.is_source_file_default_library(source_file)
        || normalize_path(&data.file_name).contains(NODE_MODULES_SEGMENT)
}

/// Whether `marker` appears in the JSDoc of `declaration` or of any ancestor
/// below the source file.
pub fn has_jsdoc_marker_in_ancestors(arena: &NodeArena, declaration: NodeIndex, marker: &str) -> bool {
    let mut current = declaration;
    while let Some(node) = arena.get(current) {
        if node.kind == SyntaxKind::SourceFile {
            break;
        }
        if node.js_doc.as_deref().is_some_and(|doc| doc.contains(marker)) {
            return true;
        }
        current = node.parent;
    }
    false
}
