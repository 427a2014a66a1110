//! Visibility classification.
//!
//! `symbol_visibility` decides the tier of a canonical symbol and memoizes it
//! in the injected [`VisibilityCache`]. `node_visibility` classifies a rename
//! site, where the receiver or contextual type can make a name external even
//! when its own symbol is not.

use crate::cache::VisibilityCache;
use crate::export_graph::ExportGraph;
use crate::symbol_helpers::{
    actual_symbol, class_of_member_symbol, declarations_for_symbol, has_jsdoc_marker_in_ancestors,
    is_declaration_from_externals, is_private_class_member, node_symbol, split_transient_symbol,
};
use rustc_hash::FxHashSet;
use tracing::trace;
use tsprops_common::{RenameError, RenameOptions, RenameResult, VisibilityType};
use tsprops_program::{
    NodeData, NodeIndex, SymbolId, SyntaxKind, TypeChecker, TypeId, internal_symbol_name,
};

pub struct VisibilityClassifier<'a> {
    checker: &'a dyn TypeChecker,
    graph: &'a ExportGraph,
    cache: &'a mut VisibilityCache,
    /// `@tag` searched in JSDoc, `None` when the override is disabled.
    public_marker: Option<String>,
}

impl<'a> VisibilityClassifier<'a> {
    pub fn new(
        checker: &'a dyn TypeChecker,
        options: &RenameOptions,
        graph: &'a ExportGraph,
        cache: &'a mut VisibilityCache,
    ) -> Self {
        VisibilityClassifier {
            checker,
            graph,
            cache,
            public_marker: options.public_jsdoc_marker(),
        }
    }

    pub fn checker(&self) -> &'a dyn TypeChecker {
        self.checker
    }

    pub fn cache(&self) -> &VisibilityCache {
        &*self.cache
    }

    // =========================================================================
    // Symbols
    // =========================================================================

    /// Tier of `symbol` after alias resolution. Every decision is cached.
    pub fn symbol_visibility(&mut self, symbol: SymbolId) -> VisibilityType {
        let checker = self.checker;
        let symbol = actual_symbol(checker, symbol);
        if let Some(cached) = self.cache.get(symbol) {
            return cached;
        }
        let Some(sym) = checker.symbol(symbol) else {
            return VisibilityType::External;
        };

        let declarations = declarations_for_symbol(checker, symbol);
        if declarations
            .iter()
            .any(|&declaration| is_declaration_from_externals(checker, declaration))
        {
            return self.decide(symbol, VisibilityType::External, "external declaration");
        }

        if is_private_class_member(checker, symbol) {
            if self.graph.is_reachable(symbol) {
                return self.decide(symbol, VisibilityType::External, "private but reachable");
            }
            return self.decide(symbol, VisibilityType::Private, "private member");
        }

        if sym.escaped_name == internal_symbol_name::PROTOTYPE {
            return self.decide(symbol, VisibilityType::External, "prototype");
        }

        if let Some(marker) = self.public_marker.as_deref() {
            let arena = checker.arena();
            if declarations
                .iter()
                .any(|&declaration| has_jsdoc_marker_in_ancestors(arena, declaration, marker))
            {
                return self.decide(symbol, VisibilityType::External, "jsdoc tag");
            }
        }

        if self.graph.is_reachable(symbol) {
            return self.decide(symbol, VisibilityType::External, "reachable from exports");
        }

        for &declaration in &declarations {
            let Some(parent_symbol) = self.enclosing_declaration_symbol(declaration) else {
                continue;
            };
            if self.symbol_visibility(parent_symbol).is_external() {
                return self.decide(symbol, VisibilityType::External, "external parent");
            }
        }

        self.decide(symbol, VisibilityType::Internal, "internal")
    }

    fn decide(&mut self, symbol: SymbolId, visibility: VisibilityType, reason: &'static str) -> VisibilityType {
        trace!(?symbol, %visibility, reason, "classified");
        self.cache.insert(symbol, visibility)
    }

    /// Symbol of the named declaration directly enclosing `declaration`.
    fn enclosing_declaration_symbol(&self, declaration: NodeIndex) -> Option<SymbolId> {
        let arena = self.checker.arena();
        let parent = arena.parent(declaration);
        if !arena
            .kind(parent)
            .is_some_and(SyntaxKind::is_named_declaration)
        {
            return None;
        }
        let name = arena.name_of(parent);
        if name.is_none() {
            return None;
        }
        node_symbol(self.checker, name)
    }

    // =========================================================================
    // Types
    // =========================================================================

    /// Whether `property_name` on `ty` is part of the external surface.
    #[tracing::instrument(level = "trace", skip_all, fields(ty = ty.0, property = property_name))]
    pub fn is_type_property_external(&mut self, ty: TypeId, property_name: &str) -> bool {
        let mut visiting = FxHashSet::default();
        self.type_property_external(ty, property_name, &mut visiting)
    }

    fn type_property_external(
        &mut self,
        ty: TypeId,
        property_name: &str,
        visiting: &mut FxHashSet<TypeId>,
    ) -> bool {
        if !visiting.insert(ty) {
            return false;
        }
        let checker = self.checker;
        let Some(data) = checker.type_data(ty) else {
            return false;
        };

        // Tuple elements are positional; renaming them is never safe.
        if data.is_tuple() {
            return true;
        }

        // A mapped property cannot be traced to its origin, so the mapped type
        // as a whole decides.
        if data.is_mapped() {
            if let Some(symbol) = data.symbol() {
                if self.symbol_visibility(symbol).is_external() {
                    return true;
                }
            }
        }

        if let Some(constituents) = data.constituents() {
            for &constituent in constituents {
                if self.type_property_external(constituent, property_name, visiting) {
                    return true;
                }
            }
        }

        if let Some(symbol) = data.symbol() {
            for heritage_type in self.heritage_types(symbol) {
                if self.type_property_external(heritage_type, property_name, visiting) {
                    return true;
                }
            }
        }

        let Some(property) = checker.get_property_of_type(ty, property_name) else {
            return false;
        };
        if self.symbol_visibility(property).is_external() {
            return true;
        }
        split_transient_symbol(checker, property)
            .into_iter()
            .any(|declared| self.symbol_visibility(declared).is_external())
    }

    /// Types named in the `extends`/`implements` clauses of every class or
    /// interface declaration of `symbol`.
    fn heritage_types(&self, symbol: SymbolId) -> Vec<TypeId> {
        let checker = self.checker;
        let arena = checker.arena();
        let mut result = Vec::new();
        for declaration in declarations_for_symbol(checker, symbol) {
            let Some(node) = arena.get(declaration) else {
                continue;
            };
            if node.kind != SyntaxKind::ClassDeclaration && node.kind != SyntaxKind::InterfaceDeclaration {
                continue;
            }
            let NodeData::ClassLike(class) = &node.data else {
                continue;
            };
            for clause in class.heritage_clauses.iter() {
                if let Some(NodeData::HeritageClause(heritage)) = arena.get(clause).map(|n| &n.data) {
                    result.extend(
                        heritage
                            .types
                            .iter()
                            .map(|expression| checker.get_type_at_location(expression)),
                    );
                }
            }
        }
        result
    }

    // =========================================================================
    // Rename sites
    // =========================================================================

    /// Tier of a rename site: a property name identifier, an element access
    /// string literal, or a shorthand binding element.
    pub fn node_visibility(&mut self, node: NodeIndex) -> RenameResult<VisibilityType> {
        let checker = self.checker;
        let arena = checker.arena();
        let Some(node_kind) = arena.kind(node) else {
            return Ok(VisibilityType::External);
        };
        let Some(name) = site_name(checker, node) else {
            return Ok(VisibilityType::External);
        };
        let parent = arena.parent(node);
        let parent_kind = arena.kind(parent);

        // { name: value } and { name } take the contextual type of the literal.
        if matches!(
            parent_kind,
            Some(SyntaxKind::PropertyAssignment | SyntaxKind::ShorthandPropertyAssignment)
        ) {
            if let Some(contextual) = checker.get_contextual_type(arena.parent(parent)) {
                if self.is_type_property_external(contextual, name) {
                    return Ok(VisibilityType::External);
                }
            }
        }

        if let Some(SyntaxKind::PropertyAccessExpression | SyntaxKind::ElementAccessExpression) = parent_kind {
            let expression = match arena.get(parent).map(|n| &n.data) {
                Some(NodeData::AccessExpr(access)) => access.expression,
                _ => NodeIndex::NONE,
            };
            if self.is_namespace_reference(expression) {
                return Ok(VisibilityType::External);
            }
            let receiver = checker.get_type_at_location(expression);
            if self.is_type_property_external(receiver, name) {
                return Ok(VisibilityType::External);
            }
        }

        // const { name } = obj;
        if node_kind == SyntaxKind::BindingElement {
            let pattern_type = checker.get_type_at_location(parent);
            if self.is_type_property_external(pattern_type, name) {
                return Ok(VisibilityType::External);
            }
        }

        // const { name: local } = obj;
        if parent_kind == Some(SyntaxKind::BindingElement) {
            let pattern_type = checker.get_type_at_location(arena.parent(parent));
            if self.is_type_property_external(pattern_type, name) {
                return Ok(VisibilityType::External);
            }
        }

        let symbol_at_node = node_symbol(checker, node);
        if let Some(owner) = self.member_owner(node, symbol_at_node) {
            let owner_type = checker.get_type_at_location(owner);
            if self.is_type_property_external(owner_type, name) {
                return Ok(VisibilityType::External);
            }
        }

        let symbol = if node_kind == SyntaxKind::BindingElement {
            self.shorthand_binding_symbol(node)?
        } else {
            symbol_at_node
        };
        Ok(match symbol {
            Some(symbol) => self.symbol_visibility(symbol),
            None => VisibilityType::External,
        })
    }

    /// Declaration owning the member a site names: the class (or object
    /// literal) of a class member, or the interface or type literal of a
    /// member signature being declared at `node`.
    fn member_owner(&self, node: NodeIndex, symbol: Option<SymbolId>) -> Option<NodeIndex> {
        if let Some(owner) = symbol.and_then(|symbol| class_of_member_symbol(self.checker, symbol)) {
            return Some(owner);
        }
        let arena = self.checker.arena();
        let parent = arena.parent(node);
        let is_signature = matches!(
            arena.kind(parent),
            Some(SyntaxKind::PropertySignature | SyntaxKind::MethodSignature)
        );
        if is_signature && arena.name_of(parent) == node {
            let owner = arena.parent(parent);
            return owner.is_some().then_some(owner);
        }
        None
    }

    /// `ns.name` where `ns` is a namespace import or a namespace declaration.
    fn is_namespace_reference(&self, expression: NodeIndex) -> bool {
        let checker = self.checker;
        let arena = checker.arena();
        if !arena.is_kind(expression, SyntaxKind::Identifier) {
            return false;
        }
        let Some(symbol) = checker.get_symbol_at_location(expression) else {
            return false;
        };
        declarations_for_symbol(checker, symbol).iter().any(|&declaration| {
            matches!(
                arena.kind(declaration),
                Some(SyntaxKind::NamespaceImport | SyntaxKind::ModuleDeclaration)
            )
        })
    }

    /// Property symbol a shorthand binding element destructures. A union-typed
    /// pattern has no single origin and yields `None`.
    pub fn shorthand_binding_symbol(&self, element: NodeIndex) -> RenameResult<Option<SymbolId>> {
        let checker = self.checker;
        let arena = checker.arena();
        let Some(NodeData::BindingElement(binding)) = arena.get(element).map(|n| &n.data) else {
            return Ok(None);
        };
        if binding.property_name.is_some() {
            return Err(RenameError::NamedBindingElement {
                name: arena
                    .property_name_text(binding.property_name)
                    .unwrap_or_default()
                    .to_string(),
                file_name: arena.file_name_of(element).to_string(),
            });
        }
        let Some(name) = arena.identifier_text(binding.name) else {
            return Ok(None);
        };
        let pattern_type = checker.get_type_at_location(arena.parent(element));
        if checker.type_data(pattern_type).is_some_and(|data| data.is_union()) {
            return Ok(None);
        }
        Ok(checker.get_property_of_type(pattern_type, name))
    }
}

/// Property name a rename site stands for: identifier text, unquoted literal
/// value, or the local name of a shorthand binding element.
fn site_name(checker: &dyn TypeChecker, node: NodeIndex) -> Option<&str> {
    let arena = checker.arena();
    match &arena.get(node)?.data {
        NodeData::BindingElement(binding) => arena.identifier_text(binding.name),
        _ => arena.property_name_text(node),
    }
}
