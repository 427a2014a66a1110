//! Export reachability graph.
//!
//! For every symbol exported from an entry source file, collects the set of
//! symbols reachable through its declared surface: member names, type
//! annotations, heritage clauses and the declared types of variables. Function
//! bodies and variable initializers are implementation and are not walked.
//!
//! The walk uses an explicit work-list; a per-declaration visited set of
//! symbols keeps recursive types from looping.

use crate::symbol_helpers::{
    actual_symbol, declarations_for_symbol, exports_for_source_file, has_private_keyword,
    is_class_member, is_constructor_parameter, split_transient_symbol,
};
use fixedbitset::FixedBitSet;
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, trace};
use tsprops_common::{RenameError, RenameResult};
use tsprops_program::{NodeData, NodeIndex, SymbolId, SyntaxKind, TypeChecker, TypeData, TypeId};

/// Symbols reachable from the exports of the entry source files.
#[derive(Debug, Default)]
pub struct ExportGraph {
    entries: IndexMap<SymbolId, FxHashSet<SymbolId>>,
    /// Union of all entry sets.
    reachable: FixedBitSet,
}

impl ExportGraph {
    /// Build the graph for `entry_source_files`.
    ///
    /// A file name that does not resolve to a source file is an error. A file
    /// that resolves but exports nothing contributes nothing.
    #[tracing::instrument(level = "debug", skip_all, fields(entries = entry_source_files.len()))]
    pub fn build(checker: &dyn TypeChecker, entry_source_files: &[String]) -> RenameResult<ExportGraph> {
        let mut walker = GraphWalker::new(checker);
        let mut entries: IndexMap<SymbolId, FxHashSet<SymbolId>> = IndexMap::new();

        for file_name in entry_source_files {
            let source_file = checker.get_source_file(file_name).ok_or_else(|| {
                RenameError::EntrySourceFileNotFound {
                    file_name: file_name.clone(),
                }
            })?;
            let Some(module) = checker.get_symbol_at_location(source_file) else {
                debug!(file_name = %file_name, "entry source file has no module symbol");
                continue;
            };

            let exports = exports_for_source_file(checker, module);
            debug!(file_name = %file_name, exports = exports.len(), "collecting exports");
            for export in exports {
                let mut reachable = entries.shift_remove(&export).unwrap_or_default();
                for declaration in declarations_for_symbol(checker, export) {
                    walker.walk_declaration(declaration, &mut reachable);
                }
                trace!(?export, reachable = reachable.len(), "export walked");
                entries.insert(export, reachable);
            }
        }

        let mut reachable = FixedBitSet::with_capacity(checker.symbol_count());
        for symbol in entries.values().flatten() {
            grow_and_insert(&mut reachable, symbol.index());
        }
        debug!(
            exports = entries.len(),
            reachable = reachable.count_ones(..),
            "export graph built"
        );
        Ok(ExportGraph { entries, reachable })
    }

    /// Whether `symbol` (alias-resolved) is reachable from any entry export.
    pub fn is_symbol_accessible_from_exports(&self, checker: &dyn TypeChecker, symbol: SymbolId) -> bool {
        self.is_reachable(actual_symbol(checker, symbol))
    }

    /// Reachability of an already alias-resolved symbol.
    pub fn is_reachable(&self, symbol: SymbolId) -> bool {
        !symbol.is_none() && self.reachable.contains(symbol.index())
    }

    pub fn reachable_from(&self, export: SymbolId) -> Option<&FxHashSet<SymbolId>> {
        self.entries.get(&export)
    }

    pub fn export_count(&self) -> usize {
        self.entries.len()
    }

    pub fn reachable_count(&self) -> usize {
        self.reachable.count_ones(..)
    }
}

fn grow_and_insert(set: &mut FixedBitSet, index: usize) {
    if index >= set.len() {
        set.grow(index + 1);
    }
    set.insert(index);
}

enum WalkItem {
    /// Descend into the children of a node (variable declarations contribute
    /// their type instead).
    Children(NodeIndex),
    /// Inspect a single node: identifiers resolve to symbols, bodies and
    /// private members are cut off.
    Node(NodeIndex),
}

struct GraphWalker<'a> {
    checker: &'a dyn TypeChecker,
    visited: FixedBitSet,
    stack: Vec<WalkItem>,
}

impl<'a> GraphWalker<'a> {
    fn new(checker: &'a dyn TypeChecker) -> Self {
        GraphWalker {
            checker,
            visited: FixedBitSet::with_capacity(checker.symbol_count()),
            stack: Vec::new(),
        }
    }

    fn walk_declaration(&mut self, declaration: NodeIndex, target: &mut FxHashSet<SymbolId>) {
        // Each declaration walk gets a fresh cycle guard.
        self.visited.clear();
        self.stack.push(WalkItem::Children(declaration));
        while let Some(item) = self.stack.pop() {
            match item {
                WalkItem::Children(node) => self.walk_children(node, target),
                WalkItem::Node(node) => self.walk_node(node, target),
            }
        }
    }

    fn walk_children(&mut self, node: NodeIndex, target: &mut FxHashSet<SymbolId>) {
        let checker = self.checker;
        let arena = checker.arena();
        let Some(data) = arena.get(node) else {
            return;
        };

        match data.kind {
            // Only the declared (or inferred) type of a variable matters, never
            // what its initializer references.
            SyntaxKind::VariableDeclaration => {
                let ty = checker.get_type_at_location(node);
                for symbol in self.type_symbols(ty) {
                    target.insert(symbol);
                }
                return;
            }
            kind if kind.is_function_like() && data.type_annotation().is_none() => {
                if let Some(return_type) = checker.get_return_type_of_declaration(node) {
                    for symbol in self.type_symbols(return_type) {
                        self.visit_symbol(symbol, target);
                    }
                }
            }
            _ => {}
        }

        for child in arena.get_children(node).into_iter().rev() {
            self.stack.push(WalkItem::Node(child));
        }
    }

    fn walk_node(&mut self, node: NodeIndex, target: &mut FxHashSet<SymbolId>) {
        let checker = self.checker;
        let arena = checker.arena();
        let Some(data) = arena.get(node) else {
            return;
        };

        match data.kind {
            SyntaxKind::VariableStatement => {
                if let NodeData::VariableStatement(statement) = &data.data {
                    if let Some(NodeData::VariableDeclarationList(list)) =
                        arena.get(statement.declaration_list).map(|n| &n.data)
                    {
                        for &declaration in list.declarations.nodes.iter().rev() {
                            self.stack.push(WalkItem::Node(declaration));
                        }
                    }
                }
                return;
            }
            SyntaxKind::Block => return,
            _ if is_class_member(arena, node) && has_private_keyword(arena, node) => return,
            // A private parameter property is not public surface; its declared
            // type still is, since the constructor signature exposes it.
            _ if is_constructor_parameter(arena, node) && has_private_keyword(arena, node) => {
                let annotation = data.type_annotation();
                if annotation.is_some() {
                    self.stack.push(WalkItem::Node(annotation));
                }
                return;
            }
            SyntaxKind::Identifier => {
                if let Some(symbol) = checker.get_symbol_at_location(node) {
                    self.visit_symbol(symbol, target);
                }
            }
            _ => {}
        }

        self.stack.push(WalkItem::Children(node));
    }

    fn visit_symbol(&mut self, symbol: SymbolId, target: &mut FxHashSet<SymbolId>) {
        let symbol = actual_symbol(self.checker, symbol);
        if symbol.is_none() {
            return;
        }
        if self.visited.contains(symbol.index()) {
            return;
        }
        grow_and_insert(&mut self.visited, symbol.index());

        for declared in split_transient_symbol(self.checker, symbol) {
            target.insert(declared);
            for declaration in declarations_for_symbol(self.checker, declared) {
                self.stack.push(WalkItem::Children(declaration));
            }
        }
    }

    /// Symbols carried by a type: its own symbol, or those of each union or
    /// intersection constituent.
    fn type_symbols(&self, ty: TypeId) -> SmallVec<[SymbolId; 2]> {
        let mut symbols = SmallVec::new();
        match self.checker.type_data(ty) {
            Some(TypeData::Union(types) | TypeData::Intersection(types)) => {
                for &member in types {
                    if let Some(symbol) = self.checker.type_data(member).and_then(TypeData::symbol) {
                        if !symbols.contains(&symbol) {
                            symbols.push(symbol);
                        }
                    }
                }
            }
            Some(data) => symbols.extend(data.symbol()),
            None => {}
        }
        symbols
    }
}
