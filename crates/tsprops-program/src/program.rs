//! Program snapshot: the AST arena together with the results of binding and
//! checking it.
//!
//! A `Program` is immutable once built. Every query the rename core issues is
//! answered from the tables below; composite (union/intersection) property
//! symbols are synthesized ahead of time by the builder so lookups never need
//! to allocate.

use crate::checker::TypeChecker;
use crate::flags::symbol_flags;
use crate::limits::{MAX_ALIAS_CHAIN, MAX_PROPERTY_LOOKUP_DEPTH};
use crate::node::{NodeArena, NodeIndex};
use crate::symbol::{Symbol, SymbolArena, SymbolId};
use crate::types::{IntrinsicKind, TypeData, TypeId, TypeTable};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Program {
    pub arena: NodeArena,
    pub symbols: SymbolArena,
    pub types: TypeTable,
    pub source_files: Vec<NodeIndex>,
    /// Symbol declared by or referenced from a node.
    #[serde(default)]
    pub node_symbols: FxHashMap<NodeIndex, SymbolId>,
    /// Type of an expression or declaration node.
    #[serde(default)]
    pub node_types: FxHashMap<NodeIndex, TypeId>,
    /// Value type of a symbol, used for identifiers without a node type.
    #[serde(default)]
    pub symbol_types: FxHashMap<SymbolId, TypeId>,
    #[serde(default)]
    pub contextual_types: FxHashMap<NodeIndex, TypeId>,
    /// Declared or inferred return type of function-like declarations.
    #[serde(default)]
    pub return_types: FxHashMap<NodeIndex, TypeId>,
    /// Library interface providing members of a primitive (`String`, `Number`).
    #[serde(default)]
    pub apparent_types: FxHashMap<TypeId, TypeId>,
    /// Synthesized properties of union and intersection types.
    #[serde(default)]
    pub composite_properties: FxHashMap<TypeId, IndexMap<String, SymbolId>>,
}

/// Outcome of a structural property lookup before synthesis.
#[derive(Debug, PartialEq, Eq)]
pub enum PropertyLookup {
    Missing,
    Found(SymbolId),
    /// A union or intersection property backed by several distinct symbols.
    Composite(SmallVec<[SymbolId; 4]>),
}

impl Program {
    pub fn from_json(text: &str) -> serde_json::Result<Program> {
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn file_name(&self, source_file: NodeIndex) -> Option<&str> {
        self.arena
            .source_file_data(source_file)
            .map(|data| data.file_name.as_str())
    }

    /// Resolve `name` on `ty` without consulting synthesized composite symbols
    /// for `ty` itself. Nested composites are read from `composite_properties`.
    pub fn lookup_property(&self, ty: TypeId, name: &str) -> PropertyLookup {
        self.lookup_property_at_depth(ty, name, 0)
    }

    fn lookup_property_at_depth(&self, ty: TypeId, name: &str, depth: u32) -> PropertyLookup {
        if depth > MAX_PROPERTY_LOOKUP_DEPTH {
            return PropertyLookup::Missing;
        }
        let Some(data) = self.types.get(ty) else {
            return PropertyLookup::Missing;
        };

        match data {
            TypeData::Object(object) => {
                if let Some(&symbol) = object.properties.get(name) {
                    return PropertyLookup::Found(symbol);
                }
                for &base in &object.base_types {
                    if let Some(symbol) = self.property_at_depth(base, name, depth + 1) {
                        return PropertyLookup::Found(symbol);
                    }
                }
                PropertyLookup::Missing
            }
            TypeData::Intrinsic(_) | TypeData::StringLiteral(_) | TypeData::NumberLiteral(_) => {
                match self.apparent_type(ty) {
                    Some(apparent) if apparent != ty => self
                        .property_at_depth(apparent, name, depth + 1)
                        .map_or(PropertyLookup::Missing, PropertyLookup::Found),
                    _ => PropertyLookup::Missing,
                }
            }
            TypeData::TypeParameter { constraint, .. } => constraint
                .and_then(|constraint| self.property_at_depth(constraint, name, depth + 1))
                .map_or(PropertyLookup::Missing, PropertyLookup::Found),
            TypeData::Union(types) => {
                let mut found: SmallVec<[SymbolId; 4]> = SmallVec::new();
                for &member in types {
                    match self.property_at_depth(member, name, depth + 1) {
                        Some(symbol) => {
                            if !found.contains(&symbol) {
                                found.push(symbol);
                            }
                        }
                        None => return PropertyLookup::Missing,
                    }
                }
                Self::collapse(found)
            }
            TypeData::Intersection(types) => {
                let mut found: SmallVec<[SymbolId; 4]> = SmallVec::new();
                for &member in types {
                    if let Some(symbol) = self.property_at_depth(member, name, depth + 1) {
                        if !found.contains(&symbol) {
                            found.push(symbol);
                        }
                    }
                }
                Self::collapse(found)
            }
        }
    }

    fn collapse(found: SmallVec<[SymbolId; 4]>) -> PropertyLookup {
        match found.len() {
            0 => PropertyLookup::Missing,
            1 => PropertyLookup::Found(found[0]),
            _ => PropertyLookup::Composite(found),
        }
    }

    fn property_at_depth(&self, ty: TypeId, name: &str, depth: u32) -> Option<SymbolId> {
        match self.lookup_property_at_depth(ty, name, depth) {
            PropertyLookup::Found(symbol) => Some(symbol),
            PropertyLookup::Composite(_) => self
                .composite_properties
                .get(&ty)
                .and_then(|properties| properties.get(name))
                .copied(),
            PropertyLookup::Missing => None,
        }
    }

    /// Library type whose members a primitive exposes.
    pub fn apparent_type(&self, ty: TypeId) -> Option<TypeId> {
        if let Some(&apparent) = self.apparent_types.get(&ty) {
            return Some(apparent);
        }
        let primitive = match self.types.get(ty)? {
            TypeData::StringLiteral(_) | TypeData::Intrinsic(IntrinsicKind::String) => {
                TypeId::STRING
            }
            TypeData::NumberLiteral(_) | TypeData::Intrinsic(IntrinsicKind::Number) => {
                TypeId::NUMBER
            }
            TypeData::Intrinsic(IntrinsicKind::Boolean) => TypeId::BOOLEAN,
            _ => return None,
        };
        self.apparent_types.get(&primitive).copied()
    }

    /// Names of every property visible on `ty`, in declaration order.
    pub fn property_names(&self, ty: TypeId) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_property_names(ty, &mut names, 0);
        names
    }

    fn collect_property_names(&self, ty: TypeId, names: &mut Vec<String>, depth: u32) {
        if depth > MAX_PROPERTY_LOOKUP_DEPTH {
            return;
        }
        let Some(data) = self.types.get(ty) else {
            return;
        };
        match data {
            TypeData::Object(object) => {
                for name in object.properties.keys() {
                    if !names.contains(name) {
                        names.push(name.clone());
                    }
                }
                for &base in &object.base_types {
                    self.collect_property_names(base, names, depth + 1);
                }
            }
            TypeData::Union(types) | TypeData::Intersection(types) => {
                for &member in types {
                    self.collect_property_names(member, names, depth + 1);
                }
            }
            TypeData::TypeParameter {
                constraint: Some(constraint),
                ..
            } => self.collect_property_names(*constraint, names, depth + 1),
            _ => {
                if let Some(apparent) = self.apparent_type(ty).filter(|&apparent| apparent != ty) {
                    self.collect_property_names(apparent, names, depth + 1);
                }
            }
        }
    }
}

impl TypeChecker for Program {
    fn arena(&self) -> &NodeArena {
        &self.arena
    }

    fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id)
    }

    fn type_data(&self, id: TypeId) -> Option<&TypeData> {
        self.types.get(id)
    }

    fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    fn get_symbol_at_location(&self, node: NodeIndex) -> Option<SymbolId> {
        self.node_symbols.get(&node).copied()
    }

    fn get_aliased_symbol(&self, symbol: SymbolId) -> SymbolId {
        let mut current = symbol;
        for _ in 0..MAX_ALIAS_CHAIN {
            match self.symbols.get(current) {
                Some(sym) if sym.has_flags(symbol_flags::ALIAS) => match sym.alias_target {
                    Some(target) => current = target,
                    None => break,
                },
                _ => break,
            }
        }
        current
    }

    fn get_type_at_location(&self, node: NodeIndex) -> TypeId {
        if let Some(&ty) = self.node_types.get(&node) {
            return ty;
        }
        self.node_symbols
            .get(&node)
            .and_then(|symbol| self.symbol_types.get(symbol))
            .copied()
            .unwrap_or(TypeId::ANY)
    }

    fn get_contextual_type(&self, node: NodeIndex) -> Option<TypeId> {
        self.contextual_types.get(&node).copied()
    }

    fn get_property_of_type(&self, ty: TypeId, name: &str) -> Option<SymbolId> {
        self.property_at_depth(ty, name, 0)
    }

    fn get_return_type_of_declaration(&self, declaration: NodeIndex) -> Option<TypeId> {
        self.return_types.get(&declaration).copied()
    }

    fn source_files(&self) -> &[NodeIndex] {
        &self.source_files
    }

    fn get_source_file(&self, file_name: &str) -> Option<NodeIndex> {
        let wanted = normalize_path(file_name);
        self.source_files.iter().copied().find(|&source_file| {
            self.file_name(source_file)
                .is_some_and(|name| normalize_path(name) == wanted)
        })
    }

    fn get_exports_of_module(&self, module: SymbolId) -> Vec<SymbolId> {
        self.symbols
            .get(module)
            .map(|symbol| symbol.exports.values().copied().collect())
            .unwrap_or_default()
    }

    fn is_source_file_default_library(&self, source_file: NodeIndex) -> bool {
        self.arena
            .source_file_data(source_file)
            .is_some_and(|data| data.is_default_lib)
    }
}

/// Forward slashes, no leading `./`.
pub fn normalize_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    let mut trimmed = path.as_str();
    while let Some(rest) = trimmed.strip_prefix("./") {
        trimmed = rest;
    }
    trimmed.to_string()
}
