//! Symbol table.
//!
//! Symbols are the canonical identity of declared entities. A symbol may be an
//! alias (import/export specifier) that resolves to another symbol, or a
//! transient symbol synthesized by the checker for a union, intersection or
//! mapped type property, whose declarations belong to other symbols.

use crate::flags::symbol_flags;
use crate::node::NodeIndex;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Index of a symbol in the [`SymbolArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolId(pub u32);

impl SymbolId {
    pub const NONE: SymbolId = SymbolId(u32::MAX);

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Symbol {
    pub flags: u32,
    pub escaped_name: String,
    pub declarations: Vec<NodeIndex>,
    pub value_declaration: NodeIndex,
    /// Instance members of classes, interfaces, type and object literals.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub members: IndexMap<String, SymbolId>,
    /// Module exports and static members.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub exports: IndexMap<String, SymbolId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<SymbolId>,
    /// Target of an alias symbol.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_target: Option<SymbolId>,
}

impl Symbol {
    pub fn new(flags: u32, escaped_name: impl Into<String>) -> Symbol {
        Symbol {
            flags,
            escaped_name: escaped_name.into(),
            declarations: Vec::new(),
            value_declaration: NodeIndex::NONE,
            members: IndexMap::new(),
            exports: IndexMap::new(),
            parent: None,
            alias_target: None,
        }
    }

    #[inline]
    pub const fn has_flags(&self, flags: u32) -> bool {
        self.flags & flags != 0
    }

    pub const fn is_alias(&self) -> bool {
        self.has_flags(symbol_flags::ALIAS)
    }

    pub const fn is_transient(&self) -> bool {
        self.has_flags(symbol_flags::TRANSIENT)
    }

    pub fn add_declaration(&mut self, declaration: NodeIndex, is_value: bool) {
        if !self.declarations.contains(&declaration) {
            self.declarations.push(declaration);
        }
        if is_value && self.value_declaration.is_none() {
            self.value_declaration = declaration;
        }
    }
}

/// Arena of symbols, indexed by [`SymbolId`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SymbolArena {
    symbols: Vec<Symbol>,
}

impl SymbolArena {
    pub fn new() -> SymbolArena {
        SymbolArena {
            symbols: Vec::new(),
        }
    }

    pub fn alloc(&mut self, symbol: Symbol) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(symbol);
        id
    }

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.index())
    }

    pub fn get_mut(&mut self, id: SymbolId) -> Option<&mut Symbol> {
        self.symbols.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.symbols
            .iter()
            .enumerate()
            .map(|(i, symbol)| (SymbolId(i as u32), symbol))
    }
}
