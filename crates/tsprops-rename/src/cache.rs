//! Memoized classification results for one rename run.
//!
//! The cache is created with the transformer and dropped with it. Nothing is
//! shared across runs, so a single-owner map is enough.

use rustc_hash::FxHashMap;
use tsprops_common::VisibilityType;
use tsprops_program::SymbolId;

#[derive(Debug, Default)]
pub struct VisibilityCache {
    entries: FxHashMap<SymbolId, VisibilityType>,
}

impl VisibilityCache {
    pub fn new() -> Self {
        VisibilityCache {
            entries: FxHashMap::default(),
        }
    }

    pub fn get(&self, symbol: SymbolId) -> Option<VisibilityType> {
        self.entries.get(&symbol).copied()
    }

    /// Record a classification and return it.
    pub fn insert(&mut self, symbol: SymbolId, visibility: VisibilityType) -> VisibilityType {
        self.entries.insert(symbol, visibility);
        visibility
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, VisibilityType)> + '_ {
        self.entries.iter().map(|(&symbol, &visibility)| (symbol, visibility))
    }
}
