//! The queries the rename core needs from a bound and checked program.

use crate::node::{NodeArena, NodeIndex};
use crate::symbol::{Symbol, SymbolId};
use crate::types::{TypeData, TypeId};

/// Read-only view of a type-checked program.
///
/// Implemented by [`crate::Program`]. Any front end that can answer these
/// queries can drive the rename core.
pub trait TypeChecker {
    fn arena(&self) -> &NodeArena;

    fn symbol(&self, id: SymbolId) -> Option<&Symbol>;

    fn type_data(&self, id: TypeId) -> Option<&TypeData>;

    /// Number of allocated symbols. Symbol ids are dense in `0..symbol_count()`.
    fn symbol_count(&self) -> usize;

    /// Symbol a node refers to or declares.
    fn get_symbol_at_location(&self, node: NodeIndex) -> Option<SymbolId>;

    /// Follow an alias chain to the aliased symbol.
    fn get_aliased_symbol(&self, symbol: SymbolId) -> SymbolId;

    /// Type of an expression or declaration. Unknown nodes have type `any`.
    fn get_type_at_location(&self, node: NodeIndex) -> TypeId;

    /// Contextual type of an expression, e.g. the declared type an object
    /// literal is assigned to.
    fn get_contextual_type(&self, node: NodeIndex) -> Option<TypeId>;

    /// Property lookup on a type, including union, intersection and base types.
    fn get_property_of_type(&self, ty: TypeId, name: &str) -> Option<SymbolId>;

    /// Return type of the signature declared by a function-like node.
    fn get_return_type_of_declaration(&self, declaration: NodeIndex) -> Option<TypeId>;

    fn source_files(&self) -> &[NodeIndex];

    /// Source file node for a file name.
    fn get_source_file(&self, file_name: &str) -> Option<NodeIndex>;

    /// Exported symbols of a module symbol.
    fn get_exports_of_module(&self, module: SymbolId) -> Vec<SymbolId>;

    fn is_source_file_default_library(&self, source_file: NodeIndex) -> bool;
}
