//! Bound program snapshots for the tsprops rename core.
//!
//! This crate provides the data the properties-rename transform reads:
//! - Arena AST (`NodeArena`, `NodeIndex`, `NodeData`)
//! - Symbols and symbol flags (`SymbolArena`, `SymbolId`)
//! - Structural types (`TypeTable`, `TypeId`, `TypeData`)
//! - The `TypeChecker` query trait and its `Program` implementation
//! - `ProgramBuilder` for assembling bound programs in code
//!
//! Programs are serializable, so a front end can bind a project once and hand
//! the snapshot over as JSON.

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

pub mod flags;
pub use flags::{internal_symbol_name, modifier_flags, object_flags, symbol_flags};

pub mod node;
pub use node::{Node, NodeArena, NodeData, NodeIndex, NodeList};

pub mod symbol;
pub use symbol::{Symbol, SymbolArena, SymbolId};

pub mod types;
pub use types::{IntrinsicKind, ObjectType, Signature, TypeData, TypeId, TypeTable};

pub mod checker;
pub use checker::TypeChecker;

pub mod limits;

pub mod program;
pub use program::{Program, PropertyLookup, normalize_path};

pub mod builder;
pub use builder::{BindingSpec, Destructuring, LibSymbols, ProgramBuilder};

#[cfg(test)]
#[path = "../tests/builder_tests.rs"]
mod builder_tests;

#[cfg(test)]
#[path = "../tests/program_tests.rs"]
mod program_tests;
