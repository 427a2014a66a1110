//! tsprops: prefix-renames TypeScript properties that are not part of a
//! library's public surface.
//!
//! The pipeline is split across the workspace crates and re-exported here:
//! - `tsprops-program`: bound program snapshot and `ProgramBuilder`
//! - `tsprops-rename`: export graph, visibility classifier and rename pass
//! - `tsprops-emitter`: prints rewritten files back to TypeScript

pub use tsprops_common::{RenameError, RenameOptions, RenameResult, VisibilityType};
pub use tsprops_emitter::{EmittedFile, Printer, emit_program};
pub use tsprops_program::{NodeArena, NodeIndex, Program, ProgramBuilder, SymbolId, TypeChecker};
pub use tsprops_rename::{
    ExportGraph, PropertiesRenameTransformer, RenameContext, RenameDirective, RenameEdit,
    VisibilityCache, VisibilityClassifier, apply_all, properties_rename_transformer,
};

pub mod tracing_config;

#[cfg(feature = "cli")]
pub mod cli;

/// Rename every transformable file of `program` and print the results.
///
/// Aborts on the first error; nothing is printed for a failed run.
pub fn rename_program(program: &Program, options: RenameOptions) -> RenameResult<Vec<EmittedFile>> {
    let contexts = PropertiesRenameTransformer::new(program, options)?.transform_program()?;
    Ok(emit_program(program, &contexts))
}
