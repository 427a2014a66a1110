//! TypeScript printer for tsprops programs.
//!
//! The rename core never mutates the program. This crate prints a source file
//! back to TypeScript, consulting a [`RenameContext`] so renamed identifiers,
//! string keys and expanded shorthands come out with their new names.

pub mod printer;
pub use printer::Printer;

use tsprops_program::{NodeData, Program};
use tsprops_rename::RenameContext;

/// Printed text of one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFile {
    pub file_name: String,
    pub text: String,
}

/// Print every file that has a rename context.
///
/// Files without a context (declaration files, default libs) are not printed.
#[tracing::instrument(level = "debug", skip_all, fields(files = contexts.len()))]
pub fn emit_program(program: &Program, contexts: &[RenameContext]) -> Vec<EmittedFile> {
    contexts
        .iter()
        .filter(|context| {
            matches!(
                program.arena.get(context.source_file()).map(|n| &n.data),
                Some(NodeData::SourceFile(_))
            )
        })
        .map(|context| {
            let text = Printer::with_renames(&program.arena, context).print_source_file(context.source_file());
            tracing::trace!(file = context.file_name(), renames = context.len(), "emitted");
            EmittedFile {
                file_name: context.file_name().to_string(),
                text,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../tests/printer_tests.rs"]
mod printer_tests;
