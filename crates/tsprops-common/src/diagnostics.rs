//! Errors that abort a rename run.
//!
//! Everything the core can absorb into a conservative classification is not an
//! error. The variants below are the conditions where renaming would have to guess.

use std::fmt;

/// A fatal condition encountered while building the export graph or rewriting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameError {
    /// A configured entry source file is not part of the program.
    EntrySourceFileNotFound { file_name: String },
    /// A rename site has no symbol to derive the new name from.
    UnresolvedSymbol { name: String, file_name: String },
    /// The left operand of an `in` expression is not a string literal type.
    NonLiteralInOperand { text: String, file_name: String },
    /// A shorthand binding lookup was asked about `{ prop: local }`.
    NamedBindingElement { name: String, file_name: String },
    /// A configuration value cannot be used.
    InvalidOption {
        option: &'static str,
        value: String,
        reason: &'static str,
    },
}

pub type RenameResult<T> = Result<T, RenameError>;

impl fmt::Display for RenameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameError::EntrySourceFileNotFound { file_name } => {
                write!(f, "Cannot find source file for entry '{file_name}'")
            }
            RenameError::UnresolvedSymbol { name, file_name } => {
                write!(f, "Cannot get symbol for node \"{name}\" in {file_name}")
            }
            RenameError::NonLiteralInOperand { text, file_name } => {
                write!(
                    f,
                    "Can't get type for left expression in `{text}` in {file_name}"
                )
            }
            RenameError::NamedBindingElement { name, file_name } => {
                write!(
                    f,
                    "Cannot handle binding element with property name: {name} in {file_name}"
                )
            }
            RenameError::InvalidOption {
                option,
                value,
                reason,
            } => write!(f, "Invalid value '{value}' for option '{option}': {reason}"),
        }
    }
}

impl std::error::Error for RenameError {}
