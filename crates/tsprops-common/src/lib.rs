//! Common types shared by all tsprops crates.
//!
//! - Rename configuration (`RenameOptions`)
//! - Visibility tiers (`VisibilityType`)
//! - Fatal rename errors (`RenameError`)

// Rename configuration with defaults and partial overrides
pub mod options;
pub use options::RenameOptions;

// Visibility tiers
pub mod visibility;
pub use visibility::VisibilityType;

// Fatal errors raised by the rename core
pub mod diagnostics;
pub use diagnostics::{RenameError, RenameResult};

#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod options_tests;
