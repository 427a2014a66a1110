//! Properties rename core.
//!
//! - `ExportGraph`: symbols reachable from the entry files' exports
//! - `VisibilityClassifier` + `VisibilityCache`: Internal / Private / External tiers
//! - `Occurrence`: the places a property name can appear
//! - `RenamePass`: per-file walk producing a `RenameContext` of directives
//! - `PropertiesRenameTransformer`: one session over a whole program

pub mod symbol_helpers;

pub mod export_graph;
pub use export_graph::ExportGraph;

pub mod cache;
pub use cache::VisibilityCache;

pub mod classifier;
pub use classifier::VisibilityClassifier;

pub mod occurrence;
pub use occurrence::Occurrence;

pub mod context;
pub use context::{RenameContext, RenameDirective, RenameEdit, apply_all};

pub mod pass;
pub use pass::RenamePass;

pub mod transformer;
pub use transformer::{PropertiesRenameTransformer, properties_rename_transformer};

#[cfg(test)]
#[path = "../tests/fixtures.rs"]
mod fixtures;

#[cfg(test)]
#[path = "../tests/export_graph_tests.rs"]
mod export_graph_tests;

#[cfg(test)]
#[path = "../tests/classifier_tests.rs"]
mod classifier_tests;

#[cfg(test)]
#[path = "../tests/rename_pass_tests.rs"]
mod rename_pass_tests;
