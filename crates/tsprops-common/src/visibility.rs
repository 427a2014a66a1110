//! Visibility tiers assigned to symbols by the classifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How far a symbol is visible, which decides whether and how it gets renamed.
///
/// `External` wins whenever two classification paths disagree: a symbol that is
/// external along any path is never renamed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VisibilityType {
    /// Project-local, not reachable from the public surface.
    Internal,
    /// Class-private member or private constructor parameter property.
    Private,
    /// Part of the public surface or owned by an external declaration.
    External,
}

impl VisibilityType {
    #[inline]
    pub const fn is_external(self) -> bool {
        matches!(self, VisibilityType::External)
    }

    /// Combine two classifications of the same name.
    pub const fn join(self, other: VisibilityType) -> VisibilityType {
        match (self, other) {
            (VisibilityType::External, _) | (_, VisibilityType::External) => {
                VisibilityType::External
            }
            (VisibilityType::Private, _) | (_, VisibilityType::Private) => VisibilityType::Private,
            _ => VisibilityType::Internal,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            VisibilityType::Internal => "internal",
            VisibilityType::Private => "private",
            VisibilityType::External => "external",
        }
    }
}

impl fmt::Display for VisibilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
