//! Rename configuration.
//!
//! Every field has a default, so a JSON object carrying any subset of the
//! options deserializes into a complete `RenameOptions`.

use crate::diagnostics::{RenameError, RenameResult};
use crate::visibility::VisibilityType;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PRIVATE_PREFIX: &str = "_private_";
pub const DEFAULT_INTERNAL_PREFIX: &str = "_internal_";
pub const DEFAULT_PUBLIC_JSDOC_TAG: &str = "public";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenameOptions {
    /// Entry points of the library. Their exports define the public surface.
    /// An empty list means nothing is external through reachability.
    pub entry_source_files: Vec<String>,
    /// Prefix for renamed class-private names.
    pub private_prefix: String,
    /// Prefix for every other renamed name.
    pub internal_prefix: String,
    /// JSDoc tag (without `@`) that marks a declaration and everything nested
    /// in it as external. Empty disables the override.
    #[serde(rename = "publicJSDocTag")]
    pub public_jsdoc_tag: String,
}

impl Default for RenameOptions {
    fn default() -> Self {
        RenameOptions {
            entry_source_files: Vec::new(),
            private_prefix: DEFAULT_PRIVATE_PREFIX.to_string(),
            internal_prefix: DEFAULT_INTERNAL_PREFIX.to_string(),
            public_jsdoc_tag: DEFAULT_PUBLIC_JSDOC_TAG.to_string(),
        }
    }
}

impl RenameOptions {
    pub fn with_entry_source_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entry_source_files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Prefix applied to a name of the given tier.
    pub fn prefix_for(&self, visibility: VisibilityType) -> &str {
        match visibility {
            VisibilityType::Private => &self.private_prefix,
            _ => &self.internal_prefix,
        }
    }

    /// New name for `original`. External names keep their original spelling.
    pub fn new_name(&self, original: &str, visibility: VisibilityType) -> String {
        if visibility.is_external() {
            return original.to_string();
        }
        let prefix = self.prefix_for(visibility);
        let mut name = String::with_capacity(prefix.len() + original.len());
        name.push_str(prefix);
        name.push_str(original);
        name
    }

    /// The `@tag` marker searched for in JSDoc text, or `None` when disabled.
    pub fn public_jsdoc_marker(&self) -> Option<String> {
        if self.public_jsdoc_tag.is_empty() {
            None
        } else {
            Some(format!("@{}", self.public_jsdoc_tag))
        }
    }

    /// Reject prefixes that would turn identifiers into invalid ones.
    pub fn validate(&self) -> RenameResult<()> {
        validate_prefix("privatePrefix", &self.private_prefix)?;
        validate_prefix("internalPrefix", &self.internal_prefix)?;
        if self.public_jsdoc_tag.chars().any(char::is_whitespace) {
            return Err(RenameError::InvalidOption {
                option: "publicJSDocTag",
                value: self.public_jsdoc_tag.clone(),
                reason: "tag names cannot contain whitespace",
            });
        }
        Ok(())
    }
}

fn validate_prefix(option: &'static str, prefix: &str) -> RenameResult<()> {
    let mut chars = prefix.chars();
    let Some(first) = chars.next() else {
        return Ok(());
    };
    if !is_identifier_start(first) {
        return Err(RenameError::InvalidOption {
            option,
            value: prefix.to_string(),
            reason: "prefix must start with a letter, '_' or '$'",
        });
    }
    if !chars.all(is_identifier_part) {
        return Err(RenameError::InvalidOption {
            option,
            value: prefix.to_string(),
            reason: "prefix may only contain identifier characters",
        });
    }
    Ok(())
}

fn is_identifier_start(ch: char) -> bool {
    ch == '_' || ch == '$' || ch.is_alphabetic()
}

fn is_identifier_part(ch: char) -> bool {
    is_identifier_start(ch) || ch.is_alphanumeric()
}
