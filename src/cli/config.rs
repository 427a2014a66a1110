use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::args::CliArgs;
use tsprops_common::RenameOptions;

/// Parse a rename options file. Missing keys keep their defaults.
pub fn parse_rename_options(source: &str) -> Result<RenameOptions> {
    let options = serde_json::from_str(source).context("failed to parse rename options JSON")?;
    Ok(options)
}

pub fn load_rename_options(path: &Path) -> Result<RenameOptions> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read rename options: {}", path.display()))?;
    parse_rename_options(&source)
        .with_context(|| format!("failed to parse rename options: {}", path.display()))
}

/// Options from `--config` (or defaults) with command-line overrides applied,
/// validated.
pub fn resolve_options(args: &CliArgs) -> Result<RenameOptions> {
    let mut options = match &args.config {
        Some(path) => load_rename_options(path)?,
        None => RenameOptions::default(),
    };
    apply_cli_overrides(&mut options, args);
    options.validate().context("invalid rename options")?;
    tracing::debug!(
        entries = options.entry_source_files.len(),
        private_prefix = %options.private_prefix,
        internal_prefix = %options.internal_prefix,
        "resolved rename options"
    );
    Ok(options)
}

pub fn apply_cli_overrides(options: &mut RenameOptions, args: &CliArgs) {
    if !args.entries.is_empty() {
        options.entry_source_files.clone_from(&args.entries);
    }
    if let Some(prefix) = &args.private_prefix {
        options.private_prefix.clone_from(prefix);
    }
    if let Some(prefix) = &args.internal_prefix {
        options.internal_prefix.clone_from(prefix);
    }
    if let Some(tag) = &args.public_jsdoc_tag {
        options.public_jsdoc_tag.clone_from(tag);
    }
}
