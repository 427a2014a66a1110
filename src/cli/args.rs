use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the tsprops binary.
#[derive(Parser, Debug)]
#[command(
    name = "tsprops",
    version,
    about = "Prefix-renames TypeScript properties that are not part of the public API"
)]
pub struct CliArgs {
    /// Bound program snapshot (JSON) to rewrite.
    #[arg(short = 'p', long)]
    pub program: PathBuf,

    /// JSON file with rename options (`entrySourceFiles`, `privatePrefix`, ...).
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    // ==================== Option overrides ====================
    /// Entry source file defining the public surface. Repeatable; replaces
    /// the configured list when given.
    #[arg(short = 'e', long = "entry", alias = "entrySourceFiles")]
    pub entries: Vec<String>,

    /// Prefix for renamed class-private members.
    #[arg(long = "private-prefix", alias = "privatePrefix")]
    pub private_prefix: Option<String>,

    /// Prefix for every other renamed member.
    #[arg(long = "internal-prefix", alias = "internalPrefix")]
    pub internal_prefix: Option<String>,

    /// JSDoc tag that keeps a declaration and its members unrenamed. Pass an
    /// empty string to disable.
    #[arg(long = "public-jsdoc-tag", alias = "publicJSDocTag")]
    pub public_jsdoc_tag: Option<String>,

    // ==================== Output ====================
    /// Write each rewritten file under this directory instead of stdout.
    #[arg(short = 'o', long = "out-dir", alias = "outDir")]
    pub out_dir: Option<PathBuf>,

    /// Print a per-file summary of applied renames to stderr.
    #[arg(long)]
    pub report: bool,

    /// Disable colors in the report.
    #[arg(long = "no-color")]
    pub no_color: bool,
}
