#![allow(clippy::print_stderr)]

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;

use tsprops::cli::args::CliArgs;
use tsprops::cli::{driver, reporter::Reporter};

fn main() -> Result<()> {
    // Initialize tracing if TSPROPS_LOG or RUST_LOG is set.
    // Supports TSPROPS_LOG_FORMAT=tree|json|text (see src/tracing_config.rs).
    tsprops::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let outcome = driver::run(&args)?;

    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    driver::write_outputs(&outcome.files, args.out_dir.as_deref(), &mut lock)?;

    if args.report {
        let color = !args.no_color && std::io::stderr().is_terminal();
        eprint!("{}", Reporter::new(color).render(&outcome.contexts));
    }
    Ok(())
}
