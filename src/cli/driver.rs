use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use crate::cli::args::CliArgs;
use crate::cli::config;
use tsprops_emitter::{EmittedFile, emit_program};
use tsprops_program::Program;
use tsprops_rename::{PropertiesRenameTransformer, RenameContext};

/// Result of one CLI run.
#[derive(Debug)]
pub struct RunOutcome {
    pub files: Vec<EmittedFile>,
    pub contexts: Vec<RenameContext>,
}

impl RunOutcome {
    pub fn rename_count(&self) -> usize {
        self.contexts.iter().map(|context| context.edits().len()).sum()
    }
}

pub fn load_program(path: &Path) -> Result<Program> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read program snapshot: {}", path.display()))?;
    Program::from_json(&source)
        .with_context(|| format!("failed to parse program snapshot: {}", path.display()))
}

/// Load, rename and print. Nothing is written here, see [`write_outputs`].
pub fn run(args: &CliArgs) -> Result<RunOutcome> {
    let options = config::resolve_options(args)?;
    let program = load_program(&args.program)?;
    run_program(&program, options)
}

#[tracing::instrument(level = "debug", skip_all, fields(files = program.source_files.len()))]
pub fn run_program(program: &Program, options: tsprops_common::RenameOptions) -> Result<RunOutcome> {
    let mut transformer = PropertiesRenameTransformer::new(program, options)?;
    let contexts = transformer.transform_program()?;
    let files = emit_program(program, &contexts);
    tracing::debug!(
        files = files.len(),
        classified = transformer.cache().len(),
        "rename run finished"
    );
    Ok(RunOutcome { files, contexts })
}

/// Write printed files under `out_dir`, or concatenate them to `stdout` with a
/// `// <file name>` header line each.
pub fn write_outputs(files: &[EmittedFile], out_dir: Option<&Path>, stdout: &mut dyn Write) -> Result<()> {
    match out_dir {
        Some(dir) => {
            for file in files {
                let path = output_path(dir, &file.file_name)?;
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create directory: {}", parent.display()))?;
                }
                std::fs::write(&path, &file.text)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                tracing::debug!(path = %path.display(), "wrote file");
            }
        }
        None => {
            for file in files {
                writeln!(stdout, "// {}", file.file_name).context("failed to write to stdout")?;
                stdout
                    .write_all(file.text.as_bytes())
                    .context("failed to write to stdout")?;
            }
        }
    }
    Ok(())
}

/// `file_name` relative to `out_dir`. Root and prefix components are dropped so
/// absolute snapshot paths land inside the output directory.
pub fn output_path(out_dir: &Path, file_name: &str) -> Result<PathBuf> {
    let mut path = out_dir.to_path_buf();
    for component in Path::new(file_name).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
            Component::ParentDir => bail!("refusing to write outside the output directory: {file_name}"),
        }
    }
    if path == out_dir {
        bail!("source file has an empty name");
    }
    Ok(path)
}
