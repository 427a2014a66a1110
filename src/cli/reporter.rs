use colored::Colorize;
use rustc_hash::FxHashMap;

use tsprops_common::VisibilityType;
use tsprops_rename::RenameContext;

/// Renders the per-file rename summary printed by `--report`.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    pub fn render(&self, contexts: &[RenameContext]) -> String {
        let mut out = String::new();
        for context in contexts {
            out.push_str(&self.format_file(context));
        }
        out
    }

    /// Header line plus one line per distinct rename, in first-seen order.
    pub fn format_file(&self, context: &RenameContext) -> String {
        let mut order: Vec<(&str, &str, VisibilityType)> = Vec::new();
        let mut counts: FxHashMap<(&str, &str), usize> = FxHashMap::default();
        for edit in context.edits() {
            let key = (edit.original.as_str(), edit.renamed.as_str());
            let count = counts.entry(key).or_insert(0);
            if *count == 0 {
                order.push((key.0, key.1, edit.visibility));
            }
            *count += 1;
        }

        let header = format!(
            "{}: {} rename{}",
            context.file_name(),
            context.edits().len(),
            if context.edits().len() == 1 { "" } else { "s" }
        );
        let mut output = if self.color {
            header.bold().to_string()
        } else {
            header
        };
        output.push('\n');

        for (original, renamed, visibility) in order {
            let count = counts.get(&(original, renamed)).copied().unwrap_or(0);
            output.push_str("  ");
            output.push_str(original);
            output.push_str(" -> ");
            output.push_str(renamed);
            output.push_str(" (");
            output.push_str(&self.format_visibility(visibility));
            output.push(')');
            if count > 1 {
                output.push_str(&format!(" x{count}"));
            }
            output.push('\n');
        }
        output
    }

    fn format_visibility(&self, visibility: VisibilityType) -> String {
        let label = visibility.as_str();
        if !self.color {
            return label.to_string();
        }
        match visibility {
            VisibilityType::Private => label.yellow().to_string(),
            VisibilityType::Internal => label.cyan().to_string(),
            VisibilityType::External => label.green().to_string(),
        }
    }
}
