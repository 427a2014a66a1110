//! Whole-run session: validated options, the export graph and the
//! classification cache, shared by every file of one program.

use crate::cache::VisibilityCache;
use crate::classifier::VisibilityClassifier;
use crate::context::RenameContext;
use crate::export_graph::ExportGraph;
use crate::pass::RenamePass;
use tracing::{debug, info_span};
use tsprops_common::{RenameOptions, RenameResult, VisibilityType};
use tsprops_program::{NodeIndex, SymbolId, TypeChecker};

pub struct PropertiesRenameTransformer<'a> {
    checker: &'a dyn TypeChecker,
    options: RenameOptions,
    graph: ExportGraph,
    cache: VisibilityCache,
}

/// Validate `options`, build the export graph and return a transformer ready
/// to rewrite source files of `checker`'s program.
pub fn properties_rename_transformer(
    checker: &dyn TypeChecker,
    options: RenameOptions,
) -> RenameResult<PropertiesRenameTransformer<'_>> {
    PropertiesRenameTransformer::new(checker, options)
}

impl<'a> PropertiesRenameTransformer<'a> {
    pub fn new(checker: &'a dyn TypeChecker, options: RenameOptions) -> RenameResult<Self> {
        options.validate()?;
        let graph = ExportGraph::build(checker, &options.entry_source_files)?;
        Ok(PropertiesRenameTransformer {
            checker,
            options,
            graph,
            cache: VisibilityCache::new(),
        })
    }

    pub fn options(&self) -> &RenameOptions {
        &self.options
    }

    pub fn export_graph(&self) -> &ExportGraph {
        &self.graph
    }

    pub fn cache(&self) -> &VisibilityCache {
        &self.cache
    }

    /// Classifier over this session's graph and cache.
    pub fn classifier(&mut self) -> VisibilityClassifier<'_> {
        VisibilityClassifier::new(self.checker, &self.options, &self.graph, &mut self.cache)
    }

    pub fn classify_symbol(&mut self, symbol: SymbolId) -> VisibilityType {
        self.classifier().symbol_visibility(symbol)
    }

    pub fn transform_source_file(&mut self, source_file: NodeIndex) -> RenameResult<RenameContext> {
        let classifier =
            VisibilityClassifier::new(self.checker, &self.options, &self.graph, &mut self.cache);
        RenamePass::new(&self.options, classifier).run(source_file)
    }

    /// Rewrite every project source file. Declaration files and default
    /// libraries are skipped. The first error aborts the whole program.
    pub fn transform_program(&mut self) -> RenameResult<Vec<RenameContext>> {
        let checker = self.checker;
        let arena = checker.arena();
        let _span = info_span!("transform_program", files = checker.source_files().len()).entered();

        let mut contexts = Vec::new();
        for &source_file in checker.source_files() {
            let is_declaration = arena
                .source_file_data(source_file)
                .is_none_or(|data| data.is_declaration_file);
            if is_declaration || checker.is_source_file_default_library(source_file) {
                continue;
            }
            let context = self.transform_source_file(source_file)?;
            debug!(
                file = context.file_name(),
                renamed = context.len(),
                "file transformed"
            );
            contexts.push(context);
        }
        Ok(contexts)
    }
}
