//! Rename pass: walks a source file and records a directive for every
//! property name that is not external.
//!
//! The walk is pre-order over every node, type nodes included, driven by an
//! explicit stack. Nothing in the program is modified; the result is a
//! [`RenameContext`].

use crate::classifier::VisibilityClassifier;
use crate::context::{RenameContext, RenameDirective, RenameEdit};
use crate::occurrence::Occurrence;
use crate::symbol_helpers::split_transient_symbol;
use tracing::{debug, trace};
use tsprops_common::{RenameError, RenameOptions, RenameResult, VisibilityType};
use tsprops_program::{NodeData, NodeIndex, TypeChecker, TypeData};

pub struct RenamePass<'a> {
    checker: &'a dyn TypeChecker,
    options: &'a RenameOptions,
    classifier: VisibilityClassifier<'a>,
    context: RenameContext,
}

impl<'a> RenamePass<'a> {
    pub fn new(options: &'a RenameOptions, classifier: VisibilityClassifier<'a>) -> Self {
        RenamePass {
            checker: classifier.checker(),
            options,
            classifier,
            context: RenameContext::default(),
        }
    }

    /// Rename every site in `source_file`. The first error aborts the file.
    #[tracing::instrument(level = "debug", skip_all, fields(source_file = source_file.0))]
    pub fn run(mut self, source_file: NodeIndex) -> RenameResult<RenameContext> {
        let checker = self.checker;
        let arena = checker.arena();
        self.context = RenameContext::new(source_file, arena.file_name_of(source_file));

        let mut stack = vec![source_file];
        let mut visited = 0usize;
        while let Some(node) = stack.pop() {
            visited += 1;
            if let Some(occurrence) = Occurrence::detect(checker, node) {
                self.rename(occurrence)?;
            }
            stack.extend(arena.get_children(node).into_iter().rev());
        }

        debug!(
            nodes = visited,
            renamed = self.context.len(),
            cached = self.classifier.cache().len(),
            "rename pass finished"
        );
        Ok(self.context)
    }

    fn rename(&mut self, occurrence: Occurrence) -> RenameResult<()> {
        match occurrence {
            Occurrence::InOperand(literal) => self.rename_in_operand(literal),
            Occurrence::ShorthandProperty(assignment) => {
                let name = self.shorthand_name(assignment);
                let visibility = self.classifier.node_visibility(name)?;
                self.rename_with(occurrence, name, visibility, |property_name| {
                    RenameDirective::ExpandShorthandProperty { property_name }
                })
            }
            Occurrence::ShorthandBinding(element) => {
                let checker = self.checker;
                let arena = checker.arena();
                let name = match arena.get(element).map(|n| &n.data) {
                    Some(NodeData::BindingElement(binding)) => binding.name,
                    _ => NodeIndex::NONE,
                };
                // Nested patterns are walked on their own.
                if arena.identifier_text(name).is_none() {
                    return Ok(());
                }
                let visibility = self.classifier.node_visibility(element)?;
                self.rename_with(occurrence, name, visibility, |property_name| {
                    RenameDirective::ExpandShorthandBinding { property_name }
                })
            }
            Occurrence::ElementAccessKey(literal) => {
                let visibility = self.classifier.node_visibility(literal)?;
                self.rename_with(occurrence, literal, visibility, |new_text| {
                    RenameDirective::StringLiteral { new_text }
                })
            }
            Occurrence::PropertyAccessName(name)
            | Occurrence::ClassMemberName(name)
            | Occurrence::EnumMemberName(name)
            | Occurrence::PropertyAssignmentName(name)
            | Occurrence::BindingPropertyName(name)
            | Occurrence::ConstructorParameter(name) => {
                let visibility = self.classifier.node_visibility(name)?;
                self.rename_with(occurrence, name, visibility, |new_name| {
                    RenameDirective::Identifier { new_name }
                })
            }
        }
    }

    /// Record a rename of `occurrence` whose new name derives from the symbol
    /// at `symbol_node`.
    fn rename_with(
        &mut self,
        occurrence: Occurrence,
        symbol_node: NodeIndex,
        visibility: VisibilityType,
        directive: impl FnOnce(String) -> RenameDirective,
    ) -> RenameResult<()> {
        if visibility.is_external() {
            return Ok(());
        }
        let checker = self.checker;
        let arena = checker.arena();
        let symbol = checker
            .get_symbol_at_location(symbol_node)
            .and_then(|symbol| checker.symbol(symbol).map(|sym| (symbol, sym)));
        let Some((symbol, sym)) = symbol else {
            return Err(RenameError::UnresolvedSymbol {
                name: arena.property_name_text(symbol_node).unwrap_or_default().to_string(),
                file_name: arena.file_name_of(symbol_node).to_string(),
            });
        };

        let original = sym.escaped_name.clone();
        let renamed = self.options.new_name(&original, visibility);
        trace!(
            kind = occurrence.label(),
            from = %original,
            to = %renamed,
            %visibility,
            "rename"
        );
        let node = occurrence.node();
        self.context.insert(
            node,
            directive(renamed.clone()),
            RenameEdit {
                node,
                symbol: Some(symbol),
                original,
                renamed,
                visibility,
            },
        );
        Ok(())
    }

    /// `'name' in obj`: the key must have a string literal type. It is renamed
    /// unless the right operand's type exposes `name` externally, and takes the
    /// tier of the property it names so it matches the member's declaration.
    fn rename_in_operand(&mut self, literal: NodeIndex) -> RenameResult<()> {
        let checker = self.checker;
        let arena = checker.arena();
        let binary = arena.parent(literal);
        let key_type = checker.get_type_at_location(literal);
        let Some(property_name) = checker
            .type_data(key_type)
            .and_then(TypeData::string_literal_value)
        else {
            return Err(RenameError::NonLiteralInOperand {
                text: arena.literal_text(literal).unwrap_or_default().to_string(),
                file_name: arena.file_name_of(literal).to_string(),
            });
        };

        let right = match arena.get(binary).map(|n| &n.data) {
            Some(NodeData::BinaryExpr(data)) => data.right,
            _ => NodeIndex::NONE,
        };
        let right_type = checker.get_type_at_location(right);
        if self.classifier.is_type_property_external(right_type, property_name) {
            return Ok(());
        }

        let property = checker.get_property_of_type(right_type, property_name);
        let visibility = match property {
            Some(property) => split_transient_symbol(checker, property)
                .into_iter()
                .fold(VisibilityType::Internal, |tier, declared| {
                    tier.join(self.classifier.symbol_visibility(declared))
                }),
            None => VisibilityType::Internal,
        };
        if visibility.is_external() {
            return Ok(());
        }
        let renamed = self.options.new_name(property_name, visibility);
        trace!(kind = "in operand", from = %property_name, to = %renamed, %visibility, "rename");
        self.context.insert(
            literal,
            RenameDirective::StringLiteral {
                new_text: renamed.clone(),
            },
            RenameEdit {
                node: literal,
                symbol: property,
                original: property_name.to_string(),
                renamed,
                visibility,
            },
        );
        Ok(())
    }

    fn shorthand_name(&self, assignment: NodeIndex) -> NodeIndex {
        match self.checker.arena().get(assignment).map(|n| &n.data) {
            Some(NodeData::ShorthandPropertyAssignment(shorthand)) => shorthand.name,
            _ => NodeIndex::NONE,
        }
    }
}
