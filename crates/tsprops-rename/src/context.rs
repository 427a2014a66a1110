//! Rename directives for one source file.
//!
//! The rename pass never mutates the program. It records a directive per
//! rewritten node; the printer consults them while emitting, or
//! [`RenameContext::apply_to`] materializes them into a copy of the arena.

use rustc_hash::FxHashMap;
use tsprops_common::VisibilityType;
use tsprops_program::node::{IdentifierData, PropertyAssignmentData};
use tsprops_program::{Node, NodeArena, NodeData, NodeIndex, SymbolId, SyntaxKind};

/// How a node is emitted after renaming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameDirective {
    /// Identifier printed with a new name.
    Identifier { new_name: String },
    /// String literal printed with a new value, same quotes.
    StringLiteral { new_text: String },
    /// `{ name }` becomes `{ property_name: name }`.
    ExpandShorthandProperty { property_name: String },
    /// `{ name } = obj` becomes `{ property_name: name } = obj`.
    ExpandShorthandBinding { property_name: String },
}

impl RenameDirective {
    pub fn new_name(&self) -> &str {
        match self {
            RenameDirective::Identifier { new_name } => new_name,
            RenameDirective::StringLiteral { new_text } => new_text,
            RenameDirective::ExpandShorthandProperty { property_name }
            | RenameDirective::ExpandShorthandBinding { property_name } => property_name,
        }
    }
}

/// One applied rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEdit {
    pub node: NodeIndex,
    /// Symbol the new name was derived from. `None` for `in` operands, whose
    /// name comes from the literal type.
    pub symbol: Option<SymbolId>,
    pub original: String,
    pub renamed: String,
    pub visibility: VisibilityType,
}

#[derive(Debug, Clone, Default)]
pub struct RenameContext {
    source_file: NodeIndex,
    file_name: String,
    directives: FxHashMap<NodeIndex, RenameDirective>,
    edits: Vec<RenameEdit>,
}

impl RenameContext {
    pub fn new(source_file: NodeIndex, file_name: impl Into<String>) -> Self {
        RenameContext {
            source_file,
            file_name: file_name.into(),
            directives: FxHashMap::default(),
            edits: Vec::new(),
        }
    }

    pub fn source_file(&self) -> NodeIndex {
        self.source_file
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn insert(&mut self, node: NodeIndex, directive: RenameDirective, edit: RenameEdit) {
        self.directives.insert(node, directive);
        self.edits.push(edit);
    }

    pub fn get(&self, node: NodeIndex) -> Option<&RenameDirective> {
        self.directives.get(&node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeIndex, &RenameDirective)> {
        self.directives.iter()
    }

    /// Edits in traversal order.
    pub fn edits(&self) -> &[RenameEdit] {
        &self.edits
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Copy of `arena` with every directive materialized.
    pub fn apply(&self, arena: &NodeArena) -> NodeArena {
        let mut rewritten = arena.clone();
        self.apply_to(&mut rewritten);
        rewritten
    }

    /// Materialize the directives into `arena`. Node indices stay valid:
    /// renamed names are edited in place, and expanded shorthands gain a
    /// freshly allocated name node.
    pub fn apply_to(&self, arena: &mut NodeArena) {
        // Sorted so new node indices do not depend on hash order.
        let mut directives: Vec<(&NodeIndex, &RenameDirective)> = self.iter().collect();
        directives.sort_unstable_by_key(|&(node, _)| *node);

        for (&node, directive) in directives {
            match directive {
                RenameDirective::Identifier { new_name } => {
                    if let Some(NodeData::Identifier(ident)) = arena.get_mut(node).map(|n| &mut n.data) {
                        ident.escaped_text.clone_from(new_name);
                    }
                }
                RenameDirective::StringLiteral { new_text } => {
                    if let Some(NodeData::Literal(literal)) = arena.get_mut(node).map(|n| &mut n.data) {
                        literal.text.clone_from(new_text);
                    }
                }
                RenameDirective::ExpandShorthandProperty { property_name } => {
                    let Some(old) = arena.get(node) else {
                        continue;
                    };
                    let NodeData::ShorthandPropertyAssignment(shorthand) = &old.data else {
                        continue;
                    };
                    let value = shorthand.name;
                    let mut assignment = Node::new(
                        SyntaxKind::PropertyAssignment,
                        NodeData::PropertyAssignment(PropertyAssignmentData {
                            name: NodeIndex::NONE,
                            initializer: value,
                        }),
                    );
                    assignment.parent = old.parent;
                    assignment.modifier_flags = old.modifier_flags;
                    assignment.js_doc = old.js_doc.clone();

                    let name = add_identifier(arena, property_name, node);
                    if let NodeData::PropertyAssignment(data) = &mut assignment.data {
                        data.name = name;
                    }
                    arena.replace(node, assignment);
                }
                RenameDirective::ExpandShorthandBinding { property_name } => {
                    let name = add_identifier(arena, property_name, node);
                    if let Some(NodeData::BindingElement(binding)) = arena.get_mut(node).map(|n| &mut n.data) {
                        binding.property_name = name;
                    }
                }
            }
        }
    }
}

fn add_identifier(arena: &mut NodeArena, text: &str, parent: NodeIndex) -> NodeIndex {
    let mut ident = Node::new(
        SyntaxKind::Identifier,
        NodeData::Identifier(IdentifierData {
            escaped_text: text.to_string(),
        }),
    );
    ident.parent = parent;
    arena.add(ident)
}

/// Materialize several files' directives into one copy of `arena`.
pub fn apply_all<'c>(arena: &NodeArena, contexts: impl IntoIterator<Item = &'c RenameContext>) -> NodeArena {
    let mut rewritten = arena.clone();
    for context in contexts {
        context.apply_to(&mut rewritten);
    }
    rewritten
}
