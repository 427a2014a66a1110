//! Arena-to-text printer.
//!
//! Output is normalized TypeScript: four-space indentation, double-quoted
//! strings, one statement per line. Comments other than leading JSDoc are not
//! part of the arena and are not reproduced.

use tsprops_program::{Node, NodeArena, NodeData, NodeIndex, SyntaxKind};
use tsprops_rename::{RenameContext, RenameDirective};

mod declarations;
mod expressions;
mod helpers;
mod statements;
mod type_nodes;

pub struct Printer<'a> {
    arena: &'a NodeArena,
    renames: Option<&'a RenameContext>,
    output: String,
    indent_level: u32,
    indent_str: &'static str,
}

impl<'a> Printer<'a> {
    pub fn new(arena: &'a NodeArena) -> Self {
        Printer {
            arena,
            renames: None,
            output: String::with_capacity(1024),
            indent_level: 0,
            indent_str: "    ",
        }
    }

    /// Printer that applies the directives in `renames` while printing.
    pub fn with_renames(arena: &'a NodeArena, renames: &'a RenameContext) -> Self {
        Printer {
            renames: Some(renames),
            ..Printer::new(arena)
        }
    }

    pub fn set_indent_str(&mut self, indent: &'static str) {
        self.indent_str = indent;
    }

    /// Print a whole source file. Non-file nodes print as a single node.
    pub fn print_source_file(mut self, file: NodeIndex) -> String {
        match self.arena.get(file).map(|n| &n.data) {
            Some(NodeData::SourceFile(data)) => {
                for statement in data.statements.iter() {
                    self.emit_statement(statement);
                }
            }
            _ => self.emit_node(file),
        }
        self.output
    }

    /// Print one node without a trailing newline.
    pub fn print_node(mut self, node: NodeIndex) -> String {
        self.emit_node(node);
        self.output
    }

    pub fn print_to_string(arena: &NodeArena, file: NodeIndex, renames: Option<&RenameContext>) -> String {
        match renames {
            Some(renames) => Printer::with_renames(arena, renames).print_source_file(file),
            None => Printer::new(arena).print_source_file(file),
        }
    }

    fn directive(&self, node: NodeIndex) -> Option<&'a RenameDirective> {
        self.renames.and_then(|renames| renames.get(node))
    }

    fn node(&self, index: NodeIndex) -> Option<&'a Node> {
        self.arena.get(index)
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Emit any node in expression or type position.
    pub(super) fn emit_node(&mut self, index: NodeIndex) {
        let Some(node) = self.node(index) else {
            return;
        };
        match &node.data {
            NodeData::Token => self.write(node.kind.token_text()),
            NodeData::Identifier(_) => self.emit_identifier(index),
            NodeData::Literal(_) => self.emit_literal(index),
            NodeData::QualifiedName(data) => {
                self.emit_node(data.left);
                self.write(".");
                self.emit_node(data.right);
            }
            NodeData::ClassLike(_) => self.emit_class_like(index),
            NodeData::Function(_) => self.emit_function(index),
            NodeData::Parameter(_) => self.emit_parameter(index),
            NodeData::TypeParameter(data) => {
                self.emit_node(data.name);
                if data.constraint.is_some() {
                    self.write(" extends ");
                    self.emit_node(data.constraint);
                }
            }
            NodeData::HeritageClause(data) => {
                self.write(data.token.token_text());
                self.write(" ");
                self.emit_comma_list(data.types.iter());
            }
            NodeData::ExprWithTypeArgs(data) => {
                self.emit_node(data.expression);
                self.emit_type_arguments(&data.type_arguments);
            }
            NodeData::BindingPattern(_) => self.emit_binding_pattern(index),
            NodeData::BindingElement(_) => self.emit_binding_element(index),
            NodeData::AccessExpr(_)
            | NodeData::CallExpr(_)
            | NodeData::LiteralExpr(_)
            | NodeData::PropertyAssignment(_)
            | NodeData::ShorthandPropertyAssignment(_)
            | NodeData::BinaryExpr(_)
            | NodeData::WrappedExpr(_) => self.emit_expression(index),
            NodeData::TypeReference(_)
            | NodeData::TypeLiteral(_)
            | NodeData::CompositeType(_)
            | NodeData::ArrayType(_)
            | NodeData::MappedType(_)
            | NodeData::LiteralType(_)
            | NodeData::TypeQuery(_)
            | NodeData::TypeOperator(_) => self.emit_type_node(index),
            NodeData::Specifier(data) => {
                if data.property_name.is_some() {
                    self.emit_node(data.property_name);
                    self.write(" as ");
                }
                self.emit_node(data.name);
            }
            NodeData::NamespaceImport(data) => {
                self.write("* as ");
                self.emit_node(data.name);
            }
            // Statement-level nodes print inline without indentation.
            _ => self.emit_statement_body(index),
        }
    }

    fn emit_identifier(&mut self, index: NodeIndex) {
        if let Some(RenameDirective::Identifier { new_name }) = self.directive(index) {
            self.write(new_name);
            return;
        }
        if let Some(NodeData::Identifier(ident)) = self.node(index).map(|n| &n.data) {
            self.write(&ident.escaped_text);
        }
    }

    fn emit_literal(&mut self, index: NodeIndex) {
        let Some(node) = self.node(index) else {
            return;
        };
        let NodeData::Literal(literal) = &node.data else {
            return;
        };
        match node.kind {
            SyntaxKind::StringLiteral => {
                let text = match self.directive(index) {
                    Some(RenameDirective::StringLiteral { new_text }) => new_text.as_str(),
                    _ => literal.text.as_str(),
                };
                self.write("\"");
                self.write_escaped(text);
                self.write("\"");
            }
            _ => self.write(&literal.text),
        }
    }
}
