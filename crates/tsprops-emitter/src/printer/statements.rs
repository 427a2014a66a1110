use tsprops_program::{NodeData, NodeIndex, SyntaxKind};

use super::Printer;

impl<'a> Printer<'a> {
    /// One statement on its own line, with JSDoc and modifiers.
    pub(super) fn emit_statement(&mut self, index: NodeIndex) {
        let Some(node) = self.node(index) else {
            return;
        };
        self.emit_js_doc(index);
        self.write_indent();
        self.emit_modifiers(node.modifier_flags);
        self.emit_statement_body(index);
        self.write_line();
    }

    pub(super) fn emit_statement_body(&mut self, index: NodeIndex) {
        let Some(node) = self.node(index) else {
            return;
        };
        match &node.data {
            NodeData::ClassLike(_) => self.emit_class_like(index),
            NodeData::Function(data) => {
                self.emit_function(index);
                if data.body.is_none() {
                    self.write(";");
                }
            }
            NodeData::Enum(_) => self.emit_enum(index),
            NodeData::TypeAlias(_) => self.emit_type_alias(index),
            NodeData::Module(_) => self.emit_module(index),
            NodeData::Block(_) => self.emit_block(index),
            NodeData::Property(_) => self.emit_property(index),
            NodeData::EnumMember(data) => {
                self.emit_node(data.name);
                self.emit_initializer(data.initializer);
            }
            NodeData::VariableStatement(data) => {
                self.emit_variable_declaration_list(data.declaration_list);
                self.write(";");
            }
            NodeData::VariableDeclarationList(_) => self.emit_variable_declaration_list(index),
            NodeData::VariableDeclaration(_) => self.emit_variable_declaration(index),
            NodeData::ImportDeclaration(_) => self.emit_import_declaration(index),
            NodeData::ExportDeclaration(_) => self.emit_export_declaration(index),
            NodeData::ExportAssignment(_) => self.emit_export_assignment(index),
            NodeData::ExprStatement(data) => {
                if node.kind == SyntaxKind::ReturnStatement {
                    self.write("return");
                    if data.expression.is_some() {
                        self.write(" ");
                    }
                }
                self.emit_node(data.expression);
                self.write(";");
            }
            NodeData::IfStatement(data) => {
                self.write("if (");
                self.emit_node(data.expression);
                self.write(") ");
                self.emit_embedded_statement(data.then_statement);
                if data.else_statement.is_some() {
                    self.write(" else ");
                    self.emit_embedded_statement(data.else_statement);
                }
            }
            NodeData::SourceFile(data) => {
                for statement in data.statements.iter() {
                    self.emit_statement(statement);
                }
            }
            _ => self.emit_node(index),
        }
    }

    /// `{ ... }` with each statement on its own indented line.
    pub(super) fn emit_block(&mut self, index: NodeIndex) {
        let statements = match self.node(index).map(|n| &n.data) {
            Some(NodeData::Block(block)) => &block.statements,
            _ => {
                self.write("{}");
                return;
            }
        };
        if statements.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{");
        self.write_line();
        self.increase_indent();
        for statement in statements.iter() {
            self.emit_statement(statement);
        }
        self.decrease_indent();
        self.write_indent();
        self.write("}");
    }

    /// Branch of an `if`: blocks and nested `if`s stay inline.
    fn emit_embedded_statement(&mut self, index: NodeIndex) {
        match self.node(index).map(|n| n.kind) {
            Some(SyntaxKind::Block | SyntaxKind::IfStatement) => self.emit_statement_body(index),
            Some(_) => {
                self.write("{");
                self.write_line();
                self.increase_indent();
                self.emit_statement(index);
                self.decrease_indent();
                self.write_indent();
                self.write("}");
            }
            None => self.write("{}"),
        }
    }
}
