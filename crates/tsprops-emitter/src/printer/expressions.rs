//! Expressions and binding patterns, including the shorthand expansions.

use tsprops_program::{NodeData, NodeIndex, SyntaxKind};
use tsprops_rename::RenameDirective;

use super::Printer;

impl<'a> Printer<'a> {
    pub(super) fn emit_expression(&mut self, index: NodeIndex) {
        let Some(node) = self.node(index) else {
            return;
        };
        match &node.data {
            NodeData::AccessExpr(data) => {
                self.emit_node(data.expression);
                if node.kind == SyntaxKind::ElementAccessExpression {
                    self.write("[");
                    self.emit_node(data.name_or_argument);
                    self.write("]");
                } else {
                    self.write(".");
                    self.emit_node(data.name_or_argument);
                }
            }
            NodeData::CallExpr(data) => {
                if node.kind == SyntaxKind::NewExpression {
                    self.write("new ");
                }
                self.emit_node(data.expression);
                self.emit_type_arguments(&data.type_arguments);
                self.write("(");
                self.emit_comma_list(data.arguments.iter());
                self.write(")");
            }
            NodeData::LiteralExpr(data) => {
                if node.kind == SyntaxKind::ArrayLiteralExpression {
                    self.write("[");
                    self.emit_comma_list(data.elements.iter());
                    self.write("]");
                } else if data.elements.is_empty() {
                    self.write("{}");
                } else {
                    self.write("{ ");
                    self.emit_comma_list(data.elements.iter());
                    self.write(" }");
                }
            }
            NodeData::PropertyAssignment(data) => {
                self.emit_node(data.name);
                self.write(": ");
                self.emit_node(data.initializer);
            }
            NodeData::ShorthandPropertyAssignment(data) => {
                if let Some(RenameDirective::ExpandShorthandProperty { property_name }) = self.directive(index) {
                    self.write(property_name);
                    self.write(": ");
                }
                self.emit_node(data.name);
            }
            NodeData::BinaryExpr(data) => {
                self.emit_node(data.left);
                self.write(" ");
                self.write(data.operator_token.token_text());
                self.write(" ");
                self.emit_node(data.right);
            }
            NodeData::WrappedExpr(data) => {
                if node.kind == SyntaxKind::AsExpression {
                    self.emit_node(data.expression);
                    self.write(" as ");
                    self.emit_node(data.type_node);
                } else {
                    self.write("(");
                    self.emit_node(data.expression);
                    self.write(")");
                }
            }
            _ => self.emit_node(index),
        }
    }

    pub(super) fn emit_binding_pattern(&mut self, index: NodeIndex) {
        let Some(node) = self.node(index) else {
            return;
        };
        let NodeData::BindingPattern(data) = &node.data else {
            return;
        };
        if node.kind == SyntaxKind::ArrayBindingPattern {
            self.write("[");
            self.emit_comma_list(data.elements.iter());
            self.write("]");
        } else if data.elements.is_empty() {
            self.write("{}");
        } else {
            self.write("{ ");
            self.emit_comma_list(data.elements.iter());
            self.write(" }");
        }
    }

    pub(super) fn emit_binding_element(&mut self, index: NodeIndex) {
        let Some(NodeData::BindingElement(data)) = self.node(index).map(|n| &n.data) else {
            return;
        };
        if data.dot_dot_dot {
            self.write("...");
        }
        if let Some(RenameDirective::ExpandShorthandBinding { property_name }) = self.directive(index) {
            self.write(property_name);
            self.write(": ");
        } else if data.property_name.is_some() {
            self.emit_node(data.property_name);
            self.write(": ");
        }
        self.emit_node(data.name);
        self.emit_initializer(data.initializer);
    }
}
