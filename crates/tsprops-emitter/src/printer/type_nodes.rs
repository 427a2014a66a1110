use tsprops_program::{NodeData, NodeIndex, SyntaxKind};

use super::Printer;

impl<'a> Printer<'a> {
    pub(super) fn emit_type_node(&mut self, index: NodeIndex) {
        let Some(node) = self.node(index) else {
            return;
        };
        match &node.data {
            NodeData::TypeReference(data) => {
                self.emit_node(data.type_name);
                self.emit_type_arguments(&data.type_arguments);
            }
            NodeData::TypeLiteral(data) => self.emit_members(&data.members),
            NodeData::CompositeType(data) => match node.kind {
                SyntaxKind::TupleType => {
                    self.write("[");
                    self.emit_comma_list(data.types.iter());
                    self.write("]");
                }
                kind => {
                    let separator = if kind == SyntaxKind::IntersectionType {
                        " & "
                    } else {
                        " | "
                    };
                    for (i, ty) in data.types.iter().enumerate() {
                        if i > 0 {
                            self.write(separator);
                        }
                        self.emit_type_operand(ty);
                    }
                }
            },
            NodeData::ArrayType(data) => {
                self.emit_type_operand(data.element_type);
                self.write("[]");
            }
            NodeData::MappedType(data) => {
                self.write("{ [");
                if let Some(NodeData::TypeParameter(param)) = self.node(data.type_parameter).map(|n| &n.data) {
                    self.emit_node(param.name);
                    self.write(" in ");
                    self.emit_node(param.constraint);
                }
                self.write("]");
                if data.question_token {
                    self.write("?");
                }
                self.emit_type_annotation(data.type_node);
                self.write(" }");
            }
            NodeData::LiteralType(data) => self.emit_node(data.literal),
            NodeData::TypeQuery(data) => {
                self.write("typeof ");
                self.emit_node(data.expr_name);
            }
            NodeData::TypeOperator(data) => {
                self.write(data.operator.token_text());
                self.write(" ");
                self.emit_type_operand(data.type_node);
            }
            _ => self.emit_node(index),
        }
    }

    /// Type in operand position; nested unions, intersections and function
    /// types are parenthesized.
    fn emit_type_operand(&mut self, index: NodeIndex) {
        let needs_parens = matches!(
            self.node(index).map(|n| n.kind),
            Some(SyntaxKind::UnionType | SyntaxKind::IntersectionType | SyntaxKind::FunctionType)
        );
        if needs_parens {
            self.write("(");
        }
        self.emit_node(index);
        if needs_parens {
            self.write(")");
        }
    }
}
