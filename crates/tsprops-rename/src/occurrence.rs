//! Rename site detection.
//!
//! Each node of a source file is matched against the closed set of places a
//! property name can occur. The order of the checks matters: a string literal
//! left of `in` is claimed before it could be read as an element access key,
//! and declaration names are claimed before the constructor-parameter
//! reference fallback.

use crate::symbol_helpers::{is_constructor_parameter, is_symbol_class_member};
use tsprops_program::{NodeData, NodeIndex, SyntaxKind, TypeChecker};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occurrence {
    /// `{ name }` in an object literal. Holds the assignment node.
    ShorthandProperty(NodeIndex),
    /// `const { name } = obj`. Holds the binding element.
    ShorthandBinding(NodeIndex),
    /// `'name' in obj`. Holds the string literal.
    InOperand(NodeIndex),
    /// `obj.name`
    PropertyAccessName(NodeIndex),
    /// Name of a method, property or accessor in a class or object literal,
    /// or of a property or method signature in an interface or type literal.
    ClassMemberName(NodeIndex),
    /// `enum E { name }`
    EnumMemberName(NodeIndex),
    /// `{ name: value }`
    PropertyAssignmentName(NodeIndex),
    /// `const { name: local } = obj`
    BindingPropertyName(NodeIndex),
    /// `constructor(private name: T)` and every reference to `name` inside
    /// the constructor.
    ConstructorParameter(NodeIndex),
    /// `obj['name']`. Holds the string literal.
    ElementAccessKey(NodeIndex),
}

impl Occurrence {
    /// The node whose text is replaced (or expanded) by the rewrite.
    pub const fn node(self) -> NodeIndex {
        match self {
            Occurrence::ShorthandProperty(node)
            | Occurrence::ShorthandBinding(node)
            | Occurrence::InOperand(node)
            | Occurrence::PropertyAccessName(node)
            | Occurrence::ClassMemberName(node)
            | Occurrence::EnumMemberName(node)
            | Occurrence::PropertyAssignmentName(node)
            | Occurrence::BindingPropertyName(node)
            | Occurrence::ConstructorParameter(node)
            | Occurrence::ElementAccessKey(node) => node,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Occurrence::ShorthandProperty(_) => "shorthand property",
            Occurrence::ShorthandBinding(_) => "shorthand binding",
            Occurrence::InOperand(_) => "in operand",
            Occurrence::PropertyAccessName(_) => "property access",
            Occurrence::ClassMemberName(_) => "member declaration",
            Occurrence::EnumMemberName(_) => "enum member",
            Occurrence::PropertyAssignmentName(_) => "property assignment",
            Occurrence::BindingPropertyName(_) => "binding property",
            Occurrence::ConstructorParameter(_) => "constructor parameter",
            Occurrence::ElementAccessKey(_) => "element access",
        }
    }

    /// Classify `node` as a rename site, if it is one.
    pub fn detect(checker: &dyn TypeChecker, node: NodeIndex) -> Option<Occurrence> {
        let arena = checker.arena();
        let data = arena.get(node)?;
        let parent = data.parent;
        let parent_node = arena.get(parent);

        match data.kind {
            SyntaxKind::ShorthandPropertyAssignment => {
                return Some(Occurrence::ShorthandProperty(node));
            }
            SyntaxKind::BindingElement => {
                if let NodeData::BindingElement(binding) = &data.data {
                    // `...rest` collects the remaining properties and names none.
                    if !binding.dot_dot_dot
                        && binding.property_name.is_none()
                        && arena.is_kind(parent, SyntaxKind::ObjectBindingPattern)
                    {
                        return Some(Occurrence::ShorthandBinding(node));
                    }
                }
                return None;
            }
            SyntaxKind::StringLiteral => {
                return match parent_node.map(|p| &p.data) {
                    Some(NodeData::BinaryExpr(binary))
                        if binary.operator_token == SyntaxKind::InKeyword && binary.left == node =>
                    {
                        Some(Occurrence::InOperand(node))
                    }
                    Some(NodeData::AccessExpr(access))
                        if arena.is_kind(parent, SyntaxKind::ElementAccessExpression)
                            && access.name_or_argument == node =>
                    {
                        Some(Occurrence::ElementAccessKey(node))
                    }
                    _ => None,
                };
            }
            SyntaxKind::Identifier => {}
            _ => return None,
        }

        let parent_node = parent_node?;
        let is_parent_name = parent_node.name() == node;
        match parent_node.kind {
            SyntaxKind::PropertyAccessExpression if is_parent_name => {
                return Some(Occurrence::PropertyAccessName(node));
            }
            kind if kind.is_class_member() && is_parent_name => {
                return Some(Occurrence::ClassMemberName(node));
            }
            SyntaxKind::PropertySignature | SyntaxKind::MethodSignature if is_parent_name => {
                return Some(Occurrence::ClassMemberName(node));
            }
            SyntaxKind::EnumMember if is_parent_name => {
                return Some(Occurrence::EnumMemberName(node));
            }
            SyntaxKind::PropertyAssignment if is_parent_name => {
                return Some(Occurrence::PropertyAssignmentName(node));
            }
            SyntaxKind::BindingElement => {
                if let NodeData::BindingElement(binding) = &parent_node.data {
                    if binding.property_name == node {
                        return Some(Occurrence::BindingPropertyName(node));
                    }
                }
            }
            _ => {}
        }

        let declares_parameter = is_parent_name && is_constructor_parameter(arena, parent);
        let references_parameter = checker
            .get_symbol_at_location(node)
            .is_some_and(|symbol| is_symbol_class_member(checker, symbol));
        if declares_parameter || references_parameter {
            return Some(Occurrence::ConstructorParameter(node));
        }
        None
    }
}
