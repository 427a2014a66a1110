//! Arena AST nodes.
//!
//! Every node lives in a [`NodeArena`] and is referenced by a [`NodeIndex`].
//! Nodes keep a parent link so the rename core can inspect the syntactic
//! context of an occurrence (is this identifier the name of a property access,
//! of a class member, of a binding element, ...).

use crate::flags::modifier_flags;
use crate::syntax_kind::SyntaxKind;
use serde::{Deserialize, Serialize};

/// Index of a node in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub const fn is_some(self) -> bool {
        self.0 != u32::MAX
    }
}

impl Default for NodeIndex {
    fn default() -> Self {
        NodeIndex::NONE
    }
}

/// An ordered list of child nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeList {
    pub nodes: Vec<NodeIndex>,
}

impl NodeList {
    pub fn new() -> NodeList {
        NodeList { nodes: Vec::new() }
    }

    pub fn push(&mut self, node: NodeIndex) {
        self.nodes.push(node);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes.iter().copied()
    }
}

impl From<Vec<NodeIndex>> for NodeList {
    fn from(nodes: Vec<NodeIndex>) -> Self {
        NodeList { nodes }
    }
}

// =============================================================================
// Node payloads
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdentifierData {
    pub escaped_text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralData {
    /// Unquoted literal value.
    pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QualifiedNameData {
    pub left: NodeIndex,
    pub right: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceFileData {
    pub file_name: String,
    pub statements: NodeList,
    pub is_declaration_file: bool,
    pub is_default_lib: bool,
}

/// Class declaration or expression, or interface declaration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassLikeData {
    pub name: NodeIndex,
    pub type_parameters: NodeList,
    pub heritage_clauses: NodeList,
    pub members: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeritageClauseData {
    /// `ExtendsKeyword` or `ImplementsKeyword`.
    pub token: SyntaxKind,
    pub types: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExprWithTypeArgsData {
    pub expression: NodeIndex,
    pub type_arguments: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnumData {
    pub name: NodeIndex,
    pub members: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnumMemberData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeAliasData {
    pub name: NodeIndex,
    pub type_parameters: NodeList,
    pub type_node: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModuleData {
    pub name: NodeIndex,
    /// `ModuleBlock`
    pub body: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockData {
    pub statements: NodeList,
}

/// Functions, methods, accessors, constructors, arrows and function types.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FunctionData {
    /// `NONE` for constructors, arrows and anonymous functions.
    pub name: NodeIndex,
    pub type_parameters: NodeList,
    pub parameters: NodeList,
    /// Declared return type. `NONE` when the return type is inferred.
    pub type_annotation: NodeIndex,
    /// `Block` body, or an expression body for arrows. `NONE` for signatures.
    pub body: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParameterData {
    pub dot_dot_dot: bool,
    pub name: NodeIndex,
    pub question_token: bool,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

/// Property declaration (class) or property signature (interface, type literal).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PropertyData {
    pub name: NodeIndex,
    pub question_token: bool,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeParameterData {
    pub name: NodeIndex,
    pub constraint: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableStatementData {
    pub declaration_list: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    pub const fn keyword(self) -> &'static str {
        match self {
            VariableKind::Var => "var",
            VariableKind::Let => "let",
            VariableKind::Const => "const",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableDeclarationListData {
    pub kind: VariableKind,
    pub declarations: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableDeclarationData {
    /// Identifier or binding pattern.
    pub name: NodeIndex,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BindingPatternData {
    pub elements: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BindingElementData {
    pub dot_dot_dot: bool,
    /// `prop` in `{ prop: local }`. `NONE` for shorthand bindings.
    pub property_name: NodeIndex,
    /// Identifier or nested binding pattern.
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// `expr.name` or `expr[argument]`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    pub name_or_argument: NodeIndex,
}

/// Call or `new` expression.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CallExprData {
    pub expression: NodeIndex,
    pub type_arguments: NodeList,
    pub arguments: NodeList,
}

/// Object or array literal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralExprData {
    pub elements: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PropertyAssignmentData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShorthandPropertyAssignmentData {
    pub name: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BinaryExprData {
    pub left: NodeIndex,
    pub operator_token: SyntaxKind,
    pub right: NodeIndex,
}

/// Parenthesized expression or `expr as T`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WrappedExprData {
    pub expression: NodeIndex,
    /// Target type of an `as` expression, `NONE` for parentheses.
    pub type_node: NodeIndex,
}

/// Expression statement or return statement.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExprStatementData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IfStatementData {
    pub expression: NodeIndex,
    pub then_statement: NodeIndex,
    pub else_statement: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeReferenceData {
    pub type_name: NodeIndex,
    pub type_arguments: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeLiteralData {
    pub members: NodeList,
}

/// Union, intersection or tuple type node.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompositeTypeData {
    pub types: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArrayTypeData {
    pub element_type: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MappedTypeData {
    /// `TypeParameter` whose constraint is the key type.
    pub type_parameter: NodeIndex,
    pub question_token: bool,
    pub type_node: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralTypeData {
    pub literal: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeQueryData {
    /// Identifier or qualified name.
    pub expr_name: NodeIndex,
}

/// `keyof T`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeOperatorData {
    pub operator: SyntaxKind,
    pub type_node: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImportDeclarationData {
    /// `NamespaceImport` or `ImportSpecifier` nodes.
    pub bindings: NodeList,
    pub module_specifier: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NamespaceImportData {
    pub name: NodeIndex,
}

/// Import or export specifier: `property_name as name`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpecifierData {
    pub property_name: NodeIndex,
    pub name: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportDeclarationData {
    pub specifiers: NodeList,
    pub module_specifier: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportAssignmentData {
    pub expression: NodeIndex,
    /// `export = expr` rather than `export default expr`.
    pub is_export_equals: bool,
}

/// Kind-specific payload of a node.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum NodeData {
    Token,
    Identifier(IdentifierData),
    Literal(LiteralData),
    QualifiedName(QualifiedNameData),
    SourceFile(SourceFileData),
    ClassLike(ClassLikeData),
    HeritageClause(HeritageClauseData),
    ExprWithTypeArgs(ExprWithTypeArgsData),
    Enum(EnumData),
    EnumMember(EnumMemberData),
    TypeAlias(TypeAliasData),
    Module(ModuleData),
    Block(BlockData),
    Function(FunctionData),
    Parameter(ParameterData),
    Property(PropertyData),
    TypeParameter(TypeParameterData),
    VariableStatement(VariableStatementData),
    VariableDeclarationList(VariableDeclarationListData),
    VariableDeclaration(VariableDeclarationData),
    BindingPattern(BindingPatternData),
    BindingElement(BindingElementData),
    AccessExpr(AccessExprData),
    CallExpr(CallExprData),
    LiteralExpr(LiteralExprData),
    PropertyAssignment(PropertyAssignmentData),
    ShorthandPropertyAssignment(ShorthandPropertyAssignmentData),
    BinaryExpr(BinaryExprData),
    WrappedExpr(WrappedExprData),
    ExprStatement(ExprStatementData),
    IfStatement(IfStatementData),
    TypeReference(TypeReferenceData),
    TypeLiteral(TypeLiteralData),
    CompositeType(CompositeTypeData),
    ArrayType(ArrayTypeData),
    MappedType(MappedTypeData),
    LiteralType(LiteralTypeData),
    TypeQuery(TypeQueryData),
    TypeOperator(TypeOperatorData),
    ImportDeclaration(ImportDeclarationData),
    NamespaceImport(NamespaceImportData),
    Specifier(SpecifierData),
    ExportDeclaration(ExportDeclarationData),
    ExportAssignment(ExportAssignmentData),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Node {
    pub kind: SyntaxKind,
    pub modifier_flags: u32,
    pub parent: NodeIndex,
    /// Leading JSDoc comment text, including the `/**` and `*/` delimiters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js_doc: Option<String>,
    pub data: NodeData,
}

impl Node {
    pub fn new(kind: SyntaxKind, data: NodeData) -> Node {
        Node {
            kind,
            modifier_flags: modifier_flags::NONE,
            parent: NodeIndex::NONE,
            js_doc: None,
            data,
        }
    }

    #[inline]
    pub const fn has_modifier(&self, flag: u32) -> bool {
        self.modifier_flags & flag != 0
    }

    /// The `name` child of a named node, `NONE` for nodes without one.
    pub fn name(&self) -> NodeIndex {
        match &self.data {
            NodeData::ClassLike(d) => d.name,
            NodeData::Enum(d) => d.name,
            NodeData::EnumMember(d) => d.name,
            NodeData::TypeAlias(d) => d.name,
            NodeData::Module(d) => d.name,
            NodeData::Function(d) => d.name,
            NodeData::Parameter(d) => d.name,
            NodeData::Property(d) => d.name,
            NodeData::TypeParameter(d) => d.name,
            NodeData::VariableDeclaration(d) => d.name,
            NodeData::BindingElement(d) => d.name,
            NodeData::PropertyAssignment(d) => d.name,
            NodeData::ShorthandPropertyAssignment(d) => d.name,
            NodeData::NamespaceImport(d) => d.name,
            NodeData::Specifier(d) => d.name,
            NodeData::AccessExpr(d) if self.kind == SyntaxKind::PropertyAccessExpression => {
                d.name_or_argument
            }
            _ => NodeIndex::NONE,
        }
    }

    /// Declared type annotation of a declaration, `NONE` when absent.
    pub fn type_annotation(&self) -> NodeIndex {
        match &self.data {
            NodeData::Function(d) => d.type_annotation,
            NodeData::Parameter(d) => d.type_annotation,
            NodeData::Property(d) => d.type_annotation,
            NodeData::VariableDeclaration(d) => d.type_annotation,
            NodeData::TypeAlias(d) => d.type_node,
            _ => NodeIndex::NONE,
        }
    }
}

// =============================================================================
// Arena
// =============================================================================

/// Arena-based storage for AST nodes.
/// Nodes are stored contiguously and referenced by index.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena { nodes: Vec::new() }
    }

    /// Add a node to the arena and return its index
    pub fn add(&mut self, node: Node) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(node);
        NodeIndex(index)
    }

    /// Get a node by index
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Get a mutable node by index
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    /// Replace a node at the given index.
    /// Returns the old node if successful.
    pub fn replace(&mut self, index: NodeIndex, new_node: Node) -> Option<Node> {
        self.get_mut(index)
            .map(|old| std::mem::replace(old, new_node))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn kind(&self, index: NodeIndex) -> Option<SyntaxKind> {
        self.get(index).map(|node| node.kind)
    }

    pub fn is_kind(&self, index: NodeIndex, kind: SyntaxKind) -> bool {
        self.kind(index) == Some(kind)
    }

    pub fn parent(&self, index: NodeIndex) -> NodeIndex {
        self.get(index).map_or(NodeIndex::NONE, |node| node.parent)
    }

    pub fn has_modifier(&self, index: NodeIndex, flag: u32) -> bool {
        self.get(index).is_some_and(|node| node.has_modifier(flag))
    }

    pub fn name_of(&self, index: NodeIndex) -> NodeIndex {
        self.get(index).map_or(NodeIndex::NONE, Node::name)
    }

    /// Text of an identifier node.
    pub fn identifier_text(&self, index: NodeIndex) -> Option<&str> {
        match &self.get(index)?.data {
            NodeData::Identifier(ident) => Some(&ident.escaped_text),
            _ => None,
        }
    }

    /// Unquoted value of a string or numeric literal node.
    pub fn literal_text(&self, index: NodeIndex) -> Option<&str> {
        match &self.get(index)?.data {
            NodeData::Literal(lit) => Some(&lit.text),
            _ => None,
        }
    }

    /// Text of a property name: identifier text or literal value.
    pub fn property_name_text(&self, index: NodeIndex) -> Option<&str> {
        self.identifier_text(index)
            .or_else(|| self.literal_text(index))
    }

    pub fn source_file_data(&self, index: NodeIndex) -> Option<&SourceFileData> {
        match &self.get(index)?.data {
            NodeData::SourceFile(data) => Some(data),
            _ => None,
        }
    }

    /// Walk parent links up to the enclosing source file.
    pub fn source_file_of(&self, mut index: NodeIndex) -> NodeIndex {
        while let Some(node) = self.get(index) {
            if node.kind == SyntaxKind::SourceFile {
                return index;
            }
            index = node.parent;
        }
        NodeIndex::NONE
    }

    /// File name of the source file that contains `index`.
    pub fn file_name_of(&self, index: NodeIndex) -> &str {
        self.source_file_data(self.source_file_of(index))
            .map_or("<unknown>", |data| data.file_name.as_str())
    }

    pub fn js_doc(&self, index: NodeIndex) -> Option<&str> {
        self.get(index)?.js_doc.as_deref()
    }

    /// Children of a node in source order.
    pub fn get_children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let Some(node) = self.get(index) else {
            return Vec::new();
        };

        let mut children = Vec::new();
        let mut push = |child: NodeIndex| {
            if child.is_some() {
                children.push(child);
            }
        };

        match &node.data {
            NodeData::Token | NodeData::Identifier(_) | NodeData::Literal(_) => {}
            NodeData::QualifiedName(d) => {
                push(d.left);
                push(d.right);
            }
            NodeData::SourceFile(d) => d.statements.iter().for_each(push),
            NodeData::ClassLike(d) => {
                push(d.name);
                d.type_parameters.iter().for_each(&mut push);
                d.heritage_clauses.iter().for_each(&mut push);
                d.members.iter().for_each(push);
            }
            NodeData::HeritageClause(d) => d.types.iter().for_each(push),
            NodeData::ExprWithTypeArgs(d) => {
                push(d.expression);
                d.type_arguments.iter().for_each(push);
            }
            NodeData::Enum(d) => {
                push(d.name);
                d.members.iter().for_each(push);
            }
            NodeData::EnumMember(d) => {
                push(d.name);
                push(d.initializer);
            }
            NodeData::TypeAlias(d) => {
                push(d.name);
                d.type_parameters.iter().for_each(&mut push);
                push(d.type_node);
            }
            NodeData::Module(d) => {
                push(d.name);
                push(d.body);
            }
            NodeData::Block(d) => d.statements.iter().for_each(push),
            NodeData::Function(d) => {
                push(d.name);
                d.type_parameters.iter().for_each(&mut push);
                d.parameters.iter().for_each(&mut push);
                push(d.type_annotation);
                push(d.body);
            }
            NodeData::Parameter(d) => {
                push(d.name);
                push(d.type_annotation);
                push(d.initializer);
            }
            NodeData::Property(d) => {
                push(d.name);
                push(d.type_annotation);
                push(d.initializer);
            }
            NodeData::TypeParameter(d) => {
                push(d.name);
                push(d.constraint);
            }
            NodeData::VariableStatement(d) => push(d.declaration_list),
            NodeData::VariableDeclarationList(d) => d.declarations.iter().for_each(push),
            NodeData::VariableDeclaration(d) => {
                push(d.name);
                push(d.type_annotation);
                push(d.initializer);
            }
            NodeData::BindingPattern(d) => d.elements.iter().for_each(push),
            NodeData::BindingElement(d) => {
                push(d.property_name);
                push(d.name);
                push(d.initializer);
            }
            NodeData::AccessExpr(d) => {
                push(d.expression);
                push(d.name_or_argument);
            }
            NodeData::CallExpr(d) => {
                push(d.expression);
                d.type_arguments.iter().for_each(&mut push);
                d.arguments.iter().for_each(push);
            }
            NodeData::LiteralExpr(d) => d.elements.iter().for_each(push),
            NodeData::PropertyAssignment(d) => {
                push(d.name);
                push(d.initializer);
            }
            NodeData::ShorthandPropertyAssignment(d) => push(d.name),
            NodeData::BinaryExpr(d) => {
                push(d.left);
                push(d.right);
            }
            NodeData::WrappedExpr(d) => {
                push(d.expression);
                push(d.type_node);
            }
            NodeData::ExprStatement(d) => push(d.expression),
            NodeData::IfStatement(d) => {
                push(d.expression);
                push(d.then_statement);
                push(d.else_statement);
            }
            NodeData::TypeReference(d) => {
                push(d.type_name);
                d.type_arguments.iter().for_each(push);
            }
            NodeData::TypeLiteral(d) => d.members.iter().for_each(push),
            NodeData::CompositeType(d) => d.types.iter().for_each(push),
            NodeData::ArrayType(d) => push(d.element_type),
            NodeData::MappedType(d) => {
                push(d.type_parameter);
                push(d.type_node);
            }
            NodeData::LiteralType(d) => push(d.literal),
            NodeData::TypeQuery(d) => push(d.expr_name),
            NodeData::TypeOperator(d) => push(d.type_node),
            NodeData::ImportDeclaration(d) => d.bindings.iter().for_each(push),
            NodeData::NamespaceImport(d) => push(d.name),
            NodeData::Specifier(d) => {
                push(d.property_name);
                push(d.name);
            }
            NodeData::ExportDeclaration(d) => d.specifiers.iter().for_each(push),
            NodeData::ExportAssignment(d) => push(d.expression),
        }

        children
    }
}
