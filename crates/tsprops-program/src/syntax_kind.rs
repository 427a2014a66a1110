//! Syntax kinds for the subset of TypeScript the rename core inspects.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxKind {
    Unknown,

    // Keywords and operator tokens
    ThisKeyword,
    SuperKeyword,
    NullKeyword,
    TrueKeyword,
    FalseKeyword,
    AnyKeyword,
    UnknownKeyword,
    StringKeyword,
    NumberKeyword,
    BooleanKeyword,
    VoidKeyword,
    UndefinedKeyword,
    NeverKeyword,
    ObjectKeyword,
    ExtendsKeyword,
    ImplementsKeyword,
    InKeyword,
    KeyOfKeyword,
    EqualsToken,
    PlusToken,
    MinusToken,
    AsteriskToken,
    LessThanToken,
    GreaterThanToken,
    EqualsEqualsEqualsToken,
    ExclamationEqualsEqualsToken,
    AmpersandAmpersandToken,
    BarBarToken,

    // Names and literals
    Identifier,
    QualifiedName,
    StringLiteral,
    NumericLiteral,

    // Declarations
    SourceFile,
    ClassDeclaration,
    ClassExpression,
    InterfaceDeclaration,
    TypeAliasDeclaration,
    EnumDeclaration,
    EnumMember,
    ModuleDeclaration,
    ModuleBlock,
    FunctionDeclaration,
    MethodDeclaration,
    MethodSignature,
    Constructor,
    GetAccessor,
    SetAccessor,
    PropertyDeclaration,
    PropertySignature,
    Parameter,
    TypeParameter,
    HeritageClause,
    ExpressionWithTypeArguments,
    VariableStatement,
    VariableDeclarationList,
    VariableDeclaration,
    ImportDeclaration,
    NamespaceImport,
    ImportSpecifier,
    ExportDeclaration,
    ExportSpecifier,
    ExportAssignment,

    // Binding patterns
    ObjectBindingPattern,
    ArrayBindingPattern,
    BindingElement,

    // Expressions
    PropertyAccessExpression,
    ElementAccessExpression,
    CallExpression,
    NewExpression,
    ObjectLiteralExpression,
    ArrayLiteralExpression,
    PropertyAssignment,
    ShorthandPropertyAssignment,
    BinaryExpression,
    ParenthesizedExpression,
    AsExpression,
    ArrowFunction,
    FunctionExpression,

    // Statements
    Block,
    ExpressionStatement,
    ReturnStatement,
    IfStatement,

    // Type nodes
    TypeReference,
    TypeLiteral,
    UnionType,
    IntersectionType,
    TupleType,
    ArrayType,
    MappedType,
    LiteralType,
    FunctionType,
    TypeQuery,
    TypeOperator,
}

impl SyntaxKind {
    /// Method, property, get accessor or set accessor.
    pub const fn is_class_member(self) -> bool {
        matches!(
            self,
            SyntaxKind::MethodDeclaration
                | SyntaxKind::PropertyDeclaration
                | SyntaxKind::GetAccessor
                | SyntaxKind::SetAccessor
        )
    }

    /// Declarations whose name makes them an enclosing declaration for nested members.
    pub const fn is_named_declaration(self) -> bool {
        matches!(
            self,
            SyntaxKind::InterfaceDeclaration
                | SyntaxKind::ClassDeclaration
                | SyntaxKind::EnumDeclaration
                | SyntaxKind::TypeAliasDeclaration
                | SyntaxKind::ModuleDeclaration
                | SyntaxKind::FunctionDeclaration
                | SyntaxKind::VariableDeclaration
                | SyntaxKind::PropertySignature
                | SyntaxKind::Parameter
        )
    }

    pub const fn is_function_like(self) -> bool {
        matches!(
            self,
            SyntaxKind::FunctionDeclaration
                | SyntaxKind::FunctionExpression
                | SyntaxKind::ArrowFunction
                | SyntaxKind::MethodDeclaration
                | SyntaxKind::MethodSignature
                | SyntaxKind::Constructor
                | SyntaxKind::GetAccessor
                | SyntaxKind::SetAccessor
                | SyntaxKind::FunctionType
        )
    }

    pub const fn is_class_like(self) -> bool {
        matches!(
            self,
            SyntaxKind::ClassDeclaration | SyntaxKind::ClassExpression
        )
    }

    pub const fn is_keyword_type(self) -> bool {
        matches!(
            self,
            SyntaxKind::AnyKeyword
                | SyntaxKind::UnknownKeyword
                | SyntaxKind::StringKeyword
                | SyntaxKind::NumberKeyword
                | SyntaxKind::BooleanKeyword
                | SyntaxKind::VoidKeyword
                | SyntaxKind::UndefinedKeyword
                | SyntaxKind::NeverKeyword
                | SyntaxKind::NullKeyword
                | SyntaxKind::ObjectKeyword
        )
    }

    /// Source text of a token kind, used by the printer.
    pub const fn token_text(self) -> &'static str {
        match self {
            SyntaxKind::ThisKeyword => "this",
            SyntaxKind::SuperKeyword => "super",
            SyntaxKind::NullKeyword => "null",
            SyntaxKind::TrueKeyword => "true",
            SyntaxKind::FalseKeyword => "false",
            SyntaxKind::AnyKeyword => "any",
            SyntaxKind::UnknownKeyword => "unknown",
            SyntaxKind::StringKeyword => "string",
            SyntaxKind::NumberKeyword => "number",
            SyntaxKind::BooleanKeyword => "boolean",
            SyntaxKind::VoidKeyword => "void",
            SyntaxKind::UndefinedKeyword => "undefined",
            SyntaxKind::NeverKeyword => "never",
            SyntaxKind::ObjectKeyword => "object",
            SyntaxKind::ExtendsKeyword => "extends",
            SyntaxKind::ImplementsKeyword => "implements",
            SyntaxKind::InKeyword => "in",
            SyntaxKind::KeyOfKeyword => "keyof",
            SyntaxKind::EqualsToken => "=",
            SyntaxKind::PlusToken => "+",
            SyntaxKind::MinusToken => "-",
            SyntaxKind::AsteriskToken => "*",
            SyntaxKind::LessThanToken => "<",
            SyntaxKind::GreaterThanToken => ">",
            SyntaxKind::EqualsEqualsEqualsToken => "===",
            SyntaxKind::ExclamationEqualsEqualsToken => "!==",
            SyntaxKind::AmpersandAmpersandToken => "&&",
            SyntaxKind::BarBarToken => "||",
            _ => "",
        }
    }
}
