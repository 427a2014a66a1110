//! Programmatic construction of bound program snapshots.
//!
//! `ProgramBuilder` plays the role of parser, binder and checker for programs
//! assembled in code: every declaration call creates the AST nodes, declares
//! (or merges into) the symbol, and records the node and symbol types the rename
//! core later queries. References take explicit [`SymbolId`]s instead of
//! resolving names through scopes.
//!
//! Declarations return the declaration [`NodeIndex`]; use [`ProgramBuilder::symbol_of`]
//! and [`ProgramBuilder::instance_type`] to get at the bound entities.

use crate::flags::{internal_symbol_name, modifier_flags, object_flags, symbol_flags};
use crate::node::*;
use crate::program::{Program, PropertyLookup};
use crate::symbol::{Symbol, SymbolId};
use crate::syntax_kind::SyntaxKind;
use crate::types::{ObjectType, Signature, TypeData, TypeId};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::trace;

/// One element of an object destructuring pattern.
#[derive(Clone, Copy, Debug)]
pub enum BindingSpec<'a> {
    /// `{ name }`
    Shorthand(&'a str),
    /// `{ property: local }`
    Renamed { property: &'a str, local: &'a str },
}

/// Nodes and symbols created by [`ProgramBuilder::destructure`].
#[derive(Clone, Debug)]
pub struct Destructuring {
    pub declaration: NodeIndex,
    pub pattern: NodeIndex,
    pub elements: Vec<NodeIndex>,
    pub locals: Vec<SymbolId>,
}

/// Symbols of the default library installed by [`ProgramBuilder::with_default_lib`].
#[derive(Clone, Copy, Debug)]
pub struct LibSymbols {
    pub file: NodeIndex,
    pub console: SymbolId,
    pub console_interface: SymbolId,
}

pub const DEFAULT_LIB_FILE_NAME: &str = "lib.d.ts";

#[derive(Default)]
pub struct ProgramBuilder {
    program: Program,
    /// Symbol declared by a declaration node (keyed by the declaration itself,
    /// not its name).
    decl_symbols: FxHashMap<NodeIndex, SymbolId>,
    /// Local symbol tables per container (source file, block, function, module block).
    locals: FxHashMap<NodeIndex, IndexMap<String, SymbolId>>,
    module_symbols: FxHashMap<NodeIndex, SymbolId>,
    /// Namespace object type of a module or namespace symbol.
    module_types: FxHashMap<SymbolId, TypeId>,
    /// Instance (declared) type of class, interface, enum and type literal symbols.
    declared_types: FxHashMap<SymbolId, TypeId>,
    /// Constructor side of classes.
    static_types: FxHashMap<SymbolId, TypeId>,
    /// Name used when printing a type that has a type alias.
    alias_names: FxHashMap<TypeId, SymbolId>,
    parameter_locals: FxHashMap<NodeIndex, SymbolId>,
    lib: Option<LibSymbols>,
}

impl ProgramBuilder {
    pub fn new() -> ProgramBuilder {
        ProgramBuilder::default()
    }

    /// Builder with `lib.d.ts` (console, String, Number) already declared.
    pub fn with_default_lib() -> ProgramBuilder {
        let mut builder = ProgramBuilder::new();
        builder.ensure_default_lib();
        builder
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Synthesize composite properties and hand out the finished snapshot.
    pub fn finish(mut self) -> Program {
        // Synthesis can allocate new composite property types; keep going
        // until the table stops growing.
        let mut next = 0;
        while next < self.program.types.len() {
            let ty = TypeId(next as u32);
            next += 1;
            let is_composite = self
                .program
                .types
                .get(ty)
                .is_some_and(|data| data.constituents().is_some());
            if !is_composite {
                continue;
            }
            for name in self.program.property_names(ty) {
                self.resolve_property(ty, &name);
            }
        }
        self.program
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    pub fn symbol_of(&self, declaration: NodeIndex) -> Option<SymbolId> {
        self.decl_symbols.get(&declaration).copied()
    }

    /// Instance type of a class, the declared type of an interface, enum or
    /// type literal, or the type of any other node.
    pub fn instance_type(&self, declaration: NodeIndex) -> Option<TypeId> {
        self.program.node_types.get(&declaration).copied()
    }

    /// Constructor side type of a class declaration.
    pub fn static_type(&self, class: NodeIndex) -> Option<TypeId> {
        let symbol = self.symbol_of(class)?;
        self.static_types.get(&symbol).copied()
    }

    pub fn module_symbol_of(&self, source_file: NodeIndex) -> Option<SymbolId> {
        self.module_symbols.get(&source_file).copied()
    }

    /// Local symbol of a constructor parameter property.
    pub fn parameter_local(&self, parameter: NodeIndex) -> Option<SymbolId> {
        self.parameter_locals.get(&parameter).copied()
    }

    pub fn type_of(&self, node: NodeIndex) -> TypeId {
        use crate::checker::TypeChecker;
        self.program.get_type_at_location(node)
    }

    pub fn symbol_type(&self, symbol: SymbolId) -> TypeId {
        self.program
            .symbol_types
            .get(&symbol)
            .copied()
            .unwrap_or(TypeId::ANY)
    }

    pub fn name_of(&self, declaration: NodeIndex) -> NodeIndex {
        self.program.arena.name_of(declaration)
    }

    pub fn lib(&self) -> Option<LibSymbols> {
        self.lib
    }

    // =========================================================================
    // Source files
    // =========================================================================

    pub fn source_file(&mut self, file_name: &str) -> NodeIndex {
        self.add_source_file(file_name, false, false)
    }

    /// A `.d.ts` declaration file.
    pub fn declaration_file(&mut self, file_name: &str) -> NodeIndex {
        self.add_source_file(file_name, true, false)
    }

    pub fn default_lib_file(&mut self, file_name: &str) -> NodeIndex {
        self.add_source_file(file_name, true, true)
    }

    fn add_source_file(
        &mut self,
        file_name: &str,
        is_declaration_file: bool,
        is_default_lib: bool,
    ) -> NodeIndex {
        let node = self.program.arena.add(Node::new(
            SyntaxKind::SourceFile,
            NodeData::SourceFile(SourceFileData {
                file_name: file_name.to_string(),
                statements: NodeList::new(),
                is_declaration_file,
                is_default_lib,
            }),
        ));
        self.program.source_files.push(node);
        self.locals.entry(node).or_default();
        node
    }

    /// Module symbol of a source file, created on first use.
    pub fn module_symbol(&mut self, source_file: NodeIndex) -> SymbolId {
        if let Some(&symbol) = self.module_symbols.get(&source_file) {
            return symbol;
        }
        let file_name = self.program.arena.file_name_of(source_file).to_string();
        let mut symbol = Symbol::new(symbol_flags::VALUE_MODULE, format!("\"{file_name}\""));
        symbol.add_declaration(source_file, true);
        let id = self.program.symbols.alloc(symbol);
        self.module_symbols.insert(source_file, id);
        self.program.node_symbols.insert(source_file, id);
        let ty = self
            .program
            .types
            .alloc(TypeData::Object(ObjectType::new(object_flags::ANONYMOUS, Some(id))));
        self.module_types.insert(id, ty);
        self.program.symbol_types.insert(id, ty);
        id
    }

    pub fn set_js_doc(&mut self, node: NodeIndex, text: &str) {
        if let Some(n) = self.program.arena.get_mut(node) {
            n.js_doc = Some(text.to_string());
        }
    }

    pub fn set_modifiers(&mut self, node: NodeIndex, flags: u32) {
        if let Some(n) = self.program.arena.get_mut(node) {
            n.modifier_flags = flags;
        }
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    pub fn interface(&mut self, container: NodeIndex, name: &str, modifiers: u32) -> NodeIndex {
        let decl = self.add_declaration_node(
            SyntaxKind::InterfaceDeclaration,
            NodeData::ClassLike(ClassLikeData {
                name: NodeIndex::NONE,
                type_parameters: NodeList::new(),
                heritage_clauses: NodeList::new(),
                members: NodeList::new(),
            }),
            modifiers,
        );
        let name_node = self.attach_name(decl, name);
        let symbol = self.declare_in_container(
            container,
            name,
            symbol_flags::INTERFACE,
            decl,
            false,
            modifiers,
        );
        self.bind(decl, name_node, symbol);
        let ty = self.declared_type_for(symbol, object_flags::INTERFACE);
        self.program.node_types.insert(decl, ty);
        self.program.node_types.insert(name_node, ty);
        self.push_statement(container, decl);
        decl
    }

    pub fn class(&mut self, container: NodeIndex, name: &str, modifiers: u32) -> NodeIndex {
        let decl = self.add_declaration_node(
            SyntaxKind::ClassDeclaration,
            NodeData::ClassLike(ClassLikeData {
                name: NodeIndex::NONE,
                type_parameters: NodeList::new(),
                heritage_clauses: NodeList::new(),
                members: NodeList::new(),
            }),
            modifiers,
        );
        let name_node = self.attach_name(decl, name);
        let symbol =
            self.declare_in_container(container, name, symbol_flags::CLASS, decl, true, modifiers);
        self.bind(decl, name_node, symbol);

        let instance = self.declared_type_for(symbol, object_flags::CLASS);
        let static_side = match self.static_types.get(&symbol) {
            Some(&ty) => ty,
            None => {
                let ty = self
                    .program
                    .types
                    .alloc(TypeData::Object(ObjectType::new(object_flags::ANONYMOUS, Some(symbol))));
                self.static_types.insert(symbol, ty);

                let mut prototype = Symbol::new(
                    symbol_flags::PROPERTY | symbol_flags::PROTOTYPE,
                    internal_symbol_name::PROTOTYPE,
                );
                prototype.parent = Some(symbol);
                let prototype = self.program.symbols.alloc(prototype);
                self.program.symbol_types.insert(prototype, instance);
                if let Some(sym) = self.program.symbols.get_mut(symbol) {
                    sym.exports
                        .insert(internal_symbol_name::PROTOTYPE.to_string(), prototype);
                }
                self.add_type_property(ty, internal_symbol_name::PROTOTYPE, prototype);
                ty
            }
        };
        self.program.symbol_types.insert(symbol, static_side);
        self.program.node_types.insert(decl, instance);
        self.program.node_types.insert(name_node, static_side);
        self.locals.entry(decl).or_default();
        self.push_statement(container, decl);
        decl
    }

    /// `extends Base` on a class or interface.
    pub fn extends(&mut self, decl: NodeIndex, base: NodeIndex) {
        self.add_heritage(decl, base, SyntaxKind::ExtendsKeyword);
    }

    /// `implements Iface` on a class. Implemented members are not inherited.
    pub fn implements(&mut self, class: NodeIndex, interface: NodeIndex) {
        self.add_heritage(class, interface, SyntaxKind::ImplementsKeyword);
    }

    fn add_heritage(&mut self, decl: NodeIndex, base: NodeIndex, token: SyntaxKind) {
        let (Some(base_symbol), Some(base_type)) = (self.symbol_of(base), self.instance_type(base))
        else {
            return;
        };

        let existing = match self.program.arena.get(decl).map(|n| &n.data) {
            Some(NodeData::ClassLike(data)) => data.heritage_clauses.iter().find(|&clause| {
                matches!(
                    self.program.arena.get(clause).map(|n| &n.data),
                    Some(NodeData::HeritageClause(h)) if h.token == token
                )
            }),
            _ => return,
        };
        let clause = match existing {
            Some(clause) => clause,
            None => {
                let clause = self.add_node(
                    SyntaxKind::HeritageClause,
                    NodeData::HeritageClause(HeritageClauseData {
                        token,
                        types: NodeList::new(),
                    }),
                    decl,
                );
                if let Some(NodeData::ClassLike(data)) =
                    self.program.arena.get_mut(decl).map(|n| &mut n.data)
                {
                    data.heritage_clauses.push(clause);
                }
                clause
            }
        };

        let expression = self.reference_identifier(base_symbol);
        let ewta = self.add_node(
            SyntaxKind::ExpressionWithTypeArguments,
            NodeData::ExprWithTypeArgs(ExprWithTypeArgsData {
                expression,
                type_arguments: NodeList::new(),
            }),
            clause,
        );
        self.set_parent(expression, ewta);
        self.program.node_types.insert(ewta, base_type);
        if let Some(NodeData::HeritageClause(h)) =
            self.program.arena.get_mut(clause).map(|n| &mut n.data)
        {
            h.types.push(ewta);
        }

        if token == SyntaxKind::ExtendsKeyword {
            if let Some(ty) = self.instance_type(decl) {
                if let Some(TypeData::Object(object)) = self.program.types.get_mut(ty) {
                    object.base_types.push(base_type);
                }
            }
            if let (Some(symbol), Some(base_static)) =
                (self.symbol_of(decl), self.static_type(base))
            {
                if let Some(&static_side) = self.static_types.get(&symbol) {
                    if let Some(TypeData::Object(object)) =
                        self.program.types.get_mut(static_side)
                    {
                        object.base_types.push(base_static);
                    }
                }
            }
        }
    }

    /// Anonymous `{ ... }` type literal. Members are added with [`Self::property`]
    /// and [`Self::method`]; the node is attached where the type is first used.
    pub fn type_literal(&mut self) -> TypeId {
        let node = self.program.arena.add(Node::new(
            SyntaxKind::TypeLiteral,
            NodeData::TypeLiteral(TypeLiteralData {
                members: NodeList::new(),
            }),
        ));
        let mut symbol = Symbol::new(symbol_flags::TYPE_LITERAL, internal_symbol_name::TYPE);
        symbol.add_declaration(node, false);
        let symbol = self.program.symbols.alloc(symbol);
        self.decl_symbols.insert(node, symbol);
        let ty = self.declared_type_for(symbol, object_flags::ANONYMOUS);
        self.program.node_types.insert(node, ty);
        ty
    }

    /// Declaration node of a type literal or mapped type created by this builder.
    pub fn type_literal_node(&self, ty: TypeId) -> NodeIndex {
        self.program
            .types
            .get(ty)
            .and_then(TypeData::symbol)
            .and_then(|symbol| self.program.symbols.get(symbol))
            .and_then(|symbol| symbol.declarations.first().copied())
            .unwrap_or(NodeIndex::NONE)
    }

    /// Property member of a class, interface or type literal.
    ///
    /// `owner` is the declaration node (for type literals, [`Self::type_literal_node`]).
    pub fn property(&mut self, owner: NodeIndex, name: &str, modifiers: u32, ty: TypeId) -> NodeIndex {
        let kind = if self.is_class(owner) {
            SyntaxKind::PropertyDeclaration
        } else {
            SyntaxKind::PropertySignature
        };
        let decl = self.add_declaration_node(
            kind,
            NodeData::Property(PropertyData {
                name: NodeIndex::NONE,
                question_token: false,
                type_annotation: NodeIndex::NONE,
                initializer: NodeIndex::NONE,
            }),
            modifiers,
        );
        let name_node = self.attach_name(decl, name);
        let annotation = self.type_node_for(ty, decl);
        if let Some(NodeData::Property(data)) = self.program.arena.get_mut(decl).map(|n| &mut n.data) {
            data.type_annotation = annotation;
        }
        let symbol = self.declare_member(owner, name, symbol_flags::PROPERTY, decl, modifiers);
        self.bind(decl, name_node, symbol);
        self.program.symbol_types.insert(symbol, ty);
        self.program.node_types.insert(decl, ty);
        self.push_member(owner, decl);
        decl
    }

    pub fn set_optional(&mut self, declaration: NodeIndex) {
        let symbol = self.symbol_of(declaration);
        match self.program.arena.get_mut(declaration).map(|n| &mut n.data) {
            Some(NodeData::Property(data)) => data.question_token = true,
            Some(NodeData::Parameter(data)) => data.question_token = true,
            _ => return,
        }
        if let Some(sym) = symbol.and_then(|s| self.program.symbols.get_mut(s)) {
            sym.flags |= symbol_flags::OPTIONAL;
        }
    }

    /// Method of a class (with an empty body) or method signature of an
    /// interface or type literal. `None` leaves the return type to inference,
    /// see [`Self::infer_return_type`].
    pub fn method(
        &mut self,
        owner: NodeIndex,
        name: &str,
        modifiers: u32,
        return_type: Option<TypeId>,
    ) -> NodeIndex {
        let is_class = self.is_class(owner) || self.is_object_literal(owner);
        let kind = if is_class {
            SyntaxKind::MethodDeclaration
        } else {
            SyntaxKind::MethodSignature
        };
        let decl = self.function_like(kind, Some(name), modifiers, return_type, is_class);
        let name_node = self.program.arena.name_of(decl);
        let symbol = self.declare_member(owner, name, symbol_flags::METHOD, decl, modifiers);
        self.bind(decl, name_node, symbol);
        self.attach_function_type(decl, symbol, return_type);
        self.push_member(owner, decl);
        decl
    }

    /// `get name(): T { }` on a class.
    pub fn get_accessor(&mut self, owner: NodeIndex, name: &str, modifiers: u32, ty: TypeId) -> NodeIndex {
        let has_body = self.is_class(owner);
        let decl = self.function_like(SyntaxKind::GetAccessor, Some(name), modifiers, Some(ty), has_body);
        let name_node = self.program.arena.name_of(decl);
        let symbol = self.declare_member(owner, name, symbol_flags::GET_ACCESSOR, decl, modifiers);
        self.bind(decl, name_node, symbol);
        self.program.symbol_types.insert(symbol, ty);
        self.program.return_types.insert(decl, ty);
        self.push_member(owner, decl);
        decl
    }

    /// `set name(value: T) { }` on a class.
    pub fn set_accessor(&mut self, owner: NodeIndex, name: &str, modifiers: u32, ty: TypeId) -> NodeIndex {
        let has_body = self.is_class(owner);
        let decl = self.function_like(SyntaxKind::SetAccessor, Some(name), modifiers, None, has_body);
        let name_node = self.program.arena.name_of(decl);
        self.parameter(decl, "value", ty);
        let symbol = self.declare_member(owner, name, symbol_flags::SET_ACCESSOR, decl, modifiers);
        self.bind(decl, name_node, symbol);
        self.program.symbol_types.entry(symbol).or_insert(ty);
        self.push_member(owner, decl);
        decl
    }

    pub fn constructor(&mut self, class: NodeIndex) -> NodeIndex {
        let decl = self.function_like(SyntaxKind::Constructor, None, modifier_flags::NONE, None, true);
        self.push_member(class, decl);
        decl
    }

    /// Plain parameter of a function-like declaration.
    pub fn parameter(&mut self, function: NodeIndex, name: &str, ty: TypeId) -> NodeIndex {
        let param = self.add_parameter_node(function, name, modifier_flags::NONE, ty);
        let name_node = self.program.arena.name_of(param);
        let symbol = self.declare_local(
            function,
            name,
            symbol_flags::FUNCTION_SCOPED_VARIABLE,
            param,
        );
        self.bind(param, name_node, symbol);
        self.program.symbol_types.insert(symbol, ty);
        param
    }

    /// `constructor(private name: T)`: declares both the class property and
    /// the parameter local used by references inside the constructor.
    pub fn parameter_property(
        &mut self,
        constructor: NodeIndex,
        name: &str,
        modifiers: u32,
        ty: TypeId,
    ) -> NodeIndex {
        let param = self.add_parameter_node(constructor, name, modifiers, ty);
        let name_node = self.program.arena.name_of(param);
        let class = self.program.arena.parent(constructor);

        let property = self.declare_member(class, name, symbol_flags::PROPERTY, param, modifiers);
        self.bind(param, name_node, property);
        self.program.symbol_types.insert(property, ty);

        let local = self.declare_local(
            constructor,
            name,
            symbol_flags::FUNCTION_SCOPED_VARIABLE,
            param,
        );
        self.program.symbol_types.insert(local, ty);
        self.parameter_locals.insert(param, local);
        param
    }

    fn add_parameter_node(&mut self, function: NodeIndex, name: &str, modifiers: u32, ty: TypeId) -> NodeIndex {
        let param = self.add_node(
            SyntaxKind::Parameter,
            NodeData::Parameter(ParameterData {
                dot_dot_dot: false,
                name: NodeIndex::NONE,
                question_token: false,
                type_annotation: NodeIndex::NONE,
                initializer: NodeIndex::NONE,
            }),
            function,
        );
        self.set_modifiers(param, modifiers);
        let name_node = self.identifier(name, param);
        let annotation = self.type_node_for(ty, param);
        if let Some(NodeData::Parameter(data)) = self.program.arena.get_mut(param).map(|n| &mut n.data) {
            data.name = name_node;
            data.type_annotation = annotation;
        }
        if let Some(NodeData::Function(data)) = self.program.arena.get_mut(function).map(|n| &mut n.data) {
            data.parameters.push(param);
        }
        self.program.node_types.insert(param, ty);
        param
    }

    /// Mark a parameter or a binding element as `...rest`.
    pub fn set_rest(&mut self, node: NodeIndex) {
        match self.program.arena.get_mut(node).map(|n| &mut n.data) {
            Some(NodeData::Parameter(data)) => data.dot_dot_dot = true,
            Some(NodeData::BindingElement(data)) => data.dot_dot_dot = true,
            _ => {}
        }
    }

    /// Function declaration with an empty body.
    pub fn function(
        &mut self,
        container: NodeIndex,
        name: &str,
        modifiers: u32,
        return_type: Option<TypeId>,
    ) -> NodeIndex {
        let decl = self.function_like(SyntaxKind::FunctionDeclaration, Some(name), modifiers, return_type, true);
        let name_node = self.program.arena.name_of(decl);
        let symbol =
            self.declare_in_container(container, name, symbol_flags::FUNCTION, decl, true, modifiers);
        self.bind(decl, name_node, symbol);
        self.attach_function_type(decl, symbol, return_type);
        self.push_statement(container, decl);
        decl
    }

    /// Arrow function expression `(): T => { }`.
    pub fn arrow_function(&mut self, return_type: Option<TypeId>) -> NodeIndex {
        let node = self.function_like(SyntaxKind::ArrowFunction, None, modifier_flags::NONE, return_type, true);
        let mut symbol = Symbol::new(symbol_flags::FUNCTION, internal_symbol_name::FUNCTION);
        symbol.add_declaration(node, true);
        let symbol = self.program.symbols.alloc(symbol);
        self.decl_symbols.insert(node, symbol);
        self.attach_function_type(node, symbol, return_type);
        node
    }

    /// Record the inferred return type of a function-like declaration that has
    /// no return type annotation.
    pub fn infer_return_type(&mut self, declaration: NodeIndex, ty: TypeId) {
        self.program.return_types.insert(declaration, ty);
        let Some(fn_type) = self.instance_type(declaration) else {
            return;
        };
        if let Some(TypeData::Object(object)) = self.program.types.get_mut(fn_type) {
            for signature in &mut object.call_signatures {
                if signature.declaration == declaration {
                    signature.return_type = ty;
                }
            }
        }
    }

    pub fn enum_declaration(&mut self, container: NodeIndex, name: &str, modifiers: u32) -> NodeIndex {
        let decl = self.add_declaration_node(
            SyntaxKind::EnumDeclaration,
            NodeData::Enum(EnumData {
                name: NodeIndex::NONE,
                members: NodeList::new(),
            }),
            modifiers,
        );
        let name_node = self.attach_name(decl, name);
        let symbol = self.declare_in_container(
            container,
            name,
            symbol_flags::REGULAR_ENUM,
            decl,
            true,
            modifiers,
        );
        self.bind(decl, name_node, symbol);
        let ty = self.declared_type_for(symbol, object_flags::ANONYMOUS);
        self.program.symbol_types.insert(symbol, ty);
        self.program.node_types.insert(decl, ty);
        self.program.node_types.insert(name_node, ty);
        self.push_statement(container, decl);
        decl
    }

    pub fn enum_member(&mut self, enum_decl: NodeIndex, name: &str) -> NodeIndex {
        let member = self.add_node(
            SyntaxKind::EnumMember,
            NodeData::EnumMember(EnumMemberData {
                name: NodeIndex::NONE,
                initializer: NodeIndex::NONE,
            }),
            enum_decl,
        );
        let name_node = self.attach_name(member, name);
        let symbol = self.declare_member(enum_decl, name, symbol_flags::ENUM_MEMBER, member, modifier_flags::NONE);
        self.bind(member, name_node, symbol);
        self.program.symbol_types.insert(symbol, TypeId::NUMBER);
        if let Some(NodeData::Enum(data)) = self.program.arena.get_mut(enum_decl).map(|n| &mut n.data) {
            data.members.push(member);
        }
        member
    }

    /// `type Name = T`. The type node is synthesized from `ty`.
    pub fn type_alias(&mut self, container: NodeIndex, name: &str, modifiers: u32, ty: TypeId) -> NodeIndex {
        let decl = self.type_alias_node(container, name, modifiers, NodeIndex::NONE, ty);
        let type_node = self.structural_type_node(ty, decl);
        if let Some(NodeData::TypeAlias(data)) = self.program.arena.get_mut(decl).map(|n| &mut n.data) {
            data.type_node = type_node;
        }
        decl
    }

    /// `type Name = <type_node>` for a hand-built type node.
    pub fn type_alias_with_node(
        &mut self,
        container: NodeIndex,
        name: &str,
        modifiers: u32,
        type_node: NodeIndex,
    ) -> NodeIndex {
        let ty = self.type_of(type_node);
        let decl = self.type_alias_node(container, name, modifiers, type_node, ty);
        self.set_parent(type_node, decl);
        decl
    }

    fn type_alias_node(
        &mut self,
        container: NodeIndex,
        name: &str,
        modifiers: u32,
        type_node: NodeIndex,
        ty: TypeId,
    ) -> NodeIndex {
        let decl = self.add_declaration_node(
            SyntaxKind::TypeAliasDeclaration,
            NodeData::TypeAlias(TypeAliasData {
                name: NodeIndex::NONE,
                type_parameters: NodeList::new(),
                type_node,
            }),
            modifiers,
        );
        let name_node = self.attach_name(decl, name);
        let symbol =
            self.declare_in_container(container, name, symbol_flags::TYPE_ALIAS, decl, false, modifiers);
        self.bind(decl, name_node, symbol);
        self.declared_types.entry(symbol).or_insert(ty);
        self.alias_names.entry(ty).or_insert(symbol);
        self.program.node_types.insert(decl, ty);
        self.program.node_types.insert(name_node, ty);
        self.push_statement(container, decl);
        decl
    }

    /// `namespace Name { }`. Declare members into [`Self::module_block`].
    pub fn namespace(&mut self, container: NodeIndex, name: &str, modifiers: u32) -> NodeIndex {
        let decl = self.add_declaration_node(
            SyntaxKind::ModuleDeclaration,
            NodeData::Module(ModuleData {
                name: NodeIndex::NONE,
                body: NodeIndex::NONE,
            }),
            modifiers,
        );
        let name_node = self.attach_name(decl, name);
        let body = self.add_node(
            SyntaxKind::ModuleBlock,
            NodeData::Block(BlockData {
                statements: NodeList::new(),
            }),
            decl,
        );
        if let Some(NodeData::Module(data)) = self.program.arena.get_mut(decl).map(|n| &mut n.data) {
            data.body = body;
        }
        let symbol = self.declare_in_container(
            container,
            name,
            symbol_flags::VALUE_MODULE | symbol_flags::NAMESPACE_MODULE,
            decl,
            true,
            modifiers,
        );
        self.bind(decl, name_node, symbol);
        let ty = match self.module_types.get(&symbol) {
            Some(&ty) => ty,
            None => {
                let ty = self
                    .program
                    .types
                    .alloc(TypeData::Object(ObjectType::new(object_flags::ANONYMOUS, Some(symbol))));
                self.module_types.insert(symbol, ty);
                ty
            }
        };
        self.program.symbol_types.insert(symbol, ty);
        self.program.node_types.insert(name_node, ty);
        self.locals.entry(body).or_default();
        self.push_statement(container, decl);
        decl
    }

    pub fn module_block(&self, namespace: NodeIndex) -> NodeIndex {
        match self.program.arena.get(namespace).map(|n| &n.data) {
            Some(NodeData::Module(data)) => data.body,
            _ => NodeIndex::NONE,
        }
    }

    /// `const name;` with the given type and no type annotation.
    pub fn variable(&mut self, container: NodeIndex, name: &str, modifiers: u32, ty: TypeId) -> NodeIndex {
        let decl_list = self.add_node(
            SyntaxKind::VariableDeclarationList,
            NodeData::VariableDeclarationList(VariableDeclarationListData {
                kind: VariableKind::Const,
                declarations: NodeList::new(),
            }),
            NodeIndex::NONE,
        );
        let statement = self.add_declaration_node(
            SyntaxKind::VariableStatement,
            NodeData::VariableStatement(VariableStatementData {
                declaration_list: decl_list,
            }),
            modifiers,
        );
        self.set_parent(decl_list, statement);

        let decl = self.add_node(
            SyntaxKind::VariableDeclaration,
            NodeData::VariableDeclaration(VariableDeclarationData {
                name: NodeIndex::NONE,
                type_annotation: NodeIndex::NONE,
                initializer: NodeIndex::NONE,
            }),
            decl_list,
        );
        if let Some(NodeData::VariableDeclarationList(data)) =
            self.program.arena.get_mut(decl_list).map(|n| &mut n.data)
        {
            data.declarations.push(decl);
        }
        let name_node = self.attach_name(decl, name);
        let symbol = self.declare_in_container(
            container,
            name,
            symbol_flags::BLOCK_SCOPED_VARIABLE,
            decl,
            true,
            modifiers,
        );
        self.bind(decl, name_node, symbol);
        self.program.symbol_types.insert(symbol, ty);
        self.program.node_types.insert(decl, ty);
        self.push_statement(container, statement);
        decl
    }

    /// `const name = initializer;` typed by its initializer.
    pub fn local(&mut self, container: NodeIndex, name: &str, initializer: NodeIndex) -> NodeIndex {
        let ty = self.type_of(initializer);
        let decl = self.variable(container, name, modifier_flags::NONE, ty);
        self.set_initializer(decl, initializer);
        decl
    }

    pub fn set_variable_kind(&mut self, declaration: NodeIndex, kind: VariableKind) {
        let list = self.program.arena.parent(declaration);
        if let Some(NodeData::VariableDeclarationList(data)) =
            self.program.arena.get_mut(list).map(|n| &mut n.data)
        {
            data.kind = kind;
        }
        if kind == VariableKind::Var {
            if let Some(sym) = self
                .symbol_of(declaration)
                .and_then(|s| self.program.symbols.get_mut(s))
            {
                sym.flags = (sym.flags & !symbol_flags::BLOCK_SCOPED_VARIABLE)
                    | symbol_flags::FUNCTION_SCOPED_VARIABLE;
            }
        }
    }

    /// Add a type annotation for the declared type of a variable, property or parameter.
    pub fn annotate(&mut self, declaration: NodeIndex) {
        let ty = self.type_of(declaration);
        let annotation = self.type_node_for(ty, declaration);
        match self.program.arena.get_mut(declaration).map(|n| &mut n.data) {
            Some(NodeData::VariableDeclaration(data)) => data.type_annotation = annotation,
            Some(NodeData::Property(data)) => data.type_annotation = annotation,
            Some(NodeData::Parameter(data)) => data.type_annotation = annotation,
            _ => {}
        }
    }

    /// Initializer of a variable, property, parameter or enum member.
    pub fn set_initializer(&mut self, declaration: NodeIndex, initializer: NodeIndex) {
        match self.program.arena.get_mut(declaration).map(|n| &mut n.data) {
            Some(NodeData::VariableDeclaration(data)) => data.initializer = initializer,
            Some(NodeData::Property(data)) => data.initializer = initializer,
            Some(NodeData::Parameter(data)) => data.initializer = initializer,
            Some(NodeData::EnumMember(data)) => data.initializer = initializer,
            Some(NodeData::BindingElement(data)) => data.initializer = initializer,
            _ => return,
        }
        self.set_parent(initializer, declaration);
    }

    // =========================================================================
    // Imports and exports
    // =========================================================================

    /// `import * as name from './target'`
    pub fn namespace_import(&mut self, file: NodeIndex, name: &str, target_file: NodeIndex) -> SymbolId {
        let target = self.module_symbol(target_file);
        let specifier = self.program.arena.file_name_of(target_file).to_string();
        let import = self.add_import_declaration(file, specifier);
        let binding = self.add_node(
            SyntaxKind::NamespaceImport,
            NodeData::NamespaceImport(NamespaceImportData {
                name: NodeIndex::NONE,
            }),
            import,
        );
        let name_node = self.attach_name(binding, name);
        self.push_import_binding(import, binding);
        let alias = self.declare_alias(file, name, binding, target);
        self.bind(binding, name_node, alias);
        alias
    }

    /// `import { target as name } from '...'`
    pub fn named_import(&mut self, file: NodeIndex, name: &str, target: SymbolId) -> SymbolId {
        let (target_name, specifier) = self.import_source(target);
        let import = self.add_import_declaration(file, specifier);
        let binding = self.add_node(
            SyntaxKind::ImportSpecifier,
            NodeData::Specifier(SpecifierData {
                property_name: NodeIndex::NONE,
                name: NodeIndex::NONE,
            }),
            import,
        );
        if target_name != name {
            let property_name = self.identifier(&target_name, binding);
            if let Some(NodeData::Specifier(data)) = self.program.arena.get_mut(binding).map(|n| &mut n.data) {
                data.property_name = property_name;
            }
            self.program.node_symbols.insert(property_name, target);
        }
        let name_node = self.attach_name(binding, name);
        self.push_import_binding(import, binding);
        let alias = self.declare_alias(file, name, binding, target);
        self.bind(binding, name_node, alias);
        alias
    }

    fn import_source(&self, target: SymbolId) -> (String, String) {
        let Some(symbol) = self.program.symbols.get(target) else {
            return (String::new(), String::new());
        };
        let file = symbol
            .declarations
            .first()
            .map(|&decl| self.program.arena.file_name_of(decl).to_string())
            .unwrap_or_default();
        (symbol.escaped_name.clone(), file)
    }

    fn add_import_declaration(&mut self, file: NodeIndex, module_specifier: String) -> NodeIndex {
        let import = self.add_node(
            SyntaxKind::ImportDeclaration,
            NodeData::ImportDeclaration(ImportDeclarationData {
                bindings: NodeList::new(),
                module_specifier,
            }),
            NodeIndex::NONE,
        );
        self.push_statement(file, import);
        import
    }

    fn push_import_binding(&mut self, import: NodeIndex, binding: NodeIndex) {
        if let Some(NodeData::ImportDeclaration(data)) = self.program.arena.get_mut(import).map(|n| &mut n.data) {
            data.bindings.push(binding);
        }
    }

    fn declare_alias(&mut self, file: NodeIndex, name: &str, declaration: NodeIndex, target: SymbolId) -> SymbolId {
        let mut symbol = Symbol::new(symbol_flags::ALIAS, name);
        symbol.add_declaration(declaration, false);
        symbol.alias_target = Some(target);
        let alias = self.program.symbols.alloc(symbol);
        self.locals.entry(file).or_default().insert(name.to_string(), alias);
        if let Some(&ty) = self.program.symbol_types.get(&target) {
            self.program.symbol_types.insert(alias, ty);
        }
        alias
    }

    /// `export { target as exported_name }`
    pub fn export_specifier(&mut self, file: NodeIndex, target: SymbolId, exported_name: &str) -> SymbolId {
        let target_name = self
            .program
            .symbols
            .get(target)
            .map(|s| s.escaped_name.clone())
            .unwrap_or_default();
        let export = self.add_node(
            SyntaxKind::ExportDeclaration,
            NodeData::ExportDeclaration(ExportDeclarationData {
                specifiers: NodeList::new(),
                module_specifier: None,
            }),
            NodeIndex::NONE,
        );
        let specifier = self.add_node(
            SyntaxKind::ExportSpecifier,
            NodeData::Specifier(SpecifierData {
                property_name: NodeIndex::NONE,
                name: NodeIndex::NONE,
            }),
            export,
        );
        if target_name != exported_name {
            let property_name = self.identifier(&target_name, specifier);
            self.program.node_symbols.insert(property_name, target);
            if let Some(NodeData::Specifier(data)) = self.program.arena.get_mut(specifier).map(|n| &mut n.data) {
                data.property_name = property_name;
            }
        }
        let name_node = self.attach_name(specifier, exported_name);
        if let Some(NodeData::ExportDeclaration(data)) = self.program.arena.get_mut(export).map(|n| &mut n.data) {
            data.specifiers.push(specifier);
        }
        self.push_statement(file, export);

        let mut symbol = Symbol::new(symbol_flags::ALIAS, exported_name);
        symbol.add_declaration(specifier, false);
        symbol.alias_target = Some(target);
        let alias = self.program.symbols.alloc(symbol);
        self.bind(specifier, name_node, alias);
        self.add_module_export(file, exported_name, alias);
        alias
    }

    /// `export default target`
    pub fn export_default(&mut self, file: NodeIndex, target: SymbolId) -> SymbolId {
        self.export_assignment(file, target, false)
    }

    /// `export = target`
    pub fn export_equals(&mut self, file: NodeIndex, target: SymbolId) -> SymbolId {
        self.export_assignment(file, target, true)
    }

    fn export_assignment(&mut self, file: NodeIndex, target: SymbolId, is_export_equals: bool) -> SymbolId {
        let expression = self.reference_identifier(target);
        let assignment = self.add_node(
            SyntaxKind::ExportAssignment,
            NodeData::ExportAssignment(ExportAssignmentData {
                expression,
                is_export_equals,
            }),
            NodeIndex::NONE,
        );
        self.set_parent(expression, assignment);
        self.push_statement(file, assignment);

        let name = if is_export_equals {
            internal_symbol_name::EXPORT_EQUALS
        } else {
            internal_symbol_name::DEFAULT
        };
        let mut symbol = Symbol::new(symbol_flags::ALIAS, name);
        symbol.add_declaration(assignment, false);
        symbol.alias_target = Some(target);
        let alias = self.program.symbols.alloc(symbol);
        self.decl_symbols.insert(assignment, alias);
        self.add_module_export(file, name, alias);
        alias
    }

    fn add_module_export(&mut self, file: NodeIndex, name: &str, symbol: SymbolId) {
        let module = self.module_symbol(file);
        if let Some(sym) = self.program.symbols.get_mut(module) {
            sym.exports.insert(name.to_string(), symbol);
        }
        if let Some(&ty) = self.module_types.get(&module) {
            self.add_type_property(ty, name, symbol);
        }
    }

    // =========================================================================
    // Types
    // =========================================================================

    pub fn string_literal_type(&mut self, value: &str) -> TypeId {
        self.program.types.string_literal(value)
    }

    pub fn union(&mut self, types: &[TypeId]) -> TypeId {
        self.composite(types, true)
    }

    pub fn intersection(&mut self, types: &[TypeId]) -> TypeId {
        self.composite(types, false)
    }

    fn composite(&mut self, types: &[TypeId], is_union: bool) -> TypeId {
        let mut members: Vec<TypeId> = Vec::with_capacity(types.len());
        for &ty in types {
            if !members.contains(&ty) {
                members.push(ty);
            }
        }
        if members.len() == 1 {
            return members[0];
        }
        let data = if is_union {
            TypeData::Union(members)
        } else {
            TypeData::Intersection(members)
        };
        // Structurally equal composites share one id.
        if let Some(existing) = self
            .program
            .types
            .ids()
            .find(|&id| self.program.types.get(id) == Some(&data))
        {
            return existing;
        }
        self.program.types.alloc(data)
    }

    /// `[A, B, ...]`
    pub fn tuple(&mut self, element_types: &[TypeId]) -> TypeId {
        let mut object = ObjectType::new(object_flags::TUPLE | object_flags::REFERENCE, None);
        object.element_types = element_types.to_vec();
        for (i, &element) in element_types.iter().enumerate() {
            let name = i.to_string();
            let symbol = self
                .program
                .symbols
                .alloc(Symbol::new(symbol_flags::PROPERTY | symbol_flags::TRANSIENT, name.clone()));
            self.program.symbol_types.insert(symbol, element);
            object.properties.insert(name, symbol);
        }
        let length = self
            .program
            .symbols
            .alloc(Symbol::new(symbol_flags::PROPERTY | symbol_flags::TRANSIENT, "length"));
        self.program.symbol_types.insert(length, TypeId::NUMBER);
        object.properties.insert("length".to_string(), length);
        self.program.types.alloc(TypeData::Object(object))
    }

    /// `{ [P in 'a' | 'b']?: T }`. The synthesized properties have no declarations.
    pub fn mapped_type(&mut self, keys: &[&str], template: TypeId) -> TypeId {
        let key_types: Vec<TypeId> = keys.iter().map(|key| self.string_literal_type(key)).collect();
        let constraint = self.union(&key_types);
        let (node, ty) = self.mapped_type_node(constraint, template, false);
        for key in keys {
            let symbol = self.program.symbols.alloc(Symbol::new(
                symbol_flags::PROPERTY | symbol_flags::TRANSIENT | symbol_flags::OPTIONAL,
                *key,
            ));
            self.program.symbol_types.insert(symbol, template);
            self.add_type_property(ty, key, symbol);
        }
        trace!(?node, ?ty, "mapped type over keys");
        ty
    }

    /// `{ [P in keyof S]?: S[P] }`. Each property keeps the declarations of the
    /// source property it was mapped from.
    pub fn homomorphic_mapped_type(&mut self, source: TypeId) -> TypeId {
        let (_, ty) = self.mapped_type_node(source, source, true);
        for name in self.program.property_names(source) {
            let Some(source_property) = self.resolve_property(source, &name) else {
                continue;
            };
            let mut symbol = Symbol::new(
                symbol_flags::PROPERTY | symbol_flags::TRANSIENT | symbol_flags::OPTIONAL,
                name.as_str(),
            );
            if let Some(source_symbol) = self.program.symbols.get(source_property) {
                symbol.declarations = source_symbol.declarations.clone();
                symbol.value_declaration = source_symbol.value_declaration;
            }
            let symbol = self.program.symbols.alloc(symbol);
            let property_type = self.symbol_type(source_property);
            self.program.symbol_types.insert(symbol, property_type);
            self.add_type_property(ty, &name, symbol);
        }
        ty
    }

    fn mapped_type_node(&mut self, constraint: TypeId, template: TypeId, keyof: bool) -> (NodeIndex, TypeId) {
        let node = self.program.arena.add(Node::new(
            SyntaxKind::MappedType,
            NodeData::MappedType(MappedTypeData {
                type_parameter: NodeIndex::NONE,
                question_token: true,
                type_node: NodeIndex::NONE,
            }),
        ));
        let type_parameter = self.add_node(
            SyntaxKind::TypeParameter,
            NodeData::TypeParameter(TypeParameterData {
                name: NodeIndex::NONE,
                constraint: NodeIndex::NONE,
            }),
            node,
        );
        let parameter_name = self.attach_name(type_parameter, "P");
        let mut constraint_node = self.type_node_for(constraint, type_parameter);
        if keyof {
            let operator = self.add_node(
                SyntaxKind::TypeOperator,
                NodeData::TypeOperator(TypeOperatorData {
                    operator: SyntaxKind::KeyOfKeyword,
                    type_node: constraint_node,
                }),
                type_parameter,
            );
            self.set_parent(constraint_node, operator);
            constraint_node = operator;
        }
        if let Some(NodeData::TypeParameter(data)) =
            self.program.arena.get_mut(type_parameter).map(|n| &mut n.data)
        {
            data.constraint = constraint_node;
        }

        let mut parameter_symbol = Symbol::new(symbol_flags::TYPE_PARAMETER, "P");
        parameter_symbol.add_declaration(type_parameter, false);
        let parameter_symbol = self.program.symbols.alloc(parameter_symbol);
        self.program.node_symbols.insert(parameter_name, parameter_symbol);

        let template_node = self.type_node_for(template, node);
        if let Some(NodeData::MappedType(data)) = self.program.arena.get_mut(node).map(|n| &mut n.data) {
            data.type_parameter = type_parameter;
            data.type_node = template_node;
        }

        let mut symbol = Symbol::new(symbol_flags::TYPE_LITERAL, internal_symbol_name::TYPE);
        symbol.add_declaration(node, false);
        let symbol = self.program.symbols.alloc(symbol);
        self.decl_symbols.insert(node, symbol);
        let ty = self
            .program
            .types
            .alloc(TypeData::Object(ObjectType::new(object_flags::MAPPED, Some(symbol))));
        self.declared_types.insert(symbol, ty);
        self.program.node_types.insert(node, ty);
        (node, ty)
    }

    /// Use `interface_decl`'s type as the apparent type of a primitive.
    pub fn set_apparent_type(&mut self, primitive: TypeId, interface_decl: NodeIndex) {
        if let Some(ty) = self.instance_type(interface_decl) {
            self.program.apparent_types.insert(primitive, ty);
        }
    }

    /// `typeof a.b.c` type query node for a chain of symbols.
    pub fn type_query(&mut self, path: &[SymbolId]) -> NodeIndex {
        let query = self.program.arena.add(Node::new(
            SyntaxKind::TypeQuery,
            NodeData::TypeQuery(TypeQueryData {
                expr_name: NodeIndex::NONE,
            }),
        ));
        let mut name = NodeIndex::NONE;
        for &symbol in path {
            let ident = self.reference_identifier(symbol);
            name = if name.is_none() {
                ident
            } else {
                let qualified = self.program.arena.add(Node::new(
                    SyntaxKind::QualifiedName,
                    NodeData::QualifiedName(QualifiedNameData {
                        left: name,
                        right: ident,
                    }),
                ));
                self.set_parent(name, qualified);
                self.set_parent(ident, qualified);
                qualified
            };
        }
        self.set_parent(name, query);
        if let Some(NodeData::TypeQuery(data)) = self.program.arena.get_mut(query).map(|n| &mut n.data) {
            data.expr_name = name;
        }
        if let Some(&last) = path.last() {
            let ty = self.symbol_type(last);
            self.program.node_types.insert(query, ty);
        }
        query
    }

    /// Type node describing `ty`, attached under `parent`. Named types become
    /// references to their declaration, type literals attach their declaration.
    pub fn type_node_for(&mut self, ty: TypeId, parent: NodeIndex) -> NodeIndex {
        if let Some(&alias) = self.alias_names.get(&ty) {
            return self.type_reference(alias, ty, parent);
        }
        self.structural_type_node(ty, parent)
    }

    fn structural_type_node(&mut self, ty: TypeId, parent: NodeIndex) -> NodeIndex {
        let Some(data) = self.program.types.get(ty).cloned() else {
            return self.keyword_type(SyntaxKind::AnyKeyword, ty, parent);
        };
        match data {
            TypeData::Intrinsic(kind) => {
                let keyword = match kind {
                    crate::types::IntrinsicKind::Any => SyntaxKind::AnyKeyword,
                    crate::types::IntrinsicKind::Unknown => SyntaxKind::UnknownKeyword,
                    crate::types::IntrinsicKind::String => SyntaxKind::StringKeyword,
                    crate::types::IntrinsicKind::Number => SyntaxKind::NumberKeyword,
                    crate::types::IntrinsicKind::Boolean => SyntaxKind::BooleanKeyword,
                    crate::types::IntrinsicKind::Void => SyntaxKind::VoidKeyword,
                    crate::types::IntrinsicKind::Undefined => SyntaxKind::UndefinedKeyword,
                    crate::types::IntrinsicKind::Null => SyntaxKind::NullKeyword,
                    crate::types::IntrinsicKind::Never => SyntaxKind::NeverKeyword,
                };
                self.keyword_type(keyword, ty, parent)
            }
            TypeData::StringLiteral(value) => {
                let node = self.add_node(
                    SyntaxKind::LiteralType,
                    NodeData::LiteralType(LiteralTypeData {
                        literal: NodeIndex::NONE,
                    }),
                    parent,
                );
                let literal = self.add_node(
                    SyntaxKind::StringLiteral,
                    NodeData::Literal(LiteralData { text: value }),
                    node,
                );
                if let Some(NodeData::LiteralType(data)) = self.program.arena.get_mut(node).map(|n| &mut n.data) {
                    data.literal = literal;
                }
                self.program.node_types.insert(node, ty);
                node
            }
            TypeData::NumberLiteral(_) => self.keyword_type(SyntaxKind::NumberKeyword, ty, parent),
            TypeData::Union(types) => {
                self.composite_type_node(SyntaxKind::UnionType, &types, ty, parent)
            }
            TypeData::Intersection(types) => {
                self.composite_type_node(SyntaxKind::IntersectionType, &types, ty, parent)
            }
            TypeData::TypeParameter { symbol, .. } => self.type_reference(symbol, ty, parent),
            TypeData::Object(object) => {
                if object.has_flags(object_flags::TUPLE) {
                    return self.composite_type_node(SyntaxKind::TupleType, &object.element_types, ty, parent);
                }
                let Some(symbol) = object.symbol else {
                    return self.keyword_type(SyntaxKind::ObjectKeyword, ty, parent);
                };
                let declaration = self
                    .program
                    .symbols
                    .get(symbol)
                    .and_then(|s| s.declarations.first().copied())
                    .unwrap_or(NodeIndex::NONE);
                let Some((kind, attached)) = self
                    .program
                    .arena
                    .get(declaration)
                    .map(|node| (node.kind, node.parent.is_some()))
                else {
                    return self.keyword_type(SyntaxKind::ObjectKeyword, ty, parent);
                };
                match kind {
                    SyntaxKind::TypeLiteral | SyntaxKind::MappedType if !attached => {
                        self.set_parent(declaration, parent);
                        declaration
                    }
                    SyntaxKind::TypeLiteral
                    | SyntaxKind::MappedType
                    | SyntaxKind::ObjectLiteralExpression
                    | SyntaxKind::ArrowFunction => {
                        self.keyword_type(SyntaxKind::ObjectKeyword, ty, parent)
                    }
                    _ if object.has_flags(object_flags::ANONYMOUS) && kind.is_function_like() => {
                        let query = self.type_query(&[symbol]);
                        self.set_parent(query, parent);
                        query
                    }
                    _ => self.type_reference(symbol, ty, parent),
                }
            }
        }
    }

    fn keyword_type(&mut self, keyword: SyntaxKind, ty: TypeId, parent: NodeIndex) -> NodeIndex {
        let node = self.add_node(keyword, NodeData::Token, parent);
        self.program.node_types.insert(node, ty);
        node
    }

    fn composite_type_node(&mut self, kind: SyntaxKind, types: &[TypeId], ty: TypeId, parent: NodeIndex) -> NodeIndex {
        let node = self.add_node(
            kind,
            NodeData::CompositeType(CompositeTypeData {
                types: NodeList::new(),
            }),
            parent,
        );
        let children: Vec<NodeIndex> = types.iter().map(|&t| self.type_node_for(t, node)).collect();
        if let Some(NodeData::CompositeType(data)) = self.program.arena.get_mut(node).map(|n| &mut n.data) {
            data.types = NodeList::from(children);
        }
        self.program.node_types.insert(node, ty);
        node
    }

    fn type_reference(&mut self, symbol: SymbolId, ty: TypeId, parent: NodeIndex) -> NodeIndex {
        let node = self.add_node(
            SyntaxKind::TypeReference,
            NodeData::TypeReference(TypeReferenceData {
                type_name: NodeIndex::NONE,
                type_arguments: NodeList::new(),
            }),
            parent,
        );
        let name = self
            .program
            .symbols
            .get(symbol)
            .map(|s| s.escaped_name.clone())
            .unwrap_or_default();
        let type_name = self.identifier(&name, node);
        self.program.node_symbols.insert(type_name, symbol);
        self.program.node_types.insert(type_name, ty);
        if let Some(NodeData::TypeReference(data)) = self.program.arena.get_mut(node).map(|n| &mut n.data) {
            data.type_name = type_name;
        }
        self.program.node_types.insert(node, ty);
        node
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    /// `this` inside a class.
    pub fn this_expr(&mut self, class: NodeIndex) -> NodeIndex {
        let node = self.program.arena.add(Node::new(SyntaxKind::ThisKeyword, NodeData::Token));
        if let Some(ty) = self.instance_type(class) {
            self.program.node_types.insert(node, ty);
        }
        node
    }

    /// Identifier referencing `symbol`.
    pub fn ident(&mut self, symbol: SymbolId) -> NodeIndex {
        self.reference_identifier(symbol)
    }

    pub fn string_literal(&mut self, text: &str) -> NodeIndex {
        let node = self.program.arena.add(Node::new(
            SyntaxKind::StringLiteral,
            NodeData::Literal(LiteralData {
                text: text.to_string(),
            }),
        ));
        let ty = self.program.types.string_literal(text);
        self.program.node_types.insert(node, ty);
        node
    }

    pub fn numeric_literal(&mut self, text: &str) -> NodeIndex {
        let node = self.program.arena.add(Node::new(
            SyntaxKind::NumericLiteral,
            NodeData::Literal(LiteralData {
                text: text.to_string(),
            }),
        ));
        self.program.node_types.insert(node, TypeId::NUMBER);
        node
    }

    /// `expression.name`
    pub fn property_access(&mut self, expression: NodeIndex, name: &str) -> NodeIndex {
        let node = self.program.arena.add(Node::new(
            SyntaxKind::PropertyAccessExpression,
            NodeData::AccessExpr(AccessExprData {
                expression,
                name_or_argument: NodeIndex::NONE,
            }),
        ));
        self.set_parent(expression, node);
        let name_node = self.identifier(name, node);
        if let Some(NodeData::AccessExpr(data)) = self.program.arena.get_mut(node).map(|n| &mut n.data) {
            data.name_or_argument = name_node;
        }
        let receiver = self.type_of(expression);
        match self.resolve_property(receiver, name) {
            Some(property) => {
                self.program.node_symbols.insert(name_node, property);
                let ty = self.symbol_type(property);
                self.program.node_types.insert(node, ty);
                self.program.node_types.insert(name_node, ty);
            }
            None => {
                self.program.node_types.insert(node, TypeId::ANY);
            }
        }
        node
    }

    /// `expression['key']`
    pub fn element_access(&mut self, expression: NodeIndex, key: &str) -> NodeIndex {
        let node = self.program.arena.add(Node::new(
            SyntaxKind::ElementAccessExpression,
            NodeData::AccessExpr(AccessExprData {
                expression,
                name_or_argument: NodeIndex::NONE,
            }),
        ));
        self.set_parent(expression, node);
        let argument = self.string_literal(key);
        self.set_parent(argument, node);
        if let Some(NodeData::AccessExpr(data)) = self.program.arena.get_mut(node).map(|n| &mut n.data) {
            data.name_or_argument = argument;
        }
        let receiver = self.type_of(expression);
        match self.resolve_property(receiver, key) {
            Some(property) => {
                self.program.node_symbols.insert(argument, property);
                let ty = self.symbol_type(property);
                self.program.node_types.insert(node, ty);
            }
            None => {
                self.program.node_types.insert(node, TypeId::ANY);
            }
        }
        node
    }

    /// `callee(args)`, typed by the callee's first call signature.
    pub fn call(&mut self, callee: NodeIndex, arguments: &[NodeIndex]) -> NodeIndex {
        let node = self.program.arena.add(Node::new(
            SyntaxKind::CallExpression,
            NodeData::CallExpr(CallExprData {
                expression: callee,
                type_arguments: NodeList::new(),
                arguments: NodeList::from(arguments.to_vec()),
            }),
        ));
        self.set_parent(callee, node);
        for &argument in arguments {
            self.set_parent(argument, node);
        }
        let callee_type = self.type_of(callee);
        let return_type = self
            .program
            .types
            .get(callee_type)
            .and_then(TypeData::as_object)
            .and_then(|object| object.call_signatures.first())
            .map_or(TypeId::ANY, |signature| signature.return_type);
        self.program.node_types.insert(node, return_type);
        node
    }

    /// `new Class(args)`
    pub fn new_expr(&mut self, class: NodeIndex, arguments: &[NodeIndex]) -> NodeIndex {
        let expression = match self.symbol_of(class) {
            Some(symbol) => self.reference_identifier(symbol),
            None => self.program.arena.add(Node::new(SyntaxKind::Unknown, NodeData::Token)),
        };
        let node = self.program.arena.add(Node::new(
            SyntaxKind::NewExpression,
            NodeData::CallExpr(CallExprData {
                expression,
                type_arguments: NodeList::new(),
                arguments: NodeList::from(arguments.to_vec()),
            }),
        ));
        self.set_parent(expression, node);
        for &argument in arguments {
            self.set_parent(argument, node);
        }
        let ty = self.instance_type(class).unwrap_or(TypeId::ANY);
        self.program.node_types.insert(node, ty);
        node
    }

    /// `{ }` object literal. Add members with [`Self::property_assignment`]
    /// and [`Self::shorthand_property`].
    pub fn object_literal(&mut self, contextual_type: Option<TypeId>) -> NodeIndex {
        let node = self.program.arena.add(Node::new(
            SyntaxKind::ObjectLiteralExpression,
            NodeData::LiteralExpr(LiteralExprData {
                elements: NodeList::new(),
            }),
        ));
        let mut symbol = Symbol::new(symbol_flags::OBJECT_LITERAL, internal_symbol_name::OBJECT);
        symbol.add_declaration(node, true);
        let symbol = self.program.symbols.alloc(symbol);
        self.decl_symbols.insert(node, symbol);
        let ty = self.program.types.alloc(TypeData::Object(ObjectType::new(
            object_flags::ANONYMOUS | object_flags::OBJECT_LITERAL,
            Some(symbol),
        )));
        self.program.node_types.insert(node, ty);
        if let Some(contextual) = contextual_type {
            self.program.contextual_types.insert(node, contextual);
        }
        node
    }

    /// `name: initializer` inside an object literal.
    pub fn property_assignment(&mut self, object: NodeIndex, name: &str, initializer: NodeIndex) -> NodeIndex {
        let node = self.add_node(
            SyntaxKind::PropertyAssignment,
            NodeData::PropertyAssignment(PropertyAssignmentData {
                name: NodeIndex::NONE,
                initializer,
            }),
            object,
        );
        self.set_parent(initializer, node);
        let name_node = self.attach_name(node, name);
        let ty = self.type_of(initializer);
        self.add_object_literal_member(object, node, name_node, name, ty);
        node
    }

    /// `{ name }` referencing the local `value`.
    pub fn shorthand_property(&mut self, object: NodeIndex, value: SymbolId) -> NodeIndex {
        let name = self
            .program
            .symbols
            .get(value)
            .map(|s| s.escaped_name.clone())
            .unwrap_or_default();
        let node = self.add_node(
            SyntaxKind::ShorthandPropertyAssignment,
            NodeData::ShorthandPropertyAssignment(ShorthandPropertyAssignmentData {
                name: NodeIndex::NONE,
            }),
            object,
        );
        let name_node = self.attach_name(node, &name);
        let ty = self.symbol_type(value);
        self.add_object_literal_member(object, node, name_node, &name, ty);
        node
    }

    fn add_object_literal_member(
        &mut self,
        object: NodeIndex,
        member: NodeIndex,
        name_node: NodeIndex,
        name: &str,
        ty: TypeId,
    ) {
        let symbol = self.declare_member(object, name, symbol_flags::PROPERTY, member, modifier_flags::NONE);
        self.bind(member, name_node, symbol);
        self.program.symbol_types.insert(symbol, ty);
        if let Some(NodeData::LiteralExpr(data)) = self.program.arena.get_mut(object).map(|n| &mut n.data) {
            data.elements.push(member);
        }
    }

    pub fn array_literal(&mut self, elements: &[NodeIndex]) -> NodeIndex {
        let node = self.program.arena.add(Node::new(
            SyntaxKind::ArrayLiteralExpression,
            NodeData::LiteralExpr(LiteralExprData {
                elements: NodeList::from(elements.to_vec()),
            }),
        ));
        for &element in elements {
            self.set_parent(element, node);
        }
        node
    }

    pub fn binary(&mut self, left: NodeIndex, operator: SyntaxKind, right: NodeIndex) -> NodeIndex {
        let node = self.program.arena.add(Node::new(
            SyntaxKind::BinaryExpression,
            NodeData::BinaryExpr(BinaryExprData {
                left,
                operator_token: operator,
                right,
            }),
        ));
        self.set_parent(left, node);
        self.set_parent(right, node);
        let ty = match operator {
            SyntaxKind::InKeyword
            | SyntaxKind::EqualsEqualsEqualsToken
            | SyntaxKind::ExclamationEqualsEqualsToken
            | SyntaxKind::LessThanToken
            | SyntaxKind::GreaterThanToken => TypeId::BOOLEAN,
            SyntaxKind::EqualsToken => self.type_of(right),
            _ => TypeId::ANY,
        };
        self.program.node_types.insert(node, ty);
        node
    }

    /// `'key' in expression`
    pub fn in_expr(&mut self, key: &str, expression: NodeIndex) -> NodeIndex {
        let literal = self.string_literal(key);
        self.binary(literal, SyntaxKind::InKeyword, expression)
    }

    pub fn paren(&mut self, expression: NodeIndex) -> NodeIndex {
        let ty = self.type_of(expression);
        self.wrapped(SyntaxKind::ParenthesizedExpression, expression, NodeIndex::NONE, ty)
    }

    /// `expression as T`
    pub fn as_expr(&mut self, expression: NodeIndex, ty: TypeId) -> NodeIndex {
        let node = self.wrapped(SyntaxKind::AsExpression, expression, NodeIndex::NONE, ty);
        let type_node = self.type_node_for(ty, node);
        if let Some(NodeData::WrappedExpr(data)) = self.program.arena.get_mut(node).map(|n| &mut n.data) {
            data.type_node = type_node;
        }
        node
    }

    fn wrapped(&mut self, kind: SyntaxKind, expression: NodeIndex, type_node: NodeIndex, ty: TypeId) -> NodeIndex {
        let node = self.program.arena.add(Node::new(
            kind,
            NodeData::WrappedExpr(WrappedExprData {
                expression,
                type_node,
            }),
        ));
        self.set_parent(expression, node);
        self.program.node_types.insert(node, ty);
        node
    }

    /// `console.log(args)` using the default library.
    pub fn console_log(&mut self, block: NodeIndex, arguments: &[NodeIndex]) -> NodeIndex {
        let lib = self.ensure_default_lib();
        let console = self.ident(lib.console);
        let log = self.property_access(console, "log");
        let call = self.call(log, arguments);
        self.expression_statement(block, call)
    }

    // =========================================================================
    // Statements
    // =========================================================================

    /// Body block of a function-like declaration.
    pub fn body(&mut self, function: NodeIndex) -> NodeIndex {
        match self.program.arena.get(function).map(|n| &n.data) {
            Some(NodeData::Function(data)) if data.body.is_some() => return data.body,
            Some(NodeData::Function(_)) => {}
            _ => return NodeIndex::NONE,
        }
        let block = self.add_node(
            SyntaxKind::Block,
            NodeData::Block(BlockData {
                statements: NodeList::new(),
            }),
            function,
        );
        if let Some(NodeData::Function(data)) = self.program.arena.get_mut(function).map(|n| &mut n.data) {
            data.body = block;
        }
        self.locals.entry(block).or_default();
        block
    }

    pub fn expression_statement(&mut self, block: NodeIndex, expression: NodeIndex) -> NodeIndex {
        let statement = self.add_node(
            SyntaxKind::ExpressionStatement,
            NodeData::ExprStatement(ExprStatementData { expression }),
            NodeIndex::NONE,
        );
        self.set_parent(expression, statement);
        self.push_statement(block, statement);
        statement
    }

    pub fn return_statement(&mut self, block: NodeIndex, expression: NodeIndex) -> NodeIndex {
        let statement = self.add_node(
            SyntaxKind::ReturnStatement,
            NodeData::ExprStatement(ExprStatementData { expression }),
            NodeIndex::NONE,
        );
        self.set_parent(expression, statement);
        self.push_statement(block, statement);
        statement
    }

    /// `if (condition) { }` and returns the `then` block.
    pub fn if_statement(&mut self, block: NodeIndex, condition: NodeIndex) -> NodeIndex {
        let statement = self.add_node(
            SyntaxKind::IfStatement,
            NodeData::IfStatement(IfStatementData {
                expression: condition,
                then_statement: NodeIndex::NONE,
                else_statement: NodeIndex::NONE,
            }),
            NodeIndex::NONE,
        );
        self.set_parent(condition, statement);
        let then_block = self.add_node(
            SyntaxKind::Block,
            NodeData::Block(BlockData {
                statements: NodeList::new(),
            }),
            statement,
        );
        if let Some(NodeData::IfStatement(data)) = self.program.arena.get_mut(statement).map(|n| &mut n.data) {
            data.then_statement = then_block;
        }
        self.locals.entry(then_block).or_default();
        self.push_statement(block, statement);
        then_block
    }

    /// `const { a, b: c } = initializer;`
    pub fn destructure(
        &mut self,
        container: NodeIndex,
        initializer: NodeIndex,
        bindings: &[BindingSpec<'_>],
    ) -> Destructuring {
        let pattern_type = self.type_of(initializer);
        let declaration = self.variable(container, "", modifier_flags::NONE, pattern_type);

        // `variable` bound an empty identifier name; replace it with the pattern.
        let placeholder = self.program.arena.name_of(declaration);
        self.program.node_symbols.remove(&placeholder);
        if let Some(symbol) = self.decl_symbols.remove(&declaration) {
            if let Some(table) = self.locals.get_mut(&container) {
                table.shift_remove("");
            }
            if let Some(sym) = self.program.symbols.get_mut(symbol) {
                sym.declarations.clear();
                sym.value_declaration = NodeIndex::NONE;
            }
        }

        let pattern = self.add_node(
            SyntaxKind::ObjectBindingPattern,
            NodeData::BindingPattern(BindingPatternData {
                elements: NodeList::new(),
            }),
            declaration,
        );
        self.program.node_types.insert(pattern, pattern_type);
        if let Some(NodeData::VariableDeclaration(data)) =
            self.program.arena.get_mut(declaration).map(|n| &mut n.data)
        {
            data.name = pattern;
        }
        self.set_initializer(declaration, initializer);

        let mut elements = Vec::with_capacity(bindings.len());
        let mut locals = Vec::with_capacity(bindings.len());
        for binding in bindings {
            let (property, local) = match *binding {
                BindingSpec::Shorthand(name) => (name, name),
                BindingSpec::Renamed { property, local } => (property, local),
            };
            let element = self.add_node(
                SyntaxKind::BindingElement,
                NodeData::BindingElement(BindingElementData {
                    dot_dot_dot: false,
                    property_name: NodeIndex::NONE,
                    name: NodeIndex::NONE,
                    initializer: NodeIndex::NONE,
                }),
                pattern,
            );
            let property_symbol = self.resolve_property(pattern_type, property);
            if let BindingSpec::Renamed { .. } = binding {
                let property_name = self.identifier(property, element);
                if let Some(symbol) = property_symbol {
                    self.program.node_symbols.insert(property_name, symbol);
                }
                if let Some(NodeData::BindingElement(data)) =
                    self.program.arena.get_mut(element).map(|n| &mut n.data)
                {
                    data.property_name = property_name;
                }
            }
            let name_node = self.identifier(local, element);
            if let Some(NodeData::BindingElement(data)) = self.program.arena.get_mut(element).map(|n| &mut n.data) {
                data.name = name_node;
            }
            let local_symbol =
                self.declare_local(container, local, symbol_flags::BLOCK_SCOPED_VARIABLE, element);
            self.bind(element, name_node, local_symbol);
            let ty = property_symbol.map_or(TypeId::ANY, |symbol| self.symbol_type(symbol));
            self.program.symbol_types.insert(local_symbol, ty);
            self.program.node_types.insert(element, ty);
            if let Some(NodeData::BindingPattern(data)) = self.program.arena.get_mut(pattern).map(|n| &mut n.data) {
                data.elements.push(element);
            }
            elements.push(element);
            locals.push(local_symbol);
        }

        Destructuring {
            declaration,
            pattern,
            elements,
            locals,
        }
    }

    // =========================================================================
    // Default library
    // =========================================================================

    pub fn ensure_default_lib(&mut self) -> LibSymbols {
        if let Some(lib) = self.lib {
            return lib;
        }
        let file = self.default_lib_file(DEFAULT_LIB_FILE_NAME);

        let console_interface = self.interface(file, "Console", modifier_flags::NONE);
        let log = self.method(console_interface, "log", modifier_flags::NONE, Some(TypeId::VOID));
        let data = self.parameter(log, "data", TypeId::ANY);
        self.set_rest(data);
        let console_type = self.instance_type(console_interface).unwrap_or(TypeId::ANY);
        let console_var = self.variable(file, "console", modifier_flags::AMBIENT, console_type);
        self.annotate(console_var);

        let string_interface = self.interface(file, "String", modifier_flags::NONE);
        self.property(string_interface, "length", modifier_flags::READONLY, TypeId::NUMBER);
        self.method(string_interface, "toUpperCase", modifier_flags::NONE, Some(TypeId::STRING));
        self.set_apparent_type(TypeId::STRING, string_interface);

        let number_interface = self.interface(file, "Number", modifier_flags::NONE);
        self.method(number_interface, "toFixed", modifier_flags::NONE, Some(TypeId::STRING));
        self.method(number_interface, "toExponential", modifier_flags::NONE, Some(TypeId::STRING));
        self.set_apparent_type(TypeId::NUMBER, number_interface);

        let lib = LibSymbols {
            file,
            console: self.symbol_of(console_var).unwrap_or(SymbolId::NONE),
            console_interface: self.symbol_of(console_interface).unwrap_or(SymbolId::NONE),
        };
        self.lib = Some(lib);
        lib
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn add_node(&mut self, kind: SyntaxKind, data: NodeData, parent: NodeIndex) -> NodeIndex {
        let mut node = Node::new(kind, data);
        node.parent = parent;
        self.program.arena.add(node)
    }

    fn add_declaration_node(&mut self, kind: SyntaxKind, data: NodeData, modifiers: u32) -> NodeIndex {
        let mut node = Node::new(kind, data);
        node.modifier_flags = modifiers;
        self.program.arena.add(node)
    }

    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if let Some(node) = self.program.arena.get_mut(child) {
            node.parent = parent;
        }
    }

    fn identifier(&mut self, text: &str, parent: NodeIndex) -> NodeIndex {
        self.add_node(
            SyntaxKind::Identifier,
            NodeData::Identifier(IdentifierData {
                escaped_text: text.to_string(),
            }),
            parent,
        )
    }

    /// Create the name identifier of `decl` and store it in its payload.
    fn attach_name(&mut self, decl: NodeIndex, name: &str) -> NodeIndex {
        let name_node = self.identifier(name, decl);
        if let Some(node) = self.program.arena.get_mut(decl) {
            match &mut node.data {
                NodeData::ClassLike(d) => d.name = name_node,
                NodeData::Enum(d) => d.name = name_node,
                NodeData::EnumMember(d) => d.name = name_node,
                NodeData::TypeAlias(d) => d.name = name_node,
                NodeData::Module(d) => d.name = name_node,
                NodeData::Function(d) => d.name = name_node,
                NodeData::Parameter(d) => d.name = name_node,
                NodeData::Property(d) => d.name = name_node,
                NodeData::TypeParameter(d) => d.name = name_node,
                NodeData::VariableDeclaration(d) => d.name = name_node,
                NodeData::PropertyAssignment(d) => d.name = name_node,
                NodeData::ShorthandPropertyAssignment(d) => d.name = name_node,
                NodeData::NamespaceImport(d) => d.name = name_node,
                NodeData::Specifier(d) => d.name = name_node,
                _ => {}
            }
        }
        name_node
    }

    fn reference_identifier(&mut self, symbol: SymbolId) -> NodeIndex {
        let name = self
            .program
            .symbols
            .get(symbol)
            .map(|s| s.escaped_name.clone())
            .unwrap_or_default();
        let node = self.program.arena.add(Node::new(
            SyntaxKind::Identifier,
            NodeData::Identifier(IdentifierData { escaped_text: name }),
        ));
        self.program.node_symbols.insert(node, symbol);
        let ty = self.symbol_type(symbol);
        self.program.node_types.insert(node, ty);
        node
    }

    fn bind(&mut self, decl: NodeIndex, name_node: NodeIndex, symbol: SymbolId) {
        self.decl_symbols.insert(decl, symbol);
        if name_node.is_some() {
            self.program.node_symbols.insert(name_node, symbol);
        }
    }

    fn function_like(
        &mut self,
        kind: SyntaxKind,
        name: Option<&str>,
        modifiers: u32,
        return_type: Option<TypeId>,
        has_body: bool,
    ) -> NodeIndex {
        let decl = self.add_declaration_node(
            kind,
            NodeData::Function(FunctionData {
                name: NodeIndex::NONE,
                type_parameters: NodeList::new(),
                parameters: NodeList::new(),
                type_annotation: NodeIndex::NONE,
                body: NodeIndex::NONE,
            }),
            modifiers,
        );
        if let Some(name) = name {
            self.attach_name(decl, name);
        }
        if let Some(ty) = return_type {
            let annotation = self.type_node_for(ty, decl);
            if let Some(NodeData::Function(data)) = self.program.arena.get_mut(decl).map(|n| &mut n.data) {
                data.type_annotation = annotation;
            }
        }
        self.locals.entry(decl).or_default();
        if has_body {
            self.body(decl);
        }
        decl
    }

    fn attach_function_type(&mut self, decl: NodeIndex, symbol: SymbolId, return_type: Option<TypeId>) {
        let return_type = return_type.unwrap_or(TypeId::VOID);
        let ty = match self.program.symbol_types.get(&symbol).copied() {
            // Overloads and merged methods share one function type.
            Some(existing)
                if self
                    .program
                    .types
                    .get(existing)
                    .and_then(TypeData::as_object)
                    .is_some_and(|object| !object.call_signatures.is_empty()) =>
            {
                if let Some(TypeData::Object(object)) = self.program.types.get_mut(existing) {
                    object.call_signatures.push(Signature {
                        declaration: decl,
                        return_type,
                    });
                }
                existing
            }
            _ => {
                let mut object = ObjectType::new(object_flags::ANONYMOUS, Some(symbol));
                object.call_signatures.push(Signature {
                    declaration: decl,
                    return_type,
                });
                self.program.types.alloc(TypeData::Object(object))
            }
        };
        self.program.symbol_types.insert(symbol, ty);
        self.program.node_types.insert(decl, ty);
        self.program.return_types.insert(decl, return_type);
    }

    fn declared_type_for(&mut self, symbol: SymbolId, flags: u32) -> TypeId {
        if let Some(&ty) = self.declared_types.get(&symbol) {
            if let Some(TypeData::Object(object)) = self.program.types.get_mut(ty) {
                object.object_flags |= flags;
            }
            return ty;
        }
        let ty = self
            .program
            .types
            .alloc(TypeData::Object(ObjectType::new(flags, Some(symbol))));
        self.declared_types.insert(symbol, ty);
        ty
    }

    fn add_type_property(&mut self, ty: TypeId, name: &str, symbol: SymbolId) {
        if let Some(TypeData::Object(object)) = self.program.types.get_mut(ty) {
            object.properties.insert(name.to_string(), symbol);
        }
    }

    /// Declare `name` in `container`'s locals, merging with an existing
    /// declaration of the same name, and publish it as an export when the
    /// declaration carries `export` at module or namespace level.
    fn declare_in_container(
        &mut self,
        container: NodeIndex,
        name: &str,
        flags: u32,
        decl: NodeIndex,
        is_value: bool,
        modifiers: u32,
    ) -> SymbolId {
        let existing = self
            .locals
            .get(&container)
            .and_then(|table| table.get(name))
            .copied();
        let symbol = match existing {
            Some(symbol) => {
                if let Some(sym) = self.program.symbols.get_mut(symbol) {
                    sym.flags |= flags;
                    sym.add_declaration(decl, is_value);
                }
                symbol
            }
            None => {
                let mut sym = Symbol::new(flags, name);
                sym.add_declaration(decl, is_value);
                let symbol = self.program.symbols.alloc(sym);
                self.locals
                    .entry(container)
                    .or_default()
                    .insert(name.to_string(), symbol);
                symbol
            }
        };

        if modifiers & modifier_flags::EXPORT != 0 {
            match self.program.arena.kind(container) {
                Some(SyntaxKind::SourceFile) => {
                    let export_name = if modifiers & modifier_flags::DEFAULT != 0 {
                        internal_symbol_name::DEFAULT
                    } else {
                        name
                    };
                    self.add_module_export(container, export_name, symbol);
                    let module = self.module_symbol(container);
                    if let Some(sym) = self.program.symbols.get_mut(symbol) {
                        sym.parent = Some(module);
                    }
                }
                Some(SyntaxKind::ModuleBlock) => {
                    let namespace_decl = self.program.arena.parent(container);
                    if let Some(namespace) = self.symbol_of(namespace_decl) {
                        if let Some(sym) = self.program.symbols.get_mut(namespace) {
                            sym.exports.insert(name.to_string(), symbol);
                        }
                        if let Some(&ty) = self.module_types.get(&namespace) {
                            self.add_type_property(ty, name, symbol);
                        }
                        if let Some(sym) = self.program.symbols.get_mut(symbol) {
                            sym.parent = Some(namespace);
                        }
                    }
                }
                _ => {}
            }
        }
        symbol
    }

    /// Declare a member of a class, interface, enum, type literal or object
    /// literal and add it to the owner's type.
    fn declare_member(
        &mut self,
        owner: NodeIndex,
        name: &str,
        flags: u32,
        decl: NodeIndex,
        modifiers: u32,
    ) -> SymbolId {
        let Some(owner_symbol) = self.symbol_of(owner) else {
            let mut sym = Symbol::new(flags, name);
            sym.add_declaration(decl, true);
            return self.program.symbols.alloc(sym);
        };
        let is_static = modifiers & modifier_flags::STATIC != 0;
        let is_enum = self.program.arena.is_kind(owner, SyntaxKind::EnumDeclaration);
        let existing = self.program.symbols.get(owner_symbol).and_then(|sym| {
            if is_static || is_enum {
                sym.exports.get(name).copied()
            } else {
                sym.members.get(name).copied()
            }
        });

        let symbol = match existing {
            Some(symbol) => {
                if let Some(sym) = self.program.symbols.get_mut(symbol) {
                    sym.flags |= flags;
                    sym.add_declaration(decl, true);
                }
                symbol
            }
            None => {
                let mut sym = Symbol::new(flags, name);
                sym.add_declaration(decl, true);
                sym.parent = Some(owner_symbol);
                let symbol = self.program.symbols.alloc(sym);
                if let Some(owner_sym) = self.program.symbols.get_mut(owner_symbol) {
                    if is_static || is_enum {
                        owner_sym.exports.insert(name.to_string(), symbol);
                    } else {
                        owner_sym.members.insert(name.to_string(), symbol);
                    }
                }
                symbol
            }
        };

        let owner_type = if is_static {
            self.static_types.get(&owner_symbol).copied()
        } else {
            self.program.node_types.get(&owner).copied()
        };
        if let Some(ty) = owner_type {
            self.add_type_property(ty, name, symbol);
        }
        symbol
    }

    fn declare_local(&mut self, container: NodeIndex, name: &str, flags: u32, decl: NodeIndex) -> SymbolId {
        let mut sym = Symbol::new(flags, name);
        sym.add_declaration(decl, true);
        let symbol = self.program.symbols.alloc(sym);
        self.locals
            .entry(container)
            .or_default()
            .insert(name.to_string(), symbol);
        symbol
    }

    fn push_statement(&mut self, container: NodeIndex, statement: NodeIndex) {
        self.set_parent(statement, container);
        match self.program.arena.get_mut(container).map(|n| &mut n.data) {
            Some(NodeData::SourceFile(data)) => data.statements.push(statement),
            Some(NodeData::Block(data)) => data.statements.push(statement),
            _ => {}
        }
    }

    fn push_member(&mut self, owner: NodeIndex, member: NodeIndex) {
        self.set_parent(member, owner);
        match self.program.arena.get_mut(owner).map(|n| &mut n.data) {
            Some(NodeData::ClassLike(data)) => data.members.push(member),
            Some(NodeData::TypeLiteral(data)) => data.members.push(member),
            Some(NodeData::LiteralExpr(data)) => data.elements.push(member),
            _ => {}
        }
    }

    fn is_class(&self, node: NodeIndex) -> bool {
        self.program
            .arena
            .kind(node)
            .is_some_and(SyntaxKind::is_class_like)
    }

    fn is_object_literal(&self, node: NodeIndex) -> bool {
        self.program
            .arena
            .is_kind(node, SyntaxKind::ObjectLiteralExpression)
    }

    /// Property lookup that synthesizes union and intersection properties on demand.
    fn resolve_property(&mut self, ty: TypeId, name: &str) -> Option<SymbolId> {
        let nested: Vec<TypeId> = match self.program.types.get(ty) {
            Some(TypeData::Union(types) | TypeData::Intersection(types)) => types.clone(),
            Some(TypeData::TypeParameter {
                constraint: Some(constraint),
                ..
            }) => vec![*constraint],
            _ => Vec::new(),
        };
        for member in nested {
            self.resolve_property(member, name);
        }

        match self.program.lookup_property(ty, name) {
            PropertyLookup::Missing => None,
            PropertyLookup::Found(symbol) => Some(symbol),
            PropertyLookup::Composite(candidates) => {
                if let Some(&symbol) = self
                    .program
                    .composite_properties
                    .get(&ty)
                    .and_then(|properties| properties.get(name))
                {
                    return Some(symbol);
                }
                let mut synthesized =
                    Symbol::new(symbol_flags::PROPERTY | symbol_flags::TRANSIENT, name);
                let mut property_types = Vec::with_capacity(candidates.len());
                for candidate in &candidates {
                    if let Some(sym) = self.program.symbols.get(*candidate) {
                        for &decl in &sym.declarations {
                            synthesized.add_declaration(decl, false);
                        }
                        if synthesized.value_declaration.is_none() {
                            synthesized.value_declaration = sym.value_declaration;
                        }
                    }
                    property_types.push(self.symbol_type(*candidate));
                }
                let symbol = self.program.symbols.alloc(synthesized);
                let property_type = if matches!(self.program.types.get(ty), Some(TypeData::Union(_))) {
                    self.union(&property_types)
                } else {
                    self.intersection(&property_types)
                };
                self.program.symbol_types.insert(symbol, property_type);
                self.program
                    .composite_properties
                    .entry(ty)
                    .or_default()
                    .insert(name.to_string(), symbol);
                trace!(?ty, name, ?symbol, "synthesized composite property");
                Some(symbol)
            }
        }
    }
}
