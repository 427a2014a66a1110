//! Declarations: classes, interfaces, functions, enums, aliases, namespaces,
//! variables and module syntax.

use tsprops_program::{NodeData, NodeIndex, NodeList, SyntaxKind, modifier_flags};

use super::Printer;

impl<'a> Printer<'a> {
    pub(super) fn emit_class_like(&mut self, index: NodeIndex) {
        let Some(node) = self.node(index) else {
            return;
        };
        let NodeData::ClassLike(data) = &node.data else {
            return;
        };
        self.write(match node.kind {
            SyntaxKind::InterfaceDeclaration => "interface",
            _ => "class",
        });
        if data.name.is_some() {
            self.write(" ");
            self.emit_node(data.name);
        }
        self.emit_type_parameters(&data.type_parameters);
        for clause in data.heritage_clauses.iter() {
            self.write(" ");
            self.emit_node(clause);
        }
        self.write(" ");
        self.emit_members(&data.members);
    }

    /// `{ ... }` body of a class, interface or type literal, one member per line.
    pub(super) fn emit_members(&mut self, members: &NodeList) {
        if members.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{");
        self.write_line();
        self.increase_indent();
        for member in members.iter() {
            self.emit_js_doc(member);
            self.write_indent();
            self.emit_member(member);
            self.write_line();
        }
        self.decrease_indent();
        self.write_indent();
        self.write("}");
    }

    fn emit_member(&mut self, index: NodeIndex) {
        let Some(node) = self.node(index) else {
            return;
        };
        self.emit_modifiers(node.modifier_flags);
        match &node.data {
            NodeData::Property(_) => self.emit_property(index),
            NodeData::Function(data) => {
                self.emit_function(index);
                if data.body.is_none() {
                    self.write(";");
                }
            }
            _ => {
                self.emit_node(index);
                self.write(";");
            }
        }
    }

    /// Property declaration or signature, including the trailing `;`.
    pub(super) fn emit_property(&mut self, index: NodeIndex) {
        let Some(NodeData::Property(data)) = self.node(index).map(|n| &n.data) else {
            return;
        };
        self.emit_node(data.name);
        if data.question_token {
            self.write("?");
        }
        self.emit_type_annotation(data.type_annotation);
        self.emit_initializer(data.initializer);
        self.write(";");
    }

    // =========================================================================
    // Functions
    // =========================================================================

    pub(super) fn emit_function(&mut self, index: NodeIndex) {
        let Some(node) = self.node(index) else {
            return;
        };
        let NodeData::Function(data) = &node.data else {
            return;
        };
        match node.kind {
            SyntaxKind::FunctionDeclaration | SyntaxKind::FunctionExpression => {
                self.write("function");
                if data.name.is_some() {
                    self.write(" ");
                }
            }
            SyntaxKind::GetAccessor => self.write("get "),
            SyntaxKind::SetAccessor => self.write("set "),
            SyntaxKind::Constructor => self.write("constructor"),
            _ => {}
        }
        if data.name.is_some() {
            self.emit_node(data.name);
        }
        self.emit_type_parameters(&data.type_parameters);
        self.write("(");
        self.emit_comma_list(data.parameters.iter());
        self.write(")");

        match node.kind {
            SyntaxKind::FunctionType => {
                self.write(" => ");
                if data.type_annotation.is_some() {
                    self.emit_node(data.type_annotation);
                } else {
                    self.write("void");
                }
            }
            SyntaxKind::ArrowFunction => {
                self.emit_type_annotation(data.type_annotation);
                self.write(" => ");
                self.emit_arrow_body(data.body);
            }
            _ => {
                self.emit_type_annotation(data.type_annotation);
                if data.body.is_some() {
                    self.write(" ");
                    self.emit_block(data.body);
                }
            }
        }
    }

    fn emit_arrow_body(&mut self, body: NodeIndex) {
        match self.node(body).map(|n| n.kind) {
            Some(SyntaxKind::Block) => self.emit_block(body),
            Some(SyntaxKind::ObjectLiteralExpression) => {
                self.write("(");
                self.emit_node(body);
                self.write(")");
            }
            Some(_) => self.emit_node(body),
            None => self.write("{}"),
        }
    }

    pub(super) fn emit_parameter(&mut self, index: NodeIndex) {
        let Some(node) = self.node(index) else {
            return;
        };
        let NodeData::Parameter(data) = &node.data else {
            return;
        };
        self.emit_modifiers(node.modifier_flags);
        if data.dot_dot_dot {
            self.write("...");
        }
        self.emit_node(data.name);
        if data.question_token {
            self.write("?");
        }
        self.emit_type_annotation(data.type_annotation);
        self.emit_initializer(data.initializer);
    }

    // =========================================================================
    // Enums, aliases, namespaces
    // =========================================================================

    pub(super) fn emit_enum(&mut self, index: NodeIndex) {
        let Some(node) = self.node(index) else {
            return;
        };
        let NodeData::Enum(data) = &node.data else {
            return;
        };
        if node.has_modifier(modifier_flags::CONST) {
            self.write("const ");
        }
        self.write("enum ");
        self.emit_node(data.name);
        if data.members.is_empty() {
            self.write(" {}");
            return;
        }
        self.write(" {");
        self.write_line();
        self.increase_indent();
        for member in data.members.iter() {
            self.emit_js_doc(member);
            self.write_indent();
            if let Some(NodeData::EnumMember(m)) = self.node(member).map(|n| &n.data) {
                self.emit_node(m.name);
                self.emit_initializer(m.initializer);
            }
            self.write(",");
            self.write_line();
        }
        self.decrease_indent();
        self.write_indent();
        self.write("}");
    }

    pub(super) fn emit_type_alias(&mut self, index: NodeIndex) {
        let Some(NodeData::TypeAlias(data)) = self.node(index).map(|n| &n.data) else {
            return;
        };
        self.write("type ");
        self.emit_node(data.name);
        self.emit_type_parameters(&data.type_parameters);
        self.write(" = ");
        self.emit_node(data.type_node);
        self.write(";");
    }

    pub(super) fn emit_module(&mut self, index: NodeIndex) {
        let Some(NodeData::Module(data)) = self.node(index).map(|n| &n.data) else {
            return;
        };
        self.write("namespace ");
        self.emit_node(data.name);
        self.write(" ");
        self.emit_block(data.body);
    }

    // =========================================================================
    // Variables
    // =========================================================================

    pub(super) fn emit_variable_declaration_list(&mut self, index: NodeIndex) {
        let Some(NodeData::VariableDeclarationList(data)) = self.node(index).map(|n| &n.data) else {
            return;
        };
        self.write(data.kind.keyword());
        self.write(" ");
        self.emit_comma_list(data.declarations.iter());
    }

    pub(super) fn emit_variable_declaration(&mut self, index: NodeIndex) {
        let Some(NodeData::VariableDeclaration(data)) = self.node(index).map(|n| &n.data) else {
            return;
        };
        self.emit_node(data.name);
        self.emit_type_annotation(data.type_annotation);
        self.emit_initializer(data.initializer);
    }

    // =========================================================================
    // Imports and exports
    // =========================================================================

    pub(super) fn emit_import_declaration(&mut self, index: NodeIndex) {
        let Some(NodeData::ImportDeclaration(data)) = self.node(index).map(|n| &n.data) else {
            return;
        };
        self.write("import ");
        let namespace = data
            .bindings
            .iter()
            .find(|&binding| self.arena.is_kind(binding, SyntaxKind::NamespaceImport));
        match namespace {
            Some(binding) => self.emit_node(binding),
            None => self.emit_braced_specifiers(&data.bindings),
        }
        self.write(" from ");
        self.emit_module_specifier(&data.module_specifier);
        self.write(";");
    }

    pub(super) fn emit_export_declaration(&mut self, index: NodeIndex) {
        let Some(NodeData::ExportDeclaration(data)) = self.node(index).map(|n| &n.data) else {
            return;
        };
        self.write("export ");
        self.emit_braced_specifiers(&data.specifiers);
        if let Some(specifier) = &data.module_specifier {
            self.write(" from ");
            self.emit_module_specifier(specifier);
        }
        self.write(";");
    }

    pub(super) fn emit_export_assignment(&mut self, index: NodeIndex) {
        let Some(NodeData::ExportAssignment(data)) = self.node(index).map(|n| &n.data) else {
            return;
        };
        self.write(if data.is_export_equals {
            "export = "
        } else {
            "export default "
        });
        self.emit_node(data.expression);
        self.write(";");
    }

    fn emit_braced_specifiers(&mut self, specifiers: &NodeList) {
        if specifiers.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{ ");
        self.emit_comma_list(specifiers.iter());
        self.write(" }");
    }

    fn emit_module_specifier(&mut self, specifier: &str) {
        self.write("\"");
        self.write_escaped(specifier);
        self.write("\"");
    }
}
