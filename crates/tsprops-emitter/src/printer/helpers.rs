//! Output buffer helpers and shared list emission.

use std::fmt::Write as _;

use tsprops_program::{NodeIndex, NodeList, modifier_flags};

use super::Printer;

impl<'a> Printer<'a> {
    pub(super) fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// String literal contents, escaped for a double-quoted literal.
    pub(super) fn write_escaped(&mut self, s: &str) {
        for c in s.chars() {
            match c {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\0' => self.output.push_str("\\0"),
                c if (c as u32) < 0x20 || c == '\x7F' => {
                    let _ = write!(self.output, "\\u{:04X}", c as u32);
                }
                _ => self.output.push(c),
            }
        }
    }

    pub(super) fn write_line(&mut self) {
        self.output.push('\n');
    }

    pub(super) fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(self.indent_str);
        }
    }

    pub(super) const fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub(super) const fn decrease_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Leading JSDoc, one output line per comment line, re-indented.
    pub(super) fn emit_js_doc(&mut self, node: NodeIndex) {
        let Some(doc) = self.node(node).and_then(|n| n.js_doc.as_deref()) else {
            return;
        };
        for (i, line) in doc.lines().enumerate() {
            self.write_indent();
            if i > 0 && line.trim_start().starts_with('*') {
                self.write(" ");
            }
            self.write(if i == 0 { line.trim_end() } else { line.trim() });
            self.write_line();
        }
    }

    /// Modifier keywords in source order.
    pub(super) fn emit_modifiers(&mut self, flags: u32) {
        const ORDER: [(u32, &str); 9] = [
            (modifier_flags::EXPORT, "export"),
            (modifier_flags::DEFAULT, "default"),
            (modifier_flags::AMBIENT, "declare"),
            (modifier_flags::PUBLIC, "public"),
            (modifier_flags::PRIVATE, "private"),
            (modifier_flags::PROTECTED, "protected"),
            (modifier_flags::STATIC, "static"),
            (modifier_flags::ABSTRACT, "abstract"),
            (modifier_flags::READONLY, "readonly"),
        ];
        for (flag, keyword) in ORDER {
            if flags & flag != 0 {
                self.write(keyword);
                self.write(" ");
            }
        }
    }

    pub(super) fn emit_comma_list(&mut self, nodes: impl Iterator<Item = NodeIndex>) {
        for (i, node) in nodes.enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_node(node);
        }
    }

    pub(super) fn emit_type_parameters(&mut self, params: &NodeList) {
        if params.is_empty() {
            return;
        }
        self.write("<");
        self.emit_comma_list(params.iter());
        self.write(">");
    }

    pub(super) fn emit_type_arguments(&mut self, args: &NodeList) {
        self.emit_type_parameters(args);
    }

    /// `: T` when `annotation` is present.
    pub(super) fn emit_type_annotation(&mut self, annotation: NodeIndex) {
        if annotation.is_some() {
            self.write(": ");
            self.emit_node(annotation);
        }
    }

    /// ` = expr` when `initializer` is present.
    pub(super) fn emit_initializer(&mut self, initializer: NodeIndex) {
        if initializer.is_some() {
            self.write(" = ");
            self.emit_node(initializer);
        }
    }
}
