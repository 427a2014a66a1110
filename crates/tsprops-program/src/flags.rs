//! Bit flags for modifiers, symbols and object types.
//!
//! Plain `u32` constants, combined with `|` and tested with `&`.

pub mod modifier_flags {
    pub const NONE: u32 = 0;
    pub const EXPORT: u32 = 1 << 0;
    pub const AMBIENT: u32 = 1 << 1;
    pub const DEFAULT: u32 = 1 << 2;
    pub const CONST: u32 = 1 << 3;
    pub const PUBLIC: u32 = 1 << 4;
    pub const PRIVATE: u32 = 1 << 5;
    pub const PROTECTED: u32 = 1 << 6;
    pub const READONLY: u32 = 1 << 7;
    pub const STATIC: u32 = 1 << 8;
    pub const ABSTRACT: u32 = 1 << 9;

    pub const ACCESSIBILITY_MODIFIER: u32 = PUBLIC | PRIVATE | PROTECTED;
    pub const PARAMETER_PROPERTY_MODIFIER: u32 = ACCESSIBILITY_MODIFIER | READONLY;
}

pub mod symbol_flags {
    pub const NONE: u32 = 0;
    pub const FUNCTION_SCOPED_VARIABLE: u32 = 1 << 0;
    pub const BLOCK_SCOPED_VARIABLE: u32 = 1 << 1;
    pub const PROPERTY: u32 = 1 << 2;
    pub const ENUM_MEMBER: u32 = 1 << 3;
    pub const FUNCTION: u32 = 1 << 4;
    pub const CLASS: u32 = 1 << 5;
    pub const INTERFACE: u32 = 1 << 6;
    pub const CONST_ENUM: u32 = 1 << 7;
    pub const REGULAR_ENUM: u32 = 1 << 8;
    pub const VALUE_MODULE: u32 = 1 << 9;
    pub const NAMESPACE_MODULE: u32 = 1 << 10;
    pub const TYPE_LITERAL: u32 = 1 << 11;
    pub const OBJECT_LITERAL: u32 = 1 << 12;
    pub const METHOD: u32 = 1 << 13;
    pub const CONSTRUCTOR: u32 = 1 << 14;
    pub const GET_ACCESSOR: u32 = 1 << 15;
    pub const SET_ACCESSOR: u32 = 1 << 16;
    pub const TYPE_PARAMETER: u32 = 1 << 18;
    pub const TYPE_ALIAS: u32 = 1 << 19;
    pub const ALIAS: u32 = 1 << 21;
    pub const PROTOTYPE: u32 = 1 << 22;
    pub const OPTIONAL: u32 = 1 << 24;
    pub const TRANSIENT: u32 = 1 << 25;

    pub const VARIABLE: u32 = FUNCTION_SCOPED_VARIABLE | BLOCK_SCOPED_VARIABLE;
    pub const ENUM: u32 = REGULAR_ENUM | CONST_ENUM;
    pub const MODULE: u32 = VALUE_MODULE | NAMESPACE_MODULE;
    pub const ACCESSOR: u32 = GET_ACCESSOR | SET_ACCESSOR;
    pub const CLASS_MEMBER: u32 = METHOD | ACCESSOR | PROPERTY;
}

pub mod object_flags {
    pub const NONE: u32 = 0;
    pub const CLASS: u32 = 1 << 0;
    pub const INTERFACE: u32 = 1 << 1;
    pub const REFERENCE: u32 = 1 << 2;
    pub const TUPLE: u32 = 1 << 3;
    pub const ANONYMOUS: u32 = 1 << 4;
    pub const MAPPED: u32 = 1 << 5;
    pub const OBJECT_LITERAL: u32 = 1 << 7;
    pub const ARRAY_LITERAL: u32 = 1 << 8;

    pub const CLASS_OR_INTERFACE: u32 = CLASS | INTERFACE;
}

/// Well-known escaped names of compiler-synthesized symbols.
pub mod internal_symbol_name {
    pub const EXPORT_EQUALS: &str = "export=";
    pub const DEFAULT: &str = "default";
    pub const OBJECT: &str = "__object";
    pub const TYPE: &str = "__type";
    pub const FUNCTION: &str = "__function";
    pub const CONSTRUCTOR: &str = "__constructor";
    pub const PROTOTYPE: &str = "prototype";
}
