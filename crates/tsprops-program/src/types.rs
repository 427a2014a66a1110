//! Type table.
//!
//! Types are structural. Object types carry their own property table, unions
//! and intersections list their constituents, and tuples record element types.

use crate::flags::object_flags;
use crate::node::NodeIndex;
use crate::symbol::SymbolId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const ANY: TypeId = TypeId(0);
    pub const UNKNOWN: TypeId = TypeId(1);
    pub const STRING: TypeId = TypeId(2);
    pub const NUMBER: TypeId = TypeId(3);
    pub const BOOLEAN: TypeId = TypeId(4);
    pub const VOID: TypeId = TypeId(5);
    pub const UNDEFINED: TypeId = TypeId(6);
    pub const NULL: TypeId = TypeId(7);
    pub const NEVER: TypeId = TypeId(8);

    /// First id handed out for non-intrinsic types.
    pub const FIRST_USER: u32 = 9;

    #[inline]
    pub const fn is_intrinsic(self) -> bool {
        self.0 < Self::FIRST_USER
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntrinsicKind {
    Any,
    Unknown,
    String,
    Number,
    Boolean,
    Void,
    Undefined,
    Null,
    Never,
}

const INTRINSICS: [IntrinsicKind; 9] = [
    IntrinsicKind::Any,
    IntrinsicKind::Unknown,
    IntrinsicKind::String,
    IntrinsicKind::Number,
    IntrinsicKind::Boolean,
    IntrinsicKind::Void,
    IntrinsicKind::Undefined,
    IntrinsicKind::Null,
    IntrinsicKind::Never,
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    pub declaration: NodeIndex,
    pub return_type: TypeId,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectType {
    pub object_flags: u32,
    pub symbol: Option<SymbolId>,
    pub properties: IndexMap<String, SymbolId>,
    /// `extends` bases of classes and interfaces.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub base_types: Vec<TypeId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub call_signatures: Vec<Signature>,
    /// Element types of a tuple.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub element_types: Vec<TypeId>,
}

impl ObjectType {
    pub fn new(object_flags: u32, symbol: Option<SymbolId>) -> ObjectType {
        ObjectType {
            object_flags,
            symbol,
            ..ObjectType::default()
        }
    }

    #[inline]
    pub const fn has_flags(&self, flags: u32) -> bool {
        self.object_flags & flags != 0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TypeData {
    Intrinsic(IntrinsicKind),
    StringLiteral(String),
    NumberLiteral(f64),
    Object(ObjectType),
    Union(Vec<TypeId>),
    Intersection(Vec<TypeId>),
    TypeParameter {
        symbol: SymbolId,
        constraint: Option<TypeId>,
    },
}

impl TypeData {
    /// Symbol that declares this type, if any.
    pub fn symbol(&self) -> Option<SymbolId> {
        match self {
            TypeData::Object(object) => object.symbol,
            TypeData::TypeParameter { symbol, .. } => Some(*symbol),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            TypeData::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn is_object_with(&self, flags: u32) -> bool {
        self.as_object().is_some_and(|object| object.has_flags(flags))
    }

    pub fn is_tuple(&self) -> bool {
        self.is_object_with(object_flags::TUPLE)
    }

    pub fn is_mapped(&self) -> bool {
        self.is_object_with(object_flags::MAPPED)
    }

    pub const fn is_union(&self) -> bool {
        matches!(self, TypeData::Union(_))
    }

    /// Constituents of a union or intersection.
    pub fn constituents(&self) -> Option<&[TypeId]> {
        match self {
            TypeData::Union(types) | TypeData::Intersection(types) => Some(types),
            _ => None,
        }
    }

    pub fn string_literal_value(&self) -> Option<&str> {
        match self {
            TypeData::StringLiteral(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeTable {
    types: Vec<TypeData>,
}

impl Default for TypeTable {
    fn default() -> Self {
        TypeTable::new()
    }
}

impl TypeTable {
    /// Table pre-populated with the intrinsic types at their fixed ids.
    pub fn new() -> TypeTable {
        TypeTable {
            types: INTRINSICS.iter().copied().map(TypeData::Intrinsic).collect(),
        }
    }

    pub fn alloc(&mut self, data: TypeData) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(data);
        id
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeData> {
        self.types.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: TypeId) -> Option<&mut TypeData> {
        self.types.get_mut(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = TypeId> {
        (0..self.types.len() as u32).map(TypeId)
    }

    /// Existing string literal type with this value, or a new one.
    pub fn string_literal(&mut self, value: &str) -> TypeId {
        let existing = self
            .types
            .iter()
            .position(|data| data.string_literal_value() == Some(value));
        match existing {
            Some(index) => TypeId(index as u32),
            None => self.alloc(TypeData::StringLiteral(value.to_string())),
        }
    }
}
