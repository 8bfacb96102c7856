//! The legacy type-mirror family (spec.md §3, §9 "Mirror hierarchy").
//!
//! Modeled as a tagged sum (`TypeMirror`) rather than an inheritance tree,
//! per the design notes: `TypeUtils` pattern-matches on it directly, and the
//! individual leaf/declared types below exist so call sites can work with a
//! concrete shape (e.g. `DeclaredTypeMirror`) when they already know what
//! they have, without forcing every accessor through the sum type.

pub mod declared;
pub mod element;
pub mod leaf;
pub mod primitive;

pub use declared::DeclaredTypeMirror;
pub use element::{ClassTypeElement, ExecutableElement, ExecutableKind, VariableElement, VariableElementKind};
pub use leaf::{ArrayType, NoType, NoTypeKind, NullType, TypeVarScope, TypeVariable, WildcardType};
pub use primitive::{PrimitiveKind, PrimitiveType};

/// The discriminant of [`TypeMirror`], used in diagnostics (e.g.
/// [`crate::error::Error::UnsupportedMirror`]) without needing to hold a
/// full mirror around just to name its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeMirrorKind {
    Primitive,
    NoType,
    Null,
    Array,
    Wildcard,
    TypeVariable,
    Declared,
}

/// The eight-variant sum of spec.md §3: every legacy type mirror the core
/// hands back to a consumer is one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeMirror {
    Primitive(PrimitiveType),
    NoType(NoType),
    Null(NullType),
    Array(ArrayType),
    Wildcard(WildcardType),
    TypeVariable(TypeVariable),
    Declared(DeclaredTypeMirror),
}

impl TypeMirror {
    pub fn kind(&self) -> TypeMirrorKind {
        match self {
            TypeMirror::Primitive(_) => TypeMirrorKind::Primitive,
            TypeMirror::NoType(_) => TypeMirrorKind::NoType,
            TypeMirror::Null(_) => TypeMirrorKind::Null,
            TypeMirror::Array(_) => TypeMirrorKind::Array,
            TypeMirror::Wildcard(_) => TypeMirrorKind::Wildcard,
            TypeMirror::TypeVariable(_) => TypeMirrorKind::TypeVariable,
            TypeMirror::Declared(_) => TypeMirrorKind::Declared,
        }
    }

    pub fn as_declared(&self) -> Option<&DeclaredTypeMirror> {
        match self {
            TypeMirror::Declared(declared) => Some(declared),
            _ => None,
        }
    }

    pub fn as_primitive(&self) -> Option<&PrimitiveType> {
        match self {
            TypeMirror::Primitive(primitive) => Some(primitive),
            _ => None,
        }
    }
}
