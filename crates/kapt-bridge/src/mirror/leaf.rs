//! The non-declared, non-primitive leaf mirrors (spec.md §3).

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::ids::{DeclId, MemberId, TypeParamId};
use crate::mirror::TypeMirror;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoTypeKind {
    Void,
    None,
    Package,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoType {
    pub kind: NoTypeKind,
}

impl NoType {
    pub fn new(kind: NoTypeKind) -> Self {
        Self { kind }
    }
}

/// The null type. A singleton — every `NullType` is the same type as every
/// other (spec.md §4.3.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullType;

// No Serialize/Deserialize here: the component is a boxed TypeMirror, and
// TypeMirror itself carries no serde impl (it closes over DeclaredTypeMirror,
// which is oracle-bound data this crate does not own the wire format for).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayType {
    pub component: Box<TypeMirror>,
}

impl ArrayType {
    pub fn new(component: TypeMirror) -> Self {
        Self {
            component: Box::new(component),
        }
    }
}

/// At most one of `extends_bound`/`super_bound` is set (spec.md §3); both
/// may be absent for an unbounded wildcard `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardType {
    pub extends_bound: Option<Box<TypeMirror>>,
    pub super_bound: Option<Box<TypeMirror>>,
}

impl WildcardType {
    pub fn unbounded() -> Self {
        Self {
            extends_bound: None,
            super_bound: None,
        }
    }

    pub fn extends(bound: TypeMirror) -> Self {
        Self {
            extends_bound: Some(Box::new(bound)),
            super_bound: None,
        }
    }

    pub fn super_of(bound: TypeMirror) -> Self {
        Self {
            extends_bound: None,
            super_bound: Some(Box::new(bound)),
        }
    }
}

/// The declaration a type variable is bound by: either a class-like
/// declaration's own type parameter, or an executable member's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeVarScope {
    Decl(DeclId),
    Member(MemberId),
}

/// spec.md §4.3.1: "TypeVariable equality is by parameter name within its
/// declaring scope" — so equality and hashing key on `(scope, name)`, not
/// on `id`, which may differ across oracle calls for what is conceptually
/// the same variable (§9 "Identity vs. equality").
#[derive(Debug, Clone)]
pub struct TypeVariable {
    pub id: TypeParamId,
    pub scope: TypeVarScope,
    pub name: SmolStr,
    pub upper_bound: Option<Box<TypeMirror>>,
}

impl PartialEq for TypeVariable {
    fn eq(&self, other: &Self) -> bool {
        self.scope == other.scope && self.name == other.name
    }
}

impl Eq for TypeVariable {}
