//! Projects a nullable, generics-first symbol graph onto the legacy
//! erased-generic annotation-processing type model: `javax.lang.model`-style
//! type mirrors, a `TypeUtils` service, and annotation adapters, all driven
//! off a single external [`oracle::SymbolOracle`] trait.
//!
//! The crate does no I/O and spawns no runtime (see [`type_utils`] and
//! [`projection`] docs for the concurrency posture) — a hosting annotation
//! processor owns the symbol graph and drives this crate's services once per
//! processing round.

#![forbid(unsafe_code)]

pub mod annotation;
pub mod error;
pub mod ids;
pub mod mirror;
pub mod oracle;
pub mod projection;
pub mod type_utils;

pub use annotation::{AnnotationMirror, AnnotationMirrorAdapter, AnnotationValue, AnnotationValueAdapter};
pub use error::{Error, Result};
pub use ids::{DeclId, MemberId, QualifiedName, TypeParamId};
pub use mirror::{
    ClassTypeElement, DeclaredTypeMirror, ExecutableElement, PrimitiveType, TypeMirror,
    TypeMirrorKind, VariableElement,
};
pub use oracle::SymbolOracle;
pub use projection::TypeProjection;
pub use type_utils::{Member, MemberOfResult, TypeUtils};
