use thiserror::Error;

use crate::ids::{MemberId, QualifiedName};
use crate::mirror::TypeMirrorKind;
use crate::oracle::MemberKind;

pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations surfaced by the core. Every variant indicates a bug on
/// the caller's side — an oracle that returned something the core's
/// invariants don't allow, or a consumer that passed a mirror the operation
/// doesn't support. None of these are recoverable; callers should let them
/// fail the processing round rather than catch and retry.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported type mirror variant {found:?} for operation {operation}")]
    UnsupportedMirror {
        operation: &'static str,
        found: TypeMirrorKind,
    },

    #[error("{qualified_name} is not a class-like declaration")]
    NotClassLike { qualified_name: QualifiedName },

    #[error("unboxedType called on a non-primitive declared type {qualified_name}")]
    NotBoxed { qualified_name: QualifiedName },

    #[error("oracle has no boxed class registered for primitive kind {kind:?}")]
    MissingBoxedClass { kind: crate::mirror::PrimitiveKind },

    #[error("unknown annotation value payload")]
    UnknownAnnotationPayload,

    #[error("element {qualified_name} does not declare a repeatable container")]
    MissingRepeatableContainer { qualified_name: QualifiedName },

    #[error("member {member:?} has kind {found:?}, which this element wrapper does not accept")]
    WrongMemberKind { member: MemberId, found: MemberKind },
}
