//! `DeclaredTypeMirror` (spec.md §4.2).

use crate::mirror::element::ClassTypeElement;
use crate::mirror::TypeMirror;
use crate::oracle::SourceType;
use crate::projection::TypeProjection;

#[derive(Debug, Clone)]
enum DeclaredArgs {
    /// Explicit type arguments, e.g. as constructed by
    /// [`crate::type_utils::TypeUtils::declared_type`] or substituted by
    /// [`crate::type_utils::TypeUtils::direct_supertypes`].
    Explicit(Vec<TypeMirror>),
    /// An opaque oracle snapshot; arguments materialize lazily through
    /// [`DeclaredTypeMirror::type_arguments`].
    Resolved(SourceType),
    /// No explicit arguments and no snapshot — a raw type (spec.md §3
    /// invariant 3).
    Raw,
}

/// A parameterised declared type: an element plus either resolved type
/// arguments, an opaque resolved-type snapshot, or neither (spec.md §3).
///
/// `kind` is always `declared` (spec.md §3 invariant 1) — there is no
/// separate "this declared type is secretly primitive" state; only
/// [`TypeProjection::project`] decides that, from the source symbol, never
/// by downcasting a `DeclaredTypeMirror`.
///
/// Equality here is by element qualified name only (spec.md §4.2); full
/// structural type equality, including type arguments, is
/// [`crate::type_utils::TypeUtils::is_same_type`]'s job, not this type's
/// `PartialEq`.
#[derive(Debug, Clone)]
pub struct DeclaredTypeMirror {
    pub element: ClassTypeElement,
    args: DeclaredArgs,
}

impl DeclaredTypeMirror {
    pub fn explicit(element: ClassTypeElement, args: Vec<TypeMirror>) -> Self {
        Self {
            element,
            args: DeclaredArgs::Explicit(args),
        }
    }

    pub fn resolved(element: ClassTypeElement, source: SourceType) -> Self {
        Self {
            element,
            args: DeclaredArgs::Resolved(source),
        }
    }

    pub fn raw(element: ClassTypeElement) -> Self {
        Self {
            element,
            args: DeclaredArgs::Raw,
        }
    }

    /// spec.md §3 invariant 3: raw iff no explicit arguments and no
    /// resolved snapshot with arguments of its own.
    pub fn is_raw(&self) -> bool {
        match &self.args {
            DeclaredArgs::Raw => true,
            DeclaredArgs::Resolved(source) => source.arguments.is_empty(),
            // `declaredType` with no args is defined to produce the raw
            // form (§4.3.8), so an empty explicit list is raw too.
            DeclaredArgs::Explicit(args) => args.is_empty(),
        }
    }

    pub fn type_arguments(&self, projection: &TypeProjection<'_>) -> Vec<TypeMirror> {
        match &self.args {
            DeclaredArgs::Explicit(args) => args.clone(),
            DeclaredArgs::Resolved(source) => source
                .arguments
                .iter()
                .map(|arg| projection.project_argument(arg))
                .collect(),
            DeclaredArgs::Raw => projection
                .oracle()
                .type_parameters(self.element.handle())
                .into_iter()
                .map(|param| TypeMirror::TypeVariable(projection.type_variable_for_param(&param)))
                .collect(),
        }
    }
}

impl PartialEq for DeclaredTypeMirror {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element
    }
}

impl Eq for DeclaredTypeMirror {}
