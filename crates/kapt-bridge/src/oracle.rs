//! The boundary to the source-analysis symbol graph (spec.md §6, §9 "Oracle
//! coupling").
//!
//! `SymbolOracle` is deliberately small and non-generic, mirroring the
//! teacher's `TypeProvider` trait (`nova-types-bridge/tests/loader_smoke.rs`):
//! plain methods over concrete value types, object-safe, so the core can hold
//! it as `&dyn SymbolOracle` and a test can swap in a hand-written fake
//! without any generic plumbing.

use smol_str::SmolStr;

use crate::ids::{DeclId, MemberId, QualifiedName, TypeParamId};
use crate::mirror::leaf::TypeVarScope;
use crate::mirror::PrimitiveKind;

/// The kind of a class-like declaration. Enum entries that carry a class
/// body are still `EnumEntry`, not `Enum` — see spec.md §3 invariant 6 and
/// the data model table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Class,
    Interface,
    Enum,
    EnumEntry,
    Annotation,
}

/// The eight built-in numeric/boolean/char types plus the unit type, used to
/// resolve [`SymbolOracle::builtin`] handles (spec.md §6 operation 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinKind {
    Unit,
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

/// A resolved reference to a declaration: the declaration itself, whether
/// the reference is marked nullable, and its type arguments (spec.md §6
/// operation 2 — "resolve a type reference to a snapshot carrying
/// arguments, nullability mark, and declaration handle").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceType {
    pub declaration: DeclId,
    pub nullable: bool,
    pub arguments: Vec<SourceTypeArg>,
}

impl SourceType {
    pub fn non_null(declaration: DeclId) -> Self {
        Self {
            declaration,
            nullable: false,
            arguments: Vec::new(),
        }
    }
}

/// A single type argument in a [`SourceType`]: either a nested resolved type
/// or a bare reference to an enclosing type parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceTypeArg {
    Type(SourceType),
    Variable(TypeParamId),
}

/// A declaration's type parameter together with its (optional) upper bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParameter {
    pub id: TypeParamId,
    pub scope: TypeVarScope,
    pub name: SmolStr,
    pub upper_bound: Option<SourceType>,
}

/// The star-projected shape of a declaration (spec.md Glossary): all type
/// parameters erased to their bounds, used only to ask raw-inheritance
/// questions without engaging arguments. Opaque to the core — it never
/// inspects the handle, only hands it back to
/// [`SymbolOracle::is_raw_assignable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarProjection(pub DeclId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Parameter,
    Method,
    Constructor,
    Accessor,
}

/// The signature of a method, constructor, or accessor: its own type
/// parameters, parameter types, and return type (absent for constructors,
/// which are modeled as returning nothing at this layer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutableSignature {
    pub type_parameters: Vec<TypeParameter>,
    pub parameter_types: Vec<SourceType>,
    pub return_type: Option<SourceType>,
}

/// Either a class-like declaration or a member, wherever the oracle needs to
/// report "the thing this annotation sits on".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotatedId {
    Decl(DeclId),
    Member(MemberId),
}

/// A resolved annotation as the oracle reports it, before adaptation:
/// its type and an ordered list of element-name → raw value pairs (spec.md
/// §6 operation 6, §3 data model).
#[derive(Debug, Clone, PartialEq)]
pub struct RawAnnotation {
    pub annotation_type: DeclId,
    pub arguments: Vec<(SmolStr, RawValue)>,
}

/// Either a bare declaration handle or an already-resolved type, as the
/// class-literal and enum-entry payloads of spec.md §4.4 may arrive in
/// either form ("directly or as resolved type").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassRef {
    Decl(DeclId),
    Resolved(SourceType),
}

impl ClassRef {
    pub fn declaration(&self) -> DeclId {
        match self {
            ClassRef::Decl(decl) => *decl,
            ClassRef::Resolved(source) => source.declaration,
        }
    }
}

/// The raw payload of a single annotation argument, before
/// [`crate::annotation::AnnotationValueAdapter`] wraps it into the
/// visitor-dispatched [`crate::annotation::AnnotationValue`] model.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Bool(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Char(char),
    Float(f32),
    Double(f64),
    Str(String),
    /// An enum entry or a class literal: a class-like declaration, whose
    /// kind (`EnumEntry` vs. anything else) decides whether the adapter
    /// dispatches to visit-enum or visit-type (spec.md §4.4).
    ClassLike(ClassRef),
    Annotation(RawAnnotation),
    List(Vec<RawValue>),
}

/// The single boundary between this crate and the source-analysis symbol
/// graph (spec.md §6, §9). Every method is a read; the oracle owns all
/// mutable state and all resolution logic. Implementations are expected to
/// intern repeated lookups themselves — the core does not cache oracle
/// results beyond the per-round primitive cache in
/// [`crate::mirror::primitive::PrimitiveCache`].
pub trait SymbolOracle {
    /// Operation 8: construct a qualified-name object from a string.
    fn qualified_name(&self, text: &str) -> QualifiedName;

    /// Operation 1: lookup declaration by qualified name.
    fn lookup(&self, name: &QualifiedName) -> Option<DeclId>;

    /// Operation 7: built-in handles for unit/boolean/byte/short/int/long/
    /// char/float/double.
    fn builtin(&self, kind: BuiltinKind) -> DeclId;

    /// The top reference type (`java.lang.Object`'s analogue). Needed by
    /// array subtyping (spec.md §4.3.2), erasure of unbounded
    /// wildcards/variables (§4.3.4), and the unbounded-variable subtyping
    /// rule (§4.3.2).
    fn top_class(&self) -> DeclId;

    /// Marker supertype every array type is assignable to, alongside
    /// `top_class` and `serializable_class` (spec.md §4.3.2, testable
    /// property 6).
    fn cloneable_class(&self) -> DeclId;

    /// The other marker supertype every array type is assignable to.
    fn serializable_class(&self) -> DeclId;

    /// The canonical boxed class for a primitive kind, e.g. `Int` →
    /// `java.lang.Integer` (spec.md §4.3.4). `None` indicates a broken
    /// oracle environment (spec.md §7 "Missing symbol").
    fn boxed_class(&self, kind: PrimitiveKind) -> Option<DeclId>;

    fn qualified_name_of(&self, decl: DeclId) -> QualifiedName;

    fn kind_of(&self, decl: DeclId) -> DeclKind;

    /// Nested class-like declarations lexically owned by `decl`.
    fn nested_elements(&self, decl: DeclId) -> Vec<DeclId>;

    /// Fields, methods, constructors, and accessors declared directly on
    /// `decl` (not inherited).
    fn members_of(&self, decl: DeclId) -> Vec<MemberId>;

    fn member_kind(&self, member: MemberId) -> MemberKind;

    fn member_name(&self, member: MemberId) -> SmolStr;

    fn member_owner(&self, member: MemberId) -> DeclId;

    /// The declared type of a field or parameter. Panics (a contract
    /// violation in the caller) if `member` is not a field or parameter.
    fn member_type(&self, member: MemberId) -> SourceType;

    /// The signature of a method, constructor, or accessor. Panics if
    /// `member` is not executable.
    fn executable_signature(&self, member: MemberId) -> ExecutableSignature;

    /// Operation 5 (type parameters half): a declaration's own type
    /// parameters, in declaration order.
    fn type_parameters(&self, decl: DeclId) -> Vec<TypeParameter>;

    /// Looks up a single type parameter by id, wherever a type argument
    /// refers back to an enclosing parameter by id alone
    /// ([`SourceTypeArg::Variable`]) rather than carrying the full
    /// [`TypeParameter`] inline.
    fn type_parameter(&self, id: TypeParamId) -> TypeParameter;

    /// Operation 5 (supertypes half): a declaration's direct supertype
    /// references, in declaration order, with their own type arguments
    /// expressed in terms of `decl`'s type parameters.
    fn direct_supertypes(&self, decl: DeclId) -> Vec<SourceType>;

    /// Operation 3: star-project a declaration to a type ignoring argument
    /// detail.
    fn star_project(&self, decl: DeclId) -> StarProjection;

    /// Operation 4: raw-assignability between two star-projected types.
    fn is_raw_assignable(&self, from: StarProjection, to: StarProjection) -> bool;

    /// Operation 6: a class-like declaration's or member's annotations and
    /// their raw arguments, in source order.
    fn annotations_of(&self, id: AnnotatedId) -> Vec<RawAnnotation>;

    /// The legacy `@Repeatable`-style meta-annotation's container, if
    /// `annotation_type` declares one via the legacy repeatable
    /// meta-annotation (spec.md §4.5).
    fn legacy_repeatable_container(&self, annotation_type: DeclId) -> Option<DeclId>;

    /// The source-language repeatable meta-annotation's implicit container:
    /// a nested class literally named `Container` under `annotation_type`,
    /// if one is both present and marked repeatable-source (spec.md §4.5,
    /// §3 invariant 6).
    fn source_repeatable_container(&self, annotation_type: DeclId) -> Option<DeclId> {
        self.nested_elements(annotation_type)
            .into_iter()
            .find(|nested| self.qualified_name_of(*nested).simple_name() == "Container")
    }
}
