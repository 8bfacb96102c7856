//! Declared-element wrappers (spec.md §3 `ClassTypeElement`, §6 "element
//! wrappers (class, executable, variable, enum-constant, accessor)").
//!
//! Each wrapper snapshots just enough from the oracle at construction time
//! to support equality and display without re-borrowing it (qualified name,
//! kind, simple name); everything else — nested elements, members, the
//! declared type — is fetched from the oracle on demand, matching the
//! "adapters wrap them on demand" data flow of spec.md §2.

use smol_str::SmolStr;

use crate::error::{Error, Result};
use crate::ids::{DeclId, MemberId, QualifiedName};
use crate::mirror::TypeMirror;
use crate::oracle::{DeclKind, ExecutableSignature, MemberKind, SymbolOracle};

/// A class, interface, enum, enum-entry, or annotation-type declaration.
///
/// Equality is by qualified name only (spec.md §3): two `ClassTypeElement`s
/// wrapping handles from different oracle calls for "the same" declaration
/// still compare equal, which is what lets `TypeUtils` compare mirrors
/// without leaning on oracle-handle identity (§9 "Identity vs. equality").
#[derive(Debug, Clone)]
pub struct ClassTypeElement {
    handle: DeclId,
    qualified_name: QualifiedName,
    kind: DeclKind,
}

impl ClassTypeElement {
    pub fn new(oracle: &dyn SymbolOracle, handle: DeclId) -> Self {
        Self {
            handle,
            qualified_name: oracle.qualified_name_of(handle),
            kind: oracle.kind_of(handle),
        }
    }

    /// The raw symbol handle this element wraps (spec.md §3: "the raw
    /// symbol handle"). Only meaningful for the lifetime of the processing
    /// round that produced it.
    pub fn handle(&self) -> DeclId {
        self.handle
    }

    pub fn qualified_name(&self) -> &QualifiedName {
        &self.qualified_name
    }

    pub fn simple_name(&self) -> &str {
        self.qualified_name.simple_name()
    }

    pub fn kind(&self) -> DeclKind {
        self.kind
    }

    pub fn nested_elements(&self, oracle: &dyn SymbolOracle) -> Vec<ClassTypeElement> {
        oracle
            .nested_elements(self.handle)
            .into_iter()
            .map(|nested| ClassTypeElement::new(oracle, nested))
            .collect()
    }

    pub fn enclosed_members(&self, oracle: &dyn SymbolOracle) -> Vec<MemberId> {
        oracle.members_of(self.handle)
    }
}

impl PartialEq for ClassTypeElement {
    fn eq(&self, other: &Self) -> bool {
        self.qualified_name == other.qualified_name
    }
}

impl Eq for ClassTypeElement {}

impl std::hash::Hash for ClassTypeElement {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.qualified_name.hash(state);
    }
}

/// Which variable shape a [`VariableElement`] wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableElementKind {
    Field,
    Parameter,
    /// Wraps a class-like declaration of [`DeclKind::EnumEntry`] rather
    /// than a `MemberId`, matching the data model's placement of enum
    /// entries under the class-like kind enum.
    EnumConstant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VariableHandle {
    Member(MemberId),
    Decl(DeclId),
}

#[derive(Debug, Clone)]
pub struct VariableElement {
    kind: VariableElementKind,
    handle: VariableHandle,
    simple_name: SmolStr,
}

impl VariableElement {
    pub fn field_or_parameter(oracle: &dyn SymbolOracle, member: MemberId) -> Result<Self> {
        let kind = match oracle.member_kind(member) {
            MemberKind::Field => VariableElementKind::Field,
            MemberKind::Parameter => VariableElementKind::Parameter,
            found => return Err(Error::WrongMemberKind { member, found }),
        };
        Ok(Self {
            kind,
            handle: VariableHandle::Member(member),
            simple_name: oracle.member_name(member),
        })
    }

    pub fn enum_constant(oracle: &dyn SymbolOracle, decl: DeclId) -> Self {
        debug_assert_eq!(oracle.kind_of(decl), DeclKind::EnumEntry);
        let qualified_name = oracle.qualified_name_of(decl);
        Self {
            kind: VariableElementKind::EnumConstant,
            handle: VariableHandle::Decl(decl),
            simple_name: SmolStr::new(qualified_name.simple_name()),
        }
    }

    pub fn kind(&self) -> VariableElementKind {
        self.kind
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// The element's declared type (spec.md §4.3.9 `asMemberOf`, field/
    /// parameter case). Enum constants report the declared type of their
    /// enclosing enum-entry declaration, projected as any other class-like
    /// declaration would be.
    pub fn element_type(&self, projection: &crate::projection::TypeProjection<'_>) -> TypeMirror {
        match self.handle {
            VariableHandle::Member(member) => {
                projection.project(&projection.oracle().member_type(member))
            }
            VariableHandle::Decl(decl) => {
                TypeMirror::Declared(crate::mirror::declared::DeclaredTypeMirror::raw(
                    ClassTypeElement::new(projection.oracle(), decl),
                ))
            }
        }
    }
}

impl PartialEq for VariableElement {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.handle == other.handle
    }
}

impl Eq for VariableElement {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutableKind {
    Method,
    Constructor,
    Accessor,
}

#[derive(Debug, Clone)]
pub struct ExecutableElement {
    handle: MemberId,
    kind: ExecutableKind,
    simple_name: SmolStr,
}

impl ExecutableElement {
    pub fn new(oracle: &dyn SymbolOracle, member: MemberId) -> Result<Self> {
        let kind = match oracle.member_kind(member) {
            MemberKind::Method => ExecutableKind::Method,
            MemberKind::Constructor => ExecutableKind::Constructor,
            MemberKind::Accessor => ExecutableKind::Accessor,
            found => return Err(Error::WrongMemberKind { member, found }),
        };
        Ok(Self {
            handle: member,
            kind,
            simple_name: oracle.member_name(member),
        })
    }

    pub fn handle(&self) -> MemberId {
        self.handle
    }

    pub fn kind(&self) -> ExecutableKind {
        self.kind
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    pub fn signature(&self, oracle: &dyn SymbolOracle) -> ExecutableSignature {
        oracle.executable_signature(self.handle)
    }
}

impl PartialEq for ExecutableElement {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl Eq for ExecutableElement {}
