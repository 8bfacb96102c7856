//! `TypeProjection` (spec.md §4.1): the single choke point mapping a
//! resolved source type to the appropriate leaf/declared mirror.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::ids::TypeParamId;
use crate::mirror::leaf::{NoType, NoTypeKind, NullType, TypeVariable};
use crate::mirror::{ClassTypeElement, DeclaredTypeMirror, PrimitiveKind, TypeMirror};
use crate::oracle::{BuiltinKind, SourceType, SourceTypeArg, SymbolOracle, TypeParameter};

const PRIMITIVE_BUILTINS: [(BuiltinKind, PrimitiveKind); 8] = [
    (BuiltinKind::Boolean, PrimitiveKind::Boolean),
    (BuiltinKind::Byte, PrimitiveKind::Byte),
    (BuiltinKind::Short, PrimitiveKind::Short),
    (BuiltinKind::Int, PrimitiveKind::Int),
    (BuiltinKind::Long, PrimitiveKind::Long),
    (BuiltinKind::Char, PrimitiveKind::Char),
    (BuiltinKind::Float, PrimitiveKind::Float),
    (BuiltinKind::Double, PrimitiveKind::Double),
];

/// Projects resolved source types onto the legacy mirror family, applying
/// the nullability-to-primitive rule and the unit-to-void rule (spec.md
/// §4.1), and caches the primitive mirrors it produces for the lifetime of
/// the processing round (spec.md §9 "Cache scoping").
///
/// Note on spec.md §4.1 rule 1 ("if the declaration is not class-like,
/// return `NoType(none)`"): in this crate [`crate::ids::DeclId`] is only ever minted
/// for class-like declarations (see [`crate::oracle::DeclKind`]), so that
/// branch is unreachable by construction rather than checked at runtime —
/// the type system enforces it instead of a fallback return.
pub struct TypeProjection<'a> {
    oracle: &'a dyn SymbolOracle,
    cache: crate::mirror::primitive::PrimitiveCache,
    visiting: RefCell<HashSet<TypeParamId>>,
}

impl<'a> TypeProjection<'a> {
    pub fn new(oracle: &'a dyn SymbolOracle) -> Self {
        Self {
            oracle,
            cache: crate::mirror::primitive::PrimitiveCache::new(),
            visiting: RefCell::new(HashSet::new()),
        }
    }

    pub fn oracle(&self) -> &'a dyn SymbolOracle {
        self.oracle
    }

    /// spec.md §4.1: `project(source_type) -> TypeMirror`.
    pub fn project(&self, source: &SourceType) -> TypeMirror {
        if source.declaration == self.oracle.builtin(BuiltinKind::Unit) {
            return TypeMirror::NoType(NoType::new(NoTypeKind::Void));
        }

        if !source.nullable {
            for (builtin, primitive) in PRIMITIVE_BUILTINS {
                if source.declaration == self.oracle.builtin(builtin) {
                    return TypeMirror::Primitive(self.cache.get(primitive));
                }
            }
        }

        TypeMirror::Declared(self.project_declared(source))
    }

    /// Like [`Self::project`], but always yields a `DeclaredTypeMirror`,
    /// even for a source type that would otherwise satisfy the
    /// nullability-to-primitive rule. Used for annotation class-literal
    /// payloads (spec.md §4.4), which the legacy model always represents as
    /// a declared "class mirror", never a primitive.
    pub fn project_declared(&self, source: &SourceType) -> DeclaredTypeMirror {
        let element = ClassTypeElement::new(self.oracle, source.declaration);
        DeclaredTypeMirror::resolved(element, source.clone())
    }

    pub fn project_argument(&self, argument: &SourceTypeArg) -> TypeMirror {
        match argument {
            SourceTypeArg::Type(source) => self.project(source),
            SourceTypeArg::Variable(id) => {
                TypeMirror::TypeVariable(self.type_variable_for_id(*id))
            }
        }
    }

    pub fn type_variable_for_id(&self, id: TypeParamId) -> TypeVariable {
        let param = self.oracle.type_parameter(id);
        self.build_type_variable(&param)
    }

    pub fn type_variable_for_param(&self, param: &TypeParameter) -> TypeVariable {
        self.build_type_variable(param)
    }

    /// Builds the `TypeVariable` mirror for `param`, projecting its upper
    /// bound recursively. Self (or mutually) recursive bounds, e.g.
    /// `<E extends Enum<E>>`, are broken the same way
    /// [`crate::type_utils::TypeUtils::find_supertype_with_raw_type`]
    /// breaks supertype cycles (spec.md §9): a variable already being
    /// expanded is re-emitted with its bound omitted rather than expanded
    /// again.
    fn build_type_variable(&self, param: &TypeParameter) -> TypeVariable {
        let already_visiting = !self.visiting.borrow_mut().insert(param.id);
        let upper_bound = if already_visiting {
            None
        } else {
            let bound = param
                .upper_bound
                .as_ref()
                .map(|bound| Box::new(self.project(bound)));
            self.visiting.borrow_mut().remove(&param.id);
            bound
        };
        TypeVariable {
            id: param.id,
            scope: param.scope,
            name: param.name.clone(),
            upper_bound,
        }
    }

    pub fn primitive_cache(&self) -> &crate::mirror::primitive::PrimitiveCache {
        &self.cache
    }
}
