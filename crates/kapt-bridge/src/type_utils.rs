//! `TypeUtils`, the projection service (spec.md §4.3).

use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::{Error, Result};
use crate::ids::{DeclId, QualifiedName, TypeParamId};
use crate::mirror::element::{ExecutableElement, VariableElement};
use crate::mirror::leaf::{ArrayType, NoType, NoTypeKind, NullType, TypeVariable, WildcardType};
use crate::mirror::{ClassTypeElement, DeclaredTypeMirror, PrimitiveKind, TypeMirror};
use crate::oracle::{SourceType, SourceTypeArg, SymbolOracle};
use crate::projection::TypeProjection;

/// Which kind of declared element `as_member_of` (spec.md §4.3.9) is being
/// asked about.
pub enum Member<'e> {
    Class(&'e ClassTypeElement),
    Variable(&'e VariableElement),
    Executable(&'e ExecutableElement),
}

/// `as_member_of`'s result: either an ordinary type mirror, or — for a
/// method, constructor, or accessor — an executable-type projection.
/// `ExecutableTypeProjection` is not one of spec.md §3's eight mirror
/// variants (the data model table never lists an executable-type entity);
/// it exists only as the "executable-type projection" §4.3.9 names, so
/// `as_member_of` has something to hand back for that case.
pub enum MemberOfResult {
    Type(TypeMirror),
    Executable(ExecutableTypeProjection),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExecutableTypeProjection {
    pub type_variables: Vec<TypeVariable>,
    pub parameter_types: Vec<TypeMirror>,
    pub return_type: TypeMirror,
}

/// The projection service of spec.md §4.3: same-type, subtype,
/// assignability, erasure, boxing, direct-supertypes-with-substitution, and
/// declared-type construction, all driven off a single [`SymbolOracle`].
pub struct TypeUtils<'a> {
    oracle: &'a dyn SymbolOracle,
    projection: TypeProjection<'a>,
}

impl<'a> TypeUtils<'a> {
    pub fn new(oracle: &'a dyn SymbolOracle) -> Self {
        Self {
            oracle,
            projection: TypeProjection::new(oracle),
        }
    }

    pub fn oracle(&self) -> &'a dyn SymbolOracle {
        self.oracle
    }

    pub fn projection(&self) -> &TypeProjection<'a> {
        &self.projection
    }

    pub fn project(&self, source: &SourceType) -> TypeMirror {
        self.projection.project(source)
    }

    // ---- §4.3.8 constructors -------------------------------------------

    pub fn primitive_type(&self, kind: PrimitiveKind) -> TypeMirror {
        TypeMirror::Primitive(self.projection.primitive_cache().get(kind))
    }

    pub fn no_type(&self, kind: NoTypeKind) -> TypeMirror {
        TypeMirror::NoType(NoType::new(kind))
    }

    pub fn null_type(&self) -> TypeMirror {
        TypeMirror::Null(NullType)
    }

    pub fn array_type(&self, component: TypeMirror) -> TypeMirror {
        TypeMirror::Array(ArrayType::new(component))
    }

    pub fn wildcard_type(
        &self,
        extends_bound: Option<TypeMirror>,
        super_bound: Option<TypeMirror>,
    ) -> TypeMirror {
        TypeMirror::Wildcard(WildcardType {
            extends_bound: extends_bound.map(Box::new),
            super_bound: super_bound.map(Box::new),
        })
    }

    /// `declaredType(elem, ...args)`; an empty `args` produces the raw form
    /// (spec.md §4.3.8).
    pub fn declared_type(&self, element: ClassTypeElement, args: Vec<TypeMirror>) -> TypeMirror {
        if args.is_empty() {
            TypeMirror::Declared(DeclaredTypeMirror::raw(element))
        } else {
            TypeMirror::Declared(DeclaredTypeMirror::explicit(element, args))
        }
    }

    pub fn element_by_name(&self, qualified_name: &str) -> Option<ClassTypeElement> {
        let name = self.oracle.qualified_name(qualified_name);
        self.oracle
            .lookup(&name)
            .map(|decl| ClassTypeElement::new(self.oracle, decl))
    }

    fn top_class_mirror(&self) -> TypeMirror {
        TypeMirror::Declared(DeclaredTypeMirror::raw(ClassTypeElement::new(
            self.oracle,
            self.oracle.top_class(),
        )))
    }

    // ---- §4.3.1 isSameType -----------------------------------------------

    pub fn is_same_type(&self, a: &TypeMirror, b: &TypeMirror) -> bool {
        match (a, b) {
            (TypeMirror::Primitive(x), TypeMirror::Primitive(y)) => x.kind() == y.kind(),
            (TypeMirror::NoType(x), TypeMirror::NoType(y)) => x.kind == y.kind,
            (TypeMirror::Null(_), TypeMirror::Null(_)) => true,
            (TypeMirror::Array(x), TypeMirror::Array(y)) => {
                self.is_same_type(&x.component, &y.component)
            }
            (TypeMirror::TypeVariable(x), TypeMirror::TypeVariable(y)) => x == y,
            (TypeMirror::Wildcard(x), TypeMirror::Wildcard(y)) => {
                self.same_bound(&x.extends_bound, &y.extends_bound)
                    && self.same_bound(&x.super_bound, &y.super_bound)
            }
            (TypeMirror::Declared(x), TypeMirror::Declared(y)) => self.declared_same_type(x, y),
            _ => false,
        }
    }

    fn same_bound(&self, a: &Option<Box<TypeMirror>>, b: &Option<Box<TypeMirror>>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(x), Some(y)) => self.is_same_type(x, y),
            _ => false,
        }
    }

    /// Declared/declared same-type: equal qualified names and equal-arity,
    /// pairwise-same type arguments (spec.md §4.3.1). The spec's mention of
    /// "cross-variant comparisons (native declared vs. adapter declared)"
    /// collapses here, since this crate has exactly one declared
    /// representation rather than two.
    fn declared_same_type(&self, x: &DeclaredTypeMirror, y: &DeclaredTypeMirror) -> bool {
        if x.element != y.element {
            return false;
        }
        let xa = x.type_arguments(&self.projection);
        let ya = y.type_arguments(&self.projection);
        xa.len() == ya.len() && xa.iter().zip(ya.iter()).all(|(p, q)| self.is_same_type(p, q))
    }

    // ---- §4.3.2 isSubtype --------------------------------------------------

    pub fn is_subtype(&self, a: &TypeMirror, b: &TypeMirror) -> bool {
        if self.is_same_type(a, b) {
            return true;
        }
        match (a, b) {
            (TypeMirror::NoType(_), _) | (_, TypeMirror::NoType(_)) => false,
            (TypeMirror::Primitive(_), _) | (_, TypeMirror::Primitive(_)) => false,
            // Not in spec.md's explicit scenario list, but a direct JLS
            // consequence that cannot contradict any documented property:
            // the null type is a subtype of every reference type.
            (TypeMirror::Null(_), TypeMirror::Array(_) | TypeMirror::Declared(_)) => true,
            (TypeMirror::Array(x), TypeMirror::Array(y)) => {
                if self.is_primitive(&x.component) || self.is_primitive(&y.component) {
                    self.is_same_type(&x.component, &y.component)
                } else {
                    self.is_subtype(&x.component, &y.component)
                }
            }
            (TypeMirror::Array(_), TypeMirror::Declared(d)) => {
                let handle = d.element.handle();
                handle == self.oracle.top_class()
                    || handle == self.oracle.cloneable_class()
                    || handle == self.oracle.serializable_class()
            }
            (TypeMirror::Declared(_), TypeMirror::Array(_)) => false,
            (TypeMirror::TypeVariable(v), _) => match &v.upper_bound {
                Some(bound) => self.is_subtype(bound, b),
                None => self.is_subtype(&self.top_class_mirror(), b),
            },
            (TypeMirror::Declared(x), TypeMirror::Declared(y)) => {
                let from = self.oracle.star_project(x.element.handle());
                let to = self.oracle.star_project(y.element.handle());
                self.oracle.is_raw_assignable(from, to) && self.invariant_args_compatible(x, y)
            }
            _ => false,
        }
    }

    fn is_primitive(&self, t: &TypeMirror) -> bool {
        matches!(t, TypeMirror::Primitive(_))
    }

    // ---- §4.3.3 isAssignable -----------------------------------------------

    pub fn is_assignable(&self, a: &TypeMirror, b: &TypeMirror) -> bool {
        match (a, b) {
            (TypeMirror::Primitive(p), TypeMirror::Declared(d)) => {
                self.oracle.boxed_class(p.kind()) == Some(d.element.handle())
            }
            (TypeMirror::Declared(d), TypeMirror::Primitive(p)) => {
                self.oracle.boxed_class(p.kind()) == Some(d.element.handle())
            }
            _ => self.is_subtype(a, b),
        }
    }

    // ---- §4.3.4 erasure / boxing --------------------------------------------

    pub fn erasure(&self, t: &TypeMirror) -> TypeMirror {
        match t {
            TypeMirror::Primitive(_) | TypeMirror::NoType(_) | TypeMirror::Null(_) => t.clone(),
            TypeMirror::Declared(d) => {
                TypeMirror::Declared(DeclaredTypeMirror::raw(d.element.clone()))
            }
            TypeMirror::Array(a) => TypeMirror::Array(ArrayType::new(self.erasure(&a.component))),
            TypeMirror::Wildcard(w) => match &w.extends_bound {
                Some(bound) => self.erasure(bound),
                None => self.top_class_mirror(),
            },
            TypeMirror::TypeVariable(v) => match &v.upper_bound {
                Some(bound) => self.erasure(bound),
                None => self.top_class_mirror(),
            },
        }
    }

    pub fn boxed_class(&self, kind: PrimitiveKind) -> Result<DeclaredTypeMirror> {
        let decl = self
            .oracle
            .boxed_class(kind)
            .ok_or(Error::MissingBoxedClass { kind })?;
        Ok(DeclaredTypeMirror::raw(ClassTypeElement::new(
            self.oracle,
            decl,
        )))
    }

    pub fn unboxed_type(&self, declared: &DeclaredTypeMirror) -> Result<TypeMirror> {
        for kind in PrimitiveKind::ALL {
            if self.oracle.boxed_class(kind) == Some(declared.element.handle()) {
                return Ok(self.primitive_type(kind));
            }
        }
        Err(Error::NotBoxed {
            qualified_name: declared.element.qualified_name().clone(),
        })
    }

    // ---- §4.3.5 invariant type-argument compatibility -----------------------

    fn invariant_args_compatible(&self, s: &DeclaredTypeMirror, t: &DeclaredTypeMirror) -> bool {
        let t_args = t.type_arguments(&self.projection);
        if t_args.is_empty() || t_args.iter().all(|a| matches!(a, TypeMirror::TypeVariable(_))) {
            return true;
        }

        if s.element == t.element {
            let s_args = s.type_arguments(&self.projection);
            if s_args.is_empty() {
                // raw-vs-parameterised source admitted as unchecked.
                return true;
            }
            if s_args.len() != t_args.len() {
                tracing::debug!(
                    target = s.element.qualified_name().as_str(),
                    "invariant argument arity mismatch against itself; admitting conservatively"
                );
                return true;
            }
            return s_args
                .iter()
                .zip(t_args.iter())
                .all(|(a, b)| self.is_same_type(a, b));
        }

        match self.find_supertype_with_raw_type(s, t.element.handle()) {
            Some(matched) => {
                let matched_args = matched.type_arguments(&self.projection);
                if matched_args.len() != t_args.len() {
                    tracing::debug!(
                        from = s.element.qualified_name().as_str(),
                        to = t.element.qualified_name().as_str(),
                        "supertype argument arity mismatch; admitting conservatively"
                    );
                    return true;
                }
                matched_args
                    .iter()
                    .zip(t_args.iter())
                    .all(|(a, b)| self.is_same_type(a, b))
            }
            None => {
                // spec.md §9 Open Question: admit rather than hard-fail, to
                // preserve compatibility with downstream generators when
                // raw-assignability already succeeded.
                tracing::debug!(
                    from = s.element.qualified_name().as_str(),
                    to = t.element.qualified_name().as_str(),
                    "supertype walk failed after raw-assignability succeeded; admitting conservatively"
                );
                true
            }
        }
    }

    /// spec.md §4.3.6/§9: walk direct supertypes transitively, tracking
    /// visited qualified names to guard interface/bound cycles.
    fn find_supertype_with_raw_type(
        &self,
        start: &DeclaredTypeMirror,
        target: DeclId,
    ) -> Option<DeclaredTypeMirror> {
        let mut visited: HashSet<QualifiedName> = HashSet::new();
        let mut queue: VecDeque<DeclaredTypeMirror> = VecDeque::new();
        visited.insert(start.element.qualified_name().clone());
        queue.push_back(start.clone());

        while let Some(current) = queue.pop_front() {
            if current.element.handle() == target {
                return Some(current);
            }
            for supertype in self.direct_supertypes(&current) {
                if visited.insert(supertype.element.qualified_name().clone()) {
                    queue.push_back(supertype);
                }
            }
        }
        None
    }

    // ---- §4.3.6 directSupertypes --------------------------------------------

    pub fn direct_supertypes(&self, declared: &DeclaredTypeMirror) -> Vec<DeclaredTypeMirror> {
        let handle = declared.element.handle();
        let params = self.oracle.type_parameters(handle);
        let args = declared.type_arguments(&self.projection);
        let substitution: HashMap<TypeParamId, TypeMirror> = params
            .iter()
            .zip(args.iter())
            .map(|(param, arg)| (param.id, arg.clone()))
            .collect();

        self.oracle
            .direct_supertypes(handle)
            .into_iter()
            .filter_map(|supertype| match self.substitute_source(&supertype, &substitution) {
                TypeMirror::Declared(declared) => Some(declared),
                _ => None, // non-class supertype references are ignored
            })
            .collect()
    }

    fn substitute_source(
        &self,
        source: &SourceType,
        substitution: &HashMap<TypeParamId, TypeMirror>,
    ) -> TypeMirror {
        match self.projection.project(source) {
            TypeMirror::Declared(declared) => {
                let args = source
                    .arguments
                    .iter()
                    .map(|arg| self.substitute_argument(arg, substitution))
                    .collect();
                TypeMirror::Declared(DeclaredTypeMirror::explicit(declared.element, args))
            }
            other => other,
        }
    }

    fn substitute_argument(
        &self,
        argument: &SourceTypeArg,
        substitution: &HashMap<TypeParamId, TypeMirror>,
    ) -> TypeMirror {
        match argument {
            SourceTypeArg::Variable(id) => substitution
                .get(id)
                .cloned()
                .unwrap_or_else(|| self.projection.project_argument(argument)),
            SourceTypeArg::Type(nested) => self.substitute_source(nested, substitution),
        }
    }

    // ---- §4.3.7 isSubsignature -----------------------------------------------

    pub fn is_subsignature(&self, m1_params: &[TypeMirror], m2_params: &[TypeMirror]) -> bool {
        if m1_params.len() != m2_params.len() {
            return false;
        }
        let direct = m1_params
            .iter()
            .zip(m2_params)
            .all(|(a, b)| self.is_same_type(a, b));
        if direct {
            return true;
        }
        m1_params
            .iter()
            .zip(m2_params)
            .all(|(a, b)| self.is_same_type(a, &self.erasure(b)))
    }

    pub fn is_subsignature_of(&self, m1: &ExecutableElement, m2: &ExecutableElement) -> bool {
        let sig1 = m1.signature(self.oracle);
        let sig2 = m2.signature(self.oracle);
        let params1: Vec<TypeMirror> = sig1.parameter_types.iter().map(|p| self.project(p)).collect();
        let params2: Vec<TypeMirror> = sig2.parameter_types.iter().map(|p| self.project(p)).collect();
        self.is_subsignature(&params1, &params2)
    }

    // ---- §4.3.9 asMemberOf ---------------------------------------------------

    pub fn as_member_of(&self, element: Member<'_>) -> MemberOfResult {
        match element {
            Member::Class(class) => {
                MemberOfResult::Type(TypeMirror::Declared(DeclaredTypeMirror::raw(class.clone())))
            }
            Member::Variable(variable) => {
                MemberOfResult::Type(variable.element_type(&self.projection))
            }
            Member::Executable(executable) => {
                let signature = executable.signature(self.oracle);
                let type_variables = signature
                    .type_parameters
                    .iter()
                    .map(|param| self.projection.type_variable_for_param(param))
                    .collect();
                let parameter_types = signature
                    .parameter_types
                    .iter()
                    .map(|p| self.project(p))
                    .collect();
                let return_type = signature
                    .return_type
                    .as_ref()
                    .map(|r| self.project(r))
                    .unwrap_or_else(|| self.no_type(NoTypeKind::Void));
                MemberOfResult::Executable(ExecutableTypeProjection {
                    type_variables,
                    parameter_types,
                    return_type,
                })
            }
        }
    }
}
