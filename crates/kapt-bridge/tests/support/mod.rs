//! A hand-written `SymbolOracle` fake, in the shape of the teacher's
//! `MapProvider` (`nova-types-bridge/tests/loader_smoke.rs`): a plain struct
//! backed by maps, with builder methods tests call to assemble just the
//! slice of a symbol graph a given test needs.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use smol_str::SmolStr;

use kapt_bridge::ids::{DeclId, MemberId, QualifiedName, TypeParamId};
use kapt_bridge::mirror::{PrimitiveKind, TypeVarScope};
use kapt_bridge::oracle::{
    AnnotatedId, BuiltinKind, DeclKind, ExecutableSignature, MemberKind, RawAnnotation,
    SourceType, SourceTypeArg, StarProjection, SymbolOracle, TypeParameter,
};

#[derive(Clone)]
struct DeclRecord {
    qualified_name: QualifiedName,
    kind: DeclKind,
    nested: Vec<DeclId>,
    members: Vec<MemberId>,
    type_parameters: Vec<TypeParameter>,
    supertypes: Vec<SourceType>,
    annotations: Vec<RawAnnotation>,
}

#[derive(Clone)]
struct MemberRecord {
    kind: MemberKind,
    name: SmolStr,
    field_type: Option<SourceType>,
    signature: Option<ExecutableSignature>,
    annotations: Vec<RawAnnotation>,
}

#[derive(Default)]
pub struct FakeOracle {
    next_id: RefCell<u64>,
    decls: RefCell<HashMap<DeclId, DeclRecord>>,
    by_name: RefCell<HashMap<QualifiedName, DeclId>>,
    members: RefCell<HashMap<MemberId, MemberRecord>>,
    type_params: RefCell<HashMap<TypeParamId, TypeParameter>>,
    builtins: RefCell<HashMap<BuiltinKind, DeclId>>,
    top_class: RefCell<Option<DeclId>>,
    cloneable_class: RefCell<Option<DeclId>>,
    serializable_class: RefCell<Option<DeclId>>,
    boxed: RefCell<HashMap<PrimitiveKind, DeclId>>,
    legacy_repeatable: RefCell<HashMap<DeclId, DeclId>>,
}

impl FakeOracle {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh(&self) -> u64 {
        let mut next = self.next_id.borrow_mut();
        let id = *next;
        *next += 1;
        id
    }

    pub fn declare_class(&self, name: &str, kind: DeclKind) -> DeclId {
        let id = DeclId(self.fresh());
        let qualified_name = QualifiedName::new(name);
        self.decls.borrow_mut().insert(
            id,
            DeclRecord {
                qualified_name: qualified_name.clone(),
                kind,
                nested: Vec::new(),
                members: Vec::new(),
                type_parameters: Vec::new(),
                supertypes: Vec::new(),
                annotations: Vec::new(),
            },
        );
        self.by_name.borrow_mut().insert(qualified_name, id);
        id
    }

    pub fn declare_builtin(&self, kind: BuiltinKind, name: &str) -> DeclId {
        let id = self.declare_class(name, DeclKind::Class);
        self.builtins.borrow_mut().insert(kind, id);
        id
    }

    pub fn set_top_class(&self, decl: DeclId) {
        *self.top_class.borrow_mut() = Some(decl);
    }

    pub fn set_cloneable_class(&self, decl: DeclId) {
        *self.cloneable_class.borrow_mut() = Some(decl);
    }

    pub fn set_serializable_class(&self, decl: DeclId) {
        *self.serializable_class.borrow_mut() = Some(decl);
    }

    pub fn set_boxed(&self, kind: PrimitiveKind, decl: DeclId) {
        self.boxed.borrow_mut().insert(kind, decl);
    }

    pub fn add_nested(&self, owner: DeclId, nested: DeclId) {
        self.decls.borrow_mut().get_mut(&owner).unwrap().nested.push(nested);
    }

    pub fn add_type_parameter(
        &self,
        owner: DeclId,
        name: &str,
        upper_bound: Option<SourceType>,
    ) -> TypeParamId {
        let id = TypeParamId(self.fresh());
        let param = TypeParameter {
            id,
            scope: TypeVarScope::Decl(owner),
            name: SmolStr::new(name),
            upper_bound,
        };
        self.type_params.borrow_mut().insert(id, param.clone());
        self.decls
            .borrow_mut()
            .get_mut(&owner)
            .unwrap()
            .type_parameters
            .push(param);
        id
    }

    pub fn add_supertype(&self, decl: DeclId, supertype: SourceType) {
        self.decls.borrow_mut().get_mut(&decl).unwrap().supertypes.push(supertype);
    }

    pub fn add_field(&self, owner: DeclId, name: &str, field_type: SourceType) -> MemberId {
        let id = MemberId(self.fresh());
        self.members.borrow_mut().insert(
            id,
            MemberRecord {
                kind: MemberKind::Field,
                name: SmolStr::new(name),
                field_type: Some(field_type),
                signature: None,
                annotations: Vec::new(),
            },
        );
        self.decls.borrow_mut().get_mut(&owner).unwrap().members.push(id);
        id
    }

    pub fn add_method(&self, owner: DeclId, name: &str, signature: ExecutableSignature) -> MemberId {
        let id = MemberId(self.fresh());
        self.members.borrow_mut().insert(
            id,
            MemberRecord {
                kind: MemberKind::Method,
                name: SmolStr::new(name),
                field_type: None,
                signature: Some(signature),
                annotations: Vec::new(),
            },
        );
        self.decls.borrow_mut().get_mut(&owner).unwrap().members.push(id);
        id
    }

    pub fn add_legacy_repeatable_container(&self, annotation_type: DeclId, container: DeclId) {
        self.legacy_repeatable.borrow_mut().insert(annotation_type, container);
    }

    pub fn annotate_decl(&self, decl: DeclId, annotation: RawAnnotation) {
        self.decls.borrow_mut().get_mut(&decl).unwrap().annotations.push(annotation);
    }
}

impl SymbolOracle for FakeOracle {
    fn qualified_name(&self, text: &str) -> QualifiedName {
        QualifiedName::new(text)
    }

    fn lookup(&self, name: &QualifiedName) -> Option<DeclId> {
        self.by_name.borrow().get(name).copied()
    }

    fn builtin(&self, kind: BuiltinKind) -> DeclId {
        *self.builtins.borrow().get(&kind).expect("builtin registered by test setup")
    }

    fn top_class(&self) -> DeclId {
        self.top_class.borrow().expect("top class registered by test setup")
    }

    fn cloneable_class(&self) -> DeclId {
        self.cloneable_class.borrow().expect("cloneable class registered by test setup")
    }

    fn serializable_class(&self) -> DeclId {
        self.serializable_class.borrow().expect("serializable class registered by test setup")
    }

    fn boxed_class(&self, kind: PrimitiveKind) -> Option<DeclId> {
        self.boxed.borrow().get(&kind).copied()
    }

    fn qualified_name_of(&self, decl: DeclId) -> QualifiedName {
        self.decls.borrow()[&decl].qualified_name.clone()
    }

    fn kind_of(&self, decl: DeclId) -> DeclKind {
        self.decls.borrow()[&decl].kind
    }

    fn nested_elements(&self, decl: DeclId) -> Vec<DeclId> {
        self.decls.borrow()[&decl].nested.clone()
    }

    fn members_of(&self, decl: DeclId) -> Vec<MemberId> {
        self.decls.borrow()[&decl].members.clone()
    }

    fn member_kind(&self, member: MemberId) -> MemberKind {
        self.members.borrow()[&member].kind
    }

    fn member_name(&self, member: MemberId) -> SmolStr {
        self.members.borrow()[&member].name.clone()
    }

    fn member_owner(&self, member: MemberId) -> DeclId {
        self.decls
            .borrow()
            .iter()
            .find(|(_, record)| record.members.contains(&member))
            .map(|(decl, _)| *decl)
            .expect("member owner registered by test setup")
    }

    fn member_type(&self, member: MemberId) -> SourceType {
        self.members.borrow()[&member]
            .field_type
            .clone()
            .expect("member is a field or parameter")
    }

    fn executable_signature(&self, member: MemberId) -> ExecutableSignature {
        self.members.borrow()[&member]
            .signature
            .clone()
            .expect("member is a method, constructor, or accessor")
    }

    fn type_parameters(&self, decl: DeclId) -> Vec<TypeParameter> {
        self.decls.borrow()[&decl].type_parameters.clone()
    }

    fn type_parameter(&self, id: TypeParamId) -> TypeParameter {
        self.type_params.borrow()[&id].clone()
    }

    fn direct_supertypes(&self, decl: DeclId) -> Vec<SourceType> {
        self.decls.borrow()[&decl].supertypes.clone()
    }

    fn star_project(&self, decl: DeclId) -> StarProjection {
        StarProjection(decl)
    }

    fn is_raw_assignable(&self, from: StarProjection, to: StarProjection) -> bool {
        if from.0 == to.0 {
            return true;
        }
        let mut visited = HashSet::new();
        let mut queue = vec![from.0];
        visited.insert(from.0);
        while let Some(current) = queue.pop() {
            let supertypes = match self.decls.borrow().get(&current) {
                Some(record) => record.supertypes.clone(),
                None => continue,
            };
            for supertype in supertypes {
                if supertype.declaration == to.0 {
                    return true;
                }
                if visited.insert(supertype.declaration) {
                    queue.push(supertype.declaration);
                }
            }
        }
        false
    }

    fn annotations_of(&self, id: AnnotatedId) -> Vec<RawAnnotation> {
        match id {
            AnnotatedId::Decl(decl) => self.decls.borrow()[&decl].annotations.clone(),
            AnnotatedId::Member(member) => self.members.borrow()[&member].annotations.clone(),
        }
    }

    fn legacy_repeatable_container(&self, annotation_type: DeclId) -> Option<DeclId> {
        self.legacy_repeatable.borrow().get(&annotation_type).copied()
    }
}

/// A small `java.lang`/`java.util`-shaped universe shared by the property
/// and scenario tests: `Object`/`Cloneable`/`Serializable`, the eight boxed
/// classes, and a `List`/`ArrayList` pair with a declared `E` parameter,
/// matching scenario S3/S4 of the spec this crate implements.
///
/// Each primitive-eligible built-in and its canonical boxed class are
/// registered as the *same* declaration (`builtin(kind)` and
/// `boxed_class(kind)` resolve to one `DeclId`), mirroring the source
/// model's own framing that primitive-like types are ordinary classes —
/// there is one declaration playing both roles, not two kept in sync.
pub struct CoreUniverse {
    pub object: DeclId,
    pub cloneable: DeclId,
    pub serializable: DeclId,
    pub string: DeclId,
    pub boxed: HashMap<PrimitiveKind, DeclId>,
    pub list: DeclId,
    pub list_e: TypeParamId,
    pub array_list: DeclId,
    pub array_list_e: TypeParamId,
}

pub fn build_core_universe(oracle: &FakeOracle) -> CoreUniverse {
    oracle.declare_builtin(BuiltinKind::Unit, "kotlin.Unit");

    let object = oracle.declare_class("java.lang.Object", DeclKind::Class);
    let cloneable = oracle.declare_class("java.lang.Cloneable", DeclKind::Interface);
    let serializable = oracle.declare_class("java.io.Serializable", DeclKind::Interface);
    oracle.set_top_class(object);
    oracle.set_cloneable_class(cloneable);
    oracle.set_serializable_class(serializable);

    let string = oracle.declare_class("java.lang.String", DeclKind::Class);
    oracle.add_supertype(string, SourceType::non_null(object));

    let mut boxed = HashMap::new();
    for (builtin_kind, primitive_kind, name) in [
        (BuiltinKind::Boolean, PrimitiveKind::Boolean, "java.lang.Boolean"),
        (BuiltinKind::Byte, PrimitiveKind::Byte, "java.lang.Byte"),
        (BuiltinKind::Short, PrimitiveKind::Short, "java.lang.Short"),
        (BuiltinKind::Int, PrimitiveKind::Int, "java.lang.Integer"),
        (BuiltinKind::Long, PrimitiveKind::Long, "java.lang.Long"),
        (BuiltinKind::Char, PrimitiveKind::Char, "java.lang.Character"),
        (BuiltinKind::Float, PrimitiveKind::Float, "java.lang.Float"),
        (BuiltinKind::Double, PrimitiveKind::Double, "java.lang.Double"),
    ] {
        let decl = oracle.declare_builtin(builtin_kind, name);
        oracle.add_supertype(decl, SourceType::non_null(object));
        oracle.set_boxed(primitive_kind, decl);
        boxed.insert(primitive_kind, decl);
    }

    let list = oracle.declare_class("java.util.List", DeclKind::Interface);
    let list_e = oracle.add_type_parameter(list, "E", None);
    oracle.add_supertype(list, SourceType::non_null(object));

    let array_list = oracle.declare_class("java.util.ArrayList", DeclKind::Class);
    let array_list_e = oracle.add_type_parameter(array_list, "E", None);
    oracle.add_supertype(
        array_list,
        SourceType {
            declaration: list,
            nullable: false,
            arguments: vec![SourceTypeArg::Variable(array_list_e)],
        },
    );

    CoreUniverse {
        object,
        cloneable,
        serializable,
        string,
        boxed,
        list,
        list_e,
        array_list,
        array_list_e,
    }
}
