//! `PrimitiveType` and its per-round cache (spec.md §3, §4.3.8, §9 "Cache
//! scoping").

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Char,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
    ];
}

/// A primitive type mirror. Identity is by kind (spec.md §3 invariant 2):
/// two `PrimitiveType`s of the same kind are always same-type, and when
/// both came from the same [`PrimitiveCache`] they also share the
/// underlying `Rc`, so `same_instance` holds too.
#[derive(Debug, Clone)]
pub struct PrimitiveType(Rc<PrimitiveKind>);

impl PrimitiveType {
    /// Constructs a standalone primitive not tied to any cache. Prefer
    /// [`PrimitiveCache::get`] so that repeated projections of the same kind
    /// share an instance.
    pub fn uncached(kind: PrimitiveKind) -> Self {
        Self(Rc::new(kind))
    }

    pub fn kind(&self) -> PrimitiveKind {
        *self.0
    }

    /// True when `self` and `other` are the exact same cached instance, not
    /// merely the same kind. Used by the reference-equality half of
    /// testable property 2.
    pub fn same_instance(&self, other: &PrimitiveType) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for PrimitiveType {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind()
    }
}

impl Eq for PrimitiveType {}

impl Serialize for PrimitiveType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.kind().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PrimitiveType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        PrimitiveKind::deserialize(deserializer).map(PrimitiveType::uncached)
    }
}

/// Per-processing-round cache of primitive mirrors (spec.md §5, §9). Not
/// `Sync`; a driver sharing one [`crate::type_utils::TypeUtils`] across
/// rounds or threads must put it behind a mutex itself, per the design
/// notes — this type intentionally stays `RefCell`-based rather than
/// pre-emptively synchronizing state that is single-threaded in the
/// assumed deployment.
#[derive(Debug, Default)]
pub struct PrimitiveCache {
    slots: RefCell<HashMap<PrimitiveKind, Rc<PrimitiveKind>>>,
}

impl PrimitiveCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: PrimitiveKind) -> PrimitiveType {
        let mut slots = self.slots.borrow_mut();
        let rc = slots.entry(kind).or_insert_with(|| Rc::new(kind));
        PrimitiveType(Rc::clone(rc))
    }
}
