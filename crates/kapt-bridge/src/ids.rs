//! Lightweight handles and interned names shared across the adapter.
//!
//! These stand in for whatever identity scheme the real symbol graph uses.
//! The core only ever compares them by value; it never assumes a handle
//! survives across processing rounds (see spec.md §5, §9 "Identity vs.
//! equality").

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// A fully-qualified name, e.g. `java.util.List` or `java.lang.Integer`.
///
/// Equality and hashing are by the interned text; two `QualifiedName`s built
/// from the same string always compare equal regardless of which call to
/// [`SymbolOracle::qualified_name`](crate::oracle::SymbolOracle::qualified_name)
/// produced them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QualifiedName(SmolStr);

impl QualifiedName {
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(SmolStr::new(text.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The simple (unqualified) name, i.e. the text after the last `.`.
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(self.0.as_str())
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for QualifiedName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

macro_rules! handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u64);
    };
}

handle!(
    /// Opaque handle to a class-like declaration (class, interface, enum,
    /// enum entry, or annotation type) in the oracle's symbol graph.
    DeclId
);

handle!(
    /// Opaque handle to a field, parameter, method, constructor, or
    /// property-accessor member owned by some [`DeclId`].
    MemberId
);

handle!(
    /// Opaque handle to a type parameter declared on a class-like
    /// declaration or an executable member.
    TypeParamId
);
