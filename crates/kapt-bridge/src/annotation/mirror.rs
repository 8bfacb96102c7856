//! `AnnotationMirror` and its adapter (spec.md §4.4, §3).

use smol_str::SmolStr;

use crate::mirror::{ClassTypeElement, DeclaredTypeMirror};
use crate::oracle::{AnnotatedId, RawAnnotation, SymbolOracle};
use crate::projection::TypeProjection;

use super::repeatable::RepeatableGrouper;
use super::value::{AnnotationValue, AnnotationValueAdapter};

/// An adapted annotation usage: its (always raw) type and ordered
/// element-name → value pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationMirror {
    pub annotation_type: DeclaredTypeMirror,
    pub values: Vec<(SmolStr, AnnotationValue)>,
}

impl AnnotationMirror {
    pub fn value(&self, name: &str) -> Option<&AnnotationValue> {
        self.values
            .iter()
            .find(|(element_name, _)| element_name == name)
            .map(|(_, value)| value)
    }
}

/// Turns [`RawAnnotation`]s reported by the oracle into [`AnnotationMirror`]s,
/// grouping repeatable occurrences first (spec.md §4.5).
pub struct AnnotationMirrorAdapter<'a> {
    oracle: &'a dyn SymbolOracle,
    projection: &'a TypeProjection<'a>,
}

impl<'a> AnnotationMirrorAdapter<'a> {
    pub fn new(oracle: &'a dyn SymbolOracle, projection: &'a TypeProjection<'a>) -> Self {
        Self { oracle, projection }
    }

    pub fn adapt(&self, raw: &RawAnnotation) -> AnnotationMirror {
        let value_adapter = AnnotationValueAdapter::new(self.oracle, self.projection);
        AnnotationMirror {
            annotation_type: DeclaredTypeMirror::raw(ClassTypeElement::new(
                self.oracle,
                raw.annotation_type,
            )),
            values: raw
                .arguments
                .iter()
                .map(|(name, value)| (name.clone(), value_adapter.adapt(value)))
                .collect(),
        }
    }

    /// The full set of annotations on `id`, after repeatable grouping
    /// (spec.md §4.5): this is the entry point adapters should call instead
    /// of going through `annotations_of` directly.
    pub fn adapt_all(&self, id: AnnotatedId) -> Vec<AnnotationMirror> {
        RepeatableGrouper::new(self.oracle)
            .group(self.oracle.annotations_of(id))
            .iter()
            .map(|raw| self.adapt(raw))
            .collect()
    }
}
