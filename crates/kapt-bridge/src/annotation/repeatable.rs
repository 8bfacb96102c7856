//! `RepeatableGrouper` (spec.md §4.5).

use std::collections::HashMap;

use smol_str::SmolStr;

use crate::ids::DeclId;
use crate::oracle::{RawAnnotation, RawValue, SymbolOracle};

/// Groups repeated occurrences of the same repeatable annotation type into
/// a single synthetic container annotation, the way the legacy model
/// expects (spec.md §4.5, §3 invariant 6).
pub struct RepeatableGrouper<'a> {
    oracle: &'a dyn SymbolOracle,
}

impl<'a> RepeatableGrouper<'a> {
    pub fn new(oracle: &'a dyn SymbolOracle) -> Self {
        Self { oracle }
    }

    /// Groups `raw` in place, preserving each annotation type's first
    /// occurrence position. A single occurrence of a repeatable type is
    /// left untouched — only two or more trigger container synthesis,
    /// matching the legacy model's own behavior.
    pub fn group(&self, raw: Vec<RawAnnotation>) -> Vec<RawAnnotation> {
        let mut order: Vec<DeclId> = Vec::new();
        let mut groups: HashMap<DeclId, Vec<RawAnnotation>> = HashMap::new();

        for annotation in raw {
            let key = annotation.annotation_type;
            groups.entry(key).or_insert_with(|| {
                order.push(key);
                Vec::new()
            }).push(annotation);
        }

        let mut result = Vec::with_capacity(order.len());
        for annotation_type in order {
            let mut occurrences = groups.remove(&annotation_type).expect("just inserted");
            if occurrences.len() == 1 {
                result.push(occurrences.pop().expect("len checked above"));
                continue;
            }
            match self.container_for(annotation_type) {
                Some(container) => {
                    let grouped = RawValue::List(
                        occurrences.into_iter().map(RawValue::Annotation).collect(),
                    );
                    result.push(RawAnnotation {
                        annotation_type: container,
                        arguments: vec![(SmolStr::new("value"), grouped)],
                    });
                }
                // No declared container: the oracle let more than one
                // occurrence through without one, so admit them ungrouped
                // rather than drop annotations the source actually has.
                None => result.extend(occurrences),
            }
        }
        result
    }

    fn container_for(&self, annotation_type: DeclId) -> Option<DeclId> {
        self.oracle
            .legacy_repeatable_container(annotation_type)
            .or_else(|| self.oracle.source_repeatable_container(annotation_type))
    }
}
