//! Annotation adaptation (spec.md §4.4, §4.5): raw oracle payloads turned
//! into visitor-dispatched values and mirrors, with repeatable annotations
//! grouped into their legacy container form first.

pub mod mirror;
pub mod repeatable;
pub mod value;

pub use mirror::{AnnotationMirror, AnnotationMirrorAdapter};
pub use repeatable::RepeatableGrouper;
pub use value::{AnnotationValue, AnnotationValueAdapter, AnnotationValueVisitor, Payload};
