//! `AnnotationValue` and its adapter (spec.md §4.4).
//!
//! The payload shapes mirror the teacher's own annotation model
//! (`nova-classfile::annotation::ElementValue`: `Const`/`Enum`/`Class`/
//! `Annotation`/`Array`) rather than reinventing a dispatch scheme from
//! scratch — this crate just adds the nullability/projection layer on top.

use crate::mirror::{ClassTypeElement, DeclaredTypeMirror, VariableElement};
use crate::oracle::{ClassRef, DeclKind, RawValue, SymbolOracle};
use crate::projection::TypeProjection;

use super::mirror::{AnnotationMirror, AnnotationMirrorAdapter};

/// An adapted annotation element value (spec.md §3, §4.4). One constant per
/// primitive kind plus the four "compound" legacy categories: class
/// literal, enum constant, nested annotation, and array.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationValue {
    Bool(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Char(char),
    Float(f32),
    Double(f64),
    Str(String),
    Type(DeclaredTypeMirror),
    EnumConstant(VariableElement),
    Annotation(AnnotationMirror),
    Array(Vec<AnnotationValue>),
}

/// A borrowed view of an [`AnnotationValue`]'s payload, the closest
/// equivalent this crate has to `javax.lang.model.element.AnnotationValue
/// ::getValue()` returning an untyped `Object` — callers that already know
/// they only want the raw data, not a visitor dispatch, use this instead of
/// [`AnnotationValue::accept`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload<'a> {
    Bool(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Char(char),
    Float(f32),
    Double(f64),
    Str(&'a str),
    Type(&'a DeclaredTypeMirror),
    EnumConstant(&'a VariableElement),
    Annotation(&'a AnnotationMirror),
    Array(&'a [AnnotationValue]),
}

impl AnnotationValue {
    pub fn get_value(&self) -> Payload<'_> {
        match self {
            AnnotationValue::Bool(v) => Payload::Bool(*v),
            AnnotationValue::Byte(v) => Payload::Byte(*v),
            AnnotationValue::Short(v) => Payload::Short(*v),
            AnnotationValue::Int(v) => Payload::Int(*v),
            AnnotationValue::Long(v) => Payload::Long(*v),
            AnnotationValue::Char(v) => Payload::Char(*v),
            AnnotationValue::Float(v) => Payload::Float(*v),
            AnnotationValue::Double(v) => Payload::Double(*v),
            AnnotationValue::Str(v) => Payload::Str(v),
            AnnotationValue::Type(v) => Payload::Type(v),
            AnnotationValue::EnumConstant(v) => Payload::EnumConstant(v),
            AnnotationValue::Annotation(v) => Payload::Annotation(v),
            AnnotationValue::Array(v) => Payload::Array(v),
        }
    }

    /// Dispatches to exactly one `visit_*` method, the visitor-dispatch
    /// contract spec.md §4.4 names explicitly
    /// (`javax.lang.model.element.AnnotationValueVisitor`).
    pub fn accept<R>(&self, visitor: &mut dyn AnnotationValueVisitor<R>) -> R {
        match self {
            AnnotationValue::Bool(v) => visitor.visit_boolean(*v),
            AnnotationValue::Byte(v) => visitor.visit_byte(*v),
            AnnotationValue::Short(v) => visitor.visit_short(*v),
            AnnotationValue::Int(v) => visitor.visit_int(*v),
            AnnotationValue::Long(v) => visitor.visit_long(*v),
            AnnotationValue::Char(v) => visitor.visit_char(*v),
            AnnotationValue::Float(v) => visitor.visit_float(*v),
            AnnotationValue::Double(v) => visitor.visit_double(*v),
            AnnotationValue::Str(v) => visitor.visit_string(v),
            AnnotationValue::Type(v) => visitor.visit_type(v),
            AnnotationValue::EnumConstant(v) => visitor.visit_enum_constant(v),
            AnnotationValue::Annotation(v) => visitor.visit_annotation(v),
            AnnotationValue::Array(v) => visitor.visit_array(v),
        }
    }
}

pub trait AnnotationValueVisitor<R> {
    fn visit_boolean(&mut self, value: bool) -> R;
    fn visit_byte(&mut self, value: i8) -> R;
    fn visit_short(&mut self, value: i16) -> R;
    fn visit_int(&mut self, value: i32) -> R;
    fn visit_long(&mut self, value: i64) -> R;
    fn visit_char(&mut self, value: char) -> R;
    fn visit_float(&mut self, value: f32) -> R;
    fn visit_double(&mut self, value: f64) -> R;
    fn visit_string(&mut self, value: &str) -> R;
    fn visit_type(&mut self, value: &DeclaredTypeMirror) -> R;
    fn visit_enum_constant(&mut self, value: &VariableElement) -> R;
    fn visit_annotation(&mut self, value: &AnnotationMirror) -> R;
    fn visit_array(&mut self, value: &[AnnotationValue]) -> R;
}

/// Turns a [`RawValue`] reported by the oracle into an [`AnnotationValue`].
pub struct AnnotationValueAdapter<'a> {
    oracle: &'a dyn SymbolOracle,
    projection: &'a TypeProjection<'a>,
}

impl<'a> AnnotationValueAdapter<'a> {
    pub fn new(oracle: &'a dyn SymbolOracle, projection: &'a TypeProjection<'a>) -> Self {
        Self { oracle, projection }
    }

    pub fn adapt(&self, raw: &RawValue) -> AnnotationValue {
        match raw {
            RawValue::Bool(v) => AnnotationValue::Bool(*v),
            RawValue::Byte(v) => AnnotationValue::Byte(*v),
            RawValue::Short(v) => AnnotationValue::Short(*v),
            RawValue::Int(v) => AnnotationValue::Int(*v),
            RawValue::Long(v) => AnnotationValue::Long(*v),
            RawValue::Char(v) => AnnotationValue::Char(*v),
            RawValue::Float(v) => AnnotationValue::Float(*v),
            RawValue::Double(v) => AnnotationValue::Double(*v),
            RawValue::Str(v) => AnnotationValue::Str(v.clone()),
            RawValue::ClassLike(class_ref) => self.adapt_class_like(class_ref),
            RawValue::Annotation(raw_annotation) => AnnotationValue::Annotation(
                AnnotationMirrorAdapter::new(self.oracle, self.projection).adapt(raw_annotation),
            ),
            RawValue::List(items) => {
                AnnotationValue::Array(items.iter().map(|item| self.adapt(item)).collect())
            }
        }
    }

    /// spec.md §4.4: an enum entry dispatches to `EnumConstant`; any other
    /// class-like declaration (directly or as a resolved type) dispatches
    /// to `Type`. The distinguishing factor is the declaration's kind, not
    /// the raw payload's shape, so both `ClassRef` variants funnel through
    /// here.
    fn adapt_class_like(&self, class_ref: &ClassRef) -> AnnotationValue {
        let decl = class_ref.declaration();
        if self.oracle.kind_of(decl) == DeclKind::EnumEntry {
            AnnotationValue::EnumConstant(VariableElement::enum_constant(self.oracle, decl))
        } else {
            let declared = match class_ref {
                ClassRef::Decl(decl) => {
                    DeclaredTypeMirror::raw(ClassTypeElement::new(self.oracle, *decl))
                }
                ClassRef::Resolved(source) => self.projection.project_declared(source),
            };
            AnnotationValue::Type(declared)
        }
    }
}
