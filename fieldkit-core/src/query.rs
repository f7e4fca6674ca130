//! Predicates over type descriptors.
//!
//! Every query fails closed: a failed lookup yields `false` or `None` rather than an error.

use alloc::boxed::Box;

use crate::{
    introspect::Reflect,
    meta::{Annotation, Field, TypeDescriptor},
};

/// Whether `ty` implements the interface `I`, usually a `dyn Trait` type.
///
/// Only interfaces registered with `#[reflect(implements(..))]` are known.
pub fn implements<I: ?Sized + 'static>(ty: &TypeDescriptor) -> bool {
    ty.interfaces().iter().any(|marker| marker.is::<I>())
}

/// Whether `ty` is annotated with `A`.
pub fn is_annotated<A: Annotation>(ty: &TypeDescriptor) -> bool {
    ty.annotations().iter().any(|marker| marker.is::<A>())
}

/// Whether `field` is annotated with `A`.
pub fn is_field_annotated<A: Annotation>(field: &Field) -> bool {
    field.annotations().iter().any(|marker| marker.is::<A>())
}

/// Whether `ty` declares a field called `name`.
pub fn has_field(ty: &TypeDescriptor, name: &str) -> bool {
    field(ty, name).is_some()
}

/// Whether `ty` has a registered method called `name`.
pub fn has_method(ty: &TypeDescriptor, name: &str) -> bool {
    ty.methods().iter().any(|method| *method == name)
}

/// Whether `ty` has a default constructor.
pub fn has_default_constructor(ty: &TypeDescriptor) -> bool {
    ty.constructor().is_some()
}

/// Returns the field of `ty` called `name`, if it declares one.
pub fn field(ty: &TypeDescriptor, name: &str) -> Option<&'static Field> {
    match ty.field(name) {
        Ok(field) => Some(field),
        Err(e) => {
            debug!("{}", e);
            None
        }
    }
}

/// Creates an instance of `ty` through its default constructor, if it has one.
pub fn new_instance(ty: &TypeDescriptor) -> Option<Box<dyn Reflect>> {
    match ty.constructor() {
        Some(constructor) => Some(constructor()),
        None => {
            debug!("Type `{}` has no default constructor", ty.name());
            None
        }
    }
}
