//! Classification of fields into persistent and non-persistent ones.
//!
//! A field is persistent when it is neither static nor transient. Persistent fields make up the
//! state a persistence layer stores and [`copy`](crate::copy) transfers.

use alloc::vec::Vec;

use crate::meta::{Field, TypeDescriptor};

/// Whether the field is static.
pub fn is_static(field: &Field) -> bool {
    field.modifiers().is_static()
}

/// Whether the field is transient.
pub fn is_transient(field: &Field) -> bool {
    field.modifiers().is_transient()
}

/// Whether the field is persistent, i.e. neither static nor transient.
pub fn is_persistent(field: &Field) -> bool {
    !is_static(field) && !is_transient(field)
}

/// Returns the persistent fields declared by `ty`, in declaration order.
pub fn persistent_fields(ty: &TypeDescriptor) -> Vec<&'static Field> {
    ty.fields()
        .iter()
        .copied()
        .filter(|field| is_persistent(field))
        .collect()
}
