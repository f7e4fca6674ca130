//! Fail-soft reading and writing of field values.
//!
//! Restricted fields are only readable while their accessibility flag is raised. [`get`] and
//! [`set`] raise it through a guard for the duration of the call and restore the previous state
//! when the guard drops, whether the access succeeded or not. The guard is internal, so a field
//! can't be left widened past the call that needed it:
//!
//! ```compile_fail
//! use fieldkit_core::access::AccessGuard;
//! ```
//!
//! [`get`] and [`set`] never fail: a denied or invalid access is logged and yields `None` or leaves
//! the field unchanged. Use [`try_get`] and [`try_set`] to receive the error instead.
//!
//! The widen/restore pair is not atomic. Concurrent accesses to the same field from several
//! threads must be serialized by the caller.

use crate::{
    introspect::Reflect,
    meta::{Field, Value, Visibility},
    Error, Result,
};

/// Reads a clone of the field's value from `instance`.
///
/// Returns `None` if the access is denied or `instance` is not of the field's owning type. A
/// field holding `None` is returned as `Some` boxed `Option`.
pub fn get(field: &Field, instance: &dyn Reflect) -> Option<Value> {
    match try_get(field, instance) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Failed to read field `{}`: {}", field.name(), e);
            None
        }
    }
}

/// Writes `value` into the field of `instance`.
///
/// If the access is denied, `instance` is not of the field's owning type or `value` is not of the
/// field's type, the field is left unchanged.
pub fn set(value: Value, field: &Field, instance: &mut dyn Reflect) {
    if let Err(e) = try_set(value, field, instance) {
        warn!("Failed to write field `{}`: {}", field.name(), e);
    }
}

/// Same as [`get`] but returns the reason of a failed read.
pub fn try_get(field: &Field, instance: &dyn Reflect) -> Result<Value> {
    let _guard = AccessGuard::acquire(field)?;

    field.read(instance.as_any())
}

/// Same as [`set`] but returns the reason of a failed write.
pub fn try_set(value: Value, field: &Field, instance: &mut dyn Reflect) -> Result<()> {
    let _guard = AccessGuard::acquire(field)?;

    field.write(instance.as_any_mut(), value)
}

/// Keeps a field accessible while alive.
///
/// The accessibility flag is restored to its previous state on drop.
#[derive(Debug)]
pub(crate) struct AccessGuard<'f> {
    field: &'f Field,
    previous: bool,
}

impl<'f> AccessGuard<'f> {
    /// Raises the accessibility flag of `field`.
    ///
    /// Fails for opaque fields, which can never be made accessible.
    pub(crate) fn acquire(field: &'f Field) -> Result<Self> {
        if field.visibility() == Visibility::Opaque {
            return Err(Error::AccessDenied {
                field: field.name(),
            });
        }
        let previous = field.set_accessible(true);
        if !previous && field.visibility() == Visibility::Restricted {
            trace!("Widened access to field `{}`", field.name());
        }

        Ok(Self { field, previous })
    }
}

impl Drop for AccessGuard<'_> {
    fn drop(&mut self) {
        self.field.set_accessible(self.previous);
    }
}
