use crate::{access, classify, introspect::Reflect, Error, Result};

/// Copies the value of each persistent field of `origin` into `target`.
///
/// Both instances must be of the same runtime type. Otherwise [`Error::TypeMismatch`] is returned
/// and `target` is left untouched.
///
/// The copy is shallow: values are cloned, so reference-counted fields of `target` end up sharing
/// their allocation with `origin`. Fields that can not be read or written are skipped (see
/// [`access::get`] and [`access::set`]), so a successful copy may still leave some fields of
/// `target` unchanged.
pub fn copy(origin: &dyn Reflect, target: &mut dyn Reflect) -> Result<()> {
    let origin_ty = origin.descriptor();
    let target_ty = target.descriptor();
    if origin.as_any().type_id() != target.as_any().type_id() {
        return Err(Error::TypeMismatch {
            origin: origin_ty.name(),
            target: target_ty.name(),
        });
    }

    for field in classify::persistent_fields(target_ty) {
        trace!("Copying field `{}` of `{}`", field.name(), target_ty.name());
        if let Some(value) = access::get(field, origin) {
            access::set(value, field, target);
        }
    }

    Ok(())
}
