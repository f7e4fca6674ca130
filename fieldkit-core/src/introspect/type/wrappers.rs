//! Type implementations for wrapper types.

use crate::{introspect::Type, meta};
use alloc::{boxed::Box, rc::Rc, sync::Arc};

impl<T: Type> Type for Option<T> {
    const TYPE: &'static meta::Type = &meta::Type::Optional(T::TYPE);
}

// Borrowed and boxed values are described as the value itself.

impl<T: Type + ?Sized> Type for &T {
    const TYPE: &'static meta::Type = T::TYPE;
}

impl<T: Type + ?Sized> Type for Box<T> {
    const TYPE: &'static meta::Type = T::TYPE;
}

// Reference-counted pointers share their value on clone.

impl<T: Type + ?Sized> Type for Arc<T> {
    const TYPE: &'static meta::Type = &meta::Type::Shared(T::TYPE);
}

impl<T: Type + ?Sized> Type for Rc<T> {
    const TYPE: &'static meta::Type = &meta::Type::Shared(T::TYPE);
}
