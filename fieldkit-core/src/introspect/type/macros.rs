//! Macros for implementing the Type trait.

/// Implements the Type trait for multiple types mapping to the same declared type.
///
/// ```ignore
/// impl_type!(bool => meta::Type::Bool);
/// impl_type!(String, str => meta::Type::String);
/// ```
macro_rules! impl_type {
    ($($ty:ty),+ => $variant:expr) => {
        $(
            impl $crate::introspect::Type for $ty {
                const TYPE: &'static $crate::meta::Type = &$variant;
            }
        )+
    };
}

/// Implements the Type trait for single-argument generic containers.
///
/// ```ignore
/// impl_collection_type!(Vec<T> => Vec);
/// ```
macro_rules! impl_collection_type {
    ($($ty:ident<$generic:ident> => $kind:ident),+ $(,)?) => {
        $(
            impl<$generic: $crate::introspect::Type> $crate::introspect::Type for $ty<$generic> {
                const TYPE: &'static $crate::meta::Type = &$crate::meta::Type::Collection(
                    $crate::meta::Collection::$kind,
                    $generic::TYPE,
                );
            }
        )+
    };
}
