//! Type introspection support.
//!
//! This module provides the traits through which described types expose their metadata:
//! [`Type`] maps a Rust type to the [`meta::Type`] a field of that type is declared with, and
//! [`TypeInfo`] gives access to the full [`TypeDescriptor`] of a derived struct. [`Reflect`] is the
//! object-safe view of [`TypeInfo`] used by the accessor and the copier.

#![deny(missing_docs)]

use core::any::Any;

use crate::meta::TypeDescriptor;

mod r#type;
pub use r#type::Type;

// Re-export the TypeInfo derive macro so it's available alongside the trait
pub use fieldkit_macros::TypeInfo;

/// Types with a generated descriptor table.
///
/// Use the `TypeInfo` derive macro to implement this trait:
///
/// ```
/// use fieldkit_core::introspect::TypeInfo;
///
/// #[derive(Clone, TypeInfo)]
/// #[reflect(crate = "fieldkit_core")]
/// struct Account {
///     id: i64,
///     #[reflect(transient)]
///     cached_balance: i64,
/// }
///
/// let info = Account::type_info();
/// assert_eq!(info.fields().len(), 2);
/// assert_eq!(info.fields()[0].name(), "id");
/// ```
pub trait TypeInfo: Any {
    /// The descriptor of the type.
    fn type_info() -> &'static TypeDescriptor;
}

/// Object-safe access to the descriptor and the concrete value of a described instance.
///
/// Implemented for every [`TypeInfo`] type.
pub trait Reflect: Any {
    /// The descriptor of the instance's runtime type.
    fn descriptor(&self) -> &'static TypeDescriptor;

    /// The instance as [`Any`].
    fn as_any(&self) -> &dyn Any;

    /// The instance as mutable [`Any`].
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: TypeInfo> Reflect for T {
    fn descriptor(&self) -> &'static TypeDescriptor {
        T::type_info()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl dyn Reflect {
    /// Whether the instance is a `T`.
    pub fn is<T: Reflect>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// The instance as a `T`, if it is one.
    pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// The instance as a mutable `T`, if it is one.
    pub fn downcast_mut<T: Reflect>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }
}

impl core::fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Reflect")
            .field(&self.descriptor().name())
            .finish()
    }
}

