//! Identity of annotation and interface kinds.

use core::{any::TypeId, fmt};

/// An annotation kind that can be attached to types and fields.
///
/// Annotations are plain marker types:
///
/// ```
/// use fieldkit_core::meta::Annotation;
///
/// pub struct Entity;
/// impl Annotation for Entity {}
/// ```
pub trait Annotation: 'static {}

/// A recorded annotation or interface, identified by the [`TypeId`] of its kind.
///
/// Two markers are equal when they identify the same kind, regardless of the name they were
/// recorded under.
#[derive(Clone, Copy)]
pub struct Marker {
    name: &'static str,
    id: fn() -> TypeId,
}

impl Marker {
    /// A marker for the annotation `A`.
    pub const fn annotation<A: Annotation>(name: &'static str) -> Self {
        Self {
            name,
            id: TypeId::of::<A>,
        }
    }

    /// A marker for the interface `I`, usually a `dyn Trait` type.
    pub const fn interface<I: ?Sized + 'static>(name: &'static str) -> Self {
        Self {
            name,
            id: TypeId::of::<I>,
        }
    }

    /// The name the kind was recorded under.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The [`TypeId`] of the kind.
    pub fn type_id(&self) -> TypeId {
        (self.id)()
    }

    /// Whether this marker identifies `T`.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.type_id() == TypeId::of::<T>()
    }
}

impl PartialEq for Marker {
    fn eq(&self, other: &Self) -> bool {
        self.type_id() == other.type_id()
    }
}

impl Eq for Marker {}

impl fmt::Debug for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Marker").field(&self.name).finish()
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
