//! Field descriptors.

use alloc::boxed::Box;
use core::{
    any::Any,
    fmt,
    sync::atomic::{AtomicBool, Ordering},
};

use serde::Serialize;

use super::{Marker, Type, TypeDescriptor};
use crate::{Error, Result};

/// A type-erased field value.
pub type Value = Box<dyn Any>;

/// Modifier flags of a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    is_static: bool,
    is_transient: bool,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Self::new(false, false);

    /// Creates a new set of modifiers.
    pub const fn new(is_static: bool, is_transient: bool) -> Self {
        Self {
            is_static,
            is_transient,
        }
    }

    /// The field belongs to its type rather than to instances.
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// The field's value is not part of the instance's stored state.
    pub fn is_transient(&self) -> bool {
        self.is_transient
    }
}

/// How a field can be reached through its descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Always readable and writable.
    Public,
    /// Readable and writable only while the field's accessibility flag is raised.
    Restricted,
    /// Never readable or writable.
    Opaque,
}

/// Why a generated setter refused an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    /// The instance is not of the field's owning type.
    Instance,
    /// The value is not of the field's declared type.
    Value,
}

/// Generated functions reading and writing one field of a type-erased instance.
#[derive(Clone, Copy)]
pub struct Accessors {
    get: fn(&dyn Any) -> Option<Value>,
    set: fn(&mut dyn Any, Value) -> core::result::Result<(), Rejected>,
}

impl Accessors {
    /// Creates a new accessor pair.
    ///
    /// `get` returns `None` when the instance is not of the owning type.
    pub const fn new(
        get: fn(&dyn Any) -> Option<Value>,
        set: fn(&mut dyn Any, Value) -> core::result::Result<(), Rejected>,
    ) -> Self {
        Self { get, set }
    }
}

impl fmt::Debug for Accessors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessors").finish_non_exhaustive()
    }
}

/// A field declared by a described type.
pub struct Field {
    name: &'static str,
    ty: &'static Type,
    owner: &'static TypeDescriptor,
    modifiers: Modifiers,
    visibility: Visibility,
    annotations: &'static [Marker],
    accessors: Option<Accessors>,
    accessible: AtomicBool,
}

impl Field {
    /// Creates a new field descriptor.
    ///
    /// This is normally only called from code generated by the `TypeInfo` derive.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        name: &'static str,
        ty: &'static Type,
        owner: &'static TypeDescriptor,
        modifiers: Modifiers,
        visibility: Visibility,
        annotations: &'static [Marker],
        accessors: Option<Accessors>,
    ) -> Self {
        Self {
            name,
            ty,
            owner,
            modifiers,
            visibility,
            annotations,
            accessors,
            accessible: AtomicBool::new(false),
        }
    }

    /// Returns the name of the field.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared type of the field.
    pub fn ty(&self) -> &'static Type {
        self.ty
    }

    /// Returns the type declaring the field.
    pub fn owner(&self) -> &'static TypeDescriptor {
        self.owner
    }

    /// Returns the modifier flags of the field.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Returns the visibility of the field.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns the annotations attached to the field.
    pub fn annotations(&self) -> &'static [Marker] {
        self.annotations
    }

    /// Whether the field can currently be read and written.
    pub fn is_accessible(&self) -> bool {
        match self.visibility {
            Visibility::Public => true,
            Visibility::Restricted => self.accessible.load(Ordering::Relaxed),
            Visibility::Opaque => false,
        }
    }

    /// Sets the accessibility flag, returning its previous state.
    ///
    /// Has no effect on the accessibility of public and opaque fields.
    pub(crate) fn set_accessible(&self, accessible: bool) -> bool {
        self.accessible.swap(accessible, Ordering::Relaxed)
    }

    /// Reads a clone of the field's value from `instance`.
    ///
    /// Fails if the field is not accessible or `instance` is not of the owning type.
    pub fn read(&self, instance: &dyn Any) -> Result<Value> {
        let accessors = self.checked_accessors()?;

        (accessors.get)(instance).ok_or(Error::InvalidInstance {
            field: self.name,
            expected: self.owner.name(),
        })
    }

    /// Writes `value` into the field of `instance`.
    ///
    /// Fails if the field is not accessible, `instance` is not of the owning type or `value` is
    /// not of the field's type. The field is left untouched on failure.
    pub fn write(&self, instance: &mut dyn Any, value: Value) -> Result<()> {
        let accessors = self.checked_accessors()?;

        (accessors.set)(instance, value).map_err(|rejected| match rejected {
            Rejected::Instance => Error::InvalidInstance {
                field: self.name,
                expected: self.owner.name(),
            },
            Rejected::Value => Error::InvalidValue { field: self.name },
        })
    }

    fn checked_accessors(&self) -> Result<&Accessors> {
        match &self.accessors {
            Some(accessors) if self.is_accessible() => Ok(accessors),
            _ => Err(Error::AccessDenied { field: self.name }),
        }
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self, other)
    }
}

impl Eq for Field {}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("owner", &self.owner.name())
            .field("modifiers", &self.modifiers)
            .field("visibility", &self.visibility)
            .field("annotations", &self.annotations)
            .finish()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}

impl Serialize for Field {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
