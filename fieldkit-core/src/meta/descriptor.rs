//! Type descriptors.

use alloc::{boxed::Box, string::ToString};
use core::fmt;

use serde::{ser::SerializeStruct, Serialize};

use super::{Field, Marker};
use crate::{classify, introspect::Reflect, Error, Result};

/// Constructs a default instance of a described type.
pub type Constructor = fn() -> Box<dyn Reflect>;

/// Metadata of a described type.
///
/// Descriptors are generated as statics by the `TypeInfo` derive and live for the whole process.
/// Two descriptors are equal only if they are the same static.
pub struct TypeDescriptor {
    name: &'static str,
    fields: &'static [&'static Field],
    methods: &'static [&'static str],
    interfaces: &'static [Marker],
    annotations: &'static [Marker],
    constructor: Option<Constructor>,
}

impl TypeDescriptor {
    /// Creates a new type descriptor.
    ///
    /// This is normally only called from code generated by the `TypeInfo` derive.
    pub const fn new(
        name: &'static str,
        fields: &'static [&'static Field],
        methods: &'static [&'static str],
        interfaces: &'static [Marker],
        annotations: &'static [Marker],
        constructor: Option<Constructor>,
    ) -> Self {
        Self {
            name,
            fields,
            methods,
            interfaces,
            annotations,
            constructor,
        }
    }

    /// Returns the full path of the type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the fields declared by the type, in declaration order.
    pub fn fields(&self) -> &'static [&'static Field] {
        self.fields
    }

    /// Returns the declared field called `name`.
    pub fn field(&self, name: &str) -> Result<&'static Field> {
        self.fields
            .iter()
            .copied()
            .find(|field| field.name() == name)
            .ok_or_else(|| Error::NoSuchField {
                ty: self.name,
                field: name.to_string(),
            })
    }

    /// Returns the names of the methods registered for the type.
    pub fn methods(&self) -> &'static [&'static str] {
        self.methods
    }

    /// Returns the interfaces the type implements.
    pub fn interfaces(&self) -> &'static [Marker] {
        self.interfaces
    }

    /// Returns the annotations attached to the type.
    pub fn annotations(&self) -> &'static [Marker] {
        self.annotations
    }

    /// Returns the default constructor, if the type has one.
    pub fn constructor(&self) -> Option<Constructor> {
        self.constructor
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self, other)
    }
}

impl Eq for TypeDescriptor {}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .field("methods", &self.methods)
            .field("interfaces", &self.interfaces)
            .field("annotations", &self.annotations)
            .field("has_constructor", &self.constructor.is_some())
            .finish()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.name)?;
        let mut first = true;
        for field in self.fields {
            if !first {
                write!(f, ",")?;
            }
            first = false;
            write!(f, " {field}")?;
        }
        if !first {
            write!(f, " ")?;
        }
        write!(f, "}}")
    }
}

/// Serializes the name and the persistent fields of the type.
impl Serialize for TypeDescriptor {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("TypeDescriptor", 2)?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("fields", &classify::persistent_fields(self))?;
        state.end()
    }
}
