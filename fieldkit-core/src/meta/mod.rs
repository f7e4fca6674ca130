//! Descriptor tables of described types.
//!
//! A [`TypeDescriptor`] lists the [`Field`]s a type declares together with the methods,
//! interfaces and annotations registered for it. Descriptors are generated at compile time by
//! the `TypeInfo` derive and stored in statics; nothing is discovered at runtime.

mod descriptor;
pub use descriptor::{Constructor, TypeDescriptor};

mod field;
pub use field::{Accessors, Field, Modifiers, Rejected, Value, Visibility};

mod marker;
pub use marker::{Annotation, Marker};

mod r#type;
pub use r#type::{Collection, Type};
