//! Declared-type introspection.
//!
//! This module provides implementations of the [`Type`] trait for standard Rust types,
//! mapping them to the [`meta::Type`] shape recorded for fields of that type.
//!
//! # Organization
//!
//! The implementations are organized into logical categories:
//! - `primitives`: Basic Rust types (bool, integers, floats, strings)
//! - `collections`: Container types (Vec, VecDeque, HashMap, HashSet, etc.)
//! - `wrappers`: Option, references and pointer types (Box, Arc, Rc)
//! - `external`: Third-party crate integrations (uuid, chrono)

use crate::meta;

/// Declared-type introspection.
///
/// Every non-opaque field of a `TypeInfo` struct must have a type implementing this trait. The
/// `TypeInfo` derive implements it for the struct itself as a [`meta::Type::Custom`] named after
/// the struct's full path.
pub trait Type {
    /// The declared type.
    const TYPE: &'static meta::Type;
}

// Macro utilities.
#[macro_use]
mod macros;

// Implementation modules.
mod collections;
mod external;
mod primitives;
mod wrappers;
