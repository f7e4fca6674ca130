#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![warn(unreachable_pub, clippy::std_instead_of_core)]
#![doc = include_str!("../README.md")]

extern crate alloc;

#[macro_use]
mod log;

mod error;
pub use error::{Error, Result};
pub mod meta;
pub use meta::{Field, TypeDescriptor};
pub mod introspect;
pub use introspect::{Reflect, TypeInfo};

pub mod access;
pub mod classify;
pub mod collection;
mod copy;
pub use copy::copy;
pub mod query;

#[doc(hidden)]
pub mod __private {
    pub use alloc::boxed::Box;
    pub use core::{any::Any, option::Option, result::Result};
}

#[cfg(test)]
mod test_utils;
