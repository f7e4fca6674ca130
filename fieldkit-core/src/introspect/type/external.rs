//! Type implementations for external crate types.
//!
//! External types are described as [`meta::Type::Custom`] with their canonical path.

#[allow(unused_imports)]
use crate::meta;

#[cfg(feature = "uuid")]
impl_type!(uuid::Uuid => meta::Type::Custom("uuid::Uuid"));

#[cfg(feature = "chrono")]
mod chrono_impls {
    use crate::{introspect::Type, meta};

    impl_type!(chrono::NaiveDate => meta::Type::Custom("chrono::NaiveDate"));
    impl_type!(chrono::NaiveTime => meta::Type::Custom("chrono::NaiveTime"));
    impl_type!(chrono::NaiveDateTime => meta::Type::Custom("chrono::NaiveDateTime"));
    impl_type!(chrono::Duration => meta::Type::Custom("chrono::Duration"));

    impl<Tz: chrono::TimeZone> Type for chrono::DateTime<Tz> {
        const TYPE: &'static meta::Type = &meta::Type::Custom("chrono::DateTime");
    }
}
