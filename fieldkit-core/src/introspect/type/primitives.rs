//! Type implementations for primitive types.

use crate::meta;
use alloc::string::String;

impl_type!(bool => meta::Type::Bool);
impl_type!(char => meta::Type::Char);
impl_type!(i8 => meta::Type::I8);
impl_type!(i16 => meta::Type::I16);
impl_type!(i32 => meta::Type::I32);
impl_type!(i64 => meta::Type::I64);
impl_type!(i128 => meta::Type::I128);
impl_type!(isize => meta::Type::Isize);
impl_type!(u8 => meta::Type::U8);
impl_type!(u16 => meta::Type::U16);
impl_type!(u32 => meta::Type::U32);
impl_type!(u64 => meta::Type::U64);
impl_type!(u128 => meta::Type::U128);
impl_type!(usize => meta::Type::Usize);
impl_type!(f32 => meta::Type::F32);
impl_type!(f64 => meta::Type::F64);
impl_type!(String, str => meta::Type::String);
impl_type!(() => meta::Type::Unit);
