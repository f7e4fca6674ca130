//! Described types shared by the unit tests.

#![allow(unreachable_pub, dead_code)]

use alloc::{string::String, sync::Arc, vec::Vec};
use core::cell::Cell;

use crate::{introspect::TypeInfo, meta::Annotation};

pub(crate) struct Entity;
impl Annotation for Entity {}

pub(crate) struct Version;
impl Annotation for Version {}

pub(crate) struct Id;
impl Annotation for Id {}

pub(crate) trait Serializable {}

#[derive(Debug, Default, TypeInfo)]
#[reflect(crate = "crate", annotate(Entity), implements(Serializable), default)]
#[reflect(methods(touch))]
pub(crate) struct Record {
    #[reflect(annotate(Id))]
    pub(crate) id: i64,
    #[reflect(static)]
    pub(crate) name: String,
    #[reflect(transient)]
    pub(crate) note: String,
}

impl Serializable for Record {}

impl Record {
    #[allow(dead_code)]
    pub(crate) fn touch(&mut self) {
        self.id += 1;
    }
}

#[derive(Debug, TypeInfo)]
#[reflect(crate = "crate")]
pub(crate) struct Modified {
    pub id: i64,
    #[reflect(static)]
    pub shared_name: String,
    pub plain: String,
    #[reflect(transient)]
    pub note: String,
    #[reflect(static, transient)]
    pub both: String,
    pub tags: Vec<String>,
}

#[derive(Debug, TypeInfo)]
#[reflect(crate = "crate")]
pub(crate) struct Empty;

/// Fields of every common shape, some of them restricted.
#[derive(Debug, Default, Clone, TypeInfo)]
#[reflect(crate = "crate", default)]
pub(crate) struct Defaults {
    string_field: String,
    pub integer_field: i32,
    pub long_field: Option<i64>,
    pub boolean_field: bool,
    pub shared_field: Arc<String>,
    pub byte_field: Vec<u8>,
    #[reflect(opaque)]
    pub cache: Cell<u32>,
}

impl Defaults {
    pub(crate) fn string_field(&self) -> &str {
        &self.string_field
    }

    pub(crate) fn set_string_field(&mut self, value: &str) {
        self.string_field = String::from(value);
    }
}

#[derive(Debug, Default, TypeInfo)]
#[reflect(crate = "crate")]
pub(crate) struct Other {
    pub string_field: String,
}

/// Serializes tests raising the accessibility flags of the shared fixtures.
pub(crate) fn serial() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    LOCK.lock().unwrap_or_else(|e| e.into_inner())
}
