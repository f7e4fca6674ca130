//! Type implementations for collection types.

use crate::{introspect::Type, meta};
use alloc::{
    collections::{BTreeMap, BTreeSet, LinkedList, VecDeque},
    vec::Vec,
};
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

// ============================================================================
// Sequences
// ============================================================================

impl_collection_type!(
    Vec<T> => Vec,
    VecDeque<T> => VecDeque,
    LinkedList<T> => LinkedList,
);

impl<T: Type> Type for [T] {
    const TYPE: &'static meta::Type = &meta::Type::Collection(meta::Collection::Slice, T::TYPE);
}

impl<T: Type, const N: usize> Type for [T; N] {
    const TYPE: &'static meta::Type = &meta::Type::Array(T::TYPE, N);
}

// ============================================================================
// Sets
// ============================================================================

impl_collection_type!(BTreeSet<T> => BTreeSet);

#[cfg(feature = "std")]
impl<T: Type, S> Type for HashSet<T, S> {
    const TYPE: &'static meta::Type = &meta::Type::Collection(meta::Collection::HashSet, T::TYPE);
}

// ============================================================================
// Maps
// ============================================================================

impl<K: Type, V: Type> Type for BTreeMap<K, V> {
    const TYPE: &'static meta::Type = &meta::Type::Map(K::TYPE, V::TYPE);
}

#[cfg(feature = "std")]
impl<K: Type, V: Type, S> Type for HashMap<K, V, S> {
    const TYPE: &'static meta::Type = &meta::Type::Map(K::TYPE, V::TYPE);
}
