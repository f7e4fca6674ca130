//! Element types of collection fields.

use crate::{
    meta::{Collection, Field, Type},
    Error, Result,
};

/// The collection shapes [`element_type`] accepts.
///
/// Shapes are matched exactly: wrappers such as `Option<Vec<T>>` or `Arc<Vec<T>>` and the
/// set, map and slice shapes are not recognized.
pub const RECOGNIZED: &[Collection] = &[
    Collection::Vec,
    Collection::VecDeque,
    Collection::LinkedList,
];

/// Whether `ty` is one of the [`RECOGNIZED`] collection shapes.
pub fn is_collection(ty: &Type) -> bool {
    matches!(ty, Type::Collection(kind, _) if RECOGNIZED.contains(kind))
}

/// Returns the type of the elements of a collection field.
///
/// Fails with [`Error::NotCollection`] if the field is not declared as one of the
/// [`RECOGNIZED`] collection shapes.
pub fn element_type(field: &Field) -> Result<&'static Type> {
    match field.ty() {
        Type::Collection(kind, element) if RECOGNIZED.contains(kind) => Ok(*element),
        _ => Err(Error::NotCollection {
            field: field.name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        introspect::{self, TypeInfo},
        test_utils::{Defaults, Modified},
    };
    use alloc::{
        collections::{BTreeSet, LinkedList, VecDeque},
        string::String,
        sync::Arc,
        vec::Vec,
    };

    #[test]
    fn element_type_of_string_list() {
        let field = Modified::type_info().field("tags").unwrap();
        assert_eq!(element_type(field).unwrap(), &Type::String);
        assert_eq!(element_type(field).unwrap(), Type::of::<String>());
    }

    #[test]
    fn element_type_of_byte_list() {
        let field = Defaults::type_info().field("byte_field").unwrap();
        assert_eq!(element_type(field).unwrap(), &Type::U8);
    }

    #[test]
    fn not_a_collection() {
        let field = Modified::type_info().field("plain").unwrap();
        let err = element_type(field).unwrap_err();
        assert_eq!(err, Error::NotCollection { field: "plain" });
        assert!(err.is_invalid_argument());

        let field = Defaults::type_info().field("long_field").unwrap();
        assert!(element_type(field).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn recognized_shapes() {
        assert!(is_collection(<Vec<i32> as introspect::Type>::TYPE));
        assert!(is_collection(<VecDeque<i32> as introspect::Type>::TYPE));
        assert!(is_collection(<LinkedList<i32> as introspect::Type>::TYPE));
    }

    #[test]
    fn unrecognized_shapes() {
        assert!(!is_collection(<BTreeSet<i32> as introspect::Type>::TYPE));
        assert!(!is_collection(<&[i32] as introspect::Type>::TYPE));
        assert!(!is_collection(<[i32; 2] as introspect::Type>::TYPE));
        assert!(!is_collection(<Option<Vec<i32>> as introspect::Type>::TYPE));
        assert!(!is_collection(<Arc<Vec<i32>> as introspect::Type>::TYPE));
        assert!(!is_collection(<String as introspect::Type>::TYPE));
    }

    #[cfg(feature = "std")]
    #[test]
    fn sets_and_maps_are_not_collections() {
        use std::collections::{HashMap, HashSet};

        assert!(!is_collection(<HashSet<i32> as introspect::Type>::TYPE));
        assert!(!is_collection(<HashMap<String, i32> as introspect::Type>::TYPE));
    }
}
