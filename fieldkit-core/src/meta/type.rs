//! Declared type shapes of fields.

use core::fmt;

use serde::Serialize;

/// The declared type of a field.
///
/// Type arguments are recorded in the generated descriptor table, so generic shapes such as
/// `Vec<String>` carry their element type directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    /// `bool`.
    Bool,
    /// `char`.
    Char,
    /// `i8`.
    I8,
    /// `i16`.
    I16,
    /// `i32`.
    I32,
    /// `i64`.
    I64,
    /// `i128`.
    I128,
    /// `isize`.
    Isize,
    /// `u8`.
    U8,
    /// `u16`.
    U16,
    /// `u32`.
    U32,
    /// `u64`.
    U64,
    /// `u128`.
    U128,
    /// `usize`.
    Usize,
    /// `f32`.
    F32,
    /// `f64`.
    F64,
    /// UTF-8 string, owned or borrowed.
    String,
    /// `()`.
    Unit,
    /// Optional/nullable type.
    Optional(&'static Type),
    /// Single-argument generic container.
    Collection(Collection, &'static Type),
    /// Fixed-size array.
    Array(&'static Type, usize),
    /// Key-value map.
    Map(&'static Type, &'static Type),
    /// Reference-counted shared value (`Arc`, `Rc`).
    Shared(&'static Type),
    /// Another described type, identified by its full path.
    Custom(&'static str),
    /// A type the descriptor table does not describe, carrying its source spelling.
    Opaque(&'static str),
}

/// The container shapes [`Type::Collection`] distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// `Vec<T>`.
    Vec,
    /// `VecDeque<T>`.
    VecDeque,
    /// `LinkedList<T>`.
    LinkedList,
    /// `HashSet<T>`.
    HashSet,
    /// `BTreeSet<T>`.
    BTreeSet,
    /// `[T]`.
    Slice,
}

impl Type {
    /// The type of `T`.
    pub const fn of<T: crate::introspect::Type + ?Sized>() -> &'static Type {
        T::TYPE
    }

    /// Returns the type arguments, in declaration order.
    ///
    /// Non-generic shapes have none.
    pub fn type_arguments(&self) -> alloc::vec::Vec<&'static Type> {
        match *self {
            Type::Optional(inner) | Type::Shared(inner) | Type::Array(inner, _) => {
                alloc::vec![inner]
            }
            Type::Collection(_, element) => alloc::vec![element],
            Type::Map(key, value) => alloc::vec![key, value],
            _ => alloc::vec::Vec::new(),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Bool => write!(f, "bool"),
            Type::Char => write!(f, "char"),
            Type::I8 => write!(f, "i8"),
            Type::I16 => write!(f, "i16"),
            Type::I32 => write!(f, "i32"),
            Type::I64 => write!(f, "i64"),
            Type::I128 => write!(f, "i128"),
            Type::Isize => write!(f, "isize"),
            Type::U8 => write!(f, "u8"),
            Type::U16 => write!(f, "u16"),
            Type::U32 => write!(f, "u32"),
            Type::U64 => write!(f, "u64"),
            Type::U128 => write!(f, "u128"),
            Type::Usize => write!(f, "usize"),
            Type::F32 => write!(f, "f32"),
            Type::F64 => write!(f, "f64"),
            Type::String => write!(f, "String"),
            Type::Unit => write!(f, "()"),
            Type::Optional(inner) => write!(f, "Option<{inner}>"),
            Type::Collection(Collection::Slice, element) => write!(f, "[{element}]"),
            Type::Collection(kind, element) => write!(f, "{kind}<{element}>"),
            Type::Array(element, len) => write!(f, "[{element}; {len}]"),
            Type::Map(key, value) => write!(f, "Map<{key}, {value}>"),
            Type::Shared(inner) => write!(f, "Shared<{inner}>"),
            Type::Custom(name) | Type::Opaque(name) => write!(f, "{name}"),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Collection::Vec => "Vec",
            Collection::VecDeque => "VecDeque",
            Collection::LinkedList => "LinkedList",
            Collection::HashSet => "HashSet",
            Collection::BTreeSet => "BTreeSet",
            Collection::Slice => "Slice",
        };
        f.write_str(name)
    }
}

impl Serialize for Type {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn type_names() {
        assert_eq!(Type::Bool.to_string(), "bool");
        assert_eq!(Type::I64.to_string(), "i64");
        assert_eq!(Type::String.to_string(), "String");
        assert_eq!(Type::Unit.to_string(), "()");
    }

    #[test]
    fn complex_type_names() {
        const STRING: Type = Type::String;
        const INT: Type = Type::I32;

        assert_eq!(Type::Optional(&INT).to_string(), "Option<i32>");
        assert_eq!(
            Type::Collection(Collection::Vec, &STRING).to_string(),
            "Vec<String>"
        );
        assert_eq!(
            Type::Collection(Collection::Slice, &INT).to_string(),
            "[i32]"
        );
        assert_eq!(Type::Array(&INT, 4).to_string(), "[i32; 4]");
        assert_eq!(Type::Map(&STRING, &INT).to_string(), "Map<String, i32>");

        const LIST: Type = Type::Collection(Collection::Vec, &STRING);
        assert_eq!(Type::Optional(&LIST).to_string(), "Option<Vec<String>>");
    }

    #[test]
    fn type_arguments() {
        const STRING: Type = Type::String;
        const INT: Type = Type::I32;

        assert!(Type::String.type_arguments().is_empty());
        assert_eq!(
            Type::Collection(Collection::HashSet, &INT).type_arguments(),
            [&INT]
        );
        assert_eq!(Type::Map(&STRING, &INT).type_arguments(), [&STRING, &INT]);
    }

    #[test]
    fn type_serialization() {
        const INT: Type = Type::I64;
        let ty = Type::Collection(Collection::VecDeque, &INT);
        let json = serde_json::to_string(&ty).unwrap();
        assert_eq!(json, r#""VecDeque<i64>""#);
    }
}
