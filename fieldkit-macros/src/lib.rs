#![deny(
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![warn(unreachable_pub)]
#![doc = include_str!("../README.md")]

use proc_macro::TokenStream;

mod type_info;
mod utils;

/// Derives `TypeInfo` for structs, generating the type's descriptor table.
///
/// The generated descriptor lists all named fields in declaration order, each with its declared
/// type, modifiers, visibility, annotations and a pair of accessor functions. The macro also
/// implements `introspect::Type` for the struct, so that it can itself be used as a field type.
///
/// Non-opaque field types must implement `introspect::Type` and `Clone`.
///
/// # Attributes
///
/// On the struct:
///
/// - `#[reflect(crate = "path")]`: path of the `fieldkit` crate, `::fieldkit` by default.
/// - `#[reflect(annotate(A, ..))]`: attaches the given annotations.
/// - `#[reflect(implements(Trait, ..))]`: records the given interfaces. The struct must implement
///   them and they must be usable as `dyn Trait`.
/// - `#[reflect(methods(name, ..))]`: registers method names.
/// - `#[reflect(default)]`: registers `Default::default` as the default constructor.
///
/// On fields:
///
/// - `#[reflect(static)]`, `#[reflect(transient)]`: modifier flags.
/// - `#[reflect(annotate(A, ..))]`: attaches the given annotations.
/// - `#[reflect(opaque)]`: the field is neither described nor accessible. Its type has no
///   requirements.
///
/// # Limitations
///
/// Tuple structs, enums, unions and generic structs are not supported.
///
/// ```rust,compile_fail
/// # use fieldkit::TypeInfo;
/// #[derive(TypeInfo)]  // This will fail to compile
/// struct Point(f32, f32, f32);
/// ```
///
/// # Examples
///
/// ```rust
/// use fieldkit::{classify, meta::Type, TypeInfo};
///
/// #[derive(TypeInfo)]
/// struct Person {
///     id: i64,
///     name: String,
///     #[reflect(transient)]
///     age: u8,
///     tags: Vec<String>,
/// }
///
/// let info = Person::type_info();
/// assert_eq!(info.fields().len(), 4);
/// assert_eq!(info.fields()[1].name(), "name");
/// assert_eq!(info.fields()[1].ty(), &Type::String);
///
/// let persistent: Vec<_> = classify::persistent_fields(info)
///     .iter()
///     .map(|field| field.name())
///     .collect();
/// assert_eq!(persistent, ["id", "name", "tags"]);
/// ```
#[proc_macro_derive(TypeInfo, attributes(reflect))]
pub fn derive_type_info(input: TokenStream) -> TokenStream {
    type_info::derive_type_info(input)
}
