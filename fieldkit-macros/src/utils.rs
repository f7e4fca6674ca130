use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{punctuated::Punctuated, visit_mut::VisitMut, Attribute, Error, Ident, Path, Token};

/// Struct-level `#[reflect(...)]` attributes.
#[derive(Default)]
pub(crate) struct TypeAttrs {
    pub(crate) crate_path: Option<TokenStream2>,
    pub(crate) annotations: Vec<Path>,
    pub(crate) interfaces: Vec<Path>,
    pub(crate) methods: Vec<Ident>,
    pub(crate) default: bool,
}

/// Field-level `#[reflect(...)]` attributes.
#[derive(Default)]
pub(crate) struct FieldAttrs {
    pub(crate) annotations: Vec<Path>,
    pub(crate) is_static: bool,
    pub(crate) is_transient: bool,
    pub(crate) opaque: bool,
}

/// Parse the struct-level attributes.
///
/// The crate path defaults to `::fieldkit` unless `#[reflect(crate = "...")]` is given.
///
/// # Examples
///
/// ```ignore
/// #[derive(TypeInfo)]
/// #[reflect(crate = "crate", annotate(Entity), implements(Serializable))]
/// #[reflect(methods(save, load), default)]
/// struct MyStruct;
/// ```
pub(crate) fn parse_type_attrs(attrs: &[Attribute]) -> Result<TypeAttrs, Error> {
    let mut result = TypeAttrs::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("reflect")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let value = meta.value()?;
                let lit_str: syn::LitStr = value.parse()?;
                let path: Path = lit_str.parse()?;
                result.crate_path = Some(quote! { #path });
            } else if meta.path.is_ident("annotate") {
                result.annotations.extend(parse_paths(&meta)?);
            } else if meta.path.is_ident("implements") {
                result.interfaces.extend(parse_paths(&meta)?);
            } else if meta.path.is_ident("methods") {
                let content;
                syn::parenthesized!(content in meta.input);
                let names = Punctuated::<Ident, Token![,]>::parse_terminated(&content)?;
                result.methods.extend(names);
            } else if meta.path.is_ident("default") {
                result.default = true;
            } else {
                return Err(meta.error("unsupported reflect attribute on type"));
            }
            Ok(())
        })?;
    }

    Ok(result)
}

/// Parse the field-level attributes.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> Result<FieldAttrs, Error> {
    let mut result = FieldAttrs::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("reflect")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("static") {
                result.is_static = true;
            } else if meta.path.is_ident("transient") {
                result.is_transient = true;
            } else if meta.path.is_ident("opaque") {
                result.opaque = true;
            } else if meta.path.is_ident("annotate") {
                result.annotations.extend(parse_paths(&meta)?);
            } else {
                return Err(meta.error("unsupported reflect attribute on field"));
            }
            Ok(())
        })?;
    }

    Ok(result)
}

fn parse_paths(meta: &syn::meta::ParseNestedMeta<'_>) -> Result<Vec<Path>, Error> {
    let content;
    syn::parenthesized!(content in meta.input);
    let paths = Punctuated::<Path, Token![,]>::parse_terminated(&content)?;

    Ok(paths.into_iter().collect())
}

/// Spell a path the way it was written, without the spaces `quote` puts around `::`.
pub(crate) fn path_name(path: &Path) -> String {
    quote!(#path).to_string().replace(' ', "")
}

/// Spell a type close to the way it was written.
pub(crate) fn type_name(ty: &syn::Type) -> String {
    quote!(#ty)
        .to_string()
        .replace(" :: ", "::")
        .replace(" < ", "<")
        .replace(" <", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace("& ", "&")
}

/// Returns `ty` with every `Self` replaced by `name`.
pub(crate) fn replace_self(ty: &syn::Type, name: &Ident) -> syn::Type {
    struct ReplaceSelf<'a>(&'a Ident);

    impl VisitMut for ReplaceSelf<'_> {
        fn visit_ident_mut(&mut self, ident: &mut Ident) {
            if ident == "Self" {
                let mut name = self.0.clone();
                name.set_span(ident.span());
                *ident = name;
            }
        }
    }

    let mut ty = ty.clone();
    ReplaceSelf(name).visit_type_mut(&mut ty);

    ty
}
