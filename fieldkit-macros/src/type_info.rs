use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{ext::IdentExt, Data, DeriveInput, Error, Fields, FieldsNamed, FieldsUnnamed};

use crate::utils::{self, FieldAttrs, TypeAttrs};

/// Main entry point for the TypeInfo derive macro.
pub(crate) fn derive_type_info(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    match derive_type_info_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_type_info_impl(input: DeriveInput) -> Result<TokenStream2, Error> {
    let name = &input.ident;

    // Generated statics can't refer to generic parameters.
    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "TypeInfo derive macro does not support generic types",
        ));
    }

    // Only support structs.
    let fields = match &input.data {
        Data::Struct(data_struct) => &data_struct.fields,
        Data::Enum(_) => {
            return Err(Error::new_spanned(
                input,
                "TypeInfo derive macro only supports structs, not enums",
            ));
        }
        Data::Union(_) => {
            return Err(Error::new_spanned(
                input,
                "TypeInfo derive macro only supports structs, not unions",
            ));
        }
    };

    let attrs = utils::parse_type_attrs(&input.attrs)?;
    let crate_path = attrs
        .crate_path
        .clone()
        .unwrap_or_else(|| quote! { ::fieldkit });

    let (field_statics, field_refs) = generate_field_definitions(name, fields, &crate_path)?;
    let descriptor = generate_descriptor(name, &attrs, &field_refs, &crate_path);
    let interface_assertions = generate_interface_assertions(name, &attrs);
    let name_str = name.unraw().to_string();

    let expanded = quote! {
        impl #crate_path::introspect::TypeInfo for #name {
            fn type_info() -> &'static #crate_path::meta::TypeDescriptor {
                #(#field_statics)*

                #descriptor

                &TYPE_INFO
            }
        }

        impl #crate_path::introspect::Type for #name {
            const TYPE: &'static #crate_path::meta::Type = &#crate_path::meta::Type::Custom(
                ::core::concat!(::core::module_path!(), "::", #name_str)
            );
        }

        #interface_assertions
    };

    Ok(expanded)
}

fn generate_descriptor(
    name: &syn::Ident,
    attrs: &TypeAttrs,
    field_refs: &[TokenStream2],
    crate_path: &TokenStream2,
) -> TokenStream2 {
    let name_str = name.unraw().to_string();
    let methods = attrs.methods.iter().map(|method| method.unraw().to_string());
    let interfaces = attrs.interfaces.iter().map(|path| {
        let path_str = utils::path_name(path);
        quote! { #crate_path::meta::Marker::interface::<dyn #path>(#path_str) }
    });
    let annotations = generate_annotation_markers(&attrs.annotations, crate_path);
    let constructor = if attrs.default {
        quote! {
            {
                fn construct() -> #crate_path::__private::Box<dyn #crate_path::introspect::Reflect> {
                    #crate_path::__private::Box::new(<#name as ::core::default::Default>::default())
                }

                #crate_path::__private::Option::Some(construct)
            }
        }
    } else {
        quote! { #crate_path::__private::Option::None }
    };

    quote! {
        static FIELDS: &[&#crate_path::meta::Field] = &[
            #(#field_refs),*
        ];

        static TYPE_INFO: #crate_path::meta::TypeDescriptor =
            #crate_path::meta::TypeDescriptor::new(
                ::core::concat!(::core::module_path!(), "::", #name_str),
                FIELDS,
                &[#(#methods),*],
                &[#(#interfaces),*],
                &[#(#annotations),*],
                #constructor,
            );
    }
}

/// Assert at compile time that the type implements every interface it claims to.
fn generate_interface_assertions(name: &syn::Ident, attrs: &TypeAttrs) -> TokenStream2 {
    if attrs.interfaces.is_empty() {
        return TokenStream2::new();
    }
    let interfaces = &attrs.interfaces;

    quote! {
        const _: () = {
            fn assert_implements<T: ?Sized #(+ #interfaces)*>() {}
            let _ = assert_implements::<#name>;
        };
    }
}

fn generate_annotation_markers(
    annotations: &[syn::Path],
    crate_path: &TokenStream2,
) -> Vec<TokenStream2> {
    annotations
        .iter()
        .map(|path| {
            let path_str = utils::path_name(path);
            quote! { #crate_path::meta::Marker::annotation::<#path>(#path_str) }
        })
        .collect()
}

/// Generate the field statics and the references listing them in declaration order.
fn generate_field_definitions(
    name: &syn::Ident,
    fields: &Fields,
    crate_path: &TokenStream2,
) -> Result<(Vec<TokenStream2>, Vec<TokenStream2>), Error> {
    match fields {
        Fields::Named(FieldsNamed { named, .. }) => {
            let mut field_statics = Vec::new();
            let mut field_refs = Vec::new();

            for field in named {
                let field_name = field
                    .ident
                    .as_ref()
                    .ok_or_else(|| Error::new_spanned(field, "Field must have a name"))?;
                let attrs = utils::parse_field_attrs(&field.attrs)?;
                let field_name_str = field_name.unraw().to_string();
                let static_name = format_ident!("__FIELD_{}", field_name_str.to_uppercase());
                // Nested items can't refer to the outer `Self`.
                let field_type = utils::replace_self(&field.ty, name);

                let field_static = generate_field_static(
                    name,
                    field,
                    &field_type,
                    field_name,
                    &static_name,
                    &attrs,
                    crate_path,
                );

                field_statics.push(field_static);
                field_refs.push(quote! { &#static_name });
            }

            Ok((field_statics, field_refs))
        }
        Fields::Unnamed(FieldsUnnamed { unnamed, .. }) => Err(Error::new_spanned(
            unnamed,
            "Only named fields are supported",
        )),
        Fields::Unit => {
            // Unit structs have no fields.
            Ok((Vec::new(), Vec::new()))
        }
    }
}

fn generate_field_static(
    name: &syn::Ident,
    field: &syn::Field,
    field_type: &syn::Type,
    field_name: &syn::Ident,
    static_name: &syn::Ident,
    attrs: &FieldAttrs,
    crate_path: &TokenStream2,
) -> TokenStream2 {
    let field_name_str = field_name.unraw().to_string();
    let is_static = attrs.is_static;
    let is_transient = attrs.is_transient;
    let annotations = generate_annotation_markers(&attrs.annotations, crate_path);

    let (ty, visibility, accessors) = if attrs.opaque {
        let type_str = utils::type_name(field_type);
        (
            quote! { &#crate_path::meta::Type::Opaque(#type_str) },
            quote! { #crate_path::meta::Visibility::Opaque },
            quote! { #crate_path::__private::Option::None },
        )
    } else {
        let visibility = match field.vis {
            syn::Visibility::Public(_) => quote! { #crate_path::meta::Visibility::Public },
            _ => quote! { #crate_path::meta::Visibility::Restricted },
        };
        (
            quote! { <#field_type as #crate_path::introspect::Type>::TYPE },
            visibility,
            generate_accessors(name, field_type, field_name, crate_path),
        )
    };

    quote! {
        static #static_name: #crate_path::meta::Field = #crate_path::meta::Field::new(
            #field_name_str,
            #ty,
            &TYPE_INFO,
            #crate_path::meta::Modifiers::new(#is_static, #is_transient),
            #visibility,
            &[#(#annotations),*],
            #accessors,
        );
    }
}

/// Generate the getter and setter of a field.
///
/// The getter clones the value, so field types must implement `Clone`.
fn generate_accessors(
    name: &syn::Ident,
    field_type: &syn::Type,
    field_name: &syn::Ident,
    crate_path: &TokenStream2,
) -> TokenStream2 {
    quote! {
        {
            fn get(
                instance: &dyn #crate_path::__private::Any,
            ) -> #crate_path::__private::Option<#crate_path::meta::Value> {
                let instance = instance.downcast_ref::<#name>()?;

                #crate_path::__private::Option::Some(#crate_path::__private::Box::new(
                    <#field_type as ::core::clone::Clone>::clone(&instance.#field_name),
                ))
            }

            fn set(
                instance: &mut dyn #crate_path::__private::Any,
                value: #crate_path::meta::Value,
            ) -> #crate_path::__private::Result<(), #crate_path::meta::Rejected> {
                let instance = instance
                    .downcast_mut::<#name>()
                    .ok_or(#crate_path::meta::Rejected::Instance)?;
                let value = value
                    .downcast::<#field_type>()
                    .map_err(|_| #crate_path::meta::Rejected::Value)?;
                instance.#field_name = *value;

                #crate_path::__private::Result::Ok(())
            }

            #crate_path::__private::Option::Some(#crate_path::meta::Accessors::new(get, set))
        }
    }
}
