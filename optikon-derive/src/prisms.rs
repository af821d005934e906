//! Implementation of the `#[derive(Prisms)]` macro.
//!
//! Each unit or single-field tuple variant gets a `{variant}_prism()`
//! constructor returning a `FunctionPrism`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Variant, parse_macro_input};

/// Main implementation of the Prisms derive macro.
pub fn derive_prisms_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Enum(data_enum) => generate_enum_prisms(
            name,
            generics,
            &data_enum.variants.iter().collect::<Vec<_>>(),
        ),
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "Prisms can only be derived for enums, not structs. Use #[derive(Lenses)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Prisms cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Generates prism methods for an enum's variants.
fn generate_enum_prisms(name: &Ident, generics: &Generics, variants: &[&Variant]) -> TokenStream2 {
    let prism_methods: syn::Result<Vec<TokenStream2>> = variants
        .iter()
        .map(|variant| generate_variant_prism(variant))
        .collect();

    match prism_methods {
        Ok(prism_methods) => {
            let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

            quote! {
                impl #impl_generics #name #type_generics #where_clause {
                    #(#prism_methods)*
                }
            }
        }
        Err(error) => error.to_compile_error(),
    }
}

/// Generates a prism method for a single enum variant.
fn generate_variant_prism(variant: &Variant) -> syn::Result<TokenStream2> {
    let variant_name = &variant.ident;
    let method_name = format_ident!("{}_prism", to_snake_case(&variant_name.to_string()));

    match &variant.fields {
        Fields::Unit => Ok(generate_unit_variant_prism(variant_name, &method_name)),
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            let field_type = &fields.unnamed[0].ty;
            Ok(generate_single_field_tuple_prism(
                variant_name,
                &method_name,
                field_type,
            ))
        }
        Fields::Unnamed(_) | Fields::Named(_) => Err(syn::Error::new_spanned(
            variant,
            "Prisms can only be derived for unit variants and single-field tuple variants. \
             Wrap the fields in a struct and use a single-field variant instead.",
        )),
    }
}

/// Generates a prism for a unit variant. The focused type is `()`.
fn generate_unit_variant_prism(variant_name: &Ident, method_name: &Ident) -> TokenStream2 {
    let documentation = format!(
        "Returns a prism focusing on the `{variant_name}` variant.\n\nThe target type is `()`."
    );

    quote! {
        #[doc = #documentation]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::optikon::optics::Prism<Self, ()> + Clone {
            ::optikon::optics::FunctionPrism::new(
                |source: &Self| match source {
                    Self::#variant_name => Some(&()),
                    #[allow(unreachable_patterns)]
                    _ => None,
                },
                |(): ()| Self::#variant_name,
                |source: Self| match source {
                    Self::#variant_name => Some(()),
                    #[allow(unreachable_patterns)]
                    _ => None,
                },
            )
        }
    }
}

/// Generates a prism for a tuple variant with a single field.
fn generate_single_field_tuple_prism(
    variant_name: &Ident,
    method_name: &Ident,
    field_type: &syn::Type,
) -> TokenStream2 {
    let documentation = format!("Returns a prism focusing on the `{variant_name}` variant.");

    quote! {
        #[doc = #documentation]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::optikon::optics::Prism<Self, #field_type> + Clone {
            ::optikon::optics::FunctionPrism::new(
                |source: &Self| match source {
                    Self::#variant_name(value) => Some(value),
                    #[allow(unreachable_patterns)]
                    _ => None,
                },
                |value: #field_type| Self::#variant_name(value),
                |source: Self| match source {
                    Self::#variant_name(value) => Some(value),
                    #[allow(unreachable_patterns)]
                    _ => None,
                },
            )
        }
    }
}

/// Converts a `CamelCase` or `PascalCase` string to `snake_case`.
fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let chars: Vec<char> = input.chars().collect();

    for (index, &character) in chars.iter().enumerate() {
        if character.is_uppercase() {
            if let Some(&previous_char) = index.checked_sub(1).and_then(|i| chars.get(i)) {
                let next_is_lowercase = chars.get(index + 1).is_some_and(|c| c.is_lowercase());

                // "keyPress" -> "key_press", "XMLParser" -> "xml_parser"
                if previous_char.is_lowercase()
                    || (previous_char.is_uppercase() && next_is_lowercase)
                {
                    result.push('_');
                }
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}
