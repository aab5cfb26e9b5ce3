//! Implementation of the `#[derive(Enumeration)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Ident, parse_macro_input};

/// Main implementation of the Enumeration derive macro.
pub fn derive_enumeration_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input).unwrap_or_else(syn::Error::into_compile_error))
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let variants = unit_variants(input)?;
    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();
    let ordinals = 0..variants.len();

    Ok(quote! {
        impl #impl_generics ::frozen::immutable::Enumeration for #name #type_generics #where_clause {
            const VARIANTS: &'static [Self] = &[#(Self::#variants),*];

            #[inline]
            fn ordinal(self) -> usize {
                match self {
                    #(Self::#variants => #ordinals,)*
                }
            }
        }
    })
}

/// Returns the variant names in declaration order, rejecting anything that
/// is not a field-less enum.
fn unit_variants(input: &DeriveInput) -> syn::Result<Vec<&Ident>> {
    match &input.data {
        Data::Enum(data_enum) => data_enum
            .variants
            .iter()
            .map(|variant| match variant.fields {
                Fields::Unit => Ok(&variant.ident),
                _ => Err(syn::Error::new_spanned(
                    variant,
                    "Enumeration can only be derived for enums whose variants have no fields",
                )),
            })
            .collect(),
        Data::Struct(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "Enumeration can only be derived for enums, not structs.",
        )),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "Enumeration cannot be derived for unions.",
        )),
    }
}
