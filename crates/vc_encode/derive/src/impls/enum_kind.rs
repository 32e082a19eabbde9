use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{DataEnum, Fields, Lit, LitStr};

use super::EncodeMeta;
use crate::attributes::VariantAttributes;
use crate::path;

/// Enums with unit variants, encoded as the value of the member.
pub(crate) fn impl_enum(meta: &EncodeMeta, data: &DataEnum) -> syn::Result<TokenStream> {
    if let Some(span) = meta.attrs.model {
        return Err(syn::Error::new(span, "an enum cannot be a model"));
    }

    let mut idents = Vec::with_capacity(data.variants.len());
    let mut names = Vec::with_capacity(data.variants.len());
    let mut values = Vec::with_capacity(data.variants.len());

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.fields,
                "only unit variants are supported, use `#[encode(serde)]` for data-carrying enums",
            ));
        }
        let attrs = VariantAttributes::parse_attrs(&variant.attrs)?;
        let name = variant.ident.unraw().to_string();
        let value = attrs
            .value
            .unwrap_or_else(|| Lit::Str(LitStr::new(&name, variant.ident.span())));

        idents.push(&variant.ident);
        names.push(name);
        values.push(value);
    }

    let encode_ = path::encode_(&meta.vc_encode_path);
    let ops_ = path::ops_(&meta.vc_encode_path);

    let encode_tokens = meta.impl_encode(&[], quote!(Enum(self)));
    let member_tokens = meta.impl_block(
        quote!(#ops_::EnumMember),
        &[],
        quote! {
            fn member_name(&self) -> &str {
                match *self {
                    #(Self::#idents => #names,)*
                }
            }

            fn member_value(&self) -> &dyn #encode_ {
                match *self {
                    #(Self::#idents => &#values as &dyn #encode_,)*
                }
            }
        },
    );

    Ok(quote! {
        #encode_tokens
        #member_tokens
    })
}
