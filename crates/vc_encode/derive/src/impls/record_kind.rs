use proc_macro2::TokenStream;
use quote::quote;
use syn::FieldsNamed;
use syn::ext::IdentExt;

use super::EncodeMeta;
use crate::attributes::FieldAttributes;
use crate::path;

/// Structs with named fields: a record, or a model.
pub(crate) fn impl_record(meta: &EncodeMeta, fields: &FieldsNamed) -> syn::Result<TokenStream> {
    let mut names = Vec::with_capacity(fields.named.len());
    let mut members = Vec::with_capacity(fields.named.len());
    let mut types = Vec::with_capacity(fields.named.len());

    for field in &fields.named {
        let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        let Some(ident) = &field.ident else {
            continue;
        };
        let name = match attrs.rename {
            Some(lit) => lit.value(),
            None => ident.unraw().to_string(),
        };
        names.push(name);
        members.push(ident);
        types.push(&field.ty);
    }

    let kind = if meta.is_model() {
        quote!(Model(self))
    } else {
        quote!(Record(self))
    };
    let encode_tokens = meta.impl_encode(&types, kind);
    let record_tokens = impl_trait_record(meta, &types, &names, &members);
    let model_tokens = if meta.is_model() {
        meta.impl_model(&types, None)
    } else {
        TokenStream::new()
    };

    Ok(quote! {
        #encode_tokens
        #record_tokens
        #model_tokens
    })
}

/// `impl Record`, also used by custom-root models with no fields.
pub(super) fn impl_trait_record(
    meta: &EncodeMeta,
    types: &[&syn::Type],
    names: &[String],
    members: &[impl quote::ToTokens],
) -> TokenStream {
    let encode_ = path::encode_(&meta.vc_encode_path);
    let ops_ = path::ops_(&meta.vc_encode_path);
    let field_len = names.len();
    let indices = (0..field_len).collect::<Vec<_>>();

    meta.impl_block(
        quote!(#ops_::Record),
        types,
        quote! {
            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }

            fn name_at(&self, index: usize) -> ::core::option::Option<&str> {
                match index {
                    #(#indices => ::core::option::Option::Some(#names),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #encode_> {
                match index {
                    #(#indices => ::core::option::Option::Some(&self.#members as &dyn #encode_),)*
                    _ => ::core::option::Option::None,
                }
            }
        },
    )
}
