use proc_macro2::TokenStream;
use quote::quote;
use syn::{FieldsUnnamed, Index};

use super::EncodeMeta;
use super::record_kind::impl_trait_record;
use crate::path;

/// Single-field tuple structs: transparent, or a custom-root model.
pub(crate) fn impl_newtype(meta: &EncodeMeta, fields: &FieldsUnnamed) -> TokenStream {
    let types = fields.unnamed.iter().map(|field| &field.ty).collect::<Vec<_>>();

    if !meta.is_model() {
        return meta.impl_encode(&types, quote!(Transparent(&self.0)));
    }

    let encode_tokens = meta.impl_encode(&types, quote!(Model(self)));
    let record_tokens = impl_trait_record(meta, &types, &[], &[] as &[Index]);
    let model_tokens = meta.impl_model(&types, Some(quote!(0)));

    quote! {
        #encode_tokens
        #record_tokens
        #model_tokens
    }
}

/// Tuple structs with several fields, encoded as arrays.
pub(crate) fn impl_tuple(meta: &EncodeMeta, fields: &FieldsUnnamed) -> syn::Result<TokenStream> {
    if let Some(span) = meta.attrs.model {
        return Err(syn::Error::new(
            span,
            "a model tuple struct must have exactly one field",
        ));
    }

    let encode_ = path::encode_(&meta.vc_encode_path);
    let ops_ = path::ops_(&meta.vc_encode_path);
    let types = fields.unnamed.iter().map(|field| &field.ty).collect::<Vec<_>>();
    let members = (0..types.len()).map(Index::from).collect::<Vec<_>>();
    let len = types.len();

    let encode_tokens = meta.impl_encode(&types, quote!(Seq(self)));
    let seq_tokens = meta.impl_block(
        quote!(#ops_::Seq),
        &types,
        quote! {
            #[inline]
            fn seq_kind(&self) -> #ops_::SeqKind {
                #ops_::SeqKind::List
            }

            #[inline]
            fn len_hint(&self) -> ::core::option::Option<usize> {
                ::core::option::Option::Some(#len)
            }

            fn visit_items(
                &self,
                visitor: &mut dyn FnMut(&dyn #encode_) -> ::core::ops::ControlFlow<()>,
            ) {
                #(
                    if visitor(&self.#members as &dyn #encode_).is_break() {
                        return;
                    }
                )*
            }
        },
    );

    Ok(quote! {
        #encode_tokens
        #seq_tokens
    })
}
