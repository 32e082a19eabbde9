use proc_macro2::TokenStream;
use quote::quote;

use super::EncodeMeta;

/// Unit structs and `#[encode(opaque)]` types.
pub(crate) fn impl_opaque(meta: &EncodeMeta) -> TokenStream {
    meta.impl_encode(&[], quote!(Opaque))
}

/// `#[encode(serde)]` types.
pub(crate) fn impl_serde(meta: &EncodeMeta) -> TokenStream {
    meta.impl_encode(&[], quote!(Serde(self)))
}
