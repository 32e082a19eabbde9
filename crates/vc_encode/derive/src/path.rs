//! Paths into `vc_encode` used by the generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the correct access path to the `vc_encode` crate.
///
/// 1. For crates that depend on `vc_encode`, `::vc_encode` is returned.
/// 2. For crates that depend on `vc_json`, `::vc_json::encode` is returned.
/// 3. For other situations, `::vc_encode` is returned, but this may be incorrect.
///
/// Reading the manifest is not free, so the path is resolved once per
/// derive and passed around.
pub(crate) fn vc_encode() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_encode"))
}

#[inline(always)]
pub(crate) fn encode_(vc_encode_path: &syn::Path) -> TokenStream {
    quote! { #vc_encode_path::Encode }
}

#[inline(always)]
pub(crate) fn encode_ref_(vc_encode_path: &syn::Path) -> TokenStream {
    quote! { #vc_encode_path::ops::EncodeRef }
}

#[inline(always)]
pub(crate) fn ops_(vc_encode_path: &syn::Path) -> TokenStream {
    quote! { #vc_encode_path::ops }
}

#[inline(always)]
pub(crate) fn model_config_(vc_encode_path: &syn::Path) -> TokenStream {
    quote! { #vc_encode_path::registry::ModelConfig }
}

#[inline(always)]
pub(crate) fn lazy_lock_(vc_encode_path: &syn::Path) -> TokenStream {
    quote! { #vc_encode_path::__macro_exports::LazyLock }
}
