//! Code generation, one module per shape.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Type, WhereClause, parse_quote};

use crate::attributes::TypeAttributes;
use crate::path;

// -----------------------------------------------------------------------------
// Modules

mod enum_kind;
mod opaque_kind;
mod record_kind;
mod tuple_kind;

// -----------------------------------------------------------------------------
// EncodeMeta

/// What every generated impl needs to know about the input type.
pub(crate) struct EncodeMeta<'a> {
    pub ast: &'a DeriveInput,
    pub attrs: TypeAttributes,
    pub vc_encode_path: syn::Path,
}

impl EncodeMeta<'_> {
    #[inline]
    pub fn is_model(&self) -> bool {
        self.attrs.model.is_some()
    }

    /// The where clause of the input, with `T: 'static` for every type
    /// parameter and `F: Encode` for every encoded field type.
    ///
    /// Field bounds are only added to generic types.
    fn where_clause(&self, field_types: &[&Type]) -> Option<WhereClause> {
        let generics = &self.ast.generics;
        if generics.type_params().next().is_none() {
            return generics.where_clause.clone();
        }

        let encode_ = path::encode_(&self.vc_encode_path);
        let mut where_clause = generics
            .where_clause
            .clone()
            .unwrap_or_else(|| parse_quote!(where));
        for param in generics.type_params() {
            let ident = &param.ident;
            where_clause.predicates.push(parse_quote!(#ident: 'static));
        }
        for ty in field_types {
            where_clause.predicates.push(parse_quote!(#ty: #encode_));
        }
        Some(where_clause)
    }

    /// `impl<..> #trait_ for Type<..> where .. { #body }`
    pub fn impl_block(&self, trait_: TokenStream, field_types: &[&Type], body: TokenStream) -> TokenStream {
        let ident = &self.ast.ident;
        let (impl_generics, ty_generics, _) = self.ast.generics.split_for_impl();
        let where_clause = self.where_clause(field_types);

        quote! {
            impl #impl_generics #trait_ for #ident #ty_generics #where_clause {
                #body
            }
        }
    }

    /// `impl Encode` returning `EncodeRef::#kind(#target)`.
    pub fn impl_encode(&self, field_types: &[&Type], kind: TokenStream) -> TokenStream {
        let encode_ = path::encode_(&self.vc_encode_path);
        let encode_ref_ = path::encode_ref_(&self.vc_encode_path);

        self.impl_block(
            encode_,
            field_types,
            quote! {
                #[inline]
                fn encode_ref(&self) -> #encode_ref_<'_> {
                    #encode_ref_::#kind
                }
            },
        )
    }

    /// `impl Model`, with the configuration and custom root when given.
    pub fn impl_model(&self, field_types: &[&Type], custom_root: Option<TokenStream>) -> TokenStream {
        let vc_encode_path = &self.vc_encode_path;
        let encode_ = path::encode_(vc_encode_path);
        let ops_ = path::ops_(vc_encode_path);
        let model_config_ = path::model_config_(vc_encode_path);
        let lazy_lock_ = path::lazy_lock_(vc_encode_path);

        let config_tokens = self.attrs.config.as_ref().map(|config| {
            quote! {
                fn model_config(&self) -> &#model_config_ {
                    static CONFIG: #lazy_lock_<#model_config_> = #lazy_lock_::new(#config);
                    &CONFIG
                }
            }
        });

        let root_tokens = custom_root.map(|member| {
            quote! {
                #[inline]
                fn custom_root(&self) -> ::core::option::Option<&dyn #encode_> {
                    ::core::option::Option::Some(&self.#member as &dyn #encode_)
                }
            }
        });

        self.impl_block(
            quote!(#ops_::Model),
            field_types,
            quote! {
                #config_tokens
                #root_tokens
            },
        )
    }
}

// -----------------------------------------------------------------------------
// Entry

pub(crate) fn match_encode_impls(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let meta = EncodeMeta {
        ast,
        attrs: TypeAttributes::parse_attrs(&ast.attrs)?,
        vc_encode_path: path::vc_encode(),
    };

    let impls = if meta.attrs.opaque.is_some() {
        opaque_kind::impl_opaque(&meta)
    } else if meta.attrs.serde.is_some() {
        opaque_kind::impl_serde(&meta)
    } else {
        match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => record_kind::impl_record(&meta, fields)?,
                Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                    tuple_kind::impl_newtype(&meta, fields)
                }
                Fields::Unnamed(fields) => tuple_kind::impl_tuple(&meta, fields)?,
                Fields::Unit => {
                    if let Some(span) = meta.attrs.model {
                        return Err(syn::Error::new(span, "a unit struct cannot be a model"));
                    }
                    opaque_kind::impl_opaque(&meta)
                }
            },
            Data::Enum(data) => enum_kind::impl_enum(&meta, data)?,
            Data::Union(_) => {
                return Err(syn::Error::new_spanned(
                    &ast.ident,
                    "`Encode` cannot be derived for unions",
                ));
            }
        }
    };

    Ok(quote! {
        const _: () = {
            #impls
        };
    })
}
