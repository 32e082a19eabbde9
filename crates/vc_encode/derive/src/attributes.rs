//! Parsing of `#[encode(...)]` attributes.

use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, Lit, LitStr, Path};

use crate::ENCODE_ATTRIBUTE_NAME;

/// Calls `f` for every item of every `#[encode(...)]` attribute.
fn for_each_meta(
    attrs: &[Attribute],
    mut f: impl FnMut(syn::meta::ParseNestedMeta) -> syn::Result<()>,
) -> syn::Result<()> {
    for attr in attrs {
        if attr.path().is_ident(ENCODE_ATTRIBUTE_NAME) {
            attr.parse_nested_meta(&mut f)?;
        }
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// TypeAttributes

#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `model`, or implied by `config`.
    pub model: Option<Span>,
    pub config: Option<Path>,
    pub opaque: Option<Span>,
    pub serde: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();

        for_each_meta(attrs, |meta| {
            let span = meta.path.span();
            if meta.path.is_ident("model") {
                out.model = Some(span);
            } else if meta.path.is_ident("config") {
                out.config = Some(meta.value()?.parse()?);
                out.model.get_or_insert(span);
            } else if meta.path.is_ident("opaque") {
                out.opaque = Some(span);
            } else if meta.path.is_ident("serde") {
                out.serde = Some(span);
            } else {
                return Err(meta.error("expected `model`, `config`, `opaque` or `serde`"));
            }
            Ok(())
        })?;

        if let (Some(_), Some(span)) = (out.opaque, out.serde) {
            return Err(syn::Error::new(span, "`opaque` and `serde` are exclusive"));
        }
        if let Some(span) = out.model
            && (out.opaque.is_some() || out.serde.is_some())
        {
            return Err(syn::Error::new(
                span,
                "`model` cannot be combined with `opaque` or `serde`",
            ));
        }

        Ok(out)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub skip: bool,
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();

        for_each_meta(attrs, |meta| {
            if meta.path.is_ident("skip") {
                out.skip = true;
            } else if meta.path.is_ident("rename") {
                out.rename = Some(meta.value()?.parse()?);
            } else {
                return Err(meta.error("expected `skip` or `rename`"));
            }
            Ok(())
        })?;

        Ok(out)
    }
}

// -----------------------------------------------------------------------------
// VariantAttributes

#[derive(Default)]
pub(crate) struct VariantAttributes {
    pub value: Option<Lit>,
}

impl VariantAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();

        for_each_meta(attrs, |meta| {
            if meta.path.is_ident("value") {
                out.value = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `value`"))
            }
        })?;

        Ok(out)
    }
}
