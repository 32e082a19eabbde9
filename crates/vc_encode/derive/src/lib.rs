//! See [`Encode`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static ENCODE_ATTRIBUTE_NAME: &str = "encode";

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Derive `Encode`
///
/// The implemented traits depend on the shape of the type:
///
/// | Shape                         | Traits                     | JSON form            |
/// |-------------------------------|----------------------------|----------------------|
/// | `struct T { .. }`             | `Encode`, `Record`         | object               |
/// | `struct T { .. }` + `model`   | `Encode`, `Record`, `Model`| object               |
/// | `struct T(U);`                | `Encode`                   | the inner value      |
/// | `struct T(U);` + `model`      | `Encode`, `Record`, `Model`| the root value       |
/// | `struct T(U, V, ..);`         | `Encode`, `Seq`            | array                |
/// | `struct T;`, or `opaque`      | `Encode`                   | registered encoders  |
/// | `serde`                       | `Encode`                   | `serde::Serialize`   |
/// | `enum T { A, B }`             | `Encode`, `EnumMember`     | the member value     |
///
/// ## Type Attributes
///
/// ```rust, ignore
/// #[derive(Encode)]
/// #[encode(model, config = my_config)]
/// struct Foo { /* ... */ }
///
/// fn my_config() -> ModelConfig { /* ... */ }
/// ```
///
/// - `model`: the type is a model. Its configuration applies to the
///   values found inside it.
/// - `config = path`: a `fn() -> ModelConfig`, called once. Implies `model`.
/// - `opaque`: the type exposes no structure.
/// - `serde`: the type is encoded through its `serde::Serialize` impl.
///
/// ## Field Attributes
///
/// - `skip`: the field is never emitted.
/// - `rename = "name"`: the emitted name of the field.
///
/// ## Variant Attributes
///
/// Only enums with unit variants are supported.
///
/// - `value = <literal>`: the value of the member. Defaults to the
///   variant name.
///
/// ```rust, ignore
/// #[derive(Encode)]
/// enum MyEnum {
///     #[encode(value = "bar")]
///     Foo,
///     #[encode(value = 2)]
///     Snap,
/// }
/// ```
#[proc_macro_derive(Encode, attributes(encode))]
pub fn derive_encode(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match impls::match_encode_impls(&ast) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
