#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro emits `vc_encode::...` paths, which must also resolve
// inside this crate and its doc tests.
extern crate self as vc_encode;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod encode;
mod error;
mod json;
mod select;

pub mod format;
pub mod impls;
pub mod ops;
pub mod registry;
pub mod serde;
pub mod types;

// -----------------------------------------------------------------------------
// Top-Level exports

/// Items used by the code generated by `#[derive(Encode)]`.
#[doc(hidden)]
pub mod __macro_exports {
    pub use std::sync::LazyLock;
}

pub use encode::{AsEncode, Encode, short_type_name};
pub use error::{EncodeError, Loc, LocItem};
pub use json::{
    EncodeOptions, ToJson, custom_encoder, default_encoder, to_string, to_string_with, to_value,
    to_value_with,
};
pub use select::Selection;
pub use serde::SerializeDriver;
pub use vc_encode_derive as derive;

#[cfg(test)]
mod tests;
