//! Encoder registries.
//!
//! ## Menu
//!
//! - [`Encoders`]: a table from a type to the function encoding it.
//! - [`ModelConfig`]: the configuration of a model type, holding its
//!   type-declared [`Encoders`].
//! - [`builtin_encoders`]: the process-wide table of well-known types.
//!
//! ## Precedence
//!
//! For a value of type `T` the dispatcher asks, in order:
//!
//! 1. the call-scoped table of [`EncodeOptions`](crate::EncodeOptions),
//! 2. the [`ModelConfig`] of each enclosing model, innermost first,
//!    unless a universal `encoder` override is set,
//! 3. the universal `encoder` override, for values that are not JSON
//!    containers,
//! 4. [`builtin_encoders`].
//!
//! Matching is by exact type. An encoder registered for `T` is not used
//! for `Option<T>`, `Box<T>` or a newtype around `T`, but wrappers that
//! encode transparently are unwrapped before their inner value is looked
//! up.

// -----------------------------------------------------------------------------
// Modules

mod builtin;
mod encoders;
mod model_config;

// -----------------------------------------------------------------------------
// Exports

pub use builtin::builtin_encoders;
pub use encoders::{EncoderFn, Encoders};
pub use model_config::ModelConfig;
