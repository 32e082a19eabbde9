//! Capability traits the dispatcher walks, and dynamic containers.
//!
//! ## Menu
//!
//! ### Interface
//!
//! The following are subtraits of [`Encode`], each describing one shape:
//!
//! - [`Record`]: named fields in declaration order (e.g. `A { .. }`).
//! - [`Model`]: a [`Record`] carrying a [`ModelConfig`].
//! - [`Map`]: key/value entries (e.g. `HashMap<String, f32>`).
//! - [`Seq`]: elements of a list, a set or a one-shot iterator.
//! - [`EnumMember`]: an enum member standing for an associated value.
//!
//! ### Dynamic Type
//!
//! - [`DynamicRecord`]: fields added at runtime, optionally with a
//!   [`ModelConfig`].
//! - [`DynamicMap`]: entries added at runtime, kept in insertion order.
//!
//! [`Encode`]: crate::Encode
//! [`ModelConfig`]: crate::registry::ModelConfig

// -----------------------------------------------------------------------------
// Modules

mod enum_ops;
mod kind;
mod map_ops;
mod model_ops;
mod record_ops;
mod seq_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{EncodeKind, EncodeRef};

pub use enum_ops::EnumMember;
pub use map_ops::{DynamicMap, Map};
pub use model_ops::Model;
pub use record_ops::{DynamicRecord, Record, RecordFieldIter};
pub use seq_ops::{Seq, SeqKind};
