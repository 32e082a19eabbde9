//! The dispatcher, as a [`serde::Serialize`] driver.
//!
//! [`SerializeDriver`] walks an [`Encode`](crate::Encode) value and hands
//! every part of it to a serde [`Serializer`](serde_core::Serializer).
//! [`to_value`](crate::to_value) and [`to_string`](crate::to_string) are
//! thin wrappers over it with `serde_json`.
//!
//! [`serde::Serialize`]: serde_core::Serialize

// -----------------------------------------------------------------------------
// Modules

mod driver;
mod map_serializer;
mod record_serializer;
mod seq_serializer;
mod state;

// -----------------------------------------------------------------------------
// Exports

pub use driver::SerializeDriver;
