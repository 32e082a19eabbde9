//! Domain types with a built-in JSON form.
//!
//! - [`Color`]: CSS name or hex string.
//! - [`SecretStr`], [`SecretBytes`]: a fixed mask.
//! - [`Bytes`]: UTF-8 text.
//! - [`FilePath`], [`DirectoryPath`]: the path text.
//! - [`IterOnce`]: an array, once.

// -----------------------------------------------------------------------------
// Modules

mod bytes;
mod color;
mod color_names;
mod iter_once;
mod path;
mod secret;

// -----------------------------------------------------------------------------
// Exports

pub use bytes::Bytes;
pub use color::{Color, ColorError};
pub use iter_once::IterOnce;
pub use path::{DirectoryPath, FilePath, PathError};
pub use secret::{SecretBytes, SecretStr};
