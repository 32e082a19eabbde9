use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Loc

/// One step from a parent value to a child value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocItem {
    /// A record or model field.
    Field(String),
    /// A mapping key, as emitted in the output.
    Key(String),
    /// A sequence position.
    Index(usize),
}

impl fmt::Display for LocItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) | Self::Key(name) => f.write_str(name),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// The path from the top-level value to the value that failed.
///
/// Displayed as `d -> items -> 0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Loc(Vec<LocItem>);

impl Loc {
    /// An empty location, pointing at the top-level value.
    #[inline]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn items(&self) -> &[LocItem] {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn suffix(&self) -> LocSuffix<'_> {
        LocSuffix(self)
    }
}

impl From<Vec<LocItem>> for Loc {
    #[inline]
    fn from(items: Vec<LocItem>) -> Self {
        Self(items)
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, item) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" -> ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        Ok(())
    }
}

struct LocSuffix<'a>(&'a Loc);

impl fmt::Display for LocSuffix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            Ok(())
        } else {
            write!(f, " (at {})", self.0)
        }
    }
}

// -----------------------------------------------------------------------------
// EncodeError

/// An error raised while encoding a value.
///
/// Variants carrying a [`Loc`] are raised by the dispatcher itself.
/// [`Custom`](Self::Custom) errors come from user encoders and are
/// returned to the caller unchanged.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// No registry entry, built-in encoder or structural fallback applies.
    #[error("Object of type {type_name} is not JSON serializable{}", .loc.suffix())]
    TypeMismatch { type_name: String, loc: Loc },
    /// A mapping key encoded to something other than text, a number,
    /// a boolean or null.
    #[error("keys must be str, int, float, bool or None, not {type_name}{}", .loc.suffix())]
    InvalidKey { type_name: String, loc: Loc },
    /// NaN or an infinity.
    #[error("Out of range float values are not JSON compliant: {value}{}", .loc.suffix())]
    NonFiniteFloat { value: f64, loc: Loc },
    /// A byte string or path that is not valid UTF-8.
    #[error("{type_name} is not valid UTF-8 text{}", .loc.suffix())]
    InvalidText { type_name: String, loc: Loc },
    /// Raised by a user encoder.
    #[error("{0}")]
    Custom(String),
    /// Raised by `serde_json`, either by a serde-backed value or while
    /// writing text.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl EncodeError {
    /// Creates a [`Custom`](Self::Custom) error.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_encode::EncodeError;
    ///
    /// let err = EncodeError::custom("negative amount");
    /// assert_eq!(err.to_string(), "negative amount");
    /// ```
    #[inline]
    pub fn custom(msg: impl fmt::Display) -> Self {
        Self::Custom(msg.to_string())
    }

    #[inline]
    pub(crate) fn type_mismatch(type_name: impl Into<String>) -> Self {
        Self::TypeMismatch {
            type_name: type_name.into(),
            loc: Loc::new(),
        }
    }

    #[inline]
    pub(crate) fn invalid_key(type_name: impl Into<String>) -> Self {
        Self::InvalidKey {
            type_name: type_name.into(),
            loc: Loc::new(),
        }
    }

    #[inline]
    pub(crate) fn non_finite(value: f64) -> Self {
        Self::NonFiniteFloat {
            value,
            loc: Loc::new(),
        }
    }

    #[inline]
    pub(crate) fn invalid_text(type_name: impl Into<String>) -> Self {
        Self::InvalidText {
            type_name: type_name.into(),
            loc: Loc::new(),
        }
    }

    /// Returns the location of the failing value, for errors raised by the
    /// dispatcher.
    pub fn loc(&self) -> Option<&Loc> {
        match self {
            Self::TypeMismatch { loc, .. }
            | Self::InvalidKey { loc, .. }
            | Self::NonFiniteFloat { loc, .. }
            | Self::InvalidText { loc, .. } => Some(loc),
            Self::Custom(_) | Self::Json(_) => None,
        }
    }

    /// Sets the location of a dispatcher error. Other errors are returned
    /// as they are.
    pub(crate) fn at(mut self, at: &[LocItem]) -> Self {
        match &mut self {
            Self::TypeMismatch { loc, .. }
            | Self::InvalidKey { loc, .. }
            | Self::NonFiniteFloat { loc, .. }
            | Self::InvalidText { loc, .. } => *loc = Loc(at.to_vec()),
            Self::Custom(_) | Self::Json(_) => {}
        }
        self
    }
}
