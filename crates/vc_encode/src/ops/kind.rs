use core::fmt;

use crate::Encode;
use crate::ops::{EnumMember, Map, Model, Record, Seq};

/// A borrowed view of a value's shape, returned by
/// [`Encode::encode_ref`].
///
/// The first six variants are JSON natives and are written as they are.
/// The others tell the dispatcher how to walk the value when no
/// registered encoder claims its type.
pub enum EncodeRef<'a> {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    Str(&'a str),
    /// An already encoded JSON value.
    Json(&'a serde_json::Value),
    /// A wrapper encoded as the value it holds.
    Transparent(&'a dyn Encode),
    Model(&'a dyn Model),
    Record(&'a dyn Record),
    Map(&'a dyn Map),
    Seq(&'a dyn Seq),
    Enum(&'a dyn EnumMember),
    /// A value with its own `serde::Serialize` contract.
    Serde(&'a dyn erased_serde::Serialize),
    /// No structure is exposed. Only a registered encoder can handle it.
    Opaque,
}

/// The variant of an [`EncodeRef`], without data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodeKind {
    Null,
    Bool,
    I64,
    U64,
    F64,
    Str,
    Json,
    Transparent,
    Model,
    Record,
    Map,
    Seq,
    Enum,
    Serde,
    Opaque,
}

impl EncodeRef<'_> {
    pub fn kind(&self) -> EncodeKind {
        match self {
            Self::Null => EncodeKind::Null,
            Self::Bool(_) => EncodeKind::Bool,
            Self::I64(_) => EncodeKind::I64,
            Self::U64(_) => EncodeKind::U64,
            Self::F64(_) => EncodeKind::F64,
            Self::Str(_) => EncodeKind::Str,
            Self::Json(_) => EncodeKind::Json,
            Self::Transparent(_) => EncodeKind::Transparent,
            Self::Model(_) => EncodeKind::Model,
            Self::Record(_) => EncodeKind::Record,
            Self::Map(_) => EncodeKind::Map,
            Self::Seq(_) => EncodeKind::Seq,
            Self::Enum(_) => EncodeKind::Enum,
            Self::Serde(_) => EncodeKind::Serde,
            Self::Opaque => EncodeKind::Opaque,
        }
    }
}

impl fmt::Display for EncodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Debug for EncodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::I64(v) => f.debug_tuple("I64").field(v).finish(),
            Self::U64(v) => f.debug_tuple("U64").field(v).finish(),
            Self::F64(v) => f.debug_tuple("F64").field(v).finish(),
            Self::Str(v) => f.debug_tuple("Str").field(v).finish(),
            Self::Json(v) => f.debug_tuple("Json").field(v).finish(),
            other => fmt::Debug::fmt(&other.kind(), f),
        }
    }
}
