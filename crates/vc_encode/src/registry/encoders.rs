use alloc::format;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::TypeId;
use core::fmt;

use serde_json::Value;
use vc_utils::TypeIdMap;

use crate::{Encode, EncodeError};

/// A type-erased encoder.
///
/// Receives the value as `&dyn Encode` and returns its final JSON form.
/// The result is written as it is and never walked again.
pub type EncoderFn = dyn Fn(&dyn Encode) -> Result<Value, EncodeError> + Send + Sync;

#[derive(Clone)]
struct EncoderEntry {
    type_path: &'static str,
    func: Arc<EncoderFn>,
}

/// A table of encoders keyed by exact type.
///
/// # Examples
///
/// ```
/// use core::time::Duration;
/// use serde_json::{Value, json};
/// use vc_encode::registry::Encoders;
///
/// let encoders = Encoders::new()
///     .with::<Duration>(|d| Ok(Value::from(format!("{:.3}s", d.as_secs_f64()))));
///
/// let out = encoders.encode(&Duration::from_secs(123)).unwrap().unwrap();
/// assert_eq!(out, json!("123.000s"));
///
/// assert!(encoders.encode(&12_u8).is_none());
/// ```
#[derive(Clone, Default)]
pub struct Encoders(TypeIdMap<EncoderEntry>);

impl Encoders {
    /// Creates an empty table.
    #[inline]
    pub const fn new() -> Self {
        Self(TypeIdMap::new())
    }

    /// Registers `func` for values of type `T`, replacing any previous
    /// encoder for `T`.
    pub fn insert<T: Encode>(
        &mut self,
        func: impl Fn(&T) -> Result<Value, EncodeError> + Send + Sync + 'static,
    ) -> &mut Self {
        let type_path = core::any::type_name::<T>();
        let erased = move |value: &dyn Encode| match value.downcast_ref::<T>() {
            Some(value) => func(value),
            None => {
                log::warn!(
                    "encoder for `{type_path}` received a value of type `{}`",
                    value.type_path()
                );
                Err(EncodeError::custom(format!(
                    "encoder for `{type_path}` received a value of type `{}`",
                    value.type_name()
                )))
            }
        };
        self.insert_erased(TypeId::of::<T>(), type_path, Arc::new(erased));
        self
    }

    /// Builder form of [`insert`](Self::insert).
    #[inline]
    pub fn with<T: Encode>(
        mut self,
        func: impl Fn(&T) -> Result<Value, EncodeError> + Send + Sync + 'static,
    ) -> Self {
        self.insert::<T>(func);
        self
    }

    /// Registers an already erased encoder.
    ///
    /// `func` is only ever called with values whose type id is `type_id`.
    pub fn insert_erased(
        &mut self,
        type_id: TypeId,
        type_path: &'static str,
        func: Arc<EncoderFn>,
    ) -> &mut Self {
        self.0.insert(type_id, EncoderEntry { type_path, func });
        self
    }

    /// Copies every entry of `other` into `self`. Entries of `other` win.
    pub fn extend(&mut self, other: &Encoders) -> &mut Self {
        self.0
            .extend(other.0.iter().map(|(id, entry)| (*id, entry.clone())));
        self
    }

    /// Returns the encoder registered for `type_id`.
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&EncoderFn> {
        self.0.get(&type_id).map(|entry| &*entry.func)
    }

    /// Returns `true` if an encoder is registered for `T`.
    #[inline]
    pub fn contains<T: Encode>(&self) -> bool {
        self.0.contains_type::<T>()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encodes `value` with the encoder of its exact type.
    ///
    /// Returns `None` when no encoder is registered for it.
    #[inline]
    pub fn encode(&self, value: &dyn Encode) -> Option<Result<Value, EncodeError>> {
        self.get(value.ty_id()).map(|func| func(value))
    }
}

impl fmt::Debug for Encoders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types = self
            .0
            .iter()
            .map(|(_, entry)| entry.type_path)
            .collect::<Vec<_>>();
        types.sort_unstable();
        f.debug_set().entries(types).finish()
    }
}
