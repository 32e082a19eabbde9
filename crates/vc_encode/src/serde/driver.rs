use serde_core::{Serialize, Serializer};
use serde_json::Value;

use super::map_serializer::MapSerializer;
use super::record_serializer::RecordSerializer;
use super::seq_serializer::SeqSerializer;
use super::state::{EncodeState, Scope};

use crate::encode::short_type_name;
use crate::ops::{EncodeRef, SeqKind};
use crate::registry::{Encoders, builtin_encoders};
use crate::select::Filter;
use crate::{Encode, EncodeError, EncodeOptions};

// -----------------------------------------------------------------------------
// SerializeDriver

/// Serializer for [`Encode`] values.
///
/// # Resolution Order
///
/// For every value met during the walk:
///
/// 1. **Natives**: null, booleans, numbers, strings and JSON values are
///    written as they are. Non-finite floats are an error.
/// 2. **Call-scoped encoders** of [`EncodeOptions::encoders`].
/// 3. **Type-declared encoders** of the enclosing models, innermost first.
///    Skipped when a universal override is set: the override replaces them.
/// 4. **JSON containers**: transparent wrappers are unwrapped, models and
///    maps become objects, lists become arrays.
/// 5. **Universal override** of [`EncodeOptions::encoder`].
/// 6. **Built-in encoders**, see [`builtin_encoders`].
/// 7. **Structure**: records become objects, sets and one-shot iterators
///    become arrays, enum members are replaced by their value and
///    serde-backed values use their own contract.
///
/// Anything else fails with [`EncodeError::TypeMismatch`].
///
/// Encoder results at steps 2, 3, 5 and 6 are written as they are.
///
/// # Errors
///
/// Dispatcher errors reach the serializer as custom errors carrying the
/// message. The original [`EncodeError`] can be taken back with
/// [`take_error`](Self::take_error).
///
/// # Examples
///
/// ```
/// use vc_encode::SerializeDriver;
/// use vc_encode::ops::DynamicRecord;
///
/// let record = DynamicRecord::new().with("bar", 123_i32).with("spam", "apple pie");
///
/// let output = serde_json::to_string(&SerializeDriver::new(&record)).unwrap();
/// assert_eq!(output, r#"{"bar":123,"spam":"apple pie"}"#);
/// ```
pub struct SerializeDriver<'a> {
    value: &'a dyn Encode,
    state: EncodeState<'a>,
    filter: Filter<'a>,
}

impl<'a> SerializeDriver<'a> {
    /// Creates a driver with default options.
    #[inline]
    pub const fn new(value: &'a dyn Encode) -> Self {
        Self {
            value,
            state: EncodeState::new(None, None, true),
            filter: Filter::new(None, None),
        }
    }

    /// Creates a driver with the options of one call.
    pub fn with_options(value: &'a dyn Encode, options: &'a EncodeOptions) -> Self {
        Self {
            value,
            state: EncodeState::new(
                Some(&options.encoders).filter(|encoders| !encoders.is_empty()),
                options.encoder.as_deref(),
                true,
            ),
            filter: Filter::new(options.include.as_ref(), options.exclude.as_ref()),
        }
    }

    /// Creates a driver that ignores the configuration of models.
    #[inline]
    pub(crate) const fn without_models(value: &'a dyn Encode, encoders: Option<&'a Encoders>) -> Self {
        Self {
            value,
            state: EncodeState::new(encoders, None, false),
            filter: Filter::new(None, None),
        }
    }

    /// Takes the error of the last failed serialization.
    #[inline]
    pub fn take_error(&self) -> Option<EncodeError> {
        self.state.take_error()
    }
}

impl Serialize for SerializeDriver<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.state.reset();
        ValueSerializer {
            value: self.value,
            ctx: Context {
                state: &self.state,
                scope: None,
            },
            filter: self.filter,
        }
        .serialize(serializer)
    }
}

// -----------------------------------------------------------------------------
// ValueSerializer

/// What every nested serializer shares.
#[derive(Clone, Copy)]
pub(super) struct Context<'a> {
    pub state: &'a EncodeState<'a>,
    pub scope: Option<&'a Scope<'a>>,
}

/// Serializes one value, at any depth.
pub(super) struct ValueSerializer<'a> {
    pub value: &'a dyn Encode,
    pub ctx: Context<'a>,
    pub filter: Filter<'a>,
}

impl ValueSerializer<'_> {
    fn emit<S: Serializer>(
        &self,
        result: Result<Value, EncodeError>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match result {
            Ok(value) => value.serialize(serializer),
            Err(err) => Err(self.ctx.state.fail(err)),
        }
    }

    /// Steps 2 and 3.
    fn registered(&self) -> Option<Result<Value, EncodeError>> {
        let state = self.ctx.state;
        let type_id = self.value.ty_id();

        if let Some(func) = state.encoders.and_then(|encoders| encoders.get(type_id)) {
            log::trace!("`{}` encoded by the call-scoped table", self.value.type_path());
            return Some(func(self.value));
        }

        if state.model_configs && state.encoder.is_none() {
            for encoders in Scope::iter(self.ctx.scope) {
                if let Some(func) = encoders.get(type_id) {
                    log::trace!("`{}` encoded by a model configuration", self.value.type_path());
                    return Some(func(self.value));
                }
            }
        }

        None
    }
}

impl Serialize for ValueSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let shape = self.value.encode_ref();
        let state = self.ctx.state;

        match shape {
            EncodeRef::Null => return serializer.serialize_unit(),
            EncodeRef::Bool(v) => return serializer.serialize_bool(v),
            EncodeRef::I64(v) => return serializer.serialize_i64(v),
            EncodeRef::U64(v) => return serializer.serialize_u64(v),
            EncodeRef::F64(v) if v.is_finite() => return serializer.serialize_f64(v),
            EncodeRef::F64(v) => return Err(state.fail_here(EncodeError::non_finite(v))),
            EncodeRef::Str(v) => return serializer.serialize_str(v),
            EncodeRef::Json(v) => return v.serialize(serializer),
            _ => {}
        }

        if let Some(result) = self.registered() {
            return self.emit(result, serializer);
        }

        match shape {
            EncodeRef::Transparent(inner) => {
                return ValueSerializer {
                    value: inner,
                    ctx: self.ctx,
                    filter: self.filter,
                }
                .serialize(serializer);
            }
            EncodeRef::Model(model) => {
                let scope = Scope {
                    encoders: model.model_config().json_encoders(),
                    parent: self.ctx.scope,
                };
                let ctx = Context {
                    state,
                    scope: Some(&scope),
                };
                return match model.custom_root() {
                    Some(root) => ValueSerializer {
                        value: root,
                        ctx,
                        filter: self.filter,
                    }
                    .serialize(serializer),
                    None => RecordSerializer {
                        record: model,
                        ctx,
                        filter: self.filter,
                    }
                    .serialize(serializer),
                };
            }
            EncodeRef::Map(map) => {
                return MapSerializer {
                    map,
                    ctx: self.ctx,
                    filter: self.filter,
                }
                .serialize(serializer);
            }
            EncodeRef::Seq(seq) if seq.seq_kind() == SeqKind::List => {
                return SeqSerializer {
                    seq,
                    ctx: self.ctx,
                    filter: self.filter,
                }
                .serialize(serializer);
            }
            _ => {}
        }

        if let Some(func) = state.encoder {
            return self.emit(func(self.value), serializer);
        }

        if let Some(func) = builtin_encoders().get(self.value.ty_id()) {
            return match func(self.value) {
                Ok(value) => value.serialize(serializer),
                Err(err) => Err(state.fail_here(err)),
            };
        }

        match shape {
            EncodeRef::Record(record) => RecordSerializer {
                record,
                ctx: self.ctx,
                filter: self.filter,
            }
            .serialize(serializer),
            EncodeRef::Seq(seq) => SeqSerializer {
                seq,
                ctx: self.ctx,
                filter: self.filter,
            }
            .serialize(serializer),
            EncodeRef::Enum(member) => ValueSerializer {
                value: member.member_value(),
                ctx: self.ctx,
                filter: self.filter,
            }
            .serialize(serializer),
            EncodeRef::Serde(value) => erased_serde::serialize(value, serializer),
            _ => {
                let type_name = short_type_name(self.value.type_path());
                log::debug!("no encoder found for `{}`", self.value.type_path());
                Err(state.fail_here(EncodeError::type_mismatch(type_name)))
            }
        }
    }
}
