use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use std::io;

use serde_core::Serialize;
use serde_json::Value;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};

use crate::registry::{EncoderFn, Encoders};
use crate::{Encode, EncodeError, SerializeDriver, Selection};

// -----------------------------------------------------------------------------
// EncodeOptions

/// Options of one top-level encoding call.
///
/// # Examples
///
/// ```
/// use core::time::Duration;
/// use serde_json::Value;
/// use vc_encode::registry::ModelConfig;
/// use vc_encode::{EncodeOptions, Selection, ops::DynamicRecord};
///
/// let model = DynamicRecord::new()
///     .with_config(ModelConfig::new())
///     .with("x", Duration::from_secs(123))
///     .with("y", 1_u8);
///
/// let options = EncodeOptions::new()
///     .encoder(|_| Ok(Value::from("__default__")))
///     .exclude(Selection::from(["y"]));
///
/// assert_eq!(
///     vc_encode::to_string_with(&model, &options).unwrap(),
///     r#"{"x": "__default__"}"#,
/// );
/// ```
#[derive(Clone, Default)]
pub struct EncodeOptions {
    pub(crate) encoders: Encoders,
    pub(crate) encoder: Option<Arc<EncoderFn>>,
    pub(crate) include: Option<Selection>,
    pub(crate) exclude: Option<Selection>,
    pub(crate) indent: Option<usize>,
}

impl EncodeOptions {
    /// Creates options that change nothing.
    #[inline]
    pub const fn new() -> Self {
        Self {
            encoders: Encoders::new(),
            encoder: None,
            include: None,
            exclude: None,
            indent: None,
        }
    }

    /// Sets the call-scoped encoders, which take precedence over every
    /// other encoder.
    #[inline]
    pub fn encoders(mut self, encoders: Encoders) -> Self {
        self.encoders = encoders;
        self
    }

    /// Sets the universal override.
    ///
    /// It receives every value that is neither native, claimed by a
    /// call-scoped encoder, nor a JSON container. The `json_encoders` of
    /// models are not consulted while it is set.
    pub fn encoder(
        mut self,
        func: impl Fn(&dyn Encode) -> Result<Value, EncodeError> + Send + Sync + 'static,
    ) -> Self {
        self.encoder = Some(Arc::new(func));
        self
    }

    /// Keeps only the selected items.
    #[inline]
    pub fn include(mut self, selection: Selection) -> Self {
        self.include = Some(selection);
        self
    }

    /// Drops the selected items.
    #[inline]
    pub fn exclude(mut self, selection: Selection) -> Self {
        self.exclude = Some(selection);
        self
    }

    /// Pretty-prints text output with `indent` spaces per level.
    #[inline]
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = Some(indent);
        self
    }
}

impl fmt::Debug for EncodeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodeOptions")
            .field("encoders", &self.encoders)
            .field("encoder", &self.encoder.as_ref().map(|_| ".."))
            .field("include", &self.include)
            .field("exclude", &self.exclude)
            .field("indent", &self.indent)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Formatting

/// Compact output with a space after `,` and `:`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    #[inline]
    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    #[inline]
    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    #[inline]
    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

fn finish<T>(driver: &SerializeDriver<'_>, result: Result<T, serde_json::Error>) -> Result<T, EncodeError> {
    result.map_err(|err| driver.take_error().unwrap_or(EncodeError::Json(err)))
}

fn write_text(driver: &SerializeDriver<'_>, indent: Option<usize>) -> Result<String, EncodeError> {
    let mut out = Vec::with_capacity(128);
    let result = match indent {
        None => driver.serialize(&mut Serializer::with_formatter(&mut out, SpacedFormatter)),
        Some(width) => {
            let indent = b" ".repeat(width);
            let formatter = PrettyFormatter::with_indent(&indent);
            driver.serialize(&mut Serializer::with_formatter(&mut out, formatter))
        }
    };
    finish(driver, result)?;
    String::from_utf8(out).map_err(EncodeError::custom)
}

// -----------------------------------------------------------------------------
// Functions

/// Encodes `value` into a [`Value`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vc_encode::types::SecretStr;
///
/// let value = (SecretStr::new("abcd"), vec![1_u8, 2]);
/// assert_eq!(vc_encode::to_value(&value).unwrap(), json!(["**********", [1, 2]]));
/// ```
#[inline]
pub fn to_value(value: &dyn Encode) -> Result<Value, EncodeError> {
    let driver = SerializeDriver::new(value);
    finish(&driver, serde_json::to_value(&driver))
}

/// Encodes `value` into a [`Value`] with the given options.
///
/// [`EncodeOptions::indent`] has no effect here.
#[inline]
pub fn to_value_with(value: &dyn Encode, options: &EncodeOptions) -> Result<Value, EncodeError> {
    let driver = SerializeDriver::with_options(value, options);
    finish(&driver, serde_json::to_value(&driver))
}

/// Encodes `value` into JSON text, written compactly with a space after
/// each `,` and `:`.
///
/// ```
/// let out = vc_encode::to_string(&vec![("a", 1_u8)]).unwrap();
/// assert_eq!(out, r#"[["a", 1]]"#);
/// ```
#[inline]
pub fn to_string(value: &dyn Encode) -> Result<String, EncodeError> {
    write_text(&SerializeDriver::new(value), None)
}

/// Encodes `value` into JSON text with the given options.
///
/// ```
/// use vc_encode::EncodeOptions;
/// use vc_encode::ops::DynamicMap;
///
/// let map = DynamicMap::new().with("a", [1_u8]);
/// let out = vc_encode::to_string_with(&map, &EncodeOptions::new().indent(2)).unwrap();
/// assert_eq!(out, "{\n  \"a\": [\n    1\n  ]\n}");
/// ```
#[inline]
pub fn to_string_with(value: &dyn Encode, options: &EncodeOptions) -> Result<String, EncodeError> {
    write_text(&SerializeDriver::with_options(value, options), options.indent)
}

/// Encodes `value` with the built-in encoders and its structure only.
///
/// No call-scoped, type-declared or universal encoder is consulted, not
/// even for nested values.
#[inline]
pub fn default_encoder(value: &dyn Encode) -> Result<Value, EncodeError> {
    let driver = SerializeDriver::without_models(value, None);
    finish(&driver, serde_json::to_value(&driver))
}

/// Encodes `value` with `encoders` first, then like [`default_encoder`].
///
/// ```
/// use core::time::Duration;
/// use serde_json::{Value, json};
/// use vc_encode::registry::Encoders;
///
/// let encoders = Encoders::new().with::<Duration>(|d| Ok(Value::from(d.as_secs())));
/// let out = vc_encode::custom_encoder(&encoders, &vec![Duration::from_secs(3)]).unwrap();
/// assert_eq!(out, json!([3]));
/// ```
#[inline]
pub fn custom_encoder(encoders: &Encoders, value: &dyn Encode) -> Result<Value, EncodeError> {
    let driver = SerializeDriver::without_models(value, Some(encoders));
    finish(&driver, serde_json::to_value(&driver))
}

// -----------------------------------------------------------------------------
// ToJson

/// Encoding methods for every [`Encode`] type.
///
/// ```
/// use vc_encode::ToJson;
/// use vc_encode::ops::DynamicRecord;
///
/// let record = DynamicRecord::new().with("x", 123_i32).with("y", "123");
/// assert_eq!(record.json().unwrap(), r#"{"x": 123, "y": "123"}"#);
/// ```
pub trait ToJson {
    /// See [`to_string`].
    fn json(&self) -> Result<String, EncodeError>;

    /// See [`to_string_with`].
    fn json_with(&self, options: &EncodeOptions) -> Result<String, EncodeError>;

    /// See [`to_value`].
    fn to_json_value(&self) -> Result<Value, EncodeError>;

    /// See [`to_value_with`].
    fn to_json_value_with(&self, options: &EncodeOptions) -> Result<Value, EncodeError>;
}

impl<T: ?Sized + Encode> ToJson for T {
    #[inline]
    fn json(&self) -> Result<String, EncodeError> {
        to_string(self.as_encode())
    }

    #[inline]
    fn json_with(&self, options: &EncodeOptions) -> Result<String, EncodeError> {
        to_string_with(self.as_encode(), options)
    }

    #[inline]
    fn to_json_value(&self) -> Result<Value, EncodeError> {
        to_value(self.as_encode())
    }

    #[inline]
    fn to_json_value_with(&self, options: &EncodeOptions) -> Result<Value, EncodeError> {
        to_value_with(self.as_encode(), options)
    }
}
