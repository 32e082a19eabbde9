use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::Encode;
use crate::ops::{EncodeRef, Model};
use crate::registry::ModelConfig;

// -----------------------------------------------------------------------------
// Record

/// A value with named fields, encoded as a JSON object in field order.
///
/// Implemented by `#[derive(Encode)]` on structs with named fields.
pub trait Record: Encode {
    /// Returns the number of emitted fields.
    fn field_len(&self) -> usize;

    /// Returns the output name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the field at `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Encode>;

    /// Returns the field with output name `name`.
    fn field(&self, name: &str) -> Option<&dyn Encode> {
        (0..self.field_len())
            .find(|&index| self.name_at(index) == Some(name))
            .and_then(|index| self.field_at(index))
    }
}

impl dyn Record {
    /// Iterates `(name, value)` pairs in field order.
    #[inline]
    pub fn iter_fields(&self) -> RecordFieldIter<'_> {
        RecordFieldIter {
            record: self,
            index: 0,
        }
    }
}

/// Iterator returned by [`iter_fields`](Record::iter_fields).
pub struct RecordFieldIter<'a> {
    record: &'a dyn Record,
    index: usize,
}

impl<'a> Iterator for RecordFieldIter<'a> {
    type Item = (&'a str, &'a dyn Encode);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.index;
        if index >= self.record.field_len() {
            return None;
        }
        self.index += 1;
        Some((self.record.name_at(index)?, self.record.field_at(index)?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.record.field_len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordFieldIter<'_> {}

// -----------------------------------------------------------------------------
// DynamicRecord

/// A record whose fields are added at runtime.
///
/// Setting a [`ModelConfig`] turns it into a [`Model`], so its
/// type-declared encoders apply to the fields.
///
/// # Examples
///
/// ```
/// use vc_encode::ops::DynamicRecord;
///
/// let mut record = DynamicRecord::new();
/// record.extend("a", "b");
/// record.extend("c", "d");
///
/// assert_eq!(vc_encode::to_string(&record).unwrap(), r#"{"a": "b", "c": "d"}"#);
/// ```
#[derive(Default)]
pub struct DynamicRecord {
    names: Vec<Cow<'static, str>>,
    fields: Vec<Box<dyn Encode>>,
    config: Option<ModelConfig>,
}

impl DynamicRecord {
    /// Creates an empty `DynamicRecord`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            names: Vec::new(),
            fields: Vec::new(),
            config: None,
        }
    }

    /// Sets the configuration, making this record a model.
    #[inline]
    pub fn with_config(mut self, config: ModelConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Appends a boxed field.
    ///
    /// A field with the same name is replaced in place.
    pub fn extend_boxed(&mut self, name: impl Into<Cow<'static, str>>, value: Box<dyn Encode>) {
        let name = name.into();
        match self.names.iter().position(|n| *n == name) {
            Some(index) => self.fields[index] = value,
            None => {
                self.names.push(name);
                self.fields.push(value);
            }
        }
    }

    /// Appends a field.
    ///
    /// A field with the same name is replaced in place.
    #[inline]
    pub fn extend<T: Encode>(&mut self, name: impl Into<Cow<'static, str>>, value: T) {
        self.extend_boxed(name, Box::new(value));
    }

    /// Builder form of [`extend`](Self::extend).
    #[inline]
    pub fn with<T: Encode>(mut self, name: impl Into<Cow<'static, str>>, value: T) -> Self {
        self.extend(name, value);
        self
    }
}

impl Encode for DynamicRecord {
    fn encode_ref(&self) -> EncodeRef<'_> {
        match self.config {
            Some(_) => EncodeRef::Model(self),
            None => EncodeRef::Record(self),
        }
    }
}

impl Record for DynamicRecord {
    #[inline]
    fn field_len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    fn name_at(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(|name| name.as_ref())
    }

    #[inline]
    fn field_at(&self, index: usize) -> Option<&dyn Encode> {
        self.fields.get(index).map(|field| &**field)
    }
}

impl Model for DynamicRecord {
    fn model_config(&self) -> &ModelConfig {
        self.config.as_ref().unwrap_or(ModelConfig::empty())
    }
}

impl fmt::Debug for DynamicRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicRecord")
            .field("fields", &self.names)
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{DynamicRecord, Record};
    use crate::Encode;
    use crate::ops::EncodeKind;
    use crate::registry::ModelConfig;

    #[test]
    fn fields_keep_order_and_replace_in_place() {
        let mut record = DynamicRecord::new();
        record.extend("bar", 123_i32);
        record.extend("spam", "apple pie");
        record.extend("bar", 456_i32);

        let record: &dyn Record = &record;
        let names = record.iter_fields().map(|(name, _)| name).collect::<Vec<_>>();
        assert_eq!(names, ["bar", "spam"]);
        assert_eq!(record.iter_fields().len(), 2);
        assert_eq!(
            record.field("bar").and_then(|v| v.downcast_ref::<i32>()),
            Some(&456)
        );
        assert!(record.field("eggs").is_none());
    }

    #[test]
    fn config_makes_a_model() {
        let record = DynamicRecord::new().with("a", 1_u8);
        assert_eq!(record.encode_ref().kind(), EncodeKind::Record);

        let model = DynamicRecord::new()
            .with("a", 1_u8)
            .with_config(ModelConfig::new());
        assert_eq!(model.encode_ref().kind(), EncodeKind::Model);
    }
}
