use alloc::string::{String, ToString};

use serde_core::ser::{Error, SerializeMap};
use serde_core::{Serialize, Serializer};
use serde_json::Value;

use super::driver::{Context, ValueSerializer};

use crate::encode::short_type_name;
use crate::ops::Map;
use crate::select::{Filter, ItemKey};
use crate::{Encode, EncodeError, LocItem};

/// A serializer for [`Map`] values.
///
/// Keys are encoded like any other value and must end up as text, a
/// number, a boolean or null.
pub(super) struct MapSerializer<'a> {
    pub map: &'a dyn Map,
    pub ctx: Context<'a>,
    pub filter: Filter<'a>,
}

impl MapSerializer<'_> {
    fn key_text<E: Error>(&self, key: &dyn Encode) -> Result<String, E> {
        let encoded = serde_json::to_value(&ValueSerializer {
            value: key,
            ctx: self.ctx,
            filter: Filter::default(),
        })
        .map_err(|err| self.ctx.state.nested_error(err))?;

        match encoded {
            Value::String(text) => Ok(text),
            Value::Number(number) => Ok(number.to_string()),
            Value::Bool(flag) => Ok(flag.to_string()),
            Value::Null => Ok(String::from("null")),
            Value::Array(_) | Value::Object(_) => Err(self.ctx.state.fail_here(
                EncodeError::invalid_key(short_type_name(key.type_path())),
            )),
        }
    }
}

impl Serialize for MapSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = Some(self.map.len()).filter(|_| self.filter.is_empty());
        let mut state = serializer.serialize_map(len)?;

        for (key, value) in self.map.iter() {
            let key = self.key_text::<S::Error>(key)?;
            let Some(filter) = self.filter.child(ItemKey::Name(&key)) else {
                continue;
            };

            let value = ValueSerializer {
                value,
                ctx: self.ctx,
                filter,
            };
            self.ctx
                .state
                .with_loc(LocItem::Key(key.clone()), || {
                    state.serialize_entry(&key, &value)
                })?;
        }

        state.end()
    }
}
