use alloc::string::ToString;
use alloc::vec::Vec;

use serde_core::ser::SerializeMap;
use serde_core::{Serialize, Serializer};

use super::driver::{Context, ValueSerializer};

use crate::LocItem;
use crate::ops::Record;
use crate::select::{Filter, ItemKey};

/// A serializer for [`Record`] values, models included.
pub(super) struct RecordSerializer<'a> {
    pub record: &'a dyn Record,
    pub ctx: Context<'a>,
    pub filter: Filter<'a>,
}

impl Serialize for RecordSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self
            .record
            .iter_fields()
            .filter_map(|(name, value)| {
                let filter = self.filter.child(ItemKey::Name(name))?;
                Some((name, value, filter))
            })
            .collect::<Vec<_>>();

        let mut state = serializer.serialize_map(Some(fields.len()))?;

        for (name, value, filter) in fields {
            let value = ValueSerializer {
                value,
                ctx: self.ctx,
                filter,
            };
            self.ctx
                .state
                .with_loc(LocItem::Field(name.to_string()), || {
                    state.serialize_entry(name, &value)
                })?;
        }

        state.end()
    }
}
