use core::ops::ControlFlow;

use serde_core::ser::SerializeSeq;
use serde_core::{Serialize, Serializer};

use super::driver::{Context, ValueSerializer};

use crate::LocItem;
use crate::ops::Seq;
use crate::select::{Filter, ItemKey};

/// A serializer for [`Seq`] values of every kind.
pub(super) struct SeqSerializer<'a> {
    pub seq: &'a dyn Seq,
    pub ctx: Context<'a>,
    pub filter: Filter<'a>,
}

impl Serialize for SeqSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.seq.len_hint();
        let mut state = serializer.serialize_seq(len.filter(|_| self.filter.is_empty()))?;

        let mut index = 0;
        let mut result = Ok(());
        self.seq.visit_items(&mut |value| {
            let position = index;
            index += 1;
            let Some(filter) = self.filter.child(ItemKey::Index {
                index: position,
                len,
            }) else {
                return ControlFlow::Continue(());
            };

            let value = ValueSerializer {
                value,
                ctx: self.ctx,
                filter,
            };
            match self
                .ctx
                .state
                .with_loc(LocItem::Index(position), || state.serialize_element(&value))
            {
                Ok(()) => ControlFlow::Continue(()),
                Err(err) => {
                    result = Err(err);
                    ControlFlow::Break(())
                }
            }
        });
        result?;

        log::trace!("walked {index} items of a {:?} sequence", self.seq.seq_kind());
        state.end()
    }
}
