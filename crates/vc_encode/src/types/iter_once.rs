use core::cell::Cell;
use core::fmt;
use core::ops::ControlFlow;

use crate::Encode;
use crate::ops::{EncodeRef, Seq, SeqKind};

/// A lazy sequence that can be enumerated once.
///
/// The first encode drains the iterator; later encodes produce an empty
/// array.
///
/// ```
/// use vc_encode::types::IterOnce;
///
/// let numbers = IterOnce::new(0..4);
/// assert_eq!(vc_encode::to_string(&numbers).unwrap(), "[0, 1, 2, 3]");
/// assert_eq!(vc_encode::to_string(&numbers).unwrap(), "[]");
/// ```
pub struct IterOnce<I>(Cell<Option<I>>);

impl<I: Iterator> IterOnce<I> {
    #[inline]
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self(Cell::new(Some(iter.into_iter())))
    }
}

impl<I> fmt::Debug for IterOnce<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IterOnce { .. }")
    }
}

impl<I> Encode for IterOnce<I>
where
    I: Iterator + 'static,
    I::Item: Encode,
{
    #[inline]
    fn encode_ref(&self) -> EncodeRef<'_> {
        EncodeRef::Seq(self)
    }
}

impl<I> Seq for IterOnce<I>
where
    I: Iterator + 'static,
    I::Item: Encode,
{
    #[inline]
    fn seq_kind(&self) -> SeqKind {
        SeqKind::Iter
    }

    #[inline]
    fn len_hint(&self) -> Option<usize> {
        None
    }

    fn visit_items(&self, visitor: &mut dyn FnMut(&dyn Encode) -> ControlFlow<()>) {
        let Some(iter) = self.0.take() else {
            return;
        };
        for item in iter {
            if visitor(&item).is_break() {
                break;
            }
        }
    }
}
