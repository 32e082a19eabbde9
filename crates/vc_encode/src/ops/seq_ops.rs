use core::ops::ControlFlow;

use crate::Encode;

/// How a [`Seq`] is treated by the dispatcher.
///
/// Lists are JSON arrays and are always walked. Sets and one-shot
/// iterators have no JSON counterpart: they reach the universal
/// `encoder` override, when one is given, before being walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeqKind {
    /// Ordered collections: `Vec`, arrays, slices, tuples.
    List,
    /// Set-like collections, walked in their own enumeration order.
    Set,
    /// Lazy values that can be enumerated once.
    Iter,
}

/// A sequence-like value, encoded as a JSON array.
pub trait Seq: Encode {
    fn seq_kind(&self) -> SeqKind;

    /// Returns the number of elements, when known without enumerating.
    fn len_hint(&self) -> Option<usize>;

    /// Calls `visitor` for each element until it breaks.
    ///
    /// For [`SeqKind::Iter`] this consumes the underlying iterator.
    fn visit_items(&self, visitor: &mut dyn FnMut(&dyn Encode) -> ControlFlow<()>);
}
