use core::ops::ControlFlow;

use crate::Encode;
use crate::ops::{EncodeRef, Seq, SeqKind};

macro_rules! impl_encode_tuple {
    ($($name:ident: $index:tt),+) => {
        impl<$($name: Encode),+> Encode for ($($name,)+) {
            #[inline]
            fn encode_ref(&self) -> EncodeRef<'_> {
                EncodeRef::Seq(self)
            }
        }

        impl<$($name: Encode),+> Seq for ($($name,)+) {
            #[inline]
            fn seq_kind(&self) -> SeqKind {
                SeqKind::List
            }

            #[inline]
            fn len_hint(&self) -> Option<usize> {
                Some([$(stringify!($name)),+].len())
            }

            fn visit_items(&self, visitor: &mut dyn FnMut(&dyn Encode) -> ControlFlow<()>) {
                $(
                    if visitor(&self.$index as &dyn Encode).is_break() {
                        return;
                    }
                )+
            }
        }
    };
}

impl_encode_tuple!(P0: 0);
impl_encode_tuple!(P0: 0, P1: 1);
impl_encode_tuple!(P0: 0, P1: 1, P2: 2);
impl_encode_tuple!(P0: 0, P1: 1, P2: 2, P3: 3);
impl_encode_tuple!(P0: 0, P1: 1, P2: 2, P3: 3, P4: 4);
impl_encode_tuple!(P0: 0, P1: 1, P2: 2, P3: 3, P4: 4, P5: 5);
impl_encode_tuple!(P0: 0, P1: 1, P2: 2, P3: 3, P4: 4, P5: 5, P6: 6);
impl_encode_tuple!(P0: 0, P1: 1, P2: 2, P3: 3, P4: 4, P5: 5, P6: 6, P7: 7);

#[cfg(test)]
mod tests {
    use crate::Encode;
    use crate::ops::EncodeRef;

    #[test]
    fn tuple_len() {
        let EncodeRef::Seq(seq) = (1_u8, "a", 2.5_f64).encode_ref() else {
            panic!("expected a sequence");
        };
        assert_eq!(seq.len_hint(), Some(3));
    }
}
