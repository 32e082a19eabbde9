use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use alloc::vec::Vec;
use core::hash::BuildHasher;
use core::ops::ControlFlow;
use std::collections::{HashMap, HashSet};

use vc_utils::hash::hashbrown;

use crate::Encode;
use crate::ops::{EncodeRef, Map, Seq, SeqKind};

macro_rules! impl_encode_seq {
    ($kind:ident; [$($generics:tt)*] $ty:ty) => {
        impl<$($generics)*> Encode for $ty {
            #[inline]
            fn encode_ref(&self) -> EncodeRef<'_> {
                EncodeRef::Seq(self)
            }
        }

        impl<$($generics)*> Seq for $ty {
            #[inline]
            fn seq_kind(&self) -> SeqKind {
                SeqKind::$kind
            }

            #[inline]
            fn len_hint(&self) -> Option<usize> {
                Some(self.len())
            }

            fn visit_items(&self, visitor: &mut dyn FnMut(&dyn Encode) -> ControlFlow<()>) {
                for item in self.iter() {
                    if visitor(item as &dyn Encode).is_break() {
                        break;
                    }
                }
            }
        }
    };
}

impl_encode_seq!(List; [T: Encode] Vec<T>);
impl_encode_seq!(List; [T: Encode, const N: usize] [T; N]);
impl_encode_seq!(List; [T: Encode] VecDeque<T>);
impl_encode_seq!(Set; [T: Encode] BTreeSet<T>);
impl_encode_seq!(Set; [T: Encode, S: BuildHasher + 'static] HashSet<T, S>);
impl_encode_seq!(Set; [T: Encode, S: 'static] hashbrown::HashSet<T, S>);

macro_rules! impl_encode_map {
    ([$($generics:tt)*] $ty:ty) => {
        impl<$($generics)*> Encode for $ty {
            #[inline]
            fn encode_ref(&self) -> EncodeRef<'_> {
                EncodeRef::Map(self)
            }
        }

        impl<$($generics)*> Map for $ty {
            #[inline]
            fn len(&self) -> usize {
                <$ty>::len(self)
            }

            fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Encode, &dyn Encode)> + '_> {
                Box::new(
                    <$ty>::iter(self).map(|(key, value)| (key as &dyn Encode, value as &dyn Encode)),
                )
            }
        }
    };
}

impl_encode_map!([K: Encode, V: Encode] BTreeMap<K, V>);
impl_encode_map!([K: Encode, V: Encode, S: BuildHasher + 'static] HashMap<K, V, S>);
impl_encode_map!([K: Encode, V: Encode, S: 'static] hashbrown::HashMap<K, V, S>);

#[cfg(test)]
mod tests {
    use alloc::collections::{BTreeMap, BTreeSet};
    use alloc::vec;
    use alloc::vec::Vec;
    use core::ops::ControlFlow;
    use std::collections::HashSet;

    use crate::Encode;
    use crate::ops::{EncodeRef, Map, SeqKind};

    fn collect_u8(value: &dyn Encode) -> (SeqKind, Vec<u8>) {
        let EncodeRef::Seq(seq) = value.encode_ref() else {
            panic!("expected a sequence");
        };
        let mut out = Vec::new();
        seq.visit_items(&mut |item| {
            out.push(*item.downcast_ref::<u8>().unwrap());
            ControlFlow::Continue(())
        });
        (seq.seq_kind(), out)
    }

    #[test]
    fn sequences() {
        assert_eq!(collect_u8(&vec![1_u8, 2, 3]), (SeqKind::List, vec![1, 2, 3]));
        assert_eq!(collect_u8(&[4_u8, 5]), (SeqKind::List, vec![4, 5]));

        let set: BTreeSet<u8> = [3, 1, 2].into_iter().collect();
        assert_eq!(collect_u8(&set), (SeqKind::Set, vec![1, 2, 3]));
    }

    #[test]
    fn hash_sets() {
        let set: HashSet<u8> = [30, 10, 20].into_iter().collect();
        let (kind, mut items) = collect_u8(&set);
        items.sort_unstable();
        assert_eq!((kind, items), (SeqKind::Set, vec![10, 20, 30]));

        let text = crate::to_string(&set).unwrap();
        let mut parsed: Vec<u64> = serde_json::from_str(&text).unwrap();
        parsed.sort_unstable();
        assert_eq!(parsed, [10, 20, 30]);
    }

    #[test]
    fn visit_stops_on_break() {
        let items = vec![1_u8, 2, 3];
        let EncodeRef::Seq(seq) = items.encode_ref() else {
            unreachable!()
        };
        let mut seen = 0;
        seq.visit_items(&mut |_| {
            seen += 1;
            ControlFlow::Break(())
        });
        assert_eq!(seen, 1);
    }

    #[test]
    fn maps() {
        let map: BTreeMap<&'static str, u8> = [("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(Map::len(&map), 2);

        let keys: Vec<&str> = Map::iter(&map)
            .map(|(k, _)| *k.downcast_ref::<&'static str>().unwrap())
            .collect();
        assert_eq!(keys, ["a", "b"]);
    }
}
