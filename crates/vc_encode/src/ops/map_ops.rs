use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::Encode;
use crate::ops::EncodeRef;

// -----------------------------------------------------------------------------
// Map

/// A mapping-like value, encoded as a JSON object.
///
/// Keys are encoded first and then turned into text: strings are kept,
/// numbers use their JSON text, booleans become `true`/`false` and null
/// becomes `null`. Other keys fail to encode.
pub trait Map: Encode {
    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if there are no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the entries in the collection's order.
    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Encode, &dyn Encode)> + '_>;
}

// -----------------------------------------------------------------------------
// DynamicMap

/// Key/value entries added at runtime, kept in insertion order.
///
/// Keys are not compared with each other, so duplicates are kept.
///
/// # Examples
///
/// ```
/// use vc_encode::ops::DynamicMap;
///
/// let map = DynamicMap::new().with("x", 123_i32).with("y", "123");
/// assert_eq!(vc_encode::to_string(&map).unwrap(), r#"{"x": 123, "y": "123"}"#);
/// ```
#[derive(Default)]
pub struct DynamicMap {
    entries: Vec<(Box<dyn Encode>, Box<dyn Encode>)>,
}

impl DynamicMap {
    /// Creates an empty `DynamicMap`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a boxed entry.
    #[inline]
    pub fn insert_boxed(&mut self, key: Box<dyn Encode>, value: Box<dyn Encode>) {
        self.entries.push((key, value));
    }

    /// Appends an entry.
    #[inline]
    pub fn insert<K: Encode, V: Encode>(&mut self, key: K, value: V) {
        self.insert_boxed(Box::new(key), Box::new(value));
    }

    /// Builder form of [`insert`](Self::insert).
    #[inline]
    pub fn with<K: Encode, V: Encode>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }
}

impl Encode for DynamicMap {
    #[inline]
    fn encode_ref(&self) -> EncodeRef<'_> {
        EncodeRef::Map(self)
    }
}

impl Map for DynamicMap {
    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Encode, &dyn Encode)> + '_> {
        Box::new(self.entries.iter().map(|(k, v)| (&**k, &**v)))
    }
}

impl<K: Encode, V: Encode> FromIterator<(K, V)> for DynamicMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(items: I) -> Self {
        let mut map = Self::new();
        for (key, value) in items {
            map.insert(key, value);
        }
        map
    }
}

impl fmt::Debug for DynamicMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicMap")
            .field("len", &self.entries.len())
            .finish()
    }
}
