use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;

use vc_utils::hash::HashMap;

// -----------------------------------------------------------------------------
// Selection

/// A nested description of the items to include or exclude.
///
/// Keys are field names, map keys (matched against the key text) or
/// element positions. A negative position counts from the end of a
/// sequence whose length is known.
///
/// Each key selects either the whole item or, with a nested selection,
/// part of the item's own children.
///
/// # Examples
///
/// ```
/// use vc_encode::{EncodeOptions, Selection};
/// use vc_encode::ops::DynamicMap;
///
/// let inner = DynamicMap::new().with("x", 1_i32).with("y", 2_i32);
/// let map = DynamicMap::new().with("a", 10_i32).with("b", inner);
///
/// let options = EncodeOptions::new()
///     .exclude(Selection::new().with("a"))
///     .include(Selection::new().with_nested("b", Selection::new().with("y")));
///
/// assert_eq!(vc_encode::to_string_with(&map, &options).unwrap(), r#"{"b": {"y": 2}}"#);
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Selection {
    names: HashMap<Cow<'static, str>, Option<Selection>>,
    indices: HashMap<isize, Option<Selection>>,
}

impl Selection {
    /// Creates an empty selection.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the whole item named `name`.
    pub fn with(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.names.insert(name.into(), None);
        self
    }

    /// Selects part of the item named `name`.
    pub fn with_nested(mut self, name: impl Into<Cow<'static, str>>, nested: Selection) -> Self {
        self.names.insert(name.into(), Some(nested));
        self
    }

    /// Selects the whole element at `index`.
    pub fn with_index(mut self, index: isize) -> Self {
        self.indices.insert(index, None);
        self
    }

    /// Selects part of the element at `index`.
    pub fn with_index_nested(mut self, index: isize, nested: Selection) -> Self {
        self.indices.insert(index, Some(nested));
        self
    }

    /// Returns the number of keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len() + self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.indices.is_empty()
    }

    /// Returns `true` if `name` is a key of this selection.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Returns `Some(None)` for a whole-item key and `Some(Some(_))` for a
    /// nested one.
    fn lookup(&self, key: ItemKey<'_>) -> Option<Option<&Selection>> {
        let entry = match key {
            ItemKey::Name(name) => self.names.get(name),
            ItemKey::Index { index, len } => {
                let index = index as isize;
                self.indices.get(&index).or_else(|| {
                    let len = len? as isize;
                    self.indices.get(&(index - len))
                })
            }
        };
        entry.map(Option::as_ref)
    }
}

impl<S: Into<Cow<'static, str>>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}

impl<const N: usize> From<[&'static str; N]> for Selection {
    #[inline]
    fn from(names: [&'static str; N]) -> Self {
        names.into_iter().collect()
    }
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.names.iter().collect();
        names.sort_by(|a, b| a.0.cmp(b.0));
        let mut indices: Vec<_> = self.indices.iter().collect();
        indices.sort_by_key(|entry| *entry.0);

        f.write_str("Selection(")?;
        let mut first = true;
        let mut entry = |f: &mut fmt::Formatter<'_>,
                         key: &dyn fmt::Display,
                         nested: &Option<Selection>|
         -> fmt::Result {
            if !core::mem::take(&mut first) {
                f.write_str(", ")?;
            }
            match nested {
                Some(nested) => write!(f, "{key}: {nested:?}"),
                None => write!(f, "{key}"),
            }
        };
        for (name, nested) in names {
            entry(f, name, nested)?;
        }
        for (index, nested) in indices {
            entry(f, index, nested)?;
        }
        f.write_str(")")
    }
}

// -----------------------------------------------------------------------------
// Filter

/// The position of a child item, as seen by a [`Filter`].
#[derive(Clone, Copy, Debug)]
pub(crate) enum ItemKey<'k> {
    Name(&'k str),
    Index { index: usize, len: Option<usize> },
}

/// The include and exclude selections in effect for one value.
#[derive(Clone, Copy, Default, Debug)]
pub(crate) struct Filter<'a> {
    include: Option<&'a Selection>,
    exclude: Option<&'a Selection>,
}

impl<'a> Filter<'a> {
    #[inline]
    pub const fn new(include: Option<&'a Selection>, exclude: Option<&'a Selection>) -> Self {
        Self { include, exclude }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.include.is_none() && self.exclude.is_none()
    }

    /// Returns the filter of the child at `key`, or `None` if the child
    /// is dropped.
    pub fn child(&self, key: ItemKey<'_>) -> Option<Filter<'a>> {
        let exclude = match self.exclude.and_then(|sel| sel.lookup(key)) {
            Some(None) => return None,
            Some(nested) => nested,
            None => None,
        };
        let include = match self.include {
            Some(sel) => sel.lookup(key)?,
            None => None,
        };
        Some(Filter { include, exclude })
    }
}
